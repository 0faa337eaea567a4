//! Identity display helpers for the profile menu.

/// Label shown above the truncated identity.
pub const IDENTITY_LABEL: &str = "Principal ID";

/// Glyph rendered inside the avatar.
pub const AVATAR_GLYPH: &str = "👤";

/// Text of the logout button.
pub const LOGOUT_LABEL: &str = "Logout";

/// Leading characters kept by [`truncate_identity`].
pub const HEAD_CHARS: usize = 5;

/// Trailing characters kept by [`truncate_identity`].
pub const TAIL_CHARS: usize = 3;

/// Separator between head and tail.
pub const ELLIPSIS: &str = "...";

/// Shorten an identity to its first 5 and last 3 characters joined by `...`.
///
/// Works on chars, not bytes. Identities shorter than 8 characters are not
/// rejected: head and tail are clamped to the input and may overlap, so
/// `"short"` becomes `"short...ort"` and `""` becomes `"..."`.
pub fn truncate_identity(identity: &str) -> String {
    let chars: Vec<char> = identity.chars().collect();
    let head: String = chars.iter().take(HEAD_CHARS).collect();
    let tail_start = chars.len().saturating_sub(TAIL_CHARS);
    let tail: String = chars[tail_start..].iter().collect();
    format!("{head}{ELLIPSIS}{tail}")
}

/// Tooltip text for the avatar, carrying the full identity.
pub fn avatar_title(identity: &str) -> String {
    format!("{IDENTITY_LABEL}: {identity}")
}
