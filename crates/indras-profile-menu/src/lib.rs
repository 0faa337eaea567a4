//! Profile menu component for Indras Network applications.
//!
//! A clickable avatar that toggles a dropdown with the member's truncated
//! identity and a logout button. Session handling stays with the caller,
//! which supplies the identity and the logout callback.

pub mod identity;
pub mod menu_state;
pub mod profile_menu;

pub use identity::{
    avatar_title, truncate_identity, AVATAR_GLYPH, ELLIPSIS, HEAD_CHARS, IDENTITY_LABEL,
    LOGOUT_LABEL, TAIL_CHARS,
};
pub use menu_state::{MenuAction, MenuEffect, ProfileMenuState};
pub use profile_menu::ProfileMenu;

/// Stylesheet for the profile menu classes.
pub const PROFILE_MENU_CSS: &str = include_str!("../assets/profile_menu.css");
