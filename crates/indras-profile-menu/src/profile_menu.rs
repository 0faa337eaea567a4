//! Avatar button with a toggleable identity dropdown.

use dioxus::prelude::*;

use crate::identity::{avatar_title, truncate_identity, AVATAR_GLYPH, IDENTITY_LABEL, LOGOUT_LABEL};
use crate::menu_state::{MenuAction, MenuEffect, ProfileMenuState};

/// Profile avatar that opens a dropdown with the truncated identity and a
/// logout button.
///
/// The dropdown state is local to each instance. `on_logout` is called as-is
/// on every logout click.
#[component]
pub fn ProfileMenu(
    identity: String,
    on_logout: EventHandler<()>,
    #[props(default)] default_open: bool,
) -> Element {
    let mut menu = use_signal(|| ProfileMenuState::new(default_open));

    let title = avatar_title(&identity);
    let short = truncate_identity(&identity);
    let is_open = menu.read().is_open();

    rsx! {
        div {
            class: "profile-menu",
            div {
                class: "profile-avatar",
                title: "{title}",
                onclick: move |_| {
                    menu.write().dispatch(MenuAction::AvatarClicked);
                },
                "{AVATAR_GLYPH}"
            }

            if is_open {
                div {
                    class: "profile-dropdown",
                    p {
                        strong { "{IDENTITY_LABEL}:" }
                        br {}
                        span { class: "principal-id", "{short}" }
                    }
                    button {
                        class: "profile-logout",
                        onclick: move |_| {
                            let effect = menu.write().dispatch(MenuAction::LogoutClicked);
                            if let Some(MenuEffect::Logout) = effect {
                                on_logout.call(());
                            }
                        },
                        "{LOGOUT_LABEL}"
                    }
                }
            }
        }
    }
}
