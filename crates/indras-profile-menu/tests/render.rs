//! Server-side render checks for the profile menu.

use dioxus::prelude::*;
use indras_profile_menu::ProfileMenu;

const IDENTITY: &str = "abcdefghij123";

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn closed_menu() -> Element {
    rsx! {
        ProfileMenu { identity: IDENTITY.to_string(), on_logout: move |_| {} }
    }
}

fn open_menu() -> Element {
    rsx! {
        ProfileMenu { identity: IDENTITY.to_string(), on_logout: move |_| {}, default_open: true }
    }
}

fn open_short_menu() -> Element {
    rsx! {
        ProfileMenu { identity: "short".to_string(), on_logout: move |_| {}, default_open: true }
    }
}

#[test]
fn test_initial_render_shows_only_avatar() {
    let html = render(closed_menu);
    assert!(html.contains("profile-menu"));
    assert!(html.contains("profile-avatar"));
    assert!(html.contains("👤"));
    assert!(!html.contains("profile-dropdown"));
    assert!(!html.contains("Logout"));
}

#[test]
fn test_avatar_title_carries_full_identity() {
    let html = render(closed_menu);
    assert!(html.contains("Principal ID: abcdefghij123"));
}

#[test]
fn test_open_render_shows_dropdown() {
    let html = render(open_menu);
    assert!(html.contains("profile-avatar"));
    assert!(html.contains("profile-dropdown"));
    assert!(html.contains("<strong>"));
    assert!(html.contains("Principal ID:"));
    assert!(html.contains("abcde...123"));
    assert!(html.contains("Logout"));
}

#[test]
fn test_short_identity_renders() {
    let html = render(open_short_menu);
    assert!(html.contains("short...ort"));
}
