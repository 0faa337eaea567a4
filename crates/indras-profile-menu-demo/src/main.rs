//! Entry point for the profile menu demo.
//!
//! Opens a Dioxus desktop window with a header carrying the profile menu.
//! Logout is handled here, not by the component.

mod config;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use indras_profile_menu::{truncate_identity, ProfileMenu, PROFILE_MENU_CSS};

use crate::config::{Args, DemoConfig};

/// Page styles around the menu.
const PAGE_CSS: &str = r#"
body { margin: 0; font-family: sans-serif; background: #141418; color: #e8e8ee; }
.demo-header { display: flex; justify-content: space-between; align-items: center; padding: 12px 20px; border-bottom: 1px solid #33333d; }
.demo-title { font-size: 16px; letter-spacing: 0.04em; }
.demo-body { padding: 40px 20px; }
.demo-signin { padding: 6px 12px; border-radius: 6px; border: 1px solid #33333d; background: transparent; color: inherit; cursor: pointer; }
"#;

/// Validated configuration, set once before launch.
static DEMO_CONFIG: OnceLock<DemoConfig> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = DemoConfig::from_args(args)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting profile menu demo");
    if config.identity_is_short() {
        tracing::warn!(
            identity = %config.identity,
            "Identity is shorter than 8 characters, truncated label will overlap"
        );
    }

    DEMO_CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("demo configuration already set"))?;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Profile Menu - Indras Network")
                        .with_inner_size(LogicalSize::new(640, 420)),
                )
                .with_custom_head(format!(
                    "<style>{}</style><style>{}</style>",
                    PAGE_CSS, PROFILE_MENU_CSS
                )),
        )
        .launch(RootApp);

    Ok(())
}

/// Root component that owns the signed-in flag.
#[component]
fn RootApp() -> Element {
    let Some(config) = DEMO_CONFIG.get() else {
        return rsx! { div { "Demo configuration missing" } };
    };
    let mut signed_in = use_signal(|| true);

    let identity = config.identity.clone();
    let short = truncate_identity(&identity);
    let start_open = config.start_open;

    rsx! {
        header {
            class: "demo-header",
            span { class: "demo-title", "Indras Network" }
            if signed_in() {
                ProfileMenu {
                    identity,
                    default_open: start_open,
                    on_logout: move |_| {
                        tracing::info!("Logout requested for {}", short);
                        signed_in.set(false);
                    },
                }
            }
        }
        main {
            class: "demo-body",
            if signed_in() {
                p { "Click the avatar to open the profile menu." }
            } else {
                p { "Signed out." }
                button {
                    class: "demo-signin",
                    onclick: move |_| {
                        tracing::info!("Signing back in");
                        signed_in.set(true);
                    },
                    "Sign in again"
                }
            }
        }
    }
}
