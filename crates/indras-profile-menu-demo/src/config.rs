//! Command line configuration for the demo host.

use clap::Parser;
use thiserror::Error;
use tracing::Level;

/// Identities shorter than this render with overlapping head and tail.
const MIN_DISPLAY_CHARS: usize = 8;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "indras-profile-menu-demo")]
#[command(about = "Desktop host for the Indras profile menu")]
pub struct Args {
    /// Identity shown in the profile menu
    #[arg(short, long, env = "INDRAS_IDENTITY")]
    pub identity: String,

    /// Start with the dropdown open
    #[arg(long)]
    pub open: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Errors raised while validating arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("identity must not be empty")]
    EmptyIdentity,

    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Validated demo configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub identity: String,
    pub start_open: bool,
    pub log_level: Level,
}

impl DemoConfig {
    /// Validates parsed arguments.
    ///
    /// The component displays any identity it is given, so this is where the
    /// host rejects values it cannot use.
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let identity = args.identity.trim().to_string();
        if identity.is_empty() {
            return Err(ConfigError::EmptyIdentity);
        }

        let log_level = args
            .log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(args.log_level.clone()))?;

        Ok(Self {
            identity,
            start_open: args.open,
            log_level,
        })
    }

    /// Whether the identity is too short for a clean truncated display.
    pub fn identity_is_short(&self) -> bool {
        self.identity.chars().count() < MIN_DISPLAY_CHARS
    }
}
