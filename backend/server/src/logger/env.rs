//!
//! Current environment related stuff.
//!

use std::path::PathBuf;

use common_utils::consts;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Parent dir where Cargo.toml is stored
pub const CARGO_MANIFEST_DIR: &str = "CARGO_MANIFEST_DIR";

/// Deployment environment, selecting which `config/<env>.toml` is read.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Env {
    /// Development environment.
    #[default]
    Development,
    /// Sandbox environment.
    Sandbox,
    /// Production environment.
    Production,
}

impl Env {
    /// Environment named by `RUN_ENV`, development when unset or unrecognised.
    pub fn current_env() -> Self {
        std::env::var(consts::RUN_ENV).map_or_else(|_| Self::default(), |v| v.parse().unwrap_or_default())
    }

    pub fn config_path(self) -> &'static str {
        match self {
            Self::Development => "development.toml",
            Self::Sandbox => "sandbox.toml",
            Self::Production => "production.toml",
        }
    }
}

/// Base path to look for the `config/` directory.
///
/// Resolves to the workspace root when run through cargo, whichever crate directory the
/// command is started from, and to the working directory otherwise.
pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var(CARGO_MANIFEST_DIR) {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}

///
/// Service name deduced from name of the crate.
///
/// Example: `payment_server`.
///
#[macro_export]
macro_rules! service_name {
    () => {
        env!("CARGO_CRATE_NAME")
    };
}
