//! Subcommands and the helpers they share.

pub mod config;
pub mod extract;
pub mod run;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::debug;

use elex_core::{ElexConfig, ProviderKind};

/// Text provider selection on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ProviderArg {
    /// Document AI when configured, synthetic text otherwise
    Auto,
    /// Google Cloud Document AI
    DocumentAi,
    /// Synthetic text derived from the file name (no credentials needed)
    Synthetic,
    /// Text layer embedded in the PDF
    Embedded,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Auto => ProviderKind::Auto,
            ProviderArg::DocumentAi => ProviderKind::DocumentAi,
            ProviderArg::Synthetic => ProviderKind::Synthetic,
            ProviderArg::Embedded => ProviderKind::Embedded,
        }
    }
}

/// Default location of the user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("elex")
        .join("config.json")
}

/// Load the effective configuration.
///
/// Defaults, then the config file (explicit path, or the user file when it
/// exists), then `.env` and process environment.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ElexConfig> {
    let mut config = match config_path {
        Some(path) => ElexConfig::from_file(Path::new(path))?,
        None => {
            let user_path = default_config_path();
            if user_path.exists() {
                debug!("Loading config from {}", user_path.display());
                ElexConfig::from_file(&user_path)?
            } else {
                ElexConfig::default()
            }
        }
    };

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }
    config.apply_env(|key| std::env::var(key).ok());

    Ok(config)
}
