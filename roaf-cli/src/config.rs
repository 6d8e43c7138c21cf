//! Environment-backed configuration with dotenv discovery.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::UserDirs;
use roaf_provider_norkart::ProviderConfig;

/// Dotenv file names probed relative to the working directory, after the
/// home-directory dotfile.
const LOCAL_CANDIDATES: [&str; 2] = [".roaf", ".env"];

/// Everything required to run, resolved once at startup.
#[derive(Debug)]
pub(crate) struct Config {
    /// Path of the append-only debug log.
    pub log_file: PathBuf,
    /// Provider connection and address parameters.
    pub provider: ProviderConfig,
}

impl Config {
    /// Resolve the effective configuration.
    ///
    /// Probes `$HOME/.roaf`, `./.roaf` and `./.env` in that order and loads
    /// the first file that exists, without overwriting variables already set
    /// in the process environment. Every variable is required.
    ///
    /// # Errors
    ///
    /// Fails when a dotenv file exists but cannot be parsed, or when a
    /// required variable is missing.
    pub fn load() -> Result<Self> {
        if let Some(path) = dotenv_file() {
            dotenvy::from_path(&path)
                .with_context(|| format!("failed to load {}", path.display()))?;
        }

        Ok(Self {
            log_file: PathBuf::from(required("ROAF_LOGFILE")?),
            provider: ProviderConfig {
                proxy_url: required("NORKART_PROXY")?,
                api_base: required("ROAF_BASEURI")?,
                municipality: required("ROAF_KOMMNR")?,
                street_name: required("ROAF_GATENAVN")?,
                house_number: required("ROAF_HUSNR")?,
                street_code: required("ROAF_GATEKODE")?,
                app_key: required("ROAF_APPKEY")?,
            },
        })
    }
}

/// First existing dotenv candidate, home dotfile before local files.
fn dotenv_file() -> Option<PathBuf> {
    let home = UserDirs::new().map(|dirs| dirs.home_dir().join(".roaf"));
    home.into_iter()
        .chain(LOCAL_CANDIDATES.iter().copied().map(PathBuf::from))
        .find(|candidate| candidate.exists())
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{key} is not set"))
}
