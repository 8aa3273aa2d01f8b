use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Result};
use attendly_core::repository::default_data_dir;
use tracing::{info, warn};

pub const DEFAULT_PORT: &str = "5001";
pub const PORT_VAR: &str = "PORT";
pub const DATA_DIR_VAR: &str = "ATTENDLY_DATA_DIR";

pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Config {
    /// Command-line values win over the environment, which wins over defaults.
    /// Fails when no data directory can be resolved at all.
    pub fn load(port: Option<u16>, data_dir: Option<PathBuf>) -> Result<Self> {
        let port = match port {
            Some(p) => p,
            None => try_load(PORT_VAR, DEFAULT_PORT)?,
        };

        let data_dir = match data_dir {
            Some(dir) => dir,
            None => match var(DATA_DIR_VAR) {
                Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
                _ => default_data_dir()
                    .map_err(|e| anyhow!("No record store configured ({e}); set {DATA_DIR_VAR} or pass --data-dir"))?,
            },
        };
        info!("Using record store at {}", data_dir.display());

        Ok(Self { port, data_dir })
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("Environment variable {key} not set");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("Environment misconfigured: {key}={raw}: {e}")
    })
}
