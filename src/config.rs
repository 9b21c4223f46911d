use std::env::{self, VarError};
use std::net::SocketAddr;

use tracing::Level;

use crate::error::AppError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    Lambda,
    Local,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub runtime: Runtime,
    pub bind_addr: SocketAddr,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Builds the config from any variable source. Unset variables fall back
    /// to their defaults; set but unparsable ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let var = |key: &str| -> Result<Option<String>, AppError> {
            match lookup(key) {
                Ok(value) => Ok(Some(value)),
                Err(VarError::NotPresent) => Ok(None),
                Err(e) => Err(e.into()),
            }
        };

        let environment = var("ENVIRONMENT")?.unwrap_or_else(|| "development".to_string());

        let runtime = match var("RUNTIME")?.as_deref() {
            None | Some("lambda") => Runtime::Lambda,
            Some("local") => Runtime::Local,
            Some(other) => {
                return Err(AppError::InvalidConfig(format!(
                    "RUNTIME must be lambda or local, got {other:?}"
                )))
            }
        };

        let bind_addr = var("BIND_ADDR")?
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::InvalidConfig(format!("BIND_ADDR: {e}")))?;

        let log_level = match var("LOG_LEVEL")? {
            Some(level) => level
                .parse::<Level>()
                .map_err(|e| AppError::InvalidConfig(format!("LOG_LEVEL: {e}")))?,
            None => Level::INFO,
        };

        Ok(Config {
            environment,
            runtime,
            bind_addr,
            log_level,
        })
    }
}
