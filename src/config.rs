use std::{env, fmt::Display, net::SocketAddr, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0} must be set when HELATRADE_SOURCE={1}")]
    Missing(&'static str, &'static str),
}

/// Where the catalog is loaded from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Static,
    Sqlite,
    Remote,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Static => "static",
            SourceKind::Sqlite => "sqlite",
            SourceKind::Remote => "remote",
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(SourceKind::Static),
            "sqlite" => Ok(SourceKind::Sqlite),
            "remote" => Ok(SourceKind::Remote),
            other => Err(format!("expected static, sqlite or remote, got '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub workers: usize,
    pub source: SourceKind,
    pub db_path: String,
    pub source_url: Option<String>,
    pub post_page_size: usize,
    pub product_page_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source: SourceKind = try_load(&lookup, "HELATRADE_SOURCE", "static")?;
        let source_url = lookup("HELATRADE_SOURCE_URL").filter(|s| !s.trim().is_empty());

        if source == SourceKind::Remote && source_url.is_none() {
            return Err(ConfigError::Missing("HELATRADE_SOURCE_URL", "remote"));
        }

        Ok(Self {
            addr: try_load(&lookup, "HELATRADE_ADDR", "127.0.0.1:3000")?,
            workers: positive(try_load(&lookup, "HELATRADE_WORKERS", "8")?, "HELATRADE_WORKERS")?,
            source,
            db_path: try_load(&lookup, "HELATRADE_DB", "helatrade.sqlite3")?,
            source_url,
            post_page_size: positive(
                try_load(&lookup, "HELATRADE_POST_PAGE_SIZE", "3")?,
                "HELATRADE_POST_PAGE_SIZE",
            )?,
            product_page_size: positive(
                try_load(&lookup, "HELATRADE_PRODUCT_PAGE_SIZE", "12")?,
                "HELATRADE_PRODUCT_PAGE_SIZE",
            )?,
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }
    })
}

fn positive(value: usize, key: &'static str) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(value)
}
