//! Variable sources.
//!
//! A [`VarSource`] answers key lookups. The loader reads overrides through
//! this trait so tests can substitute the process environment.

use std::collections::HashMap;
use std::path::Path;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::error::{AppError, AppResult};

/// Key-value lookup used by the loader.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait VarSource: Send + Sync {
    /// Value of `key`, if set
    fn var(&self, key: &str) -> Option<String>;
}

/// Process environment, with `.env` files loaded into it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Load `.env` from the current directory or its parents, if present.
    pub fn new() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded {}", path.display()),
            Err(e) if e.not_found() => tracing::debug!("No .env file found"),
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }
        Self
    }

    /// Load a specific env file. Variables already set are kept.
    pub fn with_env_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path)?;
        tracing::debug!("Loaded {}", path.display());
        Ok(Self)
    }
}

impl VarSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSource {
    vars: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Parse dotenv-formatted text.
    pub fn from_dotenv(text: &str) -> AppResult<Self> {
        let vars = dotenvy::from_read_iter(text.as_bytes()).collect::<Result<_, _>>()?;
        Ok(Self { vars })
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl VarSource for MapSource {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Parse a boolean variable (`true/false/1/0/yes/no`, any case).
pub fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(AppError::invalid_value(key, value)),
    }
}
