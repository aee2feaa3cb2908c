//! Layered configuration loader.
//!
//! Layers, lowest precedence first:
//! 1. the built-in variant for the selected tier
//! 2. an optional JSON overlay file
//! 3. variables from the [`VarSource`]
//!
//! Layers are merged first and the result is validated once.

use std::fs;
use std::path::{Path, PathBuf};

use domain::{
    Auth0Overlay, EnvironmentConfig, EnvironmentOverlay, Tier, KEY_API_SERVER_URL, KEY_APP_ENV,
    KEY_AUTH0_AUDIENCE, KEY_AUTH0_CALLBACK_URL, KEY_AUTH0_CLIENT_ID, KEY_AUTH0_URL,
    KEY_PRODUCTION,
};

use crate::error::AppResult;
use crate::source::{parse_bool, VarSource};

/// Builds an [`EnvironmentConfig`] from layered sources.
#[derive(Debug)]
pub struct ConfigLoader<S: VarSource> {
    source: S,
    file: Option<PathBuf>,
    tier: Option<Tier>,
}

impl<S: VarSource> ConfigLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            file: None,
            tier: None,
        }
    }

    /// Apply a JSON overlay file. The file must exist.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Force the base tier, ignoring `APP_ENV`.
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Resolve and validate the record.
    pub fn load(&self) -> AppResult<EnvironmentConfig> {
        let tier = self.resolve_tier()?;
        tracing::debug!("Base variant: {}", tier);

        let mut overlay = EnvironmentOverlay::default();
        if let Some(path) = &self.file {
            let file_overlay = read_overlay_file(path)?;
            tracing::debug!(
                "Applying {} ({} fields)",
                path.display(),
                file_overlay.field_paths().len()
            );
            overlay = overlay.merge(file_overlay);
        }

        let var_overlay = overlay_from_source(&self.source)?;
        if !var_overlay.is_empty() {
            tracing::debug!("Applying variables: {}", var_overlay.field_paths().join(", "));
            overlay = overlay.merge(var_overlay);
        }

        let config = EnvironmentConfig::for_tier(tier).with_overlay(overlay)?;
        tracing::info!(
            tier = %config.tier(),
            api_server_url = config.api_server_url(),
            "Environment configuration loaded"
        );
        Ok(config)
    }

    fn resolve_tier(&self) -> AppResult<Tier> {
        if let Some(tier) = self.tier {
            return Ok(tier);
        }
        match self.source.var(KEY_APP_ENV) {
            Some(value) => Ok(value.parse()?),
            None => Ok(Tier::build_default()),
        }
    }
}

/// Read a partial record from a JSON file.
pub fn read_overlay_file(path: &Path) -> AppResult<EnvironmentOverlay> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Collect the record keys present in a source.
pub fn overlay_from_source(source: &dyn VarSource) -> AppResult<EnvironmentOverlay> {
    let production = source
        .var(KEY_PRODUCTION)
        .map(|v| parse_bool(KEY_PRODUCTION, &v))
        .transpose()?;

    let auth0 = Auth0Overlay {
        url: source.var(KEY_AUTH0_URL),
        audience: source.var(KEY_AUTH0_AUDIENCE),
        client_id: source.var(KEY_AUTH0_CLIENT_ID),
        callback_url: source.var(KEY_AUTH0_CALLBACK_URL),
    };

    Ok(EnvironmentOverlay {
        production,
        api_server_url: source.var(KEY_API_SERVER_URL),
        auth0: (!auth0.is_empty()).then_some(auth0),
    })
}
