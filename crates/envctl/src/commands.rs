//! Command implementations.
//!
//! Each command returns the text to print so it can be tested without a
//! terminal.

use std::path::PathBuf;

use common::{
    to_dotenv, to_json, to_kv, AppError, AppResult, ConfigLoader, ProcessEnv, VarSource,
};
use domain::{key_for_field, EnvironmentConfig, Tier, RECORD_KEYS};

use crate::cli::OutputFormat;

/// Loader over the process environment.
///
/// Loads `env_file` when given, otherwise `.env` if one is found. An
/// explicit `tier` wins over `APP_ENV`.
pub fn loader(
    config: Option<PathBuf>,
    tier: Option<Tier>,
    env_file: Option<PathBuf>,
) -> AppResult<ConfigLoader<ProcessEnv>> {
    let source = match env_file {
        Some(path) => ProcessEnv::with_env_file(path)?,
        None => ProcessEnv::new(),
    };

    let mut loader = ConfigLoader::new(source);
    if let Some(path) = config {
        loader = loader.with_file(path);
    }
    if let Some(tier) = tier {
        loader = loader.with_tier(tier);
    }
    Ok(loader)
}

/// Render the resolved record
pub fn show<S: VarSource>(loader: &ConfigLoader<S>, format: OutputFormat) -> AppResult<String> {
    render(&loader.load()?, format)
}

/// Load and validate the record
pub fn check<S: VarSource>(loader: &ConfigLoader<S>) -> AppResult<String> {
    let config = loader.load()?;
    Ok(format!("ok ({})", config.tier()))
}

/// Look up one value by variable key or field path
pub fn get<S: VarSource>(loader: &ConfigLoader<S>, key: &str) -> AppResult<String> {
    let var_key = resolve_key(key)?;
    let config = loader.load()?;
    to_kv(&config)
        .remove(var_key)
        .ok_or_else(|| AppError::missing_key(var_key))
}

/// Render a built-in variant
pub fn template(tier: Tier, format: OutputFormat) -> AppResult<String> {
    render(&EnvironmentConfig::for_tier(tier), format)
}

fn render(config: &EnvironmentConfig, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(config),
        OutputFormat::Dotenv => Ok(to_dotenv(config).trim_end().to_string()),
    }
}

fn resolve_key(key: &str) -> AppResult<&'static str> {
    if let Some(var_key) = key_for_field(key) {
        return Ok(var_key);
    }
    RECORD_KEYS
        .iter()
        .copied()
        .find(|k| k.eq_ignore_ascii_case(key))
        .ok_or_else(|| AppError::invalid_value("key", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::MapSource;

    fn loader() -> ConfigLoader<MapSource> {
        ConfigLoader::new(MapSource::new().with("AUTH0_AUDIENCE", "flat-white"))
            .with_tier(Tier::Development)
    }

    #[test]
    fn test_get_by_field_path_and_key() {
        assert_eq!(get(&loader(), "auth0.audience").unwrap(), "flat-white");
        assert_eq!(get(&loader(), "AUTH0_AUDIENCE").unwrap(), "flat-white");
        assert_eq!(get(&loader(), "production").unwrap(), "false");
        assert_eq!(
            get(&loader(), "auth0_client_id").unwrap(),
            "V0N79jSLesW3V6lU7X5O9HTZne2KToUL"
        );
    }

    #[test]
    fn test_get_unknown_key() {
        let err = get(&loader(), "auth0.secret").unwrap_err();
        assert_eq!(err.code(), "INVALID_VALUE");
    }

    #[test]
    fn test_check_reports_tier() {
        assert_eq!(check(&loader()).unwrap(), "ok (development)");
    }

    #[test]
    fn test_check_fails_on_invalid_record() {
        let loader = ConfigLoader::new(MapSource::new().with("API_SERVER_URL", "not a url"));
        let err = check(&loader).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_show_dotenv() {
        let text = show(&loader(), OutputFormat::Dotenv).unwrap();
        assert!(text.contains("AUTH0_AUDIENCE=\"flat-white\""));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_template_production_json() {
        let text = template(Tier::Production, OutputFormat::Json).unwrap();
        assert!(text.contains("\"production\": true"));
        assert!(text.contains("\"callbackURL\": \"http://localhost:8100\""));
    }
}
