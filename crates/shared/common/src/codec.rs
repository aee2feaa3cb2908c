//! Textual encodings of the record.
//!
//! The key-value form uses the variable keys (`API_SERVER_URL`, ...) and is
//! written as a dotenv file. The JSON form uses the record's field names.
//! Decoding always validates.

use std::collections::BTreeMap;

use domain::{
    Auth0Config, EnvironmentConfig, KEY_API_SERVER_URL, KEY_AUTH0_AUDIENCE,
    KEY_AUTH0_CALLBACK_URL, KEY_AUTH0_CLIENT_ID, KEY_AUTH0_URL, KEY_PRODUCTION, RECORD_KEYS,
};

use crate::error::{AppError, AppResult};
use crate::source::{parse_bool, MapSource, VarSource};

/// Flatten a record to its variable keys.
pub fn to_kv(config: &EnvironmentConfig) -> BTreeMap<&'static str, String> {
    let auth0 = config.auth0();
    BTreeMap::from([
        (KEY_PRODUCTION, config.is_production().to_string()),
        (KEY_API_SERVER_URL, config.api_server_url().to_string()),
        (KEY_AUTH0_URL, auth0.url().to_string()),
        (KEY_AUTH0_AUDIENCE, auth0.audience().to_string()),
        (KEY_AUTH0_CLIENT_ID, auth0.client_id().to_string()),
        (KEY_AUTH0_CALLBACK_URL, auth0.callback_url().to_string()),
    ])
}

/// Rebuild a record from a source holding every variable key.
pub fn from_kv(source: &dyn VarSource) -> AppResult<EnvironmentConfig> {
    let get = |key: &str| source.var(key).ok_or_else(|| AppError::missing_key(key));

    let production = parse_bool(KEY_PRODUCTION, &get(KEY_PRODUCTION)?)?;
    let auth0 = Auth0Config::new(
        get(KEY_AUTH0_URL)?,
        get(KEY_AUTH0_AUDIENCE)?,
        get(KEY_AUTH0_CLIENT_ID)?,
        get(KEY_AUTH0_CALLBACK_URL)?,
    )?;
    Ok(EnvironmentConfig::new(production, get(KEY_API_SERVER_URL)?, auth0)?)
}

/// Render a dotenv file, one `KEY="value"` line per key.
pub fn to_dotenv(config: &EnvironmentConfig) -> String {
    let kv = to_kv(config);
    RECORD_KEYS
        .iter()
        .filter_map(|key| kv.get(key).map(|value| (key, value)))
        .map(|(key, value)| format!("{}=\"{}\"\n", key, escape_dotenv(value)))
        .collect()
}

/// Parse a dotenv file holding every variable key.
pub fn from_dotenv(text: &str) -> AppResult<EnvironmentConfig> {
    from_kv(&MapSource::from_dotenv(text)?)
}

/// Render pretty-printed JSON.
pub fn to_json(config: &EnvironmentConfig) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Parse a full JSON record. Deserializing the record validates it.
pub fn from_json(text: &str) -> AppResult<EnvironmentConfig> {
    Ok(serde_json::from_str(text)?)
}

fn escape_dotenv(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | '"' | '$' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
