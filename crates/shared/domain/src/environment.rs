//! Environment configuration record and its Auth0 group.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{
    AUTH0_DOMAIN_SUFFIX, DEFAULT_API_SERVER_URL, DEFAULT_AUTH0_AUDIENCE,
    DEFAULT_AUTH0_CALLBACK_URL, DEFAULT_AUTH0_CLIENT_ID, DEFAULT_AUTH0_URL,
};
use crate::error::{DomainError, DomainResult};
use crate::overlay::{Auth0Overlay, EnvironmentOverlay};
use crate::tier::Tier;
use crate::validation::{validate_auth0, validate_record};

/// Identity provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", try_from = "RawAuth0Config")]
pub struct Auth0Config {
    /// Tenant prefix, e.g. `dev-on139kbu`
    #[validate(length(min = 1, message = "must not be empty"))]
    url: String,
    /// API identifier used to scope issued access tokens
    #[validate(length(min = 1, message = "must not be empty"))]
    audience: String,
    /// Public client identifier
    #[validate(length(min = 1, message = "must not be empty"))]
    client_id: String,
    /// Redirect target after authentication
    #[serde(rename = "callbackURL")]
    #[validate(
        length(min = 1, message = "must not be empty"),
        url(message = "must be a valid URL")
    )]
    callback_url: String,
}

impl Auth0Config {
    /// Build and validate the Auth0 group.
    pub fn new(
        url: impl Into<String>,
        audience: impl Into<String>,
        client_id: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> DomainResult<Self> {
        let auth0 = Self {
            url: url.into(),
            audience: audience.into(),
            client_id: client_id.into(),
            callback_url: callback_url.into(),
        };
        validate_auth0(&auth0)?;
        Ok(auth0)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Full tenant domain, e.g. `dev-on139kbu.auth0.com`
    pub fn tenant_domain(&self) -> String {
        format!("{}.{}", self.url, AUTH0_DOMAIN_SUFFIX)
    }

    /// Token issuer of the tenant
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.tenant_domain())
    }

    fn with_overlay(self, overlay: Auth0Overlay) -> Self {
        Self {
            url: overlay.url.unwrap_or(self.url),
            audience: overlay.audience.unwrap_or(self.audience),
            client_id: overlay.client_id.unwrap_or(self.client_id),
            callback_url: overlay.callback_url.unwrap_or(self.callback_url),
        }
    }
}

/// Wire shape of [`Auth0Config`], validated on conversion
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawAuth0Config {
    url: String,
    audience: String,
    client_id: String,
    #[serde(rename = "callbackURL")]
    callback_url: String,
}

impl TryFrom<RawAuth0Config> for Auth0Config {
    type Error = DomainError;

    fn try_from(raw: RawAuth0Config) -> DomainResult<Self> {
        Self::new(raw.url, raw.audience, raw.client_id, raw.callback_url)
    }
}

/// Deployment configuration record.
///
/// Fields are read through accessors only. Every way of building a record
/// from outside values (`new`, `with_overlay`, deserialization) validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", try_from = "RawEnvironmentConfig")]
pub struct EnvironmentConfig {
    production: bool,
    #[validate(
        length(min = 1, message = "must not be empty"),
        url(message = "must be a valid URL")
    )]
    api_server_url: String,
    #[validate(nested)]
    auth0: Auth0Config,
}

/// Wire shape of [`EnvironmentConfig`], validated on conversion
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawEnvironmentConfig {
    production: bool,
    api_server_url: String,
    auth0: Auth0Config,
}

impl TryFrom<RawEnvironmentConfig> for EnvironmentConfig {
    type Error = DomainError;

    fn try_from(raw: RawEnvironmentConfig) -> DomainResult<Self> {
        Self::new(raw.production, raw.api_server_url, raw.auth0)
    }
}

impl EnvironmentConfig {
    /// Build and validate a record.
    pub fn new(
        production: bool,
        api_server_url: impl Into<String>,
        auth0: Auth0Config,
    ) -> DomainResult<Self> {
        let config = Self {
            production,
            api_server_url: api_server_url.into(),
            auth0,
        };
        config.validate_record()?;
        Ok(config)
    }

    /// Development variant
    pub fn development() -> Self {
        Self::builtin(false)
    }

    /// Production variant; same shape, `production` set
    pub fn production() -> Self {
        Self::builtin(true)
    }

    pub fn for_tier(tier: Tier) -> Self {
        Self::builtin(tier.is_production())
    }

    /// Variant selected by the `production` build feature
    pub fn build_default() -> Self {
        Self::for_tier(Tier::build_default())
    }

    fn builtin(production: bool) -> Self {
        Self {
            production,
            api_server_url: DEFAULT_API_SERVER_URL.to_string(),
            auth0: Auth0Config {
                url: DEFAULT_AUTH0_URL.to_string(),
                audience: DEFAULT_AUTH0_AUDIENCE.to_string(),
                client_id: DEFAULT_AUTH0_CLIENT_ID.to_string(),
                callback_url: DEFAULT_AUTH0_CALLBACK_URL.to_string(),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.production
    }

    pub fn tier(&self) -> Tier {
        Tier::from(self.production)
    }

    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth0(&self) -> &Auth0Config {
        &self.auth0
    }

    /// Join the API base URL and an endpoint path with a single `/`.
    pub fn api_url(&self, path: &str) -> String {
        let base = self.api_server_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Return a new, validated record with the overlay's fields replacing
    /// these. Merge overlays first when several layers apply.
    pub fn with_overlay(self, overlay: EnvironmentOverlay) -> DomainResult<Self> {
        let auth0 = match overlay.auth0 {
            Some(auth0) => self.auth0.with_overlay(auth0),
            None => self.auth0,
        };
        let config = Self {
            production: overlay.production.unwrap_or(self.production),
            api_server_url: overlay.api_server_url.unwrap_or(self.api_server_url),
            auth0,
        };
        config.validate_record()?;
        Ok(config)
    }

    /// Check every field rule.
    pub fn validate_record(&self) -> DomainResult<()> {
        validate_record(self)
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::build_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[test]
    fn test_development_values() {
        let env = EnvironmentConfig::development();

        assert!(!env.is_production());
        assert_eq!(env.api_server_url(), "http://127.0.0.1:5000");
        assert_eq!(env.auth0().url(), "dev-on139kbu");
        assert_eq!(env.auth0().audience(), "coffee-shop");
        assert_eq!(env.auth0().client_id(), "V0N79jSLesW3V6lU7X5O9HTZne2KToUL");
        assert_eq!(env.auth0().callback_url(), "http://localhost:8100");
    }

    #[test]
    fn test_builtin_variants_are_valid() {
        assert!(EnvironmentConfig::development().validate_record().is_ok());
        assert!(EnvironmentConfig::production().validate_record().is_ok());
    }

    #[test]
    fn test_production_variant_same_shape() {
        let dev = EnvironmentConfig::development();
        let prod = EnvironmentConfig::production();

        assert!(prod.is_production());
        assert_eq!(prod.tier(), Tier::Production);
        assert_eq!(prod.api_server_url(), dev.api_server_url());
        assert_eq!(prod.auth0(), dev.auth0());
    }

    #[test]
    fn test_build_default_follows_feature() {
        let expected = cfg!(feature = "production");
        assert_eq!(EnvironmentConfig::build_default().is_production(), expected);
    }

    #[test]
    fn test_auth0_new_rejects_empty_fields() {
        let err = Auth0Config::new("", "coffee-shop", "", "http://localhost:8100").unwrap_err();

        match err {
            DomainError::Validation(msg) => {
                assert!(msg.contains("auth0.url: must not be empty"), "{}", msg);
                assert!(msg.contains("auth0.clientId: must not be empty"), "{}", msg);
                assert!(!msg.contains("auth0.audience"), "{}", msg);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_auth0_new_rejects_bad_callback() {
        let err = Auth0Config::new("dev-on139kbu", "coffee-shop", "abc", "localhost:8100")
            .unwrap_err();
        assert!(err.to_string().contains("auth0.callbackURL"), "{}", err);
    }

    #[test]
    fn test_new_rejects_bad_api_url() {
        let auth0 = EnvironmentConfig::development().auth0().clone();
        let err = EnvironmentConfig::new(false, "ftp://127.0.0.1", auth0).unwrap_err();
        assert!(err.to_string().contains("apiServerUrl"), "{}", err);
    }

    #[test]
    fn test_new_accepts_ipv6_host() {
        let auth0 = Auth0Config::new("dev-on139kbu", "coffee-shop", "abc", "http://[::1]:8100")
            .unwrap();
        let env = EnvironmentConfig::new(false, "http://[::1]:5000", auth0).unwrap();
        assert_eq!(env.api_url("drinks"), "http://[::1]:5000/drinks");
    }

    #[test]
    fn test_auth0_rejects_full_domain_as_tenant() {
        let result = Auth0Config::new(
            "dev-on139kbu.auth0.com",
            "coffee-shop",
            "abc",
            "http://localhost:8100",
        );
        assert!(result.unwrap_err().to_string().contains("auth0.url"));
    }

    #[test]
    fn test_auth0_accepts_regional_tenant() {
        let auth0 =
            Auth0Config::new("dev-abc.eu", "coffee-shop", "abc", "http://localhost:8100").unwrap();
        assert_eq!(auth0.tenant_domain(), "dev-abc.eu.auth0.com");
    }

    #[test]
    fn test_api_url_joins_single_slash() {
        let env = EnvironmentConfig::development();
        assert_eq!(env.api_url("/drinks"), "http://127.0.0.1:5000/drinks");
        assert_eq!(env.api_url("drinks-detail"), "http://127.0.0.1:5000/drinks-detail");
        assert_eq!(env.api_url(""), "http://127.0.0.1:5000");

        let auth0 = Auth0Config::new("t", "a", "c", "http://localhost:8100").unwrap();
        let env = EnvironmentConfig::new(false, "http://api.local/", auth0).unwrap();
        assert_eq!(env.api_url("/drinks"), "http://api.local/drinks");
    }

    #[test]
    fn test_tenant_domain_and_issuer() {
        let auth0 = EnvironmentConfig::development().auth0().clone();
        assert_eq!(auth0.tenant_domain(), "dev-on139kbu.auth0.com");
        assert_eq!(auth0.issuer(), "https://dev-on139kbu.auth0.com/");
    }

    #[test]
    fn test_overlay_replaces_only_present_fields() {
        let overlay = EnvironmentOverlay {
            production: Some(true),
            auth0: Some(Auth0Overlay {
                audience: Some("espresso".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let env = EnvironmentConfig::development().with_overlay(overlay).unwrap();

        assert!(env.is_production());
        assert_eq!(env.api_server_url(), "http://127.0.0.1:5000");
        assert_eq!(env.auth0().audience(), "espresso");
        assert_eq!(env.auth0().url(), "dev-on139kbu");
    }

    #[test]
    fn test_overlay_result_is_validated() {
        let overlay = EnvironmentOverlay {
            api_server_url: Some(String::new()),
            ..Default::default()
        };

        let err = EnvironmentConfig::development().with_overlay(overlay).unwrap_err();
        assert!(err.to_string().contains("apiServerUrl: must not be empty"), "{}", err);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(EnvironmentConfig::development()).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["apiServerUrl", "auth0", "production"]);

        let mut auth0_keys: Vec<_> = object["auth0"].as_object().unwrap().keys().cloned().collect();
        auth0_keys.sort();
        assert_eq!(auth0_keys, vec!["audience", "callbackURL", "clientId", "url"]);
        assert_eq!(object["production"], serde_json::Value::Bool(false));
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let json = r#"{
            "production": false,
            "apiServerUrl": "http://127.0.0.1:5000",
            "debug": true,
            "auth0": {
                "url": "dev-on139kbu",
                "audience": "coffee-shop",
                "clientId": "abc",
                "callbackURL": "http://localhost:8100"
            }
        }"#;
        assert!(serde_json::from_str::<EnvironmentConfig>(json).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{
            "production": false,
            "apiServerUrl": "",
            "auth0": {"url": "", "audience": "", "clientId": "", "callbackURL": "nope"}
        }"#;
        let err = serde_json::from_str::<EnvironmentConfig>(json).unwrap_err();
        assert!(err.to_string().contains("auth0.url: must not be empty"), "{}", err);
    }

    #[test]
    fn test_deserialize_valid_record() {
        let json = serde_json::to_string(&EnvironmentConfig::production()).unwrap();
        let env: EnvironmentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(env, EnvironmentConfig::production());
    }
}
