//! Domain-level constants.
//!
//! Placeholder values of the built-in variants and the variable keys used
//! to override them.

// =============================================================================
// Built-in Values
// =============================================================================

/// Base URL of the running API server
pub const DEFAULT_API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Auth0 tenant prefix
pub const DEFAULT_AUTH0_URL: &str = "dev-on139kbu";

/// Audience registered for the Auth0 API
pub const DEFAULT_AUTH0_AUDIENCE: &str = "coffee-shop";

/// Client id generated for the Auth0 application
pub const DEFAULT_AUTH0_CLIENT_ID: &str = "V0N79jSLesW3V6lU7X5O9HTZne2KToUL";

/// Base URL of the running frontend application
pub const DEFAULT_AUTH0_CALLBACK_URL: &str = "http://localhost:8100";

// =============================================================================
// Auth0
// =============================================================================

/// Domain suffix appended to a tenant prefix
pub const AUTH0_DOMAIN_SUFFIX: &str = "auth0.com";

// =============================================================================
// Variable Keys
// =============================================================================

pub const KEY_PRODUCTION: &str = "PRODUCTION";
pub const KEY_API_SERVER_URL: &str = "API_SERVER_URL";
pub const KEY_AUTH0_URL: &str = "AUTH0_URL";
pub const KEY_AUTH0_AUDIENCE: &str = "AUTH0_AUDIENCE";
pub const KEY_AUTH0_CLIENT_ID: &str = "AUTH0_CLIENT_ID";
pub const KEY_AUTH0_CALLBACK_URL: &str = "AUTH0_CALLBACK_URL";

/// Every record key, in dotenv output order
pub const RECORD_KEYS: &[&str] = &[
    KEY_API_SERVER_URL,
    KEY_AUTH0_AUDIENCE,
    KEY_AUTH0_CALLBACK_URL,
    KEY_AUTH0_CLIENT_ID,
    KEY_AUTH0_URL,
    KEY_PRODUCTION,
];

/// Tier selection key (not part of the record)
pub const KEY_APP_ENV: &str = "APP_ENV";

// =============================================================================
// Field Paths
// =============================================================================

pub const FIELD_PRODUCTION: &str = "production";
pub const FIELD_API_SERVER_URL: &str = "apiServerUrl";
pub const FIELD_AUTH0_URL: &str = "auth0.url";
pub const FIELD_AUTH0_AUDIENCE: &str = "auth0.audience";
pub const FIELD_AUTH0_CLIENT_ID: &str = "auth0.clientId";
pub const FIELD_AUTH0_CALLBACK_URL: &str = "auth0.callbackURL";

/// Map a serialized field path to its variable key
pub fn key_for_field(field: &str) -> Option<&'static str> {
    match field {
        FIELD_PRODUCTION => Some(KEY_PRODUCTION),
        FIELD_API_SERVER_URL => Some(KEY_API_SERVER_URL),
        FIELD_AUTH0_URL => Some(KEY_AUTH0_URL),
        FIELD_AUTH0_AUDIENCE => Some(KEY_AUTH0_AUDIENCE),
        FIELD_AUTH0_CLIENT_ID => Some(KEY_AUTH0_CLIENT_ID),
        FIELD_AUTH0_CALLBACK_URL => Some(KEY_AUTH0_CALLBACK_URL),
        _ => None,
    }
}
