//! Partial records used to override a base record.

use serde::{Deserialize, Serialize};

/// Auth0 fields that may be overridden
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Auth0Overlay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, rename = "callbackURL", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl Auth0Overlay {
    /// Combine two overlays; fields set in `other` win.
    pub fn merge(self, other: Auth0Overlay) -> Self {
        Self {
            url: other.url.or(self.url),
            audience: other.audience.or(self.audience),
            client_id: other.client_id.or(self.client_id),
            callback_url: other.callback_url.or(self.callback_url),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.audience.is_none()
            && self.client_id.is_none()
            && self.callback_url.is_none()
    }
}

/// Record fields that may be overridden.
///
/// Deserializes from a partial JSON document using the record's field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnvironmentOverlay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_server_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth0: Option<Auth0Overlay>,
}

impl EnvironmentOverlay {
    /// Combine two overlays; fields set in `other` win.
    pub fn merge(self, other: EnvironmentOverlay) -> Self {
        let auth0 = match (self.auth0, other.auth0) {
            (Some(lower), Some(higher)) => Some(lower.merge(higher)),
            (lower, higher) => higher.or(lower),
        };
        Self {
            production: other.production.or(self.production),
            api_server_url: other.api_server_url.or(self.api_server_url),
            auth0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.production.is_none()
            && self.api_server_url.is_none()
            && self.auth0.as_ref().map_or(true, Auth0Overlay::is_empty)
    }

    /// Names of the fields this overlay sets, as serialized paths
    pub fn field_paths(&self) -> Vec<&'static str> {
        use crate::constants::*;

        let mut fields = Vec::new();
        if self.production.is_some() {
            fields.push(FIELD_PRODUCTION);
        }
        if self.api_server_url.is_some() {
            fields.push(FIELD_API_SERVER_URL);
        }
        if let Some(auth0) = &self.auth0 {
            if auth0.url.is_some() {
                fields.push(FIELD_AUTH0_URL);
            }
            if auth0.audience.is_some() {
                fields.push(FIELD_AUTH0_AUDIENCE);
            }
            if auth0.client_id.is_some() {
                fields.push(FIELD_AUTH0_CLIENT_ID);
            }
            if auth0.callback_url.is_some() {
                fields.push(FIELD_AUTH0_CALLBACK_URL);
            }
        }
        fields
    }
}
