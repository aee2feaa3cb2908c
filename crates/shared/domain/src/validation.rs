//! Record validation.
//!
//! Field rules are declared with `validator` derives on the record types.
//! Rules that `validator` cannot express (URL scheme and host, tenant
//! prefix shape) are checked here.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::constants::{
    AUTH0_DOMAIN_SUFFIX, FIELD_API_SERVER_URL, FIELD_AUTH0_AUDIENCE, FIELD_AUTH0_CALLBACK_URL,
    FIELD_AUTH0_CLIENT_ID, FIELD_AUTH0_URL, FIELD_PRODUCTION,
};
use crate::environment::{Auth0Config, EnvironmentConfig};
use crate::error::{DomainError, DomainResult};

/// Dot-separated host labels, e.g. `dev-on139kbu` or `dev-abc.eu`
static TENANT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)*$")
        .expect("tenant prefix pattern")
});

/// Check whether a value is an http or https URL with a host.
pub fn is_http_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

/// Check whether a value is a tenant prefix without scheme or Auth0 suffix.
pub fn is_tenant_prefix(value: &str) -> bool {
    let suffix = format!(".{}", AUTH0_DOMAIN_SUFFIX);
    TENANT_PREFIX.is_match(value) && value != AUTH0_DOMAIN_SUFFIX && !value.ends_with(&suffix)
}

/// Validate a whole record, collecting every failing field.
pub fn validate_record(config: &EnvironmentConfig) -> DomainResult<()> {
    let mut problems = match config.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect_messages("", &errors),
    };

    let url = config.api_server_url();
    if !url.is_empty() && !is_http_url(url) {
        problems.push(format!("{}: must use http or https with a host", FIELD_API_SERVER_URL));
    }
    problems.extend(auth0_problems(config.auth0()));

    finish(problems)
}

/// Validate the Auth0 group on its own.
pub fn validate_auth0(auth0: &Auth0Config) -> DomainResult<()> {
    let mut problems = match auth0.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect_messages("auth0", &errors),
    };
    problems.extend(auth0_problems(auth0));

    finish(problems)
}

/// Checks beyond the derive rules
fn auth0_problems(auth0: &Auth0Config) -> Vec<String> {
    let mut problems = Vec::new();

    let callback = auth0.callback_url();
    if !callback.is_empty() && !is_http_url(callback) {
        problems.push(format!("{}: must use http or https with a host", FIELD_AUTH0_CALLBACK_URL));
    }

    if !auth0.url().is_empty() && !is_tenant_prefix(auth0.url()) {
        problems.push(format!(
            "{}: must be a tenant prefix without scheme or .{} suffix",
            FIELD_AUTH0_URL, AUTH0_DOMAIN_SUFFIX
        ));
    }

    problems
}

fn finish(mut problems: Vec<String>) -> DomainResult<()> {
    if problems.is_empty() {
        return Ok(());
    }

    problems.sort();
    problems.dedup();
    Err(DomainError::validation(problems.join("; ")))
}

/// Flatten nested validation errors into `path: message` lines
fn collect_messages(prefix: &str, errors: &ValidationErrors) -> Vec<String> {
    errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| {
            let path = field_path(prefix, &field.to_string());
            match kind {
                ValidationErrorsKind::Field(errs) => errs
                    .iter()
                    .map(|e| {
                        let message = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("is invalid ({})", e.code));
                        format!("{}: {}", path, message)
                    })
                    .collect::<Vec<_>>(),
                ValidationErrorsKind::Struct(inner) => collect_messages(&path, inner),
                ValidationErrorsKind::List(items) => items
                    .values()
                    .flat_map(|inner| collect_messages(&path, inner))
                    .collect(),
            }
        })
        .collect()
}

/// Serialized path of a Rust field name
fn field_path(prefix: &str, field: &str) -> String {
    let path = if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    };

    match path.as_str() {
        "production" => FIELD_PRODUCTION.to_string(),
        "api_server_url" => FIELD_API_SERVER_URL.to_string(),
        "auth0.url" => FIELD_AUTH0_URL.to_string(),
        "auth0.audience" => FIELD_AUTH0_AUDIENCE.to_string(),
        "auth0.client_id" => FIELD_AUTH0_CLIENT_ID.to_string(),
        "auth0.callback_url" => FIELD_AUTH0_CALLBACK_URL.to_string(),
        _ => path,
    }
}
