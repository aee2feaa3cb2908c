//! Process-wide configuration holder.
//!
//! The record is set once and read-only afterwards; every read returns the
//! same `&'static` reference.

use domain::EnvironmentConfig;
use once_cell::sync::OnceCell;

use crate::error::{AppError, AppResult};
use crate::loader::ConfigLoader;
use crate::source::VarSource;

static ENVIRONMENT: OnceCell<EnvironmentConfig> = OnceCell::new();

/// Install the process-wide record.
///
/// The record is validated first. Installing a value equal to the current
/// one is a no-op; a different value is rejected.
pub fn install(config: EnvironmentConfig) -> AppResult<&'static EnvironmentConfig> {
    config.validate_record()?;

    let mut candidate = Some(config);
    let installed = ENVIRONMENT.get_or_init(|| {
        tracing::debug!("Installing environment configuration");
        candidate.take().unwrap_or_default()
    });

    match candidate {
        Some(rejected) if rejected != *installed => Err(AppError::AlreadyInitialized),
        _ => Ok(installed),
    }
}

/// The installed record.
pub fn environment() -> AppResult<&'static EnvironmentConfig> {
    ENVIRONMENT.get().ok_or(AppError::NotInitialized)
}

/// The installed record, loading and installing it on first use.
pub fn environment_or_load<S: VarSource>(
    loader: &ConfigLoader<S>,
) -> AppResult<&'static EnvironmentConfig> {
    ENVIRONMENT.get_or_try_init(|| loader.load())
}
