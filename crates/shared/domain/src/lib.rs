//! Domain layer - The environment configuration record.
//!
//! This crate contains the typed record, its built-in variants and the
//! rules a record must satisfy to be usable. It performs no I/O; loading
//! and process-wide storage live in the `common` crate.

pub mod constants;
pub mod environment;
pub mod error;
pub mod overlay;
pub mod tier;
pub mod validation;

pub use constants::*;
pub use environment::{Auth0Config, EnvironmentConfig};
pub use error::{DomainError, DomainResult};
pub use overlay::{Auth0Overlay, EnvironmentOverlay};
pub use tier::Tier;
