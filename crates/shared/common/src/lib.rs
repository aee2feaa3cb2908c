//! Common utilities for loading the environment configuration.
//!
//! This crate provides:
//! - Unified error handling for every loading step
//! - Variable sources (process environment, in-memory maps)
//! - The layered loader and the dotenv/JSON codecs
//! - The process-wide, set-once configuration holder

pub mod codec;
pub mod error;
pub mod global;
pub mod loader;
pub mod source;

pub use codec::{from_dotenv, from_json, from_kv, to_dotenv, to_json, to_kv};
pub use error::{AppError, AppResult};
pub use global::{environment, environment_or_load, install};
pub use loader::ConfigLoader;
pub use source::{MapSource, ProcessEnv, VarSource};
