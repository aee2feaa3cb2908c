//! envctl - inspect and check the environment configuration.
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the resolved record
//! envctl show --format dotenv
//!
//! # Validate what the app would load
//! envctl --tier production check
//!
//! # Starting point for a .env file
//! envctl template > .env
//! ```

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
