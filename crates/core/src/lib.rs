//! Core utilities for the Luas area calculator tools
//!
//! This crate provides shared functionality used by the calculator and map front ends:
//!
//! - **Error handling**: Structured errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults
//! - **Validation**: Fluent validator used to check configuration values
//!
//! # Example
//!
//! ```rust,no_run
//! use luas_core::config::Config;
//!
//! let config = Config::load(None).expect("config");
//! println!("precision = {}", config.schema.display.precision);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod validation;

pub use error::{exit_codes, Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::validation::{ValidationResult, Validator};
}
