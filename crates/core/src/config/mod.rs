//! Configuration loading and schema definitions
//!
//! Shared configuration types used by the calculator and map tools.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
