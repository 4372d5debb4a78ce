//! Terminal presentation and interactive sessions for the Luas tools
//!
//! Provides the pieces the `luas` binary is assembled from:
//! - Status messages and output format selection
//! - Mapping of library errors onto the shared error codes
//! - Text and JSON renderings of results, shapes, units and markers
//! - Line-oriented calculator and map sessions

#![warn(missing_docs)]

pub mod errors;
pub mod map;
pub mod output;
pub mod render;
pub mod session;

pub use output::{OutputFormat, Reply, Status};
