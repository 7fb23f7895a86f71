//! # say-core
//!
//! Core types and error handling for the SAY likelihood crates.
//!
//! This crate provides:
//! - The shared error type (the only raised error is the log1p domain error)
//! - [`LikelihoodKind`], the configuration value a fit engine uses to pick
//!   the per-bin likelihood

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::LikelihoodKind;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
