//! # SLE Plot Common
//!
//! Shared types, error handling, and logging for the SLE Plot tools.
//!
//! This crate provides the foundational pieces used by the configuration,
//! graph, and command-line crates in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::*;
pub use types::*;
