//! # SLE Plot Config
//!
//! Type-safe configuration for the SLE Plot tools.
//!
//! This crate provides the TOML schema, defaults, loading, and validation.
//! Every field is optional in the file; missing fields take their defaults.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
