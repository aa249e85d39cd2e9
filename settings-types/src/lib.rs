//! # Settings Types
//!
//! Configuration schema and business rules for the backend service.
//! This crate has ZERO IO dependencies - only the typed sections, the
//! semantic validator, and the error types for every loading stage.
//!
//! ## Architecture
//!
//! This crate is the innermost layer of the configuration subsystem:
//! - `schema` - The `Config` aggregate and its four sections
//! - `validate` - Cross-field invariants applied after population
//! - `error` - Populate, validation, and load-stage error types
//!
//! Acquisition (dotenv discovery, environment snapshot, population) lives
//! in `settings-loader`, which depends on this crate.

pub mod error;
pub mod schema;
pub mod validate;

// Re-export commonly used types
pub use error::{LoadError, PopulateError, ValidationError};
pub use schema::{Config, DatabaseParams, GeneralParams, HttpServerParams, S3Params};
