//! # Settings Loader
//!
//! Configuration acquisition for the backend service. This crate is the
//! adapter between the ambient environment and the typed schema in
//! `settings-types`:
//! - `dotenv` - Locate and parse an optional `.env` file near the working
//!   directory
//! - `source` - Immutable layered key/value snapshot (process environment
//!   wins over file pairs)
//! - `populate` - Map the snapshot onto the schema with defaults, required
//!   enforcement, and type coercion
//! - `manager` - Orchestrate the load and lend read-only access
//!
//! The process environment is never mutated. The `.env` layer and the
//! process snapshot are merged into an [`EnvSource`] that is injected into
//! the populator, so nothing here races other threads reading the
//! environment.

pub mod dotenv;
pub mod populate;
pub mod source;

mod manager;

pub use manager::Manager;
pub use populate::populate;
pub use source::EnvSource;
