//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims test suites.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for claims
//! - `builders`: Builder for claim creation requests
//! - `assertions`: Custom assertion helpers for claims
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
