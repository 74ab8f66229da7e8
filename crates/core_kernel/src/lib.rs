//! Core Kernel - Foundational types and utilities for the claims system
//!
//! This crate provides the building blocks shared by the domain and API layers:
//! - Sequential identifiers and the allocator that hands them out
//! - Field validation helpers
//! - The common error type

pub mod identifiers;
pub mod validation;
pub mod error;

pub use identifiers::{ClaimId, IdSequence};
pub use validation::{decimal_from_f64, require_non_empty, require_positive};
pub use error::{CoreError, ParseIdError};
