//! Claims Domain
//!
//! This crate owns the insurance claim record and everything needed to keep a
//! consistent set of them in memory.
//!
//! # Flow
//!
//! ```text
//! caller fields -> ClaimFactory (validate, allocate id) -> ClaimStore (put) -> get / list_all
//! ```
//!
//! The store does no locking of its own. Callers that share it between tasks
//! wrap it in a single lock so that id allocation and insertion happen together.

pub mod claim;
pub mod store;
pub mod factory;
pub mod error;

pub use claim::{Claim, ClaimUpdate, NewClaim};
pub use store::ClaimStore;
pub use factory::ClaimFactory;
pub use error::ClaimError;
