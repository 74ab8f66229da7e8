//! Claim factory
//!
//! Turns caller-supplied fields into stored claims. Validation always runs
//! before an identifier is allocated, so a rejected request leaves the store
//! exactly as it was and never burns an id.

use chrono::Utc;
use tracing::{info, warn};

use core_kernel::ClaimId;
use crate::claim::{Claim, ClaimUpdate, NewClaim};
use crate::error::ClaimError;
use crate::store::ClaimStore;

/// Builds validated claims against a borrowed [`ClaimStore`]
///
/// # Example
///
/// ```rust
/// use domain_claims::{ClaimFactory, ClaimStore, NewClaim};
/// use rust_decimal::Decimal;
///
/// let mut store = ClaimStore::new();
/// let claim = ClaimFactory::new(&mut store)
///     .create(NewClaim {
///         claim_type: "auto".to_string(),
///         amount: Decimal::new(5000, 1),
///         status: "pending".to_string(),
///         created_at: None,
///         created_by: "alice".to_string(),
///     })
///     .unwrap();
///
/// assert_eq!(claim.id.value(), 1);
/// assert_eq!(store.len(), 1);
/// ```
pub struct ClaimFactory<'a> {
    store: &'a mut ClaimStore,
}

impl<'a> ClaimFactory<'a> {
    pub fn new(store: &'a mut ClaimStore) -> Self {
        Self { store }
    }

    /// Validates `input`, assigns the next id and stores the claim
    ///
    /// # Errors
    ///
    /// Returns [`ClaimError::Validation`] if the amount is not positive or a
    /// required text field is blank. Nothing is allocated or stored in that case.
    pub fn create(&mut self, input: NewClaim) -> Result<Claim, ClaimError> {
        if let Err(err) = input.validate() {
            warn!(field = %err.field(), error = %err, "Rejected claim");
            return Err(err);
        }

        let claim = Claim {
            id: self.store.allocate_id(),
            claim_type: input.claim_type,
            amount: input.amount,
            status: input.status,
            created_at: input.created_at.unwrap_or_else(Utc::now),
            created_by: input.created_by,
        };

        self.store.put(claim.clone());
        info!(
            claim_id = %claim.id,
            claim_type = %claim.claim_type,
            created_by = %claim.created_by,
            "Claim created"
        );
        Ok(claim)
    }

    /// Applies a partial update to the claim at `id`
    ///
    /// The merge happens here; the store only ever sees a whole-record replace.
    /// Returns `Ok(None)` when no claim has that id.
    pub fn amend(&mut self, id: ClaimId, update: ClaimUpdate) -> Result<Option<Claim>, ClaimError> {
        if let Err(err) = update.validate() {
            warn!(claim_id = %id, field = %err.field(), error = %err, "Rejected claim update");
            return Err(err);
        }

        let Some(current) = self.store.get(id) else {
            return Ok(None);
        };
        let amended = update.apply_to(current);

        let stored = self.store.replace(id, amended).cloned();
        if stored.is_some() {
            info!(claim_id = %id, "Claim amended");
        }
        Ok(stored)
    }
}
