//! In-memory claim store
//!
//! The store exclusively owns every claim and the allocator that hands out
//! their identifiers. It performs no validation; records reach it through the
//! [`ClaimFactory`](crate::ClaimFactory).

use std::collections::BTreeMap;

use core_kernel::{ClaimId, IdSequence};
use tracing::debug;

use crate::claim::Claim;

/// Owner of the claim collection and identifier allocator
///
/// Absence is never an error here: lookups return `Option` and `delete`
/// returns whether anything was removed.
#[derive(Debug, Default)]
pub struct ClaimStore {
    claims: BTreeMap<ClaimId, Claim>,
    ids: IdSequence,
}

impl ClaimStore {
    /// Creates an empty store whose first identifier will be 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unused identifier and advances the counter
    pub fn allocate_id(&mut self) -> ClaimId {
        self.ids.next()
    }

    /// Returns the identifier the next allocation will produce
    pub fn next_id(&self) -> ClaimId {
        ClaimId::new(self.ids.peek())
    }

    /// Inserts or overwrites the record at `claim.id`
    pub fn put(&mut self, claim: Claim) {
        debug!(claim_id = %claim.id, "Storing claim");
        self.claims.insert(claim.id, claim);
    }

    /// Returns the record for `id`, if any
    pub fn get(&self, id: ClaimId) -> Option<&Claim> {
        self.claims.get(&id)
    }

    /// Returns a snapshot of every stored claim
    ///
    /// Claims come back in ascending id order, which for factory-created
    /// claims is also creation order. Callers shouldn't depend on it.
    pub fn list_all(&self) -> Vec<Claim> {
        self.claims.values().cloned().collect()
    }

    /// Overwrites the record at `id` only if one already exists
    ///
    /// The stored record keeps `id` regardless of the id carried by `claim`.
    pub fn replace(&mut self, id: ClaimId, mut claim: Claim) -> Option<&Claim> {
        let slot = self.claims.get_mut(&id)?;
        claim.id = id;
        *slot = claim;
        debug!(claim_id = %id, "Replaced claim");
        Some(&*slot)
    }

    /// Removes the record at `id`, returning whether one was removed
    pub fn delete(&mut self, id: ClaimId) -> bool {
        let removed = self.claims.remove(&id).is_some();
        if removed {
            debug!(claim_id = %id, "Deleted claim");
        }
        removed
    }

    /// Number of stored claims
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}
