//! Claim record and the caller-supplied inputs that produce or amend one

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use core_kernel::{require_non_empty, require_positive, ClaimId};
use crate::error::ClaimError;

/// An insurance claim held by the [`ClaimStore`](crate::ClaimStore)
///
/// Only the [`ClaimFactory`](crate::ClaimFactory) builds these from caller
/// input, so every stored claim has a positive amount and non-empty text fields.
/// The domain type has no wire format; the API layer maps it to its own DTOs.
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    /// Unique identifier, assigned by the store
    pub id: ClaimId,
    /// Classification, e.g. "auto" or "home"
    pub claim_type: String,
    /// Claimed amount, always greater than zero
    pub amount: Decimal,
    /// Free-text status label
    pub status: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// User that created the claim
    pub created_by: String,
}

/// Fields supplied by a caller to create a claim
#[derive(Debug, Clone, PartialEq)]
pub struct NewClaim {
    pub claim_type: String,
    pub amount: Decimal,
    pub status: String,
    /// Defaults to the time of construction when absent
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: String,
}

impl NewClaim {
    /// Checks every field constraint, amount first
    ///
    /// # Errors
    ///
    /// Returns [`ClaimError::Validation`] naming the first field that fails.
    pub fn validate(&self) -> Result<(), ClaimError> {
        require_positive("amount", self.amount)?;
        require_non_empty("claim_type", &self.claim_type)?;
        require_non_empty("status", &self.status)?;
        require_non_empty("created_by", &self.created_by)?;
        Ok(())
    }
}

/// Partial amendment of an existing claim
///
/// Absent fields keep their stored value. The identifier and creation
/// metadata can't be amended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimUpdate {
    pub claim_type: Option<String>,
    pub amount: Option<Decimal>,
    pub status: Option<String>,
}

impl ClaimUpdate {
    /// Checks the fields that are present
    pub fn validate(&self) -> Result<(), ClaimError> {
        if let Some(amount) = self.amount {
            require_positive("amount", amount)?;
        }
        if let Some(claim_type) = &self.claim_type {
            require_non_empty("claim_type", claim_type)?;
        }
        if let Some(status) = &self.status {
            require_non_empty("status", status)?;
        }
        Ok(())
    }

    /// Returns true when no field would change
    pub fn is_empty(&self) -> bool {
        self.claim_type.is_none() && self.amount.is_none() && self.status.is_none()
    }

    /// Produces the amended copy of `claim`
    pub(crate) fn apply_to(self, claim: &Claim) -> Claim {
        Claim {
            id: claim.id,
            claim_type: self.claim_type.unwrap_or_else(|| claim.claim_type.clone()),
            amount: self.amount.unwrap_or(claim.amount),
            status: self.status.unwrap_or_else(|| claim.status.clone()),
            created_at: claim.created_at,
            created_by: claim.created_by.clone(),
        }
    }
}
