//! Test Data Builders
//!
//! Provides a builder for claim creation requests with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::{DateTime, Utc};
use domain_claims::NewClaim;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::fixtures::{AmountFixtures, StringFixtures};

/// Builder for claim creation requests
#[derive(Debug, Clone)]
pub struct NewClaimBuilder {
    claim_type: String,
    amount: Decimal,
    status: String,
    created_at: Option<DateTime<Utc>>,
    created_by: String,
}

impl Default for NewClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewClaimBuilder {
    /// Creates a builder for the reference auto claim
    pub fn new() -> Self {
        Self {
            claim_type: StringFixtures::claim_type().to_string(),
            amount: AmountFixtures::auto_claim(),
            status: StringFixtures::status().to_string(),
            created_at: None,
            created_by: StringFixtures::user().to_string(),
        }
    }

    /// Sets the claim type
    pub fn with_claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_type = claim_type.into();
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets an explicit creation time
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the creating user
    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    /// Builds the domain input
    pub fn build(self) -> NewClaim {
        NewClaim {
            claim_type: self.claim_type,
            amount: self.amount,
            status: self.status,
            created_at: self.created_at,
            created_by: self.created_by,
        }
    }

    /// Builds the JSON body a client would POST
    ///
    /// `created_at` is left out entirely when unset.
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "claim_type": self.claim_type,
            "amount": self.amount.to_f64(),
            "status": self.status,
            "created_by": self.created_by,
        });
        if let Some(created_at) = self.created_at {
            body["created_at"] = json!(created_at.to_rfc3339());
        }
        body
    }
}
