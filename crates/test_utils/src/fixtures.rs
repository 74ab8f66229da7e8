//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claim data. Everything here is deterministic except
//! [`StringFixtures::random_user`].

use chrono::{DateTime, TimeZone, Utc};
use fake::faker::internet::en::Username;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for claim amounts
pub struct AmountFixtures;

impl AmountFixtures {
    /// The amount used in the reference auto claim
    pub fn auto_claim() -> Decimal {
        dec!(500.0)
    }

    /// Smallest amount with two decimal places that still passes validation
    pub fn one_cent() -> Decimal {
        dec!(0.01)
    }

    pub fn zero() -> Decimal {
        Decimal::ZERO
    }

    pub fn negative() -> Decimal {
        dec!(-50.00)
    }
}

/// Fixture for claim timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Fixed creation time (Mar 1, 2024 09:30 UTC)
    pub fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    /// The same instant as [`TemporalFixtures::created_at`] in RFC 3339 form
    pub fn created_at_rfc3339() -> &'static str {
        "2024-03-01T09:30:00Z"
    }
}

/// Fixture for text fields
pub struct StringFixtures;

impl StringFixtures {
    pub fn claim_type() -> &'static str {
        "auto"
    }

    pub fn status() -> &'static str {
        "pending"
    }

    pub fn user() -> &'static str {
        "alice"
    }

    /// A generated username for tests that only need some valid creator
    pub fn random_user() -> String {
        Username().fake()
    }
}
