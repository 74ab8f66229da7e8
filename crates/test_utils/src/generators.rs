//! Property-Based Test Generators
//!
//! Provides proptest strategies for claim inputs, both valid and invalid.

use domain_claims::NewClaim;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for amounts that pass validation (0.01 up to 10,000,000.00)
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for amounts that fail validation (zero or negative)
pub fn non_positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..=0i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for non-blank text fields
pub fn label_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,15}"
}

/// Strategy for text that fails validation
pub fn blank_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), " {1,4}", "\t{1,2}"]
}

/// Strategy for complete, valid claim requests
pub fn new_claim_strategy() -> impl Strategy<Value = NewClaim> {
    (
        label_strategy(),
        positive_amount_strategy(),
        label_strategy(),
        label_strategy(),
    )
        .prop_map(|(claim_type, amount, status, created_by)| NewClaim {
            claim_type,
            amount,
            status,
            created_at: None,
            created_by,
        })
}

/// Strategy for claim requests that fail validation on exactly one field
pub fn invalid_new_claim_strategy() -> impl Strategy<Value = NewClaim> {
    prop_oneof![
        (new_claim_strategy(), non_positive_amount_strategy())
            .prop_map(|(claim, amount)| NewClaim { amount, ..claim }),
        (new_claim_strategy(), blank_strategy())
            .prop_map(|(claim, claim_type)| NewClaim { claim_type, ..claim }),
        (new_claim_strategy(), blank_strategy())
            .prop_map(|(claim, status)| NewClaim { status, ..claim }),
        (new_claim_strategy(), blank_strategy())
            .prop_map(|(claim, created_by)| NewClaim { created_by, ..claim }),
    ]
}
