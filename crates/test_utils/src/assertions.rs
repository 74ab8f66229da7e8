//! Custom Test Assertions
//!
//! Provides assertion helpers for claims that give more meaningful error
//! messages than standard assertions.

use domain_claims::{Claim, NewClaim};

/// Asserts that a stored claim carries the fields of the request that created it
///
/// `created_at` is only compared when the request supplied one.
pub fn assert_claim_matches(claim: &Claim, request: &NewClaim) {
    assert_eq!(claim.claim_type, request.claim_type, "claim_type mismatch for claim {}", claim.id);
    assert_eq!(claim.amount, request.amount, "amount mismatch for claim {}", claim.id);
    assert_eq!(claim.status, request.status, "status mismatch for claim {}", claim.id);
    assert_eq!(claim.created_by, request.created_by, "created_by mismatch for claim {}", claim.id);
    if let Some(created_at) = request.created_at {
        assert_eq!(claim.created_at, created_at, "created_at mismatch for claim {}", claim.id);
    }
}

/// Asserts that claims carry ids 1..=n in order, with no gaps or duplicates
pub fn assert_sequential_ids(claims: &[Claim]) {
    for (index, claim) in claims.iter().enumerate() {
        let expected = index as u64 + 1;
        assert_eq!(
            claim.id.value(),
            expected,
            "Expected claim at position {} to have id {}, got {}",
            index,
            expected,
            claim.id
        );
    }
}

/// Asserts that two claim collections hold the same records, ignoring order
pub fn assert_same_claims(actual: &[Claim], expected: &[Claim]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Expected {} claims, got {}",
        expected.len(),
        actual.len()
    );
    for claim in expected {
        assert!(
            actual.contains(claim),
            "Claim {} missing from collection",
            claim.id
        );
    }
}
