//! Comprehensive tests for domain_claims

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::ClaimId;
use domain_claims::{ClaimError, ClaimFactory, ClaimStore, ClaimUpdate};
use test_utils::{
    assert_claim_matches, assert_same_claims, assert_sequential_ids, invalid_new_claim_strategy,
    new_claim_strategy, AmountFixtures, NewClaimBuilder, StringFixtures, TemporalFixtures,
};

// ============================================================================
// Factory Tests
// ============================================================================

mod factory_tests {
    use super::*;

    #[test]
    fn test_reference_auto_claim() {
        let mut store = ClaimStore::new();
        let request = NewClaimBuilder::new().build();

        let claim = ClaimFactory::new(&mut store).create(request.clone()).unwrap();

        assert_eq!(claim.id, ClaimId::new(1));
        assert_eq!(claim.status, "pending");
        assert_claim_matches(&claim, &request);
        assert_eq!(store.get(claim.id), Some(&claim));
    }

    #[test]
    fn test_created_at_defaults_to_now() {
        let mut store = ClaimStore::new();
        let before = chrono::Utc::now();
        let claim = ClaimFactory::new(&mut store)
            .create(NewClaimBuilder::new().build())
            .unwrap();
        let after = chrono::Utc::now();

        assert!(claim.created_at >= before && claim.created_at <= after);
    }

    #[test]
    fn test_explicit_created_at() {
        let mut store = ClaimStore::new();
        let request = NewClaimBuilder::new()
            .with_created_at(TemporalFixtures::created_at())
            .build();

        let claim = ClaimFactory::new(&mut store).create(request).unwrap();
        assert_eq!(claim.created_at, TemporalFixtures::created_at());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut store = ClaimStore::new();
        let request = NewClaimBuilder::new()
            .with_amount(AmountFixtures::zero())
            .build();

        let err = ClaimFactory::new(&mut store).create(request).unwrap_err();

        assert!(matches!(err, ClaimError::Validation { ref field, .. } if field == "amount"));
        assert_eq!(store.next_id(), ClaimId::new(1));
        assert!(store.is_empty());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut store = ClaimStore::new();
        let request = NewClaimBuilder::new()
            .with_amount(AmountFixtures::negative())
            .build();

        assert!(ClaimFactory::new(&mut store).create(request).is_err());
    }

    #[test]
    fn test_smallest_amount_accepted() {
        let mut store = ClaimStore::new();
        let request = NewClaimBuilder::new()
            .with_amount(AmountFixtures::one_cent())
            .build();

        assert!(ClaimFactory::new(&mut store).create(request).is_ok());
    }

    #[test]
    fn test_empty_claim_type_rejected() {
        let mut store = ClaimStore::new();
        let request = NewClaimBuilder::new().with_claim_type("").build();

        let err = ClaimFactory::new(&mut store).create(request).unwrap_err();
        assert_eq!(err.field(), "claim_type");
    }

    #[test]
    fn test_empty_status_rejected() {
        let mut store = ClaimStore::new();
        let request = NewClaimBuilder::new().with_status("").build();

        let err = ClaimFactory::new(&mut store).create(request).unwrap_err();
        assert_eq!(err.field(), "status");
    }

    #[test]
    fn test_failed_create_does_not_leave_gap() {
        let mut store = ClaimStore::new();
        let mut factory = ClaimFactory::new(&mut store);

        let first = factory.create(NewClaimBuilder::new().build()).unwrap();
        assert!(factory
            .create(NewClaimBuilder::new().with_created_by(" ").build())
            .is_err());
        let second = factory.create(NewClaimBuilder::new().build()).unwrap();

        assert_eq!(first.id, ClaimId::new(1));
        assert_eq!(second.id, ClaimId::new(2));
    }

    #[test]
    fn test_generated_creator() {
        let mut store = ClaimStore::new();
        let user = StringFixtures::random_user();
        let claim = ClaimFactory::new(&mut store)
            .create(NewClaimBuilder::new().with_created_by(user.clone()).build())
            .unwrap();

        assert_eq!(claim.created_by, user);
    }
}

// ============================================================================
// Amendment Tests
// ============================================================================

mod amend_tests {
    use super::*;

    #[test]
    fn test_amend_status_only() {
        let mut store = ClaimStore::new();
        let mut factory = ClaimFactory::new(&mut store);
        let original = factory.create(NewClaimBuilder::new().build()).unwrap();

        let update = ClaimUpdate {
            status: Some("approved".to_string()),
            ..Default::default()
        };
        let amended = factory.amend(original.id, update).unwrap().unwrap();

        assert_eq!(amended.status, "approved");
        assert_eq!(amended.amount, original.amount);
        assert_eq!(amended.created_at, original.created_at);
        assert_eq!(store.get(original.id), Some(&amended));
    }

    #[test]
    fn test_amend_rejects_non_positive_amount() {
        let mut store = ClaimStore::new();
        let mut factory = ClaimFactory::new(&mut store);
        let original = factory.create(NewClaimBuilder::new().build()).unwrap();

        let update = ClaimUpdate {
            amount: Some(dec!(0)),
            ..Default::default()
        };
        assert!(factory.amend(original.id, update).is_err());
        assert_eq!(store.get(original.id), Some(&original));
    }

    #[test]
    fn test_amend_does_not_allocate() {
        let mut store = ClaimStore::new();
        let mut factory = ClaimFactory::new(&mut store);
        let original = factory.create(NewClaimBuilder::new().build()).unwrap();

        let update = ClaimUpdate {
            amount: Some(dec!(750)),
            ..Default::default()
        };
        factory.amend(original.id, update).unwrap();

        assert_eq!(store.next_id(), ClaimId::new(2));
    }
}

// ============================================================================
// Store Tests
// ============================================================================

mod store_tests {
    use super::*;

    #[test]
    fn test_list_all_contains_every_claim() {
        let mut store = ClaimStore::new();
        let mut factory = ClaimFactory::new(&mut store);
        let a = factory.create(NewClaimBuilder::new().build()).unwrap();
        let b = factory
            .create(NewClaimBuilder::new().with_claim_type("home").build())
            .unwrap();
        let c = factory
            .create(NewClaimBuilder::new().with_claim_type("health").build())
            .unwrap();

        let all = store.list_all();
        assert_same_claims(&all, &[a.clone(), b.clone(), c.clone()]);
        for claim in [&a, &b, &c] {
            assert_eq!(store.get(claim.id), Some(claim));
        }
    }

    #[test]
    fn test_list_all_empty() {
        let store = ClaimStore::new();
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_get_unknown_id() {
        let store = ClaimStore::new();
        assert!(store.get(ClaimId::new(99)).is_none());
    }

    #[test]
    fn test_delete_then_get() {
        let mut store = ClaimStore::new();
        let claim = ClaimFactory::new(&mut store)
            .create(NewClaimBuilder::new().build())
            .unwrap();

        assert!(store.delete(claim.id));
        assert!(store.get(claim.id).is_none());
    }

    #[test]
    fn test_delete_unknown_leaves_store() {
        let mut store = ClaimStore::new();
        let claim = ClaimFactory::new(&mut store)
            .create(NewClaimBuilder::new().build())
            .unwrap();

        assert!(!store.delete(ClaimId::new(42)));
        assert_eq!(store.list_all(), vec![claim]);
        assert_eq!(store.next_id(), ClaimId::new(2));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = ClaimStore::new();
        let first = ClaimFactory::new(&mut store)
            .create(NewClaimBuilder::new().build())
            .unwrap();
        store.delete(first.id);

        let second = ClaimFactory::new(&mut store)
            .create(NewClaimBuilder::new().build())
            .unwrap();
        assert_eq!(second.id, ClaimId::new(2));
    }

    #[test]
    fn test_replace_returns_latest() {
        let mut store = ClaimStore::new();
        let claim = ClaimFactory::new(&mut store)
            .create(NewClaimBuilder::new().build())
            .unwrap();

        let mut replacement = claim.clone();
        replacement.status = "closed".to_string();
        store.replace(claim.id, replacement.clone());

        assert_eq!(store.get(claim.id), Some(&replacement));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_ids_are_one_to_n(requests in prop::collection::vec(new_claim_strategy(), 1..50)) {
        let mut store = ClaimStore::new();
        let mut factory = ClaimFactory::new(&mut store);

        let created: Vec<_> = requests
            .iter()
            .map(|request| factory.create(request.clone()).unwrap())
            .collect();

        assert_sequential_ids(&created);
        for (claim, request) in created.iter().zip(&requests) {
            assert_claim_matches(claim, request);
        }
        prop_assert_eq!(store.len(), requests.len());
    }

    #[test]
    fn prop_invalid_requests_never_touch_store(
        valid in prop::collection::vec(new_claim_strategy(), 0..10),
        invalid in invalid_new_claim_strategy(),
    ) {
        let mut store = ClaimStore::new();
        for request in valid {
            ClaimFactory::new(&mut store).create(request).unwrap();
        }
        let before = store.list_all();
        let next = store.next_id();

        let result = ClaimFactory::new(&mut store).create(invalid);

        prop_assert!(result.is_err());
        prop_assert_eq!(store.list_all(), before);
        prop_assert_eq!(store.next_id(), next);
    }
}
