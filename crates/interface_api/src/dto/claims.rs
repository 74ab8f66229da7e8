//! Claims DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{decimal_from_f64, ClaimId};
use domain_claims::{Claim, ClaimError, ClaimUpdate, NewClaim};

/// Body of `POST /claims`
///
/// `amount` arrives as a JSON float and is converted to `Decimal` here, so an
/// amount `Decimal` can't represent fails validation on the `amount` field.
#[derive(Debug, Deserialize)]
pub struct CreateClaimRequest {
    pub claim_type: String,
    pub amount: f64,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: String,
}

impl TryFrom<CreateClaimRequest> for NewClaim {
    type Error = ClaimError;

    fn try_from(request: CreateClaimRequest) -> Result<Self, Self::Error> {
        Ok(NewClaim {
            claim_type: request.claim_type,
            amount: decimal_from_f64("amount", request.amount)?,
            status: request.status,
            created_at: request.created_at,
            created_by: request.created_by,
        })
    }
}

/// Body of `PUT /claims/:id`
#[derive(Debug, Deserialize)]
pub struct UpdateClaimRequest {
    pub claim_type: Option<String>,
    pub amount: Option<f64>,
    pub status: Option<String>,
}

impl TryFrom<UpdateClaimRequest> for ClaimUpdate {
    type Error = ClaimError;

    fn try_from(request: UpdateClaimRequest) -> Result<Self, Self::Error> {
        let amount = request
            .amount
            .map(|amount| decimal_from_f64("amount", amount))
            .transpose()?;

        Ok(ClaimUpdate {
            claim_type: request.claim_type,
            amount,
            status: request.status,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub id: ClaimId,
    pub claim_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id,
            claim_type: claim.claim_type,
            amount: claim.amount,
            status: claim.status,
            created_at: claim.created_at,
            created_by: claim.created_by,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(amount: f64) -> CreateClaimRequest {
        CreateClaimRequest {
            claim_type: "auto".to_string(),
            amount,
            status: "pending".to_string(),
            created_at: None,
            created_by: "alice".to_string(),
        }
    }

    #[test]
    fn test_amount_converted_exactly() {
        let input = NewClaim::try_from(request(123.456789)).unwrap();
        assert_eq!(input.amount, dec!(123.456789));
    }

    #[test]
    fn test_unrepresentable_amount_is_validation_error() {
        let err = NewClaim::try_from(request(1e-30)).unwrap_err();
        assert_eq!(
            err,
            ClaimError::Validation {
                field: "amount".to_string(),
                message: "out of supported range".to_string(),
            }
        );
    }

    #[test]
    fn test_update_amount_checked() {
        let update = UpdateClaimRequest {
            claim_type: None,
            amount: Some(1e30),
            status: None,
        };
        assert_eq!(ClaimUpdate::try_from(update).unwrap_err().field(), "amount");
    }
}
