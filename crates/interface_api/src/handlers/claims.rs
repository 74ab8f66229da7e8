//! Claims handlers
//!
//! Every handler takes the store lock for the whole operation, so id
//! allocation and insertion are never interleaved between requests.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use core_kernel::ClaimId;
use domain_claims::{ClaimError, ClaimFactory, ClaimUpdate, NewClaim};

use crate::{AppState, error::ApiError};
use crate::dto::claims::*;

fn not_found(id: ClaimId) -> ApiError {
    ApiError::NotFound(format!("Claim with ID {} not found", id))
}

/// Parses the `:id` segment, accepting `7` or `CLM-7`
fn claim_id(path: Result<Path<String>, PathRejection>) -> Result<ClaimId, ApiError> {
    let Path(raw) = path?;
    Ok(raw.parse::<ClaimId>()?)
}

/// Creates a new claim
pub async fn create_claim(
    State(state): State<AppState>,
    payload: Result<Json<CreateClaimRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let Json(request) = payload
        .map_err(|rejection| ApiError::BadRequest(format!("Failed to create claim: {}", rejection.body_text())))?;

    let failed = |err: ClaimError| ApiError::Validation(format!("Failed to create claim: {}", err));
    let input = NewClaim::try_from(request).map_err(failed)?;

    let mut store = state.claims.write().await;
    let claim = ClaimFactory::new(&mut store).create(input).map_err(failed)?;

    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Lists all claims
pub async fn list_claims(
    State(state): State<AppState>,
) -> Json<Vec<ClaimResponse>> {
    let claims = state.claims.read().await.list_all();
    Json(claims.into_iter().map(ClaimResponse::from).collect())
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id = claim_id(path)?;
    let store = state.claims.read().await;
    let claim = store.get(id).cloned().ok_or_else(|| not_found(id))?;
    Ok(Json(claim.into()))
}

/// Applies a partial update to a claim
pub async fn update_claim(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateClaimRequest>, JsonRejection>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id = claim_id(path)?;
    let Json(request) = payload?;

    let failed = |err: ClaimError| ApiError::Validation(format!("Failed to update claim: {}", err));
    let update = ClaimUpdate::try_from(request).map_err(failed)?;

    let mut store = state.claims.write().await;
    let claim = ClaimFactory::new(&mut store)
        .amend(id, update)
        .map_err(failed)?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(claim.into()))
}

/// Deletes a claim
pub async fn delete_claim(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = claim_id(path)?;
    if state.claims.write().await.delete(id) {
        tracing::info!(claim_id = %id, "Claim deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
