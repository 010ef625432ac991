//! Identity and signing handlers — `GET /api/identity`, `POST /api/sign`.

use agidentity_api::{IdentityResponse, SignRequest, SignResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::error::{require, AppError};

use super::AppState;

/// `GET /api/identity`
pub async fn get_identity(State(state): State<AppState>) -> Json<IdentityResponse> {
    Json(IdentityResponse::new(state.identity.public_key_hex()))
}

/// `POST /api/sign`
///
/// Returns 400 `invalid_parameter` when `message` or `protocol` is empty.
pub async fn sign(
    State(state): State<AppState>,
    body: Result<Json<SignRequest>, JsonRejection>,
) -> Result<Json<SignResponse>, AppError> {
    let Json(req) = body?;
    require("message", &req.message)?;
    require("protocol", &req.protocol)?;

    let signature = state.identity.sign(&req.protocol, &req.message);
    tracing::debug!(protocol = %req.protocol, "signed message");
    Ok(Json(SignResponse::new(signature)))
}
