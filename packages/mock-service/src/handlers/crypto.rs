//! Encryption handlers — `POST /api/encrypt`, `POST /api/decrypt`.

use agidentity_api::{DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{
    error::{require, AppError},
    vault::{SealContext, VaultError},
};

use super::AppState;

/// `POST /api/encrypt`
pub async fn encrypt(
    State(state): State<AppState>,
    body: Result<Json<EncryptRequest>, JsonRejection>,
) -> Result<Json<EncryptResponse>, AppError> {
    let Json(req) = body?;
    require("data", &req.data)?;
    let context = context(&req.protocol, &req.key_id, &req.counterparty)?;

    let ciphertext = state
        .vault
        .seal(&req.data, context)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(EncryptResponse::new(ciphertext)))
}

/// `POST /api/decrypt`
///
/// Returns 400 `decryption_failed` when the ciphertext is malformed, was
/// not issued by this service, or was sealed under a different context.
pub async fn decrypt(
    State(state): State<AppState>,
    body: Result<Json<DecryptRequest>, JsonRejection>,
) -> Result<Json<DecryptResponse>, AppError> {
    let Json(req) = body?;
    require("ciphertext", &req.ciphertext)?;
    let context = context(&req.protocol, &req.key_id, &req.counterparty)?;

    match state.vault.open(&req.ciphertext, &context) {
        Ok(plaintext) => Ok(Json(DecryptResponse::new(plaintext))),
        Err(e @ (VaultError::Poisoned | VaultError::Full(_))) => {
            Err(AppError::Internal(e.to_string()))
        }
        Err(e) => {
            tracing::debug!(key_id = %context.key_id, "decrypt rejected: {e}");
            Err(AppError::DecryptionFailed(e.to_string()))
        }
    }
}

fn context(protocol: &str, key_id: &str, counterparty: &str) -> Result<SealContext, AppError> {
    require("protocol", protocol)?;
    require("keyId", key_id)?;
    require("counterparty", counterparty)?;
    Ok(SealContext {
        protocol: protocol.to_string(),
        key_id: key_id.to_string(),
        counterparty: counterparty.to_string(),
    })
}
