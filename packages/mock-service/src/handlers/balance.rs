//! Wallet balance handler — `GET /api/balance`.

use agidentity_api::BalanceResponse;
use axum::{extract::State, Json};

use super::AppState;

/// `GET /api/balance` — the balance configured at startup.
pub async fn get_balance(State(state): State<AppState>) -> Json<BalanceResponse> {
    Json(BalanceResponse::new(state.config.balance))
}
