use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use scene_core::portfolio::{mock_token_holdings, summarize_tokens, TokenHolding, TokenSummary};

use crate::api::shared::ApiEnvelope;
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHoldingsReport {
    #[serde(flatten)]
    pub summary: TokenSummary,
    pub holdings: Vec<TokenHolding>,
}

async fn token_holdings(
    State(_state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiEnvelope<TokenHoldingsReport>>> {
    let mut rng = StdRng::from_entropy();
    let holdings = mock_token_holdings(&mut rng);
    let summary = summarize_tokens(&holdings);
    Ok(Json(ApiEnvelope::success(TokenHoldingsReport {
        summary,
        holdings,
    })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/tokens/holdings", get(token_holdings))
}
