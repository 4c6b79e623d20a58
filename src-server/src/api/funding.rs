use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use scene_core::portfolio::{mock_funding_rounds, summarize_funding, FundingRound, FundingSummary};

use crate::api::shared::ApiEnvelope;
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingStatus {
    #[serde(flatten)]
    pub summary: FundingSummary,
    pub rounds: Vec<FundingRound>,
}

async fn funding_status(
    State(_state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiEnvelope<FundingStatus>>> {
    let mut rng = StdRng::from_entropy();
    let rounds = mock_funding_rounds(&mut rng);
    let summary = summarize_funding(&rounds);
    Ok(Json(ApiEnvelope::success(FundingStatus { summary, rounds })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/funding/status", get(funding_status))
}
