use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;

use scene_core::portfolio::{mock_assets, summarize_assets, PortfolioSummary};

use crate::api::shared::ApiEnvelope;
use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Aggregate metrics over the holder's positions, with the category
/// breakdown of current value. The working set is rebuilt per request.
async fn portfolio_summary(
    State(_state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiEnvelope<PortfolioSummary>>> {
    let mut rng = StdRng::from_entropy();
    let assets = mock_assets(&mut rng);
    Ok(Json(ApiEnvelope::success(summarize_assets(&assets))))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio/summary", get(portfolio_summary))
}
