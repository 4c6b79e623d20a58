use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use scene_core::analytics::{HistoricalPoint, Period};
use scene_core::catalog::MarketMetric;

use crate::api::shared::{parse_period, today, ApiEnvelope};
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    metric: Option<String>,
    period: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketHistory {
    pub metric: MarketMetric,
    pub period: &'static str,
    pub points: Vec<HistoricalPoint>,
}

/// Daily series for one market metric. Served from the historical-values
/// store when seeded, freshly generated (and seeded back) otherwise.
async fn market_history(
    Query(query): Query<HistoryQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiEnvelope<MarketHistory>>> {
    let metric = match &query.metric {
        Some(raw) => MarketMetric::parse(raw).ok_or_else(|| {
            ApiError::invalid_query(format!(
                "unknown metric '{raw}', expected one of market_cap, volume, average_price, royalty_income"
            ))
        })?,
        None => MarketMetric::MarketCap,
    };
    let period = parse_period(query.period.as_ref(), Period::ThirtyDays)?;

    let window = period.resolve(today());
    let mut rng = StdRng::from_entropy();
    let points = state.history.series_for(metric, &window, &mut rng).await?;

    Ok(Json(ApiEnvelope::success(MarketHistory {
        metric,
        period: period.tag(),
        points,
    })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/market/history", get(market_history))
}
