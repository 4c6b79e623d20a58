use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use scene_core::analytics::{
    distribute, generate_payments, CategoryDistribution, Period, RoyaltyPayment,
};

use crate::api::shared::{paginate, parse_pagination, parse_period, today, ApiEnvelope};
use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PaymentsQuery {
    period: Option<String>,
    category: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoyaltyReport {
    pub period: &'static str,
    pub total_amount: Decimal,
    pub payment_count: usize,
    pub distribution: CategoryDistribution,
    pub page: u32,
    pub limit: u32,
    pub payments: Vec<RoyaltyPayment>,
}

/// Randomized royalty payments over the requested window, with summary
/// totals over the (optionally category-filtered) full set and a paged
/// slice of the records themselves.
async fn royalty_payments(
    Query(query): Query<PaymentsQuery>,
    State(_state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiEnvelope<RoyaltyReport>>> {
    let period = parse_period(query.period.as_ref(), Period::ThirtyDays)?;
    let pagination = parse_pagination(query.page.as_ref(), query.limit.as_ref())?;

    let window = period.resolve(today());
    let mut rng = StdRng::from_entropy();
    let mut payments = generate_payments(&window, &mut rng);

    // The category filter is a free string: an unknown value matches
    // nothing rather than failing the request.
    if let Some(raw) = &query.category {
        payments.retain(|p| p.category.name().eq_ignore_ascii_case(raw.trim()));
    }

    let (total_amount, distribution) = distribute(payments.iter().map(|p| (p.category, p.amount)));
    let page_items = paginate(&payments, pagination);

    Ok(Json(ApiEnvelope::success(RoyaltyReport {
        period: period.tag(),
        total_amount,
        payment_count: payments.len(),
        distribution,
        page: pagination.page,
        limit: pagination.limit,
        payments: page_items,
    })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/royalties/payments", get(royalty_payments))
}
