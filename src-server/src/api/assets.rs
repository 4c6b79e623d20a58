use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use scene_core::portfolio::{asset_by_id, mock_assets, PortfolioAsset};

use crate::api::shared::{paginate, parse_pagination, ApiEnvelope};
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AssetsQuery {
    category: Option<String>,
    sort: Option<String>,
    order: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPage {
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub assets: Vec<PortfolioAsset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    Name,
    Value,
    Category,
}

fn parse_sort(raw: Option<&String>) -> ApiResult<SortKey> {
    match raw.map(|s| s.trim().to_lowercase()) {
        None => Ok(SortKey::Name),
        Some(key) => match key.as_str() {
            "name" => Ok(SortKey::Name),
            "value" => Ok(SortKey::Value),
            "category" => Ok(SortKey::Category),
            other => Err(ApiError::invalid_query(format!(
                "unknown sort '{other}', expected name, value or category"
            ))),
        },
    }
}

fn parse_descending(raw: Option<&String>) -> ApiResult<bool> {
    match raw.map(|s| s.trim().to_lowercase()) {
        None => Ok(false),
        Some(order) => match order.as_str() {
            "asc" => Ok(false),
            "desc" => Ok(true),
            other => Err(ApiError::invalid_query(format!(
                "unknown order '{other}', expected asc or desc"
            ))),
        },
    }
}

async fn list_assets(
    Query(query): Query<AssetsQuery>,
    State(_state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiEnvelope<AssetPage>>> {
    let sort = parse_sort(query.sort.as_ref())?;
    let descending = parse_descending(query.order.as_ref())?;
    let pagination = parse_pagination(query.page.as_ref(), query.limit.as_ref())?;

    let mut rng = StdRng::from_entropy();
    let mut assets = mock_assets(&mut rng);

    if let Some(raw) = &query.category {
        assets.retain(|a| a.category.name().eq_ignore_ascii_case(raw.trim()));
    }

    match sort {
        SortKey::Name => assets.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Value => assets.sort_by(|a, b| a.current_value.cmp(&b.current_value)),
        SortKey::Category => assets.sort_by(|a, b| a.category.name().cmp(b.category.name())),
    }
    if descending {
        assets.reverse();
    }

    let total = assets.len();
    let page_items = paginate(&assets, pagination);

    Ok(Json(ApiEnvelope::success(AssetPage {
        total,
        page: pagination.page,
        limit: pagination.limit,
        assets: page_items,
    })))
}

async fn asset_detail(
    Path(id): Path<String>,
    State(_state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiEnvelope<PortfolioAsset>>> {
    let mut rng = StdRng::from_entropy();
    let asset = asset_by_id(&id, &mut rng)
        .ok_or_else(|| ApiError::not_found(format!("Asset '{id}' not found")))?;
    Ok(Json(ApiEnvelope::success(asset)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(list_assets))
        .route("/assets/:id", get(asset_detail))
}
