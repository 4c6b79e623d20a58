use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Json, Router};

use scene_core::session::UserClaims;

use crate::api::shared::ApiEnvelope;
use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Claims of the current session, as decoded by the gate middleware.
async fn current_session(
    Extension(claims): Extension<UserClaims>,
) -> ApiResult<Json<ApiEnvelope<UserClaims>>> {
    Ok(Json(ApiEnvelope::success(claims)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/auth/session", get(current_session))
}
