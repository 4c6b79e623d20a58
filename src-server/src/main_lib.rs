use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue};
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use scene_core::session::{JwtTokenVerifier, StaticTokenVerifier, TokenVerifier};
use scene_core::store::{
    build_pool, HistoryRepository, HistoryService, MemoryHistoryRepository,
    SqliteHistoryRepository,
};

use crate::api;
use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;

/// Shared services, constructed once at startup and handed to every
/// handler through state. No lazily initialized globals.
pub struct AppState {
    pub config: ServerConfig,
    pub verifier: Arc<dyn TokenVerifier>,
    pub history: HistoryService,
    pub rate_limiter: RateLimiter,
}

pub fn build_state(config: ServerConfig) -> anyhow::Result<Arc<AppState>> {
    let verifier: Arc<dyn TokenVerifier> = match &config.session_secret {
        Some(secret) => Arc::new(JwtTokenVerifier::new(secret)),
        None => {
            tracing::warn!(
                "SCENE_SESSION_SECRET is not set; accepting the static demo session only"
            );
            Arc::new(StaticTokenVerifier)
        }
    };

    let repo: Arc<dyn HistoryRepository> = match &config.database_path {
        Some(path) => {
            let pool = build_pool(path)?;
            tracing::info!("historical values stored in {}", path);
            Arc::new(SqliteHistoryRepository::new(pool))
        }
        None => {
            tracing::info!("no SCENE_DATABASE_PATH; historical values kept in memory");
            Arc::new(MemoryHistoryRepository::new())
        }
    };

    let rate_limiter = RateLimiter::new(
        config.rate_limit_quota,
        Duration::from_secs(config.rate_limit_window_secs),
    );

    Ok(Arc::new(AppState {
        history: HistoryService::new(repo),
        verifier,
        rate_limiter,
        config,
    }))
}

pub fn build_router(state: Arc<AppState>) -> Router {
    // Layers run outermost-last: the session gate sees the request first,
    // so an unauthenticated caller gets 401 even when its IP is over quota.
    let api_routes = api::router()
        .layer(from_fn_with_state(state.clone(), crate::middleware::enforce_rate_limit))
        .layer(from_fn_with_state(state.clone(), crate::middleware::require_session));

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'self'; frame-ancestors 'none'"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let bind_addr = config.bind_addr;
    let state = build_state(config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("scene-server listening on {}", bind_addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
