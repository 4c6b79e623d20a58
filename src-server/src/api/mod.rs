pub mod assets;
pub mod funding;
pub mod market;
pub mod portfolio;
pub mod royalties;
pub mod session;
pub mod shared;
pub mod tokens;

use std::sync::Arc;

use axum::Router;

use crate::main_lib::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(market::router())
        .merge(royalties::router())
        .merge(portfolio::router())
        .merge(funding::router())
        .merge(tokens::router())
        .merge(assets::router())
        .merge(session::router())
}
