use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all tally endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::home_handler))
        .route("/chain", get(handler::chain_handler))
        .route("/mine", post(handler::mine_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
