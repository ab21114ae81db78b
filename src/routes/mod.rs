//! Router assembly.

mod characters;
mod common;

pub use characters::{character_routes, episode_routes};
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full application: health routes at the root, resources under `/api/v1`.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(character_routes(state.clone()))
        .merge(episode_routes(state.clone()));

    Router::new()
        .merge(common_routes(state))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES)),
        )
}
