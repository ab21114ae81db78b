//! Character and episode routes under `/api/v1`.

use crate::handlers::{characters, episodes};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn character_routes(state: AppState) -> Router {
    Router::new()
        .route("/characters", get(characters::list).post(characters::create))
        .route(
            "/characters/:id",
            get(characters::read)
                .put(characters::update)
                .delete(characters::delete),
        )
        .with_state(state)
}

/// Placeholder surface; every route answers 501.
pub fn episode_routes(state: AppState) -> Router {
    Router::new()
        .route("/episodes", get(episodes::list).post(episodes::create))
        .route(
            "/episodes/:id",
            get(episodes::read)
                .put(episodes::update)
                .delete(episodes::delete),
        )
        .with_state(state)
}
