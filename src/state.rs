//! Shared application state for all routes. Built once at startup; never mutated.

use crate::config::AppConfig;
use crate::service::{CharacterRepo, EpisodeRepo};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
    pub characters: CharacterRepo,
    pub episodes: EpisodeRepo,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        let characters = CharacterRepo::new(pool.clone(), config.query_timeout);
        AppState {
            pool,
            config: Arc::new(config),
            characters,
            episodes: EpisodeRepo,
        }
    }
}
