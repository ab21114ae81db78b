//! ATLA: REST backend for Avatar: The Last Airbender characters on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, Environment, LogFormat};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Character, CharacterPatch, NewCharacter};
pub use routes::app;
pub use service::{CharacterQuery, CharacterRepo, Filters, Metadata, Validator};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, run_migrations};
