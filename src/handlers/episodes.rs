//! Episode handlers. They forward to the placeholder repository, which answers 501.

use crate::error::AppError;
use crate::extractors::RecordId;
use crate::model::Episode;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Episode>>, AppError> {
    Ok(Json(state.episodes.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Episode>>,
) -> Result<Json<Episode>, AppError> {
    let mut episode = body.map(|Json(e)| e).unwrap_or_default();
    state.episodes.insert(&mut episode).await?;
    Ok(Json(episode))
}

pub async fn read(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Episode>, AppError> {
    Ok(Json(state.episodes.get(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    body: Option<Json<Episode>>,
) -> Result<Json<Episode>, AppError> {
    let mut episode = body.map(|Json(e)| e).unwrap_or_default();
    episode.id = id;
    state.episodes.update(&mut episode).await?;
    Ok(Json(episode))
}

pub async fn delete(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<StatusCode, AppError> {
    state.episodes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
