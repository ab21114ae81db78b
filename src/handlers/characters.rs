//! Character handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::{QueryValues, RecordId};
use crate::model::{validate_character, CharacterPatch, NewCharacter};
use crate::response::{character_created, character_list, character_ok, message};
use crate::service::{
    validate_filters, CharacterQuery, Filters, Validator, CHARACTER_SORT_SAFELIST, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE, DEFAULT_SORT,
};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

fn bad_body(e: JsonRejection) -> AppError {
    AppError::BadRequest(e.body_text())
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewCharacter>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = body.map_err(bad_body)?;
    let mut character = input.into_character();

    let mut v = Validator::new();
    validate_character(&mut v, &character);
    if !v.valid() {
        return Err(AppError::InvalidInput(v.into_errors()));
    }

    state.characters.insert(&mut character).await?;
    tracing::info!(id = character.id, name = %character.name, "character created");
    Ok(character_created(character))
}

/// GET /characters?name=&age=&page=&page_size=&sort=
pub async fn list(
    State(state): State<AppState>,
    qs: QueryValues,
) -> Result<impl IntoResponse, AppError> {
    let mut v = Validator::new();

    let name = qs.read_string("name", "");
    let age = qs.read_int("age", 0i32, &mut v);

    let mut filters = Filters::new(CHARACTER_SORT_SAFELIST);
    filters.page = qs.read_int("page", DEFAULT_PAGE, &mut v);
    filters.page_size = qs.read_int("page_size", DEFAULT_PAGE_SIZE, &mut v);
    filters.sort = qs.read_string("sort", DEFAULT_SORT);

    validate_filters(&mut v, &filters);
    if !v.valid() {
        return Err(AppError::FailedValidation(v.into_errors()));
    }

    let query = CharacterQuery { name, age, filters };
    let (characters, metadata) = state.characters.list(&query).await?;
    Ok(character_list(characters, metadata))
}

pub async fn read(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let character = state.characters.get(id).await?;
    Ok(character_ok(character))
}

/// Partial update. The stored row is read first so absent fields keep their values;
/// the write is rejected with 409 if the row changed since the version the client saw.
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    body: Result<Json<CharacterPatch>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let mut character = state.characters.get(id).await?;
    let Json(patch) = body.map_err(bad_body)?;

    let expected_version = patch.updated_at.unwrap_or(character.updated_at);
    patch.apply(&mut character);

    let mut v = Validator::new();
    validate_character(&mut v, &character);
    if !v.valid() {
        return Err(AppError::FailedValidation(v.into_errors()));
    }

    state.characters.update(&mut character, expected_version).await?;
    tracing::info!(id, "character updated");
    Ok(character_ok(character))
}

pub async fn delete(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    state.characters.delete(id).await?;
    tracing::info!(id, "character deleted");
    Ok(message("character successfully deleted"))
}
