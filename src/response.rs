//! Response envelopes: every body is an object keyed by what it carries.

use crate::service::Metadata;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct CharacterEnvelope<T> {
    pub character: T,
}

#[derive(Serialize)]
pub struct CharacterListEnvelope<T> {
    pub characters: Vec<T>,
    pub metadata: Metadata,
}

#[derive(Serialize)]
pub struct MessageEnvelope {
    pub message: String,
}

pub fn character_created<T: Serialize>(character: T) -> (StatusCode, Json<CharacterEnvelope<T>>) {
    (StatusCode::CREATED, Json(CharacterEnvelope { character }))
}

pub fn character_ok<T: Serialize>(character: T) -> (StatusCode, Json<CharacterEnvelope<T>>) {
    (StatusCode::OK, Json(CharacterEnvelope { character }))
}

pub fn character_list<T: Serialize>(
    characters: Vec<T>,
    metadata: Metadata,
) -> (StatusCode, Json<CharacterListEnvelope<T>>) {
    (
        StatusCode::OK,
        Json(CharacterListEnvelope {
            characters,
            metadata,
        }),
    )
}

pub fn message(text: impl Into<String>) -> (StatusCode, Json<MessageEnvelope>) {
    (
        StatusCode::OK,
        Json(MessageEnvelope {
            message: text.into(),
        }),
    )
}
