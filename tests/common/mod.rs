#![allow(dead_code)]

use atla::{AppConfig, AppState, Character, CharacterRepo, NewCharacter};
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use std::time::Duration;
use tower::ServiceExt;

/// Config with defaults; the pool is supplied by `#[sqlx::test]`.
pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|_| None).expect("default config")
}

/// The same router `main` serves, bound to the test database.
pub fn build_test_app(pool: PgPool) -> Router {
    atla::app(AppState::new(pool, test_config()))
}

pub fn repo(pool: PgPool) -> CharacterRepo {
    CharacterRepo::new(pool, Duration::from_secs(3))
}

pub fn new_character(name: &str, age: i32) -> Character {
    NewCharacter {
        id: None,
        name: name.to_string(),
        age,
        gender: "male".to_string(),
        status: "alive".to_string(),
        nation: "Fire Nation".to_string(),
    }
    .into_character()
}

async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            builder = builder.header("content-type", "application/json");
            Body::from(b)
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json.to_string())).await
}

pub async fn post_raw(app: Router, uri: &str, raw: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(raw.to_string())).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
