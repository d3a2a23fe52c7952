//! In-process replica of the dog breed image API (dog.ceo).
//!
//! Serves the endpoints the client tests exercise, with the same
//! `{"message": ..., "status": ...}` envelope the real service uses.
//! Logical failures (unknown breed) return a body with `"status": "error"`
//! and HTTP 404, matching the live API. Two extra routes exist purely for
//! the test suite: `/api/echo` (query/body round-trip) and `/api/slow`
//! (sleeps long enough to trip any reasonable client timeout).

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Breed name to sub-breed list, fixed at startup and never mutated.
pub type BreedDb = Arc<BTreeMap<&'static str, Vec<&'static str>>>;

fn breed_db() -> BreedDb {
    Arc::new(BTreeMap::from([
        ("bulldog", vec!["boston", "english", "french"]),
        ("hound", vec!["afghan", "basset", "blood", "english", "ibizan", "plott", "walker"]),
        ("mastiff", vec!["bull", "english", "tibetan"]),
        ("pug", vec![]),
        ("retriever", vec!["chesapeake", "curly", "flatcoated", "golden"]),
    ]))
}

pub fn app() -> Router {
    let db = breed_db();
    Router::new()
        .route("/api/breeds/image/random", get(random_image))
        .route("/api/breeds/list/all", get(list_all))
        .route("/api/breed/{breed}/list", get(sub_breeds))
        .route("/api/breed/{breed}/images", get(breed_images))
        .route("/api/echo", get(echo_query).post(echo_json))
        .route("/api/slow", get(slow))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn success(message: Value) -> Json<Value> {
    Json(json!({ "message": message, "status": "success" }))
}

fn breed_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": "error",
            "message": "Breed not found (main breed does not exist)",
            "code": 404
        })),
    )
}

async fn random_image() -> Json<Value> {
    success(json!(
        "https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg"
    ))
}

async fn list_all(State(db): State<BreedDb>) -> Json<Value> {
    success(json!(&*db))
}

async fn sub_breeds(
    State(db): State<BreedDb>,
    Path(breed): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match db.get(breed.as_str()) {
        Some(subs) => Ok(success(json!(subs))),
        None => Err(breed_not_found()),
    }
}

async fn breed_images(
    State(db): State<BreedDb>,
    Path(breed): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match db.get(breed.as_str()) {
        Some(_) => Ok(success(json!([
            format!("https://images.dog.ceo/breeds/{breed}/{breed}_0001.jpg"),
            format!("https://images.dog.ceo/breeds/{breed}/{breed}_0002.jpg"),
        ]))),
        None => Err(breed_not_found()),
    }
}

async fn echo_query(Query(params): Query<BTreeMap<String, String>>) -> Json<Value> {
    success(json!(params))
}

async fn echo_json(Json(body): Json<Value>) -> Json<Value> {
    success(body)
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    success(json!("slept"))
}
