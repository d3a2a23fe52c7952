use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- random image ---

#[tokio::test]
async fn random_image_returns_success_envelope() {
    let resp = app()
        .oneshot(get_request("/api/breeds/image/random"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert!(body["message"].as_str().unwrap().starts_with("https://"));
}

// --- list all breeds ---

#[tokio::test]
async fn list_all_returns_breed_map() {
    let resp = app()
        .oneshot(get_request("/api/breeds/list/all"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert!(body["message"].is_object());
    assert!(body["message"].get("hound").is_some());
    assert!(body["message"].get("mastiff").is_some());
}

// --- sub-breeds ---

#[tokio::test]
async fn sub_breeds_returns_list_for_known_breed() {
    let resp = app()
        .oneshot(get_request("/api/breed/hound/list"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert!(body["message"].is_array());
    assert!(!body["message"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn sub_breeds_unknown_breed_returns_error() {
    let resp = app()
        .oneshot(get_request("/api/breed/invalidbreed/list"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "error");
}

// --- breed images ---

#[tokio::test]
async fn breed_images_returns_urls_for_known_breed() {
    let resp = app()
        .oneshot(get_request("/api/breed/mastiff/images"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "success");
    let images = body["message"].as_array().unwrap();
    assert!(!images.is_empty());
    assert!(images[0].as_str().unwrap().starts_with("https://"));
}

#[tokio::test]
async fn breed_images_unknown_breed_returns_error() {
    let resp = app()
        .oneshot(get_request("/api/breed/invalidbreed/images"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], 404);
}

// --- echo ---

#[tokio::test]
async fn echo_reflects_query_params() {
    let resp = app()
        .oneshot(get_request("/api/echo?breed=hound&limit=3"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"]["breed"], "hound");
    assert_eq!(body["message"]["limit"], "3");
}

#[tokio::test]
async fn echo_reflects_json_body() {
    let resp = app()
        .oneshot(json_request("POST", "/api/echo", r#"{"breed":"hound"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"]["breed"], "hound");
}

#[tokio::test]
async fn echo_malformed_json_returns_client_error() {
    let resp = app()
        .oneshot(json_request("POST", "/api/echo", "not json"))
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}
