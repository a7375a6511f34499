use super::*;
use axum::Router;
use axum::routing::any;
use serde_json::{Value, json};

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/v1/learning/random-terms?count=20".parse().unwrap();
    assert_eq!(
        upstream_url("http://backend:8000/", &uri),
        "http://backend:8000/api/v1/learning/random-terms?count=20"
    );
}

#[test]
fn upstream_url_keeps_percent_encoding() {
    let uri: Uri = "/api/v1/learning/glossaries/Agric%2FFood/progress".parse().unwrap();
    assert_eq!(
        upstream_url("http://backend", &uri),
        "http://backend/api/v1/learning/glossaries/Agric%2FFood/progress"
    );
}

#[test]
fn proxy_error_status_codes() {
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Unavailable("refused".into()).status(), StatusCode::BAD_GATEWAY);
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Value> {
    Json(json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "authorization": headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
        "body": body,
    }))
}

async fn missing() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Term not found"})))
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn proxy_in_front_of(upstream: &str) -> String {
    let state = AppState::new(reqwest::Client::new(), upstream);
    serve(crate::routes::api_routes(state)).await
}

#[tokio::test]
async fn forwards_method_query_body_and_authorization() {
    let upstream = serve(Router::new().fallback(echo)).await;
    let host = proxy_in_front_of(&upstream).await;

    let resp = reqwest::Client::new()
        .put(format!("{host}/api/v1/comments/c-1?notify=false"))
        .header(AUTHORIZATION, "Bearer tok")
        .header(CONTENT_TYPE, "application/json")
        .body(r#"{"content":"edited"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echoed: Value = resp.json().await.unwrap();
    assert_eq!(echoed["method"], "PUT");
    assert_eq!(echoed["uri"], "/api/v1/comments/c-1?notify=false");
    assert_eq!(echoed["authorization"], "Bearer tok");
    assert_eq!(echoed["body"], r#"{"content":"edited"}"#);
}

#[tokio::test]
async fn relays_upstream_error_status_and_body() {
    let upstream = serve(Router::new().route("/api/v1/terms/{id}/comments", any(missing))).await;
    let host = proxy_in_front_of(&upstream).await;

    let resp = reqwest::get(format!("{host}/api/v1/terms/t-9/comments")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Term not found");
}

#[tokio::test]
async fn unreachable_upstream_maps_to_bad_gateway() {
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let host = proxy_in_front_of(&format!("http://{closed}")).await;

    let resp = reqwest::get(format!("{host}/api/v1/feedback/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().starts_with("upstream unavailable"));
}

#[tokio::test]
async fn healthz_is_ok_without_upstream() {
    let host = proxy_in_front_of("http://127.0.0.1:9").await;
    let resp = reqwest::get(format!("{host}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
