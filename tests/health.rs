mod common;
use common::{create_test_app, spawn_test_app, ErrorBody, TestAppClient};
use reqwest::StatusCode;
use todo_service::HealthResponse;

#[tokio::test]
async fn health_reports_connected_database() {
    let app = create_test_app(0).await;
    let handle = spawn_test_app(app.router).await;
    let client = TestAppClient::new(handle.address);

    for path in ["/", "/health"] {
        let res = client.health(path).await;
        assert_eq!(res.status(), StatusCode::OK, "path {path}");

        let body = res.json::<HealthResponse>().await.unwrap();
        assert_eq!(body.message, "Todo API is running");
        assert_eq!(body.status, "healthy");
        assert_eq!(body.database, "connected");
        assert_eq!(body.version, "1.0.0");
    }
}

#[tokio::test]
async fn health_reports_unreachable_database() {
    let app = create_test_app(0).await;
    let handle = spawn_test_app(app.router).await;
    let client = TestAppClient::new(handle.address);

    app.service.close_storage().await;

    let res = client.health("/health").await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.error, "unhealthy");
    assert!(body.message.starts_with("Service unhealthy: "));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = create_test_app(0).await;
    let handle = spawn_test_app(app.router).await;
    let client = TestAppClient::new(handle.address);

    let res = client.get("/api-docs/openapi.json").await;
    assert_eq!(res.status(), StatusCode::OK);

    let doc = res.json::<serde_json::Value>().await.unwrap();
    assert!(doc["paths"].get("/todos").is_some());
    assert!(doc["paths"].get("/todos/{id}").is_some());
    assert!(doc["paths"].get("/health").is_some());
    assert!(doc["paths"].get("/").is_some());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = create_test_app(0).await;
    let handle = spawn_test_app(app.router).await;
    let client = TestAppClient::new(handle.address);

    let res = client.get("/nope").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_preflight_allows_known_origin() {
    let app = create_test_app(0).await;
    let handle = spawn_test_app(app.router).await;
    let client = TestAppClient::new(handle.address);

    let res = client.preflight("http://localhost:5173", "POST").await;
    assert!(res.status().is_success());

    let headers = res.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert!(headers["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .contains("DELETE"));
    assert!(headers["access-control-allow-headers"]
        .to_str()
        .unwrap()
        .contains("x-custom"));
}

#[tokio::test]
async fn cors_preflight_ignores_unknown_origin() {
    let app = create_test_app(0).await;
    let handle = spawn_test_app(app.router).await;
    let client = TestAppClient::new(handle.address);

    let res = client.preflight("http://evil.example", "POST").await;
    assert!(res
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
