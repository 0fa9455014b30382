use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use server::routes::{self, auth};
use service::auth::service::{AuthConfig, AuthService};
use service::file::catalog_store::CatalogStore;

fn cors() -> tower_http::cors::CorsLayer {
    tower_http::cors::CorsLayer::very_permissive()
}

async fn build_app() -> anyhow::Result<Router> {
    let data_dir = std::env::temp_dir().join(format!("showcase-auth-{}", Uuid::new_v4()));
    let store = CatalogStore::open(data_dir.join("db.json")).await?;
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&store),
        AuthConfig { jwt_secret: "test-secret".into(), token_hours: 1 },
    ));
    let state = auth::ServerState {
        store,
        auth: auth_service,
        backup_dir: data_dir.join("backups"),
    };
    Ok(routes::build_router(cors(), state))
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn login_token(app: &Router) -> anyhow::Result<String> {
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/auth", json!({"password": "admin123"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    Ok(body["token"].as_str().expect("token").to_string())
}

#[tokio::test]
async fn test_login_sets_cookie() -> anyhow::Result<()> {
    let app = build_app().await?;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/auth", json!({"password": "admin123"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp.headers().get("set-cookie");
    assert!(cookie.is_some());
    assert!(cookie.unwrap().to_str()?.starts_with("auth_token="));
    Ok(())
}

#[tokio::test]
async fn test_login_wrong_password() -> anyhow::Result<()> {
    let app = build_app().await?;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/auth", json!({"password": "wrong"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_auth_info_never_leaks_hash() -> anyhow::Result<()> {
    let app = build_app().await?;

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/api/auth").body(Body::empty())?)
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["id"], "admin");
    assert!(body.get("passwordHash").is_none());
    Ok(())
}

#[tokio::test]
async fn test_change_password_validation() -> anyhow::Result<()> {
    let app = build_app().await?;
    let token = login_token(&app).await?;

    // too short
    let mut req = json_request(
        "PUT",
        "/api/auth",
        json!({"currentPassword": "admin123", "newPassword": "short"}),
    );
    req.headers_mut().insert("authorization", format!("Bearer {token}").parse()?);
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // wrong current password
    let mut req = json_request(
        "PUT",
        "/api/auth",
        json!({"currentPassword": "nope", "newPassword": "longenough"}),
    );
    req.headers_mut().insert("authorization", format!("Bearer {token}").parse()?);
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // valid rotation, old password stops working
    let mut req = json_request(
        "PUT",
        "/api/auth",
        json!({"currentPassword": "admin123", "newPassword": "longenough"}),
    );
    req.headers_mut().insert("authorization", format!("Bearer {token}").parse()?);
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/auth", json!({"password": "admin123"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_mutation_without_token_unauthorized() -> anyhow::Result<()> {
    let app = build_app().await?;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/domains",
            json!({"name": "x", "extension": ".com"}),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_garbage_token_unauthorized() -> anyhow::Result<()> {
    let app = build_app().await?;

    let mut req = json_request(
        "POST",
        "/api/domains",
        json!({"name": "x", "extension": ".com"}),
    );
    req.headers_mut().insert("authorization", "Bearer not-a-jwt".parse()?);
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_patch_with_unknown_field_rejected() -> anyhow::Result<()> {
    let app = build_app().await?;
    let token = login_token(&app).await?;

    let mut req = json_request(
        "PUT",
        "/api/domains",
        json!({"id": "1", "stauts": "typo"}),
    );
    req.headers_mut().insert("authorization", format!("Bearer {token}").parse()?);
    let resp = app.clone().oneshot(req).await?;
    assert!(resp.status().is_client_error());
    Ok(())
}

#[tokio::test]
async fn test_delete_without_id_rejected() -> anyhow::Result<()> {
    let app = build_app().await?;
    let token = login_token(&app).await?;

    let mut req = Request::builder()
        .method("DELETE")
        .uri("/api/domains")
        .body(Body::empty())?;
    req.headers_mut().insert("authorization", format!("Bearer {token}").parse()?);
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_validation_errors_are_bad_request() -> anyhow::Result<()> {
    let app = build_app().await?;
    let token = login_token(&app).await?;

    // missing required field
    let mut req = json_request("POST", "/api/domains", json!({"extension": ".com"}));
    req.headers_mut().insert("authorization", format!("Bearer {token}").parse()?);
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // malformed purchase url
    let mut req = json_request(
        "POST",
        "/api/domains",
        json!({"name": "x", "extension": ".com", "purchaseUrl": "ftp://nope"}),
    );
    req.headers_mut().insert("authorization", format!("Bearer {token}").parse()?);
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_supplied_id_conflict() -> anyhow::Result<()> {
    let app = build_app().await?;
    let token = login_token(&app).await?;

    let mut req = json_request(
        "POST",
        "/api/projects",
        json!({"id": "p-1", "name": "cli 工具", "description": "终端小工具", "imageUrl": "https://example.com/cli.png"}),
    );
    req.headers_mut().insert("authorization", format!("Bearer {token}").parse()?);
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let mut req = json_request(
        "POST",
        "/api/projects",
        json!({"id": "p-1", "name": "重复", "description": "撞 id", "imageUrl": "https://example.com/x.png"}),
    );
    req.headers_mut().insert("authorization", format!("Bearer {token}").parse()?);
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    Ok(())
}
