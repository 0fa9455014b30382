use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;

pub mod auth;
pub mod backup;
pub mod domains;
pub mod friendly_links;
pub mod friends;
pub mod projects;
pub mod registrar_icons;
pub mod site_settings;
pub mod sold_domains;
pub mod works;

use auth::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `?id=` / body-id parameter shared by the collection routes.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

pub(crate) fn require_id(id: Option<String>) -> Result<String, JsonApiError> {
    match id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(JsonApiError::bad_request("id is required")),
    }
}

/// Build the full application router: public reads, admin mutations behind
/// the session middleware, Swagger docs.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route(
            "/api/domains",
            get(domains::list)
                .post(domains::create)
                .put(domains::update)
                .delete(domains::delete),
        )
        .route(
            "/api/sold-domains",
            get(sold_domains::list)
                .post(sold_domains::create)
                .put(sold_domains::update)
                .delete(sold_domains::delete),
        )
        .route(
            "/api/friendly-links",
            get(friendly_links::list)
                .post(friendly_links::create)
                .put(friendly_links::update)
                .delete(friendly_links::delete),
        )
        .route(
            "/api/works",
            get(works::list)
                .post(works::create)
                .put(works::update)
                .delete(works::delete),
        )
        .route(
            "/api/projects",
            get(projects::list)
                .post(projects::create)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route(
            "/api/friends",
            get(friends::list)
                .post(friends::create)
                .put(friends::update)
                .delete(friends::delete),
        )
        .route(
            "/api/registrar-icons",
            get(registrar_icons::list)
                .post(registrar_icons::create)
                .put(registrar_icons::update)
                .delete(registrar_icons::delete),
        )
        .route(
            "/api/site-settings",
            get(site_settings::get_settings).put(site_settings::update_settings),
        )
        .route(
            "/api/auth",
            get(auth::info)
                .post(auth::login)
                .put(auth::change_password)
                .delete(auth::logout),
        )
        .route("/api/backup", get(backup::export).post(backup::import))
        .route("/api/backup/history", get(backup::history))
        .route("/api/restore", post(backup::restore))
        .route("/api/reset", post(backup::reset));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn_with_state(state.clone(), auth::require_session))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                // 请求到达时打点
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
