use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use service::auth::domain::{AuthInfo, ChangePasswordInput, LoginInput};
use service::auth::service::AuthService;
use service::file::catalog_store::CatalogStore;

use crate::errors::JsonApiError;

pub const SESSION_COOKIE: &str = "auth_token";

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<CatalogStore>,
    pub auth: Arc<AuthService<CatalogStore>>,
    pub backup_dir: PathBuf,
}

#[derive(serde::Serialize)]
pub struct LoginOutput {
    pub success: bool,
    pub token: String,
    #[serde(flatten)]
    pub info: AuthInfo,
}

/// 登录：校验口令并签发会话 cookie
#[utoipa::path(post, path = "/api/auth", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged In"), (status = 401, description = "Unauthorized")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<LoginOutput>), JsonApiError> {
    let session = state.auth.login(input).await?;

    let mut cookie = Cookie::new(SESSION_COOKIE, session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(SameSite::Lax);
    let jar = jar.add(cookie);

    Ok((jar, Json(LoginOutput { success: true, token: session.token, info: session.info })))
}

/// 凭证元数据（不含口令哈希）
pub async fn info(State(state): State<ServerState>) -> Result<Json<AuthInfo>, JsonApiError> {
    Ok(Json(state.auth.info().await?))
}

/// 修改口令：先校验当前口令
pub async fn change_password(
    State(state): State<ServerState>,
    Json(input): Json<ChangePasswordInput>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    state.auth.change_password(input).await?;
    Ok(Json(serde_json::json!({"success": true})))
}

/// 登出：清除会话 cookie（令牌无状态，文档不变）
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<serde_json::Value>) {
    let jar = jar.remove(Cookie::from(SESSION_COOKIE));
    (jar, Json(serde_json::json!({"success": true})))
}

/// 全局中间件：写操作需有效会话令牌，公共读取与登录放行
/// 令牌来源：Authorization: Bearer <token>，或会话 cookie
pub async fn require_session(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let path = req.uri().path().to_string();
    let method = req.method().clone();

    // 白名单：健康检查、登录/登出、Swagger 文档、CORS 预检
    if path == "/health"
        || path.starts_with("/docs")
        || path.starts_with("/api-docs")
        || method == Method::OPTIONS
        || (path == "/api/auth" && (method == Method::POST || method == Method::DELETE))
    {
        return Ok(next.run(req).await);
    }

    // 公开读取：除备份导出外的 GET
    if method == Method::GET && !path.starts_with("/api/backup") {
        return Ok(next.run(req).await);
    }

    let token = {
        let authz = req
            .headers()
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        if let Some(h) = authz {
            h.strip_prefix("Bearer ").map(|t| t.to_string())
        } else {
            // Cookie 回退：解析 Cookie 头获取 auth_token
            let cookie_header = req
                .headers()
                .get(axum::http::header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("");
            cookie_header.split(';').find_map(|part| {
                part.trim()
                    .strip_prefix("auth_token=")
                    .filter(|t| !t.is_empty())
                    .map(|t| t.to_string())
            })
        }
    };

    let token = match token {
        Some(t) if !t.is_empty() => t,
        _ => {
            tracing::warn!(path = %path, "missing session token");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    match state.auth.verify_token(&token) {
        Ok(_claims) => Ok(next.run(req).await),
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "session token rejected");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
