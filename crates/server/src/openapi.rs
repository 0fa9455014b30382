use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(utoipa::ToSchema)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(utoipa::ToSchema)]
pub struct DomainInputDoc {
    pub id: Option<String>,
    pub name: String,
    pub extension: String,
    pub status: Option<String>,
    pub registrar: Option<String>,
    pub registrar_icon: Option<String>,
    pub purchase_url: Option<String>,
}

#[derive(utoipa::ToSchema)]
pub struct DomainPatchDoc {
    pub id: String,
    pub name: Option<String>,
    pub extension: Option<String>,
    pub status: Option<String>,
    pub registrar: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::login,
        crate::routes::domains::list,
        crate::routes::domains::create,
        crate::routes::domains::update,
        crate::routes::domains::delete,
    ),
    components(
        schemas(
            HealthResponse,
            LoginRequest,
            DomainInputDoc,
            DomainPatchDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "domains")
    )
)]
pub struct ApiDoc;
