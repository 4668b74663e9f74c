use actix_web::{http::header, HttpResponse};
use utoipa::OpenApi;

pub const SWAGGER_UI_PATH: &str = "/swagger/";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        version = "1.0.0",
        description = "Lightweight REST API for managing users (Create, Read, Update, Delete) with in-memory data storage.\n\n**Notes:**\n- Ids are assigned by the server, start at 1 and are never reused\n- `PUT /users/{id}` only changes the fields sent with a non-empty value\n- Data is lost when the service restarts"
    ),
    paths(
        // Users
        crate::api::users::create_user,
        crate::api::users::get_users,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            // Users
            crate::models::User,
            crate::models::CreateUserRequest,
            crate::models::UpdateUserRequest,
            crate::models::ErrorResponse,
            crate::models::MessageResponse,

            // Health & Metrics
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "User CRUD endpoints backed by the in-memory store."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;

/// GET / - Redireciona para a Swagger UI
pub async fn redirect_to_swagger() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, SWAGGER_UI_PATH))
        .finish()
}
