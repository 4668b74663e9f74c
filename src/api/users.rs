use actix_web::{web, HttpResponse};
use crate::{
    models::{CreateUserRequest, ErrorResponse, MessageResponse, UpdateUserRequest, User, UserId},
    store::UserStore,
    utils::AppError,
};

/// Registra as rotas de `/users` e a configuração do extractor JSON.
///
/// O corpo é aceito com qualquer Content-Type (ou nenhum).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .content_type(|_| true),
    )
    .service(
        web::scope("/users")
            .route("", web::post().to(create_user))
            .route("", web::get().to(get_users))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}

fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    raw.parse::<UserId>().map_err(|_| {
        log::warn!("⚠️ Invalid user ID: {:?}", raw);
        AppError::invalid_user_id()
    })
}

/// Corpo do PUT: `null` equivale a `{}`; qualquer coisa que não seja objeto é rejeitada
fn parse_update_body(value: serde_json::Value) -> Result<UpdateUserRequest, String> {
    match value {
        serde_json::Value::Null => Ok(UpdateUserRequest::default()),
        value @ serde_json::Value::Object(_) => {
            serde_json::from_value(value).map_err(|e| e.to_string())
        }
        other => Err(format!("expected a JSON object, got {}", other)),
    }
}

/// POST /users - Cria um novo usuário
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Name or email missing", body = ErrorResponse)
    )
)]
pub async fn create_user(
    store: web::Data<UserStore>,
    body: Result<web::Json<CreateUserRequest>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let request = match body {
        Ok(json) if json.is_complete() => json.into_inner(),
        Ok(_) => {
            log::warn!("⚠️ POST /users - name or email missing");
            return Err(AppError::InvalidRequest("Name and email are required".to_string()));
        }
        Err(e) => {
            log::warn!("⚠️ POST /users - unreadable body: {}", e);
            return Err(AppError::InvalidRequest("Name and email are required".to_string()));
        }
    };

    let user = store.create(&request.name, &request.email);
    log::info!("✅ POST /users - created user {}", user.id);

    Ok(HttpResponse::Created().json(user))
}

/// GET /users - Lista todos os usuários (sem ordem garantida)
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    )
)]
pub async fn get_users(store: web::Data<UserStore>) -> HttpResponse {
    let users = store.get_all();
    log::info!("📋 GET /users - {} users", users.len());

    HttpResponse::Ok().json(users)
}

/// GET /users/{id} - Busca usuário pelo id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Invalid user ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    store: web::Data<UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&path)?;

    match store.get_by_id(id) {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => {
            log::warn!("⚠️ GET /users/{} - not found", id);
            Err(AppError::user_not_found())
        }
    }
}

/// PUT /users/{id} - Atualiza usuário
///
/// Só os campos enviados e não vazios são alterados.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid user ID or body", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn update_user(
    store: web::Data<UserStore>,
    path: web::Path<String>,
    body: Result<web::Json<serde_json::Value>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&path)?;

    let request = body
        .map_err(|e| e.to_string())
        .and_then(|json| parse_update_body(json.into_inner()))
        .map_err(|e| {
            log::warn!("⚠️ PUT /users/{} - unreadable body: {}", id, e);
            AppError::InvalidRequest("No data provided".to_string())
        })?;

    let name = request.name.as_deref().unwrap_or_default();
    let email = request.email.as_deref().unwrap_or_default();

    match store.update(id, name, email) {
        Some(user) => {
            log::info!("🔧 PUT /users/{} - updated", id);
            Ok(HttpResponse::Ok().json(user))
        }
        None => {
            log::warn!("⚠️ PUT /users/{} - not found", id);
            Err(AppError::user_not_found())
        }
    }
}

/// DELETE /users/{id} - Remove usuário
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid user ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    store: web::Data<UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&path)?;

    if !store.delete(id) {
        log::warn!("⚠️ DELETE /users/{} - not found", id);
        return Err(AppError::user_not_found());
    }

    log::info!("🗑️  DELETE /users/{} - removed", id);
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "User deleted".to_string(),
    }))
}
