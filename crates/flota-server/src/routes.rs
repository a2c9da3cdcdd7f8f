use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Extension, Router};
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use flota_core::models::{NewUser, NewVehiculo};
use flota_core::validation::{
    MSG_DATOS_INVALIDOS, MSG_MARCA_NO_EXISTE, MSG_TIPO_NO_EXISTE, ValidationErrors, VehiculoDraft,
    current_year, validate_nombre, validate_vehiculo,
};
use flota_core::{AppError, hash_password, verify_password};

use crate::auth::{Session, require_session};
use crate::dto::{
    CatalogoResponse, CreateUserRequest, HealthResponse, LoginRequest, LoginResponse,
    NombreRequest, UpdateUserRequest, UserFullResponse, UserPublicResponse, VehiculoResponse,
};
use crate::error::ApiError;
use crate::jwt;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes and middleware.
///
/// Marcas/tipos routes intentionally carry no authentication — observed
/// behavior preserved from the system this replaces (see DESIGN.md).
pub fn router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(edit_user).delete(delete_user),
        )
        .route("/vehiculos", get(list_vehiculos).post(create_vehiculo))
        .route(
            "/vehiculos/{id}",
            put(update_vehiculo).delete(delete_vehiculo),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    let public = Router::new()
        .route("/login", post(login))
        .route("/marcas", get(list_marcas).post(create_marca))
        .route(
            "/marcas/{id}",
            get(get_marca).put(update_marca).delete(delete_marca),
        )
        .route("/tipos", get(list_tipos).post(create_tipo))
        .route(
            "/tipos/{id}",
            get(get_tipo).put(update_tipo).delete(delete_tipo),
        )
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(protected).with_state(state)
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token", body = LoginResponse),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Credentials do not match"),
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let (username, password) = match (
        body.username.filter(|u| !u.is_empty()),
        body.password.filter(|p| !p.is_empty()),
    ) {
        (Some(u), Some(p)) => (u, p),
        _ => {
            let body = json!({ "Mensaje": "Se requiere nombre de usuario y contraseña" });
            return Ok((StatusCode::BAD_REQUEST, axum::Json(body)).into_response());
        }
    };

    let user = state.db.users().get_by_username(&username).await?;

    match user {
        Some(user) if verify_password(&user.password_hash, &password) => {
            let token = jwt::issue(&user.username, user.is_admin, &state.jwt_secret)?;
            tracing::info!(username = %user.username, "login succeeded");
            let response = LoginResponse {
                token: format!("Bearer {token}"),
            };
            Ok(axum::Json(response).into_response())
        }
        _ => {
            tracing::info!(username = %username, "login failed");
            let body = json!({ "Mensaje": "El usuario y la contraseña no coinciden" });
            Ok((StatusCode::UNAUTHORIZED, axum::Json(body)).into_response())
        }
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users; full records for admins, username-only otherwise"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
) -> Result<Response, ApiError> {
    let users = state.db.users().list().await?;

    if session.administrador {
        let full: Vec<UserFullResponse> = users.into_iter().map(Into::into).collect();
        Ok(axum::Json(full).into_response())
    } else {
        let public: Vec<UserPublicResponse> = users.into_iter().map(Into::into).collect();
        Ok(axum::Json(public).into_response())
    }
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Missing fields or duplicate username"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin required"),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    axum::Json(body): axum::Json<CreateUserRequest>,
) -> Result<Response, ApiError> {
    if !session.administrador {
        let body = json!({ "mensaje": "Solo el admin puede crear nuevos usuarios" });
        return Ok((StatusCode::FORBIDDEN, axum::Json(body)).into_response());
    }

    let (username, password) = match (
        body.username.filter(|u| !u.is_empty()),
        body.password.filter(|p| !p.is_empty()),
    ) {
        (Some(u), Some(p)) => (u, p),
        _ => {
            let body = json!({ "mensaje": "Se requieren nombre de usuario y contraseña" });
            return Ok((StatusCode::BAD_REQUEST, axum::Json(body)).into_response());
        }
    };

    if state.db.users().username_exists(&username).await? {
        let mut errores = ValidationErrors::new();
        errores.add("username", "El nombre de usuario ya existe");
        let body = json!({ "mensaje": "El nombre de usuario ya existe", "errores": errores });
        return Ok((StatusCode::BAD_REQUEST, axum::Json(body)).into_response());
    }

    // New accounts are always stored hashed; the legacy plaintext branch
    // of the verifier never applies to rows written here.
    let nuevo = NewUser {
        username,
        password_hash: hash_password(&password)?,
        is_admin: false,
    };
    let user = state.db.users().create(&nuevo).await?;

    let body = json!({
        "mensaje": "Usuario creado correctamente",
        "Usuario": { "username": user.username }
    });
    Ok((StatusCode::CREATED, axum::Json(body)).into_response())
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User record, projected by caller role"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User does not exist"),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let user = state.db.users().get(id).await?;

    match user {
        Some(user) if session.administrador => {
            Ok(axum::Json(UserFullResponse::from(user)).into_response())
        }
        Some(user) => Ok(axum::Json(UserPublicResponse::from(user)).into_response()),
        None => {
            let body = json!({ "mensaje": "El usuario no existe" });
            Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response())
        }
    }
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User edited"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin required"),
        (status = 404, description = "User does not exist"),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn edit_user(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
    axum::Json(body): axum::Json<UpdateUserRequest>,
) -> Result<Response, ApiError> {
    if !session.administrador {
        let body = json!({ "mensaje": "Solo el administrador puede editar usuarios" });
        return Ok((StatusCode::FORBIDDEN, axum::Json(body)).into_response());
    }

    let username = body.username.filter(|u| !u.is_empty());
    let password_hash = match body.password.filter(|p| !p.is_empty()) {
        Some(password) => Some(hash_password(&password)?),
        None => None,
    };

    let updated = state
        .db
        .users()
        .update(id, username.as_deref(), password_hash.as_deref())
        .await?;

    if updated {
        let body = json!({ "mensaje": "Usuario editado correctamente" });
        Ok(axum::Json(body).into_response())
    } else {
        let body = json!({ "mensaje": "El usuario no existe" });
        Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response())
    }
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin required"),
        (status = 404, description = "User does not exist"),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    if !session.administrador {
        let body = json!({ "mensaje": "Solo el administrador puede eliminar usuarios" });
        return Ok((StatusCode::FORBIDDEN, axum::Json(body)).into_response());
    }

    if state.db.users().delete(id).await? {
        let body = json!({ "mensaje": "Usuario eliminado correctamente" });
        Ok(axum::Json(body).into_response())
    } else {
        let body = json!({ "mensaje": "El usuario no existe" });
        Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response())
    }
}

// ---------------------------------------------------------------------------
// Marcas
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/marcas",
    responses((status = 200, description = "All marcas", body = [CatalogoResponse])),
    tag = "marcas"
)]
pub async fn list_marcas(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let marcas = state.db.marcas().list().await?;
    let response: Vec<CatalogoResponse> = marcas.into_iter().map(Into::into).collect();
    Ok(axum::Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/marcas",
    request_body = NombreRequest,
    responses(
        (status = 201, description = "Marca created"),
        (status = 400, description = "Missing nombre"),
    ),
    tag = "marcas"
)]
pub async fn create_marca(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    let Some(nombre) = validate_nombre(&body) else {
        let body = json!({ "error": "El nombre de la marca es obligatorio" });
        return Ok((StatusCode::BAD_REQUEST, axum::Json(body)).into_response());
    };

    let marca = state.db.marcas().create(&nombre).await?;
    let body = json!({ "marca creada": marca.nombre });
    Ok((StatusCode::CREATED, axum::Json(body)).into_response())
}

#[utoipa::path(
    get,
    path = "/marcas/{id}",
    params(("id" = i32, Path, description = "Marca id")),
    responses(
        (status = 200, description = "Marca record", body = CatalogoResponse),
        (status = 404, description = "Marca not found"),
    ),
    tag = "marcas"
)]
pub async fn get_marca(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    match state.db.marcas().get(id).await? {
        Some(marca) => Ok(axum::Json(CatalogoResponse::from(marca)).into_response()),
        None => {
            let body = json!({ "error": "Marca no encontrada" });
            Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response())
        }
    }
}

#[utoipa::path(
    put,
    path = "/marcas/{id}",
    params(("id" = i32, Path, description = "Marca id")),
    request_body = NombreRequest,
    responses(
        (status = 200, description = "Marca updated"),
        (status = 400, description = "Missing nombre"),
        (status = 404, description = "Marca not found"),
    ),
    tag = "marcas"
)]
pub async fn update_marca(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    axum::Json(body): axum::Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    if state.db.marcas().get(id).await?.is_none() {
        let body = json!({ "error": "Marca no encontrada" });
        return Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response());
    }

    let Some(nombre) = validate_nombre(&body) else {
        let body = json!({ "error": "El nombre de la marca es obligatorio" });
        return Ok((StatusCode::BAD_REQUEST, axum::Json(body)).into_response());
    };

    match state.db.marcas().update(id, &nombre).await? {
        Some(marca) => {
            let body = json!({ "marca actualizada": { "id": marca.id, "nombre": marca.nombre } });
            Ok(axum::Json(body).into_response())
        }
        None => {
            let body = json!({ "error": "Marca no encontrada" });
            Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response())
        }
    }
}

#[utoipa::path(
    delete,
    path = "/marcas/{id}",
    params(("id" = i32, Path, description = "Marca id")),
    responses(
        (status = 200, description = "Marca deleted"),
        (status = 404, description = "Marca not found"),
    ),
    tag = "marcas"
)]
pub async fn delete_marca(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    match state.db.marcas().get(id).await? {
        Some(marca) => {
            state.db.marcas().delete(id).await?;
            let body = json!({ "marca eliminada": marca.nombre });
            Ok(axum::Json(body).into_response())
        }
        None => {
            let body = json!({ "error": "Marca no encontrada" });
            Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response())
        }
    }
}

// ---------------------------------------------------------------------------
// Tipos
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/tipos",
    responses((status = 200, description = "All tipos", body = [CatalogoResponse])),
    tag = "tipos"
)]
pub async fn list_tipos(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let tipos = state.db.tipos().list().await?;
    let response: Vec<CatalogoResponse> = tipos.into_iter().map(Into::into).collect();
    Ok(axum::Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/tipos",
    request_body = NombreRequest,
    responses(
        (status = 201, description = "Tipo created"),
        (status = 400, description = "Missing nombre"),
    ),
    tag = "tipos"
)]
pub async fn create_tipo(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    let Some(nombre) = validate_nombre(&body) else {
        let body = json!({ "error": "El nombre del tipo es obligatorio" });
        return Ok((StatusCode::BAD_REQUEST, axum::Json(body)).into_response());
    };

    let tipo = state.db.tipos().create(&nombre).await?;
    let body = json!({ "tipo creado": { "id": tipo.id, "nombre": tipo.nombre } });
    Ok((StatusCode::CREATED, axum::Json(body)).into_response())
}

#[utoipa::path(
    get,
    path = "/tipos/{id}",
    params(("id" = i32, Path, description = "Tipo id")),
    responses(
        (status = 200, description = "Tipo record", body = CatalogoResponse),
        (status = 404, description = "Tipo not found"),
    ),
    tag = "tipos"
)]
pub async fn get_tipo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    match state.db.tipos().get(id).await? {
        Some(tipo) => Ok(axum::Json(CatalogoResponse::from(tipo)).into_response()),
        None => {
            let body = json!({ "error": "Tipo no encontrado" });
            Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response())
        }
    }
}

#[utoipa::path(
    put,
    path = "/tipos/{id}",
    params(("id" = i32, Path, description = "Tipo id")),
    request_body = NombreRequest,
    responses(
        (status = 200, description = "Tipo updated"),
        (status = 400, description = "Missing nombre"),
        (status = 404, description = "Tipo not found"),
    ),
    tag = "tipos"
)]
pub async fn update_tipo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    axum::Json(body): axum::Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    if state.db.tipos().get(id).await?.is_none() {
        let body = json!({ "error": "Tipo no encontrado" });
        return Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response());
    }

    let Some(nombre) = validate_nombre(&body) else {
        let body = json!({ "error": "El nombre del tipo es obligatorio" });
        return Ok((StatusCode::BAD_REQUEST, axum::Json(body)).into_response());
    };

    match state.db.tipos().update(id, &nombre).await? {
        Some(tipo) => {
            let body = json!({ "tipo actualizado": { "id": tipo.id, "nombre": tipo.nombre } });
            Ok(axum::Json(body).into_response())
        }
        None => {
            let body = json!({ "error": "Tipo no encontrado" });
            Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response())
        }
    }
}

#[utoipa::path(
    delete,
    path = "/tipos/{id}",
    params(("id" = i32, Path, description = "Tipo id")),
    responses(
        (status = 200, description = "Tipo deleted"),
        (status = 404, description = "Tipo not found"),
    ),
    tag = "tipos"
)]
pub async fn delete_tipo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    match state.db.tipos().get(id).await? {
        Some(tipo) => {
            state.db.tipos().delete(id).await?;
            let body = json!({ "tipo eliminado": tipo.nombre });
            Ok(axum::Json(body).into_response())
        }
        None => {
            let body = json!({ "error": "Tipo no encontrado" });
            Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response())
        }
    }
}

// ---------------------------------------------------------------------------
// Vehiculos
// ---------------------------------------------------------------------------

/// Referential checks for the ids a draft carries, merged into the same
/// error map as the field-level checks.
async fn check_referencias(
    state: &AppState,
    draft: &VehiculoDraft,
    errors: &mut ValidationErrors,
) -> Result<(), AppError> {
    if let Some(id) = draft.marca_id
        && !state.db.marcas().exists(id).await?
    {
        errors.add("marca_id", MSG_MARCA_NO_EXISTE);
    }
    if let Some(id) = draft.tipo_id
        && !state.db.tipos().exists(id).await?
    {
        errors.add("tipo_id", MSG_TIPO_NO_EXISTE);
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/vehiculos",
    responses(
        (status = 200, description = "All vehicles", body = [VehiculoResponse]),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "vehiculos"
)]
pub async fn list_vehiculos(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let vehiculos = state.db.vehiculos().list().await?;
    let response: Vec<VehiculoResponse> = vehiculos.into_iter().map(Into::into).collect();
    Ok(axum::Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/vehiculos",
    responses(
        (status = 201, description = "Vehicle created", body = VehiculoResponse),
        (status = 400, description = "Validation failed, all violations in detalles"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin required"),
    ),
    security(("bearer" = [])),
    tag = "vehiculos"
)]
pub async fn create_vehiculo(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    axum::Json(payload): axum::Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    if !session.administrador {
        let body = json!({ "Mensaje": "Solo el admin puede crear vehículos nuevos" });
        return Ok((StatusCode::FORBIDDEN, axum::Json(body)).into_response());
    }

    let (draft, mut errors) = validate_vehiculo(&payload, current_year(), true);
    check_referencias(&state, &draft, &mut errors).await?;
    if !errors.is_empty() {
        return Err(errors.into_error(MSG_DATOS_INVALIDOS).into());
    }

    // A fully-validated complete payload always converts.
    let nuevo: NewVehiculo = draft
        .into_new_vehiculo()
        .ok_or_else(|| AppError::Generic("Incomplete vehicle draft after validation".into()))?;
    let vehiculo = state.db.vehiculos().create(&nuevo).await?;

    Ok((StatusCode::CREATED, axum::Json(VehiculoResponse::from(vehiculo))).into_response())
}

#[utoipa::path(
    put,
    path = "/vehiculos/{id}",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Vehicle updated", body = VehiculoResponse),
        (status = 400, description = "Validation failed, all violations in detalles"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin required"),
        (status = 404, description = "Vehicle not found"),
    ),
    security(("bearer" = [])),
    tag = "vehiculos"
)]
pub async fn update_vehiculo(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
    axum::Json(payload): axum::Json<serde_json::Value>,
) -> Result<Response, ApiError> {
    if !session.administrador {
        let body = json!({ "Mensaje": "Solo el admin puede modificar o eliminar vehículos" });
        return Ok((StatusCode::FORBIDDEN, axum::Json(body)).into_response());
    }

    if state.db.vehiculos().get(id).await?.is_none() {
        let body = json!({ "Mensaje": "Vehículo no encontrado" });
        return Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response());
    }

    // Partial update: only fields present in the payload are validated
    // and applied; absent fields keep their stored values.
    let (draft, mut errors) = validate_vehiculo(&payload, current_year(), false);
    check_referencias(&state, &draft, &mut errors).await?;
    if !errors.is_empty() {
        return Err(errors.into_error(MSG_DATOS_INVALIDOS).into());
    }

    match state.db.vehiculos().update(id, &draft).await? {
        Some(vehiculo) => Ok(axum::Json(VehiculoResponse::from(vehiculo)).into_response()),
        None => {
            let body = json!({ "Mensaje": "Vehículo no encontrado" });
            Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response())
        }
    }
}

#[utoipa::path(
    delete,
    path = "/vehiculos/{id}",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "Vehicle deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin required"),
        (status = 404, description = "Vehicle not found"),
    ),
    security(("bearer" = [])),
    tag = "vehiculos"
)]
pub async fn delete_vehiculo(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    if !session.administrador {
        let body = json!({ "Mensaje": "Solo el admin puede modificar o eliminar vehículos" });
        return Ok((StatusCode::FORBIDDEN, axum::Json(body)).into_response());
    }

    if state.db.vehiculos().delete(id).await? {
        let body = json!({ "Mensaje": "Vehículo eliminado exitosamente" });
        Ok(axum::Json(body).into_response())
    } else {
        let body = json!({ "Mensaje": "Vehículo no encontrado" });
        Ok((StatusCode::NOT_FOUND, axum::Json(body)).into_response())
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_status = match state.db.health_check().await {
        Ok(()) => "ok",
        Err(_) => "error",
    };

    let status = if db_status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if db_status == "ok" {
            "healthy"
        } else {
            "unhealthy"
        },
        database: db_status,
    };

    (status, axum::Json(response))
}
