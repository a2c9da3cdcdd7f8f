use serde::{Deserialize, Serialize};

use flota_core::models::{Catalogo, User, Vehiculo};

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    /// `Bearer <jwt>`, ready to be sent back in the Authorization header.
    #[serde(rename = "Token")]
    pub token: String,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Full user record — only ever serialized for admin callers.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserFullResponse {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

impl From<User> for UserFullResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            password_hash: user.password_hash,
            is_admin: user.is_admin,
        }
    }
}

/// Data-minimized projection for non-admin callers: username only, never
/// the id, credential hash, or admin flag.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserPublicResponse {
    pub username: String,
}

impl From<User> for UserPublicResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
        }
    }
}

// ---------------------------------------------------------------------------
// Marcas / tipos
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct NombreRequest {
    pub nombre: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CatalogoResponse {
    pub id: i32,
    pub nombre: String,
}

impl From<Catalogo> for CatalogoResponse {
    fn from(c: Catalogo) -> Self {
        Self {
            id: c.id,
            nombre: c.nombre,
        }
    }
}

// ---------------------------------------------------------------------------
// Vehiculos
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct VehiculoResponse {
    pub id: i32,
    pub modelo: String,
    pub anio_fabricacion: i32,
    pub precio: f64,
    pub marca_id: i32,
    pub tipo_id: i32,
}

impl From<Vehiculo> for VehiculoResponse {
    fn from(v: Vehiculo) -> Self {
        Self {
            id: v.id,
            modelo: v.modelo,
            anio_fabricacion: v.anio_fabricacion,
            precio: v.precio,
            marca_id: v.marca_id,
            tipo_id: v.tipo_id,
        }
    }
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
