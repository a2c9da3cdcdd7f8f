use serde::{Deserialize, Serialize};

/// An account with login credentials and an admin flag.
///
/// `password_hash` holds either an Argon2 PHC string or, for accounts
/// created before hashing was introduced, the legacy plaintext value
/// (see [`crate::credential`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// DTO for inserting a new user. The credential must already be hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// A catalog entry — both marcas (brands) and tipos (vehicle types)
/// share this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogo {
    pub id: i32,
    pub nombre: String,
}

/// A vehicle, referencing a marca and a tipo by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehiculo {
    pub id: i32,
    pub modelo: String,
    pub anio_fabricacion: i32,
    pub precio: f64,
    pub marca_id: i32,
    pub tipo_id: i32,
}

/// DTO for inserting a new vehicle after validation has passed.
#[derive(Debug, Clone)]
pub struct NewVehiculo {
    pub modelo: String,
    pub anio_fabricacion: i32,
    pub precio: f64,
    pub marca_id: i32,
    pub tipo_id: i32,
}
