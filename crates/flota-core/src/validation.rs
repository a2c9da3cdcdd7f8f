//! Per-entity field validation run before any persistence write.
//!
//! Validators operate on the raw JSON payload rather than a typed DTO so
//! that type mismatches ("debe ser un número entero") are reported per
//! field alongside the business-rule checks, and every failing check
//! appears in a single response instead of short-circuiting.

use std::collections::BTreeMap;

use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::error::AppError;
use crate::models::NewVehiculo;

pub const MSG_DATOS_INVALIDOS: &str = "Datos inválidos";

const MSG_MODELO_VACIO: &str = "El modelo no puede estar vacío.";
const MSG_MODELO_TIPO: &str = "El modelo debe ser una cadena de texto.";
const MSG_ANIO_PASADO: &str = "El año de fabricación debe ser el año actual o posterior.";
const MSG_ANIO_TIPO: &str = "El año de fabricación debe ser un número entero.";
const MSG_PRECIO_POSITIVO: &str = "El precio debe ser un valor positivo.";
const MSG_PRECIO_TIPO: &str = "El precio debe ser un valor numérico.";
const MSG_MARCA_ID_TIPO: &str = "El ID de la marca debe ser un número entero.";
const MSG_TIPO_ID_TIPO: &str = "El ID del tipo debe ser un número entero.";
pub const MSG_MARCA_NO_EXISTE: &str = "La marca con ese ID no existe.";
pub const MSG_TIPO_NO_EXISTE: &str = "El tipo con ese ID no existe.";

/// Accumulated field-level violations, keyed by field name.
///
/// Serializes as the `detalles`/`errores` object of a 400 response.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Consume into a 400-mapped [`AppError`] with the given summary.
    pub fn into_error(self, message: &str) -> AppError {
        AppError::validation(message, self)
    }
}

/// Partially-parsed vehicle payload. A field is `None` when it was
/// absent from the payload or failed its type check.
#[derive(Debug, Default, Clone)]
pub struct VehiculoDraft {
    pub modelo: Option<String>,
    pub anio_fabricacion: Option<i32>,
    pub precio: Option<f64>,
    pub marca_id: Option<i32>,
    pub tipo_id: Option<i32>,
}

impl VehiculoDraft {
    /// Convert into an insertable record. Only valid once every field
    /// parsed, i.e. after validation produced no errors on a full payload.
    pub fn into_new_vehiculo(self) -> Option<NewVehiculo> {
        Some(NewVehiculo {
            modelo: self.modelo?,
            anio_fabricacion: self.anio_fabricacion?,
            precio: self.precio?,
            marca_id: self.marca_id?,
            tipo_id: self.tipo_id?,
        })
    }
}

/// The current calendar year, UTC.
pub fn current_year() -> i32 {
    Utc::now().year()
}

fn json_as_i32(value: &serde_json::Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}

/// Validate a vehicle payload.
///
/// With `require_all` set (create), absent fields are violations; without
/// it (partial update), only fields present in the payload are checked.
/// All checks run independently and accumulate into the returned error
/// map. Referential checks against the store (marca/tipo existence) are
/// the caller's responsibility and merge into the same map.
pub fn validate_vehiculo(
    payload: &serde_json::Value,
    current_year: i32,
    require_all: bool,
) -> (VehiculoDraft, ValidationErrors) {
    let mut draft = VehiculoDraft::default();
    let mut errors = ValidationErrors::new();

    match payload.get("modelo") {
        None => {
            if require_all {
                errors.add("modelo", MSG_MODELO_VACIO);
            }
        }
        Some(value) => match value.as_str() {
            Some(s) if s.trim().is_empty() => errors.add("modelo", MSG_MODELO_VACIO),
            Some(s) => draft.modelo = Some(s.to_string()),
            None => errors.add("modelo", MSG_MODELO_TIPO),
        },
    }

    match payload.get("anio_fabricacion") {
        None => {
            if require_all {
                errors.add("anio_fabricacion", MSG_ANIO_TIPO);
            }
        }
        Some(value) => match json_as_i32(value) {
            Some(anio) if anio < current_year => errors.add("anio_fabricacion", MSG_ANIO_PASADO),
            Some(anio) => draft.anio_fabricacion = Some(anio),
            None => errors.add("anio_fabricacion", MSG_ANIO_TIPO),
        },
    }

    match payload.get("precio") {
        None => {
            if require_all {
                errors.add("precio", MSG_PRECIO_TIPO);
            }
        }
        Some(value) => match value.as_f64() {
            Some(precio) if precio <= 0.0 => errors.add("precio", MSG_PRECIO_POSITIVO),
            Some(precio) => draft.precio = Some(precio),
            None => errors.add("precio", MSG_PRECIO_TIPO),
        },
    }

    match payload.get("marca_id") {
        None => {
            if require_all {
                errors.add("marca_id", MSG_MARCA_ID_TIPO);
            }
        }
        Some(value) => match json_as_i32(value) {
            Some(id) => draft.marca_id = Some(id),
            None => errors.add("marca_id", MSG_MARCA_ID_TIPO),
        },
    }

    match payload.get("tipo_id") {
        None => {
            if require_all {
                errors.add("tipo_id", MSG_TIPO_ID_TIPO);
            }
        }
        Some(value) => match json_as_i32(value) {
            Some(id) => draft.tipo_id = Some(id),
            None => errors.add("tipo_id", MSG_TIPO_ID_TIPO),
        },
    }

    (draft, errors)
}

/// Validate a catalog (marca/tipo) payload: `nombre` present, string,
/// non-empty. Returns the name on success.
pub fn validate_nombre(payload: &serde_json::Value) -> Option<String> {
    payload
        .get("nombre")
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}
