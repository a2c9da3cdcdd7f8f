use axum::http::StatusCode;
use jsonwebtoken::{EncodingKey, Header};
use tower::ServiceExt;

use flota_server::jwt::Claims;

use crate::integration::common::{
    ADMIN_PASSWORD, ADMIN_USER, LECTOR_PASSWORD, LECTOR_USER, TEST_JWT_SECRET, body_json,
    json_request, login, setup_test_app,
};

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(json_request("GET", "/health", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"], "ok");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_returns_bearer_token_for_both_credential_kinds() {
    let app = setup_test_app().await;

    // Hashed credential.
    let admin_token = login(&app.router, ADMIN_USER, ADMIN_PASSWORD).await;
    assert!(admin_token.starts_with("Bearer "));

    // Legacy plaintext credential.
    let lector_token = login(&app.router, LECTOR_USER, LECTOR_PASSWORD).await;
    assert!(lector_token.starts_with("Bearer "));

    let claims = flota_server::jwt::parse(
        admin_token.strip_prefix("Bearer ").unwrap(),
        TEST_JWT_SECRET,
    )
    .unwrap();
    assert_eq!(claims.sub, ADMIN_USER);
    assert!(claims.administrador);
}

#[tokio::test]
async fn login_with_wrong_password_returns_401() {
    let app = setup_test_app().await;

    let body = serde_json::json!({ "username": ADMIN_USER, "password": "incorrecta" });
    let response = app
        .router
        .oneshot(json_request("POST", "/login", None, Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["Mensaje"], "El usuario y la contraseña no coinciden");
}

#[tokio::test]
async fn login_with_missing_fields_returns_400() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            "/login",
            None,
            Some(serde_json::json!({ "username": ADMIN_USER })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Authorization gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_token_returns_401() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(json_request("GET", "/users", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_returns_401() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(json_request(
            "GET",
            "/vehiculos",
            Some("Bearer no.es.un.jwt"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_returns_401() {
    let app = setup_test_app().await;

    let mut claims = Claims::new(ADMIN_USER, true, 60);
    claims.iat -= 7200;
    claims.exp -= 7200;
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app
        .router
        .oneshot(json_request(
            "GET",
            "/users",
            Some(&format!("Bearer {token}")),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["Mensaje"], "El token ha expirado");
}

// ---------------------------------------------------------------------------
// Users — projection and admin-gated writes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_admin_listing_gets_usernames_only() {
    let app = setup_test_app().await;
    let token = login(&app.router, LECTOR_USER, LECTOR_PASSWORD).await;

    let response = app
        .router
        .oneshot(json_request("GET", "/users", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    for record in records {
        assert!(record.get("username").is_some());
        assert!(record.get("id").is_none());
        assert!(record.get("password_hash").is_none());
        assert!(record.get("is_admin").is_none());
    }
}

#[tokio::test]
async fn admin_listing_gets_full_records() {
    let app = setup_test_app().await;
    let token = login(&app.router, ADMIN_USER, ADMIN_PASSWORD).await;

    let response = app
        .router
        .oneshot(json_request("GET", "/users", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    for record in records {
        assert!(record.get("id").is_some());
        assert!(record.get("password_hash").is_some());
        assert!(record.get("is_admin").is_some());
    }
}

#[tokio::test]
async fn get_user_by_id_is_projected_for_non_admin() {
    let app = setup_test_app().await;
    let token = login(&app.router, LECTOR_USER, LECTOR_PASSWORD).await;

    let response = app
        .router
        .clone()
        .oneshot(json_request("GET", "/users/1", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["username"], ADMIN_USER);
    assert!(json.get("password_hash").is_none());

    let response = app
        .router
        .oneshot(json_request("GET", "/users/999", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_user_requires_admin() {
    let app = setup_test_app().await;
    let token = login(&app.router, LECTOR_USER, LECTOR_PASSWORD).await;

    let body = serde_json::json!({ "username": "nuevo", "password": "clave123" });
    let response = app
        .router
        .oneshot(json_request("POST", "/users", Some(&token), Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["mensaje"], "Solo el admin puede crear nuevos usuarios");
}

#[tokio::test]
async fn created_user_is_stored_hashed_and_can_login() {
    let app = setup_test_app().await;
    let token = login(&app.router, ADMIN_USER, ADMIN_PASSWORD).await;

    let body = serde_json::json!({ "username": "nuevo", "password": "clave123" });
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/users", Some(&token), Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["Usuario"]["username"], "nuevo");

    let (stored,): (String,) =
        sqlx::query_as("SELECT password_hash FROM users WHERE username = 'nuevo'")
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert!(stored.starts_with("$argon2"));

    login(&app.router, "nuevo", "clave123").await;
}

#[tokio::test]
async fn duplicate_username_returns_400_with_errores() {
    let app = setup_test_app().await;
    let token = login(&app.router, ADMIN_USER, ADMIN_PASSWORD).await;

    let body = serde_json::json!({ "username": LECTOR_USER, "password": "clave123" });
    let response = app
        .router
        .oneshot(json_request("POST", "/users", Some(&token), Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["mensaje"], "El nombre de usuario ya existe");
    assert!(json["errores"]["username"].is_array());
}

#[tokio::test]
async fn edit_user_rehashes_password() {
    let app = setup_test_app().await;
    let token = login(&app.router, ADMIN_USER, ADMIN_PASSWORD).await;

    let body = serde_json::json!({ "password": "nueva-clave1" });
    let response = app
        .router
        .clone()
        .oneshot(json_request("PUT", "/users/2", Some(&token), Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let (stored,): (String,) =
        sqlx::query_as("SELECT password_hash FROM users WHERE id = 2")
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert!(stored.starts_with("$argon2"));

    login(&app.router, LECTOR_USER, "nueva-clave1").await;
}

#[tokio::test]
async fn delete_user_is_idempotent_with_404() {
    let app = setup_test_app().await;
    let token = login(&app.router, ADMIN_USER, ADMIN_PASSWORD).await;

    let response = app
        .router
        .clone()
        .oneshot(json_request("DELETE", "/users/2", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .router
        .clone()
        .oneshot(json_request("DELETE", "/users/2", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Nonexistent id straight away.
    let response = app
        .router
        .oneshot(json_request("DELETE", "/users/999", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["mensaje"], "El usuario no existe");
}

// ---------------------------------------------------------------------------
// Marcas / tipos — no authentication required
// ---------------------------------------------------------------------------

#[tokio::test]
async fn marcas_are_reachable_without_any_token() {
    let app = setup_test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(json_request("GET", "/marcas", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));

    let body = serde_json::json!({ "nombre": "Toyota" });
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/marcas", None, Some(body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["marca creada"], "Toyota");

    let response = app
        .router
        .oneshot(json_request("GET", "/marcas/1", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["nombre"], "Toyota");
}

#[tokio::test]
async fn marca_without_nombre_returns_400() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            "/marcas",
            None,
            Some(serde_json::json!({})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "El nombre de la marca es obligatorio");
}

#[tokio::test]
async fn tipo_lifecycle_without_token() {
    let app = setup_test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/tipos",
            None,
            Some(serde_json::json!({ "nombre": "Sedán" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["tipo creado"]["nombre"], "Sedán");

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/tipos/1",
            None,
            Some(serde_json::json!({ "nombre": "SUV" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["tipo actualizado"]["nombre"], "SUV");

    let response = app
        .router
        .clone()
        .oneshot(json_request("DELETE", "/tipos/1", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .router
        .oneshot(json_request("DELETE", "/tipos/1", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Tipo no encontrado");
}

// ---------------------------------------------------------------------------
// Vehiculos — validation pipeline
// ---------------------------------------------------------------------------

async fn seed_marca_y_tipo(app: &crate::integration::common::TestApp) {
    sqlx::query("INSERT INTO marcas (nombre) VALUES ('Toyota')")
        .execute(&app.pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO tipos (nombre) VALUES ('Sedán')")
        .execute(&app.pool)
        .await
        .unwrap();
}

#[tokio::test]
async fn vehicle_create_happy_path() {
    let app = setup_test_app().await;
    seed_marca_y_tipo(&app).await;
    let token = login(&app.router, ADMIN_USER, ADMIN_PASSWORD).await;

    let anio = flota_core::validation::current_year() + 1;
    let body = serde_json::json!({
        "modelo": "Corolla",
        "anio_fabricacion": anio,
        "precio": 25000.0,
        "marca_id": 1,
        "tipo_id": 1
    });
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/vehiculos", Some(&token), Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["modelo"], "Corolla");
    assert_eq!(json["anio_fabricacion"], anio);

    let response = app
        .router
        .oneshot(json_request("GET", "/vehiculos", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn vehicle_past_year_is_rejected_with_detalles() {
    let app = setup_test_app().await;
    seed_marca_y_tipo(&app).await;
    let token = login(&app.router, ADMIN_USER, ADMIN_PASSWORD).await;

    let body = serde_json::json!({
        "modelo": "X",
        "anio_fabricacion": flota_core::validation::current_year() - 1,
        "precio": 100,
        "marca_id": 1,
        "tipo_id": 1
    });
    let response = app
        .router
        .oneshot(json_request("POST", "/vehiculos", Some(&token), Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Datos inválidos");
    assert!(json["detalles"]["anio_fabricacion"].is_array());
}

#[tokio::test]
async fn vehicle_with_multiple_invalid_fields_reports_them_all() {
    let app = setup_test_app().await;
    let token = login(&app.router, ADMIN_USER, ADMIN_PASSWORD).await;

    let body = serde_json::json!({
        "modelo": "",
        "anio_fabricacion": 1990,
        "precio": -1,
        "marca_id": 999,
        "tipo_id": 999
    });
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/vehiculos", Some(&token), Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    for field in ["modelo", "anio_fabricacion", "precio", "marca_id", "tipo_id"] {
        assert!(
            json["detalles"][field].is_array(),
            "missing detalle for {field}"
        );
    }

    // Nothing was written.
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vehiculos")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn vehicle_writes_require_admin() {
    let app = setup_test_app().await;
    let token = login(&app.router, LECTOR_USER, LECTOR_PASSWORD).await;

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/vehiculos",
            Some(&token),
            Some(serde_json::json!({})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .router
        .oneshot(json_request("DELETE", "/vehiculos/1", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn vehicle_partial_update_validates_provided_fields() {
    let app = setup_test_app().await;
    seed_marca_y_tipo(&app).await;
    let token = login(&app.router, ADMIN_USER, ADMIN_PASSWORD).await;

    let anio = flota_core::validation::current_year();
    sqlx::query(
        "INSERT INTO vehiculos (modelo, anio_fabricacion, precio, marca_id, tipo_id)
         VALUES ('Corolla', $1, 25000, 1, 1)",
    )
    .bind(anio)
    .execute(&app.pool)
    .await
    .unwrap();

    // Only precio provided: valid partial update.
    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/vehiculos/1",
            Some(&token),
            Some(serde_json::json!({ "precio": 19999.5 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["precio"], 19999.5);
    assert_eq!(json["modelo"], "Corolla");

    // Unknown marca reference is rejected.
    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/vehiculos/1",
            Some(&token),
            Some(serde_json::json!({ "marca_id": 42 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["detalles"]["marca_id"].is_array());

    // Nonexistent vehicle.
    let response = app
        .router
        .oneshot(json_request(
            "PUT",
            "/vehiculos/99",
            Some(&token),
            Some(serde_json::json!({ "precio": 1 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn vehicle_delete_is_idempotent_with_404() {
    let app = setup_test_app().await;
    seed_marca_y_tipo(&app).await;
    let token = login(&app.router, ADMIN_USER, ADMIN_PASSWORD).await;

    sqlx::query(
        "INSERT INTO vehiculos (modelo, anio_fabricacion, precio, marca_id, tipo_id)
         VALUES ('Corolla', 2030, 25000, 1, 1)",
    )
    .execute(&app.pool)
    .await
    .unwrap();

    let response = app
        .router
        .clone()
        .oneshot(json_request("DELETE", "/vehiculos/1", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["Mensaje"], "Vehículo eliminado exitosamente");

    let response = app
        .router
        .oneshot(json_request("DELETE", "/vehiculos/1", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["Mensaje"], "Vehículo no encontrado");
}
