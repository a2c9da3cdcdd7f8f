use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Flota API",
        version = "0.1.0",
        description = "REST backend for users, vehicle brands, vehicle types, and vehicles."
    ),
    paths(
        crate::routes::login,
        crate::routes::list_users,
        crate::routes::create_user,
        crate::routes::get_user,
        crate::routes::edit_user,
        crate::routes::delete_user,
        crate::routes::list_marcas,
        crate::routes::create_marca,
        crate::routes::get_marca,
        crate::routes::update_marca,
        crate::routes::delete_marca,
        crate::routes::list_tipos,
        crate::routes::create_tipo,
        crate::routes::get_tipo,
        crate::routes::update_tipo,
        crate::routes::delete_tipo,
        crate::routes::list_vehiculos,
        crate::routes::create_vehiculo,
        crate::routes::update_vehiculo,
        crate::routes::delete_vehiculo,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::LoginRequest,
        crate::dto::LoginResponse,
        crate::dto::CreateUserRequest,
        crate::dto::UpdateUserRequest,
        crate::dto::UserFullResponse,
        crate::dto::UserPublicResponse,
        crate::dto::NombreRequest,
        crate::dto::CatalogoResponse,
        crate::dto::VehiculoResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "auth", description = "Login and session tokens"),
        (name = "users", description = "User management (admin-gated writes)"),
        (name = "marcas", description = "Vehicle brands"),
        (name = "tipos", description = "Vehicle types"),
        (name = "vehiculos", description = "Vehicles"),
        (name = "system", description = "Health and system status"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Adds Bearer token security scheme to the OpenAPI spec.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token obtained from POST /login."))
                        .build(),
                ),
            );
        }
    }
}
