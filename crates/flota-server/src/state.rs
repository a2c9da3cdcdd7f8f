use flota_db::Database;

/// Shared application state, available to all route handlers via
/// `State<Arc<AppState>>`. Constructed once at startup; no module-level
/// singletons.
pub struct AppState {
    pub db: Database,
    /// HS256 signing secret for session tokens.
    pub jwt_secret: String,
}
