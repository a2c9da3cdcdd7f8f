pub mod catalogo_repository;
pub mod config;
pub mod database;
pub mod user_repository;
pub mod vehiculo_repository;

pub use catalogo_repository::{CatalogoKind, CatalogoRepository};
pub use config::DatabaseConfig;
pub use database::Database;
pub use user_repository::UserRepository;
pub use vehiculo_repository::VehiculoRepository;
