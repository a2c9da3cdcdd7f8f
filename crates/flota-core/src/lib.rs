pub mod credential;
pub mod error;
pub mod models;
pub mod validation;

pub use credential::{StoredCredential, hash_password, verify_password};
pub use error::AppError;
pub use models::{Catalogo, NewUser, NewVehiculo, User, Vehiculo};
pub use validation::{ValidationErrors, VehiculoDraft};
