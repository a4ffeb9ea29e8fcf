pub mod auth_service;
pub mod validation_service;

pub use auth_service::*;
pub use validation_service::*;
