pub mod manager;
pub mod connection_validator;

pub use connection_validator::ConnectionValidator;
pub use manager::ConnectionManager;
