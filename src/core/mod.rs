pub mod circuit;
pub mod components;
pub mod config;
pub mod connections;
pub mod errors;
pub mod routing;
pub mod selection;
pub mod session;
pub mod types;
