pub mod category;
pub mod registry;

// Re-export commonly used types
pub use category::ComponentCategory;
pub use registry::{ComponentRegistry, PlacedComponent};
