pub mod core;
pub mod export;

// Re-export commonly used types
pub use crate::core::circuit::Circuit;
pub use crate::core::components::ComponentCategory;
pub use crate::core::config::{ConnectionPolicy, EditorConfig};
pub use crate::core::errors::{PeError, PeResult};
pub use crate::core::session::{EditorEvent, EditorSession, EventOutcome};
pub use crate::core::types::{ComponentId, Connection, Position};
pub use crate::export::document::PeDocument;
