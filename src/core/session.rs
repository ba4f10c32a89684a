//! Editing session driven by events from the UI layer.
//!
//! The UI reports what the user did (dropped an icon, clicked a component,
//! pressed export, closed the window) as [`EditorEvent`]s. The session owns
//! the circuit, the selection state and the configuration, and turns each
//! event into a graph mutation or a file write.

use crate::core::circuit::Circuit;
use crate::core::config::EditorConfig;
use crate::core::errors::PeResult;
use crate::core::routing::{self, Connector};
use crate::core::selection::Selection;
use crate::core::types::{ComponentId, Connection, Position};
use crate::export::writer;
use log::{debug, info, warn};
use serde::Deserialize;
use std::path::PathBuf;

/// A user action reported by the interaction layer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
    /// An icon was dropped on the canvas
    Place {
        category: String,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    /// A placed component was clicked
    Select { id: String },
    /// The export button was pressed with the given name field contents
    Export {
        #[serde(default)]
        name: String,
    },
    /// The window is closing
    Close {
        #[serde(default)]
        name: String,
    },
}

/// What applying an event did
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Placed(ComponentId),
    FirstSelected(String),
    Connected(Connection),
    Exported(PathBuf),
    Closed(PathBuf),
    Ignored,
}

pub struct EditorSession {
    circuit: Circuit,
    selection: Selection,
    config: EditorConfig,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            circuit: Circuit::with_policy(config.connection_policy),
            selection: Selection::new(),
            config,
        }
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Apply one event
    pub fn apply(&mut self, event: EditorEvent) -> PeResult<EventOutcome> {
        match event {
            EditorEvent::Place { category, x, y } => Ok(self.place(&category, Position::new(x, y))),
            EditorEvent::Select { id } => self.select(&id),
            EditorEvent::Export { name } => self.export(&name).map(EventOutcome::Exported),
            EditorEvent::Close { name } => self.close(&name).map(EventOutcome::Closed),
        }
    }

    /// Apply events in order, stopping at the first error
    pub fn replay<I>(&mut self, events: I) -> PeResult<Vec<EventOutcome>>
    where
        I: IntoIterator<Item = EditorEvent>,
    {
        events.into_iter().map(|event| self.apply(event)).collect()
    }

    /// Handle a drop. Unknown categories are logged and ignored.
    pub fn place(&mut self, category: &str, position: Position) -> EventOutcome {
        match self.circuit.place_named(category, position) {
            Ok(id) => {
                self.selection.reset();
                EventOutcome::Placed(id)
            }
            Err(e) => {
                warn!("Ignoring drop: {}", e);
                EventOutcome::Ignored
            }
        }
    }

    /// Handle a click on a component
    pub fn select(&mut self, id: &str) -> PeResult<EventOutcome> {
        if self.circuit.component(id).is_none() {
            debug!("Click on '{}' does not hit a placed component", id);
            return Ok(EventOutcome::Ignored);
        }

        let repeated = self.selection.pending() == Some(id);
        match self.selection.click(id) {
            Some((from, to)) => Ok(EventOutcome::Connected(self.circuit.connect(&from, &to)?)),
            None if repeated => Ok(EventOutcome::Ignored),
            None => Ok(EventOutcome::FirstSelected(id.to_string())),
        }
    }

    /// Export the circuit as `<name>.json` into the output directory
    pub fn export(&self, entered_name: &str) -> PeResult<PathBuf> {
        let name = self.config.resolve_name(entered_name);
        let document = self.circuit.to_document(&name);
        writer::export_json(&document, &self.config.output_dir)
    }

    /// Record the circuit name in the session log
    pub fn close(&self, entered_name: &str) -> PeResult<PathBuf> {
        info!("closing window...");
        let name = self.config.resolve_name(entered_name);
        let path = self.config.log_path();
        writer::write_session_log(&path, &name)?;
        Ok(path)
    }

    /// Connector geometry for a connection, from component centers
    pub fn connector(&self, connection: &Connection) -> Option<Connector> {
        let from = self.circuit.component(connection.from())?;
        let to = self.circuit.component(connection.to())?;
        Some(routing::route(from.center(), to.center()))
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

/// Parse a JSON array of editor events
pub fn parse_events(text: &str) -> PeResult<Vec<EditorEvent>> {
    Ok(serde_json::from_str(text)?)
}
