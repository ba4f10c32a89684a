//! Canonical JSON description of a PE.
//!
//! The exported file wraps everything in a top-level `"PE"` object whose
//! fields appear in a fixed order: `name`, `inputs`, `outputs`, `registers`,
//! `muxes`, `fus`, `connections`. Downstream tools rely on that layout, so the
//! struct field order below is part of the format.

use crate::core::errors::{PeError, PeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Opcodes every functional unit is exported with
pub const DEFAULT_FU_OPS: [&str; 4] = ["ADD", "SUB", "AND", "OR"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeDocument {
    #[serde(rename = "PE")]
    pub pe: PeBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeBody {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
    #[serde(default)]
    pub registers: Vec<String>,
    #[serde(default)]
    pub muxes: Vec<String>,
    #[serde(default)]
    pub fus: Vec<FunctionalUnitSpec>,
    #[serde(default)]
    pub connections: Vec<ConnectionSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionalUnitSpec {
    pub name: String,
    pub ops: Vec<String>,
}

impl FunctionalUnitSpec {
    /// A functional unit with the default opcode set
    pub fn with_default_ops(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ops: DEFAULT_FU_OPS.iter().map(|op| op.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSpec {
    pub from: String,
    pub to: String,
}

impl PeDocument {
    /// An empty PE with the given name
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            pe: PeBody {
                name: name.into(),
                inputs: Vec::new(),
                outputs: Vec::new(),
                registers: Vec::new(),
                muxes: Vec::new(),
                fus: Vec::new(),
                connections: Vec::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.pe.name
    }

    /// Pretty-print with 4-space indentation
    pub fn to_json_pretty(&self) -> PeResult<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn from_json_str(text: &str) -> PeResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a PE description from a JSON file
    pub fn read(path: &Path) -> PeResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PeError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
