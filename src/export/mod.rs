pub mod document;
pub mod verilog;
pub mod writer;

pub use document::{ConnectionSpec, FunctionalUnitSpec, PeBody, PeDocument, DEFAULT_FU_OPS};
pub use verilog::{write_verilog, PeSummary, VerilogGenerator};
pub use writer::{export_json, write_session_log};
