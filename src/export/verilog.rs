//! Verilog generation from a PE description.
//!
//! Every datapath signal is 32 bits wide. Inputs and registers are referenced
//! by their own name; muxes and functional units expose a `<id>_out` wire.
//! Mux and FU selects are sized to address their drivers/ops.

use crate::core::errors::PeResult;
use crate::export::document::{PeBody, PeDocument};
use crate::export::writer;
use log::{info, warn};
use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

/// Opcodes a functional unit can implement, with their Verilog operator
pub const STD_OPS: [(&str, &str); 11] = [
    ("add", "+"),
    ("sub", "-"),
    ("mul", "*"),
    ("div", "/"),
    ("and", "&"),
    ("or", "|"),
    ("xor", "^"),
    ("sll", "<<"),
    ("sra", ">>"),
    ("lt", "<"),
    ("ge", ">="),
];

/// Bits needed to select one of `count` choices; at least 1
pub fn select_width(count: usize) -> u32 {
    if count > 1 {
        usize::BITS - (count - 1).leading_zeros()
    } else {
        1
    }
}

/// Verilog operator for an opcode name, matched case-insensitively
pub fn operator_for(op: &str) -> Option<(&'static str, &'static str)> {
    let lower = op.to_ascii_lowercase();
    STD_OPS.iter().copied().find(|(name, _)| *name == lower)
}

pub struct VerilogGenerator<'a> {
    pe: &'a PeBody,
}

impl<'a> VerilogGenerator<'a> {
    pub fn new(document: &'a PeDocument) -> Self {
        Self { pe: &document.pe }
    }

    /// Sources driving `target`, in connection order
    pub fn drivers(&self, target: &str) -> Vec<&'a str> {
        self.pe
            .connections
            .iter()
            .filter(|c| c.to == target)
            .map(|c| c.from.as_str())
            .collect()
    }

    pub fn mux_select_width(&self, mux: &str) -> u32 {
        select_width(self.drivers(mux).len())
    }

    pub fn fu_select_width(&self, op_count: usize) -> u32 {
        select_width(op_count)
    }

    /// How a component's value is referenced in expressions
    pub fn signal(&self, id: &str) -> String {
        if self.pe.outputs.iter().any(|o| o == id) {
            warn!("Output '{}' is used as a source; reading the output port directly", id);
            return id.to_string();
        }
        let is_plain = self.pe.inputs.iter().any(|i| i == id) || self.pe.registers.iter().any(|r| r == id);
        if is_plain {
            id.to_string()
        } else {
            format!("{}_out", id)
        }
    }

    /// Generate the complete module text
    pub fn generate(&self) -> PeResult<String> {
        let mut out = String::new();
        self.write_header(&mut out)?;
        self.write_wires(&mut out)?;
        self.write_muxes(&mut out)?;
        self.write_fus(&mut out)?;
        self.write_registers(&mut out)?;
        self.write_outputs(&mut out)?;
        writeln!(out, "endmodule")?;
        info!("Module {} generated successfully.", self.pe.name);
        Ok(out)
    }

    fn write_header(&self, out: &mut String) -> fmt::Result {
        let mut ports = Vec::new();
        for input in &self.pe.inputs {
            ports.push(format!("\tinput [31:0] {}", input));
        }
        if !self.pe.registers.is_empty() {
            ports.push("\tinput clk".to_string());
            ports.push("\tinput rstz".to_string());
        }
        for mux in &self.pe.muxes {
            ports.push(select_port(mux, self.mux_select_width(mux)));
        }
        for fu in &self.pe.fus {
            ports.push(select_port(&fu.name, self.fu_select_width(fu.ops.len())));
        }
        for output in &self.pe.outputs {
            ports.push(format!("\toutput [31:0] {}", output));
        }

        writeln!(out, "module {}(", self.pe.name)?;
        if !ports.is_empty() {
            writeln!(out, "{}", ports.join(",\n"))?;
        }
        writeln!(out, ");")?;
        writeln!(out)
    }

    fn write_wires(&self, out: &mut String) -> fmt::Result {
        for mux in &self.pe.muxes {
            writeln!(out, "wire [31:0] {}_out;", mux)?;
        }
        if !self.pe.muxes.is_empty() {
            writeln!(out)?;
        }

        for register in &self.pe.registers {
            writeln!(out, "reg [31:0] {};", register)?;
        }
        if !self.pe.registers.is_empty() {
            writeln!(out)?;
        }

        for fu in &self.pe.fus {
            writeln!(out, "wire [31:0] {}_out;", fu.name)?;
            for (op, _) in fu.ops.iter().filter_map(|op| operator_for(op)) {
                writeln!(out, "wire [31:0] {}_{};", fu.name, op)?;
            }
        }
        if !self.pe.fus.is_empty() {
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_muxes(&self, out: &mut String) -> fmt::Result {
        for mux in &self.pe.muxes {
            let width = self.mux_select_width(mux);
            let lead = format!("assign {}_out = ", mux);
            let indent = " ".repeat(lead.len());
            out.push_str(&lead);
            for (idx, driver) in self.drivers(mux).iter().enumerate() {
                writeln!(
                    out,
                    "({}_sel == {}'b{:0w$b}) ? {} :",
                    mux,
                    width,
                    idx,
                    self.signal(driver),
                    w = width as usize
                )?;
                out.push_str(&indent);
            }
            writeln!(out, "32'hxxxx;")?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_fus(&self, out: &mut String) -> fmt::Result {
        for fu in &self.pe.fus {
            let drivers = self.drivers(&fu.name);
            if drivers.len() < 2 {
                warn!("Skipping functional unit '{}': needs two drivers, has {}", fu.name, drivers.len());
                writeln!(out, "assign {}_out = 32'hxxxx;", fu.name)?;
                writeln!(out)?;
                continue;
            }
            let (a, b) = (self.signal(drivers[0]), self.signal(drivers[1]));

            for op in &fu.ops {
                match operator_for(op) {
                    Some((name, symbol)) => writeln!(out, "assign {}_{} = {} {} {};", fu.name, name, a, symbol, b)?,
                    None => warn!("Functional unit '{}' has unsupported op '{}'", fu.name, op),
                }
            }

            let width = self.fu_select_width(fu.ops.len());
            let lead = format!("assign {}_out = ", fu.name);
            let indent = " ".repeat(lead.len());
            out.push_str(&lead);
            // Select codes follow the op's position in the list, unsupported ops included
            for (idx, op) in fu.ops.iter().enumerate() {
                if let Some((name, _)) = operator_for(op) {
                    writeln!(
                        out,
                        "({}_sel == {}'b{:0w$b}) ? {}_{} :",
                        fu.name,
                        width,
                        idx,
                        fu.name,
                        name,
                        w = width as usize
                    )?;
                    out.push_str(&indent);
                }
            }
            writeln!(out, "32'hxxxx;")?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_registers(&self, out: &mut String) -> fmt::Result {
        for register in &self.pe.registers {
            let Some(driver) = self.drivers(register).first().copied() else {
                warn!("Register '{}' has no driver", register);
                continue;
            };
            writeln!(out, "always @(posedge clk) begin")?;
            writeln!(out, "\tif (rstz == 0)")?;
            writeln!(out, "\t\t{} <= 0;", register)?;
            writeln!(out, "\telse")?;
            writeln!(out, "\t\t{} <= {};", register, self.signal(driver))?;
            writeln!(out, "end")?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_outputs(&self, out: &mut String) -> fmt::Result {
        for output in &self.pe.outputs {
            match self.drivers(output).first() {
                Some(driver) => writeln!(out, "assign {} = {};", output, self.signal(driver))?,
                None => warn!("Output '{}' has no driver", output),
            }
        }
        writeln!(out)
    }
}

fn select_port(id: &str, width: u32) -> String {
    if width > 1 {
        format!("\tinput [{}:0] {}_sel", width - 1, id)
    } else {
        format!("\tinput {}_sel", id)
    }
}

/// Generate `<dir>/<name>.v` for the document
pub fn write_verilog(document: &PeDocument, dir: &Path) -> PeResult<PathBuf> {
    let text = VerilogGenerator::new(document).generate()?;
    let path = writer::output_path(dir, document.name(), "v")?;
    writer::write_file(&path, &text)?;
    Ok(path)
}

/// Human-readable listing of a PE description
pub struct PeSummary<'a>(pub &'a PeDocument);

impl fmt::Display for PeSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let generator = VerilogGenerator::new(self.0);
        let pe = &self.0.pe;
        writeln!(f, "Parsed PE:")?;
        writeln!(f, "  Inputs: {}", pe.inputs.join(" "))?;
        writeln!(f, "  Outputs: {}", pe.outputs.join(" "))?;
        writeln!(f, "  MUXes:")?;
        for mux in &pe.muxes {
            writeln!(f, "    {} ({} bits)", mux, generator.mux_select_width(mux))?;
        }
        writeln!(f, "  Registers: {}", pe.registers.join(" "))?;
        writeln!(f, "  FUs:")?;
        for fu in &pe.fus {
            writeln!(f, "    {}: {} ({})", fu.name, fu.ops.join(" "), fu.ops.len())?;
        }
        writeln!(f, "  Connections:")?;
        for connection in &pe.connections {
            writeln!(f, "    {} -> {}", connection.from, connection.to)?;
        }
        Ok(())
    }
}
