//! OpenSees script generation (Tcl and openseespy)

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Command, ModelingApi};
use crate::error::{SectionError, SectionResult};

/// Target interpreter of a generated script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFormat {
    /// OpenSees Tcl interpreter
    #[default]
    Tcl,
    /// openseespy module
    Python,
}

impl ScriptFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Tcl => "tcl",
            Self::Python => "py",
        }
    }
}

impl FromStr for ScriptFormat {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tcl" => Ok(Self::Tcl),
            "py" | "python" | "openseespy" => Ok(Self::Python),
            other => Err(SectionError::InvalidInput(format!(
                "unknown script format '{}'",
                other
            ))),
        }
    }
}

/// Renders commands as script text
#[derive(Debug, Clone)]
pub struct ScriptWriter {
    format: ScriptFormat,
    out: String,
    section_open: bool,
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_py(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ScriptWriter {
    pub fn new(format: ScriptFormat) -> Self {
        let mut out = String::new();
        match format {
            ScriptFormat::Tcl => out.push_str("# Generated by fiber-section\n"),
            ScriptFormat::Python => {
                out.push_str("# Generated by fiber-section\n");
                out.push_str("from openseespy.opensees import *\n\n");
            }
        }
        Self {
            format,
            out,
            section_open: false,
        }
    }

    pub fn tcl() -> Self {
        Self::new(ScriptFormat::Tcl)
    }

    pub fn python() -> Self {
        Self::new(ScriptFormat::Python)
    }

    pub fn format(&self) -> ScriptFormat {
        self.format
    }

    /// The script so far, with any open section closed
    pub fn render(&self) -> String {
        let mut text = self.out.clone();
        if self.section_open && self.format == ScriptFormat::Tcl {
            text.push_str("}\n");
        }
        text
    }

    /// Consume the writer and return the finished script
    pub fn finish(mut self) -> String {
        self.close_section();
        self.out
    }

    fn close_section(&mut self) {
        if self.section_open {
            if self.format == ScriptFormat::Tcl {
                self.out.push_str("}\n");
            }
            self.section_open = false;
        }
    }

    fn write_tcl(&mut self, command: &Command) -> std::fmt::Result {
        match command {
            Command::Wipe => writeln!(self.out, "wipe"),
            Command::Model { ndm, ndf } => {
                writeln!(self.out, "model BasicBuilder -ndm {} -ndf {}", ndm, ndf)
            }
            Command::UniaxialMaterial { tag, material } => writeln!(
                self.out,
                "uniaxialMaterial {} {} {}",
                material.kind(),
                tag,
                join(&material.args())
            ),
            Command::FiberSection { tag, gj } => {
                writeln!(self.out, "section Fiber {} -GJ {} {{", tag, gj)
            }
            Command::Patch(p) => {
                let args = p.args();
                writeln!(
                    self.out,
                    "    patch quad {} {} {} {}",
                    p.material,
                    p.n_ij,
                    p.n_jk,
                    join(&args[3..])
                )
            }
            Command::Layer(l) => writeln!(
                self.out,
                "    layer straight {} {} {}",
                l.material,
                l.num_bars,
                join(&l.args()[2..])
            ),
        }
    }

    fn write_python(&mut self, command: &Command) -> std::fmt::Result {
        match command {
            Command::Wipe => writeln!(self.out, "wipe()"),
            Command::Model { ndm, ndf } => writeln!(
                self.out,
                "model('BasicBuilder', '-ndm', {}, '-ndf', {})",
                ndm, ndf
            ),
            Command::UniaxialMaterial { tag, material } => writeln!(
                self.out,
                "uniaxialMaterial('{}', {}, {})",
                material.kind(),
                tag,
                join_py(&material.args())
            ),
            Command::FiberSection { tag, gj } => {
                writeln!(self.out, "section('Fiber', {}, '-GJ', {})", tag, gj)
            }
            Command::Patch(p) => {
                let args = p.args();
                writeln!(
                    self.out,
                    "patch('quad', {}, {}, {}, {})",
                    p.material,
                    p.n_ij,
                    p.n_jk,
                    join_py(&args[3..])
                )
            }
            Command::Layer(l) => writeln!(
                self.out,
                "layer('straight', {}, {}, {})",
                l.material,
                l.num_bars,
                join_py(&l.args()[2..])
            ),
        }
    }
}

impl ModelingApi for ScriptWriter {
    fn execute(&mut self, command: &Command) -> SectionResult<()> {
        match command {
            Command::Patch(_) | Command::Layer(_) if !self.section_open => {
                return Err(SectionError::InvalidInput(
                    "patch or layer outside of a fiber section".to_string(),
                ));
            }
            Command::Patch(_) | Command::Layer(_) => {}
            _ => self.close_section(),
        }

        let written = match self.format {
            ScriptFormat::Tcl => self.write_tcl(command),
            ScriptFormat::Python => self.write_python(command),
        };
        written.map_err(|e| SectionError::InvalidInput(e.to_string()))?;

        if matches!(command, Command::FiberSection { .. }) {
            self.section_open = true;
        }
        Ok(())
    }
}
