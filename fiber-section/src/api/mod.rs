//! Calls into the external modeling framework
//!
//! The framework is never linked. Every call is a [`Command`] value, and a
//! [`ModelingApi`] sink decides what to do with it: record it, render it as a
//! script, or forward it elsewhere.

mod recorder;
mod script;

use serde::{Deserialize, Serialize};

use crate::error::SectionResult;
use crate::geometry::{QuadPatch, StraightLayer};
use crate::materials::UniaxialMaterial;

pub use recorder::CommandLog;
pub use script::{ScriptFormat, ScriptWriter};

/// One call into the modeling framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Clear any existing model
    Wipe,
    /// Start a basic model builder
    Model { ndm: u8, ndf: u8 },
    /// Register a uniaxial material
    UniaxialMaterial {
        tag: u32,
        material: UniaxialMaterial,
    },
    /// Open a fiber section
    FiberSection { tag: u32, gj: f64 },
    /// Quadrilateral patch inside the open section
    Patch(QuadPatch),
    /// Straight reinforcement layer inside the open section
    Layer(StraightLayer),
}

/// A receiver of modeling commands
pub trait ModelingApi {
    fn execute(&mut self, command: &Command) -> SectionResult<()>;

    fn wipe(&mut self) -> SectionResult<()> {
        self.execute(&Command::Wipe)
    }

    fn model(&mut self, ndm: u8, ndf: u8) -> SectionResult<()> {
        self.execute(&Command::Model { ndm, ndf })
    }

    fn uniaxial_material(&mut self, tag: u32, material: UniaxialMaterial) -> SectionResult<()> {
        self.execute(&Command::UniaxialMaterial { tag, material })
    }

    fn fiber_section(&mut self, tag: u32, gj: f64) -> SectionResult<()> {
        self.execute(&Command::FiberSection { tag, gj })
    }

    fn patch(&mut self, patch: QuadPatch) -> SectionResult<()> {
        self.execute(&Command::Patch(patch))
    }

    fn layer(&mut self, layer: StraightLayer) -> SectionResult<()> {
        self.execute(&Command::Layer(layer))
    }
}

impl<T: ModelingApi + ?Sized> ModelingApi for &mut T {
    fn execute(&mut self, command: &Command) -> SectionResult<()> {
        (**self).execute(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Steel02;

    #[test]
    fn test_provided_helpers_route_through_execute() {
        let mut log = CommandLog::new();
        log.wipe().unwrap();
        log.model(3, 6).unwrap();
        log.uniaxial_material(3, Steel02::rebar().into()).unwrap();
        log.fiber_section(1, 10000.0).unwrap();
        assert_eq!(log.len(), 4);
        assert_eq!(log.commands()[1], Command::Model { ndm: 3, ndf: 6 });
    }

    #[test]
    fn test_command_json() {
        let json = serde_json::to_value(Command::FiberSection { tag: 2, gj: 1.0 }).unwrap();
        assert_eq!(json["command"], "fiber_section");
        assert_eq!(json["tag"], 2);
    }
}
