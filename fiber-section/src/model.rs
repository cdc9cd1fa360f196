//! Model context - registered materials and sections

use std::collections::BTreeMap;

use log::{debug, info};

use crate::api::{Command, CommandLog, ModelingApi, ScriptFormat, ScriptWriter};
use crate::error::{SectionError, SectionResult};
use crate::input::ModelInput;
use crate::materials::UniaxialMaterial;
use crate::section::{FiberSection, RcRectSection};

/// Default spatial dimension
pub const DEFAULT_NDM: u8 = 3;
/// Default degrees of freedom per node
pub const DEFAULT_NDF: u8 = 6;

/// Materials and sections registered for one model, with the commands that
/// declare them in registration order.
#[derive(Debug, Clone)]
pub struct Model {
    /// Spatial dimension
    pub ndm: u8,
    /// Degrees of freedom per node
    pub ndf: u8,
    materials: BTreeMap<u32, UniaxialMaterial>,
    sections: BTreeMap<u32, FiberSection>,
    log: CommandLog,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(DEFAULT_NDM, DEFAULT_NDF)
    }
}

impl Model {
    /// Create an empty model; the log starts with `wipe` and `model`
    pub fn new(ndm: u8, ndf: u8) -> Self {
        Self {
            ndm,
            ndf,
            materials: BTreeMap::new(),
            sections: BTreeMap::new(),
            log: CommandLog::from_commands(vec![Command::Wipe, Command::Model { ndm, ndf }]),
        }
    }

    /// Build a model from an input description
    pub fn from_input(input: &ModelInput) -> SectionResult<Self> {
        let mut model = Self::new(input.ndm, input.ndf);
        for entry in &input.materials {
            model.add_material(entry.tag, entry.material)?;
        }
        for section in &input.sections {
            model.add_rc_section(section)?;
        }
        info!(
            "model built: {} materials, {} sections, {} commands",
            model.materials.len(),
            model.sections.len(),
            model.log.len()
        );
        Ok(model)
    }

    /// Register a material under a new tag
    pub fn add_material(&mut self, tag: u32, material: UniaxialMaterial) -> SectionResult<()> {
        if self.materials.contains_key(&tag) {
            return Err(SectionError::DuplicateTag {
                kind: "material",
                tag,
            });
        }
        self.log.uniaxial_material(tag, material)?;
        self.materials.insert(tag, material);
        debug!("material {} registered as {}", tag, material.kind());
        Ok(())
    }

    /// Lay out a rectangular RC section and register it
    pub fn add_rc_section(&mut self, desc: &RcRectSection) -> SectionResult<&FiberSection> {
        if self.sections.contains_key(&desc.tag) {
            return Err(SectionError::DuplicateTag {
                kind: "section",
                tag: desc.tag,
            });
        }
        for tag in [desc.core_material, desc.cover_material, desc.steel_material] {
            if !self.materials.contains_key(&tag) {
                return Err(SectionError::MaterialNotFound(tag));
            }
        }

        let section = desc.emit(&mut self.log)?;
        Ok(self.sections.entry(desc.tag).or_insert(section))
    }

    pub fn material(&self, tag: u32) -> SectionResult<&UniaxialMaterial> {
        self.materials
            .get(&tag)
            .ok_or(SectionError::MaterialNotFound(tag))
    }

    pub fn section(&self, tag: u32) -> SectionResult<&FiberSection> {
        self.sections
            .get(&tag)
            .ok_or(SectionError::SectionNotFound(tag))
    }

    /// Registered sections ordered by tag
    pub fn sections(&self) -> impl Iterator<Item = &FiberSection> {
        self.sections.values()
    }

    /// Every command in registration order
    pub fn commands(&self) -> &[Command] {
        self.log.commands()
    }

    /// Send every command to another sink
    pub fn replay(&self, api: &mut dyn ModelingApi) -> SectionResult<()> {
        for command in self.log.commands() {
            api.execute(command)?;
        }
        Ok(())
    }

    /// Render the model as an OpenSees script
    pub fn to_script(&self, format: ScriptFormat) -> SectionResult<String> {
        let mut writer = ScriptWriter::new(format);
        self.replay(&mut writer)?;
        Ok(writer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ModelInput;
    use crate::materials::{Concrete02, Steel02};

    #[test]
    fn test_new_model_preamble() {
        let model = Model::default();
        assert_eq!(
            model.commands(),
            &[Command::Wipe, Command::Model { ndm: 3, ndf: 6 }]
        );
    }

    #[test]
    fn test_duplicate_material() {
        let mut model = Model::default();
        model.add_material(1, Concrete02::unconfined().into()).unwrap();
        let err = model.add_material(1, Steel02::rebar().into());
        assert!(matches!(
            err,
            Err(SectionError::DuplicateTag { kind: "material", tag: 1 })
        ));
        assert!(matches!(model.material(1), Ok(UniaxialMaterial::Concrete02(_))));
    }

    #[test]
    fn test_missing_material() {
        let mut model = Model::default();
        let input = ModelInput::example();
        let err = model.add_rc_section(&input.sections[0]);
        assert!(matches!(err, Err(SectionError::MaterialNotFound(2))));
        assert!(matches!(model.section(1), Err(SectionError::SectionNotFound(1))));
    }

    #[test]
    fn test_duplicate_section() {
        let input = ModelInput::example();
        let mut model = Model::from_input(&input).unwrap();
        let err = model.add_rc_section(&input.sections[1]);
        assert!(matches!(
            err,
            Err(SectionError::DuplicateTag { kind: "section", tag: 2 })
        ));
    }

    #[test]
    fn test_failed_section_leaves_log_untouched() {
        let input = ModelInput::example();
        let mut model = Model::from_input(&input).unwrap();
        let before = model.commands().len();

        let mut bad = input.sections[0].clone();
        bad.tag = 9;
        bad.intermediate.count = 3;
        assert!(model.add_rc_section(&bad).is_err());
        assert_eq!(model.commands().len(), before);
    }

    #[test]
    fn test_replay_and_script() {
        let model = Model::from_input(&ModelInput::example()).unwrap();
        let mut log = CommandLog::new();
        model.replay(&mut log).unwrap();
        assert_eq!(log.commands(), model.commands());

        let tcl = model.to_script(ScriptFormat::Tcl).unwrap();
        assert_eq!(tcl.matches("section Fiber").count(), 2);
        assert_eq!(tcl.matches("uniaxialMaterial").count(), 3);
    }
}
