//! JSON model input
//!
//! ```json
//! {
//!   "ndm": 3,
//!   "ndf": 6,
//!   "materials": [
//!     { "tag": 3, "type": "Steel02", "fy": 420000, "e0": 2.1e8, "b": 0.005,
//!       "r0": 20, "cr1": 0.925, "cr2": 0.15 }
//!   ],
//!   "sections": [ { "tag": 1, "depth": 0.4, "width": 0.3, "...": "..." } ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SectionResult;
use crate::materials::{Concrete02, Steel02, UniaxialMaterial};
use crate::model::{DEFAULT_NDF, DEFAULT_NDM};
use crate::section::{BarGroup, FiberCounts, RcRectSection};

/// Tag of the unconfined cover concrete in the bundled example
pub const UNCONFINED_CONCRETE: u32 = 1;
/// Tag of the confined core concrete in the bundled example
pub const CONFINED_CONCRETE: u32 = 2;
/// Tag of the reinforcing steel in the bundled example
pub const REBAR_STEEL: u32 = 3;

/// Tag of the 300x400 column section in the bundled example
pub const COLUMN_300X400: u32 = 1;
/// Tag of the 300x600 beam section in the bundled example
pub const BEAM_300X600: u32 = 2;

fn default_ndm() -> u8 {
    DEFAULT_NDM
}

fn default_ndf() -> u8 {
    DEFAULT_NDF
}

/// A material with its tag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub tag: u32,
    #[serde(flatten)]
    pub material: UniaxialMaterial,
}

/// Everything needed to build a [`Model`](crate::model::Model)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInput {
    #[serde(default = "default_ndm")]
    pub ndm: u8,
    #[serde(default = "default_ndf")]
    pub ndf: u8,
    #[serde(default)]
    pub materials: Vec<MaterialEntry>,
    #[serde(default)]
    pub sections: Vec<RcRectSection>,
}

impl ModelInput {
    pub fn from_json_str(text: &str) -> SectionResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> SectionResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> SectionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Two concretes, one steel, a 300x400 column and a 300x600 beam.
    ///
    /// Units are kN and m. Both sections carry 3 top, 3 bottom and 4 skin
    /// bars of 25 mm diameter behind 40 mm of cover, with 8 fibers in every
    /// direction.
    pub fn example() -> Self {
        let rebar_25 = 0.025;
        let section = |tag: u32, depth: f64| RcRectSection {
            tag,
            depth,
            width: 0.3,
            gj: 10000.0,
            cover_depth: 0.04,
            cover_width: 0.04,
            core_material: CONFINED_CONCRETE,
            cover_material: UNCONFINED_CONCRETE,
            steel_material: REBAR_STEEL,
            top: BarGroup::of_diameter(3, rebar_25),
            bottom: BarGroup::of_diameter(3, rebar_25),
            intermediate: BarGroup::of_diameter(4, rebar_25),
            fibers: FiberCounts::uniform(8),
        };

        Self {
            ndm: DEFAULT_NDM,
            ndf: DEFAULT_NDF,
            materials: vec![
                MaterialEntry {
                    tag: UNCONFINED_CONCRETE,
                    material: Concrete02::unconfined().into(),
                },
                MaterialEntry {
                    tag: CONFINED_CONCRETE,
                    material: Concrete02::confined().into(),
                },
                MaterialEntry {
                    tag: REBAR_STEEL,
                    material: Steel02::rebar().into(),
                },
            ],
            sections: vec![section(COLUMN_300X400, 0.4), section(BEAM_300X600, 0.6)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply() {
        let input = ModelInput::from_json_str("{}").unwrap();
        assert_eq!(input.ndm, 3);
        assert_eq!(input.ndf, 6);
        assert!(input.materials.is_empty());
    }

    #[test]
    fn test_flattened_material() {
        let text = r#"{
            "materials": [
                { "tag": 3, "type": "Steel02", "fy": 420000, "e0": 210000000,
                  "b": 0.005, "r0": 20, "cr1": 0.925, "cr2": 0.15 }
            ]
        }"#;
        let input = ModelInput::from_json_str(text).unwrap();
        assert_eq!(input.materials[0].tag, 3);
        assert_eq!(input.materials[0].material, UniaxialMaterial::from(Steel02::rebar()));
    }

    #[test]
    fn test_example_survives_json() {
        let example = ModelInput::example();
        let back = ModelInput::from_json_str(&example.to_json().unwrap()).unwrap();
        assert_eq!(back.materials, example.materials);
        assert_eq!(back.sections.len(), 2);
        assert_eq!(back.sections[1].tag, BEAM_300X600);
        assert_eq!(back.sections[1].fibers, FiberCounts::uniform(8));
        assert!((back.sections[1].top.area - example.sections[1].top.area).abs() < 1e-15);
    }

    #[test]
    fn test_bad_json() {
        assert!(ModelInput::from_json_str("{ \"ndm\": \"three\" }").is_err());
    }
}
