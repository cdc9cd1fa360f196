//! Rectangular reinforced-concrete fiber sections
//!
//! ```text
//!                        y
//!                        ^
//!                        |
//!             ----------------------     .---
//!             |   o     o      o   |     |-- cover_depth
//!             |                    |     |
//!             |   o            o   |     |
//!      z <--- |          +         |     D
//!             |   o            o   |     |
//!             |                    |     |
//!             |   o  o   o  o  o   |     |-- cover_depth
//!             ----------------------     .---
//!             |--------- B --------|
//!             |---| cover_width|---|
//! ```
//!
//! The section is one confined core patch, four unconfined cover patches
//! around it, one skin layer on each z face, a top layer and a bottom layer.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::api::ModelingApi;
use crate::error::{SectionError, SectionResult};
use crate::geometry::{yz, QuadPatch, StraightLayer};

use super::FiberSection;

/// Subdivisions across the thickness of every cover patch
pub const COVER_THICKNESS_FIBERS: u32 = 2;

/// Upper bound on any one fiber subdivision count
pub const MAX_FIBER_SUBDIVISIONS: u32 = 1000;

/// A group of identical bars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGroup {
    pub count: u32,
    /// Area of one bar
    pub area: f64,
}

impl BarGroup {
    pub fn new(count: u32, area: f64) -> Self {
        Self { count, area }
    }

    /// `count` bars of the given diameter
    pub fn of_diameter(count: u32, diameter: f64) -> Self {
        Self::new(count, std::f64::consts::PI * diameter * diameter / 4.0)
    }
}

/// Fiber subdivision counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiberCounts {
    /// Core fibers along y
    pub core_y: u32,
    /// Core fibers along z
    pub core_z: u32,
    /// Fibers along the long side of the cover patches parallel to y
    pub cover_y: u32,
    /// Fibers along the long side of the cover patches parallel to z
    pub cover_z: u32,
}

impl FiberCounts {
    pub fn uniform(n: u32) -> Self {
        Self {
            core_y: n,
            core_z: n,
            cover_y: n,
            cover_z: n,
        }
    }
}

impl Default for FiberCounts {
    fn default() -> Self {
        Self::uniform(8)
    }
}

/// Outer (cover) and inner (core) half-dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    pub cover_y: f64,
    pub cover_z: f64,
    pub core_y: f64,
    pub core_z: f64,
}

/// Descriptor of a symmetric rectangular RC section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcRectSection {
    /// Section tag
    pub tag: u32,
    /// Depth along local y
    pub depth: f64,
    /// Width along local z
    pub width: f64,
    /// Linear-elastic torsional stiffness
    pub gj: f64,
    /// Distance from the y faces to the reinforcement centerline
    pub cover_depth: f64,
    /// Distance from the z faces to the reinforcement centerline
    pub cover_width: f64,
    pub core_material: u32,
    pub cover_material: u32,
    pub steel_material: u32,
    pub top: BarGroup,
    pub bottom: BarGroup,
    /// Intermediate (skin) bars, total over both z faces
    pub intermediate: BarGroup,
    #[serde(default)]
    pub fibers: FiberCounts,
}

impl RcRectSection {
    /// Derived cover and core boundaries
    pub fn boundaries(&self) -> Boundaries {
        let cover_y = self.depth / 2.0;
        let cover_z = self.width / 2.0;
        Boundaries {
            cover_y,
            cover_z,
            core_y: cover_y - self.cover_depth,
            core_z: cover_z - self.cover_width,
        }
    }

    /// Skin bars on each z face
    pub fn bars_per_skin_layer(&self) -> u32 {
        self.intermediate.count / 2
    }

    /// Check the descriptor describes a physically valid section
    pub fn validate(&self) -> SectionResult<()> {
        for (name, value) in [("depth", self.depth), ("width", self.width)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SectionError::InvalidGeometry(format!(
                    "section {}: {} must be positive, got {}",
                    self.tag, name, value
                )));
            }
        }
        for (name, value, half) in [
            ("cover_depth", self.cover_depth, self.depth / 2.0),
            ("cover_width", self.cover_width, self.width / 2.0),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SectionError::InvalidGeometry(format!(
                    "section {}: {} must be positive, got {}",
                    self.tag, name, value
                )));
            }
            if value >= half {
                return Err(SectionError::InvalidGeometry(format!(
                    "section {}: {} {} leaves no core inside half-dimension {}",
                    self.tag, name, value, half
                )));
            }
        }
        if self.intermediate.count % 2 != 0 {
            return Err(SectionError::InvalidInput(format!(
                "section {}: intermediate bar total {} must be even",
                self.tag, self.intermediate.count
            )));
        }
        let f = &self.fibers;
        if [f.core_y, f.core_z, f.cover_y, f.cover_z].contains(&0) {
            return Err(SectionError::InvalidInput(format!(
                "section {}: fiber subdivisions must be positive",
                self.tag
            )));
        }
        if let Some(n) = [f.core_y, f.core_z, f.cover_y, f.cover_z]
            .into_iter()
            .find(|&n| n > MAX_FIBER_SUBDIVISIONS)
        {
            return Err(SectionError::InvalidInput(format!(
                "section {}: {} fiber subdivisions exceed the limit of {}",
                self.tag, n, MAX_FIBER_SUBDIVISIONS
            )));
        }
        Ok(())
    }

    /// Lay out the patches and layers.
    ///
    /// Order: core patch, cover patches (+z, -z, bottom, top), skin layers
    /// (+z, -z), top layer, bottom layer.
    pub fn build(&self) -> SectionResult<FiberSection> {
        self.validate()?;

        let Boundaries {
            cover_y,
            cover_z,
            core_y,
            core_z,
        } = self.boundaries();
        let f = &self.fibers;
        let n = COVER_THICKNESS_FIBERS;
        let skin = self.bars_per_skin_layer();

        let section = FiberSection::new(self.tag, self.gj)
            .with_patch(QuadPatch::new(
                self.core_material,
                f.core_z,
                f.core_y,
                [yz(-core_y, core_z), yz(-core_y, -core_z), yz(core_y, -core_z), yz(core_y, core_z)],
            ))
            .with_patch(QuadPatch::new(
                self.cover_material,
                n,
                f.cover_y,
                [yz(-cover_y, cover_z), yz(-core_y, core_z), yz(core_y, core_z), yz(cover_y, cover_z)],
            ))
            .with_patch(QuadPatch::new(
                self.cover_material,
                n,
                f.cover_y,
                [yz(-core_y, -core_z), yz(-cover_y, -cover_z), yz(cover_y, -cover_z), yz(core_y, -core_z)],
            ))
            .with_patch(QuadPatch::new(
                self.cover_material,
                f.cover_z,
                n,
                [yz(-cover_y, cover_z), yz(-cover_y, -cover_z), yz(-core_y, -core_z), yz(-core_y, core_z)],
            ))
            .with_patch(QuadPatch::new(
                self.cover_material,
                f.cover_z,
                n,
                [yz(core_y, core_z), yz(core_y, -core_z), yz(cover_y, -cover_z), yz(cover_y, cover_z)],
            ))
            .with_layer(StraightLayer::new(
                self.steel_material,
                skin,
                self.intermediate.area,
                yz(-core_y, core_z),
                yz(core_y, core_z),
            ))
            .with_layer(StraightLayer::new(
                self.steel_material,
                skin,
                self.intermediate.area,
                yz(-core_y, -core_z),
                yz(core_y, -core_z),
            ))
            .with_layer(StraightLayer::new(
                self.steel_material,
                self.top.count,
                self.top.area,
                yz(core_y, core_z),
                yz(core_y, -core_z),
            ))
            .with_layer(StraightLayer::new(
                self.steel_material,
                self.bottom.count,
                self.bottom.area,
                yz(-core_y, core_z),
                yz(-core_y, -core_z),
            ));

        debug!(
            "section {}: core {:.4} x {:.4}, {} patches, {} layers",
            self.tag,
            2.0 * core_y,
            2.0 * core_z,
            section.patches.len(),
            section.layers.len()
        );
        Ok(section)
    }

    /// Build the section and send its commands to `api`
    pub fn emit(&self, api: &mut dyn ModelingApi) -> SectionResult<FiberSection> {
        let section = self.build()?;
        for command in section.commands() {
            api.execute(&command)?;
        }
        Ok(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn column() -> RcRectSection {
        RcRectSection {
            tag: 1,
            depth: 0.4,
            width: 0.3,
            gj: 10000.0,
            cover_depth: 0.04,
            cover_width: 0.04,
            core_material: 2,
            cover_material: 1,
            steel_material: 3,
            top: BarGroup::of_diameter(3, 0.025),
            bottom: BarGroup::of_diameter(3, 0.025),
            intermediate: BarGroup::of_diameter(4, 0.025),
            fibers: FiberCounts::default(),
        }
    }

    #[test]
    fn test_boundaries() {
        let b = column().boundaries();
        assert_relative_eq!(b.cover_y, 0.2);
        assert_relative_eq!(b.cover_z, 0.15);
        assert_relative_eq!(b.core_y, 0.16, epsilon = 1e-12);
        assert_relative_eq!(b.core_z, 0.11, epsilon = 1e-12);
    }

    #[test]
    fn test_patches_tile_the_section() {
        let section = column().build().unwrap();
        assert_relative_eq!(section.gross_area(), 0.4 * 0.3, epsilon = 1e-12);
        assert_relative_eq!(section.material_area(2), 0.32 * 0.22, epsilon = 1e-12);
    }

    #[test]
    fn test_subdivisions() {
        let mut desc = column();
        desc.fibers = FiberCounts {
            core_y: 10,
            core_z: 6,
            cover_y: 12,
            cover_z: 4,
        };
        let s = desc.build().unwrap();
        assert_eq!((s.patches[0].n_ij, s.patches[0].n_jk), (6, 10));
        assert_eq!((s.patches[1].n_ij, s.patches[1].n_jk), (2, 12));
        assert_eq!((s.patches[2].n_ij, s.patches[2].n_jk), (2, 12));
        assert_eq!((s.patches[3].n_ij, s.patches[3].n_jk), (4, 2));
        assert_eq!((s.patches[4].n_ij, s.patches[4].n_jk), (4, 2));
    }

    #[test]
    fn test_cover_too_thick() {
        let mut desc = column();
        desc.cover_width = 0.15;
        assert!(matches!(desc.build(), Err(SectionError::InvalidGeometry(_))));
    }

    #[test]
    fn test_zero_fibers_rejected() {
        let mut desc = column();
        desc.fibers.cover_z = 0;
        assert!(matches!(desc.validate(), Err(SectionError::InvalidInput(_))));
    }

    #[test]
    fn test_subdivision_limit() {
        let mut desc = column();
        desc.fibers = FiberCounts::uniform(MAX_FIBER_SUBDIVISIONS);
        assert!(desc.validate().is_ok());
        desc.fibers.core_z = MAX_FIBER_SUBDIVISIONS + 1;
        assert!(matches!(desc.validate(), Err(SectionError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_cover_rejected() {
        let mut desc = column();
        desc.cover_width = 0.0;
        assert!(matches!(desc.validate(), Err(SectionError::InvalidGeometry(_))));
    }

    #[test]
    fn test_no_skin_bars() {
        let mut desc = column();
        desc.intermediate.count = 0;
        let s = desc.build().unwrap();
        assert_eq!(s.layers.len(), 4);
        assert_eq!(s.layers[0].num_bars, 0);
    }

    #[test]
    fn test_bar_area_from_diameter() {
        assert_relative_eq!(BarGroup::of_diameter(1, 0.025).area, 4.908_738_521e-4, epsilon = 1e-12);
    }
}
