//! Assembled fiber sections

use serde::{Deserialize, Serialize};

use crate::api::Command;
use crate::geometry::{Point, QuadPatch, StraightLayer};

/// A fiber section as handed to the modeling framework: a header plus the
/// patches and layers in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiberSection {
    /// Section tag
    pub tag: u32,
    /// Linear-elastic torsional stiffness
    pub gj: f64,
    /// Patches in emission order
    pub patches: Vec<QuadPatch>,
    /// Reinforcement layers in emission order
    pub layers: Vec<StraightLayer>,
}

impl FiberSection {
    pub fn new(tag: u32, gj: f64) -> Self {
        Self {
            tag,
            gj,
            patches: Vec::new(),
            layers: Vec::new(),
        }
    }

    pub fn with_patch(mut self, patch: QuadPatch) -> Self {
        self.patches.push(patch);
        self
    }

    pub fn with_layer(mut self, layer: StraightLayer) -> Self {
        self.layers.push(layer);
        self
    }

    /// The commands that declare this section: header, patches, then layers
    pub fn commands(&self) -> Vec<Command> {
        let mut commands = Vec::with_capacity(1 + self.patches.len() + self.layers.len());
        commands.push(Command::FiberSection {
            tag: self.tag,
            gj: self.gj,
        });
        commands.extend(self.patches.iter().cloned().map(Command::Patch));
        commands.extend(self.layers.iter().cloned().map(Command::Layer));
        commands
    }

    /// Concrete area covered by the patches
    pub fn gross_area(&self) -> f64 {
        self.patches.iter().map(QuadPatch::area).sum()
    }

    /// Area assigned to a material tag, patches and bars combined
    pub fn material_area(&self, material: u32) -> f64 {
        let patches: f64 = self
            .patches
            .iter()
            .filter(|p| p.material == material)
            .map(QuadPatch::area)
            .sum();
        let bars: f64 = self
            .layers
            .iter()
            .filter(|l| l.material == material)
            .map(StraightLayer::total_area)
            .sum();
        patches + bars
    }

    /// Total reinforcement area
    pub fn steel_area(&self) -> f64 {
        self.layers.iter().map(StraightLayer::total_area).sum()
    }

    /// Reinforcement ratio As / Ag
    pub fn reinforcement_ratio(&self) -> f64 {
        let gross = self.gross_area();
        if gross > 0.0 {
            self.steel_area() / gross
        } else {
            0.0
        }
    }

    /// Number of patch fibers plus one fiber per bar
    pub fn fiber_count(&self) -> u64 {
        let patch_fibers: u64 = self.patches.iter().map(QuadPatch::fiber_count).sum();
        let bars: u64 = self.layers.iter().map(|l| u64::from(l.num_bars)).sum();
        patch_fibers + bars
    }

    /// Every bar center with its area
    pub fn bars(&self) -> Vec<(Point, f64)> {
        self.layers
            .iter()
            .flat_map(|l| l.bar_positions().into_iter().map(move |p| (p, l.bar_area)))
            .collect()
    }

    /// Bounding box `(min, max)` of all patch vertices
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut vertices = self.patches.iter().flat_map(|p| p.vertices.iter());
        let first = *vertices.next()?;
        Some(vertices.fold((first, first), |(lo, hi), v| {
            (
                Point::new(lo[0].min(v[0]), lo[1].min(v[1])),
                Point::new(hi[0].max(v[0]), hi[1].max(v[1])),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::yz;
    use approx::assert_relative_eq;

    fn square_section() -> FiberSection {
        FiberSection::new(7, 100.0)
            .with_patch(QuadPatch::new(
                1,
                2,
                2,
                [yz(-0.5, 0.5), yz(-0.5, -0.5), yz(0.5, -0.5), yz(0.5, 0.5)],
            ))
            .with_layer(StraightLayer::new(3, 2, 0.01, yz(0.4, 0.4), yz(0.4, -0.4)))
    }

    #[test]
    fn test_commands_order() {
        let commands = square_section().commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], Command::FiberSection { tag: 7, .. }));
        assert!(matches!(commands[1], Command::Patch(_)));
        assert!(matches!(commands[2], Command::Layer(_)));
    }

    #[test]
    fn test_properties() {
        let s = square_section();
        assert_relative_eq!(s.gross_area(), 1.0);
        assert_relative_eq!(s.steel_area(), 0.02);
        assert_relative_eq!(s.material_area(1), 1.0);
        assert_relative_eq!(s.material_area(3), 0.02);
        assert_relative_eq!(s.reinforcement_ratio(), 0.02);
        assert_eq!(s.fiber_count(), 6);
        assert_eq!(s.bars().len(), 2);
    }

    #[test]
    fn test_bounds() {
        let (lo, hi) = square_section().bounds().unwrap();
        assert_relative_eq!(lo[0], -0.5);
        assert_relative_eq!(hi[1], 0.5);
        assert!(FiberSection::new(1, 0.0).bounds().is_none());
    }
}
