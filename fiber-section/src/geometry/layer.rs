//! Straight reinforcement layers

use serde::{Deserialize, Serialize};

use super::Point;

/// A straight line of equally spaced bars of one material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StraightLayer {
    /// Material tag of the bars
    pub material: u32,
    /// Number of bars along the line
    pub num_bars: u32,
    /// Area of each bar
    pub bar_area: f64,
    /// First bar position
    pub start: Point,
    /// Last bar position
    pub end: Point,
}

impl StraightLayer {
    pub fn new(material: u32, num_bars: u32, bar_area: f64, start: Point, end: Point) -> Self {
        Self {
            material,
            num_bars,
            bar_area,
            start,
            end,
        }
    }

    /// Total steel area of the layer
    pub fn total_area(&self) -> f64 {
        self.num_bars as f64 * self.bar_area
    }

    /// Bar centers.
    ///
    /// A single bar sits at the midpoint; otherwise the bars are evenly
    /// spaced with one at each end.
    pub fn bar_positions(&self) -> Vec<Point> {
        match self.num_bars {
            0 => Vec::new(),
            1 => vec![nalgebra::center(&self.start, &self.end)],
            n => {
                let step = (self.end - self.start) / (n - 1) as f64;
                (0..n).map(|i| self.start + step * i as f64).collect()
            }
        }
    }

    /// OpenSees argument list after `layer straight`
    pub fn args(&self) -> Vec<f64> {
        vec![
            self.material as f64,
            self.num_bars as f64,
            self.bar_area,
            self.start[0],
            self.start[1],
            self.end[0],
            self.end[1],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::yz;
    use approx::assert_relative_eq;

    #[test]
    fn test_even_spacing_includes_ends() {
        let layer = StraightLayer::new(3, 3, 1.0, yz(0.16, 0.11), yz(0.16, -0.11));
        let bars = layer.bar_positions();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0], layer.start);
        assert_relative_eq!(bars[1][1], 0.0);
        assert_relative_eq!(bars[2][1], -0.11);
        assert_relative_eq!(layer.total_area(), 3.0);
    }

    #[test]
    fn test_single_bar_at_midpoint() {
        let layer = StraightLayer::new(3, 1, 1.0, yz(-1.0, 0.5), yz(1.0, 0.5));
        let bars = layer.bar_positions();
        assert_eq!(bars.len(), 1);
        assert_relative_eq!(bars[0][0], 0.0);
        assert_relative_eq!(bars[0][1], 0.5);
    }

    #[test]
    fn test_empty_layer() {
        let layer = StraightLayer::new(3, 0, 1.0, yz(-1.0, 0.5), yz(1.0, 0.5));
        assert!(layer.bar_positions().is_empty());
        assert_eq!(layer.total_area(), 0.0);
    }
}
