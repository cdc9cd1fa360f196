//! Quadrilateral fiber patches

use serde::{Deserialize, Serialize};

use super::{signed_area, Point};

/// A quadrilateral region of one material, subdivided into a grid of fibers.
///
/// Vertices are `I, J, K, L`. The region is split into `n_ij` strips along
/// edge I-J and `n_jk` strips along edge J-K.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadPatch {
    /// Material tag of every fiber in the patch
    pub material: u32,
    /// Subdivisions along I-J
    pub n_ij: u32,
    /// Subdivisions along J-K
    pub n_jk: u32,
    /// Corner points I, J, K, L
    pub vertices: [Point; 4],
}

impl QuadPatch {
    pub fn new(material: u32, n_ij: u32, n_jk: u32, vertices: [Point; 4]) -> Self {
        Self {
            material,
            n_ij,
            n_jk,
            vertices,
        }
    }

    /// Enclosed area, independent of vertex orientation
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    /// Number of fibers the patch is split into
    pub fn fiber_count(&self) -> u64 {
        u64::from(self.n_ij) * u64::from(self.n_jk)
    }

    /// Bilinear map of the unit square onto the patch.
    ///
    /// `s` runs from I to J, `t` from J to K.
    pub fn point_at(&self, s: f64, t: f64) -> Point {
        let [i, j, k, l] = &self.vertices;
        let w = [(1.0 - s) * (1.0 - t), s * (1.0 - t), s * t, (1.0 - s) * t];
        Point::from(i.coords * w[0] + j.coords * w[1] + k.coords * w[2] + l.coords * w[3])
    }

    /// Fiber grid lines, boundary included
    pub fn grid_lines(&self) -> Vec<(Point, Point)> {
        let mut lines = Vec::with_capacity(self.n_ij as usize + self.n_jk as usize + 2);
        for a in 0..=self.n_ij {
            let s = a as f64 / self.n_ij.max(1) as f64;
            lines.push((self.point_at(s, 0.0), self.point_at(s, 1.0)));
        }
        for b in 0..=self.n_jk {
            let t = b as f64 / self.n_jk.max(1) as f64;
            lines.push((self.point_at(0.0, t), self.point_at(1.0, t)));
        }
        lines
    }

    /// OpenSees argument list after `patch quad`
    pub fn args(&self) -> Vec<f64> {
        let mut args = vec![self.material as f64, self.n_ij as f64, self.n_jk as f64];
        for v in &self.vertices {
            args.push(v[0]);
            args.push(v[1]);
        }
        args
    }
}
