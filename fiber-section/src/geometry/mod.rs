//! Planar section geometry
//!
//! All coordinates live in the local section plane. A [`Point`] stores the
//! local `y` coordinate at index 0 and the local `z` coordinate at index 1,
//! matching the order in which the modeling framework reads them.

mod layer;
mod patch;

pub use layer::StraightLayer;
pub use patch::QuadPatch;

/// A point `(y, z)` in the section plane
pub type Point = nalgebra::Point2<f64>;

/// Build a point from local `y` and `z`
pub fn yz(y: f64, z: f64) -> Point {
    Point::new(y, z)
}

/// Signed area of a closed polygon (shoelace formula)
pub fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let a = &vertices[i];
        let b = &vertices[(i + 1) % n];
        twice += a[0] * b[1] - b[0] * a[1];
    }
    twice / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_signed_area_orientation() {
        let square = [yz(0.0, 0.0), yz(1.0, 0.0), yz(1.0, 1.0), yz(0.0, 1.0)];
        assert_relative_eq!(signed_area(&square), 1.0);

        let mut reversed = square;
        reversed.reverse();
        assert_relative_eq!(signed_area(&reversed), -1.0);
    }

    #[test]
    fn test_degenerate_polygon() {
        assert_eq!(signed_area(&[yz(0.0, 0.0), yz(1.0, 1.0)]), 0.0);
    }
}
