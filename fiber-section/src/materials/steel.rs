//! Steel02 uniaxial material (Giuffre-Menegotto-Pinto)

use serde::{Deserialize, Serialize};

/// Parameters of an OpenSees `Steel02` material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Steel02 {
    /// Yield strength
    pub fy: f64,
    /// Initial elastic tangent
    pub e0: f64,
    /// Strain hardening ratio
    pub b: f64,
    /// Elastic to plastic transition parameters
    pub r0: f64,
    pub cr1: f64,
    pub cr2: f64,
}

impl Steel02 {
    pub fn new(fy: f64, e0: f64, b: f64) -> Self {
        Self {
            fy,
            e0,
            b,
            ..Self::default()
        }
    }

    /// Override the transition parameters R0, cR1, cR2
    pub fn with_transition(mut self, r0: f64, cr1: f64, cr2: f64) -> Self {
        self.r0 = r0;
        self.cr1 = cr1;
        self.cr2 = cr2;
        self
    }

    /// Grade 420 rebar in kN/m²
    pub fn rebar() -> Self {
        Self::new(420_000.0, 210_000_000.0, 0.005)
    }

    /// Yield strain fy / E0
    pub fn yield_strain(&self) -> f64 {
        self.fy / self.e0
    }

    /// Parameters in OpenSees argument order
    pub fn args(&self) -> [f64; 6] {
        [self.fy, self.e0, self.b, self.r0, self.cr1, self.cr2]
    }
}

impl Default for Steel02 {
    fn default() -> Self {
        Self {
            fy: 420_000.0,
            e0: 210_000_000.0,
            b: 0.005,
            r0: 20.0,
            cr1: 0.925,
            cr2: 0.15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rebar_defaults() {
        let s = Steel02::rebar();
        assert_eq!(s.args(), [420_000.0, 210_000_000.0, 0.005, 20.0, 0.925, 0.15]);
        assert_relative_eq!(s.yield_strain(), 0.002);
    }

    #[test]
    fn test_with_transition() {
        let s = Steel02::new(500_000.0, 200_000_000.0, 0.01).with_transition(18.0, 0.9, 0.1);
        assert_relative_eq!(s.r0, 18.0);
        assert_relative_eq!(s.cr2, 0.1);
    }
}
