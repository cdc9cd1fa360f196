//! Concrete02 uniaxial material (linear tension softening)

use serde::{Deserialize, Serialize};

/// Ultimate (crushing) stress as a fraction of the peak compressive stress
pub const ULTIMATE_STRESS_RATIO: f64 = 0.2;

/// Tensile strength as a fraction of the peak compressive stress, sign flipped
pub const TENSILE_STRENGTH_RATIO: f64 = -0.1;

/// Strain used to derive the tension softening modulus from the tensile strength
pub const TENSION_SOFTENING_STRAIN: f64 = 0.002;

/// Parameters of an OpenSees `Concrete02` material.
///
/// Compression is negative. Units follow the model (kN, m in the bundled
/// example).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Concrete02 {
    /// Peak compressive stress f'c
    pub fpc: f64,
    /// Strain at peak compressive stress
    pub epsc0: f64,
    /// Crushing (ultimate) stress
    pub fpcu: f64,
    /// Strain at crushing stress
    pub epscu: f64,
    /// Ratio between unloading slope at epscu and initial slope
    pub lambda: f64,
    /// Tensile strength
    pub ft: f64,
    /// Tension softening stiffness
    pub ets: f64,
}

impl Concrete02 {
    /// Create a material from all seven parameters
    pub fn new(fpc: f64, epsc0: f64, fpcu: f64, epscu: f64, lambda: f64, ft: f64, ets: f64) -> Self {
        Self {
            fpc,
            epsc0,
            fpcu,
            epscu,
            lambda,
            ft,
            ets,
        }
    }

    /// Derive the crushing stress and tension branch from the peak stress.
    ///
    /// `fpcu = 0.2 fpc`, `ft = -0.1 fpc` and `ets = ft / 0.002`.
    pub fn from_peak(fpc: f64, epsc0: f64, epscu: f64, lambda: f64) -> Self {
        let ft = fpc * TENSILE_STRENGTH_RATIO;
        Self {
            fpc,
            epsc0,
            fpcu: fpc * ULTIMATE_STRESS_RATIO,
            epscu,
            lambda,
            ft,
            ets: ft / TENSION_SOFTENING_STRAIN,
        }
    }

    /// Unconfined cover concrete, f'c = 25 MPa (kN/m²)
    pub fn unconfined() -> Self {
        Self::from_peak(-25000.0, -0.002, -0.02, 0.1)
    }

    /// Confined core concrete, f'c = 28 MPa (kN/m²)
    pub fn confined() -> Self {
        Self::from_peak(-28000.0, -0.002, -0.02, 0.1)
    }

    /// Parameters in OpenSees argument order
    pub fn args(&self) -> [f64; 7] {
        [
            self.fpc, self.epsc0, self.fpcu, self.epscu, self.lambda, self.ft, self.ets,
        ]
    }
}
