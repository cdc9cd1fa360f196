//! Uniaxial material definitions

mod concrete;
mod steel;

use serde::{Deserialize, Serialize};

pub use concrete::Concrete02;
pub use steel::Steel02;

/// A uniaxial material understood by the modeling framework
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UniaxialMaterial {
    Concrete02(Concrete02),
    Steel02(Steel02),
}

impl UniaxialMaterial {
    /// Material type keyword used by OpenSees
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Concrete02(_) => "Concrete02",
            Self::Steel02(_) => "Steel02",
        }
    }

    /// Parameters following the tag, in OpenSees argument order
    pub fn args(&self) -> Vec<f64> {
        match self {
            Self::Concrete02(c) => c.args().to_vec(),
            Self::Steel02(s) => s.args().to_vec(),
        }
    }
}

impl From<Concrete02> for UniaxialMaterial {
    fn from(c: Concrete02) -> Self {
        Self::Concrete02(c)
    }
}

impl From<Steel02> for UniaxialMaterial {
    fn from(s: Steel02) -> Self {
        Self::Steel02(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_json() {
        let m: UniaxialMaterial = Steel02::rebar().into();
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json["type"], "Steel02");
        assert_eq!(json["fy"], 420_000.0);

        let back: UniaxialMaterial = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_kind_and_arity() {
        let c: UniaxialMaterial = Concrete02::confined().into();
        assert_eq!(c.kind(), "Concrete02");
        assert_eq!(c.args().len(), 7);
        assert_eq!(UniaxialMaterial::from(Steel02::rebar()).args().len(), 6);
    }
}
