//! Fiber Section - rectangular reinforced-concrete sections for OpenSees
//!
//! This library prepares the input of a fiber-section analysis without
//! doing any of the analysis itself:
//! - Concrete02 / Steel02 uniaxial material definitions
//! - Rectangular RC section layout (confined core, cover ring, bar layers)
//! - A model context that rejects duplicate tags
//! - OpenSees Tcl and openseespy script generation
//! - SVG plots of the assembled sections
//!
//! ## Example
//! ```rust
//! use fiber_section::prelude::*;
//!
//! let mut model = Model::default();
//! model.add_material(1, Concrete02::unconfined().into()).unwrap();
//! model.add_material(2, Concrete02::confined().into()).unwrap();
//! model.add_material(3, Steel02::rebar().into()).unwrap();
//!
//! let column = RcRectSection {
//!     tag: 1,
//!     depth: 0.4,
//!     width: 0.3,
//!     gj: 10000.0,
//!     cover_depth: 0.04,
//!     cover_width: 0.04,
//!     core_material: 2,
//!     cover_material: 1,
//!     steel_material: 3,
//!     top: BarGroup::of_diameter(3, 0.025),
//!     bottom: BarGroup::of_diameter(3, 0.025),
//!     intermediate: BarGroup::of_diameter(4, 0.025),
//!     fibers: FiberCounts::uniform(8),
//! };
//! let section = model.add_rc_section(&column).unwrap().clone();
//!
//! let mut plotter = SvgPlotter::default();
//! plotter.plot(&section, &Palette::default()).unwrap();
//!
//! let tcl = model.to_script(ScriptFormat::Tcl).unwrap();
//! assert!(tcl.contains("section Fiber 1 -GJ 10000 {"));
//! ```

pub mod api;
pub mod error;
pub mod geometry;
pub mod input;
pub mod materials;
pub mod model;
pub mod plot;
pub mod runner;
pub mod section;

// Re-export common types
pub mod prelude {
    pub use crate::api::{Command, CommandLog, ModelingApi, ScriptFormat, ScriptWriter};
    pub use crate::error::{SectionError, SectionResult};
    pub use crate::geometry::{yz, Point, QuadPatch, StraightLayer};
    pub use crate::input::{MaterialEntry, ModelInput};
    pub use crate::materials::{Concrete02, Steel02, UniaxialMaterial};
    pub use crate::model::Model;
    pub use crate::plot::{Palette, Plotter, SvgPlotter};
    pub use crate::runner::OpenSeesRunner;
    pub use crate::section::{
        BarGroup, Boundaries, FiberCounts, FiberSection, RcRectSection, MAX_FIBER_SUBDIVISIONS,
    };
}

#[cfg(feature = "wasm")]
pub mod wasm;
