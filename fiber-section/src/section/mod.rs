//! Fiber section descriptors and layout

mod fiber;
mod rect;

pub use fiber::FiberSection;
pub use rect::{
    BarGroup, Boundaries, FiberCounts, RcRectSection, COVER_THICKNESS_FIBERS,
    MAX_FIBER_SUBDIVISIONS,
};
