//! VTO Input - Pointer Interaction Controller
//!
//! Pure transforms from raw input to renderable values:
//! - Pointer/touch coordinate + container rectangle -> InteractionValue
//! - Numeric range fields clamped into their domain
//! - Draggable nodes with bounded, elastic displacement
//!
//! Nothing here owns timers or long-lived state beyond the widget itself.

pub mod geometry;
pub mod pointer;
pub mod range;
pub mod drag;

pub use geometry::*;
pub use pointer::*;
pub use range::*;
pub use drag::*;
