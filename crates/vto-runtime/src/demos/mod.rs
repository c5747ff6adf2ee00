//! Showcase demonstration modules
//!
//! Each module is a thin configuration of the Stepper, the pointer
//! primitives and range inputs. None of them owns a state machine of its own.

pub mod heatmap;
pub mod digitization;
pub mod rigging;
pub mod tailor;
pub mod physics;
pub mod xray;
pub mod lighting;

pub use heatmap::*;
pub use digitization::*;
pub use rigging::*;
pub use tailor::*;
pub use physics::*;
pub use xray::*;
pub use lighting::*;
