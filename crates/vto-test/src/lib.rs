//! VTO Test Harness - behavioural scenarios over the showcase core
//!
//! This crate provides:
//! - ProgressProbe: records every value a progress stream publishes
//! - Scenario harnesses for the simulator, stepper, pointer and registry

pub mod probe;
pub mod scenarios;

pub use probe::*;
pub use scenarios::*;
