//! VTO Runtime - Feature Registry and demo modules
//!
//! This crate wires the primitives into the showcase:
//! - FeatureRegistry: ordered catalog with a single active module
//! - Demo modules: thin configurations of Stepper / PointerController
//! - Home page widgets: scan modal and comparison slider
//! - Developer page widgets: typewriter and copy notice
//! - Configuration and logging bootstrap

pub mod config;
pub mod logging;
pub mod module;
pub mod registry;
pub mod catalog;
pub mod demos;
pub mod home;
pub mod developer;

pub use config::*;
pub use logging::*;
pub use module::*;
pub use registry::*;
pub use catalog::*;
pub use demos::*;
pub use home::*;
pub use developer::*;
