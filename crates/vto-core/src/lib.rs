//! VTO Core - Fundamental types and primitives
//!
//! This crate defines the core types shared by every simulated demo:
//! - Bounded percentages (Progress, InteractionValue)
//! - Simulation stages and snapshots
//! - Tick profiles for timer-driven sequences
//! - Identifiers (FeatureId, MountId)
//! - Error types

pub mod id;
pub mod progress;
pub mod stage;
pub mod profile;
pub mod error;

pub use id::*;
pub use progress::*;
pub use stage::*;
pub use profile::*;
pub use error::*;
