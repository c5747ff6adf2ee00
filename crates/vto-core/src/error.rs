//! Error types for the showcase core

use std::time::Duration;

use thiserror::Error;

use crate::FeatureId;

/// Core showcase errors
///
/// Out-of-range input and invalid transitions are never errors: they are
/// clamped or ignored where they occur. Only construction, configuration
/// and scheduling failures surface here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VtoError {
    // Registry errors
    #[error("Unknown feature: {0}")]
    UnknownFeature(FeatureId),

    #[error("Duplicate feature in catalog: {0}")]
    DuplicateFeature(FeatureId),

    #[error("Feature catalog is empty")]
    EmptyCatalog,

    // Timer errors
    #[error("Invalid tick profile: step {step}, interval {interval:?}")]
    InvalidTickProfile { step: u32, interval: Duration },

    #[error("No async runtime available to schedule ticks")]
    NoRuntime,

    // Ambient errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

/// Result type for showcase operations
pub type VtoResult<T> = Result<T, VtoError>;
