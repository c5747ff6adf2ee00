//! VTO State - Stepper state machine
//!
//! A stepper owns one Progress Simulator and decides which user actions
//! are accepted. The pipeline mode (photo vs. video, ...) is a separate
//! tag that may only change while Idle.

pub mod stepper;

pub use stepper::*;
