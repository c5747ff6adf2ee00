//! VTO Time - Progress Simulator
//!
//! This crate implements the timer-driven half of every demo:
//! - ProgressCounter: deterministic bounded counter, epoch-guarded
//! - ProgressSimulator: drives a counter from one tokio task per start
//! - TimerHandle: owned tick task, aborted on stop/reset/drop
//!
//! INVARIANT: at most one live tick task per simulator, and no tick
//! mutates the counter after `stop()`, `reset()` or drop.

pub mod counter;
pub mod simulator;

pub use counter::*;
pub use simulator::*;
