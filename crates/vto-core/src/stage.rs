//! Simulation stages
//!
//! Canonical three-stage form:
//! Idle --(user starts)--> Running --(progress == 100)--> Complete --(user resets)--> Idle

use crate::Progress;

/// Stage of a simulated multi-stage process
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// Waiting for the user to start
    #[default]
    Idle,
    /// Timer is ticking
    Running,
    /// Progress reached 100; terminal until reset
    Complete,
}

impl Stage {
    /// Whether a timer may be live in this stage
    #[inline]
    pub fn is_live(self) -> bool {
        matches!(self, Stage::Running)
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::Running => "running",
            Stage::Complete => "complete",
        }
    }
}

/// Observable snapshot of a stepper
/// INVARIANT: stage == Complete iff progress == 100 (for an armed stepper)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SimulationState {
    pub stage: Stage,
    pub progress: Progress,
}

impl SimulationState {
    pub const IDLE: SimulationState = SimulationState {
        stage: Stage::Idle,
        progress: Progress::ZERO,
    };

    pub fn new(stage: Stage, progress: Progress) -> Self {
        SimulationState { stage, progress }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.stage == Stage::Idle
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Complete
    }
}
