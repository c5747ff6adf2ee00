//! Stepper - Idle -> Running -> Complete, gated by user actions

use std::fmt;

use tokio::sync::watch;
use tracing::debug;

use vto_core::{Progress, SimulationState, Stage, TickProfile, VtoResult};
use vto_time::ProgressSimulator;

/// Which simulated pipeline a stepper runs
pub trait Pipeline: Copy + Eq + fmt::Debug + Send + 'static {
    /// Tick profile used when the stepper starts in this mode
    fn profile(&self) -> TickProfile;
}

/// Single-mode pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fixed(pub TickProfile);

impl Pipeline for Fixed {
    fn profile(&self) -> TickProfile {
        self.0
    }
}

/// Finite-state machine over one Progress Simulator
///
/// Stage is derived from the armed flag and the simulator value, so
/// `Complete` is observed exactly when progress reaches 100.
///
/// Mode policy: selecting a different mode while Running or Complete
/// forces a teardown to Idle first.
pub struct Stepper<P: Pipeline> {
    mode: P,
    armed: bool,
    simulator: ProgressSimulator,
}

impl<P: Pipeline> Stepper<P> {
    pub fn new(mode: P) -> Self {
        Stepper {
            mode,
            armed: false,
            simulator: ProgressSimulator::new(),
        }
    }

    /// Current stage
    pub fn stage(&self) -> Stage {
        if !self.armed {
            Stage::Idle
        } else if self.simulator.value().is_complete() {
            Stage::Complete
        } else {
            Stage::Running
        }
    }

    /// Stage and progress, read consistently
    pub fn state(&self) -> SimulationState {
        let progress = self.simulator.value();
        let stage = match (self.armed, progress.is_complete()) {
            (false, _) => Stage::Idle,
            (true, true) => Stage::Complete,
            (true, false) => Stage::Running,
        };
        SimulationState::new(stage, progress)
    }

    #[inline]
    pub fn progress(&self) -> Progress {
        self.simulator.value()
    }

    #[inline]
    pub fn mode(&self) -> P {
        self.mode
    }

    /// The single input gate: start is accepted only while Idle
    #[inline]
    pub fn accepts_start(&self) -> bool {
        self.stage() == Stage::Idle
    }

    /// Idle -> Running
    ///
    /// Returns `Ok(false)` when ignored (not Idle).
    pub fn start(&mut self) -> VtoResult<bool> {
        let stage = self.stage();
        if stage != Stage::Idle {
            debug!(stage = stage.name(), mode = ?self.mode, "start ignored");
            return Ok(false);
        }

        self.simulator.reset();
        self.simulator.start(self.mode.profile())?;
        self.armed = true;
        debug!(mode = ?self.mode, "stepper running");
        Ok(true)
    }

    /// Complete -> Idle (user "scan again" / "discard")
    ///
    /// Returns false when ignored (not Complete).
    pub fn reset(&mut self) -> bool {
        let stage = self.stage();
        if stage != Stage::Complete {
            debug!(stage = stage.name(), "reset ignored");
            return false;
        }
        self.simulator.reset();
        self.armed = false;
        true
    }

    /// Any stage -> Idle, cancelling the live timer
    ///
    /// Nothing is published: subscribers see no value after teardown.
    pub fn teardown(&mut self) {
        self.simulator.discard();
        self.armed = false;
    }

    /// Switch pipeline mode, forcing Idle first if needed
    ///
    /// Returns false when `mode` is already selected.
    pub fn select_mode(&mut self, mode: P) -> bool {
        if mode == self.mode {
            return false;
        }
        if self.stage() != Stage::Idle {
            debug!(from = ?self.mode, to = ?mode, "mode switch forces reset");
            self.teardown();
        }
        self.mode = mode;
        true
    }

    /// Subscribe to the progress stream of this stepper
    pub fn subscribe(&self) -> watch::Receiver<Progress> {
        self.simulator.subscribe()
    }
}
