//! Deterministic progress counter

use vto_core::Progress;

/// Generation of a counter run
/// Every halt or reset moves to a new epoch; ticks carrying an older one are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Epoch(pub u64);

/// Result of asking the counter to begin a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Begin {
    /// A new run is live; ticks must carry this epoch
    Scheduled(Epoch),
    /// A run is already live; the request was ignored
    AlreadyRunning,
    /// Resume value was already 100; nothing to schedule
    AlreadyComplete,
}

/// Result of a single tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Value moved forward and the run continues
    Advanced(Progress),
    /// Value reached 100 and the run ended
    Completed,
    /// Tick belonged to a halted run; nothing changed
    Stale,
}

/// Bounded counter advanced by explicit ticks
/// INVARIANT: value is non-decreasing within a run and never exceeds 100
#[derive(Debug, Default)]
pub struct ProgressCounter {
    value: Progress,
    step: u32,
    running: bool,
    epoch: Epoch,
}

impl ProgressCounter {
    pub fn new() -> Self {
        ProgressCounter::default()
    }

    /// Begin a run from `from`, advancing `step` per tick
    pub fn begin(&mut self, step: u32, from: Progress) -> Begin {
        if self.running {
            return Begin::AlreadyRunning;
        }

        self.epoch = Epoch(self.epoch.0.wrapping_add(1));
        self.value = from;
        self.step = step;

        if from.is_complete() {
            return Begin::AlreadyComplete;
        }

        self.running = true;
        Begin::Scheduled(self.epoch)
    }

    /// Apply one tick of the run identified by `epoch`
    pub fn advance(&mut self, epoch: Epoch) -> Tick {
        if !self.running || epoch != self.epoch {
            return Tick::Stale;
        }

        self.value = self.value.step(self.step);

        if self.value.is_complete() {
            self.running = false;
            Tick::Completed
        } else {
            Tick::Advanced(self.value)
        }
    }

    /// Stop ticking, keeping the current value
    pub fn halt(&mut self) {
        self.running = false;
        self.epoch = Epoch(self.epoch.0.wrapping_add(1));
    }

    /// Stop ticking and return to zero
    pub fn reset(&mut self) {
        self.halt();
        self.value = Progress::ZERO;
    }

    #[inline]
    pub fn value(&self) -> Progress {
        self.value
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }
}
