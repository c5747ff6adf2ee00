//! Progress Simulator - a bounded counter ticking on a tokio interval

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use vto_core::{Progress, TickProfile, VtoError, VtoResult};

use crate::{Begin, Epoch, ProgressCounter, Tick};

/// Counter plus its publisher, shared with the tick task
struct Shared {
    counter: Mutex<ProgressCounter>,
    tx: watch::Sender<Progress>,
}

impl Shared {
    /// Apply one tick and publish under the counter lock,
    /// so observers see values in counter order
    fn tick(&self, epoch: Epoch) -> Tick {
        let mut counter = self.counter.lock();
        let tick = counter.advance(epoch);
        if !matches!(tick, Tick::Stale) {
            self.tx.send_replace(counter.value());
        }
        tick
    }
}

/// Owned handle to a live tick task
/// Dropping the handle aborts the task.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
    epoch: Epoch,
}

impl TimerHandle {
    #[inline]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Timer-driven bounded counter
///
/// Start policy: calling `start` while a run is live is a no-op.
pub struct ProgressSimulator {
    shared: Arc<Shared>,
    timer: Option<TimerHandle>,
}

impl ProgressSimulator {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Progress::ZERO);
        ProgressSimulator {
            shared: Arc::new(Shared {
                counter: Mutex::new(ProgressCounter::new()),
                tx,
            }),
            timer: None,
        }
    }

    /// Start ticking from 0
    ///
    /// Returns `Ok(false)` if a run was already live.
    pub fn start(&mut self, profile: TickProfile) -> VtoResult<bool> {
        self.start_from(profile, Progress::ZERO)
    }

    /// Start ticking from a resume value
    pub fn start_from(&mut self, profile: TickProfile, from: Progress) -> VtoResult<bool> {
        let runtime = Handle::try_current().map_err(|_| VtoError::NoRuntime)?;

        let epoch = {
            let mut counter = self.shared.counter.lock();
            match counter.begin(profile.step(), from) {
                Begin::AlreadyRunning => {
                    debug!(value = %counter.value(), "start ignored: simulator already running");
                    return Ok(false);
                }
                Begin::AlreadyComplete => {
                    self.shared.tx.send_replace(counter.value());
                    self.timer = None;
                    return Ok(true);
                }
                Begin::Scheduled(epoch) => {
                    self.shared.tx.send_replace(counter.value());
                    epoch
                }
            }
        };

        let shared = Arc::clone(&self.shared);
        let interval = profile.interval();
        let task = runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match shared.tick(epoch) {
                    Tick::Advanced(_) => {}
                    Tick::Completed => {
                        debug!(epoch = epoch.0, "progress sequence complete");
                        break;
                    }
                    Tick::Stale => {
                        trace!(epoch = epoch.0, "stale tick dropped");
                        break;
                    }
                }
            }
        });

        debug!(
            epoch = epoch.0,
            step = profile.step(),
            interval_ms = interval.as_millis() as u64,
            "progress simulator started"
        );
        // Any previous handle belongs to a finished or halted run
        self.timer = Some(TimerHandle { task, epoch });
        Ok(true)
    }

    /// Halt ticking, keeping the current value
    pub fn stop(&mut self) {
        self.shared.counter.lock().halt();
        self.timer = None;
    }

    /// Halt ticking and return to zero
    pub fn reset(&mut self) {
        {
            let mut counter = self.shared.counter.lock();
            counter.reset();
            self.shared.tx.send_replace(counter.value());
        }
        self.timer = None;
    }

    /// Halt ticking and return to zero without publishing
    ///
    /// Used when the owner goes away: subscribers keep the last value they
    /// saw and observe nothing further.
    pub fn discard(&mut self) {
        self.shared.counter.lock().reset();
        self.timer = None;
    }

    /// Current value
    pub fn value(&self) -> Progress {
        self.shared.counter.lock().value()
    }

    /// Whether a run is live
    pub fn is_running(&self) -> bool {
        self.shared.counter.lock().is_running()
    }

    /// Subscribe to every published value
    pub fn subscribe(&self) -> watch::Receiver<Progress> {
        self.shared.tx.subscribe()
    }

    /// Handle of the most recent run, if any
    pub fn timer(&self) -> Option<&TimerHandle> {
        self.timer.as_ref()
    }
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressSimulator {
    fn drop(&mut self) {
        self.shared.counter.lock().halt();
        self.timer = None;
    }
}
