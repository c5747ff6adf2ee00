//! Tick profiles - how fast a simulated pipeline advances

use std::time::Duration;

use crate::{VtoError, VtoResult};

/// Step size and tick interval for a progress sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickProfile {
    step: u32,
    interval: Duration,
}

impl TickProfile {
    /// Create a validated profile
    pub fn new(step: u32, interval: Duration) -> VtoResult<Self> {
        if step == 0 || interval.is_zero() {
            return Err(VtoError::InvalidTickProfile { step, interval });
        }
        Ok(TickProfile { step, interval })
    }

    /// Convenience constructor for millisecond intervals
    pub fn from_millis(step: u32, interval_ms: u64) -> VtoResult<Self> {
        Self::new(step, Duration::from_millis(interval_ms))
    }

    /// Home page scan upload: +2 every 50ms
    pub const fn scan_upload() -> Self {
        TickProfile {
            step: 2,
            interval: Duration::from_millis(50),
        }
    }

    /// Wardrobe digitization: +2 every 40ms
    pub const fn digitization() -> Self {
        TickProfile {
            step: 2,
            interval: Duration::from_millis(40),
        }
    }

    /// Tailor photo analysis: 2s total
    pub const fn photo_analysis() -> Self {
        TickProfile {
            step: 5,
            interval: Duration::from_millis(100),
        }
    }

    /// Tailor 360° video scan: 3s total
    pub const fn video_scan() -> Self {
        TickProfile {
            step: 5,
            interval: Duration::from_millis(150),
        }
    }

    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks needed to go from 0 to 100
    pub fn ticks_to_complete(&self) -> u32 {
        100u32.div_ceil(self.step)
    }

    /// Wall time needed to go from 0 to 100
    pub fn time_to_complete(&self) -> Duration {
        self.interval * self.ticks_to_complete()
    }
}
