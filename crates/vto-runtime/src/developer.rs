//! Developer page widgets: install-command typewriter and copy notice

use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use vto_core::{Progress, SimulationState, Stage, TickProfile, VtoError, VtoResult};
use vto_state::{Fixed, Stepper};

use crate::ShowcaseConfig;

/// Command shown in the terminal hero
pub const INSTALL_COMMAND: &str = "npm install @vto-nexus/sdk";

/// Profile that spreads `chars` reveals over `chars * per_char`
///
/// Progress is a percentage, so the step is the largest whole percentage
/// that still gives every character at least one tick.
fn typing_profile(chars: usize, per_char: Duration) -> VtoResult<TickProfile> {
    let chars = u32::try_from(chars.max(1)).unwrap_or(u32::MAX);
    let step = (100 / chars).max(1);
    let ticks = 100u32.div_ceil(step);
    let total = per_char
        .checked_mul(chars)
        .ok_or(VtoError::InvalidTickProfile {
            step,
            interval: per_char,
        })?;
    TickProfile::new(step, total / ticks)
}

/// Reveals a fixed text one character at a time
/// INVARIANT: the full text is revealed iff the stepper is Complete
pub struct Typewriter {
    text: String,
    chars: usize,
    stepper: Stepper<Fixed>,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, per_char: Duration) -> VtoResult<Self> {
        let text = text.into();
        let chars = text.chars().count();
        let profile = typing_profile(chars, per_char)?;
        Ok(Typewriter {
            text,
            chars,
            stepper: Stepper::new(Fixed(profile)),
        })
    }

    /// The terminal hero, not yet typing
    pub fn install_command(config: &ShowcaseConfig) -> VtoResult<Self> {
        Self::new(
            INSTALL_COMMAND,
            Duration::from_millis(config.typewriter_char_ms),
        )
    }

    /// Begin typing; ignored unless Idle
    pub fn start(&mut self) -> VtoResult<bool> {
        self.stepper.start()
    }

    /// Number of characters currently shown
    pub fn revealed_chars(&self) -> usize {
        self.chars * usize::from(self.stepper.progress().as_u8()) / 100
    }

    /// Currently shown prefix, always on a char boundary
    pub fn revealed(&self) -> &str {
        match self.text.char_indices().nth(self.revealed_chars()) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.stepper.stage() == Stage::Complete
    }

    pub fn state(&self) -> SimulationState {
        self.stepper.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<Progress> {
        self.stepper.subscribe()
    }

    /// Stop typing and clear the text
    pub fn teardown(&mut self) {
        self.stepper.teardown();
    }
}

/// "Copy" button that shows "Copied" for a while, then reverts
pub struct CopyNotice {
    stepper: Stepper<Fixed>,
}

impl CopyNotice {
    pub fn new(hold: Duration) -> VtoResult<Self> {
        Ok(CopyNotice {
            stepper: Stepper::new(Fixed(TickProfile::new(100, hold)?)),
        })
    }

    pub fn from_config(config: &ShowcaseConfig) -> VtoResult<Self> {
        Self::new(Duration::from_millis(config.copy_notice_ms))
    }

    /// Show the notice; a copy while it is showing keeps the running timer
    pub fn copy(&mut self) -> VtoResult<bool> {
        if self.stepper.stage() == Stage::Running {
            debug!("copy notice already showing");
            return Ok(false);
        }
        self.stepper.reset();
        self.stepper.start()
    }

    #[inline]
    pub fn is_copied(&self) -> bool {
        self.stepper.stage() == Stage::Running
    }

    pub fn label(&self) -> &'static str {
        if self.is_copied() {
            "Copied"
        } else {
            "Copy"
        }
    }

    pub fn teardown(&mut self) {
        self.stepper.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn hero() -> Typewriter {
        Typewriter::install_command(&ShowcaseConfig::default()).unwrap()
    }

    #[test]
    fn test_typing_profile_spans_text() {
        // 26 chars: 3% per tick, 34 ticks over 1.3s
        let p = typing_profile(26, ms(50)).unwrap();
        assert_eq!(p.step(), 3);
        assert_eq!(p.ticks_to_complete(), 34);
        assert!(p.time_to_complete() <= ms(1300));
        assert!(p.time_to_complete() > ms(1299));

        let long = typing_profile(250, ms(10)).unwrap();
        assert_eq!(long.step(), 1);
        assert_eq!(long.time_to_complete(), ms(2500));
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(Typewriter::new("abc", Duration::ZERO).is_err());
        assert!(CopyNotice::new(Duration::ZERO).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_types_install_command() {
        let mut t = hero();
        assert_eq!(t.revealed(), "");
        assert!(t.start().unwrap());

        time::sleep(ms(660)).await;
        assert_eq!(t.revealed(), "npm install @");
        assert!(!t.is_done());

        time::sleep(ms(650)).await;
        assert!(t.is_done());
        assert_eq!(t.revealed(), INSTALL_COMMAND);

        time::sleep(ms(1000)).await;
        assert_eq!(t.revealed(), INSTALL_COMMAND);
    }

    #[tokio::test(start_paused = true)]
    async fn test_prefix_grows_monotonically() {
        let mut t = Typewriter::new("héllo wörld", ms(20)).unwrap();
        t.start().unwrap();

        let mut last = 0;
        while !t.is_done() {
            time::sleep(ms(5)).await;
            let shown = t.revealed();
            assert!(t.text().starts_with(shown));
            assert!(shown.chars().count() >= last);
            last = shown.chars().count();
        }
        assert_eq!(t.revealed(), "héllo wörld");
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_stops_typing() {
        let mut t = hero();
        t.start().unwrap();
        time::sleep(ms(200)).await;
        let mut rx = t.subscribe();
        rx.borrow_and_update();

        t.teardown();
        assert_eq!(t.revealed(), "");
        time::sleep(ms(3000)).await;
        assert!(!rx.has_changed().unwrap());
        assert_eq!(t.state(), SimulationState::IDLE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_notice_reverts() {
        let mut notice = CopyNotice::from_config(&ShowcaseConfig::default()).unwrap();
        assert_eq!(notice.label(), "Copy");

        assert!(notice.copy().unwrap());
        assert_eq!(notice.label(), "Copied");

        time::sleep(ms(1990)).await;
        assert!(!notice.copy().unwrap());
        assert!(notice.is_copied());

        time::sleep(ms(20)).await;
        assert!(!notice.is_copied());
        assert_eq!(notice.label(), "Copy");

        assert!(notice.copy().unwrap());
        assert!(notice.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_notice_teardown() {
        let mut notice = CopyNotice::new(ms(2000)).unwrap();
        notice.copy().unwrap();
        notice.teardown();
        assert!(!notice.is_copied());

        time::sleep(ms(3000)).await;
        assert_eq!(notice.label(), "Copy");
    }
}
