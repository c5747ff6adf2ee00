//! Wardrobe digitization - a single-mode scan pipeline

use tokio::sync::watch;

use vto_core::{Progress, SimulationState, Stage, TickProfile, VtoResult};
use vto_state::{Fixed, Stepper};

use crate::module::ignore;
use crate::{DemoInput, DemoModule, DemoView, ShowcaseConfig};

/// Render model shared by single-mode scan demos
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanView {
    pub state: SimulationState,
    pub action_label: &'static str,
    /// Whether the primary action is clickable
    pub action_enabled: bool,
}

pub struct DigitizationDemo {
    stepper: Stepper<Fixed>,
}

impl DigitizationDemo {
    pub fn new(profile: TickProfile) -> Self {
        DigitizationDemo {
            stepper: Stepper::new(Fixed(profile)),
        }
    }

    pub fn boxed(config: &ShowcaseConfig) -> Box<dyn DemoModule> {
        Box::new(Self::new(
            config.digitization.resolve(TickProfile::digitization()),
        ))
    }

    pub fn snapshot(&self) -> ScanView {
        let state = self.stepper.state();
        let running = state.stage == Stage::Running;
        ScanView {
            state,
            action_label: if running {
                "Processing Alpha Channel..."
            } else {
                "Digitize Wardrobe"
            },
            action_enabled: !running,
        }
    }
}

impl DemoModule for DigitizationDemo {
    fn name(&self) -> &'static str {
        "digitization"
    }

    fn handle(&mut self, input: DemoInput) -> VtoResult<()> {
        match input {
            DemoInput::Start => {
                // The action button stays enabled after completion and rescans
                self.stepper.reset();
                self.stepper.start()?;
                Ok(())
            }
            DemoInput::Reset => {
                self.stepper.reset();
                Ok(())
            }
            other => ignore(self.name(), &other),
        }
    }

    fn view(&self) -> DemoView {
        DemoView::Digitization(self.snapshot())
    }

    fn simulation_state(&self) -> Option<SimulationState> {
        Some(self.stepper.state())
    }

    fn subscribe(&self) -> Option<watch::Receiver<Progress>> {
        Some(self.stepper.subscribe())
    }

    fn teardown(&mut self) {
        self.stepper.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time;

    fn demo() -> DigitizationDemo {
        DigitizationDemo::new(TickProfile::digitization())
    }

    #[tokio::test(start_paused = true)]
    async fn test_scan_runs_to_complete() {
        let mut d = demo();
        assert_eq!(d.snapshot().action_label, "Digitize Wardrobe");

        d.handle(DemoInput::Start).unwrap();
        let view = d.snapshot();
        assert_eq!(view.state.stage, Stage::Running);
        assert!(!view.action_enabled);
        assert_eq!(view.action_label, "Processing Alpha Channel...");

        time::sleep(Duration::from_millis(2010)).await;
        assert_eq!(
            d.snapshot().state,
            SimulationState::new(Stage::Complete, Progress::COMPLETE)
        );
        assert!(d.snapshot().action_enabled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_while_running_ignored() {
        let mut d = demo();
        d.handle(DemoInput::Start).unwrap();
        time::sleep(Duration::from_millis(100)).await;

        d.handle(DemoInput::Start).unwrap();
        assert_eq!(d.snapshot().state.progress, Progress::from_percent(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescan_from_complete() {
        let mut d = demo();
        d.handle(DemoInput::Start).unwrap();
        time::sleep(Duration::from_millis(2100)).await;

        d.handle(DemoInput::Start).unwrap();
        let state = d.snapshot().state;
        assert_eq!(state, SimulationState::new(Stage::Running, Progress::ZERO));
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_returns_idle() {
        let mut d = demo();
        d.handle(DemoInput::Start).unwrap();
        time::sleep(Duration::from_millis(500)).await;

        d.teardown();
        time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(d.simulation_state(), Some(SimulationState::IDLE));
    }
}
