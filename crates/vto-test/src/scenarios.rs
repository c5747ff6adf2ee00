//! Behavioural scenarios
//!
//! Each harness drives the real components on the ambient tokio clock and
//! returns what an observer saw. Run them under a paused clock
//! (`start_paused = true`) to get deterministic, instant results.

use std::time::Duration;

use tokio::time;
use tracing::debug;

use vto_core::{FeatureId, InteractionValue, Progress, SimulationState, TickProfile, VtoResult};
use vto_input::{Point, PointerController, PointerInput, Rect};
use vto_runtime::{
    DemoInput, DigitizationDemo, FeatureDescriptor, FeatureMeta, FeatureRegistry, ShowcaseConfig,
};
use vto_state::{Fixed, Stepper};

use crate::ProgressProbe;

/// Extra ticks to wait past completion
const SETTLE_TICKS: u32 = 5;

/// What a full run of one stepper looked like
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// Every value published during the run, including the initial 0
    pub values: Vec<Progress>,
    pub final_state: SimulationState,
}

impl RunReport {
    /// Number of times 100 was published
    pub fn completions(&self) -> usize {
        self.values.iter().filter(|p| p.is_complete()).count()
    }

    pub fn is_non_decreasing(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

/// Start a stepper and let it run well past completion
pub async fn run_to_completion(profile: TickProfile) -> VtoResult<RunReport> {
    let mut stepper = Stepper::new(Fixed(profile));
    let probe = ProgressProbe::spawn(stepper.subscribe());

    stepper.start()?;
    time::sleep(profile.time_to_complete() + profile.interval() * SETTLE_TICKS).await;
    probe.flush().await;

    Ok(RunReport {
        values: probe.values(),
        final_state: stepper.state(),
    })
}

/// Interaction values for mouse and touch at the same off-container point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerReport {
    pub mouse: Option<InteractionValue>,
    pub touch: Option<InteractionValue>,
}

/// Move the pointer `dx` past the container edge (negative: left of it)
pub fn pointer_past_edge(rect: Rect, dx: f64) -> PointerReport {
    let x = if dx < 0.0 { rect.left + dx } else { rect.right() + dx };
    let at = Point::new(x, rect.top + rect.height / 2.0);
    let controller = PointerController::horizontal();
    PointerReport {
        mouse: controller.on_move(&rect, &PointerInput::Mouse(at)),
        touch: controller.on_move(&rect, &PointerInput::Touch(vec![at, Point::ORIGIN])),
    }
}

/// What each feature looked like around a mid-run switch
#[derive(Clone, Debug, PartialEq)]
pub struct SwitchReport {
    /// Progress of the first feature just before the switch
    pub before_switch: Progress,
    /// Values the first feature published from the switch onwards
    pub after_switch: Vec<Progress>,
    /// State of the second feature right after it was mounted
    pub mounted_state: Option<SimulationState>,
}

const SCAN_META: FeatureMeta = FeatureMeta {
    title: "Scan",
    tech_short: "",
    description: "",
    how_it_works_title: "",
    how_it_works: &[],
    outcome_title: "",
    outcome: &[],
};

/// Two pipeline features, "A" and "B"
pub fn paired_catalog() -> Vec<FeatureDescriptor> {
    vec![
        FeatureDescriptor::new(FeatureId::new("A"), SCAN_META, DigitizationDemo::boxed),
        FeatureDescriptor::new(FeatureId::new("B"), SCAN_META, DigitizationDemo::boxed),
    ]
}

/// Start feature "A", switch to "B" after `run_for`, then keep watching "A"
pub async fn switch_mid_run(config: ShowcaseConfig, run_for: Duration) -> VtoResult<SwitchReport> {
    let mut registry = FeatureRegistry::new(paired_catalog(), config)?;
    registry.select(FeatureId::new("A"))?;
    registry.dispatch(DemoInput::Start)?;

    let Some(probe) = registry.subscribe().map(ProgressProbe::spawn) else {
        // Nothing published, so nothing can leak
        registry.select(FeatureId::new("B"))?;
        return Ok(SwitchReport {
            before_switch: Progress::ZERO,
            after_switch: Vec::new(),
            mounted_state: registry.simulation_state(),
        });
    };
    time::sleep(run_for).await;
    probe.flush().await;
    let before_switch = probe.last().unwrap_or(Progress::ZERO);
    let mark = probe.len();

    registry.select(FeatureId::new("B"))?;
    let mounted_state = registry.simulation_state();
    probe.flush().await;
    debug!(%before_switch, mark, "switched mid-run");

    time::sleep(Duration::from_secs(10)).await;
    probe.flush().await;

    Ok(SwitchReport {
        before_switch,
        after_switch: probe.since(mark),
        mounted_state,
    })
}

/// Values of a run, then of a second run started after reset
#[derive(Clone, Debug, PartialEq)]
pub struct RestartReport {
    pub after_reset: SimulationState,
    pub second_run: Vec<Progress>,
}

/// Complete a run, reset, and start again for `ticks` ticks
pub async fn reset_and_restart(profile: TickProfile, ticks: u32) -> VtoResult<RestartReport> {
    let mut stepper = Stepper::new(Fixed(profile));
    stepper.start()?;
    time::sleep(profile.time_to_complete() + profile.interval()).await;

    stepper.reset();
    let after_reset = stepper.state();

    let probe = ProgressProbe::spawn(stepper.subscribe());
    stepper.start()?;
    time::sleep(profile.interval() * ticks + profile.interval() / 2).await;
    probe.flush().await;

    Ok(RestartReport {
        after_reset,
        second_run: probe.values(),
    })
}
