//! Virtual tailor - photo or video capture feeding one stepper

use tokio::sync::watch;

use vto_core::{Progress, SimulationState, Stage, TickProfile, VtoResult};
use vto_input::RangeInput;
use vto_state::{Pipeline, Stepper};

use crate::module::ignore;
use crate::{DemoInput, DemoModule, DemoView, ShowcaseConfig};

/// Capture source
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TailorMode {
    #[default]
    Photo,
    Video,
}

/// Pipeline tag: capture mode plus the profile it runs at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture {
    pub mode: TailorMode,
    pub profile: TickProfile,
}

impl Pipeline for Capture {
    fn profile(&self) -> TickProfile {
        self.profile
    }
}

/// Photo-mode number boxes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyField {
    Feet,
    Inches,
    Weight,
}

/// Extracted measurements, in inches
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurements {
    pub chest: f64,
    pub waist: f64,
    pub inseam: f64,
}

impl Measurements {
    pub fn for_mode(mode: TailorMode) -> Self {
        match mode {
            TailorMode::Photo => Measurements {
                chest: 24.2,
                waist: 21.5,
                inseam: 19.8,
            },
            TailorMode::Video => Measurements {
                chest: 26.5,
                waist: 22.0,
                inseam: 20.5,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyProfile {
    pub feet: f64,
    pub inches: f64,
    pub weight_lbs: f64,
}

impl BodyProfile {
    pub fn height_inches(&self) -> f64 {
        self.feet * 12.0 + self.inches
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TailorView {
    pub mode: TailorMode,
    pub state: SimulationState,
    pub body: BodyProfile,
    /// Present only once the scan is complete
    pub result: Option<Measurements>,
    pub action_label: &'static str,
}

pub struct TailorDemo {
    stepper: Stepper<Capture>,
    photo: TickProfile,
    video: TickProfile,
    feet: RangeInput,
    inches: RangeInput,
    weight: RangeInput,
}

impl TailorDemo {
    pub fn new(photo: TickProfile, video: TickProfile) -> Self {
        TailorDemo {
            stepper: Stepper::new(Capture {
                mode: TailorMode::Photo,
                profile: photo,
            }),
            photo,
            video,
            feet: RangeInput::new(2.0, 7.0, 4.0),
            inches: RangeInput::new(0.0, 11.0, 6.0),
            weight: RangeInput::new(20.0, 400.0, 85.0),
        }
    }

    pub fn boxed(config: &ShowcaseConfig) -> Box<dyn DemoModule> {
        Box::new(Self::new(
            config.photo_analysis.resolve(TickProfile::photo_analysis()),
            config.video_scan.resolve(TickProfile::video_scan()),
        ))
    }

    fn capture(&self, mode: TailorMode) -> Capture {
        let profile = match mode {
            TailorMode::Photo => self.photo,
            TailorMode::Video => self.video,
        };
        Capture { mode, profile }
    }

    pub fn mode(&self) -> TailorMode {
        self.stepper.mode().mode
    }

    pub fn snapshot(&self) -> TailorView {
        let state = self.stepper.state();
        let mode = self.mode();
        let running = state.stage == Stage::Running;
        let action_label = match (mode, running) {
            (TailorMode::Photo, false) => "Start Photo Analysis",
            (TailorMode::Photo, true) => "Processing...",
            (TailorMode::Video, false) => "Start 360° Video Scan",
            (TailorMode::Video, true) => "Scanning 360° Topology...",
        };
        TailorView {
            mode,
            state,
            body: BodyProfile {
                feet: self.feet.value(),
                inches: self.inches.value(),
                weight_lbs: self.weight.value(),
            },
            result: state.is_complete().then(|| Measurements::for_mode(mode)),
            action_label,
        }
    }
}

impl DemoModule for TailorDemo {
    fn name(&self) -> &'static str {
        "tailor"
    }

    fn handle(&mut self, input: DemoInput) -> VtoResult<()> {
        match input {
            DemoInput::TailorMode(mode) => {
                let capture = self.capture(mode);
                self.stepper.select_mode(capture);
                Ok(())
            }
            DemoInput::Start => {
                // A finished scan clears its result and rescans
                self.stepper.reset();
                self.stepper.start()?;
                Ok(())
            }
            DemoInput::Reset => {
                self.stepper.reset();
                Ok(())
            }
            DemoInput::BodyField(field, value) => {
                match field {
                    BodyField::Feet => self.feet.set(value),
                    BodyField::Inches => self.inches.set(value),
                    BodyField::Weight => self.weight.set(value),
                };
                Ok(())
            }
            other => ignore(self.name(), &other),
        }
    }

    fn view(&self) -> DemoView {
        DemoView::Tailor(self.snapshot())
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

    fn demo() -> TailorDemo {
        TailorDemo::new(TickProfile::photo_analysis(), TickProfile::video_scan())
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[tokio::test(start_paused = true)]
    async fn test_photo_scan_yields_measurements() {
        let mut d = demo();
        d.handle(DemoInput::Start).unwrap();
        assert_eq!(d.snapshot().result, None);
        assert_eq!(d.snapshot().action_label, "Processing...");

        time::sleep(ms(2010)).await;
        let view = d.snapshot();
        assert_eq!(view.state.stage, Stage::Complete);
        assert_eq!(view.result, Some(Measurements::for_mode(TailorMode::Photo)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_video_scan_takes_longer() {
        let mut d = demo();
        d.handle(DemoInput::TailorMode(TailorMode::Video)).unwrap();
        d.handle(DemoInput::Start).unwrap();

        time::sleep(ms(2010)).await;
        assert_eq!(d.snapshot().state.stage, Stage::Running);
        assert_eq!(d.snapshot().action_label, "Scanning 360° Topology...");

        time::sleep(ms(1000)).await;
        let view = d.snapshot();
        assert_eq!(view.result, Some(Measurements::for_mode(TailorMode::Video)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mode_switch_while_running_resets() {
        let mut d = demo();
        d.handle(DemoInput::Start).unwrap();
        time::sleep(ms(500)).await;

        d.handle(DemoInput::TailorMode(TailorMode::Video)).unwrap();
        let view = d.snapshot();
        assert_eq!(view.mode, TailorMode::Video);
        assert_eq!(view.state, SimulationState::IDLE);

        time::sleep(ms(3000)).await;
        assert_eq!(d.snapshot().state, SimulationState::IDLE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mode_switch_clears_result() {
        let mut d = demo();
        d.handle(DemoInput::Start).unwrap();
        time::sleep(ms(2100)).await;
        assert!(d.snapshot().result.is_some());

        d.handle(DemoInput::TailorMode(TailorMode::Video)).unwrap();
        assert_eq!(d.snapshot().result, None);
    }

    #[test]
    fn test_body_fields_clamp() {
        let mut d = demo();
        d.handle(DemoInput::BodyField(BodyField::Feet, 12.0)).unwrap();
        d.handle(DemoInput::BodyField(BodyField::Inches, -3.0)).unwrap();
        d.handle(DemoInput::BodyField(BodyField::Weight, 5000.0)).unwrap();

        let body = d.snapshot().body;
        assert_eq!(body.feet, 7.0);
        assert_eq!(body.inches, 0.0);
        assert_eq!(body.weight_lbs, 400.0);
        assert_eq!(body.height_inches(), 84.0);
    }
}
