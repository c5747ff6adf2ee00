//! Home page widgets: avatar scan modal and visual/wireframe comparison

use tokio::sync::watch;
use tracing::{debug, info};

use vto_core::{InteractionValue, Progress, SimulationState, Stage, TickProfile, VtoResult};
use vto_input::{BoundsSource, PointerController, PointerInput};
use vto_state::{Fixed, Stepper};

use crate::ShowcaseConfig;

/// "Create Your Avatar" modal: upload, construct, done
pub struct ScanModal {
    stepper: Stepper<Fixed>,
    open: bool,
}

impl ScanModal {
    pub fn new(config: &ShowcaseConfig) -> Self {
        ScanModal {
            stepper: Stepper::new(Fixed(
                config.scan_upload.resolve(TickProfile::scan_upload()),
            )),
            open: false,
        }
    }

    /// Show the modal in its upload stage
    pub fn open(&mut self) {
        self.stepper.teardown();
        self.open = true;
        info!("scan modal opened");
    }

    /// Hide the modal and cancel any scan in flight
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.stepper.teardown();
        self.open = false;
        info!("scan modal closed");
    }

    /// Begin constructing; ignored while closed or not Idle
    pub fn upload(&mut self) -> VtoResult<bool> {
        if !self.open {
            debug!("upload ignored, modal closed");
            return Ok(false);
        }
        self.stepper.start()
    }

    /// Complete -> upload stage
    pub fn scan_again(&mut self) -> bool {
        self.stepper.reset()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn state(&self) -> SimulationState {
        self.stepper.state()
    }

    pub fn heading(&self) -> &'static str {
        match self.stepper.stage() {
            Stage::Idle => "Upload 360° Scan",
            Stage::Running => "Constructing Digital Twin",
            Stage::Complete => "Avatar Ready",
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Progress> {
        self.stepper.subscribe()
    }
}

/// Comparison slider rendering mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Visual,
    Wireframe,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Visual => "VTO-Nexus 3D Physics",
            ViewMode::Wireframe => "Poly-Mesh Geometry",
        }
    }
}

/// Before/after slider over the hero image
#[derive(Clone, Copy, Debug)]
pub struct ComparisonSlider {
    position: InteractionValue,
    view: ViewMode,
    controller: PointerController,
}

impl ComparisonSlider {
    pub fn new() -> Self {
        ComparisonSlider {
            position: InteractionValue::MIDPOINT,
            view: ViewMode::default(),
            controller: PointerController::horizontal(),
        }
    }

    /// Track the pointer; the container rectangle is read on every call
    pub fn on_pointer_move(
        &mut self,
        bounds: &dyn BoundsSource,
        input: &PointerInput,
    ) -> InteractionValue {
        if let Some(value) = self.controller.on_move(bounds, input) {
            self.position = value;
        }
        self.position
    }

    pub fn set_view_mode(&mut self, view: ViewMode) {
        self.view = view;
    }

    #[inline]
    pub fn position(&self) -> InteractionValue {
        self.position
    }

    #[inline]
    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    /// Right inset of the overlay clip, in percent
    pub fn clip_right(&self) -> InteractionValue {
        self.position.complement()
    }
}

impl Default for ComparisonSlider {
    fn default() -> Self {
        Self::new()
    }
}
