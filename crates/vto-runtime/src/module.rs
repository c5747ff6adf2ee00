//! Demo module interface

use tokio::sync::watch;
use tracing::debug;

use vto_core::{Progress, SimulationState, VtoResult};
use vto_input::Point;

use crate::demos::{
    BodyField, Environment, HeatmapView, LightingView, PhysicsView, Pose, RiggingView, ScanView,
    TailorMode, TailorView, XRayView,
};

/// User input routed to the active module
#[derive(Clone, Debug, PartialEq)]
pub enum DemoInput {
    /// Primary action ("Digitize Wardrobe", "Start Photo Analysis", ...)
    Start,
    /// Return a completed pipeline to idle
    Reset,
    /// Range slider change
    Range(f64),
    Pose(Pose),
    Environment(Environment),
    TailorMode(TailorMode),
    /// Number box change
    BodyField(BodyField, f64),
    NodePress { index: usize, at: Point },
    NodeDrag(Point),
    NodeRelease,
    /// Animation frame; advances elastic return
    Frame,
}

/// Render model of the active module
#[derive(Clone, Debug, PartialEq)]
pub enum DemoView {
    Heatmap(HeatmapView),
    Digitization(ScanView),
    Rigging(RiggingView),
    Tailor(TailorView),
    Physics(PhysicsView),
    XRay(XRayView),
    Lighting(LightingView),
}

/// A swappable demonstration module
///
/// Modules are mounted fresh in their idle state by a factory and torn
/// down before the next one is mounted.
pub trait DemoModule: Send {
    /// Human-readable identifier for logs
    fn name(&self) -> &'static str;

    /// Apply one input; unsupported inputs are ignored
    fn handle(&mut self, input: DemoInput) -> VtoResult<()>;

    fn view(&self) -> DemoView;

    /// Stepper state, for modules that run a simulated pipeline
    fn simulation_state(&self) -> Option<SimulationState> {
        None
    }

    /// Progress stream, for modules that run a simulated pipeline
    fn subscribe(&self) -> Option<watch::Receiver<Progress>> {
        None
    }

    /// Cancel timers and listeners; must leave nothing scheduled and
    /// publish nothing further on the progress stream
    fn teardown(&mut self) {}
}

/// Log and drop an input the module has no use for
pub(crate) fn ignore(module: &'static str, input: &DemoInput) -> VtoResult<()> {
    debug!(module, ?input, "input ignored");
    Ok(())
}
