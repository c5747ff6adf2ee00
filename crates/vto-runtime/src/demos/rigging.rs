//! Kinetic rigging - stand vs. squat stress test

use vto_core::VtoResult;

use crate::module::ignore;
use crate::{DemoInput, DemoModule, DemoView, ShowcaseConfig};

/// Vertical hip drop of the squat pose, in viewbox units
const SQUAT_OFFSET: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Pose {
    #[default]
    Stand,
    Squat,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiggingView {
    pub pose: Pose,
    /// Skeleton offset below the standing pose
    pub offset: f64,
    pub tension: &'static str,
}

#[derive(Default)]
pub struct RiggingDemo {
    pose: Pose,
}

impl RiggingDemo {
    pub fn new() -> Self {
        RiggingDemo::default()
    }

    pub fn boxed(_config: &ShowcaseConfig) -> Box<dyn DemoModule> {
        Box::new(Self::new())
    }

    pub fn snapshot(&self) -> RiggingView {
        match self.pose {
            Pose::Stand => RiggingView {
                pose: Pose::Stand,
                offset: 0.0,
                tension: "RELAXED",
            },
            Pose::Squat => RiggingView {
                pose: Pose::Squat,
                offset: SQUAT_OFFSET,
                tension: "HIGH TENSION",
            },
        }
    }
}

impl DemoModule for RiggingDemo {
    fn name(&self) -> &'static str {
        "rigging"
    }

    fn handle(&mut self, input: DemoInput) -> VtoResult<()> {
        match input {
            DemoInput::Pose(pose) => {
                self.pose = pose;
                Ok(())
            }
            other => ignore(self.name(), &other),
        }
    }

    fn view(&self) -> DemoView {
        DemoView::Rigging(self.snapshot())
    }
}
