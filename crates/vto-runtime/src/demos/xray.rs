//! X-ray fit - clothing layer opacity

use vto_core::VtoResult;
use vto_input::RangeInput;

use crate::module::ignore;
use crate::{DemoInput, DemoModule, DemoView, ShowcaseConfig};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XRayView {
    /// Slider value, in percent
    pub opacity: f64,
    /// Overlay alpha, in [0, 1]
    pub alpha: f64,
}

pub struct XRayDemo {
    opacity: RangeInput,
}

impl XRayDemo {
    pub fn new() -> Self {
        XRayDemo {
            opacity: RangeInput::new(0.0, 100.0, 50.0),
        }
    }

    pub fn boxed(_config: &ShowcaseConfig) -> Box<dyn DemoModule> {
        Box::new(Self::new())
    }

    pub fn snapshot(&self) -> XRayView {
        XRayView {
            opacity: self.opacity.value(),
            alpha: self.opacity.fraction(),
        }
    }
}

impl Default for XRayDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoModule for XRayDemo {
    fn name(&self) -> &'static str {
        "xray"
    }

    fn handle(&mut self, input: DemoInput) -> VtoResult<()> {
        match input {
            DemoInput::Range(v) => {
                self.opacity.set(v);
                Ok(())
            }
            other => ignore(self.name(), &other),
        }
    }

    fn view(&self) -> DemoView {
        DemoView::XRay(self.snapshot())
    }
}
