//! HDR environments - lighting preset switcher

use vto_core::VtoResult;

use crate::module::ignore;
use crate::{DemoInput, DemoModule, DemoView, ShowcaseConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    #[default]
    Studio,
    Sunset,
    Neon,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::Studio, Environment::Sunset, Environment::Neon];

    pub fn label(self) -> &'static str {
        match self {
            Environment::Studio => "Studio White",
            Environment::Sunset => "Golden Hour",
            Environment::Neon => "Cyberpunk",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightingView {
    pub environment: Environment,
    pub label: &'static str,
    pub dark_backdrop: bool,
}

#[derive(Default)]
pub struct LightingDemo {
    environment: Environment,
}

impl LightingDemo {
    pub fn new() -> Self {
        LightingDemo::default()
    }

    pub fn boxed(_config: &ShowcaseConfig) -> Box<dyn DemoModule> {
        Box::new(Self::new())
    }

    pub fn snapshot(&self) -> LightingView {
        LightingView {
            environment: self.environment,
            label: self.environment.label(),
            dark_backdrop: self.environment == Environment::Neon,
        }
    }
}

impl DemoModule for LightingDemo {
    fn name(&self) -> &'static str {
        "lighting"
    }

    fn handle(&mut self, input: DemoInput) -> VtoResult<()> {
        match input {
            DemoInput::Environment(env) => {
                self.environment = env;
                Ok(())
            }
            other => ignore(self.name(), &other),
        }
    }

    fn view(&self) -> DemoView {
        DemoView::Lighting(self.snapshot())
    }
}
