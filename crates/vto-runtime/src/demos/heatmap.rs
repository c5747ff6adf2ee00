//! Fit heatmap - strain bands over a 9x9 cloth mesh

use vto_core::VtoResult;
use vto_input::RangeInput;

use crate::module::ignore;
use crate::{DemoInput, DemoModule, DemoView, ShowcaseConfig};

/// Rest length of a mesh edge, in mm
pub const REST_LENGTH_MM: f64 = 10.0;
/// Cells per mesh side
pub const GRID_SIDE: usize = 9;
/// Strain multiplier on chest and shoulder cells
const HOTSPOT_GAIN: f64 = 1.8;
/// Above this strain the mesh pulses
const PULSE_STRAIN: f64 = 15.0;

/// Fit band of one mesh cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrainBand {
    Loose,
    Neutral,
    Elevated,
    Tight,
}

impl StrainBand {
    pub fn classify(local_strain: f64) -> Self {
        if local_strain > 20.0 {
            StrainBand::Tight
        } else if local_strain > 10.0 {
            StrainBand::Elevated
        } else if local_strain < 0.0 {
            StrainBand::Loose
        } else {
            StrainBand::Neutral
        }
    }
}

/// Strain (%) of an edge stretched by `tightness`
pub fn strain_percent(tightness: f64) -> f64 {
    let current = REST_LENGTH_MM + tightness / 10.0;
    (current - REST_LENGTH_MM) * 100.0 / REST_LENGTH_MM
}

/// Chest and shoulder cells carry more load
pub fn is_hotspot(index: usize) -> bool {
    let row = index / GRID_SIDE;
    let col = index % GRID_SIDE;
    let chest = row > 2 && row < 5 && col > 2 && col < 6;
    let shoulder = row < 2 && (col < 2 || col > 6);
    chest || shoulder
}

pub fn cell_band(index: usize, strain: f64) -> StrainBand {
    let local = if is_hotspot(index) {
        strain * HOTSPOT_GAIN
    } else {
        strain
    };
    StrainBand::classify(local)
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapView {
    pub tightness: f64,
    pub strain: f64,
    pub pulsing: bool,
    /// Row-major, GRID_SIDE * GRID_SIDE cells
    pub cells: Vec<StrainBand>,
}

pub struct HeatmapDemo {
    tightness: RangeInput,
}

impl HeatmapDemo {
    pub fn new() -> Self {
        HeatmapDemo {
            tightness: RangeInput::new(-10.0, 30.0, 15.0),
        }
    }

    pub fn boxed(_config: &ShowcaseConfig) -> Box<dyn DemoModule> {
        Box::new(Self::new())
    }

    pub fn snapshot(&self) -> HeatmapView {
        let strain = strain_percent(self.tightness.value());
        HeatmapView {
            tightness: self.tightness.value(),
            strain,
            pulsing: strain > PULSE_STRAIN,
            cells: (0..GRID_SIDE * GRID_SIDE)
                .map(|i| cell_band(i, strain))
                .collect(),
        }
    }
}

impl Default for HeatmapDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoModule for HeatmapDemo {
    fn name(&self) -> &'static str {
        "heatmap"
    }

    fn handle(&mut self, input: DemoInput) -> VtoResult<()> {
        match input {
            DemoInput::Range(v) => {
                self.tightness.set(v);
                Ok(())
            }
            other => ignore(self.name(), &other),
        }
    }

    fn view(&self) -> DemoView {
        DemoView::Heatmap(self.snapshot())
    }
}
