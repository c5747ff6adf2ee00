//! Showcase configuration

use serde::{Deserialize, Serialize};

use vto_core::{TickProfile, VtoError, VtoResult};
use vto_input::ElasticBounds;

use crate::LogConfig;

/// Serializable tick profile, at millisecond granularity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub step: u32,
    pub interval_ms: u64,
}

impl ProfileConfig {
    pub fn profile(&self) -> VtoResult<TickProfile> {
        TickProfile::from_millis(self.step, self.interval_ms)
    }

    /// Profile for module factories, which cannot fail
    pub fn resolve(&self, fallback: TickProfile) -> TickProfile {
        self.profile().unwrap_or(fallback)
    }
}

impl From<TickProfile> for ProfileConfig {
    /// Sub-millisecond intervals round up, so a valid profile stays valid
    fn from(p: TickProfile) -> Self {
        let ms = p.interval().as_nanos().div_ceil(1_000_000);
        ProfileConfig {
            step: p.step(),
            interval_ms: u64::try_from(ms).unwrap_or(u64::MAX),
        }
    }
}

/// Draggable node bounds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub extent: f64,
    pub elastic: f64,
    pub stiffness: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        let b = ElasticBounds::default();
        DragConfig {
            extent: b.extent,
            elastic: b.elastic,
            stiffness: b.stiffness,
        }
    }
}

impl DragConfig {
    pub fn bounds(&self) -> ElasticBounds {
        ElasticBounds {
            extent: self.extent,
            elastic: self.elastic,
            stiffness: self.stiffness,
        }
    }
}

/// Showcase configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Home page scan modal
    pub scan_upload: ProfileConfig,
    /// Wardrobe digitization demo
    pub digitization: ProfileConfig,
    /// Virtual tailor, photo mode
    pub photo_analysis: ProfileConfig,
    /// Virtual tailor, video mode
    pub video_scan: ProfileConfig,
    /// Soft-body node bounds
    pub drag: DragConfig,
    /// Developer page install command, per revealed character
    pub typewriter_char_ms: u64,
    /// Developer page "Copied" notice duration
    pub copy_notice_ms: u64,
    pub logging: LogConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        ShowcaseConfig {
            scan_upload: TickProfile::scan_upload().into(),
            digitization: TickProfile::digitization().into(),
            photo_analysis: TickProfile::photo_analysis().into(),
            video_scan: TickProfile::video_scan().into(),
            drag: DragConfig::default(),
            typewriter_char_ms: 50,
            copy_notice_ms: 2000,
            logging: LogConfig::default(),
        }
    }
}

impl ShowcaseConfig {
    /// Same durations, fewer and larger steps
    pub fn reduced_motion() -> Self {
        ShowcaseConfig {
            scan_upload: ProfileConfig {
                step: 10,
                interval_ms: 250,
            },
            digitization: ProfileConfig {
                step: 10,
                interval_ms: 200,
            },
            photo_analysis: ProfileConfig {
                step: 20,
                interval_ms: 400,
            },
            video_scan: ProfileConfig {
                step: 20,
                interval_ms: 600,
            },
            ..Default::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> VtoResult<Self> {
        let config: ShowcaseConfig =
            serde_json::from_str(json).map_err(|e| VtoError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> VtoResult<()> {
        for (name, p) in [
            ("scan_upload", &self.scan_upload),
            ("digitization", &self.digitization),
            ("photo_analysis", &self.photo_analysis),
            ("video_scan", &self.video_scan),
        ] {
            p.profile()
                .map_err(|e| VtoError::InvalidConfig(format!("{}: {}", name, e)))?;
        }

        for (name, ms) in [
            ("typewriter_char_ms", self.typewriter_char_ms),
            ("copy_notice_ms", self.copy_notice_ms),
        ] {
            if ms == 0 {
                return Err(VtoError::InvalidConfig(format!("{}: must be positive", name)));
            }
        }

        let d = &self.drag;
        if !(d.extent.is_finite() && d.extent >= 0.0) {
            return Err(VtoError::InvalidConfig(format!("drag.extent: {}", d.extent)));
        }
        if !(0.0..=1.0).contains(&d.elastic) {
            return Err(VtoError::InvalidConfig(format!("drag.elastic: {}", d.elastic)));
        }
        if !(d.stiffness > 0.0 && d.stiffness <= 1.0) {
            return Err(VtoError::InvalidConfig(format!("drag.stiffness: {}", d.stiffness)));
        }
        Ok(())
    }
}
