//! Default showcase catalog

use vto_core::FeatureId;

use crate::{
    DigitizationDemo, FeatureDescriptor, FeatureMeta, HeatmapDemo, LightingDemo, PhysicsDemo,
    RiggingDemo, TailorDemo, XRayDemo,
};

pub const HEATMAP: FeatureId = FeatureId::new("heatmap");
pub const DIGITIZATION: FeatureId = FeatureId::new("digitization");
pub const RIGGING: FeatureId = FeatureId::new("rigging");
pub const TAILOR: FeatureId = FeatureId::new("tailor");
pub const PHYSICS: FeatureId = FeatureId::new("physics");
pub const XRAY: FeatureId = FeatureId::new("xray");
pub const LIGHTING: FeatureId = FeatureId::new("lighting");

/// The seven showcase features, in display order
pub fn showcase_catalog() -> Vec<FeatureDescriptor> {
    vec![
        FeatureDescriptor::new(
            HEATMAP,
            FeatureMeta {
                title: "Fit Heatmaps",
                tech_short: "Soft-Body Finite Element Analysis",
                description: "Visualizes pressure points where fabric is too tight (red) or too loose (blue). Uses strain tensor calculation on the 3D mesh.",
                how_it_works_title: "Strain Tensor Logic",
                how_it_works: &[
                    "Avatar moves to 'T-Pose'",
                    "Cloth mesh draped with gravity",
                    "Distance calculated between cloth vertex and skin vertex",
                ],
                outcome_title: "Why it matters",
                outcome: &["Reduces returns by 40%", "Identifies poor pattern making"],
            },
            HeatmapDemo::boxed,
        ),
        FeatureDescriptor::new(
            DIGITIZATION,
            FeatureMeta {
                title: "Wardrobe Digitization",
                tech_short: "NeRF + Gaussian Splatting",
                description: "Reconstructs 3D assets from 2D photos using Neural Radiance Fields. Supports transparent textures like lace.",
                how_it_works_title: "Pipeline",
                how_it_works: &[
                    "Multi-view image capture",
                    "Sparse point cloud generation",
                    "Texture projection baking",
                ],
                outcome_title: "Capabilities",
                outcome: &["15-second processing time", "GLB/USDZ export ready"],
            },
            DigitizationDemo::boxed,
        ),
        FeatureDescriptor::new(
            RIGGING,
            FeatureMeta {
                title: "Kinetic Rigging",
                tech_short: "Inverse Kinematics (IK)",
                description: "Tests garment flexibility during movement. Our 'Squat Test' reveals if pants will slide down or restrict movement.",
                how_it_works_title: "Motion Logic",
                how_it_works: &[
                    "Bone-weight binding",
                    "Collision detection enabled",
                    "Cloth simulation steps: 60/sec",
                ],
                outcome_title: "Use Case",
                outcome: &["Yoga pants testing", "Suit jacket arm lift range"],
            },
            RiggingDemo::boxed,
        ),
        FeatureDescriptor::new(
            TAILOR,
            FeatureMeta {
                title: "Virtual Tailor",
                tech_short: "Computer Vision Measurement",
                description: "Extracts precise body measurements (chest, waist, inseam) from a single photo or video scan with <0.5cm error margin.",
                how_it_works_title: "Measurement Tech",
                how_it_works: &[
                    "Pose estimation (OpenPose)",
                    "Pixel-to-metric calibration",
                    "Convex hull circumference",
                ],
                outcome_title: "Accuracy",
                outcome: &["98.5% match to manual tape", "Instant size recommendation"],
            },
            TailorDemo::boxed,
        ),
        FeatureDescriptor::new(
            PHYSICS,
            FeatureMeta {
                title: "Soft-Body Physics",
                tech_short: "Verlet Integration",
                description: "Simulates fabric drape, weight, and elasticity. Silk behaves like silk, denim like denim.",
                how_it_works_title: "Material Props",
                how_it_works: &[
                    "Shear resistance",
                    "Bending stiffness",
                    "Mass per square meter (GSM)",
                ],
                outcome_title: "Visual Fidelity",
                outcome: &["Real-time 60fps web rendering", "Accurate wrinkle formation"],
            },
            PhysicsDemo::boxed,
        ),
        FeatureDescriptor::new(
            XRAY,
            FeatureMeta {
                title: "X-Ray Fit",
                tech_short: "Layer Composition",
                description: "See through the clothes to understand how the garment sits on the skin. Checks for air gaps and compression.",
                how_it_works_title: "Rendering",
                how_it_works: &[
                    "Alpha blending",
                    "Depth-test disabled for overlay",
                    "Silhouette edge detection",
                ],
                outcome_title: "Utility",
                outcome: &["Check bra fit under shirts", "Analyze layering bulk"],
            },
            XRayDemo::boxed,
        ),
        FeatureDescriptor::new(
            LIGHTING,
            FeatureMeta {
                title: "HDR Environments",
                tech_short: "Image Based Lighting (IBL)",
                description: "Test how fabrics interact with different lighting conditions, from studio strobes to natural sunlight.",
                how_it_works_title: "Rendering",
                how_it_works: &[
                    "Spherical harmonics",
                    "PBR materials (Roughness/Metalness)",
                    "Tone mapping",
                ],
                outcome_title: "Reality Check",
                outcome: &["True color verification", "Sheerness testing"],
            },
            LightingDemo::boxed,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DemoView, ShowcaseConfig};

    #[test]
    fn test_display_order() {
        let ids: Vec<_> = showcase_catalog().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            ["heatmap", "digitization", "rigging", "tailor", "physics", "xray", "lighting"]
        );
    }

    #[test]
    fn test_factories_match_ids() {
        let config = ShowcaseConfig::default();
        for d in showcase_catalog() {
            let module = (d.factory)(&config);
            assert_eq!(module.name(), d.id.as_str());
            assert!(!d.meta.how_it_works.is_empty());
            assert!(!d.meta.outcome.is_empty());
        }
    }

    #[test]
    fn test_pipeline_modules_start_idle() {
        let config = ShowcaseConfig::default();
        for d in showcase_catalog() {
            let module = (d.factory)(&config);
            match module.view() {
                DemoView::Digitization(v) => assert!(v.state.is_idle()),
                DemoView::Tailor(v) => assert!(v.state.is_idle()),
                _ => assert_eq!(module.simulation_state(), None),
            }
        }
    }
}
