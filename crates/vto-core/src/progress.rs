//! Bounded percentage primitives
//!
//! Two scalars flow from the core to presentation:
//! - Progress: integer percentage of a simulated pipeline, in [0, 100]
//! - InteractionValue: pointer position along one axis, in [0, 100]
//!
//! Both are clamped at construction, so no value outside the range can exist.

use std::fmt;

/// Progress of a simulated process
/// INVARIANT: 0 <= value <= 100
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Progress(u8);

impl Progress {
    pub const ZERO: Progress = Progress(0);
    pub const COMPLETE: Progress = Progress(100);

    /// Create from any integer, clamping into [0, 100]
    #[inline]
    pub fn from_percent(percent: i64) -> Self {
        Progress(percent.clamp(0, 100) as u8)
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn as_fraction(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Advance by `step`, saturating at 100
    #[inline]
    pub fn step(self, step: u32) -> Self {
        let next = (self.0 as u32).saturating_add(step).min(100);
        Progress(next as u8)
    }

    #[inline]
    pub fn is_complete(self) -> bool {
        self.0 >= 100
    }
}

impl fmt::Debug for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Progress({}%)", self.0)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Normalized pointer position along one axis of a container
/// INVARIANT: 0.0 <= value <= 100.0, never NaN
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct InteractionValue(f64);

impl InteractionValue {
    pub const MIN: InteractionValue = InteractionValue(0.0);
    pub const MAX: InteractionValue = InteractionValue(100.0);
    pub const MIDPOINT: InteractionValue = InteractionValue(50.0);

    /// Create from a raw percentage, clamping into [0, 100]
    #[inline]
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::MIN;
        }
        InteractionValue(percent.clamp(0.0, 100.0))
    }

    /// Create from a ratio where 0.0 is the container's origin and 1.0 its far edge
    #[inline]
    pub fn from_ratio(ratio: f64) -> Self {
        Self::new(ratio * 100.0)
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn as_fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// Distance from this value to the far edge (used for right-side clipping)
    #[inline]
    pub fn complement(self) -> Self {
        InteractionValue(100.0 - self.0)
    }
}

impl fmt::Debug for InteractionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interaction({:.2}%)", self.0)
    }
}

impl fmt::Display for InteractionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_progress_step_saturates() {
        let p = Progress::from_percent(98);
        assert_eq!(p.step(2), Progress::COMPLETE);
        assert_eq!(p.step(7), Progress::COMPLETE);
        assert_eq!(p.step(u32::MAX), Progress::COMPLETE);
    }

    #[test]
    fn test_progress_from_percent_clamps() {
        assert_eq!(Progress::from_percent(-5), Progress::ZERO);
        assert_eq!(Progress::from_percent(250), Progress::COMPLETE);
        assert_eq!(Progress::from_percent(42).as_u8(), 42);
    }

    #[test]
    fn test_interaction_value_nan() {
        assert_eq!(InteractionValue::new(f64::NAN), InteractionValue::MIN);
        assert_eq!(InteractionValue::new(f64::INFINITY), InteractionValue::MAX);
        assert_eq!(InteractionValue::new(f64::NEG_INFINITY), InteractionValue::MIN);
    }

    #[test]
    fn test_interaction_complement() {
        let v = InteractionValue::new(30.0);
        assert!((v.complement().as_f64() - 70.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_interaction_value_in_range(raw in proptest::num::f64::ANY) {
            let v = InteractionValue::new(raw).as_f64();
            prop_assert!((0.0..=100.0).contains(&v));
        }

        #[test]
        fn prop_progress_step_never_exceeds_complete(start in 0i64..=100, step in 0u32..500) {
            let p = Progress::from_percent(start).step(step);
            prop_assert!(p <= Progress::COMPLETE);
            prop_assert!(p >= Progress::from_percent(start));
        }
    }
}
