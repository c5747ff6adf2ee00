//! Numeric range fields
//!
//! Range sliders and number boxes feed display parameters directly.
//! Values outside the domain clamp to the nearest bound; non-finite input
//! is dropped.

/// Bounded numeric field
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeInput {
    min: f64,
    max: f64,
    value: f64,
}

impl RangeInput {
    /// Create a field; bounds are swapped if given in reverse and
    /// the initial value is clamped
    ///
    /// A non-finite bound collapses onto the finite one (or 0 when neither is).
    pub fn new(min: f64, max: f64, initial: f64) -> Self {
        let (min, max) = match (min.is_finite(), max.is_finite()) {
            (true, true) => (min, max),
            (true, false) => (min, min),
            (false, true) => (max, max),
            (false, false) => (0.0, 0.0),
        };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        RangeInput {
            min,
            max,
            value: if initial.is_finite() {
                initial.clamp(min, max)
            } else {
                min
            },
        }
    }

    /// Apply a change event; returns the value actually stored
    pub fn set(&mut self, raw: f64) -> f64 {
        if raw.is_finite() {
            self.value = raw.clamp(self.min, self.max);
        }
        self.value
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Position of the value within the domain, in [0, 1]
    pub fn fraction(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            0.0
        } else {
            (self.value - self.min) / span
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_to_bounds() {
        let mut r = RangeInput::new(-10.0, 30.0, 15.0);
        assert_eq!(r.set(45.0), 30.0);
        assert_eq!(r.set(-99.0), -10.0);
        assert_eq!(r.set(7.0), 7.0);
    }

    #[test]
    fn test_non_finite_ignored() {
        let mut r = RangeInput::new(0.0, 100.0, 50.0);
        assert_eq!(r.set(f64::NAN), 50.0);
        assert_eq!(r.set(f64::INFINITY), 50.0);
    }

    #[test]
    fn test_reversed_bounds_and_fraction() {
        let r = RangeInput::new(100.0, 0.0, 25.0);
        assert_eq!(r.min(), 0.0);
        assert_eq!(r.max(), 100.0);
        assert!((r.fraction() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_bounds_collapse() {
        let mut r = RangeInput::new(f64::NAN, 10.0, 5.0);
        assert_eq!((r.min(), r.max(), r.value()), (10.0, 10.0, 10.0));
        assert_eq!(r.set(-4.0), 10.0);

        let r = RangeInput::new(3.0, f64::INFINITY, 7.0);
        assert_eq!(r.value(), 3.0);

        let r = RangeInput::new(f64::NAN, f64::NAN, f64::NAN);
        assert_eq!(r.value(), 0.0);
        assert_eq!(r.fraction(), 0.0);
    }
}
