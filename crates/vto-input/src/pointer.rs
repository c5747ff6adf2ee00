//! Pointer Interaction Controller
//!
//! value = clamp(((coordinate - origin) / size) * 100, 0, 100)
//!
//! The rectangle is read fresh from a `BoundsSource` on every event;
//! nothing is cached across resizes.

use vto_core::InteractionValue;

use crate::{Axis, Point, Rect};

/// Map a coordinate onto a container span
///
/// Degenerate spans (zero, negative or non-finite) map to 0.
pub fn interaction_value(rect: Rect, coordinate: f64, axis: Axis) -> InteractionValue {
    let (origin, size) = rect.span(axis);
    if !(size.is_finite() && size > 0.0) {
        return InteractionValue::MIN;
    }
    InteractionValue::from_ratio((coordinate - origin) / size)
}

/// Raw move event from mouse or touch
#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    Mouse(Point),
    /// Active touch contacts; the first one is the pointer
    Touch(Vec<Point>),
}

impl PointerInput {
    /// Pointer position, if the event carries one
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerInput::Mouse(p) => Some(*p),
            PointerInput::Touch(contacts) => contacts.first().copied(),
        }
    }
}

/// Supplies the container rectangle at event time
pub trait BoundsSource {
    /// `None` when the container is not mounted
    fn bounds(&self) -> Option<Rect>;
}

impl BoundsSource for Rect {
    fn bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl BoundsSource for Option<Rect> {
    fn bounds(&self) -> Option<Rect> {
        *self
    }
}

/// Stateless controller for sliders and hover tracks
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerController {
    axis: Axis,
}

impl PointerController {
    pub fn new(axis: Axis) -> Self {
        PointerController { axis }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Interaction value for a move event, or `None` if there is nothing to apply
    pub fn on_move(&self, source: &dyn BoundsSource, input: &PointerInput) -> Option<InteractionValue> {
        let rect = source.bounds()?;
        let position = input.position()?;
        Some(interaction_value(rect, self.axis.coordinate(position), self.axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    fn container() -> Rect {
        Rect::new(100.0, 40.0, 400.0, 300.0)
    }

    #[test]
    fn test_left_of_container_clamps_to_zero() {
        let rect = container();
        let v = interaction_value(rect, rect.left - 50.0, Axis::Horizontal);
        assert_eq!(v, InteractionValue::MIN);
    }

    #[test]
    fn test_right_of_container_clamps_to_hundred() {
        let rect = container();
        let v = interaction_value(rect, rect.right() + 50.0, Axis::Horizontal);
        assert_eq!(v, InteractionValue::MAX);
    }

    #[test]
    fn test_inside_container() {
        let v = interaction_value(container(), 200.0, Axis::Horizontal);
        assert!((v.as_f64() - 25.0).abs() < 1e-9);

        let v = interaction_value(container(), 190.0, Axis::Vertical);
        assert!((v.as_f64() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_span() {
        let flat = Rect::new(0.0, 0.0, 0.0, 10.0);
        assert_eq!(interaction_value(flat, 5.0, Axis::Horizontal), InteractionValue::MIN);

        let broken = Rect::new(0.0, 0.0, f64::NAN, 10.0);
        assert_eq!(interaction_value(broken, 5.0, Axis::Horizontal), InteractionValue::MIN);
    }

    #[test]
    fn test_mouse_and_touch_agree() {
        let ctl = PointerController::horizontal();
        let at = Point::new(350.0, 10.0);

        let mouse = ctl.on_move(&container(), &PointerInput::Mouse(at));
        let touch = ctl.on_move(
            &container(),
            &PointerInput::Touch(vec![at, Point::new(120.0, 10.0)]),
        );
        assert_eq!(mouse, touch);
        assert!((mouse.unwrap().as_f64() - 62.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_update_without_contact_or_container() {
        let ctl = PointerController::horizontal();
        assert_eq!(ctl.on_move(&container(), &PointerInput::Touch(vec![])), None);

        let unmounted: Option<Rect> = None;
        assert_eq!(ctl.on_move(&unmounted, &PointerInput::Mouse(Point::ORIGIN)), None);
    }

    struct Resizing {
        width: Cell<f64>,
    }

    impl BoundsSource for Resizing {
        fn bounds(&self) -> Option<Rect> {
            Some(Rect::new(0.0, 0.0, self.width.get(), 100.0))
        }
    }

    #[test]
    fn test_bounds_read_fresh_each_event() {
        let ctl = PointerController::horizontal();
        let source = Resizing {
            width: Cell::new(200.0),
        };
        let input = PointerInput::Mouse(Point::new(100.0, 0.0));

        assert!((ctl.on_move(&source, &input).unwrap().as_f64() - 50.0).abs() < 1e-9);
        source.width.set(400.0);
        assert!((ctl.on_move(&source, &input).unwrap().as_f64() - 25.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_value_always_in_range(
            c in -1e6f64..1e6,
            left in -1e4f64..1e4,
            width in -10f64..1e4,
        ) {
            let rect = Rect::new(left, 0.0, width, 10.0);
            let v = interaction_value(rect, c, Axis::Horizontal).as_f64();
            prop_assert!((0.0..=100.0).contains(&v));
        }

        #[test]
        fn prop_monotonic_within_span(
            left in -1e3f64..1e3,
            width in 1f64..1e3,
            a in 0f64..1.0,
            b in 0f64..1.0,
        ) {
            let rect = Rect::new(left, 0.0, width, 10.0);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let v_lo = interaction_value(rect, left + lo * width, Axis::Horizontal);
            let v_hi = interaction_value(rect, left + hi * width, Axis::Horizontal);
            prop_assert!(v_lo <= v_hi);
        }
    }
}
