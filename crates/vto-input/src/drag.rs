//! Elastic draggable nodes
//!
//! Each node is independent: its offset from rest follows the pointer
//! inside a square region of half-width `extent`, overshoot beyond that is
//! damped by `elastic` and capped, and after release the node springs back
//! toward rest one `settle()` step at a time.

use crate::Point;

/// Below this distance a released node snaps to rest
const SNAP_DISTANCE: f64 = 0.01;

/// Displacement bounds and return spring of a draggable node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElasticBounds {
    /// Free travel from rest along each axis
    pub extent: f64,
    /// Fraction of overshoot that is still applied past `extent`
    pub elastic: f64,
    /// Fraction of the remaining offset removed per settle step
    pub stiffness: f64,
}

impl Default for ElasticBounds {
    fn default() -> Self {
        ElasticBounds {
            extent: 10.0,
            elastic: 0.2,
            stiffness: 0.2,
        }
    }
}

impl ElasticBounds {
    /// Largest offset a node can reach along one axis
    #[inline]
    pub fn max_offset(&self) -> f64 {
        self.extent * (1.0 + self.elastic)
    }

    /// Rubber-band one axis of a raw displacement
    pub fn constrain_axis(&self, raw: f64) -> f64 {
        if !raw.is_finite() {
            return 0.0;
        }
        let magnitude = raw.abs();
        if magnitude <= self.extent {
            return raw;
        }
        let overshoot = ((magnitude - self.extent) * self.elastic).min(self.extent * self.elastic);
        (self.extent + overshoot).copysign(raw)
    }

    pub fn constrain(&self, raw: Point) -> Point {
        Point::new(self.constrain_axis(raw.x), self.constrain_axis(raw.y))
    }
}

/// A node that can be grabbed, dragged and released
#[derive(Clone, Debug, PartialEq)]
pub struct DraggableNode {
    rest: Point,
    offset: Point,
    grab: Option<Point>,
    bounds: ElasticBounds,
}

impl DraggableNode {
    pub fn new(rest: Point, bounds: ElasticBounds) -> Self {
        DraggableNode {
            rest,
            offset: Point::ORIGIN,
            grab: None,
            bounds,
        }
    }

    /// Grab the node at pointer position `at`
    pub fn press(&mut self, at: Point) {
        // Keep the current offset so a re-grab mid-return does not jump
        self.grab = Some(at - self.offset);
    }

    /// Follow the pointer; ignored when not grabbed
    pub fn drag_to(&mut self, at: Point) {
        if let Some(anchor) = self.grab {
            self.offset = self.bounds.constrain(at - anchor);
        }
    }

    /// Let go; the node starts returning to rest
    pub fn release(&mut self) {
        self.grab = None;
    }

    /// One step of elastic return
    ///
    /// Returns true while the node is still away from rest.
    pub fn settle(&mut self) -> bool {
        if self.grab.is_some() {
            return true;
        }
        self.offset = self.offset.scale(1.0 - self.bounds.stiffness.clamp(0.0, 1.0));
        if self.offset.length() < SNAP_DISTANCE {
            self.offset = Point::ORIGIN;
            return false;
        }
        true
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.grab.is_none() && self.offset == Point::ORIGIN
    }

    #[inline]
    pub fn offset(&self) -> Point {
        self.offset
    }

    #[inline]
    pub fn rest(&self) -> Point {
        self.rest
    }

    /// Rendered position
    #[inline]
    pub fn position(&self) -> Point {
        self.rest + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn node() -> DraggableNode {
        DraggableNode::new(Point::new(50.0, 50.0), ElasticBounds::default())
    }

    #[test]
    fn test_free_travel_inside_extent() {
        let mut n = node();
        n.press(Point::new(50.0, 50.0));
        n.drag_to(Point::new(56.0, 45.0));
        assert_eq!(n.offset(), Point::new(6.0, -5.0));
        assert_eq!(n.position(), Point::new(56.0, 45.0));
    }

    #[test]
    fn test_overshoot_is_damped() {
        let mut n = node();
        n.press(Point::new(50.0, 50.0));
        n.drag_to(Point::new(70.0, 50.0));
        // 10 free + (10 overshoot * 0.2)
        assert!((n.offset().x - 12.0).abs() < 1e-9);

        n.drag_to(Point::new(500.0, -500.0));
        assert!((n.offset().x - 12.0).abs() < 1e-9);
        assert!((n.offset().y + 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_release_returns_to_rest() {
        let mut n = node();
        n.press(Point::new(50.0, 50.0));
        n.drag_to(Point::new(58.0, 58.0));
        n.release();

        let mut steps = 0;
        let mut last = n.offset().length();
        while n.settle() {
            assert!(n.offset().length() < last);
            last = n.offset().length();
            steps += 1;
            assert!(steps < 100);
        }
        assert!(n.is_at_rest());
        assert_eq!(n.position(), n.rest());
    }

    #[test]
    fn test_settle_while_held_does_nothing() {
        let mut n = node();
        n.press(Point::new(50.0, 50.0));
        n.drag_to(Point::new(53.0, 50.0));
        assert!(n.settle());
        assert_eq!(n.offset(), Point::new(3.0, 0.0));
    }

    #[test]
    fn test_drag_without_press_ignored() {
        let mut n = node();
        n.drag_to(Point::new(90.0, 90.0));
        assert!(n.is_at_rest());
    }

    #[test]
    fn test_regrab_mid_return_keeps_offset() {
        let mut n = node();
        n.press(Point::new(50.0, 50.0));
        n.drag_to(Point::new(58.0, 50.0));
        n.release();
        n.settle();
        let before = n.offset();

        n.press(Point::new(10.0, 10.0));
        n.drag_to(Point::new(10.0, 10.0));
        assert!((n.offset() - before).length() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_offset_bounded(dx in -1e5f64..1e5, dy in -1e5f64..1e5) {
            let mut n = node();
            n.press(Point::ORIGIN);
            n.drag_to(Point::new(dx, dy));
            let max = ElasticBounds::default().max_offset() + 1e-9;
            prop_assert!(n.offset().x.abs() <= max);
            prop_assert!(n.offset().y.abs() <= max);
        }
    }
}
