//! Soft-body physics - a grid of independent elastic nodes

use vto_core::VtoResult;
use vto_input::{DraggableNode, ElasticBounds, Point};

use crate::module::ignore;
use crate::{DemoInput, DemoModule, DemoView, ShowcaseConfig};

/// Nodes per grid side
pub const NODE_GRID_SIDE: usize = 5;
/// Distance between neighbouring rest positions
const NODE_PITCH: f64 = 48.0;
/// Rest position of node (0, 0)
const GRID_ORIGIN: f64 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsView {
    /// Row-major rendered node positions
    pub positions: Vec<Point>,
    pub held: Option<usize>,
    /// Whether any node is away from rest
    pub settling: bool,
    pub stiffness: f64,
}

pub struct PhysicsDemo {
    nodes: Vec<DraggableNode>,
    held: Option<usize>,
    bounds: ElasticBounds,
}

impl PhysicsDemo {
    pub fn new(bounds: ElasticBounds) -> Self {
        let nodes = (0..NODE_GRID_SIDE * NODE_GRID_SIDE)
            .map(|i| {
                let row = (i / NODE_GRID_SIDE) as f64;
                let col = (i % NODE_GRID_SIDE) as f64;
                let rest = Point::new(
                    GRID_ORIGIN + col * NODE_PITCH,
                    GRID_ORIGIN + row * NODE_PITCH,
                );
                DraggableNode::new(rest, bounds)
            })
            .collect();
        PhysicsDemo {
            nodes,
            held: None,
            bounds,
        }
    }

    pub fn boxed(config: &ShowcaseConfig) -> Box<dyn DemoModule> {
        Box::new(Self::new(config.drag.bounds()))
    }

    pub fn node(&self, index: usize) -> Option<&DraggableNode> {
        self.nodes.get(index)
    }

    fn release_held(&mut self) {
        if let Some(i) = self.held.take() {
            self.nodes[i].release();
        }
    }

    pub fn snapshot(&self) -> PhysicsView {
        PhysicsView {
            positions: self.nodes.iter().map(DraggableNode::position).collect(),
            held: self.held,
            settling: self.nodes.iter().any(|n| !n.is_at_rest()),
            stiffness: self.bounds.stiffness,
        }
    }
}

impl DemoModule for PhysicsDemo {
    fn name(&self) -> &'static str {
        "physics"
    }

    fn handle(&mut self, input: DemoInput) -> VtoResult<()> {
        match input {
            DemoInput::NodePress { index, at } if index < self.nodes.len() => {
                self.release_held();
                self.nodes[index].press(at);
                self.held = Some(index);
                Ok(())
            }
            DemoInput::NodeDrag(at) => {
                if let Some(i) = self.held {
                    self.nodes[i].drag_to(at);
                }
                Ok(())
            }
            DemoInput::NodeRelease => {
                self.release_held();
                Ok(())
            }
            DemoInput::Frame => {
                for node in &mut self.nodes {
                    node.settle();
                }
                Ok(())
            }
            other => ignore(self.name(), &other),
        }
    }

    fn view(&self) -> DemoView {
        DemoView::Physics(self.snapshot())
    }

    fn teardown(&mut self) {
        self.release_held();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn demo() -> PhysicsDemo {
        PhysicsDemo::new(ElasticBounds::default())
    }

    #[test]
    fn test_grid_layout() {
        let d = demo();
        let view = d.snapshot();
        assert_eq!(view.positions.len(), 25);
        assert_eq!(view.positions[0], Point::new(12.0, 12.0));
        assert_eq!(view.positions[6], Point::new(60.0, 60.0));
        assert!(!view.settling);
    }

    #[test]
    fn test_nodes_move_independently() {
        let mut d = demo();
        let rest = d.node(7).unwrap().rest();
        d.handle(DemoInput::NodePress { index: 7, at: rest }).unwrap();
        d.handle(DemoInput::NodeDrag(rest + Point::new(5.0, 0.0))).unwrap();

        let view = d.snapshot();
        assert_eq!(view.held, Some(7));
        assert_eq!(view.positions[7], rest + Point::new(5.0, 0.0));
        for (i, p) in view.positions.iter().enumerate() {
            if i != 7 {
                assert_eq!(*p, d.node(i).unwrap().rest());
            }
        }
    }

    #[test]
    fn test_drag_is_bounded() {
        let mut d = demo();
        let rest = d.node(0).unwrap().rest();
        d.handle(DemoInput::NodePress { index: 0, at: rest }).unwrap();
        d.handle(DemoInput::NodeDrag(rest + Point::new(300.0, 0.0))).unwrap();
        assert!((d.node(0).unwrap().offset().x - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_release_and_frames_return_to_rest() {
        let mut d = demo();
        let rest = d.node(12).unwrap().rest();
        d.handle(DemoInput::NodePress { index: 12, at: rest }).unwrap();
        d.handle(DemoInput::NodeDrag(rest + Point::new(-8.0, 8.0))).unwrap();
        d.handle(DemoInput::NodeRelease).unwrap();
        assert!(d.snapshot().settling);

        for _ in 0..100 {
            d.handle(DemoInput::Frame).unwrap();
        }
        let view = d.snapshot();
        assert!(!view.settling);
        assert_eq!(view.positions[12], rest);
    }

    #[test]
    fn test_out_of_range_press_ignored() {
        let mut d = demo();
        d.handle(DemoInput::NodePress {
            index: 99,
            at: Point::ORIGIN,
        })
        .unwrap();
        assert_eq!(d.snapshot().held, None);
    }

    #[test]
    fn test_teardown_releases() {
        let mut d = demo();
        d.handle(DemoInput::NodePress {
            index: 3,
            at: Point::ORIGIN,
        })
        .unwrap();
        d.teardown();
        assert_eq!(d.snapshot().held, None);
        assert!(!d.node(3).unwrap().is_dragging());
    }

    proptest! {
        #[test]
        fn prop_nodes_stay_near_rest(
            index in 0usize..25,
            dx in -500.0f64..500.0,
            dy in -500.0f64..500.0,
        ) {
            let mut d = demo();
            let rest = d.node(index).map(|n| n.rest()).unwrap_or_default();
            d.handle(DemoInput::NodePress { index, at: rest }).unwrap();
            d.handle(DemoInput::NodeDrag(rest + Point::new(dx, dy))).unwrap();

            let max = ElasticBounds::default().max_offset() + 1e-9;
            for (i, p) in d.snapshot().positions.iter().enumerate() {
                let rest = d.node(i).map(|n| n.rest()).unwrap_or_default();
                let off = *p - rest;
                prop_assert!(off.x.abs() <= max && off.y.abs() <= max);
            }
        }
    }
}
