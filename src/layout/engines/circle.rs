//! Static circle layout engine
//!
//! Places nodes evenly on a fixed circle in input order. This is the
//! placement the network view used before force simulation existed; it is
//! kept as a cheap, instant alternative for small graphs.

use std::f32::consts::PI;

use log::debug;

use crate::{
    geometry::Point,
    graph::Graph,
    layout::{
        engines::NetworkEngine,
        network::{Layout, LayoutRelation, PositionedNode},
    },
};

const CENTER: f32 = 200.0;
const RADIUS: f32 = 300.0;

/// Circle layout engine for relationship networks.
pub struct Engine {
    center: Point,
    radius: f32,
}

impl Engine {
    /// Create a new circle layout engine with default geometry
    pub fn new() -> Self {
        Self {
            center: Point::new(CENTER, CENTER),
            radius: RADIUS,
        }
    }

    fn position_for(&self, index: usize, node_count: usize) -> Point {
        let angle = 2.0 * PI * index as f32 / node_count as f32;
        self.center
            .add_point(Point::new(angle.cos(), angle.sin()).scale(self.radius))
    }
}

impl NetworkEngine for Engine {
    fn calculate<'a>(&self, graph: &Graph<'a>) -> Layout<'a> {
        let node_count = graph.node_count();
        debug!(nodes_count = node_count; "Placing nodes on circle");

        let nodes: Vec<PositionedNode<'a>> = graph
            .nodes()
            .enumerate()
            .map(|(i, node)| PositionedNode::new(node, self.position_for(i, node_count)))
            .collect();

        let relations: Vec<LayoutRelation<'a>> = graph
            .edges_with_endpoints()
            .map(|(source, target, edge)| LayoutRelation::new(edge, source, target))
            .collect();

        Layout::new(nodes, relations)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::model;

    fn network(ids: &[&str]) -> model::NetworkGraph {
        model::NetworkGraph {
            nodes: ids
                .iter()
                .map(|id| model::Node {
                    id: id.to_string(),
                    label: id.to_string(),
                    node_type: "Entity".to_string(),
                    properties: Default::default(),
                    risk_score: None,
                })
                .collect(),
            edges: vec![],
        }
    }

    #[test]
    fn test_empty_graph() {
        let network = network(&[]);
        let graph = Graph::from_network(&network);
        let layout = Engine::new().calculate(&graph);
        assert!(layout.is_empty());
    }

    #[test]
    fn test_single_node_sits_on_circle() {
        let network = network(&["a"]);
        let graph = Graph::from_network(&network);
        let layout = Engine::new().calculate(&graph);

        let position = layout.position_of("a").unwrap();
        assert_approx_eq!(f32, position.x(), 500.0);
        assert_approx_eq!(f32, position.y(), 200.0);
    }

    #[test]
    fn test_four_nodes_at_quadrants() {
        let network = network(&["a", "b", "c", "d"]);
        let graph = Graph::from_network(&network);
        let layout = Engine::new().calculate(&graph);

        let center = Point::new(200.0, 200.0);
        for positioned in layout.nodes() {
            let offset = positioned.position().sub_point(center);
            assert_approx_eq!(f32, offset.hypot(), 300.0, epsilon = 0.001);
        }

        // Quarter turns in input order.
        let b = layout.position_of("b").unwrap();
        assert_approx_eq!(f32, b.x(), 200.0, epsilon = 0.001);
        assert_approx_eq!(f32, b.y(), 500.0, epsilon = 0.001);
    }
}
