//! Force-directed network layout engine
//!
//! Iterative relaxation over a system of pairwise repulsive forces and
//! per-edge attractive forces, with a linearly decaying temperature capping
//! per-iteration displacement. Deterministic given input order: positions
//! and force accumulators are indexed by node insertion order, so repeated
//! invocations on the same input produce bit-identical results.

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

// Initial ring radius: max(MIN_RING_RADIUS, node_count * RING_RADIUS_PER_NODE).
const MIN_RING_RADIUS: f32 = 400.0;
const RING_RADIUS_PER_NODE: f32 = 50.0;

// Any pair closer than this is treated as being exactly this far apart.
// A floor rather than an epsilon: coincident nodes must yield a finite,
// reproducible force, and layouts depend on the exact value.
const MIN_DISTANCE: f32 = 1.0;

// Displacement cap is temperature * DISPLACEMENT_SCALE.
const DISPLACEMENT_SCALE: f32 = 50.0;

/// Force-directed layout engine for relationship networks.
///
/// Densely connected nodes cluster, unconnected nodes spread apart. The
/// simulation is O(n²) per iteration and intended for the tens-to-hundreds
/// of nodes a case graph holds, not for large-graph scale.
pub struct Engine {
    iterations: usize,
    cooling_factor: f32,
}

impl Engine {
    /// Create a new force layout engine with default parameters
    pub fn new() -> Self {
        Self {
            iterations: 100,
            cooling_factor: 0.1,
        }
    }

    /// Set the number of iterations for the force simulation
    pub fn set_iterations(&mut self, iterations: usize) -> &mut Self {
        self.iterations = iterations;
        self
    }

    /// Set the cooling factor controlling per-iteration displacement decay
    pub fn set_cooling_factor(&mut self, factor: f32) -> &mut Self {
        self.cooling_factor = factor;
        self
    }

    fn ring_radius(node_count: usize) -> f32 {
        (node_count as f32 * RING_RADIUS_PER_NODE).max(MIN_RING_RADIUS)
    }

    /// Place nodes evenly on a circle of radius `r` centered at `(r, r)`,
    /// in input order. Spreads coincident starting positions apart and
    /// scales with graph size so initial repulsion stays bounded.
    fn initial_positions(node_count: usize) -> Vec<Point> {
        let radius = Self::ring_radius(node_count);
        (0..node_count)
            .map(|i| {
                let angle = 2.0 * PI * i as f32 / node_count as f32;
                Point::new(
                    radius + radius * angle.cos(),
                    radius + radius * angle.sin(),
                )
            })
            .collect()
    }

    /// Run the force simulation and return final positions in node input order.
    fn run_simulation(&self, graph: &Graph<'_>) -> Vec<Point> {
        let node_count = graph.node_count();
        let mut positions = Self::initial_positions(node_count);
        if node_count == 0 {
            return positions;
        }

        // Ideal edge length: uniform density over the bounding square of the
        // initial ring. Constant across iterations.
        let area_side = 2.0 * Self::ring_radius(node_count);
        let ideal_length = (area_side * area_side / node_count as f32).sqrt();

        for iteration in 0..self.iterations {
            let mut forces = vec![Point::default(); node_count];

            // Repulsive force between every unordered pair of distinct nodes
            for i in 0..node_count {
                for j in (i + 1)..node_count {
                    let delta = positions[i].sub_point(positions[j]);
                    let distance = delta.hypot().max(MIN_DISTANCE);
                    let magnitude = ideal_length * ideal_length / distance;

                    let push = delta.scale(magnitude / distance);
                    forces[i] = forces[i].add_point(push);
                    forces[j] = forces[j].sub_point(push);
                }
            }

            // Attractive force along every edge. Self-loops run through the
            // same math: the zero delta is floored to MIN_DISTANCE and the
            // pull cancels against itself on the shared accumulator.
            for (source, target, _) in graph.edges_with_endpoints() {
                let delta = positions[target].sub_point(positions[source]);
                let distance = delta.hypot().max(MIN_DISTANCE);
                let magnitude = distance * distance / ideal_length;

                let pull = delta.scale(magnitude / distance);
                forces[source] = forces[source].add_point(pull);
                forces[target] = forces[target].sub_point(pull);
            }

            // Position update with cooling: displacement per iteration is
            // capped by a temperature that decays linearly to zero.
            let temperature =
                self.cooling_factor * (1.0 - iteration as f32 / self.iterations as f32);
            for i in 0..node_count {
                let displacement = forces[i].hypot().max(MIN_DISTANCE);
                let step = displacement.min(temperature * DISPLACEMENT_SCALE);
                positions[i] = positions[i].add_point(forces[i].scale(step / displacement));
            }
        }

        positions
    }
}

impl NetworkEngine for Engine {
    fn calculate<'a>(&self, graph: &Graph<'a>) -> Layout<'a> {
        debug!(
            nodes_count = graph.node_count(),
            edges_count = graph.edge_count(),
            iterations = self.iterations;
            "Running force simulation"
        );

        let positions = self.run_simulation(graph);

        let nodes: Vec<PositionedNode<'a>> = graph
            .nodes()
            .zip(positions)
            .map(|(node, position)| PositionedNode::new(node, position))
            .collect();

        let relations: Vec<LayoutRelation<'a>> = graph
            .edges_with_endpoints()
            .map(|(source, target, edge)| LayoutRelation::new(edge, source, target))
            .collect();

        Layout::new(nodes, relations)
    }
}
