//! Layout engine factory module
//!
//! This module provides a system for selecting and using different network
//! layout engines based on configuration. Each engine maps the same
//! node/edge set to 2D coordinates with a different placement strategy.
//!
//! The module uses a builder pattern for creating and configuring layout engines.

mod circle;
mod force;

use std::collections::HashMap;

use serde::Deserialize;

use crate::{graph::Graph, layout::network};

/// Trait defining the interface for network layout engines.
///
/// An engine computes one position per input node (isolated nodes
/// included) from its own local state; inputs are never mutated and no
/// state is held between invocations.
pub trait NetworkEngine {
    /// Calculate a layout for a relationship network.
    fn calculate<'a>(&self, graph: &Graph<'a>) -> network::Layout<'a>;
}

/// Available layout engines controlling automatic positioning for networks.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutEngine {
    /// Force-directed layout (default)
    #[default]
    Force,
    /// Static evenly-spaced circle placement
    Circle,
}

/// Builder for creating and configuring layout engines.
pub struct EngineBuilder {
    // Cache for reusing engines with the same configuration
    network_engines: HashMap<LayoutEngine, Box<dyn NetworkEngine>>,

    // Configuration options
    force_iterations: usize,
    cooling_factor: f32,
}

impl EngineBuilder {
    /// Create a new engine builder with default engine cache and configuration
    pub fn new() -> Self {
        Self {
            network_engines: HashMap::new(),
            force_iterations: 100,
            cooling_factor: 0.1,
        }
    }

    /// Set the number of iterations for the force simulation
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.force_iterations = iterations;
        self
    }

    /// Set the cooling factor for the force simulation
    pub fn with_cooling_factor(mut self, factor: f32) -> Self {
        self.cooling_factor = factor;
        self
    }

    /// Get a network engine of the specified type with configured options
    pub fn network_engine(&mut self, engine_type: LayoutEngine) -> &dyn NetworkEngine {
        let engine = self.network_engines.entry(engine_type).or_insert_with(|| {
            let engine: Box<dyn NetworkEngine> = match engine_type {
                LayoutEngine::Force => {
                    let mut e = force::Engine::new();
                    e.set_iterations(self.force_iterations);
                    e.set_cooling_factor(self.cooling_factor);
                    Box::new(e)
                }
                LayoutEngine::Circle => Box::new(circle::Engine::new()),
            };
            engine
        });
        // Dereference to avoid returning reference to temporary
        &**engine
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model;

    #[test]
    fn test_builder_dispatches_engines() {
        let network = model::NetworkGraph {
            nodes: vec![model::Node {
                id: "a".into(),
                label: "A".into(),
                node_type: "Case".into(),
                properties: Default::default(),
                risk_score: None,
            }],
            edges: vec![],
        };
        let graph = Graph::from_network(&network);

        let mut builder = EngineBuilder::new().with_iterations(10);
        let force_layout = builder.network_engine(LayoutEngine::Force).calculate(&graph);
        let circle_layout = builder
            .network_engine(LayoutEngine::Circle)
            .calculate(&graph);

        assert_eq!(force_layout.nodes().len(), 1);
        assert_eq!(circle_layout.nodes().len(), 1);
        // A single node lands on different fixed positions per engine.
        assert_ne!(
            force_layout.position_of("a"),
            circle_layout.position_of("a")
        );
    }

    #[test]
    fn test_layout_engine_config_names() {
        #[derive(Deserialize)]
        struct Probe {
            engine: LayoutEngine,
        }

        let probe: Probe = toml::from_str("engine = \"circle\"").unwrap();
        assert_eq!(probe.engine, LayoutEngine::Circle);

        let probe: Probe = toml::from_str("engine = \"force\"").unwrap();
        assert_eq!(probe.engine, LayoutEngine::Force);
    }
}
