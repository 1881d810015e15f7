use std::collections::HashMap;

use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::model;

/// Graph representation of a relationship network.
///
/// Wraps a petgraph [`DiGraph`] over borrowed model nodes and edges, with a
/// map from node identifiers to graph indices. Node indices follow input
/// order, which the layout engines rely on for deterministic placement.
///
/// Edges whose source or target identifier does not resolve to a known node
/// are dropped during construction. They contribute nothing to the layout;
/// this is policy, not an error.
#[derive(Debug)]
pub struct Graph<'a> {
    graph: DiGraph<&'a model::Node, &'a model::Edge>,
    node_id_map: HashMap<&'a str, NodeIndex>,
}

impl<'a> Graph<'a> {
    /// Builds the graph from a parsed network document.
    pub fn from_network(network: &'a model::NetworkGraph) -> Self {
        let mut graph = DiGraph::new();
        let mut node_id_map = HashMap::new();

        for node in &network.nodes {
            let node_idx = graph.add_node(node);
            node_id_map.insert(node.id.as_str(), node_idx);
        }

        for edge in &network.edges {
            if let (Some(&source_idx), Some(&target_idx)) = (
                node_id_map.get(edge.source.as_str()),
                node_id_map.get(edge.target.as_str()),
            ) {
                graph.add_edge(source_idx, target_idx, edge);
            } else {
                debug!(
                    edge_id = edge.id,
                    source = edge.source,
                    target = edge.target;
                    "Skipping edge with unknown endpoint"
                );
            }
        }

        Self { graph, node_id_map }
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges that resolved to known endpoints.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Looks up a node's graph index by identifier.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_id_map.get(id).copied()
    }

    /// Returns nodes in input order.
    pub fn nodes(&self) -> impl Iterator<Item = &'a model::Node> + '_ {
        self.graph
            .node_indices()
            .map(|idx| *self.graph.node_weight(idx).expect("Node index should exist"))
    }

    /// Returns edges with their endpoint positions in input order.
    ///
    /// Endpoint positions are zero-based node insertion indices, matching
    /// the order of [`Graph::nodes`].
    pub fn edges_with_endpoints(
        &self,
    ) -> impl Iterator<Item = (usize, usize, &'a model::Edge)> + '_ {
        self.graph.edge_indices().map(|idx| {
            let (source, target) = self
                .graph
                .edge_endpoints(idx)
                .expect("Edge index should exist");
            let edge = *self.graph.edge_weight(idx).expect("Edge index should exist");
            (source.index(), target.index(), edge)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> model::Node {
        model::Node {
            id: id.to_string(),
            label: id.to_uppercase(),
            node_type: "Entity".to_string(),
            properties: HashMap::new(),
            risk_score: None,
        }
    }

    fn edge(id: &str, source: &str, target: &str) -> model::Edge {
        model::Edge {
            id: id.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            label: String::new(),
            weight: None,
        }
    }

    #[test]
    fn test_build_preserves_input_order() {
        let network = model::NetworkGraph {
            nodes: vec![node("a"), node("b"), node("c")],
            edges: vec![edge("e1", "a", "b")],
        };
        let graph = Graph::from_network(&network);

        let ids: Vec<&str> = graph.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(graph.node_index("b").map(|idx| idx.index()), Some(1));
    }

    #[test]
    fn test_unknown_endpoints_are_dropped() {
        let network = model::NetworkGraph {
            nodes: vec![node("a"), node("b")],
            edges: vec![
                edge("e1", "a", "b"),
                edge("e2", "a", "ghost"),
                edge("e3", "phantom", "b"),
            ],
        };
        let graph = Graph::from_network(&network);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let endpoints: Vec<(usize, usize)> = graph
            .edges_with_endpoints()
            .map(|(s, t, _)| (s, t))
            .collect();
        assert_eq!(endpoints, vec![(0, 1)]);
    }

    #[test]
    fn test_self_loop_is_kept() {
        let network = model::NetworkGraph {
            nodes: vec![node("a")],
            edges: vec![edge("e1", "a", "a")],
        };
        let graph = Graph::from_network(&network);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_empty_network() {
        let network = model::NetworkGraph::default();
        let graph = Graph::from_network(&network);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
