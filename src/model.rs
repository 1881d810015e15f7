//! Input model for investigation graphs.
//!
//! These types mirror the wire shapes produced by the case-management
//! backend: a flat node/edge list for the relationship network, and a
//! nested tree for the investigation mindmap.

use std::collections::HashMap;

use serde::Deserialize;

/// A vertex in the relationship network: a case, an evidence item, or an
/// extracted entity.
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    /// Identifier, unique within a graph.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Type tag, used only for styling, never for layout.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Optional key/value properties attached by the entity extractor.
    #[serde(default)]
    pub properties: HashMap<String, String>,
    /// Optional risk score in `0.0..=1.0` assigned by the backend scorer.
    #[serde(default)]
    pub risk_score: Option<f32>,
}

impl Node {
    /// The tag that determines this node's color.
    ///
    /// Entity nodes carry their concrete kind (PERSON, ORG, ...) in the
    /// `type` property; all other nodes are colored by their node type.
    pub fn display_kind(&self) -> &str {
        if self.node_type == "Entity" {
            if let Some(kind) = self.properties.get("type") {
                return kind;
            }
        }
        &self.node_type
    }
}

/// A relationship between two nodes.
///
/// Stored with a source/target direction but treated as undirected by the
/// layout engines (forces apply symmetrically).
#[derive(Debug, Clone, Deserialize)]
pub struct Edge {
    pub id: String,
    /// Identifier of the source node.
    pub source: String,
    /// Identifier of the target node.
    pub target: String,
    /// Display label drawn at the edge midpoint.
    pub label: String,
    /// Optional relationship weight; affects stroke width only.
    #[serde(default)]
    pub weight: Option<f32>,
}

/// A complete relationship network as served by the graph endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkGraph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// A node in the hierarchical investigation mindmap.
#[derive(Debug, Clone, Deserialize)]
pub struct MindmapNode {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub children: Vec<MindmapNode>,
}

/// A mindmap document with a single root.
#[derive(Debug, Clone, Deserialize)]
pub struct MindmapData {
    pub root: MindmapNode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network_graph() {
        let json = r#"{
            "nodes": [
                {"id": "c1", "label": "Case 42", "type": "Case"},
                {
                    "id": "e1",
                    "label": "Alice",
                    "type": "Entity",
                    "properties": {"type": "PERSON"},
                    "risk_score": 0.85
                }
            ],
            "edges": [
                {"id": "r1", "source": "c1", "target": "e1", "label": "mentions", "weight": 2.5}
            ]
        }"#;

        let graph: NetworkGraph = serde_json::from_str(json).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.nodes[1].risk_score, Some(0.85));
        assert_eq!(graph.edges[0].weight, Some(2.5));
    }

    #[test]
    fn test_parse_empty_document() {
        let graph: NetworkGraph = serde_json::from_str("{}").unwrap();
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_display_kind_prefers_entity_property() {
        let entity = Node {
            id: "e1".into(),
            label: "Alice".into(),
            node_type: "Entity".into(),
            properties: HashMap::from([("type".to_string(), "PERSON".to_string())]),
            risk_score: None,
        };
        assert_eq!(entity.display_kind(), "PERSON");

        let case = Node {
            id: "c1".into(),
            label: "Case 42".into(),
            node_type: "Case".into(),
            properties: HashMap::new(),
            risk_score: None,
        };
        assert_eq!(case.display_kind(), "Case");
    }

    #[test]
    fn test_parse_mindmap() {
        let json = r#"{
            "root": {
                "id": "m0",
                "label": "Investigation",
                "children": [
                    {"id": "m1", "label": "Suspects"},
                    {"id": "m2", "label": "Timeline", "children": [
                        {"id": "m3", "label": "Day 1"}
                    ]}
                ]
            }
        }"#;

        let data: MindmapData = serde_json::from_str(json).unwrap();
        assert_eq!(data.root.children.len(), 2);
        assert_eq!(data.root.children[1].children[0].label, "Day 1");
    }
}
