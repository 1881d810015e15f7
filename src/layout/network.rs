//! Positioned layout for relationship networks.
//!
//! A [`Layout`] is the output of a network layout engine: one position per
//! input node (isolated nodes included), plus the resolvable relations with
//! their endpoints expressed as indices into the node list. Positions are
//! produced once per invocation and consumed read-only by the exporter.

use crate::{geometry::Point, model};

/// A node with its computed position.
#[derive(Debug)]
pub struct PositionedNode<'a> {
    node: &'a model::Node,
    position: Point,
}

impl<'a> PositionedNode<'a> {
    pub(crate) fn new(node: &'a model::Node, position: Point) -> Self {
        Self { node, position }
    }

    pub fn node(&self) -> &'a model::Node {
        self.node
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// A relation between two positioned nodes.
///
/// `source` and `target` index into [`Layout::nodes`].
#[derive(Debug)]
pub struct LayoutRelation<'a> {
    edge: &'a model::Edge,
    source: usize,
    target: usize,
}

impl<'a> LayoutRelation<'a> {
    pub(crate) fn new(edge: &'a model::Edge, source: usize, target: usize) -> Self {
        Self {
            edge,
            source,
            target,
        }
    }

    pub fn edge(&self) -> &'a model::Edge {
        self.edge
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }
}

/// The result of laying out a relationship network.
#[derive(Debug, Default)]
pub struct Layout<'a> {
    nodes: Vec<PositionedNode<'a>>,
    relations: Vec<LayoutRelation<'a>>,
}

impl<'a> Layout<'a> {
    pub(crate) fn new(nodes: Vec<PositionedNode<'a>>, relations: Vec<LayoutRelation<'a>>) -> Self {
        Self { nodes, relations }
    }

    pub fn nodes(&self) -> &[PositionedNode<'a>] {
        &self.nodes
    }

    pub fn relations(&self) -> &[LayoutRelation<'a>] {
        &self.relations
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up the computed position for a node identifier.
    pub fn position_of(&self, id: &str) -> Option<Point> {
        self.nodes
            .iter()
            .find(|positioned| positioned.node().id == id)
            .map(PositionedNode::position)
    }
}
