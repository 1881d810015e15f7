//! Hierarchical mindmap layout
//!
//! Lays out an investigation mindmap left to right: each level is a fixed
//! horizontal step from its parent, and siblings are stacked vertically,
//! centered on the parent. Sibling spacing widens for crowded nodes so
//! large fan-outs do not overlap.

use log::debug;

use crate::{
    geometry::{Point, Size},
    model,
};

const HORIZONTAL_SPACING: f32 = 280.0;
const VERTICAL_SPACING: f32 = 120.0;
// Extra vertical room per child once a node has more than this many children.
const CROWDED_CHILD_COUNT: usize = 5;
const CROWDED_EXTRA_PER_CHILD: f32 = 5.0;

/// A mindmap node with its computed position, depth and box size.
#[derive(Debug)]
pub struct Item<'a> {
    node: &'a model::MindmapNode,
    position: Point,
    level: usize,
    size: Size,
}

impl<'a> Item<'a> {
    pub fn node(&self) -> &'a model::MindmapNode {
        self.node
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// The result of laying out a mindmap.
///
/// `links` are (parent, child) index pairs into [`Layout::items`].
#[derive(Debug, Default)]
pub struct Layout<'a> {
    items: Vec<Item<'a>>,
    links: Vec<(usize, usize)>,
}

impl<'a> Layout<'a> {
    pub fn items(&self) -> &[Item<'a>] {
        &self.items
    }

    pub fn links(&self) -> &[(usize, usize)] {
        &self.links
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up the computed position for a node identifier.
    pub fn position_of(&self, id: &str) -> Option<Point> {
        self.items
            .iter()
            .find(|item| item.node().id == id)
            .map(Item::position)
    }
}

/// Hierarchical layout engine for mindmaps.
pub struct Engine {
    horizontal_spacing: f32,
    vertical_spacing: f32,
}

impl Engine {
    /// Create a new mindmap layout engine with default spacing
    pub fn new() -> Self {
        Self {
            horizontal_spacing: HORIZONTAL_SPACING,
            vertical_spacing: VERTICAL_SPACING,
        }
    }

    /// Set the horizontal distance between levels
    pub fn set_horizontal_spacing(&mut self, spacing: f32) -> &mut Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set the base vertical distance between siblings
    pub fn set_vertical_spacing(&mut self, spacing: f32) -> &mut Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Lay out the tree rooted at `root`, anchored at x = 100.
    pub fn calculate<'a>(&self, root: &'a model::MindmapNode) -> Layout<'a> {
        let mut layout = Layout::default();
        self.place(root, Point::new(100.0, 0.0), 0, &mut layout);
        debug!(items_count = layout.items.len(); "Mindmap layout calculated");
        layout
    }

    fn place<'a>(
        &self,
        node: &'a model::MindmapNode,
        position: Point,
        level: usize,
        out: &mut Layout<'a>,
    ) -> usize {
        let index = out.items.len();
        out.items.push(Item {
            node,
            position,
            level,
            size: node_box_size(&node.label, level),
        });

        let child_count = node.children.len();
        if child_count > 0 {
            let spacing = if child_count > CROWDED_CHILD_COUNT {
                self.vertical_spacing + child_count as f32 * CROWDED_EXTRA_PER_CHILD
            } else {
                self.vertical_spacing
            };

            let total_height = (child_count - 1) as f32 * spacing;
            let start_y = position.y() - total_height / 2.0;

            for (i, child) in node.children.iter().enumerate() {
                let child_position = Point::new(
                    position.x() + self.horizontal_spacing,
                    start_y + i as f32 * spacing,
                );
                let child_index = self.place(child, child_position, level + 1, out);
                out.links.push((index, child_index));
            }
        }

        index
    }
}

/// Box size for a mindmap node: wider for long labels, larger at the root.
fn node_box_size(label: &str, level: usize) -> Size {
    let base_width: f32 = if level == 0 { 140.0 } else { 100.0 };
    let label_length = if label.is_empty() {
        10
    } else {
        label.chars().count()
    };
    let width = base_width.max(label_length as f32 * 8.0);
    let height = if level == 0 { 60.0 } else { 50.0 };
    Size::new(width, height)
}
