use svg::{
    Document,
    node::element::{Group, Path, Rectangle, Text},
};

use super::Svg;
use crate::{
    color,
    geometry::{Bounds, Size},
    layout::network::{Layout, LayoutRelation, PositionedNode},
};

// Risk scores at or above this get a warning border.
const RISK_THRESHOLD: f32 = 0.7;

/// Box size for a network node label.
fn node_box_size(label: &str) -> Size {
    let width = (label.chars().count() as f32 * 7.0 + 32.0).max(60.0);
    Size::new(width, 32.0)
}

fn edge_stroke_width(relation: &LayoutRelation<'_>) -> f32 {
    match relation.edge().weight {
        Some(weight) => weight.clamp(1.0, 4.0),
        None => 2.0,
    }
}

impl Svg {
    fn render_node(&self, positioned: &PositionedNode<'_>) -> Group {
        let node = positioned.node();
        let position = positioned.position();
        let size = node_box_size(&node.label);

        let fill = color::node_color(node.display_kind());
        let mut rect = Rectangle::new()
            .set("x", position.x() - size.width() / 2.0)
            .set("y", position.y() - size.height() / 2.0)
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", 12.0)
            .set("fill", &fill);

        // High-risk nodes get a warning border.
        if node.risk_score.is_some_and(|score| score >= RISK_THRESHOLD) {
            rect = rect
                .set("stroke", &color::risk_color())
                .set("stroke-width", 2.0);
        }

        let text = Text::new(node.label.as_str())
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", "Arial")
            .set("font-size", 12)
            .set("font-weight", 600)
            .set("fill", "#fff");

        Group::new().add(rect).add(text)
    }

    fn render_relation(&self, layout: &Layout<'_>, relation: &LayoutRelation<'_>) -> Group {
        let source = layout.nodes()[relation.source()].position();
        let target = layout.nodes()[relation.target()].position();

        let path = Path::new()
            .set("d", self.create_path_data_from_points(source, target))
            .set("stroke", &color::edge_color())
            .set("stroke-width", edge_stroke_width(relation))
            .set("fill", "none");

        let mut group = Group::new().add(path);

        let label = &relation.edge().label;
        if !label.is_empty() {
            let mid = source.midpoint(target);
            let text = Text::new(label.as_str())
                .set("x", mid.x())
                .set("y", mid.y() - 6.0)
                .set("text-anchor", "middle")
                .set("font-family", "Arial")
                .set("font-size", 10)
                .set("fill", &color::muted_text_color());
            group = group.add(text);
        }

        group
    }

    fn calculate_network_bounds(&self, layout: &Layout<'_>) -> Bounds {
        layout
            .nodes()
            .iter()
            .map(|positioned| {
                positioned
                    .position()
                    .to_bounds(node_box_size(&positioned.node().label))
            })
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default()
    }

    pub(super) fn render_network_diagram(&self, layout: &Layout<'_>) -> Document {
        let content_bounds = self.calculate_network_bounds(layout);
        let mut doc = self.document_for_bounds(content_bounds);

        // Edges first so node boxes are drawn over the lines.
        for relation in layout.relations() {
            doc = doc.add(self.render_relation(layout, relation));
        }
        for positioned in layout.nodes() {
            doc = doc.add(self.render_node(positioned));
        }

        doc
    }
}
