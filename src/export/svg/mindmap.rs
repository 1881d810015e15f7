use svg::{
    Document,
    node::element::{Group, Path, Rectangle, Text},
};

use super::Svg;
use crate::{
    color,
    geometry::Bounds,
    layout::mindmap::{Item, Layout},
};

impl Svg {
    fn render_mindmap_node(&self, item: &Item<'_>) -> Group {
        let position = item.position();
        let size = item.size();
        let is_root = item.level() == 0;

        let rect = Rectangle::new()
            .set("x", position.x() - size.width() / 2.0)
            .set("y", position.y() - size.height() / 2.0)
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", if is_root { 16.0 } else { 12.0 })
            .set("fill", &color::level_color(item.level()));

        let text = Text::new(item.node().label.as_str())
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", "Arial")
            .set("font-size", if is_root { 14 } else { 12 })
            .set("font-weight", if is_root { 700 } else { 500 })
            .set("fill", "#fff");

        Group::new().add(rect).add(text)
    }

    fn render_mindmap_link(&self, layout: &Layout<'_>, parent: usize, child: usize) -> Path {
        let parent_item = &layout.items()[parent];
        let child_item = &layout.items()[child];

        Path::new()
            .set(
                "d",
                self.create_orthogonal_path_data_from_points(
                    parent_item.position(),
                    child_item.position(),
                ),
            )
            .set("stroke", &color::edge_color())
            .set("stroke-width", if parent_item.level() == 0 { 3.0 } else { 2.0 })
            .set("fill", "none")
    }

    fn calculate_mindmap_bounds(&self, layout: &Layout<'_>) -> Bounds {
        layout
            .items()
            .iter()
            .map(|item| item.position().to_bounds(item.size()))
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default()
    }

    pub(super) fn render_mindmap_diagram(&self, layout: &Layout<'_>) -> Document {
        let content_bounds = self.calculate_mindmap_bounds(layout);
        let mut doc = self.document_for_bounds(content_bounds);

        // Links first so node boxes are drawn over the connectors.
        for &(parent, child) in layout.links() {
            doc = doc.add(self.render_mindmap_link(layout, parent, child));
        }
        for item in layout.items() {
            doc = doc.add(self.render_mindmap_node(item));
        }

        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{layout::mindmap, model};

    #[test]
    fn test_render_mindmap_document() {
        let data: model::MindmapData = serde_json::from_str(
            r#"{
                "root": {
                    "id": "m0",
                    "label": "Investigation",
                    "children": [
                        {"id": "m1", "label": "Suspects"},
                        {"id": "m2", "label": "Timeline"}
                    ]
                }
            }"#,
        )
        .unwrap();

        let layout = mindmap::Engine::new().calculate(&data.root);
        let svg = Svg::new("unused.svg");
        let rendered = svg.render_mindmap_diagram(&layout).to_string();

        assert!(rendered.contains("Investigation"));
        assert!(rendered.contains("Suspects"));
        assert!(rendered.contains("Timeline"));
        // Two parent-child connectors.
        assert_eq!(rendered.matches("<path").count(), 2);
    }
}
