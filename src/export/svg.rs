use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::Document;

use crate::{
    export,
    geometry::{Bounds, Point},
};

// Whitespace around the rendered content.
const MARGIN: f32 = 50.0;

/// Base SVG exporter structure with common properties and methods
pub struct Svg {
    pub file_name: String,
}

impl Svg {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
        }
    }

    /// Create a straight path data string from two points
    pub fn create_path_data_from_points(&self, start: Point, end: Point) -> String {
        format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
    }

    /// Create an orthogonal path data string from two points
    /// Creates a path with only horizontal and vertical line segments
    pub fn create_orthogonal_path_data_from_points(&self, start: Point, end: Point) -> String {
        let delta = end.sub_point(start);

        // If we're more horizontal than vertical, go horizontal first
        if delta.x().abs() > delta.y().abs() {
            let mid_x = start.x() + delta.x() * 0.5;
            format!(
                "M {} {} L {} {} L {} {} L {} {}",
                start.x(),
                start.y(),
                mid_x,
                start.y(),
                mid_x,
                end.y(),
                end.x(),
                end.y()
            )
        } else {
            let mid_y = start.y() + delta.y() * 0.5;
            format!(
                "M {} {} L {} {} L {} {} L {} {}",
                start.x(),
                start.y(),
                start.x(),
                mid_y,
                end.x(),
                mid_y,
                end.x(),
                end.y()
            )
        }
    }

    /// Create an SVG document sized for the given content bounds
    /// Adds a uniform margin around the content
    pub fn document_for_bounds(&self, content_bounds: Bounds) -> Document {
        let bounds = content_bounds.expand(MARGIN);
        debug!(
            width = bounds.width(),
            height = bounds.height();
            "Final SVG dimensions"
        );

        Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    bounds.min_x(),
                    bounds.min_y(),
                    bounds.width(),
                    bounds.height()
                ),
            )
            .set("width", bounds.width())
            .set("height", bounds.height())
    }

    /// Writes an SVG document to the specified file
    pub fn write_document(&self, doc: Document) -> Result<(), export::Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{doc}") {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

mod mindmap;
mod network;

// Single implementation of Exporter trait that delegates to specialized methods
impl export::Exporter for Svg {
    fn export_network_layout(
        &self,
        layout: &crate::layout::network::Layout,
    ) -> Result<(), export::Error> {
        let doc = self.render_network_diagram(layout);
        debug!("SVG document rendered");

        self.write_document(doc)
    }

    fn export_mindmap_layout(
        &self,
        layout: &crate::layout::mindmap::Layout,
    ) -> Result<(), export::Error> {
        let doc = self.render_mindmap_diagram(layout);
        debug!("SVG document rendered");

        self.write_document(doc)
    }
}
