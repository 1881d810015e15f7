//! casegraph - layout and SVG rendering for investigation graphs
//!
//! This library turns the relationship networks and mindmaps produced by a
//! case-management backend into positioned layouts and renders them to SVG.
//! Networks are laid out with a force-directed simulation (or a static
//! circle placement); mindmaps use a hierarchical left-to-right layout.

mod color;
pub mod config;
mod error;
mod export;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod model;

use std::fs;

use clap::{Parser, ValueEnum};
use log::{debug, info, trace};

pub use error::CasegraphError;

use config::AppConfig;
use export::Exporter;

/// The kind of document contained in the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiagramKind {
    /// A flat node/edge relationship network
    Network,
    /// A hierarchical investigation mindmap
    Mindmap,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Path to the input JSON file
    #[arg(help = "Path to the input JSON file")]
    pub file: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Kind of diagram contained in the input file
    #[arg(long, value_enum, default_value_t = DiagramKind::Network)]
    pub diagram: DiagramKind,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

pub fn run(cfg: &Config) -> Result<(), CasegraphError> {
    info!(
        input_path = cfg.file,
        output_path = cfg.output;
        "Processing graph",
    );

    let app_config = match &cfg.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Reading input file
    let content = fs::read_to_string(&cfg.file)?;
    trace!(content; "File content");

    let svg_exporter = export::svg::Svg::new(&cfg.output);

    match cfg.diagram {
        DiagramKind::Network => {
            info!("Parsing network graph");
            let network: model::NetworkGraph = serde_json::from_str(&content)?;
            debug!(
                nodes_count = network.nodes.len(),
                edges_count = network.edges.len();
                "Parsed network graph",
            );

            let graph = graph::Graph::from_network(&network);

            info!(engine:? = app_config.layout.engine; "Calculating network layout");
            let mut engine_builder = layout::EngineBuilder::new()
                .with_iterations(app_config.layout.iterations)
                .with_cooling_factor(app_config.layout.cooling_factor);
            let engine = engine_builder.network_engine(app_config.layout.engine);
            let layout = engine.calculate(&graph);
            debug!(
                nodes_len = layout.nodes().len(),
                relations_len = layout.relations().len();
                "Layout calculated",
            );

            info!("Exporting network diagram to SVG");
            svg_exporter.export_network_layout(&layout)?;
        }
        DiagramKind::Mindmap => {
            info!("Parsing mindmap");
            let data: model::MindmapData = serde_json::from_str(&content)?;

            info!("Calculating mindmap layout");
            let engine = layout::mindmap::Engine::new();
            let layout = engine.calculate(&data.root);
            debug!(items_len = layout.items().len(); "Layout calculated");

            info!("Exporting mindmap diagram to SVG");
            svg_exporter.export_mindmap_layout(&layout)?;
        }
    }

    info!(output_file = cfg.output; "SVG exported successfully");

    Ok(())
}
