mod engines;
pub mod mindmap;
pub mod network;

// Public re-export of the engine builder for easier access
pub use engines::{EngineBuilder, LayoutEngine, NetworkEngine};
