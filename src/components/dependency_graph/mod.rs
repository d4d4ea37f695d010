//! Interactive dependency graph: data model, force layout, rendering and input handling.

mod component;
mod gesture;
mod render;
mod sample;
mod simulation;
mod state;
mod stats;
mod style;
mod types;

pub use component::DependencyGraph;
pub use gesture::PointerTracker;
pub use render::{EdgeShape, LabelShape, NodeShape, Scene, build_scene};
pub use sample::showcase_graph;
pub use simulation::{ForceConfig, SimNodeSpec, Simulation};
pub use state::{
	GraphEvent, GraphView, MAX_ZOOM, MIN_ZOOM, NodeIndex, Selection, SimulationStatus, Tooltip,
	ViewTransform,
};
pub use stats::GraphStats;
pub use style::{Glow, LabelConfig, fill_color, glow, node_radius, stroke_color};
pub use types::{GraphData, GraphEdge, GraphNode, NodeState, NodeType, Point};
