use std::fmt;

/// Kind of infrastructure entity a node stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeType {
	/// A managed resource block.
	Resource,
	/// A module call.
	Module,
	/// An input variable.
	Variable,
	/// An output value.
	Output,
	/// A data source.
	Data,
	/// A provider configuration.
	Provider,
}

impl NodeType {
	/// Every node type, in legend order.
	pub const ALL: [Self; 6] = [
		Self::Resource,
		Self::Module,
		Self::Variable,
		Self::Output,
		Self::Data,
		Self::Provider,
	];

	/// Lowercase name shown in tooltips and the legend.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Resource => "resource",
			Self::Module => "module",
			Self::Variable => "variable",
			Self::Output => "output",
			Self::Data => "data",
			Self::Provider => "provider",
		}
	}
}

impl fmt::Display for NodeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Health classification of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeState {
	/// Referenced and referencing as expected.
	Healthy,
	/// Declared but never referenced.
	Unused,
	/// Lives outside the analysed configuration.
	External,
	/// Has no outgoing dependencies.
	Leaf,
	/// Has no edges at all.
	Orphan,
	/// Flagged by validation.
	Warning,
}

impl NodeState {
	/// Every node state, in legend order.
	pub const ALL: [Self; 6] = [
		Self::Healthy,
		Self::Unused,
		Self::External,
		Self::Leaf,
		Self::Orphan,
		Self::Warning,
	];

	/// Lowercase name shown in tooltips and the legend.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Healthy => "healthy",
			Self::Unused => "unused",
			Self::External => "external",
			Self::Leaf => "leaf",
			Self::Orphan => "orphan",
			Self::Warning => "warning",
		}
	}
}

impl fmt::Display for NodeState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A graph vertex as supplied by the dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Unique identifier, referenced by edges.
	pub id: String,
	/// Display label.
	pub label: String,
	/// Entity kind.
	pub kind: NodeType,
	/// Validation state.
	pub state: NodeState,
	/// Number of nodes depending on this one.
	pub dependencies_in: u32,
	/// Number of nodes this one depends on.
	pub dependencies_out: u32,
}

impl GraphNode {
	/// Builds a node with the given identity and dependency counts.
	pub fn new(
		id: impl Into<String>,
		label: impl Into<String>,
		kind: NodeType,
		state: NodeState,
		dependencies_in: u32,
		dependencies_out: u32,
	) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			kind,
			state,
			dependencies_in,
			dependencies_out,
		}
	}

	/// Total dependency count used for sizing and charge.
	pub fn degree(&self) -> u32 {
		self.dependencies_in + self.dependencies_out
	}
}

/// A directed dependency from `source` to `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphEdge {
	/// Id of the depending node.
	pub source: String,
	/// Id of the node depended upon.
	pub target: String,
}

impl GraphEdge {
	/// Builds an edge between two node ids.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}
}

/// Complete dataset handed to the view on mount.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Vertices.
	pub nodes: Vec<GraphNode>,
	/// Directed edges; duplicates are kept.
	pub edges: Vec<GraphEdge>,
}

/// A point in screen or graph space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Builds a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}
