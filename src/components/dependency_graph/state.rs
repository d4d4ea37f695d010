use std::collections::{HashMap, HashSet};

use log::debug;

use super::simulation::{ForceConfig, SimNodeSpec, Simulation};
use super::stats::GraphStats;
use super::style::{LabelConfig, node_radius};
use super::types::{GraphData, GraphNode, NodeState, NodeType, Point};

/// Smallest zoom factor reachable by the user.
pub const MIN_ZOOM: f64 = 0.05;
/// Largest zoom factor reachable by the user.
pub const MAX_ZOOM: f64 = 8.0;
/// Extra screen-space slack around nodes for hit testing.
pub const HIT_SLACK: f64 = 4.0;

/// Opacity of nodes outside the highlight once fully faded.
pub const DIMMED_NODE_OPACITY: f64 = 0.2;
/// Opacity of edges outside the highlight once fully faded.
pub const DIMMED_EDGE_OPACITY: f64 = 0.1;
/// Resting edge opacity.
pub const EDGE_OPACITY: f64 = 0.6;

const FADE_SECONDS: f64 = 0.3;

/// Index of a node in the view's node list.
pub type NodeIndex = usize;

/// Pan and zoom applied to the whole drawing: `screen = graph * k + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	/// Horizontal translation in screen pixels.
	pub x: f64,
	/// Vertical translation in screen pixels.
	pub y: f64,
	/// Scale factor.
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	/// Maps a screen point into graph space.
	pub fn to_graph(&self, screen: Point) -> Point {
		Point::new((screen.x - self.x) / self.k, (screen.y - self.y) / self.k)
	}

	/// Maps a graph point onto the screen.
	pub fn to_screen(&self, graph: Point) -> Point {
		Point::new(graph.x * self.k + self.x, graph.y * self.k + self.y)
	}
}

/// Whether the layout is advancing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationStatus {
	/// Ticks on every frame while hot.
	Running,
	/// Frozen; positions only change through dragging.
	Stopped,
}

/// Hover card contents.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
	/// Screen position of the pointer.
	pub position: Point,
	/// Full, untruncated label.
	pub label: String,
	/// Node kind.
	pub kind: NodeType,
	/// Node state.
	pub state: NodeState,
	/// Incoming dependency count.
	pub dependencies_in: u32,
	/// Outgoing dependency count.
	pub dependencies_out: u32,
}

/// Clicked node with its one-hop neighbourhood.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	/// The clicked node, if any.
	pub node: Option<NodeIndex>,
	/// The clicked node and every node sharing an edge with it.
	pub nodes: HashSet<NodeIndex>,
	/// Indexes of edges touching the clicked node.
	pub edges: HashSet<usize>,
}

impl Selection {
	/// Whether nothing is selected.
	pub fn is_empty(&self) -> bool {
		self.node.is_none()
	}
}

/// Input understood by [`GraphView::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GraphEvent {
	/// Pointer entered or moved over a node.
	Hover {
		/// Node under the pointer.
		node: NodeIndex,
		/// Pointer in screen space.
		pointer: Point,
	},
	/// Pointer left every node.
	Unhover,
	/// A node was clicked without dragging.
	Click(NodeIndex),
	/// A node drag began.
	DragStart {
		/// Dragged node.
		node: NodeIndex,
		/// Where the node was grabbed, in screen space.
		pointer: Point,
	},
	/// A dragged node moved.
	Drag {
		/// Dragged node.
		node: NodeIndex,
		/// Pointer in screen space.
		pointer: Point,
	},
	/// A node drag ended.
	DragEnd {
		/// Dragged node.
		node: NodeIndex,
	},
	/// Background drag.
	Pan {
		/// Horizontal delta in screen pixels.
		dx: f64,
		/// Vertical delta in screen pixels.
		dy: f64,
	},
	/// Wheel zoom around a screen point.
	Zoom {
		/// Multiplicative change in scale.
		factor: f64,
		/// Screen point that stays fixed.
		anchor: Point,
	},
	/// Clear selection, reset the view and restart the layout.
	Reset,
	/// Stop or resume the layout.
	TogglePhysics,
	/// Reset pan and zoom only.
	Center,
	/// Viewport size changed.
	Resize {
		/// New width in pixels.
		width: f64,
		/// New height in pixels.
		height: f64,
	},
	/// Animation frame.
	Frame {
		/// Seconds since the previous frame.
		dt: f64,
	},
}

/// All transient state of the dependency graph view.
pub struct GraphView {
	nodes: Vec<GraphNode>,
	edges: Vec<(NodeIndex, NodeIndex)>,
	radii: Vec<f64>,
	simulation: Simulation,
	force_config: ForceConfig,
	labels: LabelConfig,
	stats: GraphStats,
	transform: ViewTransform,
	status: SimulationStatus,
	selection: Selection,
	fading_out: Option<Selection>,
	fade: f64,
	tooltip: Option<Tooltip>,
	dragging: Option<NodeIndex>,
	drag_offset: Point,
	width: f64,
	height: f64,
	disposed: bool,
}

impl GraphView {
	/// Builds a view with the default force and label settings.
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		Self::with_config(
			data,
			width,
			height,
			ForceConfig::default(),
			LabelConfig::default(),
		)
	}

	/// Builds a view with explicit settings. Edges naming unknown nodes are skipped.
	pub fn with_config(
		data: &GraphData,
		width: f64,
		height: f64,
		force_config: ForceConfig,
		labels: LabelConfig,
	) -> Self {
		let id_to_idx: HashMap<&str, NodeIndex> = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| (node.id.as_str(), i))
			.collect();

		let mut edges = Vec::with_capacity(data.edges.len());
		for edge in &data.edges {
			match (
				id_to_idx.get(edge.source.as_str()),
				id_to_idx.get(edge.target.as_str()),
			) {
				(Some(&src), Some(&tgt)) => edges.push((src, tgt)),
				_ => debug!("skipping edge {} -> {}: unknown node", edge.source, edge.target),
			}
		}

		let radii = data
			.nodes
			.iter()
			.map(|node| node_radius(node.kind, node.degree()))
			.collect::<Vec<_>>();
		let nodes = data.nodes.clone();
		let simulation = build_simulation(&nodes, &radii, &edges, force_config, width, height);
		let stats = GraphStats::compute(nodes.len(), &edges);
		debug!(
			"graph view created: {} nodes, {} edges, {} components",
			stats.nodes, stats.edges, stats.components
		);

		Self {
			nodes,
			edges,
			radii,
			simulation,
			force_config,
			labels,
			stats,
			transform: ViewTransform::default(),
			status: SimulationStatus::Running,
			selection: Selection::default(),
			fading_out: None,
			fade: 0.0,
			tooltip: None,
			dragging: None,
			drag_offset: Point::default(),
			width,
			height,
			disposed: false,
		}
	}

	/// Applies one event to the view.
	pub fn update(&mut self, event: GraphEvent) {
		if self.disposed {
			return;
		}
		match event {
			GraphEvent::Hover { node, pointer } => self.hover(node, pointer),
			GraphEvent::Unhover => self.tooltip = None,
			GraphEvent::Click(node) => self.toggle_selection(node),
			GraphEvent::DragStart { node, pointer } => self.drag_start(node, pointer),
			GraphEvent::Drag { node, pointer } => self.drag_to(node, pointer),
			GraphEvent::DragEnd { node } => self.drag_end(node),
			GraphEvent::Pan { dx, dy } => {
				self.transform.x += dx;
				self.transform.y += dy;
			}
			GraphEvent::Zoom { factor, anchor } => self.zoom(factor, anchor),
			GraphEvent::Reset => self.reset(),
			GraphEvent::TogglePhysics => self.toggle_physics(),
			GraphEvent::Center => self.transform = ViewTransform::default(),
			GraphEvent::Resize { width, height } => {
				self.width = width;
				self.height = height;
				self.simulation.set_center(Point::new(width / 2.0, height / 2.0));
				if self.status == SimulationStatus::Running {
					let pulse = self.simulation.alpha().max(self.force_config.resume_alpha);
					self.simulation.set_alpha(pulse);
				}
			}
			GraphEvent::Frame { dt } => self.frame(dt),
		}
	}

	/// Stops the layout for good; later events are ignored.
	pub fn dispose(&mut self) {
		if self.disposed {
			return;
		}
		self.disposed = true;
		self.status = SimulationStatus::Stopped;
		self.dragging = None;
		self.tooltip = None;
		debug!("graph view disposed");
	}

	/// Whether [`GraphView::dispose`] has run.
	pub fn is_disposed(&self) -> bool {
		self.disposed
	}

	/// Node under a screen point, preferring the closest centre.
	pub fn node_at(&self, screen: Point) -> Option<NodeIndex> {
		let graph = self.transform.to_graph(screen);
		let slack = HIT_SLACK / self.transform.k;
		(0..self.nodes.len())
			.filter_map(|i| {
				let distance = self.simulation.position(i)?.distance(graph);
				(distance <= self.radii[i] + slack).then_some((i, distance))
			})
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _)| i)
	}

	/// Index of the node with `id`.
	pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
		self.nodes.iter().position(|node| node.id == id)
	}

	/// Dataset nodes, in input order.
	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	/// Resolved edges as node index pairs.
	pub fn edges(&self) -> &[(NodeIndex, NodeIndex)] {
		&self.edges
	}

	/// Drawn radius of node `index`.
	pub fn radius(&self, index: NodeIndex) -> f64 {
		self.radii.get(index).copied().unwrap_or_default()
	}

	/// Graph-space position of node `index`.
	pub fn position(&self, index: NodeIndex) -> Option<Point> {
		self.simulation.position(index)
	}

	/// Whether node `index` is pinned.
	pub fn is_pinned(&self, index: NodeIndex) -> bool {
		self.simulation.is_pinned(index)
	}

	/// Current layout energy.
	pub fn alpha(&self) -> f64 {
		self.simulation.alpha()
	}

	/// HUD counts.
	pub fn stats(&self) -> GraphStats {
		self.stats
	}

	/// Label truncation settings.
	pub fn labels(&self) -> &LabelConfig {
		&self.labels
	}

	/// Current pan and zoom.
	pub fn transform(&self) -> ViewTransform {
		self.transform
	}

	/// Running or stopped.
	pub fn status(&self) -> SimulationStatus {
		self.status
	}

	/// Current click selection.
	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	/// Hover card, if the pointer is over a node.
	pub fn tooltip(&self) -> Option<&Tooltip> {
		self.tooltip.as_ref()
	}

	/// Node currently being dragged.
	pub fn dragging(&self) -> Option<NodeIndex> {
		self.dragging
	}

	/// Viewport size.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Highlight fade progress in `[0, 1]`, eased.
	pub fn fade(&self) -> f64 {
		ease_out_cubic(self.fade)
	}

	/// Opacity for node `index` given the current highlight.
	pub fn node_opacity(&self, index: NodeIndex) -> f64 {
		match self.highlight() {
			Some(sel) if !sel.nodes.contains(&index) => {
				1.0 - (1.0 - DIMMED_NODE_OPACITY) * self.fade()
			}
			_ => 1.0,
		}
	}

	/// Opacity for edge `index` given the current highlight.
	pub fn edge_opacity(&self, index: usize) -> f64 {
		match self.highlight() {
			Some(sel) if sel.edges.contains(&index) => {
				EDGE_OPACITY + (1.0 - EDGE_OPACITY) * self.fade()
			}
			Some(_) => EDGE_OPACITY - (EDGE_OPACITY - DIMMED_EDGE_OPACITY) * self.fade(),
			None => EDGE_OPACITY,
		}
	}

	/// Whether edge `index` belongs to the highlight being shown.
	pub fn is_edge_highlighted(&self, index: usize) -> bool {
		self.highlight().is_some_and(|sel| sel.edges.contains(&index))
	}

	fn highlight(&self) -> Option<&Selection> {
		if !self.selection.is_empty() {
			Some(&self.selection)
		} else if self.fade > 0.0 {
			self.fading_out.as_ref()
		} else {
			None
		}
	}

	fn hover(&mut self, node: NodeIndex, pointer: Point) {
		let Some(data) = self.nodes.get(node) else {
			return;
		};
		self.tooltip = Some(Tooltip {
			position: pointer,
			label: data.label.clone(),
			kind: data.kind,
			state: data.state,
			dependencies_in: data.dependencies_in,
			dependencies_out: data.dependencies_out,
		});
	}

	fn toggle_selection(&mut self, node: NodeIndex) {
		if node >= self.nodes.len() {
			return;
		}
		if self.selection.node == Some(node) {
			self.clear_selection();
			return;
		}

		let mut selection = Selection {
			node: Some(node),
			..Selection::default()
		};
		selection.nodes.insert(node);
		for (i, &(src, tgt)) in self.edges.iter().enumerate() {
			if src == node {
				selection.nodes.insert(tgt);
				selection.edges.insert(i);
			} else if tgt == node {
				selection.nodes.insert(src);
				selection.edges.insert(i);
			}
		}
		self.fading_out = None;
		self.selection = selection;
	}

	fn clear_selection(&mut self) {
		if !self.selection.is_empty() {
			self.fading_out = Some(std::mem::take(&mut self.selection));
		}
	}

	fn drag_start(&mut self, node: NodeIndex, pointer: Point) {
		if node >= self.nodes.len() {
			return;
		}
		let grab = self.transform.to_graph(pointer);
		let at = self.simulation.position(node).unwrap_or(grab);
		self.dragging = Some(node);
		self.drag_offset = Point::new(at.x - grab.x, at.y - grab.y);
		self.simulation.pin(node, at);
		self.simulation.set_alpha_target(self.force_config.drag_alpha_target);
	}

	fn drag_to(&mut self, node: NodeIndex, pointer: Point) {
		if self.dragging != Some(node) {
			return;
		}
		let grab = self.transform.to_graph(pointer);
		let at = Point::new(grab.x + self.drag_offset.x, grab.y + self.drag_offset.y);
		self.simulation.pin(node, at);
	}

	fn drag_end(&mut self, node: NodeIndex) {
		if self.dragging != Some(node) {
			return;
		}
		self.dragging = None;
		self.simulation.set_alpha_target(0.0);
		if self.status == SimulationStatus::Running {
			self.simulation.unpin(node);
		}
	}

	fn zoom(&mut self, factor: f64, anchor: Point) {
		if !factor.is_finite() || factor <= 0.0 {
			return;
		}
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = anchor.x - (anchor.x - self.transform.x) * ratio;
		self.transform.y = anchor.y - (anchor.y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	fn reset(&mut self) {
		self.selection = Selection::default();
		self.fading_out = None;
		self.fade = 0.0;
		self.tooltip = None;
		self.dragging = None;
		self.transform = ViewTransform::default();
		self.simulation = build_simulation(
			&self.nodes,
			&self.radii,
			&self.edges,
			self.force_config,
			self.width,
			self.height,
		);
		self.status = SimulationStatus::Running;
		debug!("graph view reset");
	}

	fn toggle_physics(&mut self) {
		self.status = match self.status {
			SimulationStatus::Running => SimulationStatus::Stopped,
			SimulationStatus::Stopped => {
				let pulse = self.simulation.alpha().max(self.force_config.resume_alpha);
				self.simulation.set_alpha(pulse);
				SimulationStatus::Running
			}
		};
		debug!("physics {:?}", self.status);
	}

	fn frame(&mut self, dt: f64) {
		if self.status == SimulationStatus::Running && self.simulation.is_hot() {
			self.simulation.tick();
		}

		let step = (dt / FADE_SECONDS).max(0.0);
		if self.selection.is_empty() {
			self.fade = (self.fade - step).max(0.0);
			if self.fade == 0.0 {
				self.fading_out = None;
			}
		} else {
			self.fade = (self.fade + step).min(1.0);
		}
	}
}

fn build_simulation(
	nodes: &[GraphNode],
	radii: &[f64],
	edges: &[(NodeIndex, NodeIndex)],
	config: ForceConfig,
	width: f64,
	height: f64,
) -> Simulation {
	let specs = nodes
		.iter()
		.zip(radii)
		.map(|(node, &radius)| SimNodeSpec {
			radius,
			charge: config.charge_for(node.state, node.degree()),
		})
		.collect::<Vec<_>>();
	Simulation::new(&specs, edges, config, Point::new(width / 2.0, height / 2.0))
}

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}
