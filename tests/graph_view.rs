use std::collections::HashSet;

use tfgraph_site::components::dependency_graph::{
	GraphData, GraphEdge, GraphEvent, GraphNode, GraphView, MAX_ZOOM, MIN_ZOOM, NodeState,
	NodeType, Point, PointerTracker, SimulationStatus, build_scene, showcase_graph,
};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn node(id: &str, dependencies_in: u32, dependencies_out: u32) -> GraphNode {
	GraphNode::new(
		id,
		id,
		NodeType::Resource,
		NodeState::Healthy,
		dependencies_in,
		dependencies_out,
	)
}

/// `hub` depends on `a` and `b` and is used by `c`; `lonely` has no edges.
fn hub_graph() -> GraphData {
	GraphData {
		nodes: vec![
			node("hub", 1, 2),
			node("a", 1, 0),
			node("b", 1, 1),
			node("c", 0, 1),
			node("lonely", 0, 0),
		],
		edges: vec![
			GraphEdge::new("hub", "a"),
			GraphEdge::new("hub", "b"),
			GraphEdge::new("c", "hub"),
			GraphEdge::new("b", "a"),
		],
	}
}

fn settle(view: &mut GraphView, frames: usize) {
	for _ in 0..frames {
		view.update(GraphEvent::Frame { dt: 0.016 });
	}
}

#[test]
fn scene_has_one_shape_per_node_and_edge() {
	let data = showcase_graph();
	let mut view = GraphView::new(&data, WIDTH, HEIGHT);
	settle(&mut view, 20);
	let scene = build_scene(&view);
	assert_eq!(scene.nodes.len(), data.nodes.len());
	assert_eq!(scene.edges.len(), data.edges.len());
	assert_eq!(view.stats().nodes, data.nodes.len());
}

#[test]
fn dangling_edges_are_not_drawn() {
	let mut data = hub_graph();
	data.edges.push(GraphEdge::new("hub", "missing"));
	let view = GraphView::new(&data, WIDTH, HEIGHT);
	assert_eq!(build_scene(&view).edges.len(), 4);
}

#[test]
fn clicking_isolated_node_selects_only_it() {
	let mut view = GraphView::new(&hub_graph(), WIDTH, HEIGHT);
	let lonely = view.index_of("lonely").unwrap();
	view.update(GraphEvent::Click(lonely));
	let selection = view.selection();
	assert_eq!(selection.nodes, HashSet::from([lonely]));
	assert!(selection.edges.is_empty());
}

#[test]
fn clicking_hub_highlights_direct_neighbours() {
	let mut view = GraphView::new(&hub_graph(), WIDTH, HEIGHT);
	let hub = view.index_of("hub").unwrap();
	view.update(GraphEvent::Click(hub));

	let touching: HashSet<usize> = view
		.edges()
		.iter()
		.enumerate()
		.filter(|(_, (s, t))| *s == hub || *t == hub)
		.map(|(i, _)| i)
		.collect();
	let selection = view.selection();
	assert!(selection.nodes.len() <= 4);
	assert_eq!(selection.nodes.len(), 4);
	assert_eq!(selection.edges, touching);
	assert!(!selection.nodes.contains(&view.index_of("lonely").unwrap()));

	let b_to_a = view
		.edges()
		.iter()
		.position(|&(s, t)| s == view.index_of("b").unwrap() && t == view.index_of("a").unwrap())
		.unwrap();
	assert!(!view.is_edge_highlighted(b_to_a));
}

#[test]
fn clicking_selected_node_again_clears() {
	let mut view = GraphView::new(&hub_graph(), WIDTH, HEIGHT);
	let hub = view.index_of("hub").unwrap();
	view.update(GraphEvent::Click(hub));
	view.update(GraphEvent::Click(hub));
	assert!(view.selection().is_empty());
	assert!(view.selection().nodes.is_empty());
	assert!(view.selection().edges.is_empty());
}

#[test]
fn two_node_scenario() {
	let data = GraphData {
		nodes: vec![node("A", 0, 1), node("B", 1, 0)],
		edges: vec![GraphEdge::new("A", "B")],
	};
	let mut view = GraphView::new(&data, WIDTH, HEIGHT);
	let (a, b) = (view.index_of("A").unwrap(), view.index_of("B").unwrap());

	view.update(GraphEvent::Click(a));
	assert_eq!(view.selection().nodes, HashSet::from([a, b]));
	assert_eq!(view.selection().edges, HashSet::from([0]));

	view.update(GraphEvent::Click(a));
	assert!(view.selection().nodes.is_empty());
	assert!(view.selection().edges.is_empty());
}

#[test]
fn physics_off_drag_moves_only_dragged_node() {
	let mut view = GraphView::new(&hub_graph(), WIDTH, HEIGHT);
	settle(&mut view, 30);
	view.update(GraphEvent::TogglePhysics);
	assert_eq!(view.status(), SimulationStatus::Stopped);

	let hub = view.index_of("hub").unwrap();
	let before: Vec<Point> = (0..view.nodes().len())
		.map(|i| view.position(i).unwrap())
		.collect();
	let grab = view.transform().to_screen(before[hub]);
	let target = Point::new(40.0, 40.0);
	view.update(GraphEvent::DragStart {
		node: hub,
		pointer: grab,
	});
	view.update(GraphEvent::Drag {
		node: hub,
		pointer: target,
	});
	settle(&mut view, 1);

	for (i, old) in before.iter().enumerate() {
		let now = view.position(i).unwrap();
		if i == hub {
			assert_eq!(now, view.transform().to_graph(target));
		} else {
			assert_eq!(now, *old, "node {i} moved while physics was off");
		}
	}

	view.update(GraphEvent::DragEnd { node: hub });
	assert!(view.is_pinned(hub));
}

#[test]
fn off_centre_grab_moves_node_by_pointer_delta() {
	let mut view = GraphView::new(&hub_graph(), WIDTH, HEIGHT);
	settle(&mut view, 300);
	let hub = view.index_of("hub").unwrap();
	let start = view.position(hub).unwrap();
	let press = view.transform().to_screen(Point::new(start.x + 5.0, start.y + 2.0));

	let mut pointer = PointerTracker::default();
	pointer.down(view.node_at(press), press);
	let mut events = pointer.moved(Some(hub), Point::new(press.x + 2.0, press.y));
	assert!(events.is_empty());
	events = pointer.moved(Some(hub), Point::new(press.x + 30.0, press.y - 12.0));
	for event in events {
		view.update(event);
	}

	let now = view.position(hub).unwrap();
	assert!((now.x - (start.x + 30.0)).abs() < 1e-9, "x jumped to {}", now.x);
	assert!((now.y - (start.y - 12.0)).abs() < 1e-9, "y jumped to {}", now.y);
	assert_eq!(view.dragging(), Some(hub));
}

#[test]
fn zoom_stays_within_bounds() {
	let mut view = GraphView::new(&hub_graph(), WIDTH, HEIGHT);
	let anchor = Point::new(123.0, 456.0);
	for _ in 0..200 {
		view.update(GraphEvent::Zoom {
			factor: 1.1,
			anchor,
		});
		assert!(view.transform().k <= MAX_ZOOM);
	}
	assert_eq!(view.transform().k, MAX_ZOOM);
	for _ in 0..400 {
		view.update(GraphEvent::Zoom {
			factor: 0.9,
			anchor,
		});
		assert!(view.transform().k >= MIN_ZOOM);
	}
	assert_eq!(view.transform().k, MIN_ZOOM);
}

#[test]
fn pointer_click_on_node_reaches_selection() {
	let mut view = GraphView::new(&hub_graph(), WIDTH, HEIGHT);
	settle(&mut view, 300);
	let hub = view.index_of("hub").unwrap();
	let at = view.transform().to_screen(view.position(hub).unwrap());

	let mut pointer = PointerTracker::default();
	pointer.down(view.node_at(at), at);
	for event in pointer.up() {
		view.update(event);
	}
	assert_eq!(view.selection().node, Some(hub));
}

#[test]
fn layout_settles_and_stays_finite() {
	let data = showcase_graph();
	let mut view = GraphView::new(&data, WIDTH, HEIGHT);
	settle(&mut view, 400);
	assert!(view.alpha() < 0.01);
	for i in 0..data.nodes.len() {
		let p = view.position(i).unwrap();
		assert!(p.x.is_finite() && p.y.is_finite());
	}
}
