use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{GraphView, ViewTransform};
use super::style::{Glow, fill_color, glow, stroke_color};
use super::types::Point;

const BACKGROUND: &str = "#0f172a";
const EDGE_COLOR: &str = "148, 163, 184";
const EDGE_WIDTH: f64 = 1.5;
const ARROW_SIZE: f64 = 7.0;
const LABEL_GAP: f64 = 4.0;

/// A directed edge ready to draw, in graph space.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeShape {
	/// Line start, on the source circle.
	pub from: Point,
	/// Line end, at the base of the arrowhead.
	pub to: Point,
	/// Arrowhead tip, then its two back corners.
	pub arrow: [Point; 3],
	/// Arrowhead color, taken from the target node type.
	pub arrow_color: &'static str,
	/// Line and arrow opacity.
	pub opacity: f64,
	/// Part of the current selection.
	pub highlighted: bool,
}

/// A node circle ready to draw, in graph space.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeShape {
	/// Circle centre.
	pub center: Point,
	/// Circle radius.
	pub radius: f64,
	/// Fill color from the node type.
	pub fill: &'static str,
	/// Stroke color from the node state.
	pub stroke: &'static str,
	/// Shadow from the node state.
	pub glow: Glow,
	/// Opacity after highlight fading.
	pub opacity: f64,
	/// The clicked node.
	pub selected: bool,
}

/// A truncated node label ready to draw, in graph space.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelShape {
	/// Baseline start.
	pub position: Point,
	/// Truncated text.
	pub text: String,
	/// Opacity after highlight fading.
	pub opacity: f64,
}

/// Everything drawn for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// One shape per resolved edge, in edge order.
	pub edges: Vec<EdgeShape>,
	/// One circle per node, in node order.
	pub nodes: Vec<NodeShape>,
	/// One label per node, in node order.
	pub labels: Vec<LabelShape>,
}

/// Builds the display list for the current view state.
pub fn build_scene(view: &GraphView) -> Scene {
	let position = |i: usize| view.position(i).unwrap_or_default();
	let nodes = view.nodes();

	let edges = view
		.edges()
		.iter()
		.enumerate()
		.map(|(i, &(src, tgt))| {
			let (a, b) = (position(src), position(tgt));
			let (dx, dy) = (b.x - a.x, b.y - a.y);
			let dist = dx.hypot(dy);
			let (ux, uy) = if dist < 0.001 {
				(0.0, 0.0)
			} else {
				(dx / dist, dy / dist)
			};
			let (rs, rt) = (view.radius(src), view.radius(tgt));
			let tip = Point::new(b.x - ux * rt, b.y - uy * rt);
			let back = Point::new(tip.x - ux * ARROW_SIZE, tip.y - uy * ARROW_SIZE);
			let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
			EdgeShape {
				from: Point::new(a.x + ux * rs, a.y + uy * rs),
				to: back,
				arrow: [
					tip,
					Point::new(back.x + px, back.y + py),
					Point::new(back.x - px, back.y - py),
				],
				arrow_color: fill_color(nodes[tgt].kind),
				opacity: view.edge_opacity(i),
				highlighted: view.is_edge_highlighted(i),
			}
		})
		.collect();

	let selected = view.selection().node;
	let node_shapes = nodes
		.iter()
		.enumerate()
		.map(|(i, node)| NodeShape {
			center: position(i),
			radius: view.radius(i),
			fill: fill_color(node.kind),
			stroke: stroke_color(node.state),
			glow: glow(node.state),
			opacity: view.node_opacity(i),
			selected: selected == Some(i),
		})
		.collect();

	let labels = nodes
		.iter()
		.enumerate()
		.map(|(i, node)| {
			let center = position(i);
			LabelShape {
				position: Point::new(center.x + view.radius(i) + LABEL_GAP, center.y + 4.0),
				text: view.labels().truncate(&node.label, node.kind).into_owned(),
				opacity: view.node_opacity(i),
			}
		})
		.collect();

	Scene {
		edges,
		nodes: node_shapes,
		labels,
	}
}

/// Paints `scene` onto a canvas of the given size.
pub fn paint(
	scene: &Scene,
	transform: ViewTransform,
	width: f64,
	height: f64,
	ctx: &CanvasRenderingContext2d,
) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);
	ctx.save();
	let _ = ctx.translate(transform.x, transform.y);
	let _ = ctx.scale(transform.k, transform.k);
	draw_edges(scene, transform.k, ctx);
	draw_nodes(scene, transform.k, ctx);
	draw_labels(scene, transform.k, ctx);
	ctx.restore();
}

fn draw_edges(scene: &Scene, k: f64, ctx: &CanvasRenderingContext2d) {
	for edge in &scene.edges {
		let width = if edge.highlighted {
			EDGE_WIDTH * 1.6
		} else {
			EDGE_WIDTH
		};
		ctx.set_stroke_style_str(&format!("rgba({EDGE_COLOR}, {})", edge.opacity));
		ctx.set_line_width(width / k.max(0.5));
		ctx.begin_path();
		ctx.move_to(edge.from.x, edge.from.y);
		ctx.line_to(edge.to.x, edge.to.y);
		ctx.stroke();

		let [tip, left, right] = edge.arrow;
		ctx.set_global_alpha(edge.opacity);
		ctx.set_fill_style_str(edge.arrow_color);
		ctx.begin_path();
		ctx.move_to(tip.x, tip.y);
		ctx.line_to(left.x, left.y);
		ctx.line_to(right.x, right.y);
		ctx.close_path();
		ctx.fill();
		ctx.set_global_alpha(1.0);
	}
}

fn draw_nodes(scene: &Scene, k: f64, ctx: &CanvasRenderingContext2d) {
	for node in &scene.nodes {
		ctx.set_global_alpha(node.opacity);
		ctx.set_shadow_color(node.glow.color);
		ctx.set_shadow_blur(node.glow.blur * k);

		ctx.begin_path();
		let _ = ctx.arc(node.center.x, node.center.y, node.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.fill);
		ctx.fill();

		let stroke_width = if node.selected { 3.0 } else { 2.0 };
		ctx.set_shadow_blur(0.0);
		ctx.set_stroke_style_str(node.stroke);
		ctx.set_line_width(stroke_width / k.max(0.5));
		ctx.stroke();

		if node.selected {
			ctx.begin_path();
			let _ = ctx.arc(
				node.center.x,
				node.center.y,
				node.radius + 4.0 / k,
				0.0,
				2.0 * PI,
			);
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.7)");
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}
	}
	ctx.set_global_alpha(1.0);
	ctx.set_shadow_color("rgba(0, 0, 0, 0)");
}

fn draw_labels(scene: &Scene, k: f64, ctx: &CanvasRenderingContext2d) {
	ctx.set_font(&format!("{}px ui-monospace, monospace", 11.0 / k.max(0.5)));
	for label in &scene.labels {
		ctx.set_fill_style_str(&format!("rgba(226, 232, 240, {})", label.opacity * 0.9));
		let _ = ctx.fill_text(&label.text, label.position.x, label.position.y);
	}
}
