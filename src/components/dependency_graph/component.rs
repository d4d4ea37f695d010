use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::gesture::PointerTracker;
use super::render;
use super::state::{GraphEvent, GraphView, SimulationStatus, Tooltip};
use super::stats::GraphStats;
use super::style::{fill_color, stroke_color};
use super::types::{GraphData, NodeState, NodeType, Point};

const FRAME_SECONDS: f64 = 0.016;

type Shared<T> = Rc<RefCell<Option<T>>>;

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?;
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Interactive force-directed view of a dependency graph, with HUD, legend and controls.
#[component]
pub fn DependencyGraph(
	/// Graph to lay out, read once when the canvas mounts.
	#[prop(into)]
	data: Signal<GraphData>,
	/// Canvas height in CSS pixels.
	#[prop(default = 520.0)]
	height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Shared<GraphView> = Rc::new(RefCell::new(None));
	let animate: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let resize_cb: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let pointer = Rc::new(RefCell::new(PointerTracker::default()));
	let alive = Arc::new(AtomicBool::new(true));

	let (stats, set_stats) = signal(GraphStats::default());
	let (physics_on, set_physics_on) = signal(true);
	let (tooltip, set_tooltip) = signal(None::<Tooltip>);

	let alive_cleanup = alive.clone();
	on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

	let (state_init, animate_init, resize_cb_init, alive_init) =
		(state.clone(), animate.clone(), resize_cb.clone(), alive.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};

		let width = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.filter(|w| *w > 0.0)
			.unwrap_or(800.0);
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				log::warn!("2d canvas context unavailable");
				return;
			}
		};

		let view = GraphView::new(&data.get_untracked(), width, height);
		set_stats.set(view.stats());
		*state_init.borrow_mut() = Some(view);
		debug!("dependency graph mounted at {width}x{height}");

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(parent) = canvas_resize.parent_element() else {
				return;
			};
			let new_width = parent.client_width() as f64;
			if new_width <= 0.0 {
				return;
			}
			canvas_resize.set_width(new_width as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.update(GraphEvent::Resize {
					width: new_width,
					height,
				});
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, resize_inner, alive_anim) = (
			state_init.clone(),
			animate_init.clone(),
			resize_cb_init.clone(),
			alive_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let Some(window): Option<Window> = web_sys::window() else {
				return;
			};
			if !alive_anim.load(Ordering::Relaxed) {
				if let Some(mut view) = state_anim.borrow_mut().take() {
					view.dispose();
				}
				if let Some(ref cb) = *resize_inner.borrow() {
					let _ = window
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.update(GraphEvent::Frame { dt: FRAME_SECONDS });
				let (w, h) = s.size();
				render::paint(&render::build_scene(s), s.transform(), w, h, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let dispatch = {
		let state = state.clone();
		move |events: Vec<GraphEvent>| {
			if let Some(ref mut s) = *state.borrow_mut() {
				for event in events {
					s.update(event);
				}
				set_tooltip.set(s.tooltip().cloned());
				set_physics_on.set(s.status() == SimulationStatus::Running);
			}
		}
	};

	let hit_test = {
		let state = state.clone();
		move |at: Point| state.borrow().as_ref().and_then(|s| s.node_at(at))
	};

	let (pointer_md, hit_md) = (pointer.clone(), hit_test.clone());
	let on_mousedown = move |ev: MouseEvent| {
		if let Some(at) = local_point(canvas_ref, &ev) {
			pointer_md.borrow_mut().down(hit_md(at), at);
		}
	};

	let (pointer_mm, hit_mm, dispatch_mm) = (pointer.clone(), hit_test.clone(), dispatch.clone());
	let on_mousemove = move |ev: MouseEvent| {
		if let Some(at) = local_point(canvas_ref, &ev) {
			let events = pointer_mm.borrow_mut().moved(hit_mm(at), at);
			dispatch_mm(events);
		}
	};

	let (pointer_mu, dispatch_mu) = (pointer.clone(), dispatch.clone());
	let on_mouseup = move |_: MouseEvent| {
		let event = pointer_mu.borrow_mut().up();
		dispatch_mu(event.into_iter().collect());
	};

	let (pointer_ml, dispatch_ml) = (pointer.clone(), dispatch.clone());
	let on_mouseleave = move |_: MouseEvent| {
		let events = pointer_ml.borrow_mut().leave();
		dispatch_ml(events);
	};

	let dispatch_wh = dispatch.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some(anchor) = local_point(canvas_ref, &ev) {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			dispatch_wh(vec![GraphEvent::Zoom { factor, anchor }]);
		}
	};

	let (dispatch_reset, dispatch_physics, dispatch_center) =
		(dispatch.clone(), dispatch.clone(), dispatch);

	view! {
		<div class="graph-view" style=format!("position: relative; height: {height}px;")>
			<canvas
				node_ref=canvas_ref
				class="graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>

			<div class="graph-hud">
				<span>{move || format!("{} nodes", stats.get().nodes)}</span>
				<span>{move || format!("{} edges", stats.get().edges)}</span>
				<span>{move || format!("{} components", stats.get().components)}</span>
			</div>

			<div class="graph-controls">
				<button on:click=move |_| dispatch_reset(vec![GraphEvent::Reset])>"Reset"</button>
				<button
					class=move || if physics_on.get() { "active" } else { "" }
					on:click=move |_| dispatch_physics(vec![GraphEvent::TogglePhysics])
				>
					{move || if physics_on.get() { "Physics: on" } else { "Physics: off" }}
				</button>
				<button on:click=move |_| dispatch_center(vec![GraphEvent::Center])>"Center"</button>
			</div>

			<GraphLegend />

			{move || {
				tooltip
					.get()
					.map(|t| {
						view! {
							<div
								class="graph-tooltip"
								style=format!(
									"position: absolute; left: {}px; top: {}px; pointer-events: none;",
									t.position.x + 12.0,
									t.position.y + 12.0,
								)
							>
								<strong>{t.label}</strong>
								<div>{format!("state: {}", t.state)}</div>
								<div>{format!("type: {}", t.kind)}</div>
								<div>
									{format!("in: {} / out: {}", t.dependencies_in, t.dependencies_out)}
								</div>
							</div>
						}
					})
			}}
		</div>
	}
}

#[component]
fn GraphLegend() -> impl IntoView {
	view! {
		<div class="graph-legend">
			<div class="legend-group">
				{NodeType::ALL
					.iter()
					.map(|kind| {
						view! {
							<span class="legend-item">
								<span
									class="legend-swatch"
									style=format!("background: {};", fill_color(*kind))
								></span>
								{kind.as_str()}
							</span>
						}
					})
					.collect_view()}
			</div>
			<div class="legend-group">
				{NodeState::ALL
					.iter()
					.map(|state| {
						view! {
							<span class="legend-item">
								<span
									class="legend-ring"
									style=format!("border-color: {};", stroke_color(*state))
								></span>
								{state.as_str()}
							</span>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
