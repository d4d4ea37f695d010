//! Turns raw pointer input into [`GraphEvent`]s.

use super::state::{GraphEvent, NodeIndex};
use super::types::Point;

/// Movement in screen pixels before a press on a node becomes a drag.
const DRAG_THRESHOLD: f64 = 3.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Gesture {
	#[default]
	Idle,
	Pressed {
		node: NodeIndex,
		origin: Point,
	},
	Dragging {
		node: NodeIndex,
	},
	Panning {
		last: Point,
	},
}

/// Pointer state between mouse events.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
	gesture: Gesture,
}

impl PointerTracker {
	/// Button pressed at `at`, over `hit` if a node is there.
	pub fn down(&mut self, hit: Option<NodeIndex>, at: Point) {
		self.gesture = match hit {
			Some(node) => Gesture::Pressed { node, origin: at },
			None => Gesture::Panning { last: at },
		};
	}

	/// Pointer moved to `at`, over `hit` if a node is there.
	pub fn moved(&mut self, hit: Option<NodeIndex>, at: Point) -> Vec<GraphEvent> {
		match self.gesture {
			Gesture::Idle => match hit {
				Some(node) => vec![GraphEvent::Hover { node, pointer: at }],
				None => vec![GraphEvent::Unhover],
			},
			Gesture::Pressed { node, origin } => {
				if origin.distance(at) <= DRAG_THRESHOLD {
					return Vec::new();
				}
				self.gesture = Gesture::Dragging { node };
				vec![
					GraphEvent::Unhover,
					GraphEvent::DragStart {
						node,
						pointer: origin,
					},
					GraphEvent::Drag { node, pointer: at },
				]
			}
			Gesture::Dragging { node } => vec![GraphEvent::Drag { node, pointer: at }],
			Gesture::Panning { last } => {
				self.gesture = Gesture::Panning { last: at };
				vec![GraphEvent::Pan {
					dx: at.x - last.x,
					dy: at.y - last.y,
				}]
			}
		}
	}

	/// Button released.
	pub fn up(&mut self) -> Option<GraphEvent> {
		match std::mem::take(&mut self.gesture) {
			Gesture::Pressed { node, .. } => Some(GraphEvent::Click(node)),
			Gesture::Dragging { node } => Some(GraphEvent::DragEnd { node }),
			Gesture::Idle | Gesture::Panning { .. } => None,
		}
	}

	/// Pointer left the canvas.
	pub fn leave(&mut self) -> Vec<GraphEvent> {
		match std::mem::take(&mut self.gesture) {
			Gesture::Dragging { node } => vec![GraphEvent::DragEnd { node }, GraphEvent::Unhover],
			_ => vec![GraphEvent::Unhover],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn press_and_release_in_place_is_a_click() {
		let mut tracker = PointerTracker::default();
		tracker.down(Some(4), Point::new(10.0, 10.0));
		assert!(tracker.moved(Some(4), Point::new(11.0, 11.0)).is_empty());
		assert_eq!(tracker.up(), Some(GraphEvent::Click(4)));
		assert_eq!(tracker.gesture, Gesture::Idle);
	}

	#[test]
	fn moving_past_threshold_drags() {
		let mut tracker = PointerTracker::default();
		tracker.down(Some(2), Point::new(0.0, 0.0));
		let events = tracker.moved(Some(2), Point::new(10.0, 0.0));
		assert_eq!(
			events,
			vec![
				GraphEvent::Unhover,
				GraphEvent::DragStart {
					node: 2,
					pointer: Point::new(0.0, 0.0),
				},
				GraphEvent::Drag {
					node: 2,
					pointer: Point::new(10.0, 0.0),
				},
			]
		);
		assert_eq!(
			tracker.moved(None, Point::new(20.0, 5.0)),
			vec![GraphEvent::Drag {
				node: 2,
				pointer: Point::new(20.0, 5.0),
			}]
		);
		assert_eq!(tracker.up(), Some(GraphEvent::DragEnd { node: 2 }));
	}

	#[test]
	fn background_press_pans_by_deltas() {
		let mut tracker = PointerTracker::default();
		tracker.down(None, Point::new(5.0, 5.0));
		assert_eq!(
			tracker.moved(Some(1), Point::new(8.0, 1.0)),
			vec![GraphEvent::Pan { dx: 3.0, dy: -4.0 }]
		);
		assert_eq!(
			tracker.moved(None, Point::new(9.0, 1.0)),
			vec![GraphEvent::Pan { dx: 1.0, dy: 0.0 }]
		);
		assert_eq!(tracker.up(), None);
	}

	#[test]
	fn idle_movement_hovers() {
		let mut tracker = PointerTracker::default();
		let at = Point::new(1.0, 2.0);
		assert_eq!(
			tracker.moved(Some(0), at),
			vec![GraphEvent::Hover {
				node: 0,
				pointer: at
			}]
		);
		assert_eq!(tracker.moved(None, at), vec![GraphEvent::Unhover]);
	}

	#[test]
	fn leaving_mid_drag_releases_node() {
		let mut tracker = PointerTracker::default();
		tracker.down(Some(7), Point::new(0.0, 0.0));
		tracker.moved(Some(7), Point::new(50.0, 50.0));
		assert_eq!(
			tracker.leave(),
			vec![GraphEvent::DragEnd { node: 7 }, GraphEvent::Unhover]
		);
	}
}
