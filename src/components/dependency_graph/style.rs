//! Per-type and per-state visual lookup tables.

use std::borrow::Cow;

use super::types::{NodeState, NodeType};

/// Extra radius granted per unit of degree.
const RADIUS_PER_DEGREE: f64 = 0.8;
/// Cap on the degree-driven radius bonus.
const MAX_DEGREE_RADIUS: f64 = 6.0;

/// Glow drawn behind a node, keyed by its state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
	/// CSS color of the shadow.
	pub color: &'static str,
	/// Shadow blur in graph units; zero disables the glow.
	pub blur: f64,
}

/// Fill color for a node type.
pub fn fill_color(kind: NodeType) -> &'static str {
	match kind {
		NodeType::Resource => "#3b82f6",
		NodeType::Module => "#8b5cf6",
		NodeType::Variable => "#10b981",
		NodeType::Output => "#f59e0b",
		NodeType::Data => "#06b6d4",
		NodeType::Provider => "#ec4899",
	}
}

/// Stroke color for a node state.
pub fn stroke_color(state: NodeState) -> &'static str {
	match state {
		NodeState::Healthy => "#22c55e",
		NodeState::Unused => "#6b7280",
		NodeState::External => "#a855f7",
		NodeState::Leaf => "#38bdf8",
		NodeState::Orphan => "#ef4444",
		NodeState::Warning => "#facc15",
	}
}

/// Glow for a node state.
pub fn glow(state: NodeState) -> Glow {
	match state {
		NodeState::Healthy => Glow {
			color: "rgba(34, 197, 94, 0.6)",
			blur: 8.0,
		},
		NodeState::Unused => Glow {
			color: "rgba(0, 0, 0, 0)",
			blur: 0.0,
		},
		NodeState::External => Glow {
			color: "rgba(168, 85, 247, 0.5)",
			blur: 6.0,
		},
		NodeState::Leaf => Glow {
			color: "rgba(56, 189, 248, 0.4)",
			blur: 4.0,
		},
		NodeState::Orphan => Glow {
			color: "rgba(239, 68, 68, 0.6)",
			blur: 10.0,
		},
		NodeState::Warning => Glow {
			color: "rgba(250, 204, 21, 0.7)",
			blur: 12.0,
		},
	}
}

fn base_radius(kind: NodeType) -> f64 {
	match kind {
		NodeType::Module => 14.0,
		NodeType::Provider => 13.0,
		NodeType::Resource => 10.0,
		NodeType::Data => 9.0,
		NodeType::Variable | NodeType::Output => 7.0,
	}
}

/// Circle radius for a node of `kind` with `degree` dependencies.
pub fn node_radius(kind: NodeType, degree: u32) -> f64 {
	base_radius(kind) + (f64::from(degree) * RADIUS_PER_DEGREE).min(MAX_DEGREE_RADIUS)
}

/// Maximum label lengths before truncation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelConfig {
	/// Limit for module nodes, whose names tend to be paths.
	pub module_max: usize,
	/// Limit for every other node type.
	pub default_max: usize,
}

impl Default for LabelConfig {
	fn default() -> Self {
		Self {
			module_max: 25,
			default_max: 18,
		}
	}
}

impl LabelConfig {
	/// Character limit for labels of `kind`.
	pub fn max_len(&self, kind: NodeType) -> usize {
		match kind {
			NodeType::Module => self.module_max,
			_ => self.default_max,
		}
	}

	/// Cuts `label` to the limit for `kind`, appending an ellipsis when shortened.
	pub fn truncate<'a>(&self, label: &'a str, kind: NodeType) -> Cow<'a, str> {
		let max = self.max_len(kind);
		match label.char_indices().nth(max) {
			Some((cut, _)) => Cow::Owned(format!("{}...", &label[..cut])),
			None => Cow::Borrowed(label),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn module_labels_keep_25_chars() {
		let config = LabelConfig::default();
		let label = "module.networking.vpc_primary_east";
		let out = config.truncate(label, NodeType::Module);
		assert_eq!(out, "module.networking.vpc_pri...");
		assert_eq!(out.chars().count(), 28);
	}

	#[test]
	fn other_labels_keep_18_chars() {
		let config = LabelConfig::default();
		let out = config.truncate("aws_security_group.web_ingress", NodeType::Resource);
		assert_eq!(out, "aws_security_group...");
	}

	#[test]
	fn short_labels_are_borrowed() {
		let config = LabelConfig::default();
		let out = config.truncate("var.region", NodeType::Variable);
		assert!(matches!(out, Cow::Borrowed("var.region")));
	}

	#[test]
	fn truncation_counts_chars_not_bytes() {
		let config = LabelConfig {
			module_max: 3,
			default_max: 3,
		};
		assert_eq!(config.truncate("ééééé", NodeType::Data), "ééé...");
	}

	#[test]
	fn radius_grows_with_degree_up_to_cap() {
		assert_eq!(node_radius(NodeType::Resource, 0), 10.0);
		assert_eq!(node_radius(NodeType::Resource, 5), 14.0);
		assert_eq!(node_radius(NodeType::Resource, 100), 16.0);
		assert!(node_radius(NodeType::Module, 0) > node_radius(NodeType::Output, 0));
	}
}
