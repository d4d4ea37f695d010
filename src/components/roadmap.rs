//! Release timeline.

use leptos::prelude::*;

/// Delivery state of a milestone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MilestoneStatus {
	/// Released.
	Shipped,
	/// Under active work.
	InProgress,
	/// Not started.
	Planned,
}

impl MilestoneStatus {
	/// Badge text.
	pub fn label(self) -> &'static str {
		match self {
			Self::Shipped => "shipped",
			Self::InProgress => "in progress",
			Self::Planned => "planned",
		}
	}

	/// CSS classes of the timeline entry.
	pub fn class(self) -> &'static str {
		match self {
			Self::Shipped => "milestone shipped",
			Self::InProgress => "milestone in-progress",
			Self::Planned => "milestone planned",
		}
	}
}

/// One release on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
	/// Version tag, e.g. `v0.2`.
	pub version: &'static str,
	/// Short headline.
	pub title: &'static str,
	/// Bullet points.
	pub items: &'static [&'static str],
	/// Delivery state.
	pub status: MilestoneStatus,
}

/// Published roadmap, oldest first.
pub const MILESTONES: &[Milestone] = &[
	Milestone {
		version: "v0.1",
		title: "Static graph",
		items: &["HCL parsing", "DOT export", "Resource and module nodes"],
		status: MilestoneStatus::Shipped,
	},
	Milestone {
		version: "v0.2",
		title: "Interactive report",
		items: &["Force-directed HTML view", "Unused and orphan detection", "JSON output"],
		status: MilestoneStatus::Shipped,
	},
	Milestone {
		version: "v0.3",
		title: "Plan awareness",
		items: &["Plan diff overlay", "Provider version warnings"],
		status: MilestoneStatus::InProgress,
	},
	Milestone {
		version: "v1.0",
		title: "Workspaces",
		items: &["Cross-state references", "CI annotations", "Mermaid export"],
		status: MilestoneStatus::Planned,
	},
];

/// Share of milestones already shipped, in `[0, 1]`.
pub fn shipped_fraction(milestones: &[Milestone]) -> f64 {
	if milestones.is_empty() {
		return 0.0;
	}
	let shipped = milestones
		.iter()
		.filter(|m| m.status == MilestoneStatus::Shipped)
		.count();
	shipped as f64 / milestones.len() as f64
}

/// Timeline of milestones with a shipped-progress bar.
#[component]
pub fn Roadmap(
	/// Milestones to show, oldest first.
	#[prop(default = MILESTONES)]
	milestones: &'static [Milestone],
) -> impl IntoView {
	let progress = shipped_fraction(milestones) * 100.0;
	view! {
		<div class="roadmap">
			<div class="roadmap-progress">
				<div class="roadmap-progress-bar" style=format!("width: {progress:.0}%;")></div>
			</div>
			<ol class="roadmap-timeline">
				{milestones
					.iter()
					.map(|m| {
						view! {
							<li class=m.status.class()>
								<div class="milestone-header">
									<span class="milestone-version">{m.version}</span>
									<span class="milestone-title">{m.title}</span>
									<span class="milestone-status">{m.status.label()}</span>
								</div>
								<ul>
									{m.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
								</ul>
							</li>
						}
					})
					.collect_view()}
			</ol>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shipped_share() {
		assert_eq!(shipped_fraction(MILESTONES), 0.5);
		assert_eq!(shipped_fraction(&[]), 0.0);
	}

	#[test]
	fn timeline_is_ordered_by_status() {
		let rank = |s: MilestoneStatus| match s {
			MilestoneStatus::Shipped => 0,
			MilestoneStatus::InProgress => 1,
			MilestoneStatus::Planned => 2,
		};
		assert!(
			MILESTONES
				.windows(2)
				.all(|w| rank(w[0].status) <= rank(w[1].status))
		);
	}
}
