use leptos::prelude::*;

use super::VERSION;

#[component]
pub fn Features() -> impl IntoView {
	let eyebrow = format!("{VERSION} Features");
	view! {
		<section id="features" class="features">
			<div class="container">
				<div class="section-header">
					<p class="section-eyebrow">{eyebrow}</p>
					<h2 class="section-title">"Your infrastructure, as a map"</h2>
					<p class="section-description">
						"Point it at a directory of .tf files and get a report you can click through."
					</p>
				</div>
				<div class="features-grid">
					<FeatureCard
						icon="[1]"
						title="Interactive graph"
						description="Force-directed layout with drag, zoom and click-to-highlight of dependencies."
						code=Some("tfgraph ./infra --open")
					/>
					<FeatureCard
						icon="[2]"
						title="Unused detection"
						description="Variables nobody reads and resources nothing references are flagged."
						code=Some("tfgraph ./infra --only unused")
					/>
					<FeatureCard
						icon="[3]"
						title="Module aware"
						description="Nested modules become their own nodes, with inputs and outputs wired through."
						code=None
					/>
					<FeatureCard
						icon="[4]"
						title="Many outputs"
						description="HTML report, JSON for tooling, DOT for Graphviz and Mermaid for docs."
						code=Some("tfgraph ./infra --format dot")
					/>
					<FeatureCard
						icon="[5]"
						title="CI friendly"
						description="Exit non-zero on orphans or warnings so drift never reaches main."
						code=Some("tfgraph ./infra --fail-on warning")
					/>
					<FeatureCard
						icon="[6]"
						title="Offline"
						description="One binary, no provider plugins, no state access. Nothing leaves the machine."
						code=None
					/>
				</div>
			</div>
		</section>
	}
}

#[component]
fn FeatureCard(
	icon: &'static str,
	title: &'static str,
	description: &'static str,
	code: Option<&'static str>,
) -> impl IntoView {
	view! {
		<div class="feature-card">
			<div class="feature-icon">{icon}</div>
			<h3 class="feature-title">{title}</h3>
			<p class="feature-description">{description}</p>
			{code.map(|c| view! { <div class="feature-code">{c}</div> })}
		</div>
	}
}
