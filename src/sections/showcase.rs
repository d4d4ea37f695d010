use leptos::prelude::*;

use crate::components::dependency_graph::{DependencyGraph, showcase_graph};

#[component]
pub fn Showcase() -> impl IntoView {
	let graph = Signal::derive(showcase_graph);
	view! {
		<section id="showcase" class="showcase">
			<div class="container">
				<div class="section-header">
					<p class="section-eyebrow">"Live demo"</p>
					<h2 class="section-title">"A small AWS stack"</h2>
					<p class="section-description">
						"Drag nodes, scroll to zoom, click a node to highlight what it touches. "
						"This is the same view the HTML report ships."
					</p>
				</div>
				<DependencyGraph data=graph height=560.0 />
			</div>
		</section>
	}
}
