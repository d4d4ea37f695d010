use leptos::prelude::*;

use crate::components::coffee_game::DonationWidget;
use crate::components::roadmap::Roadmap;

const DONATE_URL: &str = "https://buymeacoffee.com/tfgraph";

#[component]
pub fn Support() -> impl IntoView {
	view! {
		<section id="roadmap" class="support">
			<div class="container">
				<div class="section-header">
					<p class="section-eyebrow">"Roadmap"</p>
					<h2 class="section-title">"Where it is going"</h2>
				</div>
				<div class="support-grid">
					<Roadmap />
					<DonationWidget href=DONATE_URL />
				</div>
			</div>
		</section>
	}
}
