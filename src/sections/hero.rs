use leptos::prelude::*;

use super::{REPO_URL, VERSION};
use crate::components::typewriter::TypedConsole;

#[component]
pub fn Hero() -> impl IntoView {
	let badge_text = format!("{VERSION} - single static binary");
	view! {
		<section class="hero">
			<div class="container">
				<div class="hero-grid">
					<div class="hero-content">
						<div class="hero-badge">
							<span class="hero-badge-dot"></span>
							{badge_text}
						</div>
						<h1 class="hero-title">
							<span class="hero-title-accent">"See your Terraform"</span>
							<br />
							"before you apply it."
						</h1>
						<p class="hero-description">
							"tfgraph reads your modules and draws every resource, variable and output as an "
							"interactive dependency graph. Unused variables and orphaned resources light up."
						</p>
						<div class="hero-actions">
							<a href="/docs#install" class="btn btn-primary">
								"Get Started"
							</a>
							<a href=REPO_URL target="_blank" class="btn btn-secondary">
								"View on GitHub"
							</a>
						</div>
					</div>
					<TypedConsole />
				</div>
			</div>
		</section>
	}
}
