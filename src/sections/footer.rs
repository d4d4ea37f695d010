use leptos::prelude::*;

use super::{REPO_URL, VERSION};

#[component]
pub fn Footer() -> impl IntoView {
	view! {
		<footer class="footer">
			<div class="container">
				<div class="footer-brand">
					<span class="footer-title">"tfgraph"</span>
					<span class="footer-version">{VERSION}</span>
				</div>
				<div class="footer-links">
					<a href=REPO_URL target="_blank" class="footer-link">"GitHub"</a>
					<a href="https://crates.io/crates/tfgraph" target="_blank" class="footer-link">"crates.io"</a>
					<a href="/docs" class="footer-link">"Docs"</a>
					<a href=format!("{REPO_URL}/blob/main/LICENSE") target="_blank" class="footer-link">
						"MIT License"
					</a>
				</div>
			</div>
		</footer>
	}
}
