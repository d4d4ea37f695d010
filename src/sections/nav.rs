use leptos::prelude::*;
use leptos_router::components::A;

use super::{REPO_URL, VERSION};

#[component]
pub fn Nav() -> impl IntoView {
	let (menu_open, set_menu_open) = signal(false);
	let close = move |_: web_sys::MouseEvent| set_menu_open.set(false);

	view! {
		<nav class="nav">
			<div class="container nav-inner">
				<A href="/" attr:class="nav-brand">
					<span class="nav-logo">"tfgraph"</span>
					<span class="nav-version">{VERSION}</span>
				</A>
				<button
					class="nav-toggle"
					aria-label="menu"
					on:click=move |_| set_menu_open.update(|open| *open = !*open)
				>
					"\u{2630}"
				</button>
				<div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
					<a href="/#features" class="nav-link" on:click=close>"Features"</a>
					<a href="/#showcase" class="nav-link" on:click=close>"Demo"</a>
					<a href="/#roadmap" class="nav-link" on:click=close>"Roadmap"</a>
					<a href="/docs" class="nav-link" on:click=close>"Docs"</a>
					<a href=REPO_URL target="_blank" class="nav-link">"GitHub"</a>
				</div>
			</div>
		</nav>
	}
}
