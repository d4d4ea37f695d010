use leptos::prelude::*;
use leptos_router::components::A;

use crate::sections::{Footer, Nav};

/// 404 page.
#[component]
pub fn NotFound() -> impl IntoView {
	log::debug!("route not found");
	view! {
		<Nav />
		<main class="not-found">
			<div class="container">
				<h1>"404"</h1>
				<p>"This page is not in the graph."</p>
				<A href="/" attr:class="btn btn-primary">"Back home"</A>
			</div>
		</main>
		<Footer />
	}
}
