use leptos::prelude::*;

use crate::sections::{Features, Footer, Hero, Nav, Showcase, Support};

/// Landing page.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<Nav />
			<main>
				<Hero />
				<Features />
				<Showcase />
				<Support />
			</main>
			<Footer />
		</ErrorBoundary>
	}
}
