//! Docs sidebar navigation: active-section tracking and reading progress.

use std::collections::HashSet;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::browser;

/// Tracks which documentation sections intersect the viewport.
#[derive(Clone, Debug)]
pub struct ScrollSpy {
	sections: Vec<&'static str>,
	visible: HashSet<&'static str>,
	active: Option<&'static str>,
}

impl ScrollSpy {
	/// Starts with the first section active.
	pub fn new(sections: &[&'static str]) -> Self {
		Self {
			sections: sections.to_vec(),
			visible: HashSet::new(),
			active: sections.first().copied(),
		}
	}

	/// Records an intersection change and returns the active section.
	/// Unknown ids are ignored.
	pub fn observe(&mut self, id: &str, intersecting: bool) -> Option<&'static str> {
		if let Some(&known) = self.sections.iter().find(|s| **s == id) {
			if intersecting {
				self.visible.insert(known);
			} else {
				self.visible.remove(known);
			}
		}
		if let Some(first) = self
			.sections
			.iter()
			.copied()
			.find(|s| self.visible.contains(s))
		{
			self.active = Some(first);
		}
		self.active
	}

	/// Marks `id` active directly, as when a sidebar link is clicked.
	pub fn activate(&mut self, id: &str) -> Option<&'static str> {
		if let Some(&known) = self.sections.iter().find(|s| **s == id) {
			self.active = Some(known);
		}
		self.active
	}

	/// Currently active section.
	pub fn active(&self) -> Option<&'static str> {
		self.active
	}
}

/// Fraction of the page scrolled past, in `[0, 1]`. A page that fits in the
/// viewport counts as fully read.
pub fn reading_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
	let scrollable = scroll_height - client_height;
	if scrollable <= 0.0 {
		return 1.0;
	}
	(scroll_top / scrollable).clamp(0.0, 1.0)
}

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocSection {
	/// Element id of the section.
	pub id: &'static str,
	/// Sidebar text.
	pub title: &'static str,
}

type Observer = (IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>);

/// Sidebar with scroll-spy highlighting and a reading progress bar.
#[component]
pub fn DocsSidebar(
	/// Sections in page order.
	sections: &'static [DocSection],
) -> impl IntoView {
	let ids: Vec<&'static str> = sections.iter().map(|s| s.id).collect();
	let (active, set_active) = signal(ids.first().copied());
	let (progress, set_progress) = signal(0.0_f64);
	let spy = StoredValue::new(ScrollSpy::new(&ids));
	let observer = StoredValue::new_local(None::<Observer>);

	let scroll = window_event_listener(ev::scroll, move |_| {
		let Ok(window) = browser::window() else {
			return;
		};
		let Some(root) = window.document().and_then(|d| d.document_element()) else {
			return;
		};
		let top = window.scroll_y().unwrap_or_default();
		set_progress.set(reading_progress(
			top,
			f64::from(root.scroll_height()),
			f64::from(root.client_height()),
		));
	});

	on_cleanup(move || {
		scroll.remove();
		if let Some((obs, _callback)) = observer.try_update_value(Option::take).flatten() {
			obs.disconnect();
		}
	});

	Effect::new(move |_| {
		let Ok(document) = browser::document() else {
			return;
		};
		let on_intersect = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				let id = entry.target().id();
				let next = spy
					.try_update_value(|spy| spy.observe(&id, entry.is_intersecting()))
					.flatten();
				set_active.set(next);
			}
		});
		let options = IntersectionObserverInit::new();
		options.set_root_margin("-72px 0px -60% 0px");
		let obs = match IntersectionObserver::new_with_options(
			on_intersect.as_ref().unchecked_ref(),
			&options,
		) {
			Ok(obs) => obs,
			Err(err) => {
				log::warn!("scroll spy unavailable: {}", crate::error::js_message(&err));
				return;
			}
		};
		for id in &ids {
			if let Some(element) = document.get_element_by_id(id) {
				obs.observe(&element);
			}
		}
		let previous = observer
			.try_update_value(|slot| slot.replace((obs, on_intersect)))
			.flatten();
		if let Some((stale, _)) = previous {
			stale.disconnect();
		}
	});

	view! {
		<aside class="docs-sidebar">
			<div class="reading-progress">
				<div
					class="reading-progress-bar"
					style=move || format!("width: {:.1}%;", progress.get() * 100.0)
				></div>
			</div>
			<nav>
				<ul>
					{sections
						.iter()
						.map(|section| {
							let id = section.id;
							let on_click = move |ev: web_sys::MouseEvent| {
								ev.prevent_default();
								spy.update_value(|spy| {
									spy.activate(id);
								});
								set_active.set(Some(id));
								if let Err(err) = browser::scroll_to_section(id) {
									log::warn!("could not scroll to {id}: {err}");
								}
							};
							view! {
								<li>
									<a
										href=format!("#{id}")
										class=move || {
											if active.get() == Some(id) { "docs-link active" } else { "docs-link" }
										}
										on:click=on_click
									>
										{section.title}
									</a>
								</li>
							}
						})
						.collect_view()}
				</ul>
			</nav>
		</aside>
	}
}
