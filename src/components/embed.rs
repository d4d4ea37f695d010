//! Iframe embed of a generated report, with a retry path when loading fails.

use leptos::prelude::*;

/// Load state of an embedded visualization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmbedState {
	/// Waiting for the iframe.
	#[default]
	Loading,
	/// The iframe loaded.
	Loaded,
	/// The iframe reported an error.
	Failed,
}

/// Load state plus a nonce that changes on every retry so the iframe reloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Embed {
	state: EmbedState,
	nonce: u32,
}

impl Embed {
	/// Current load state.
	pub fn state(&self) -> EmbedState {
		self.state
	}

	/// Number of retries so far.
	pub fn nonce(&self) -> u32 {
		self.nonce
	}

	/// Iframe finished loading. Late events for a failed attempt are ignored.
	pub fn loaded(&mut self) {
		if self.state == EmbedState::Loading {
			self.state = EmbedState::Loaded;
		}
	}

	/// Iframe reported an error.
	pub fn failed(&mut self) {
		if self.state == EmbedState::Loading {
			self.state = EmbedState::Failed;
		}
	}

	/// Starts a new attempt.
	pub fn retry(&mut self) {
		self.nonce = self.nonce.wrapping_add(1);
		self.state = EmbedState::Loading;
	}

	/// `src` with the retry nonce appended as a cache-busting query parameter.
	pub fn src(&self, base: &str) -> String {
		if self.nonce == 0 {
			return base.to_string();
		}
		let sep = if base.contains('?') { '&' } else { '?' };
		format!("{base}{sep}retry={}", self.nonce)
	}
}

/// Embedded report viewer.
#[component]
pub fn EmbeddedReport(
	/// URL of the report page.
	src: &'static str,
	/// Accessible iframe title.
	title: &'static str,
	/// Frame height in pixels.
	#[prop(default = 480)]
	height: u32,
) -> impl IntoView {
	let (embed, set_embed) = signal(Embed::default());

	let on_load = move |_| set_embed.update(Embed::loaded);
	let on_error = move |_| {
		log::warn!("embedded report {src} failed to load");
		set_embed.update(Embed::failed);
	};
	let on_retry = move |_| {
		set_embed.update(Embed::retry);
		log::debug!("retrying embedded report {src}");
	};

	view! {
		<div class="embed" style=format!("height: {height}px;")>
			<Show when=move || embed.get().state() == EmbedState::Loading>
				<div class="embed-loading">"Loading visualization..."</div>
			</Show>
			<Show
				when=move || embed.get().state() == EmbedState::Failed
				fallback=move || {
					view! {
						<iframe
							src=move || embed.get().src(src)
							title=title
							on:load=on_load
							on:error={on_error}
							{::leptos::tachys::html::attribute::loading("lazy")}
						></iframe>
					}
				}
			>
				<div class="embed-error" role="alert">
					<p>"Failed to load visualization."</p>
					<button class="btn btn-secondary" on:click=on_retry>
						"Retry"
					</button>
				</div>
			</Show>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn load_then_retry_cycle() {
		let mut embed = Embed::default();
		assert_eq!(embed.state(), EmbedState::Loading);
		embed.failed();
		assert_eq!(embed.state(), EmbedState::Failed);
		embed.loaded();
		assert_eq!(embed.state(), EmbedState::Failed);

		embed.retry();
		assert_eq!(embed.state(), EmbedState::Loading);
		assert_eq!(embed.nonce(), 1);
		embed.loaded();
		assert_eq!(embed.state(), EmbedState::Loaded);
		embed.failed();
		assert_eq!(embed.state(), EmbedState::Loaded);
	}

	#[test]
	fn retries_change_src() {
		let mut embed = Embed::default();
		assert_eq!(embed.src("/report.html"), "/report.html");
		embed.retry();
		assert_eq!(embed.src("/report.html"), "/report.html?retry=1");
		embed.retry();
		assert_eq!(embed.src("/report.html?theme=dark"), "/report.html?theme=dark&retry=2");
	}
}
