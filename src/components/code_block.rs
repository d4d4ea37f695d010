use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;

const TOAST_DURATION: Duration = Duration::from_millis(2000);

/// Themed code block with copy and optional download buttons.
#[component]
pub fn CodeBlock(
	/// Language shown in the badge, e.g. `bash` or `toml`.
	language: &'static str,
	/// Code to show and copy.
	#[prop(into)]
	code: Signal<String>,
	/// File name offered by the download button; no button when absent.
	#[prop(optional)]
	download_as: Option<&'static str>,
) -> impl IntoView {
	let (copied, set_copied) = signal(false);
	let toast = StoredValue::new(None::<TimeoutHandle>);
	let clear_toast = move || {
		if let Some(handle) = toast.try_update_value(Option::take).flatten() {
			handle.clear();
		}
	};
	on_cleanup(clear_toast);

	let copy = move |_| {
		let text = code.get_untracked();
		spawn_local(async move {
			match browser::copy_to_clipboard(&text).await {
				Ok(()) => {
					clear_toast();
					set_copied.set(true);
					match set_timeout_with_handle(move || set_copied.set(false), TOAST_DURATION) {
						Ok(handle) => {
							if toast.try_update_value(|slot| *slot = Some(handle)).is_none() {
								handle.clear();
							}
						}
						Err(err) => {
							log::warn!("toast timer failed: {}", crate::error::js_message(&err));
						}
					}
				}
				Err(err) => log::warn!("copy failed: {err}"),
			}
		});
	};

	let download = download_as.map(|filename| {
		let on_download = move |_| {
			let text = code.get_untracked();
			if let Err(err) = browser::download_text(filename, &text, "text/plain") {
				log::warn!("download of {filename} failed: {err}");
			}
		};
		view! {
			<button class="code-action" on:click=on_download>
				"download"
			</button>
		}
	});

	view! {
		<div class=format!("code-block theme-{language}")>
			<div class="code-block-header">
				<span class="code-lang">{language}</span>
				<div class="code-actions">
					{download}
					<button class="code-action" on:click=copy>
						{move || if copied.get() { "copied" } else { "copy" }}
					</button>
				</div>
			</div>
			<pre class="code-block-content">
				<code>{move || code.get()}</code>
			</pre>
			<Show when=move || copied.get()>
				<div class="toast" role="status">"Copied to clipboard"</div>
			</Show>
		</div>
	}
}
