//! Thin wrappers over the browser APIs the site touches.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
	Blob, BlobPropertyBag, Document, HtmlAnchorElement, ScrollBehavior, ScrollToOptions, Url,
	Window,
};

use crate::error::{Result, SiteError, js_message};

/// Height of the sticky navigation bar, kept clear when scrolling to anchors.
pub const HEADER_OFFSET: f64 = 72.0;

/// The global window.
pub fn window() -> Result<Window> {
	web_sys::window().ok_or(SiteError::NoWindow)
}

/// The window's document.
pub fn document() -> Result<Document> {
	window()?.document().ok_or(SiteError::NoDocument)
}

/// Writes `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<()> {
	let clipboard = window()?.navigator().clipboard();
	JsFuture::from(clipboard.write_text(text))
		.await
		.map(|_| ())
		.map_err(|err| SiteError::Clipboard(js_message(&err)))
}

/// Offers `contents` to the user as a file download named `filename`.
pub fn download_text(filename: &str, contents: &str, mime: &str) -> Result<()> {
	let download_err = |err: JsValue| SiteError::Download(js_message(&err));

	let options = BlobPropertyBag::new();
	options.set_type(mime);
	let parts = js_sys::Array::of1(&JsValue::from_str(contents));
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(download_err)?;
	let url = Url::create_object_url_with_blob(&blob).map_err(download_err)?;

	let anchor: HtmlAnchorElement = document()?
		.create_element("a")?
		.dyn_into()
		.map_err(|_| SiteError::Download("anchor element has unexpected type".into()))?;
	anchor.set_href(&url);
	anchor.set_download(filename);
	anchor.click();

	Url::revoke_object_url(&url).map_err(download_err)?;
	log::debug!("offered download {filename} ({} bytes)", contents.len());
	Ok(())
}

/// Smoothly scrolls the window to an absolute vertical offset.
pub fn smooth_scroll_to(top: f64) -> Result<()> {
	let options = ScrollToOptions::new();
	options.set_top(top.max(0.0));
	options.set_behavior(ScrollBehavior::Smooth);
	window()?.scroll_to_with_scroll_to_options(&options);
	Ok(())
}

/// Smoothly scrolls so the element with `id` sits just below the header.
pub fn scroll_to_section(id: &str) -> Result<()> {
	let window = window()?;
	let element = document()?
		.get_element_by_id(id)
		.ok_or_else(|| SiteError::MissingElement(id.to_string()))?;
	let top = element.get_bounding_client_rect().top() + window.scroll_y()? - HEADER_OFFSET;
	smooth_scroll_to(top)
}
