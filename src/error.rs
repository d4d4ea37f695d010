//! Failures of optional browser APIs.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by the browser helpers.
#[derive(Debug, Error)]
pub enum SiteError {
	/// No `window` global, e.g. when running outside a browser.
	#[error("browser window is not available")]
	NoWindow,
	/// The window has no document.
	#[error("document is not available")]
	NoDocument,
	/// No element carries the requested id.
	#[error("element #{0} not found")]
	MissingElement(String),
	/// The async clipboard rejected the write.
	#[error("clipboard write failed: {0}")]
	Clipboard(String),
	/// Building or triggering a file download failed.
	#[error("download failed: {0}")]
	Download(String),
	/// Any other JavaScript exception.
	#[error("javascript error: {0}")]
	Js(String),
}

/// Best-effort text for a thrown JavaScript value.
pub(crate) fn js_message(err: &JsValue) -> String {
	err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl From<JsValue> for SiteError {
	fn from(err: JsValue) -> Self {
		Self::Js(js_message(&err))
	}
}

/// Convenience alias for browser helper results.
pub type Result<T, E = SiteError> = std::result::Result<T, E>;
