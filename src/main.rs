use console_error_panic_hook as _;
use console_log as _;
use js_sys as _;
use leptos::prelude::*;
use leptos_meta as _;
use leptos_router as _;
use log as _;
use tfgraph_site::{App, init_logging};
use thiserror as _;
use wasm_bindgen as _;
use wasm_bindgen_futures as _;
use web_sys as _;

fn main() {
	init_logging();
	leptos::mount::mount_to_body(|| view! { <App /> });
}
