//! snowfall: theme-aware snowfall overlay for web pages.
//!
//! This crate provides a WASM-based overlay that animates falling snowflake
//! glyphs on a full-viewport 2d canvas above the page content.

use leptos::prelude::*;
use log::{Level, info, warn};
use wasm_bindgen::prelude::*;

pub mod components;
pub mod error;

pub use components::snowfall::{Animation, SnowScene, SnowfallCanvas};
pub use error::SnowError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("snowfall: logging initialized");
}

/// Mount the overlay once the document has parsed.
///
/// Mounts immediately when the page is already interactive, otherwise waits
/// for `DOMContentLoaded`.
pub fn mount_when_ready() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		warn!("snowfall: no document, overlay not mounted");
		return;
	};

	if should_defer(&document.ready_state()) {
		let on_ready = Closure::once_into_js(mount_overlay);
		if let Err(e) =
			document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
		{
			warn!("snowfall: could not wait for DOMContentLoaded: {:?}", e);
		}
	} else {
		mount_overlay();
	}
}

/// Only a still-parsing document needs to wait; `interactive` and `complete`
/// already have a `<body>` to mount into.
fn should_defer(ready_state: &str) -> bool {
	ready_state == "loading"
}

/// Append the overlay canvas to `<body>`. It is never removed.
fn mount_overlay() {
	info!("snowfall: mounting overlay");
	mount_to_body(|| {
		view! { <SnowfallCanvas /> }
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn waits_only_while_document_is_loading() {
		assert!(should_defer("loading"));
		assert!(!should_defer("interactive"));
		assert!(!should_defer("complete"));
	}
}
