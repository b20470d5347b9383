//! Error type for overlay setup and scheduling.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while attaching the overlay to the host page.
///
/// None of these are fatal to the page: callers log them and leave the
/// overlay inert.
#[derive(Debug, Error)]
pub enum SnowError {
	/// No global `window` (not running in a browser context).
	#[error("no window available")]
	NoWindow,
	/// The window has no document attached.
	#[error("no document available")]
	NoDocument,
	/// The canvas refused to hand out a 2d rendering context.
	#[error("2d canvas context unavailable")]
	NoContext,
	/// `innerWidth`/`innerHeight` did not resolve to numbers.
	#[error("viewport size unreadable")]
	Viewport,
	/// A JS call threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for SnowError {
	fn from(value: JsValue) -> Self {
		SnowError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
