//! The full-viewport canvas the overlay draws into.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::error::SnowError;

/// Owns the overlay canvas and keeps its pixel size matched to the viewport.
pub struct Surface {
	canvas: HtmlCanvasElement,
	window: Window,
}

impl Surface {
	/// Wrap an already-mounted canvas and size it to the viewport.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SnowError> {
		let window = web_sys::window().ok_or(SnowError::NoWindow)?;
		let surface = Self { canvas, window };
		surface.resize()?;
		Ok(surface)
	}

	/// The canvas's 2d drawing context.
	pub fn context(&self) -> Result<CanvasRenderingContext2d, SnowError> {
		self.canvas
			.get_context("2d")?
			.ok_or(SnowError::NoContext)?
			.dyn_into()
			.map_err(|_| SnowError::NoContext)
	}

	/// Current backing size in pixels.
	pub fn size(&self) -> (f64, f64) {
		(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	/// Set the canvas backing size to `innerWidth` x `innerHeight`. This also
	/// wipes the canvas; the next frame redraws it.
	pub fn resize(&self) -> Result<(f64, f64), SnowError> {
		let (w, h) = viewport_size(&self.window)?;
		self.canvas.set_width(w as u32);
		self.canvas.set_height(h as u32);
		Ok((w, h))
	}
}

fn viewport_size(window: &Window) -> Result<(f64, f64), SnowError> {
	let w = window.inner_width()?.as_f64().ok_or(SnowError::Viewport)?;
	let h = window.inner_height()?.as_f64().ok_or(SnowError::Viewport)?;
	Ok((w.floor(), h.floor()))
}
