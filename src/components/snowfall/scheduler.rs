//! Frame scheduling.
//!
//! The animation only needs "run this once, before the next repaint". In the
//! browser that is `requestAnimationFrame`; tests queue callbacks and run them
//! by hand.

use wasm_bindgen::prelude::*;

use crate::error::SnowError;

/// Runs a callback once at the next frame boundary.
pub trait FrameScheduler {
	/// Queue `callback`; an error means it will never run.
	fn schedule(&self, callback: Box<dyn FnOnce()>) -> Result<(), SnowError>;
}

/// Schedules via `window.requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrameScheduler;

impl FrameScheduler for AnimationFrameScheduler {
	fn schedule(&self, callback: Box<dyn FnOnce()>) -> Result<(), SnowError> {
		let window = web_sys::window().ok_or(SnowError::NoWindow)?;
		let cb = Closure::once_into_js(move || callback());
		window.request_animation_frame(cb.unchecked_ref())?;
		Ok(())
	}
}
