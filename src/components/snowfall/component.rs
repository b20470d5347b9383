//! Leptos component that mounts the snowfall canvas.
//!
//! The component renders a fixed, click-through canvas over the whole page.
//! Once the element exists it is sized to the viewport, seeded with particles
//! and handed to an [`Animation`] driven by `requestAnimationFrame`. A window
//! `resize` listener keeps the canvas and the particle bounds in step.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::animation::Animation;
use super::config::{OVERLAY_STYLE, PARTICLE_COUNT};
use super::particles::ParticleSystem;
use super::scene::SnowScene;
use super::scheduler::AnimationFrameScheduler;
use super::surface::Surface;
use super::theme::DocumentTheme;
use crate::error::SnowError;

/// Live overlay state kept alive by the component.
struct Overlay {
	_animation: Animation,
	_on_resize: Closure<dyn FnMut()>,
}

/// Full-viewport snowfall overlay.
///
/// Purely decorative: pointer events pass through and it stacks above page
/// content. If the browser cannot provide a 2d canvas the element stays blank.
#[component]
pub fn SnowfallCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let overlay: Rc<RefCell<Option<Overlay>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if overlay.borrow().is_some() {
			return;
		}
		match start(canvas.into()) {
			Ok(o) => *overlay.borrow_mut() = Some(o),
			Err(e) => warn!("snowfall: overlay disabled: {}", e),
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="snowfall-canvas"
			aria-hidden="true"
			style=OVERLAY_STYLE
		/>
	}
}

fn start(canvas: HtmlCanvasElement) -> Result<Overlay, SnowError> {
	let surface = Surface::new(canvas)?;
	let ctx = surface.context()?;
	let (w, h) = surface.size();

	let particles = ParticleSystem::new(PARTICLE_COUNT, w, h, seeded_rng());
	let scene = SnowScene::new(particles, Box::new(ctx), Box::new(DocumentTheme));
	let animation = Animation::new(scene, Rc::new(AnimationFrameScheduler));

	let scene_resize = animation.scene();
	let on_resize = Closure::<dyn FnMut()>::new(move || match surface.resize() {
		Ok((nw, nh)) => {
			debug!("snowfall: resized to {}x{}", nw, nh);
			scene_resize.borrow_mut().resize(nw, nh);
		}
		Err(e) => warn!("snowfall: resize failed: {}", e),
	});
	web_sys::window()
		.ok_or(SnowError::NoWindow)?
		.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

	animation.start();
	Ok(Overlay {
		_animation: animation,
		_on_resize: on_resize,
	})
}

fn seeded_rng() -> fastrand::Rng {
	fastrand::Rng::with_seed((js_sys::Math::random() * u64::MAX as f64) as u64)
}
