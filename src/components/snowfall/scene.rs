//! The snowfall scene: particles plus where and in what color to draw them.

use super::particles::{Particle, ParticleSystem};
use super::render::{self, SnowCanvas};
use super::theme::{self, ThemeProvider};

/// Everything one animation frame touches.
///
/// Created once the surface has real dimensions, then driven by
/// [`Animation`](super::animation::Animation) and resized by the viewport
/// listener.
pub struct SnowScene {
	particles: ParticleSystem,
	canvas: Box<dyn SnowCanvas>,
	theme: Box<dyn ThemeProvider>,
}

impl SnowScene {
	/// Bundle particles with their drawing target and theme source.
	pub fn new(
		particles: ParticleSystem,
		canvas: Box<dyn SnowCanvas>,
		theme: Box<dyn ThemeProvider>,
	) -> Self {
		Self {
			particles,
			canvas,
			theme,
		}
	}

	/// Draw the current positions, then advance them.
	pub fn frame(&mut self) {
		let color = theme::snow_color(self.theme.as_ref());
		render::draw(self.canvas.as_ref(), &self.particles, color);
		self.particles.update();
	}

	/// Adopt new surface bounds.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.particles.resize(width, height);
	}

	/// Current flakes.
	pub fn particles(&self) -> &[Particle] {
		self.particles.particles()
	}
}
