//! Canvas rendering for the snowfall.
//!
//! Each frame is a full clear followed by one text glyph per particle. The
//! drawing target is abstracted behind [`SnowCanvas`] so the frame sequence
//! can be checked without a browser.

use web_sys::CanvasRenderingContext2d;

use super::config::{FONT_FAMILY, GLYPH, GLYPH_SCALE};
use super::particles::ParticleSystem;
use super::theme::Color;

/// The handful of 2d-context operations the renderer needs.
pub trait SnowCanvas {
	/// Wipe `(0, 0, width, height)`.
	fn clear(&self, width: f64, height: f64);
	fn set_fill_color(&self, css: &str);
	fn set_font(&self, font: &str);
	/// Draw `glyph` with its baseline origin at `(x, y)`.
	fn fill_glyph(&self, glyph: &str, x: f64, y: f64);
}

impl SnowCanvas for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn set_fill_color(&self, css: &str) {
		self.set_fill_style_str(css);
	}

	fn set_font(&self, font: &str) {
		CanvasRenderingContext2d::set_font(self, font);
	}

	fn fill_glyph(&self, glyph: &str, x: f64, y: f64) {
		let _ = self.fill_text(glyph, x, y);
	}
}

/// CSS font shorthand for a flake of the given radius.
pub fn glyph_font(radius: f64) -> String {
	format!("{}px {}", radius * GLYPH_SCALE, FONT_FAMILY)
}

/// Clears the surface and draws every particle in `color`.
pub fn draw(canvas: &dyn SnowCanvas, particles: &ParticleSystem, color: Color) {
	canvas.clear(particles.width(), particles.height());
	canvas.set_fill_color(&color.to_css());

	for p in particles.particles() {
		canvas.set_font(&glyph_font(p.radius));
		canvas.fill_glyph(GLYPH, p.x, p.y);
	}
}
