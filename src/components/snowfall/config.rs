//! Fixed snowfall parameters.
//!
//! These are compile-time constants; nothing at runtime overrides them.

use super::theme::Color;

// Particles
/// Number of flakes on screen at all times.
pub const PARTICLE_COUNT: usize = 50;
/// Added on top of the 1px/frame base fall speed.
pub const SPEED: f64 = 1.0;
/// Full width of the horizontal drift range, centered on zero.
pub const WIND: f64 = 0.5;
/// Smallest flake radius.
pub const RADIUS_MIN: f64 = 1.0;
/// Radii are drawn from `[RADIUS_MIN, RADIUS_MIN + RADIUS_SPREAD)`.
pub const RADIUS_SPREAD: f64 = 2.0;

// Motion bounds
/// Height a recycled flake re-enters from, just above the top edge.
pub const RESPAWN_Y: f64 = -10.0;
/// How far past a side edge a flake may drift before wrapping.
pub const WRAP_MARGIN: f64 = 5.0;

// Glyph
/// Drawn as text, no image asset.
pub const GLYPH: &str = "❄";
/// Font size in px per unit of radius.
pub const GLYPH_SCALE: f64 = 5.0;
/// Font family for the glyph.
pub const FONT_FAMILY: &str = "sans-serif";

// Theme
/// Root-element attribute carrying the page theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Attribute value that selects [`DARK_COLOR`].
pub const DARK_THEME_VALUE: &str = "dark";
/// Slate 400, visible on white.
pub const LIGHT_COLOR: Color = Color::rgb(0x94, 0xa3, 0xb8);
/// White, visible on dark backgrounds.
pub const DARK_COLOR: Color = Color::rgb(0xff, 0xff, 0xff);

// Surface
/// Inline style for the fixed, click-through overlay canvas.
pub const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
	pointer-events: none; z-index: 9999;";
