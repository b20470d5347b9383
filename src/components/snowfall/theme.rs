//! Theme-aware snow coloring.
//!
//! The page advertises its color scheme through an attribute on the root
//! element. The overlay reads it through a [`ThemeProvider`] every frame, so a
//! theme toggle shows up on the next draw without any signaling.

use super::config::{DARK_COLOR, DARK_THEME_VALUE, LIGHT_COLOR, THEME_ATTRIBUTE};

/// Opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	/// Opaque color from 8-bit channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// CSS hex color string.
	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Page color scheme as far as the overlay cares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	/// Default when the attribute is absent or unrecognized.
	#[default]
	Light,
	/// Selected by `data-theme="dark"`.
	Dark,
}

impl ThemeMode {
	/// Only the exact value `"dark"` selects dark mode; anything else,
	/// including a missing attribute, is light.
	pub fn from_attribute(value: Option<&str>) -> Self {
		match value {
			Some(DARK_THEME_VALUE) => ThemeMode::Dark,
			_ => ThemeMode::Light,
		}
	}

	/// Snowflake color that stays visible against this scheme.
	pub fn snow_color(self) -> Color {
		match self {
			ThemeMode::Light => LIGHT_COLOR,
			ThemeMode::Dark => DARK_COLOR,
		}
	}
}

/// Source of the current theme.
pub trait ThemeProvider {
	/// Theme in effect right now.
	fn mode(&self) -> ThemeMode;
}

/// Reads `data-theme` from `document.documentElement` on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTheme;

impl ThemeProvider for DocumentTheme {
	fn mode(&self) -> ThemeMode {
		let value = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.document_element())
			.and_then(|root| root.get_attribute(THEME_ATTRIBUTE));
		ThemeMode::from_attribute(value.as_deref())
	}
}

/// A theme that never changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedTheme(pub ThemeMode);

impl ThemeProvider for FixedTheme {
	fn mode(&self) -> ThemeMode {
		self.0
	}
}

/// Resolve the snow color for the provider's current theme. Not cached.
pub fn snow_color(theme: &dyn ThemeProvider) -> Color {
	theme.mode().snow_color()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dark_attribute_selects_white() {
		assert_eq!(ThemeMode::from_attribute(Some("dark")), ThemeMode::Dark);
		assert_eq!(snow_color(&FixedTheme(ThemeMode::Dark)).to_css(), "#ffffff");
	}

	#[test]
	fn anything_else_is_light() {
		for value in [None, Some("light"), Some(""), Some("Dark"), Some("dark ")] {
			assert_eq!(ThemeMode::from_attribute(value), ThemeMode::Light, "{value:?}");
		}
		assert_eq!(snow_color(&FixedTheme(ThemeMode::Light)).to_css(), "#94a3b8");
	}

	#[test]
	fn css_is_zero_padded_hex() {
		assert_eq!(Color::rgb(0, 10, 255).to_css(), "#000aff");
	}
}
