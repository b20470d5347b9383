//! Decorative snowfall overlay.
//!
//! Draws a fixed number of snowflake glyphs on a click-through canvas that
//! covers the viewport:
//! - Flakes fall at a constant per-flake speed with a slight horizontal drift
//! - Flakes leaving the bottom re-enter at the top; side edges wrap
//! - Color follows the page's `data-theme` attribute, checked every frame
//!
//! # Example
//!
//! ```ignore
//! use snowfall::SnowfallCanvas;
//!
//! mount_to_body(|| view! { <SnowfallCanvas /> });
//! ```
//!
//! Outside a browser the pieces compose directly:
//!
//! ```ignore
//! let particles = ParticleSystem::new(PARTICLE_COUNT, 800.0, 600.0, fastrand::Rng::new());
//! let scene = SnowScene::new(particles, Box::new(ctx), Box::new(FixedTheme(ThemeMode::Dark)));
//! Animation::new(scene, Rc::new(AnimationFrameScheduler)).start();
//! ```

pub mod animation;
mod component;
pub mod config;
pub mod particles;
pub mod render;
pub mod scene;
pub mod scheduler;
pub mod surface;
pub mod theme;

pub use animation::Animation;
pub use component::SnowfallCanvas;
pub use particles::{Particle, ParticleSystem};
pub use scene::SnowScene;
pub use scheduler::{AnimationFrameScheduler, FrameScheduler};
pub use theme::{Color, DocumentTheme, FixedTheme, ThemeMode, ThemeProvider};
