//! Falling snowflake particles.

use super::config::{RADIUS_MIN, RADIUS_SPREAD, RESPAWN_Y, SPEED, WIND, WRAP_MARGIN};

/// A single snowflake.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in surface pixels.
	pub x: f64,
	/// Vertical position in surface pixels.
	pub y: f64,
	/// Glyph size factor in `[1, 3)`, fixed for the particle's lifetime.
	pub radius: f64,
	/// Carried through recycling but not used by motion.
	pub density: f64,
	/// Horizontal drift per frame.
	pub vx: f64,
	/// Fall speed per frame, always at least 1.
	pub vy: f64,
}

/// Owns the snowflakes, the bounds they fall within and their random source.
pub struct ParticleSystem {
	particles: Vec<Particle>,
	count: usize,
	width: f64,
	height: f64,
	rng: fastrand::Rng,
}

impl ParticleSystem {
	/// Seed `count` flakes across a `width` x `height` surface.
	pub fn new(count: usize, width: f64, height: f64, rng: fastrand::Rng) -> Self {
		let mut system = Self {
			particles: Vec::with_capacity(count),
			count,
			width,
			height,
			rng,
		};
		system.recreate();
		system
	}

	/// Throw away every particle and seed a fresh set across the current bounds.
	pub fn recreate(&mut self) {
		self.particles.clear();
		for _ in 0..self.count {
			let particle = Particle {
				x: self.rng.f64() * self.width,
				y: self.rng.f64() * self.height,
				radius: self.rng.f64() * RADIUS_SPREAD + RADIUS_MIN,
				density: self.rng.f64() * self.count as f64,
				vx: (self.rng.f64() - 0.5) * WIND,
				vy: self.rng.f64() * SPEED + 1.0,
			};
			self.particles.push(particle);
		}
	}

	/// Advance every particle one frame.
	///
	/// Flakes that fall below the bottom edge re-enter at [`RESPAWN_Y`] with a
	/// new random `x`, keeping their size and velocity. Flakes that drift more
	/// than [`WRAP_MARGIN`] past a side edge reappear on the opposite side.
	pub fn update(&mut self) {
		let (width, height) = (self.width, self.height);
		for p in &mut self.particles {
			p.y += p.vy;
			p.x += p.vx;

			if p.y > height {
				*p = Particle {
					x: self.rng.f64() * width,
					y: RESPAWN_Y,
					..*p
				};
			}

			if p.x > width + WRAP_MARGIN {
				p.x = -WRAP_MARGIN;
			} else if p.x < -WRAP_MARGIN {
				p.x = width + WRAP_MARGIN;
			}
		}
	}

	/// Adopt new bounds. Positions are left alone; the next update uses the
	/// new edges for recycling and wrapping.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Flakes in draw order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Current surface width.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Current surface height.
	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::snowfall::config::PARTICLE_COUNT;

	fn system(width: f64, height: f64) -> ParticleSystem {
		ParticleSystem::new(PARTICLE_COUNT, width, height, fastrand::Rng::with_seed(7))
	}

	fn single(p: Particle, width: f64, height: f64) -> ParticleSystem {
		let mut ps = system(width, height);
		ps.particles = vec![p];
		ps
	}

	fn flake(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			radius: 2.0,
			density: 12.0,
			vx,
			vy,
		}
	}

	#[test]
	fn seeds_configured_count_inside_viewport() {
		let ps = system(800.0, 600.0);
		assert_eq!(ps.particles().len(), 50);
		for p in ps.particles() {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((1.0..3.0).contains(&p.radius));
			assert!((0.0..50.0).contains(&p.density));
			assert!((-0.25..0.25).contains(&p.vx));
			assert!((1.0..2.0).contains(&p.vy));
		}
	}

	#[test]
	fn recreate_replaces_the_whole_set() {
		let mut ps = system(800.0, 600.0);
		let before = ps.particles().to_vec();
		ps.recreate();
		assert_eq!(ps.particles().len(), PARTICLE_COUNT);
		assert_ne!(ps.particles(), &before[..]);
	}

	#[test]
	fn moves_by_velocity() {
		let mut ps = single(flake(100.0, 100.0, 0.2, 1.5), 800.0, 600.0);
		ps.update();
		let p = ps.particles()[0];
		assert!((p.x - 100.2).abs() < 1e-9);
		assert!((p.y - 101.5).abs() < 1e-9);
	}

	#[test]
	fn recycles_after_leaving_bottom() {
		let mut ps = single(flake(400.0, 598.0, 0.1, 3.0), 800.0, 600.0);
		ps.update();
		let p = ps.particles()[0];
		assert_eq!(p.y, RESPAWN_Y);
		assert!((0.0..800.0).contains(&p.x));
		assert_eq!((p.radius, p.density, p.vx, p.vy), (2.0, 12.0, 0.1, 3.0));
	}

	#[test]
	fn exactly_at_bottom_is_not_recycled() {
		let mut ps = single(flake(400.0, 597.0, 0.0, 3.0), 800.0, 600.0);
		ps.update();
		assert_eq!(ps.particles()[0].y, 600.0);
	}

	#[test]
	fn wraps_past_right_margin() {
		let mut ps = single(flake(805.0, 10.0, 0.2, 1.0), 800.0, 600.0);
		ps.update();
		assert_eq!(ps.particles()[0].x, -5.0);
	}

	#[test]
	fn wraps_past_left_margin() {
		let mut ps = single(flake(-5.0, 10.0, -0.2, 1.0), 800.0, 600.0);
		ps.update();
		assert_eq!(ps.particles()[0].x, 805.0);
	}

	#[test]
	fn wrap_boundary_is_width_plus_margin() {
		let mut ps = single(flake(803.0, 10.0, 0.2, 1.0), 800.0, 600.0);
		ps.update();
		assert!((ps.particles()[0].x - 803.2).abs() < 1e-9);
	}

	#[test]
	fn invariants_hold_over_many_frames() {
		let mut ps = system(320.0, 240.0);
		let radii: Vec<f64> = ps.particles().iter().map(|p| p.radius).collect();
		for _ in 0..2_000 {
			ps.update();
			assert_eq!(ps.particles().len(), PARTICLE_COUNT);
			for (p, r) in ps.particles().iter().zip(&radii) {
				assert_eq!(p.radius, *r);
				assert!(p.x >= -WRAP_MARGIN && p.x <= 320.0 + WRAP_MARGIN);
				assert!(p.y >= RESPAWN_Y && p.y <= 240.0);
			}
		}
	}

	#[test]
	fn resize_applies_to_next_update() {
		let mut ps = single(flake(900.0, 700.0, 0.0, 1.0), 800.0, 600.0);
		ps.resize(1024.0, 768.0);
		ps.update();
		let p = ps.particles()[0];
		assert_eq!((p.x, p.y), (900.0, 701.0));

		ps.particles[0] = flake(1030.0, 768.0, 0.0, 1.0);
		ps.update();
		let p = ps.particles()[0];
		assert_eq!(p.y, RESPAWN_Y);
		assert!((0.0..1024.0).contains(&p.x));
		assert_eq!((ps.width(), ps.height()), (1024.0, 768.0));
	}
}
