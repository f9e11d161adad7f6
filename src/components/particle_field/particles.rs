//! Particle state and motion.
//!
//! The field is a flat `Vec<Particle>` sized from the viewport area. It is
//! rebuilt wholesale on resize and otherwise only mutated in place.

use rand::Rng;

use super::config::FieldConfig;

/// A single drifting particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Radius, fixed at creation.
	pub r: f64,
}

impl Particle {
	/// Advance one frame and reflect off the viewport edges.
	///
	/// The bounds check runs after the move and only flips velocity, so a
	/// particle can sit past an edge for one frame before heading back.
	pub fn step(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;
		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}
	}

	/// Squared distance to another particle.
	pub fn distance_sq(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		dx * dx + dy * dy
	}
}

/// A pair of particles close enough to be joined by a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	/// `1 - dist_sq / threshold_sq`, in `(0, 1]`.
	pub opacity: f64,
}

/// Number of particles for a logical viewport size.
///
/// One particle per `area_per_particle` square pixels, capped at
/// `max_particles`. Degenerate sizes (zero, negative, NaN) give zero.
pub fn particle_count(config: &FieldConfig, width: f64, height: f64) -> usize {
	let count = ((width * height) / config.area_per_particle).floor();
	if count.is_nan() || count <= 0.0 {
		return 0;
	}
	// Float-to-int `as` saturates, so an infinite count lands on the cap.
	(count as usize).min(config.max_particles)
}

/// Link opacity for a squared distance, or `None` at or past the threshold.
pub fn link_opacity(dist_sq: f64, threshold_sq: f64) -> Option<f64> {
	(dist_sq < threshold_sq).then(|| 1.0 - dist_sq / threshold_sq)
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
	min + rng.r#gen::<f64>() * (max - min)
}

/// Manages the background particles for one viewport.
#[derive(Clone, Debug)]
pub struct ParticleField {
	config: FieldConfig,
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Empty field with zero size. Call [`rebuild`](Self::rebuild) before use.
	pub fn new(config: FieldConfig) -> Self {
		Self {
			config,
			particles: Vec::new(),
			width: 0.0,
			height: 0.0,
		}
	}

	/// Replace every particle with a fresh random set for a new viewport.
	///
	/// Old particles are discarded, not rescaled.
	pub fn rebuild<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.width = width;
		self.height = height;

		let count = particle_count(&self.config, width, height);
		let speed = self.config.max_speed;
		let (r_min, r_max) = (self.config.radius_min, self.config.radius_max);

		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			self.particles.push(Particle {
				x: uniform(rng, 0.0, width),
				y: uniform(rng, 0.0, height),
				vx: uniform(rng, -speed, speed),
				vy: uniform(rng, -speed, speed),
				r: uniform(rng, r_min, r_max),
			});
		}
	}

	/// All pairs closer than the link distance, each unordered pair once.
	pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
		let threshold_sq = self.config.link_threshold_sq();
		let particles = &self.particles;
		(0..particles.len()).flat_map(move |a| {
			(a + 1..particles.len()).filter_map(move |b| {
				link_opacity(particles[a].distance_sq(&particles[b]), threshold_sq)
					.map(|opacity| Link { a, b, opacity })
			})
		})
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Mutable view for seeding specific layouts. The count stays fixed.
	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle { x, y, vx, vy, r: 1.5 }
	}

	#[test]
	fn count_follows_area() {
		let config = FieldConfig::default();
		assert_eq!(particle_count(&config, 1200.0, 800.0), 106);
		assert_eq!(particle_count(&config, 90.0, 100.0), 1);
		assert_eq!(particle_count(&config, 89.0, 100.0), 0);
		assert_eq!(particle_count(&config, 1920.0, 1080.0), 180);
		assert_eq!(particle_count(&config, 0.0, 800.0), 0);
		assert_eq!(particle_count(&config, -1200.0, 800.0), 0);
		assert_eq!(particle_count(&config, f64::NAN, 800.0), 0);
		assert_eq!(particle_count(&config, f64::INFINITY, 800.0), 180);
	}

	#[test]
	fn count_never_exceeds_cap() {
		let config = FieldConfig::default();
		for w in (0..4000).step_by(137) {
			for h in (0..3000).step_by(211) {
				let (w, h) = (w as f64, h as f64);
				let expected = ((w * h / 9000.0).floor() as usize).min(180);
				assert_eq!(particle_count(&config, w, h), expected, "{w}x{h}");
			}
		}
	}

	#[test]
	fn step_flips_only_after_crossing() {
		let mut p = particle(99.5, 50.0, 0.35, 0.0);
		p.step(100.0, 100.0);
		assert!(p.x < 100.0);
		assert_eq!(p.vx, 0.35);

		p.step(100.0, 100.0);
		assert!(p.x > 100.0, "position is not clamped");
		assert_eq!(p.vx, -0.35);

		p.step(100.0, 100.0);
		assert!(p.x < 100.0);
		assert_eq!(p.vx, -0.35);
	}

	#[test]
	fn step_reflects_top_and_left() {
		let mut p = particle(0.1, 0.5, -0.3, -0.3);
		p.step(100.0, 100.0);
		assert_eq!((p.vx, p.vy), (0.3, -0.3));
		p.step(100.0, 100.0);
		assert_eq!((p.vx, p.vy), (0.3, 0.3));
	}

	#[test]
	fn link_opacity_scenarios() {
		assert_eq!(link_opacity(3600.0, 14400.0), Some(0.75));
		assert_eq!(link_opacity(0.0, 14400.0), Some(1.0));
		assert_eq!(link_opacity(14400.0, 14400.0), None);
		assert_eq!(link_opacity(20000.0, 14400.0), None);

		let mut last = f64::INFINITY;
		for d in (0..14400).step_by(100) {
			let opacity = link_opacity(d as f64, 14400.0).unwrap();
			assert!(opacity < last);
			last = opacity;
		}
	}

	#[test]
	fn rebuild_respects_ranges() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut field = ParticleField::new(FieldConfig::default());
		field.rebuild(1200.0, 800.0, &mut rng);

		assert_eq!(field.particles().len(), 106);
		for p in field.particles() {
			assert!((0.0..=1200.0).contains(&p.x));
			assert!((0.0..=800.0).contains(&p.y));
			assert!((-0.35..=0.35).contains(&p.vx));
			assert!((-0.35..=0.35).contains(&p.vy));
			assert!((1.0..=2.2).contains(&p.r));
		}
	}

	#[test]
	fn links_visit_each_close_pair_once() {
		let mut rng = StdRng::seed_from_u64(1);
		let mut field = ParticleField::new(FieldConfig::default());
		field.rebuild(90.0, 300.0, &mut rng);
		assert_eq!(field.particles().len(), 3);

		let layout = [
			particle(0.0, 0.0, 0.0, 0.0),
			particle(60.0, 0.0, 0.0, 0.0),
			particle(0.0, 200.0, 0.0, 0.0),
		];
		field.particles_mut().copy_from_slice(&layout);

		let links: Vec<_> = field.links().collect();
		assert_eq!(
			links,
			vec![Link {
				a: 0,
				b: 1,
				opacity: 0.75
			}]
		);
	}
}
