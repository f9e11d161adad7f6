//! Particle field renderer state.
//!
//! Bundles the particle collection, the drawing surface and the theme behind
//! two operations: [`ParticleRenderer::resize`] for viewport changes and
//! [`ParticleRenderer::tick`] once per animation frame. Both run on the main
//! thread only, from the resize listener and the frame callback.

use log::debug;
use rand::Rng;
use rand::rngs::StdRng;

use super::config::FieldConfig;
use super::particles::ParticleField;
use super::render;
use super::surface::Surface;
use super::theme::Theme;
use super::viewport::normalize_pixel_ratio;

/// Owns everything needed to draw the animated background.
pub struct ParticleRenderer<S: Surface, R: Rng = StdRng> {
	surface: S,
	field: ParticleField,
	theme: Theme,
	rng: R,
	pixel_ratio: f64,
}

impl<S: Surface, R: Rng> ParticleRenderer<S, R> {
	/// Create a renderer with an empty field. Nothing is drawn until the
	/// first [`resize`](Self::resize).
	pub fn new(surface: S, config: FieldConfig, theme: Theme, rng: R) -> Self {
		Self {
			surface,
			field: ParticleField::new(config.sanitized()),
			theme,
			rng,
			pixel_ratio: 1.0,
		}
	}

	/// Adopt a new viewport: resize the surface and rebuild every particle.
	pub fn resize(&mut self, width: f64, height: f64, pixel_ratio: f64) {
		let pixel_ratio = normalize_pixel_ratio(pixel_ratio);
		self.pixel_ratio = pixel_ratio;
		self.surface.configure(width, height, pixel_ratio);
		self.field.rebuild(width, height, &mut self.rng);
		debug!(
			"particle-field: resized to {}x{} @{}x, {} particles",
			width,
			height,
			pixel_ratio,
			self.field.particles().len()
		);
	}

	/// Advance and draw one frame.
	pub fn tick(&mut self) {
		render::render_frame(&mut self.field, &mut self.surface, &self.theme);
	}

	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	pub fn field_mut(&mut self) -> &mut ParticleField {
		&mut self.field
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	/// Pixel ratio from the last resize (1 before the first).
	pub fn pixel_ratio(&self) -> f64 {
		self.pixel_ratio
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::super::particles::Particle;
	use super::super::surface::{DrawOp, Recording};
	use super::*;

	fn renderer(seed: u64) -> ParticleRenderer<Recording> {
		ParticleRenderer::new(
			Recording::new(),
			FieldConfig::default(),
			Theme::default(),
			StdRng::seed_from_u64(seed),
		)
	}

	#[test]
	fn resize_configures_surface_and_rebuilds() {
		let mut r = renderer(3);
		r.resize(1200.0, 800.0, 2.0);

		assert_eq!(r.field().particles().len(), 106);
		assert_eq!(r.surface().backing_size(), (2400, 1600));
		assert_eq!(r.surface().display_size(), (1200.0, 800.0));
		assert_eq!(r.surface().scale(), 2.0);
		assert_eq!(r.pixel_ratio(), 2.0);
	}

	#[test]
	fn count_ignores_pixel_ratio() {
		let mut r = renderer(3);
		r.resize(600.0, 300.0, 3.0);
		assert_eq!(r.field().particles().len(), 20);
	}

	#[test]
	fn invalid_pixel_ratio_falls_back_to_one() {
		let mut r = renderer(3);
		r.resize(300.0, 300.0, 0.0);
		assert_eq!(r.surface().backing_size(), (300, 300));
		assert_eq!(r.pixel_ratio(), 1.0);
	}

	#[test]
	fn tick_draws_passes_in_order() {
		let mut r = renderer(11);
		r.resize(300.0, 300.0, 1.0);
		r.surface_mut().take();
		r.tick();

		let ops = r.surface_mut().take();
		let n = r.field().particles().len();
		assert_eq!(n, 10);
		assert_eq!(
			ops[0],
			DrawOp::Clear {
				width: 300.0,
				height: 300.0
			}
		);
		assert!(matches!(ops[1], DrawOp::Wash { .. }));
		assert!(matches!(ops[2], DrawOp::Wash { .. }));
		assert!(
			ops[3..3 + n]
				.iter()
				.all(|op| matches!(op, DrawOp::Circle { .. }))
		);
		assert!(
			ops[3 + n..]
				.iter()
				.all(|op| matches!(op, DrawOp::Line { .. }))
		);
	}

	#[test]
	fn circles_drawn_at_updated_positions() {
		let mut r = renderer(5);
		r.resize(300.0, 300.0, 1.0);
		r.surface_mut().take();
		let before: Vec<Particle> = r.field().particles().to_vec();
		r.tick();

		let circles: Vec<_> = r
			.surface()
			.ops()
			.iter()
			.filter_map(|op| match op {
				DrawOp::Circle { x, y, radius, .. } => Some((*x, *y, *radius)),
				_ => None,
			})
			.collect();
		assert_eq!(circles.len(), before.len());
		for (p, (x, y, radius)) in before.iter().zip(circles) {
			assert_eq!(x, p.x + p.vx);
			assert_eq!(y, p.y + p.vy);
			assert_eq!(radius, p.r);
		}
	}

	#[test]
	fn close_pair_gets_scaled_alpha() {
		let mut r = renderer(9);
		r.resize(90.0, 200.0, 1.0);
		assert_eq!(r.field().particles().len(), 2);

		let still = |x, y| Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			r: 1.0,
		};
		r.field_mut()
			.particles_mut()
			.copy_from_slice(&[still(10.0, 20.0), still(10.0, 80.0)]);
		r.surface_mut().take();
		r.tick();

		let lines: Vec<_> = r
			.surface()
			.ops()
			.iter()
			.filter_map(|op| match op {
				DrawOp::Line { color, width, .. } => Some((*color, *width)),
				_ => None,
			})
			.collect();
		assert_eq!(lines.len(), 1);
		let (color, width) = lines[0];
		assert!((color.a - 0.2625).abs() < 1e-12);
		assert_eq!((color.r, color.g, color.b), (124, 77, 255));
		assert_eq!(width, 1.0);
	}
}
