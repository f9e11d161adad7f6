//! Tunable constants for the particle field.
//!
//! Defaults reproduce the stock background. Pages may override any subset of
//! fields through the embedded JSON config (see [`crate::load_config`]).

use log::warn;
use serde::Deserialize;

/// Density, motion and link parameters for a [`ParticleField`](super::ParticleField).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Upper bound on the particle count regardless of viewport area.
	pub max_particles: usize,
	/// Logical pixels² of viewport per particle.
	pub area_per_particle: f64,
	/// Maximum absolute velocity per axis, in logical pixels per frame.
	pub max_speed: f64,
	/// Smallest particle radius.
	pub radius_min: f64,
	/// Largest particle radius.
	pub radius_max: f64,
	/// Pairs closer than this distance are joined by a line.
	pub link_distance: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			max_particles: 180,
			area_per_particle: 9000.0,
			max_speed: 0.35,
			radius_min: 1.0,
			radius_max: 2.2,
			link_distance: 120.0,
		}
	}
}

impl FieldConfig {
	/// Squared link distance, compared against squared pair distances each frame.
	pub fn link_threshold_sq(&self) -> f64 {
		self.link_distance * self.link_distance
	}

	/// Replace unusable values with their defaults.
	///
	/// Every float must be finite and positive (`max_speed` may be zero), and
	/// the radius range must not be inverted.
	pub fn sanitized(self) -> Self {
		let defaults = Self::default();
		let positive = |name: &str, value: f64, fallback: f64| {
			if value.is_finite() && value > 0.0 {
				value
			} else {
				warn!("particle-field: ignoring {name} = {value}, using {fallback}");
				fallback
			}
		};

		let area_per_particle = positive(
			"area_per_particle",
			self.area_per_particle,
			defaults.area_per_particle,
		);
		let link_distance = positive("link_distance", self.link_distance, defaults.link_distance);
		let max_speed = if self.max_speed.is_finite() && self.max_speed >= 0.0 {
			self.max_speed
		} else {
			warn!(
				"particle-field: ignoring max_speed = {}, using {}",
				self.max_speed, defaults.max_speed
			);
			defaults.max_speed
		};

		let radius_min = positive("radius_min", self.radius_min, defaults.radius_min);
		let radius_max = positive("radius_max", self.radius_max, defaults.radius_max);
		let (radius_min, radius_max) = if radius_min <= radius_max {
			(radius_min, radius_max)
		} else {
			warn!(
				"particle-field: radius range {radius_min}..{radius_max} is inverted, using defaults"
			);
			(defaults.radius_min, defaults.radius_max)
		};

		Self {
			max_particles: self.max_particles,
			area_per_particle,
			max_speed,
			radius_min,
			radius_max,
			link_distance,
		}
	}
}
