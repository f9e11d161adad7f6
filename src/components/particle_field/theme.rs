//! Visual theming for the particle field.
//!
//! Colours for particles and links, plus the radial "wash" gradients painted
//! under the particles to fake ambient lighting.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	/// Opaque colour.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Colour with explicit alpha in `[0, 1]`.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Fully transparent black, the outer stop of every wash.
	pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);

	/// Same colour, new alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS colour string: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// A radial gradient filling the whole viewport.
///
/// Geometry is relative so the wash follows the viewport on resize: the centre
/// is a fraction of width/height and the outer radius a fraction of the longer
/// side. The inner radius is always zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Wash {
	/// Centre x as a fraction of viewport width.
	pub center_x: f64,
	/// Centre y as a fraction of viewport height.
	pub center_y: f64,
	/// Outer radius as a fraction of `max(width, height)`.
	pub radius: f64,
	/// `(offset, colour)` pairs, offsets ascending in `[0, 1]`.
	pub stops: Vec<(f64, Color)>,
}

impl Wash {
	/// Resolve to `(x, y, outer_radius)` for a viewport.
	pub fn geometry(&self, width: f64, height: f64) -> (f64, f64, f64) {
		(
			width * self.center_x,
			height * self.center_y,
			width.max(height) * self.radius,
		)
	}
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	/// Painted in order, before the particles.
	pub washes: Vec<Wash>,
	/// Particle fill colour.
	pub particle_color: Color,
	/// Link stroke colour; alpha is replaced per link.
	pub link_color: Color,
	/// Link alpha for coincident particles, fading to zero at the link distance.
	pub link_alpha: f64,
	/// Link stroke width in logical pixels.
	pub link_width: f64,
}

impl Theme {
	/// Violet and sky-blue glow over a dark page (default)
	pub fn nebula() -> Self {
		Self {
			washes: vec![
				Wash {
					center_x: 0.65,
					center_y: 0.15,
					radius: 0.9,
					stops: vec![
						(0.0, Color::rgba(124, 77, 255, 0.14)),
						(0.6, Color::rgba(56, 189, 248, 0.08)),
						(1.0, Color::TRANSPARENT),
					],
				},
				Wash {
					center_x: 0.3,
					center_y: 0.85,
					radius: 0.7,
					stops: vec![
						(0.0, Color::rgba(59, 130, 246, 0.05)),
						(1.0, Color::TRANSPARENT),
					],
				},
			],
			particle_color: Color::rgba(200, 210, 255, 0.85),
			link_color: Color::rgb(124, 77, 255),
			link_alpha: 0.35,
			link_width: 1.0,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::nebula()
	}
}
