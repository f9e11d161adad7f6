//! Viewport dimensions read from the host window.

use web_sys::Window;

/// Logical viewport size and device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	pub pixel_ratio: f64,
}

impl Viewport {
	/// Read `innerWidth`, `innerHeight` and `devicePixelRatio`.
	pub fn from_window(window: &Window) -> Option<Self> {
		let width = window.inner_width().ok()?.as_f64()?;
		let height = window.inner_height().ok()?.as_f64()?;
		Some(Self {
			width,
			height,
			pixel_ratio: normalize_pixel_ratio(window.device_pixel_ratio()),
		})
	}
}

/// Treat a missing or nonsensical pixel ratio as 1.
pub fn normalize_pixel_ratio(ratio: f64) -> f64 {
	if ratio.is_finite() && ratio > 0.0 {
		ratio
	} else {
		1.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pixel_ratio_fallback() {
		assert_eq!(normalize_pixel_ratio(2.0), 2.0);
		assert_eq!(normalize_pixel_ratio(1.25), 1.25);
		assert_eq!(normalize_pixel_ratio(0.0), 1.0);
		assert_eq!(normalize_pixel_ratio(-2.0), 1.0);
		assert_eq!(normalize_pixel_ratio(f64::NAN), 1.0);
		assert_eq!(normalize_pixel_ratio(f64::INFINITY), 1.0);
	}
}
