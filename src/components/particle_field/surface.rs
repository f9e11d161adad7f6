//! Drawing surfaces.
//!
//! The renderer only talks to [`Surface`], so it can paint onto a real
//! `<canvas>` ([`CanvasSurface`]) or into an in-memory op log ([`Recording`])
//! for headless runs. All coordinates are logical (CSS) pixels; the surface
//! owns the pixel-ratio transform.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::{Color, Wash};

/// Backing-store size in physical pixels, truncated like a canvas attribute.
pub fn backing_size(width: f64, height: f64, pixel_ratio: f64) -> (u32, u32) {
	((width * pixel_ratio) as u32, (height * pixel_ratio) as u32)
}

/// Minimal 2D drawing interface used by the renderer.
pub trait Surface {
	/// Size the backing store for `pixel_ratio`, keep the displayed size at
	/// `width` x `height` and scale drawing back to logical units.
	fn configure(&mut self, width: f64, height: f64, pixel_ratio: f64);

	/// Clear the rectangle `(0, 0)`..`(width, height)`.
	fn clear(&mut self, width: f64, height: f64);

	/// Fill the viewport with a radial gradient.
	fn fill_wash(&mut self, wash: &Wash, width: f64, height: f64);

	/// Fill a circle.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);

	/// Stroke a straight segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquire the 2D context, or `None` if the browser refuses one.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
		Some(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn configure(&mut self, width: f64, height: f64, pixel_ratio: f64) {
		let (backing_w, backing_h) = backing_size(width, height, pixel_ratio);
		self.canvas.set_width(backing_w);
		self.canvas.set_height(backing_h);

		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{width}px"));
		let _ = style.set_property("height", &format!("{height}px"));

		// Resizing resets context state, but be explicit about the transform.
		let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
		let _ = self.ctx.scale(pixel_ratio, pixel_ratio);
		let _ = self.ctx.set_line_dash(&js_sys::Array::new());
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_wash(&mut self, wash: &Wash, width: f64, height: f64) {
		let (x, y, radius) = wash.geometry(width, height);
		let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius) else {
			return;
		};
		for (offset, color) in &wash.stops {
			let _ = gradient.add_color_stop(*offset as f32, &color.to_css());
		}

		#[allow(deprecated)]
		self.ctx.set_fill_style(&gradient);
		self.ctx.fill_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}
}

/// One call recorded by [`Recording`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
	Configure {
		width: f64,
		height: f64,
		pixel_ratio: f64,
	},
	Clear {
		width: f64,
		height: f64,
	},
	Wash {
		wash: Wash,
		width: f64,
		height: f64,
	},
	Circle {
		x: f64,
		y: f64,
		radius: f64,
		color: Color,
	},
	Line {
		from: (f64, f64),
		to: (f64, f64),
		width: f64,
		color: Color,
	},
}

/// Headless surface that logs every call instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct Recording {
	ops: Vec<DrawOp>,
	backing: (u32, u32),
	display: (f64, f64),
	scale: f64,
}

impl Recording {
	pub fn new() -> Self {
		Self::default()
	}

	/// Everything drawn since creation or the last [`take`](Self::take).
	pub fn ops(&self) -> &[DrawOp] {
		&self.ops
	}

	/// Drain the op log.
	pub fn take(&mut self) -> Vec<DrawOp> {
		std::mem::take(&mut self.ops)
	}

	/// Physical backing-store size from the last `configure`.
	pub fn backing_size(&self) -> (u32, u32) {
		self.backing
	}

	/// Displayed (CSS) size from the last `configure`.
	pub fn display_size(&self) -> (f64, f64) {
		self.display
	}

	/// Uniform transform scale from the last `configure`.
	pub fn scale(&self) -> f64 {
		self.scale
	}
}

impl Surface for Recording {
	fn configure(&mut self, width: f64, height: f64, pixel_ratio: f64) {
		self.backing = backing_size(width, height, pixel_ratio);
		self.display = (width, height);
		self.scale = pixel_ratio;
		self.ops.push(DrawOp::Configure {
			width,
			height,
			pixel_ratio,
		});
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.ops.push(DrawOp::Clear { width, height });
	}

	fn fill_wash(&mut self, wash: &Wash, width: f64, height: f64) {
		self.ops.push(DrawOp::Wash {
			wash: wash.clone(),
			width,
			height,
		});
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ops.push(DrawOp::Circle {
			x,
			y,
			radius,
			color,
		});
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.ops.push(DrawOp::Line {
			from,
			to,
			width,
			color,
		});
	}
}
