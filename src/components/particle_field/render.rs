//! Per-frame drawing for the particle field.
//!
//! One frame is three passes, in order:
//! 1. Clear, then the ambient washes
//! 2. Move each particle and draw it
//! 3. Link lines between nearby pairs, over the particles

use super::particles::ParticleField;
use super::surface::Surface;
use super::theme::Theme;

/// Advance the field by one frame and paint it.
pub fn render_frame<S: Surface + ?Sized>(field: &mut ParticleField, surface: &mut S, theme: &Theme) {
	let (width, height) = (field.width(), field.height());

	surface.clear(width, height);
	draw_washes(surface, theme, width, height);
	step_and_draw_particles(field, surface, theme);
	draw_links(field, surface, theme);
}

fn draw_washes<S: Surface + ?Sized>(surface: &mut S, theme: &Theme, width: f64, height: f64) {
	for wash in &theme.washes {
		surface.fill_wash(wash, width, height);
	}
}

fn step_and_draw_particles<S: Surface + ?Sized>(
	field: &mut ParticleField,
	surface: &mut S,
	theme: &Theme,
) {
	let (width, height) = (field.width(), field.height());
	for p in field.particles_mut() {
		p.step(width, height);
		surface.fill_circle(p.x, p.y, p.r, theme.particle_color);
	}
}

fn draw_links<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S, theme: &Theme) {
	let particles = field.particles();
	for link in field.links() {
		let (a, b) = (&particles[link.a], &particles[link.b]);
		let color = theme.link_color.with_alpha(link.opacity * theme.link_alpha);
		surface.stroke_line((a.x, a.y), (b.x, b.y), theme.link_width, color);
	}
}
