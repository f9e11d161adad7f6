//! Ambient particle field background.
//!
//! Draws drifting particles on a full-viewport canvas with:
//! - Reflective viewport edges and a density-based particle count
//! - Lines between nearby particles, fading with distance
//! - Radial gradient washes for ambient lighting
//! - HiDPI-aware sizing, rebuilt on every window resize
//!
//! The simulation and drawing live in [`ParticleRenderer`], which paints
//! through the [`Surface`] trait and is driven by a [`FrameScheduler`]. Neither
//! needs a browser, so the whole frame pipeline runs headless against
//! [`Recording`] and [`ManualScheduler`].
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{ParticleFieldCanvas, FieldConfig};
//!
//! view! { <ParticleFieldCanvas config=FieldConfig { max_particles: 90, ..Default::default() } /> }
//! ```

mod component;
mod config;
mod particles;
mod render;
mod renderer;
mod scheduler;
mod surface;
mod theme;
mod viewport;

pub use component::ParticleFieldCanvas;
pub use config::FieldConfig;
pub use particles::{Link, Particle, ParticleField, link_opacity, particle_count};
pub use renderer::ParticleRenderer;
pub use scheduler::{
	AnimationFrameScheduler, FrameCallback, FrameScheduler, ManualScheduler, start_loop,
};
pub use surface::{CanvasSurface, DrawOp, Recording, Surface, backing_size};
pub use theme::{Color, Theme, Wash};
pub use viewport::{Viewport, normalize_pixel_ratio};
