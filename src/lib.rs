//! particle-field: animated canvas background for a static portfolio page.
//!
//! This crate provides a WASM-based particle field that fills the viewport,
//! linking nearby particles with fading lines over soft gradient lighting.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Only linked for its `js` entropy backend on wasm32.
use getrandom as _;

pub mod components;

pub use components::particle_field::{
	Color, DrawOp, FieldConfig, FrameScheduler, ManualScheduler, Particle, ParticleField,
	ParticleFieldCanvas, ParticleRenderer, Recording, Surface, Theme, Wash, link_opacity,
	particle_count, start_loop,
};

/// Id of the optional `<script type="application/json">` element holding
/// [`FieldConfig`] overrides.
pub const CONFIG_ELEMENT_ID: &str = "particle-field-config";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Parse a JSON config document, falling back to defaults on error.
///
/// Omitted keys keep their defaults; invalid values are replaced by
/// [`FieldConfig::sanitized`].
pub fn parse_config(json: &str) -> FieldConfig {
	match serde_json::from_str::<FieldConfig>(json) {
		Ok(config) => config.sanitized(),
		Err(e) => {
			warn!("particle-field: failed to parse config: {}", e);
			FieldConfig::default()
		}
	}
}

/// Load field config from a script element with id="particle-field-config".
/// Absent element means defaults.
pub fn load_config() -> FieldConfig {
	let Some(json_text) = config_text() else {
		return FieldConfig::default();
	};
	let config = parse_config(&json_text);
	info!(
		"particle-field: loaded config (max {} particles)",
		config.max_particles
	);
	config
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Loads the field config from the DOM and mounts the background canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();

	view! {
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<ParticleFieldCanvas config=config />
	}
}
