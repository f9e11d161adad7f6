//! Leptos component wrapping the particle field canvas.
//!
//! The component renders a fixed, full-viewport `<canvas>` behind the page.
//! Once mounted it sizes the canvas to the window, rebuilds the field on every
//! window `resize`, and drives [`ParticleRenderer::tick`] from
//! `requestAnimationFrame` through [`start_loop`].

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::config::FieldConfig;
use super::renderer::ParticleRenderer;
use super::scheduler::{AnimationFrameScheduler, start_loop};
use super::surface::CanvasSurface;
use super::theme::Theme;
use super::viewport::Viewport;

/// Renders the animated particle background.
///
/// The canvas is `position: fixed` and ignores pointer events, so page content
/// placed after it sits on top. If the browser cannot provide a 2D context the
/// canvas stays blank and no animation loop is started.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(default = FieldConfig::default())] config: FieldConfig,
	#[prop(default = Theme::default())] theme: Theme,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(surface) = CanvasSurface::new(canvas) else {
			warn!("particle-field: 2d context unavailable, background disabled");
			return;
		};
		let Some(viewport) = Viewport::from_window(&window) else {
			warn!("particle-field: could not read viewport size, background disabled");
			return;
		};

		let renderer = Rc::new(RefCell::new(ParticleRenderer::new(
			surface,
			config.clone(),
			theme.clone(),
			StdRng::from_entropy(),
		)));
		renderer
			.borrow_mut()
			.resize(viewport.width, viewport.height, viewport.pixel_ratio);

		let renderer_resize = renderer.clone();
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			let Some(vp) = web_sys::window().and_then(|w| Viewport::from_window(&w)) else {
				return;
			};
			renderer_resize
				.borrow_mut()
				.resize(vp.width, vp.height, vp.pixel_ratio);
		});
		let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
		*resize_cb.borrow_mut() = Some(on_resize);

		info!(
			"particle-field: started with {} particles",
			renderer.borrow().field().particles().len()
		);

		let scheduler: Rc<AnimationFrameScheduler> = Rc::new(AnimationFrameScheduler::new(window));
		start_loop(scheduler, move || renderer.borrow_mut().tick());
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="position: fixed; top: 0; left: 0; z-index: -1; pointer-events: none; display: block;"
		/>
	}
}
