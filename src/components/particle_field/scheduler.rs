//! Frame scheduling.
//!
//! The animation loop never calls `requestAnimationFrame` directly. It asks a
//! [`FrameScheduler`] for the next frame, so a browser drives it at display
//! refresh and tests drive it one frame at a time with [`ManualScheduler`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// A one-shot frame callback.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Host primitive that runs a callback before the next paint.
pub trait FrameScheduler {
	/// Queue `frame` to run once at the next frame.
	fn schedule(&self, frame: FrameCallback);
}

/// Schedules frames with `window.requestAnimationFrame`.
pub struct AnimationFrameScheduler {
	window: Window,
}

impl AnimationFrameScheduler {
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

impl FrameScheduler for AnimationFrameScheduler {
	fn schedule(&self, frame: FrameCallback) {
		// Freed by wasm-bindgen after its single invocation.
		let callback = Closure::once_into_js(frame);
		if self
			.window
			.request_animation_frame(callback.unchecked_ref())
			.is_err()
		{
			warn!("particle-field: requestAnimationFrame failed, animation stopped");
		}
	}
}

/// Queues frames until [`run_frame`](Self::run_frame) is called.
#[derive(Default)]
pub struct ManualScheduler {
	queue: RefCell<VecDeque<FrameCallback>>,
}

impl ManualScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	/// Run the oldest queued frame. Returns `false` if nothing was queued.
	///
	/// Frames queued while this one runs wait for the next call.
	pub fn run_frame(&self) -> bool {
		let next = self.queue.borrow_mut().pop_front();
		match next {
			Some(frame) => {
				frame();
				true
			}
			None => false,
		}
	}

	/// Run up to `n` frames, returning how many ran.
	pub fn run_frames(&self, n: usize) -> usize {
		(0..n).take_while(|_| self.run_frame()).count()
	}

	/// Number of queued frames.
	pub fn pending(&self) -> usize {
		self.queue.borrow().len()
	}
}

impl FrameScheduler for ManualScheduler {
	fn schedule(&self, frame: FrameCallback) {
		self.queue.borrow_mut().push_back(frame);
	}
}

/// Run `frame` now and then once per scheduled frame, forever.
///
/// There is no cancellation: the loop lives as long as the scheduler keeps
/// invoking callbacks.
pub fn start_loop<S, F>(scheduler: Rc<S>, frame: F)
where
	S: FrameScheduler + ?Sized + 'static,
	F: FnMut() + 'static,
{
	run_and_reschedule(scheduler, Rc::new(RefCell::new(frame)));
}

fn run_and_reschedule<S, F>(scheduler: Rc<S>, frame: Rc<RefCell<F>>)
where
	S: FrameScheduler + ?Sized + 'static,
	F: FnMut() + 'static,
{
	(&mut *frame.borrow_mut())();
	let next = scheduler.clone();
	scheduler.schedule(Box::new(move || run_and_reschedule(next, frame)));
}
