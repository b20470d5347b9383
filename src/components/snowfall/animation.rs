//! The self-rescheduling animation loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};

use super::scene::SnowScene;
use super::scheduler::FrameScheduler;

/// Drives a [`SnowScene`] one frame per scheduler tick until stopped.
#[derive(Clone)]
pub struct Animation {
	scene: Rc<RefCell<SnowScene>>,
	scheduler: Rc<dyn FrameScheduler>,
	running: Rc<Cell<bool>>,
}

impl Animation {
	/// Wrap a scene; nothing runs until [`Animation::start`].
	pub fn new(scene: SnowScene, scheduler: Rc<dyn FrameScheduler>) -> Self {
		Self {
			scene: Rc::new(RefCell::new(scene)),
			scheduler,
			running: Rc::new(Cell::new(false)),
		}
	}

	/// Render the first frame right away and keep going every tick.
	/// Calling this while already running does nothing.
	pub fn start(&self) {
		if self.running.replace(true) {
			return;
		}
		info!(
			"snowfall: animation started with {} particles",
			self.scene.borrow().particles().len()
		);
		self.tick();
	}

	/// The pending tick, if any, fires as a no-op and is not rescheduled.
	pub fn stop(&self) {
		self.running.set(false);
	}

	/// Whether ticks are still being scheduled.
	pub fn is_running(&self) -> bool {
		self.running.get()
	}

	/// Shared handle for out-of-band mutation such as viewport resizes.
	pub fn scene(&self) -> Rc<RefCell<SnowScene>> {
		self.scene.clone()
	}

	fn tick(&self) {
		if !self.running.get() {
			return;
		}
		self.scene.borrow_mut().frame();

		let next = self.clone();
		if let Err(e) = self.scheduler.schedule(Box::new(move || next.tick())) {
			warn!("snowfall: failed to schedule next frame: {}", e);
			self.running.set(false);
		}
	}
}
