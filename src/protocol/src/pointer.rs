// pointer: cursor state a host feeds from its own event loop.
// A host that wants secondary-drag cutting must suppress its context menu itself.

use crate::V2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerButton {
	Primary,
	Secondary,
}

#[derive(Clone, Debug)]
pub struct PointerState {
	pub pos: V2,
	pub prev: V2,
	pub held: bool,
	pub button: PointerButton,
}

impl Default for PointerState {
	fn default() -> Self {
		Self {
			pos: V2::new(0., 0.),
			prev: V2::new(0., 0.),
			held: false,
			button: PointerButton::Primary,
		}
	}
}

impl PointerState {
	pub fn moved(&mut self, pos: V2) {
		self.prev = self.pos;
		self.pos = pos;
	}

	pub fn pressed(&mut self, button: PointerButton) {
		self.button = button;
		self.held = true;
	}

	// the button is kept, only the hold ends
	pub fn released(&mut self) {
		self.held = false;
	}

	pub fn delta(&self) -> V2 {
		self.pos - self.prev
	}
}
