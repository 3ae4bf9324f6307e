use std::mem;

use protocol::pointer::{PointerButton, PointerState};

use crate::config::{PhysicsConfig, PointerConfig};
use crate::constraint::Constraint;
use crate::V2;

// current and previous position, velocity lives in the difference
#[derive(Clone, Debug)]
pub struct Point {
	pub pos: V2,
	pub ppos: V2,
	pub force: V2,
	pub pin_x: Option<f32>,
	pub pin_y: Option<f32>,
	pub links: Vec<Constraint>,
}

impl Point {
	pub fn new(pos: V2) -> Self {
		Self {
			pos,
			ppos: pos,
			force: V2::new(0., 0.),
			pin_x: None,
			pin_y: None,
			links: Vec::new(),
		}
	}

	pub fn pinned(&self) -> bool {
		self.pin_x.is_some() && self.pin_y.is_some()
	}

	// One relaxation visit. Pinned points snap home and never run their
	// own links, so top-row horizontal links cannot stretch or tear. Free
	// points run their outgoing links in order; torn links are dropped
	// after their final correction.
	pub fn resolve(points: &mut [Point], i: usize, strength: f32) {
		if let (Some(x), Some(y)) = (points[i].pin_x, points[i].pin_y) {
			points[i].pos = V2::new(x, y);
			return;
		}
		let mut links = mem::take(&mut points[i].links);
		links.retain(|link| link.resolve(points, strength));
		points[i].links = links;
	}

	pub fn apply(&mut self, force: V2) {
		self.force += force;
	}

	pub fn attach(&mut self, link: Constraint) {
		self.links.push(link);
	}

	// no-op when the link is already gone, a tear may have beaten us
	pub fn detach(&mut self, link: &Constraint) {
		if let Some(i) = self.links.iter().position(|l| l == link) {
			self.links.remove(i);
		}
	}

	pub fn pin(&mut self, target: V2) {
		self.pin_x = Some(target[0]);
		self.pin_y = Some(target[1]);
	}

	pub fn unpin(&mut self) {
		self.pin_x = None;
		self.pin_y = None;
	}

	// Pointer test, then integration, then boundary bounce. dt2 is the
	// squared timestep, computed once per frame by the cloth.
	pub fn update(
		&mut self,
		dt2: f32,
		pointer: &PointerState,
		phys: &PhysicsConfig,
		reach: &PointerConfig,
		size: V2,
	) {
		if self.pinned() {
			return;
		}
		if pointer.held {
			let dist = (self.pos - pointer.pos).magnitude();
			if pointer.button == PointerButton::Primary && dist < reach.grab_radius {
				// forge history so the next step moves in lockstep with
				// the cursor
				self.ppos = self.pos - pointer.delta();
			} else if dist < reach.cut_radius {
				self.links.clear();
			}
		}
		self.apply(V2::new(0., phys.gravity));
		let next = self.pos + (self.pos - self.ppos) * phys.friction + self.force * dt2;
		self.ppos = self.pos;
		self.pos = next;
		self.force = V2::new(0., 0.);
		// inelastic bounce: clamp the coordinate, reflect the history term
		for axis in 0..2 {
			let bound = if self.pos[axis] >= size[axis] {
				size[axis]
			} else if self.pos[axis] <= 0. {
				0.
			} else {
				continue;
			};
			self.ppos[axis] = bound + (bound - self.ppos[axis]) * phys.rebound;
			self.pos[axis] = bound;
		}
	}
}
