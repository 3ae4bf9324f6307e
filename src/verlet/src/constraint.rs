use crate::point::Point;

// A distance link between two grid points, stored on its owning endpoint
// only. Indices stay valid for the life of the cloth since points are
// never added or removed after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint {
	pub a: usize,
	pub b: usize,
	pub rest: f32,
}

impl Constraint {
	pub fn new(a: usize, b: usize, rest: f32) -> Self {
		Self { a, b, rest }
	}

	// One positional correction. Returns false when the link tore; the
	// correction is still applied that frame, the owner drops the link
	// afterwards.
	pub fn resolve(&self, points: &mut [Point], strength: f32) -> bool {
		let dp = points[self.a].pos - points[self.b].pos;
		let dist = dp.magnitude();
		if dist < self.rest {
			// slack: links only resist stretch, folds hang free
			return true;
		}
		if !dist.is_normal() {
			// coincident or pathological endpoints, nothing to correct
			return true;
		}
		let torn = dist > strength;
		let correct = dp * ((self.rest - dist) / dist * 0.5);
		let p = &mut points[self.a];
		if p.pin_x.is_none() {
			p.pos[0] += correct[0];
		}
		if p.pin_y.is_none() {
			p.pos[1] += correct[1];
		}
		let p = &mut points[self.b];
		if p.pin_x.is_none() {
			p.pos[0] -= correct[0];
		}
		if p.pin_y.is_none() {
			p.pos[1] -= correct[1];
		}
		!torn
	}
}
