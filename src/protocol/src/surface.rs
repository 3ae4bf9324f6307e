// surface: the drawing seam a host implements. The simulation only ever
// strokes batches of line segments between begin_path and stroke, so a
// host needs nothing fancier than a path API.

use crate::V2;

pub trait Surface {
	fn size(&self) -> V2;
	fn begin_path(&mut self);
	fn move_to(&mut self, p: V2);
	fn line_to(&mut self, p: V2);
	fn stroke(&mut self);
}

// TraceSurface records segments instead of rasterizing, for headless
// runs and tests.
pub struct TraceSurface {
	size: V2,
	cursor: Option<V2>,
	path: Vec<(V2, V2)>,
	pub segments: Vec<(V2, V2)>,
	pub strokes: usize,
}

impl TraceSurface {
	pub fn new(width: f32, height: f32) -> Self {
		Self {
			size: V2::new(width, height),
			cursor: None,
			path: Vec::new(),
			segments: Vec::new(),
			strokes: 0,
		}
	}

	pub fn resize(&mut self, width: f32, height: f32) {
		self.size = V2::new(width, height);
	}

	pub fn clear(&mut self) {
		self.segments.clear();
		self.strokes = 0;
	}
}

impl Surface for TraceSurface {
	fn size(&self) -> V2 {
		self.size
	}

	fn begin_path(&mut self) {
		self.path.clear();
		self.cursor = None;
	}

	fn move_to(&mut self, p: V2) {
		self.cursor = Some(p);
	}

	// a line with no current point just starts one
	fn line_to(&mut self, p: V2) {
		if let Some(from) = self.cursor {
			self.path.push((from, p));
		}
		self.cursor = Some(p);
	}

	// commits the current path; the path itself survives until begin_path
	fn stroke(&mut self) {
		self.segments.extend(self.path.iter().copied());
		self.strokes += 1;
	}
}
