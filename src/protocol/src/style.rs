// style: stroke colors for hosts. The simulation never reads these, they
// only ride along so every frontend shades the same way.

pub type Color = [f32; 4];

pub const WHITE: Color = [1., 1., 1., 1.];
pub const BLACK: Color = [0., 0., 0., 1.];

#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
	pub stops: Vec<(f32, Color)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	pub cloth: Color,
	pub background: Color,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			cloth: WHITE,
			background: BLACK,
		}
	}
}

impl Theme {
	// vertical fade: solid cloth color down to 80% of the surface, then
	// out to the background at the bottom edge
	pub fn drape_gradient(&self) -> Gradient {
		Gradient {
			stops: vec![(0.8, self.cloth), (1., self.background)],
		}
	}
}
