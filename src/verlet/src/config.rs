use crate::error::ConfigError;
use crate::V2;

// gravity is stated in feet per second squared and scaled to pixels
pub const GRAVITY_FT_S2: f32 = 32.;
pub const DEFAULT_PIXELS_PER_FOOT: f32 = 5.;

#[derive(Clone, Debug, PartialEq)]
pub struct ClothConfig {
	pub cells_x: usize,
	pub cells_y: usize,
	pub spacing: f32,
	// top-left of the grid; slightly off-screen left so the first column
	// does not sit exactly on the boundary
	pub origin: V2,
}

impl Default for ClothConfig {
	fn default() -> Self {
		Self {
			cells_x: 50,
			cells_y: 10,
			spacing: 10.,
			origin: V2::new(-1., 0.1),
		}
	}
}

impl ClothConfig {
	// as many cells as fit the width, rows from the aspect divisor
	pub fn fill_width(width: f32, spacing: f32, aspect_divisor: usize) -> Self {
		let cells = width / spacing;
		let cells_x = if cells.is_finite() {
			cells.floor() as usize
		} else {
			// an infinite ratio would saturate the cast to usize::MAX;
			// leave it 0 so validation rejects the config
			0
		};
		let cells_y = if aspect_divisor == 0 {
			// leave it 0 so validation rejects the config
			0
		} else {
			cells_x / aspect_divisor
		};
		Self {
			cells_x,
			cells_y,
			spacing,
			..Self::default()
		}
	}

	pub fn with_cells(mut self, cells_x: usize, cells_y: usize) -> Self {
		self.cells_x = cells_x;
		self.cells_y = cells_y;
		self
	}

	pub fn with_spacing(mut self, spacing: f32) -> Self {
		self.spacing = spacing;
		self
	}

	pub fn with_origin(mut self, origin: V2) -> Self {
		self.origin = origin;
		self
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.cells_x == 0 {
			return Err(ConfigError::ZeroCells { axis: 'x' });
		}
		if self.cells_y == 0 {
			return Err(ConfigError::ZeroCells { axis: 'y' });
		}
		if !self.spacing.is_finite() || self.spacing <= 0. {
			return Err(ConfigError::BadSpacing(self.spacing));
		}
		Ok(())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
	pub gravity: f32,
	pub rebound: f32,  // velocity kept after a boundary bounce
	pub friction: f32, // velocity kept per frame
	pub accuracy: usize, // relaxation passes per frame
	pub strength: f32, // length past which a link tears
}

impl Default for PhysicsConfig {
	fn default() -> Self {
		Self {
			gravity: GRAVITY_FT_S2 * DEFAULT_PIXELS_PER_FOOT,
			rebound: 0.5,
			friction: 0.99,
			accuracy: 5,
			strength: 20.,
		}
	}
}

impl PhysicsConfig {
	pub fn with_pixels_per_foot(mut self, pixels_per_foot: f32) -> Self {
		self.gravity = GRAVITY_FT_S2 * pixels_per_foot;
		self
	}

	pub fn with_accuracy(mut self, accuracy: usize) -> Self {
		self.accuracy = accuracy;
		self
	}

	pub fn with_strength(mut self, strength: f32) -> Self {
		self.strength = strength;
		self
	}

	pub fn with_friction(mut self, friction: f32) -> Self {
		self.friction = friction;
		self
	}

	pub fn with_rebound(mut self, rebound: f32) -> Self {
		self.rebound = rebound;
		self
	}

	pub fn with_gravity(mut self, gravity: f32) -> Self {
		self.gravity = gravity;
		self
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerConfig {
	pub grab_radius: f32,
	pub cut_radius: f32,
}

impl Default for PointerConfig {
	fn default() -> Self {
		Self {
			grab_radius: 25.,
			cut_radius: 5.,
		}
	}
}

impl PointerConfig {
	pub fn with_grab_radius(mut self, grab_radius: f32) -> Self {
		self.grab_radius = grab_radius;
		self
	}

	pub fn with_cut_radius(mut self, cut_radius: f32) -> Self {
		self.cut_radius = cut_radius;
		self
	}
}
