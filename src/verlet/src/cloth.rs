use protocol::pointer::PointerState;
use protocol::surface::Surface;

use crate::config::{ClothConfig, PhysicsConfig, PointerConfig};
use crate::constraint::Constraint;
use crate::error::ConfigError;
use crate::point::Point;
use crate::V2;

// (cells_x + 1) * (cells_y + 1) points in row-major order, top row pinned
#[derive(Clone)]
pub struct Cloth {
	points: Vec<Point>,
	cells_x: usize,
	cells_y: usize,
}

impl Cloth {
	pub fn new(config: &ClothConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		let row = config.cells_x + 1;
		let mut points: Vec<Point> = Vec::with_capacity(row * (config.cells_y + 1));
		for y in 0..=config.cells_y {
			for x in 0..=config.cells_x {
				let mut point = Point::new(V2::new(
					config.origin[0] + x as f32 * config.spacing,
					config.origin[1] + y as f32 * config.spacing,
				));
				if y == 0 {
					let home = point.pos;
					point.pin(home);
				}
				let i = points.len();
				// each point owns at most its left and up links
				if x != 0 {
					point.attach(Constraint::new(i, i - 1, config.spacing));
				}
				if y != 0 {
					point.attach(Constraint::new(i, x + (y - 1) * row, config.spacing));
				}
				points.push(point);
			}
		}
		let cloth = Self {
			points,
			cells_x: config.cells_x,
			cells_y: config.cells_y,
		};
		eprintln!(
			"INFO: cloth {}x{} cells, {} points, {} links",
			config.cells_x,
			config.cells_y,
			cloth.point_count(),
			cloth.link_count(),
		);
		Ok(cloth)
	}

	// Relax every link accuracy times, then integrate and draw in one
	// pass. Relaxation order is the point order, later visits see the
	// corrections of earlier ones.
	pub fn update<S: Surface>(
		&mut self,
		dt: f32,
		pointer: &PointerState,
		phys: &PhysicsConfig,
		reach: &PointerConfig,
		surface: &mut S,
	) {
		for _ in 0..phys.accuracy {
			for i in 0..self.points.len() {
				Point::resolve(&mut self.points, i, phys.strength);
			}
		}
		let dt2 = dt * dt;
		surface.begin_path();
		for i in 0..self.points.len() {
			let size = surface.size();
			self.points[i].update(dt2, pointer, phys, reach, size);
			for link in &self.points[i].links {
				surface.move_to(self.points[link.a].pos);
				surface.line_to(self.points[link.b].pos);
			}
		}
		surface.stroke();
	}

	pub fn index(&self, col: usize, row: usize) -> usize {
		col + row * (self.cells_x + 1)
	}

	pub fn point(&self, col: usize, row: usize) -> &Point {
		&self.points[self.index(col, row)]
	}

	pub fn position_at(&self, col: usize, row: usize) -> V2 {
		self.point(col, row).pos
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	// points can move and lose links through this, never join or leave
	pub fn points_mut(&mut self) -> &mut [Point] {
		&mut self.points
	}

	pub fn cells_x(&self) -> usize {
		self.cells_x
	}

	pub fn cells_y(&self) -> usize {
		self.cells_y
	}

	pub fn point_count(&self) -> usize {
		self.points.len()
	}

	pub fn link_count(&self) -> usize {
		self.points.iter().map(|p| p.links.len()).sum()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use protocol::surface::TraceSurface;

	#[test]
	fn small_grid_census() {
		let config = ClothConfig::default()
			.with_cells(2, 2)
			.with_origin(V2::new(50., 10.));
		let cloth = Cloth::new(&config).unwrap();
		assert_eq!(cloth.point_count(), 9);
		// 2 * (2 + 1) horizontal plus 2 * (2 + 1) vertical
		assert_eq!(cloth.link_count(), 12);
		for col in 0..=2 {
			assert!(cloth.point(col, 0).pinned());
			assert!(!cloth.point(col, 1).pinned());
			assert!(cloth.point(col, 0).links.len() == col.min(1));
		}
		// an interior point owns exactly its left and up links
		let i = cloth.index(1, 1);
		let links = &cloth.point(1, 1).links;
		assert_eq!(links.len(), 2);
		assert_eq!(links[0], Constraint::new(i, i - 1, 10.));
		assert_eq!(links[1], Constraint::new(i, cloth.index(1, 0), 10.));
	}

	#[test]
	fn grid_positions_follow_origin_and_spacing() {
		let config = ClothConfig::default()
			.with_cells(3, 2)
			.with_spacing(8.)
			.with_origin(V2::new(20., 5.));
		let cloth = Cloth::new(&config).unwrap();
		assert_eq!(cloth.position_at(0, 0), V2::new(20., 5.));
		assert_eq!(cloth.position_at(3, 2), V2::new(44., 21.));
	}

	#[test]
	fn degenerate_configs_are_rejected() {
		let config = ClothConfig::default().with_cells(0, 2);
		assert_eq!(
			Cloth::new(&config).err(),
			Some(ConfigError::ZeroCells { axis: 'x' }),
		);
		let config = ClothConfig::default().with_spacing(-3.);
		assert_eq!(Cloth::new(&config).err(), Some(ConfigError::BadSpacing(-3.)));
	}

	#[test]
	fn update_draws_every_link_in_one_stroke() {
		let config = ClothConfig::default()
			.with_cells(2, 2)
			.with_origin(V2::new(50., 10.));
		let mut cloth = Cloth::new(&config).unwrap();
		let mut surface = TraceSurface::new(200., 200.);
		cloth.update(
			0.016,
			&PointerState::default(),
			&PhysicsConfig::default(),
			&PointerConfig::default(),
			&mut surface,
		);
		assert_eq!(surface.strokes, 1);
		assert_eq!(surface.segments.len(), cloth.link_count());
	}

	#[test]
	fn relaxation_alone_is_idempotent_on_a_fresh_grid() {
		let config = ClothConfig::default()
			.with_cells(3, 3)
			.with_origin(V2::new(50., 10.));
		let mut cloth = Cloth::new(&config).unwrap();
		let before: Vec<V2> = cloth.points().iter().map(|p| p.pos).collect();
		for i in 0..cloth.point_count() {
			Point::resolve(cloth.points_mut(), i, 20.);
		}
		for (point, pos) in cloth.points().iter().zip(before) {
			assert_eq!(point.pos, pos);
		}
	}
}
