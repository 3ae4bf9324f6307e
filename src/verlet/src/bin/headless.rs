use std::time::Instant;

use protocol::pointer::{PointerButton, PointerState};
use protocol::surface::TraceSurface;
use protocol::V2;

use verlet::{Cloth, ClothConfig, FrameClock, PhysicsConfig, PointerConfig};

// a canned pointer session: drift under the cloth, grab and drag hard
// enough to tear, then a cutting pass along a row
fn script(pointer: &mut PointerState, frame: usize) {
	match frame {
		0..=59 => pointer.moved(V2::new(4. * frame as f32, 80.)),
		60 => pointer.pressed(PointerButton::Primary),
		61..=120 => {
			let t = (frame - 60) as f32;
			pointer.moved(V2::new(240. + 6. * t, 80. + 3. * t));
		}
		// hold the cursor still, a stale delta would keep towing the grab
		121..=149 => pointer.moved(V2::new(600., 260.)),
		150 => pointer.released(),
		180 => pointer.pressed(PointerButton::Secondary),
		181..=269 => pointer.moved(V2::new(3. * (frame - 180) as f32, 60.)),
		270 => pointer.released(),
		_ => {}
	}
}

fn main() {
	let width = 640.;
	let height = 480.;
	let mut surface = TraceSurface::new(width, height);
	let config = ClothConfig::fill_width(width, 10., 5);
	let mut cloth = match Cloth::new(&config) {
		Ok(cloth) => cloth,
		Err(e) => {
			eprintln!("ERROR: {}", e);
			std::process::exit(1);
		}
	};
	let phys = PhysicsConfig::default();
	let reach = PointerConfig::default();
	let mut pointer = PointerState::default();
	let mut clock = FrameClock::default();
	let mut busy = 0f32;
	let start = Instant::now();
	for frame in 0..300 {
		script(&mut pointer, frame);
		let dt = clock.tick();
		surface.clear();
		let t0 = Instant::now();
		cloth.update(dt, &pointer, &phys, &reach, &mut surface);
		busy += t0.elapsed().as_secs_f32();
		if frame % 60 == 59 {
			eprintln!(
				"INFO: frame {}, {} links, {} segments, load {:.1}%",
				frame + 1,
				cloth.link_count(),
				surface.segments.len(),
				100. * busy / start.elapsed().as_secs_f32(),
			);
		}
	}
}
