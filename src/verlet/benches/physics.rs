use criterion::{criterion_group, criterion_main, Criterion};

use protocol::pointer::PointerState;
use protocol::surface::TraceSurface;
use verlet::{Cloth, ClothConfig, PhysicsConfig, PointerConfig};

fn drape(width: f32, frames: usize) -> f32 {
	let config = ClothConfig::fill_width(width, 10., 5);
	let mut cloth = Cloth::new(&config).unwrap();
	let pointer = PointerState::default();
	let phys = PhysicsConfig::default();
	let reach = PointerConfig::default();
	let mut surface = TraceSurface::new(width, width * 0.75);
	for _ in 0..frames {
		surface.clear();
		cloth.update(0.016, &pointer, &phys, &reach, &mut surface);
	}
	cloth.position_at(0, cloth.cells_y())[1]
}

fn bench_small_cloth(c: &mut Criterion) {
	c.bench_function("cloth_48x9_60_frames", |b| {
		b.iter(|| drape(480., 60));
	});
}

fn bench_wide_cloth(c: &mut Criterion) {
	c.bench_function("cloth_128x25_60_frames", |b| {
		b.iter(|| drape(1280., 60));
	});
}

fn bench_settled_frame(c: &mut Criterion) {
	let config = ClothConfig::fill_width(1280., 10., 5);
	let pointer = PointerState::default();
	let phys = PhysicsConfig::default();
	let reach = PointerConfig::default();
	c.bench_function("cloth_128x25_settled_frame", |b| {
		let mut cloth = Cloth::new(&config).unwrap();
		let mut surface = TraceSurface::new(1280., 960.);
		b.iter(|| {
			surface.clear();
			cloth.update(0.016, &pointer, &phys, &reach, &mut surface);
			cloth.link_count()
		});
	});
}

criterion_group!(
	benches,
	bench_small_cloth,
	bench_wide_cloth,
	bench_settled_frame,
);
criterion_main!(benches);
