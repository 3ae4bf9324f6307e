use std::time::{Duration, Instant};

// Fixed-step pacing for hosts without a native frame callback. The
// timestep is fixed, tick only sleeps out whatever is left of the frame.
pub struct FrameClock {
	dt: f32,
	period: Duration,
	last: Instant,
}

impl Default for FrameClock {
	fn default() -> Self {
		Self::new(0.016)
	}
}

impl FrameClock {
	pub fn new(dt: f32) -> Self {
		Self {
			dt,
			period: Duration::from_secs_f32(dt),
			last: Instant::now(),
		}
	}

	pub fn dt(&self) -> f32 {
		self.dt
	}

	pub fn period(&self) -> Duration {
		self.period
	}

	pub fn tick(&mut self) -> f32 {
		let busy = self.last.elapsed();
		if busy < self.period {
			std::thread::sleep(self.period - busy);
		}
		self.last = Instant::now();
		self.dt
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn tick_returns_the_fixed_step() {
		let mut clock = FrameClock::new(0.016);
		assert_eq!(clock.tick(), 0.016);
		assert_eq!(clock.tick(), 0.016);
	}

	#[test]
	fn tick_paces_to_the_period() {
		let mut clock = FrameClock::new(0.01);
		let start = Instant::now();
		clock.tick();
		clock.tick();
		// two ticks cannot finish faster than one full period
		assert!(start.elapsed() >= Duration::from_millis(10));
	}
}
