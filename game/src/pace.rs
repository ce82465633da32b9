//! Tick pacing abstractions: the speed ramp and the tick scheduler.

use std::time::{Duration, Instant};

/// Current tick interval together with the ramp-up schedule.
///
/// The interval only ever shrinks while a game runs and is put back to
/// [`INITIAL_INTERVAL`](Self::INITIAL_INTERVAL) when the game resets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pace {
	interval: Duration,
}

impl Pace {
	/// Tick interval a game starts with.
	pub const INITIAL_INTERVAL: Duration = Duration::from_millis(333);

	/// Interval the ramp never goes below.
	pub const FLOOR: Duration = Duration::from_millis(25);

	/// Return a new [`Pace`] at the initial interval.
	pub fn new() -> Self {
		Self {
			interval: Self::INITIAL_INTERVAL,
		}
	}

	/// Return the current tick interval.
	pub fn interval(&self) -> Duration {
		self.interval
	}

	/// Shorten the interval one step. Steps shrink as the game gets
	/// faster: 5ms per meal above 150ms, then 3ms, 2ms and 1ms bands down
	/// to the floor, where the interval stops changing.
	pub(crate) fn ramp_up(&mut self) {
		let ms = self.interval.as_millis() as u64;
		let ms = if ms > 150 {
			ms - 5
		} else if ms > 100 {
			ms - 3
		} else if ms > 50 {
			ms - 2
		} else if ms > 25 {
			ms - 1
		} else {
			ms
		};
		self.interval = Duration::from_millis(ms);
	}

	#[cfg(test)]
	fn from_millis(ms: u64) -> Self {
		Self {
			interval: Duration::from_millis(ms),
		}
	}
}

impl Default for Pace {
	fn default() -> Self {
		Self::new()
	}
}

/// Deadline-based tick scheduler.
///
/// The caller supplies the clock: every method takes an explicit
/// [`Instant`], so tests drive the ticker with fabricated instants instead
/// of sleeping.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
	interval: Duration,
	deadline: Instant,
}

impl Ticker {
	/// Return a [`Ticker`] whose first tick is due `interval` after `now`.
	pub fn new(interval: Duration, now: Instant) -> Self {
		Self {
			interval,
			deadline: now + interval,
		}
	}

	/// Report whether a tick is due and, if it is, arm the next deadline.
	///
	/// Re-arms from `now` rather than from the missed deadline, so a
	/// stalled frame loop does not produce a burst of catch-up ticks.
	pub fn due(&mut self, now: Instant) -> bool {
		if now >= self.deadline {
			self.deadline = now + self.interval;
			true
		} else {
			false
		}
	}

	/// Replace the interval, dropping the pending deadline. The change
	/// applies from the next tick on: the new deadline is `interval`
	/// after `now`, never the one already in flight.
	pub fn reschedule(&mut self, interval: Duration, now: Instant) {
		self.interval = interval;
		self.deadline = now + interval;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ramp_steps_shrink_with_speed() {
		for (start, expected) in [
			(333, 328),
			(151, 146),
			(150, 147),
			(101, 98),
			(100, 98),
			(51, 49),
			(50, 49),
			(26, 25),
			(25, 25),
		] {
			let mut pace = Pace::from_millis(start);
			pace.ramp_up();

			assert_eq!(
				pace.interval(),
				Duration::from_millis(expected),
				"ramping up from {}ms",
				start
			);
		}
	}

	#[test]
	fn never_drops_below_the_floor() {
		let mut pace = Pace::new();
		let mut last = pace.interval();

		for _ in 0..500 {
			pace.ramp_up();
			assert!(pace.interval() <= last);
			assert!(pace.interval() >= Pace::FLOOR);
			last = pace.interval();
		}

		assert_eq!(pace.interval(), Pace::FLOOR);
	}

	#[test]
	fn fires_only_at_the_deadline() {
		let start = Instant::now();
		let mut ticker = Ticker::new(Duration::from_millis(100), start);

		assert!(!ticker.due(start));
		assert!(!ticker.due(start + Duration::from_millis(99)));
		assert!(ticker.due(start + Duration::from_millis(100)));

		// Re-armed from the firing instant.
		assert!(!ticker.due(start + Duration::from_millis(150)));
		assert!(ticker.due(start + Duration::from_millis(200)));
	}

	#[test]
	fn reschedule_applies_from_the_next_tick() {
		let start = Instant::now();
		let mut ticker = Ticker::new(Duration::from_millis(100), start);

		assert!(ticker.due(start + Duration::from_millis(100)));

		ticker.reschedule(
			Duration::from_millis(50),
			start + Duration::from_millis(100),
		);

		assert!(!ticker.due(start + Duration::from_millis(149)));
		assert!(ticker.due(start + Duration::from_millis(150)));
	}
}
