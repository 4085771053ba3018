// SPDX-License-Identifier: MIT OR Apache-2.0
use std::time::{SystemTime, UNIX_EPOCH};

/// The default step size for time-based passcodes, in seconds.
pub const DEFAULT_INTERVAL: u64 = 30;

/// Supplies the moving counter for time-based passcodes.
///
/// A [Clock] divides elapsed unix time into fixed intervals, and hands the
/// interval index (or the raw seconds) to the passcode engine. The time
/// source is a callback so that verification logic stays deterministic under
/// test, and so the clock works wherever some notion of the current time
/// exists.
pub struct Clock {
	interval: u64,
	time_source: Box<dyn Fn() -> u64 + Send + Sync>,
}

impl Clock {
	/// Creates a clock over the system time with the default 30-second
	/// interval.
	pub fn new() -> Self {
		Self::with_interval(DEFAULT_INTERVAL)
	}

	/// Creates a clock over the system time with the given interval,
	/// in seconds.
	pub fn with_interval(interval: u64) -> Self {
		Self::with_time_source(interval, system_seconds)
	}

	/// Creates a clock that reads the current unix time, in seconds, from
	/// the given callback.
	pub fn with_time_source<F>(interval: u64, time_source: F) -> Self
	where
		F: Fn() -> u64 + Send + Sync + 'static,
	{
		assert!(interval > 0, "interval must be non-zero");
		Clock {
			interval,
			time_source: Box::new(time_source),
		}
	}

	/// The current interval index, i.e. elapsed seconds divided by the
	/// interval size.
	pub fn current_interval(&self) -> u64 {
		(self.time_source)() / self.interval
	}

	/// The current unix time in seconds.
	pub fn current_seconds(&self) -> u64 {
		(self.time_source)()
	}
}

impl Default for Clock {
	fn default() -> Self {
		Self::new()
	}
}

fn system_seconds() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("time went backwards")
		.as_secs()
}
