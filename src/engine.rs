// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::{
	clock::Clock,
	digits::Digits,
	hash::Hash,
	otp::{truncate, Otp},
};

/// The shared machinery behind both decimal passcode variants: an immutable
/// bundle of key material and policy, generating codes for the clock's
/// current interval and checking candidates over a backward-looking window.
pub(crate) struct Engine {
	key: Vec<u8>,
	hash: Hash,
	digits: Digits,
	clock: Clock,
	delay_window: u64,
}

impl Engine {
	pub(crate) fn new(
		key: Vec<u8>,
		hash: Hash,
		digits: Digits,
		clock: Clock,
		delay_window: u64,
	) -> Self {
		Engine {
			key,
			hash,
			digits,
			clock,
			delay_window,
		}
	}

	#[inline]
	pub(crate) fn key(&self) -> &[u8] {
		&self.key
	}

	/// The code for one specific interval: MAC over the 8-byte big-endian
	/// interval, dynamically truncated to the digit policy.
	pub(crate) fn code_at(&self, interval: u64) -> Otp {
		let digest = self.hash.hmac(&self.key, &interval.to_be_bytes());
		truncate(&digest, self.digits)
	}

	/// The code for the clock's current interval, zero-padded to the
	/// configured width.
	pub(crate) fn now(&self) -> String {
		self.code_at(self.clock.current_interval()).to_string()
	}

	/// Checks a candidate code against the current interval and up to
	/// `delay_window` intervals before it, most-delayed first.
	///
	/// Input that does not parse as a number in the code's domain never
	/// matches. Future intervals are never checked; a prover may lag the
	/// verifier's clock but not lead it.
	pub(crate) fn verify(&self, otp: &str) -> bool {
		let supplied = match otp.parse::<u64>() {
			Ok(value) => value,
			Err(_) => return false,
		};
		let supplied = match u32::try_from(supplied) {
			Ok(value) => value,
			Err(_) => return false,
		};

		let current = self.clock.current_interval();
		for i in (0..=self.delay_window).rev() {
			// Intervals before the epoch do not exist; skip rather than wrap.
			let interval = match current.checked_sub(i) {
				Some(interval) => interval,
				None => continue,
			};
			if self.code_at(interval) == supplied {
				return true;
			}
		}
		false
	}
}
