// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::{
	clock::Clock, digits::Digits, engine::Engine, error::OtpError, hash::Hash,
};

const DEFAULT_DELAY_WINDOW: u64 = 3;

/// A time-based one-time passcode engine over a raw shared secret.
///
/// The secret's UTF-8 bytes are used directly as the HMAC key, and the key
/// length selects the algorithm: 20 bytes for SHA-1, 32 for SHA-256, 64 for
/// SHA-512. Any other length fails construction. Codes default to 8 digits
/// on a 30-second interval, and verification tolerates codes up to 3
/// intervals old.
///
/// ```rust
/// use otpkit::Totp;
///
/// let totp = Totp::new("12345678901234567890").unwrap();
/// let code = totp.now();
/// assert_eq!(code.len(), 8);
/// assert!(totp.verify(&code));
/// ```
pub struct Totp {
	engine: Engine,
}

impl Totp {
	/// Creates an engine with the default digit policy, clock and tolerance.
	pub fn new(secret: &str) -> Result<Self, OtpError> {
		Self::configure(secret).build()
	}

	/// Starts a builder for an engine with non-default policies.
	pub fn configure(secret: &str) -> TotpBuilder {
		TotpBuilder {
			secret: secret.to_owned(),
			digits: Digits::Eight,
			clock: None,
			delay_window: DEFAULT_DELAY_WINDOW,
		}
	}

	/// The passcode for the current interval.
	pub fn now(&self) -> String {
		self.engine.now()
	}

	/// Whether `otp` matches the code of the current interval or one of the
	/// tolerated intervals before it. Input that does not parse as a
	/// non-negative number never matches.
	pub fn verify(&self, otp: &str) -> bool {
		self.engine.verify(otp)
	}
}

/// Chained-setter configuration for [Totp]. Produced by [Totp::configure],
/// consumed by [TotpBuilder::build].
pub struct TotpBuilder {
	secret: String,
	digits: Digits,
	clock: Option<Clock>,
	delay_window: u64,
}

impl TotpBuilder {
	/// Overrides the 8-digit default width.
	pub fn digits(mut self, digits: Digits) -> Self {
		self.digits = digits;
		self
	}

	/// Replaces the system clock, e.g. with a fixed time source in tests.
	pub fn clock(mut self, clock: Clock) -> Self {
		self.clock = Some(clock);
		self
	}

	/// Overrides how many past intervals verification accepts.
	pub fn delay_window(mut self, delay_window: u64) -> Self {
		self.delay_window = delay_window;
		self
	}

	/// Validates the secret and produces the immutable engine.
	pub fn build(self) -> Result<Totp, OtpError> {
		let key = self.secret.into_bytes();
		let hash = Hash::from_key_length(key.len())?;
		let clock = self.clock.unwrap_or_default();
		Ok(Totp {
			engine: Engine::new(key, hash, self.digits, clock, self.delay_window),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::Totp;
	use crate::{clock::Clock, digits::Digits, error::OtpError};

	const KEY20: &str = "12345678901234567890";
	const KEY32: &str = "12345678901234567890123456789012";
	const KEY64: &str = "1234567890123456789012345678901234567890123456789012345678901234";

	const REFERENCE_TIMES: [u64; 6] = [
		59,
		1_111_111_109,
		1_111_111_111,
		1_234_567_890,
		2_000_000_000,
		20_000_000_000,
	];

	fn totp_at(secret: &str, seconds: u64) -> Totp {
		Totp::configure(secret)
			.clock(Clock::with_time_source(30, move || seconds))
			.build()
			.unwrap()
	}

	#[test]
	fn sha1_reference_codes() {
		let expected = [
			"94287082", "07081804", "14050471", "89005924", "69279037", "65353130",
		];
		for (seconds, code) in REFERENCE_TIMES.iter().zip(expected) {
			assert_eq!(totp_at(KEY20, *seconds).now(), code);
		}
	}

	#[test]
	fn sha256_reference_codes() {
		let expected = [
			"46119246", "68084774", "67062674", "91819424", "90698825", "77737706",
		];
		for (seconds, code) in REFERENCE_TIMES.iter().zip(expected) {
			assert_eq!(totp_at(KEY32, *seconds).now(), code);
		}
	}

	#[test]
	fn sha512_reference_codes() {
		let expected = [
			"90693936", "25091201", "99943326", "93441116", "38618901", "47863826",
		];
		for (seconds, code) in REFERENCE_TIMES.iter().zip(expected) {
			assert_eq!(totp_at(KEY64, *seconds).now(), code);
		}
	}

	#[test]
	fn codes_keep_their_leading_zeroes() {
		let totp = totp_at(KEY20, 1_111_111_109);
		let code = totp.now();
		assert_eq!(code, "07081804");
		assert_eq!(code.len(), 8);
	}

	#[test]
	fn verify_accepts_the_current_code() {
		for secret in [KEY20, KEY32, KEY64] {
			let totp = totp_at(secret, 1_234_567_890);
			assert!(totp.verify(&totp.now()));
		}
	}

	#[test]
	fn verify_accepts_codes_inside_the_window() {
		let now = 1_234_567_890;
		let verifier = totp_at(KEY20, now);
		for intervals_behind in 0..=3 {
			let prover = totp_at(KEY20, now - intervals_behind * 30);
			assert!(
				verifier.verify(&prover.now()),
				"code {} intervals behind should verify",
				intervals_behind
			);
		}
	}

	#[test]
	fn verify_rejects_codes_outside_the_window() {
		let now = 1_234_567_890;
		let verifier = totp_at(KEY20, now);
		let too_old = totp_at(KEY20, now - 4 * 30);
		assert!(!verifier.verify(&too_old.now()));
		let ahead = totp_at(KEY20, now + 30);
		assert!(!verifier.verify(&ahead.now()));
	}

	#[test]
	fn widened_window_accepts_older_codes() {
		let now = 1_234_567_890;
		let verifier = Totp::configure(KEY20)
			.clock(Clock::with_time_source(30, move || now))
			.delay_window(5)
			.build()
			.unwrap();
		let prover = totp_at(KEY20, now - 5 * 30);
		assert!(verifier.verify(&prover.now()));
	}

	#[test]
	fn digit_policy_controls_width() {
		let digit_policies = [
			(Digits::One, 1),
			(Digits::Four, 4),
			(Digits::Six, 6),
			(Digits::Seven, 7),
			(Digits::Eight, 8),
		];
		for (digits, width) in digit_policies {
			let totp = Totp::configure(KEY20)
				.digits(digits)
				.clock(Clock::with_time_source(30, || 1_111_111_111))
				.build()
				.unwrap();
			let code = totp.now();
			assert_eq!(code.len(), width);
			assert!(totp.verify(&code));
		}
	}

	#[test]
	fn six_digit_codes_are_the_tail_of_eight_digit_codes() {
		let eight = totp_at(KEY20, 59).now();
		let six = Totp::configure(KEY20)
			.digits(Digits::Six)
			.clock(Clock::with_time_source(30, || 59))
			.build()
			.unwrap()
			.now();
		assert_eq!(six, &eight[2..]);
	}

	#[test]
	fn generation_is_deterministic() {
		let totp = totp_at(KEY20, 1_234_567_890);
		assert_eq!(totp.now(), totp.now());
	}

	#[test]
	fn unsupported_key_lengths_fail_construction() {
		for secret in ["", "1234", "123456789012345678901", &KEY64[..63]] {
			assert_eq!(
				Totp::new(secret).err(),
				Some(OtpError::UnsupportedKeyLength(secret.len()))
			);
		}
	}
}
