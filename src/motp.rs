// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::{clock::Clock, digits::Digits, encode, error::OtpError, hash::Hash};
use constant_time_eq::constant_time_eq;

const DEFAULT_DELAY_WINDOW: u64 = 3;

/// A PIN-augmented one-time passcode engine producing short hexadecimal
/// codes, as used by mobile-OTP style tokens.
///
/// The challenge string is the current 10-second period as decimal text,
/// followed by the shared secret and the user's PIN, with no separators.
/// Its digest (MD5 unless overridden) is hex-encoded and cut to the
/// configured length, 6 characters by default. Verification is
/// case-insensitive and tolerates codes up to 3 periods old.
///
/// ```rust
/// use otpkit::Motp;
///
/// let motp = Motp::new("1234", "sharedsecret").unwrap();
/// let code = motp.now();
/// assert_eq!(code.len(), 6);
/// assert!(motp.verify(&code.to_lowercase()));
/// ```
pub struct Motp {
	secret: String,
	pin: String,
	hash: Hash,
	length: usize,
	clock: Clock,
	delay_window: u64,
}

impl Motp {
	/// Creates an engine with the default hash, code length, clock and
	/// tolerance.
	pub fn new(pin: &str, secret: &str) -> Result<Self, OtpError> {
		Self::configure(pin, secret).build()
	}

	/// Starts a builder for an engine with non-default policies.
	pub fn configure(pin: &str, secret: &str) -> MotpBuilder {
		MotpBuilder {
			pin: pin.to_owned(),
			secret: secret.to_owned(),
			hash: Hash::Md5,
			digits: Digits::Six,
			clock: None,
			delay_window: DEFAULT_DELAY_WINDOW,
		}
	}

	/// The passcode for the current 10-second period.
	pub fn now(&self) -> String {
		self.code_at(self.clock.current_seconds())
	}

	/// Whether `otp` matches the code of the current period or one of the
	/// tolerated periods before it, ignoring case.
	pub fn verify(&self, otp: &str) -> bool {
		let supplied = otp.to_ascii_uppercase();
		let seconds = self.clock.current_seconds();
		for i in (0..=self.delay_window).rev() {
			let period_start = match seconds.checked_sub(i * 10) {
				Some(seconds) => seconds,
				None => continue,
			};
			let candidate = self.code_at(period_start);
			if constant_time_eq(candidate.as_bytes(), supplied.as_bytes()) {
				return true;
			}
		}
		false
	}

	fn code_at(&self, seconds: u64) -> String {
		let mut challenge = (seconds / 10).to_string();
		challenge.push_str(&self.secret);
		challenge.push_str(&self.pin);
		let digest = self.hash.digest(challenge.as_bytes());
		let mut code = encode::hex_upper(&digest);
		code.truncate(self.length);
		code
	}
}

/// Chained-setter configuration for [Motp]. Produced by [Motp::configure],
/// consumed by [MotpBuilder::build].
pub struct MotpBuilder {
	pin: String,
	secret: String,
	hash: Hash,
	digits: Digits,
	clock: Option<Clock>,
	delay_window: u64,
}

impl MotpBuilder {
	/// Overrides the MD5 default digest.
	pub fn hash(mut self, hash: Hash) -> Self {
		self.hash = hash;
		self
	}

	/// Overrides the 6-character default code length.
	pub fn digits(mut self, digits: Digits) -> Self {
		self.digits = digits;
		self
	}

	/// Replaces the system clock, e.g. with a fixed time source in tests.
	pub fn clock(mut self, clock: Clock) -> Self {
		self.clock = Some(clock);
		self
	}

	/// Overrides how many past 10-second periods verification accepts.
	pub fn delay_window(mut self, delay_window: u64) -> Self {
		self.delay_window = delay_window;
		self
	}

	/// Validates the secret and produces the immutable engine.
	pub fn build(self) -> Result<Motp, OtpError> {
		if self.secret.is_empty() {
			return Err(OtpError::InvalidKey);
		}
		Ok(Motp {
			secret: self.secret,
			pin: self.pin,
			hash: self.hash,
			length: self.digits.length(),
			clock: self.clock.unwrap_or_default(),
			delay_window: self.delay_window,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::Motp;
	use crate::{clock::Clock, digits::Digits, error::OtpError, hash::Hash};

	fn motp_at(seconds: u64) -> Motp {
		Motp::configure("1234", "sharedsecret")
			.clock(Clock::with_time_source(10, move || seconds))
			.build()
			.unwrap()
	}

	#[test]
	fn codes_are_six_uppercase_hex_characters() {
		let code = motp_at(1_000_000).now();
		assert_eq!(code.len(), 6);
		assert!(code
			.chars()
			.all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
	}

	#[test]
	fn verification_ignores_case() {
		let motp = motp_at(1_000_000);
		let code = motp.now();
		assert!(motp.verify(&code));
		assert!(motp.verify(&code.to_lowercase()));
		assert!(motp.verify(&code.to_uppercase()));
	}

	#[test]
	fn verify_accepts_codes_inside_the_window() {
		let now = 1_000_000;
		let verifier = motp_at(now);
		for periods_behind in 0..=3 {
			let prover = motp_at(now - periods_behind * 10);
			assert!(
				verifier.verify(&prover.now()),
				"code {} periods behind should verify",
				periods_behind
			);
		}
	}

	#[test]
	fn verify_rejects_codes_outside_the_window() {
		let now = 1_000_000;
		let verifier = motp_at(now);
		assert!(!verifier.verify(&motp_at(now - 40).now()));
		assert!(!verifier.verify(&motp_at(now + 10).now()));
	}

	#[test]
	fn codes_change_with_the_period_and_the_pin() {
		let now = 1_000_000;
		assert_ne!(motp_at(now).now(), motp_at(now + 10).now());

		let other_pin = Motp::configure("9999", "sharedsecret")
			.clock(Clock::with_time_source(10, move || now))
			.build()
			.unwrap();
		assert_ne!(motp_at(now).now(), other_pin.now());
	}

	#[test]
	fn generation_is_deterministic() {
		let motp = motp_at(1_000_000);
		assert_eq!(motp.now(), motp.now());
	}

	#[test]
	fn seconds_within_one_period_share_a_code() {
		assert_eq!(motp_at(1_000_000).now(), motp_at(1_000_009).now());
	}

	#[test]
	fn sha1_digest_can_be_selected() {
		let motp = Motp::configure("1234", "sharedsecret")
			.hash(Hash::Sha1)
			.digits(Digits::Eight)
			.clock(Clock::with_time_source(10, || 1_000_000))
			.build()
			.unwrap();
		let code = motp.now();
		assert_eq!(code.len(), 8);
		assert!(motp.verify(&code));
		assert_ne!(code, motp_at(1_000_000).now());
	}

	#[test]
	fn empty_secrets_fail_construction() {
		assert_eq!(
			Motp::new("1234", "").err(),
			Some(OtpError::InvalidKey)
		);
	}

	#[test]
	fn verifies_near_the_epoch_without_wrapping() {
		let motp = motp_at(25);
		assert!(motp.verify(&motp.now()));
	}
}
