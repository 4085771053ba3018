// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::{
	clock::Clock, digits::Digits, encode, engine::Engine, error::OtpError, hash::Hash,
};

const DEFAULT_DELAY_WINDOW: u64 = 1;

/// A time-based one-time passcode engine compatible with mobile
/// authenticator apps.
///
/// The shared secret is a Base32 string, as carried in `otpauth://` URIs
/// and enrollment QR codes. Codes default to 6 digits over HMAC-SHA1 on a
/// 30-second interval, and verification tolerates a code one interval old
/// to absorb clock drift.
///
/// ```rust
/// use otpkit::GTotp;
///
/// let gtotp = GTotp::new("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ").unwrap();
/// let code = gtotp.now();
/// assert_eq!(code.len(), 6);
/// assert!(gtotp.verify(&code));
/// ```
pub struct GTotp {
	engine: Engine,
}

impl GTotp {
	/// Creates an engine with the default hash, digit policy, clock and
	/// tolerance.
	pub fn new(secret: &str) -> Result<Self, OtpError> {
		Self::configure(secret).build()
	}

	/// Starts a builder for an engine with non-default policies.
	pub fn configure(secret: &str) -> GTotpBuilder {
		GTotpBuilder {
			secret: secret.to_owned(),
			hash: Hash::Sha1,
			digits: Digits::Six,
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

	/// The secret in its Base32 text form, for enrollment of a prover
	/// (e.g. as the `secret` parameter of an `otpauth://` URI).
	pub fn secret_base32(&self) -> String {
		encode::base32_encode(self.engine.key())
	}
}

/// Chained-setter configuration for [GTotp]. Produced by [GTotp::configure],
/// consumed by [GTotpBuilder::build].
pub struct GTotpBuilder {
	secret: String,
	hash: Hash,
	digits: Digits,
	clock: Option<Clock>,
	delay_window: u64,
}

impl GTotpBuilder {
	/// Overrides the HMAC-SHA1 default. MD5 is rejected at build time; its
	/// output is too short for dynamic truncation.
	pub fn hash(mut self, hash: Hash) -> Self {
		self.hash = hash;
		self
	}

	/// Overrides the 6-digit default width.
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

	/// Decodes and validates the secret and produces the immutable engine.
	pub fn build(self) -> Result<GTotp, OtpError> {
		if !self.hash.supports_truncation() {
			return Err(OtpError::UnsupportedAlgorithm(self.hash));
		}
		let key = encode::base32_decode(&self.secret)?;
		if key.is_empty() {
			return Err(OtpError::InvalidKey);
		}
		let clock = self.clock.unwrap_or_default();
		Ok(GTotp {
			engine: Engine::new(key, self.hash, self.digits, clock, self.delay_window),
		})
	}
}
