// SPDX-License-Identifier: MIT OR Apache-2.0

/// The number of characters in a generated passcode.
///
/// For decimal passcodes this also fixes the modulus (`10^n`) applied to the
/// truncated hash; for hexadecimal passcodes only the character length is
/// used.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Digits {
	Zero,
	One,
	Two,
	Three,
	Four,
	Five,
	Six,
	Seven,
	Eight,
}

impl Digits {
	/// The rendered passcode width in characters.
	#[inline]
	pub const fn length(self) -> usize {
		match self {
			Digits::Zero => 0,
			Digits::One => 1,
			Digits::Two => 2,
			Digits::Three => 3,
			Digits::Four => 4,
			Digits::Five => 5,
			Digits::Six => 6,
			Digits::Seven => 7,
			Digits::Eight => 8,
		}
	}

	/// The modulus applied to the truncated hash, `10^length`.
	#[inline]
	pub(crate) const fn modulus(self) -> u32 {
		match self {
			Digits::Zero => 1,
			Digits::One => 10,
			Digits::Two => 100,
			Digits::Three => 1_000,
			Digits::Four => 10_000,
			Digits::Five => 100_000,
			Digits::Six => 1_000_000,
			Digits::Seven => 10_000_000,
			Digits::Eight => 100_000_000,
		}
	}
}

impl Default for Digits {
	fn default() -> Self {
		Digits::Six
	}
}

#[cfg(test)]
mod tests {
	use super::Digits;

	#[test]
	fn modulus_is_ten_to_the_length() {
		let all = [
			Digits::Zero,
			Digits::One,
			Digits::Two,
			Digits::Three,
			Digits::Four,
			Digits::Five,
			Digits::Six,
			Digits::Seven,
			Digits::Eight,
		];
		for digits in all {
			assert_eq!(digits.modulus(), 10u32.pow(digits.length() as u32));
		}
	}

	#[test]
	fn default_is_six() {
		assert_eq!(Digits::default(), Digits::Six);
	}
}
