// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::hash::Hash;
use std::{
	error::Error,
	fmt::{self, Display, Formatter},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
	/// The secret's byte length does not map to a supported hash algorithm.
	UnsupportedKeyLength(usize),
	/// The selected hash algorithm cannot be used with this variant.
	UnsupportedAlgorithm(Hash),
	/// The secret is empty, or not decodable under the variant's encoding.
	InvalidKey,
}

impl Display for OtpError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			OtpError::UnsupportedKeyLength(len) => {
				write!(
					f,
					"key length of {} bytes is not supported, use a key of 20, 32 or 64 bytes",
					len
				)
			}
			OtpError::UnsupportedAlgorithm(hash) => {
				write!(f, "{} cannot be used for decimal one-time passcodes", hash)
			}
			OtpError::InvalidKey => {
				f.write_str("the secret is empty or not valid for this variant")
			}
		}
	}
}

impl Error for OtpError {}
