// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::error::OtpError;
use digest::{core_api::BlockSizeUser, Digest, KeyInit};
use hmac::{Mac, SimpleHmac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use std::fmt::{self, Display, Formatter};

/// The hash algorithm a passcode engine computes with.
///
/// Time-based decimal passcodes use the algorithm as an HMAC over the moving
/// counter; the PIN-augmented variant digests a challenge string directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Hash {
	Sha1,
	Sha256,
	Sha512,
	Md5,
}

impl Hash {
	/// Infers the algorithm from the secret's byte length: 20 bytes selects
	/// SHA-1, 32 bytes SHA-256 and 64 bytes SHA-512. Any other length is a
	/// construction error.
	pub(crate) fn from_key_length(length: usize) -> Result<Self, OtpError> {
		match length {
			20 => Ok(Hash::Sha1),
			32 => Ok(Hash::Sha256),
			64 => Ok(Hash::Sha512),
			other => Err(OtpError::UnsupportedKeyLength(other)),
		}
	}

	/// Whether the MAC output is long enough for dynamic truncation, which
	/// reads 4 bytes at an offset of up to 15.
	pub(crate) fn supports_truncation(self) -> bool {
		!matches!(self, Hash::Md5)
	}

	/// Computes the MAC of `message` under `key`.
	pub(crate) fn hmac(self, key: &[u8], message: &[u8]) -> Vec<u8> {
		match self {
			Hash::Sha1 => hmac_bytes::<Sha1>(key, message),
			Hash::Sha256 => hmac_bytes::<Sha256>(key, message),
			Hash::Sha512 => hmac_bytes::<Sha512>(key, message),
			Hash::Md5 => hmac_bytes::<Md5>(key, message),
		}
	}

	/// Computes the plain (unkeyed) digest of `message`.
	pub(crate) fn digest(self, message: &[u8]) -> Vec<u8> {
		match self {
			Hash::Sha1 => Sha1::digest(message).to_vec(),
			Hash::Sha256 => Sha256::digest(message).to_vec(),
			Hash::Sha512 => Sha512::digest(message).to_vec(),
			Hash::Md5 => Md5::digest(message).to_vec(),
		}
	}
}

impl Display for Hash {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Hash::Sha1 => "SHA-1",
			Hash::Sha256 => "SHA-256",
			Hash::Sha512 => "SHA-512",
			Hash::Md5 => "MD5",
		})
	}
}

fn hmac_bytes<D: Digest + BlockSizeUser>(key: &[u8], message: &[u8]) -> Vec<u8> {
	// HMAC hashes oversized keys down and pads short ones, so any key the
	// builders accept is a valid key here.
	let mut mac = <SimpleHmac<D> as KeyInit>::new_from_slice(key)
		.expect("HMAC accepts keys of any length");
	mac.update(message);
	mac.finalize().into_bytes().to_vec()
}
