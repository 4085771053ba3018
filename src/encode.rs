// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::error::OtpError;
use data_encoding::{BASE32_NOPAD, HEXUPPER};

/// Encodes bytes with the RFC 4648 Base32 alphabet, without padding. This is
/// the form authenticator apps expect in enrollment secrets.
pub fn base32_encode(bytes: &[u8]) -> String {
	BASE32_NOPAD.encode(bytes)
}

/// Decodes an RFC 4648 Base32 secret.
///
/// Secrets are frequently pasted with mixed case, spaces or trailing `=`
/// padding; those are stripped before decoding.
pub fn base32_decode(text: &str) -> Result<Vec<u8>, OtpError> {
	let normalized: String = text
		.chars()
		.filter(|c| !c.is_ascii_whitespace() && *c != '=')
		.map(|c| c.to_ascii_uppercase())
		.collect();
	BASE32_NOPAD
		.decode(normalized.as_bytes())
		.map_err(|_| OtpError::InvalidKey)
}

/// Encodes bytes as uppercase hexadecimal.
pub(crate) fn hex_upper(bytes: &[u8]) -> String {
	HEXUPPER.encode(bytes)
}
