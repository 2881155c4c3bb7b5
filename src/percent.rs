//! OAuth percent encoding.
//!
//! Encoding is strict: every byte of the UTF-8 representation outside of the
//! unreserved set `ALPHA / DIGIT / "-" / "." / "_" / "~"` is escaped as `%HH`
//! with uppercase hexadecimal digits. Decoding is flexible and also accepts
//! the `application/x-www-form-urlencoded` variant where `+` stands for a
//! space.
//!
//! See: <https://oauth.net/core/1.0a/#encoding_parameters>
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::error::{Error, Result};

/// Bytes escaped by [`percent_encode`]: everything but the unreserved set.
const OAUTH_ESCAPED: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'.')
	.remove(b'_')
	.remove(b'~');

/// Returns `true` if the byte is in the unreserved set and is emitted as-is
/// by [`percent_encode`].
pub const fn is_unreserved(c: u8) -> bool {
	c.is_ascii_alphanumeric() || matches!(c, b'-' | b'.' | b'_' | b'~')
}

/// Percent-encodes `s` following the OAuth rules.
///
/// An absent input encodes to the empty string.
pub fn percent_encode<'a>(s: impl Into<Option<&'a str>>) -> String {
	match s.into() {
		Some(s) if s.bytes().all(is_unreserved) => s.to_owned(),
		Some(s) => utf8_percent_encode(s, OAUTH_ESCAPED).to_string(),
		None => String::new(),
	}
}

/// Decodes a percent-encoded string.
///
/// A literal `+` decodes to a space. Decoded bytes that do not form valid
/// UTF-8 are replaced with U+FFFD. An absent input decodes to the empty
/// string.
///
/// # Errors
///
/// Returns [`Error::MalformedPercentEncoding`] if a `%` is not followed by
/// two hexadecimal digits.
pub fn percent_decode<'a>(s: impl Into<Option<&'a str>>) -> Result<String> {
	let Some(s) = s.into() else {
		return Ok(String::new());
	};

	check_escapes(s)?;

	if s.contains('+') {
		let s = s.replace('+', " ");
		Ok(percent_decode_str(&s).decode_utf8_lossy().into_owned())
	} else {
		Ok(percent_decode_str(s).decode_utf8_lossy().into_owned())
	}
}

/// Checks that every `%` in `s` starts a complete `%HH` triplet.
fn check_escapes(s: &str) -> Result<()> {
	let bytes = s.as_bytes();
	let mut i = 0;

	while i < bytes.len() {
		if bytes[i] == b'%' {
			match bytes.get(i + 1..i + 3) {
				Some([h, l]) if h.is_ascii_hexdigit() && l.is_ascii_hexdigit() => i += 3,
				_ => return Err(Error::malformed_percent_encoding(s, i)),
			}
		} else {
			i += 1;
		}
	}

	Ok(())
}
