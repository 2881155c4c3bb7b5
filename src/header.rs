//! `Authorization: OAuth ...` header parsing.
//!
//! See: <https://oauth.net/core/1.0a/#auth_header>
use crate::{
	constants::OAUTH_SCHEME_PREFIX,
	error::{Error, Result},
	form::{ParameterMap, insert_first},
};

/// Parses the value of an `Authorization` header using the OAuth scheme.
///
/// The value must start with the exact prefix `OAuth ` (case-sensitive,
/// single space), otherwise the result is empty. The remainder is split on
/// `,` and every element on its first `=`. Keys and values are trimmed but
/// neither unquoted nor percent-decoded: `oauth_nonce="N"` yields the value
/// `"N"` with its quotes. If a key occurs more than once, the first occurrence
/// wins.
///
/// # Errors
///
/// Returns [`Error::MalformedAuthorizationHeader`] if an element has no `=`.
/// Trailing commas are tolerated.
pub fn parse_authorization_header<'a>(header: impl Into<Option<&'a str>>) -> Result<ParameterMap> {
	let mut params = ParameterMap::new();

	let Some(header) = header.into() else {
		return Ok(params);
	};

	let Some(elements) = header.strip_prefix(OAUTH_SCHEME_PREFIX) else {
		log::debug!("ignoring non-OAuth authorization header");
		return Ok(params);
	};

	let trimmed = elements.trim_end_matches(',');
	if trimmed.is_empty() && !elements.is_empty() {
		// Only commas: no element at all.
		return Ok(params);
	}

	let elements = trimmed;

	for element in elements.split(',') {
		let (key, value) = element
			.split_once('=')
			.ok_or_else(|| Error::malformed_authorization_header(element))?;

		log::trace!("authorization header parameter `{}`", key.trim());
		insert_first(&mut params, key.trim().to_owned(), value.trim().to_owned());
	}

	Ok(params)
}

#[cfg(test)]
mod tests {
	use super::*;

	use crate::constants::{OAUTH_CONSUMER_KEY, OAUTH_NONCE, OAUTH_SIGNATURE};

	#[test]
	fn quotes_are_preserved() {
		let params = parse_authorization_header("OAuth realm=\"r\", oauth_nonce=\"N\"").unwrap();

		assert_eq!(params.len(), 2);
		assert_eq!(params["realm"], "\"r\"");
		assert_eq!(params[OAUTH_NONCE], "\"N\"");
	}

	#[test]
	fn values_are_not_decoded() {
		let params = parse_authorization_header(
			"OAuth oauth_consumer_key=\"dpf43f3p2l4k3l03\",oauth_signature=\"tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D\"",
		)
		.unwrap();

		assert_eq!(params[OAUTH_CONSUMER_KEY], "\"dpf43f3p2l4k3l03\"");
		assert_eq!(
			params[OAUTH_SIGNATURE],
			"\"tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D\""
		);
	}

	#[test]
	fn unquoted_values_and_whitespace() {
		let params = parse_authorization_header("OAuth  a = 1 ,\tb=2").unwrap();
		assert_eq!(params["a"], "1");
		assert_eq!(params["b"], "2");
	}

	#[test]
	fn value_keeps_further_equals() {
		let params = parse_authorization_header("OAuth oauth_signature=abc==, x=").unwrap();
		assert_eq!(params[OAUTH_SIGNATURE], "abc==");
		assert_eq!(params["x"], "");
	}

	#[test]
	fn duplicate_keys_first_wins() {
		let params = parse_authorization_header("OAuth a=1, a=2").unwrap();
		assert_eq!(params.len(), 1);
		assert_eq!(params["a"], "1");
	}

	#[test]
	fn trailing_comma() {
		let params = parse_authorization_header("OAuth a=\"1\",").unwrap();
		assert_eq!(params.len(), 1);

		let params = parse_authorization_header("OAuth a=1,,").unwrap();
		assert_eq!(params.len(), 1);
		assert_eq!(params["a"], "1");

		assert!(parse_authorization_header("OAuth ,,").unwrap().is_empty());
	}

	#[test]
	fn other_schemes_are_ignored() {
		assert!(parse_authorization_header(None::<&str>).unwrap().is_empty());
		assert!(parse_authorization_header("").unwrap().is_empty());
		assert!(parse_authorization_header("Bearer abc").unwrap().is_empty());
		assert!(parse_authorization_header("oauth a=1").unwrap().is_empty());
		assert!(parse_authorization_header("OAuth").unwrap().is_empty());
	}

	#[test]
	fn element_without_equals() {
		let result = parse_authorization_header("OAuth a=1, broken");
		assert!(matches!(
			result,
			Err(Error::MalformedAuthorizationHeader(element)) if element == " broken"
		));

		assert!(parse_authorization_header("OAuth a=1,,b=2").is_err());
		assert!(parse_authorization_header("OAuth ").is_err());
	}
}
