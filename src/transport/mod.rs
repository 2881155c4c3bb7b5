//! Reading OAuth parameters from HTTP messages.
use http::{HeaderMap, HeaderName, HeaderValue, header};

use crate::{
	constants::FORM_ENCODED,
	error::Result,
	form::{ParameterMap, decode_form_reader},
	header::parse_authorization_header,
};

/// Name of the header carrying the OAuth protocol parameters.
pub const AUTHORIZATION: HeaderName = header::AUTHORIZATION;

/// `Content-Type: application/x-www-form-urlencoded` header value.
pub const APPLICATION_X_WWW_FORM_URLENCODED: HeaderValue = HeaderValue::from_static(FORM_ENCODED);

/// Parses the OAuth parameters of the `Authorization` header.
///
/// Returns an empty map if the header is missing, is not visible ASCII, or
/// does not use the OAuth scheme.
pub fn authorization_params(headers: &HeaderMap) -> Result<ParameterMap> {
	let Some(value) = headers.get(AUTHORIZATION) else {
		return Ok(ParameterMap::new());
	};

	match value.to_str() {
		Ok(value) => parse_authorization_header(value),
		Err(_) => {
			log::warn!("ignoring non-ASCII authorization header");
			Ok(ParameterMap::new())
		}
	}
}

/// Returns `true` if the `Content-Type` header announces a form-encoded
/// body. Parameters such as `charset` are ignored.
pub fn is_form_encoded(headers: &HeaderMap) -> bool {
	headers.get(header::CONTENT_TYPE).is_some_and(|content_type| {
		content_type
			.as_bytes()
			.starts_with(APPLICATION_X_WWW_FORM_URLENCODED.as_bytes())
	})
}

/// Decodes the parameters of a form-encoded body.
///
/// Bodies with any other content type yield an empty map.
pub fn form_body_params(
	headers: &HeaderMap,
	body: &[u8],
) -> Result<ParameterMap<Option<String>>> {
	if is_form_encoded(headers) {
		decode_form_reader(body)
	} else {
		log::debug!("body is not form-encoded, skipping");
		Ok(ParameterMap::new())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use crate::{
		Error,
		constants::{OAUTH_CONSUMER_KEY, OAUTH_TOKEN},
	};

	fn headers(pairs: &[(HeaderName, &'static str)]) -> HeaderMap {
		let mut headers = HeaderMap::new();
		for (name, value) in pairs {
			headers.insert(name.clone(), HeaderValue::from_static(*value));
		}
		headers
	}

	// --- authorization_params ---

	#[test]
	fn authorization_from_headers() {
		let headers = headers(&[(
			AUTHORIZATION,
			"OAuth oauth_consumer_key=\"key\", oauth_token=\"tok\"",
		)]);

		let params = authorization_params(&headers).unwrap();
		assert_eq!(params[OAUTH_CONSUMER_KEY], "\"key\"");
		assert_eq!(params[OAUTH_TOKEN], "\"tok\"");
	}

	#[test]
	fn authorization_missing_or_other_scheme() {
		assert!(authorization_params(&HeaderMap::new()).unwrap().is_empty());

		let headers = headers(&[(AUTHORIZATION, "Basic dXNlcjpwYXNz")]);
		assert!(authorization_params(&headers).unwrap().is_empty());
	}

	#[test]
	fn authorization_malformed() {
		let headers = headers(&[(AUTHORIZATION, "OAuth oauth_token")]);
		assert!(matches!(
			authorization_params(&headers),
			Err(Error::MalformedAuthorizationHeader(_))
		));
	}

	// --- form_body_params ---

	#[test]
	fn form_content_type() {
		assert!(is_form_encoded(&headers(&[(
			header::CONTENT_TYPE,
			"application/x-www-form-urlencoded"
		)])));
		assert!(is_form_encoded(&headers(&[(
			header::CONTENT_TYPE,
			"application/x-www-form-urlencoded; charset=utf-8"
		)])));
		assert!(!is_form_encoded(&headers(&[(
			header::CONTENT_TYPE,
			"application/json"
		)])));
		assert!(!is_form_encoded(&HeaderMap::new()));
	}

	#[test]
	fn body_params() {
		let form = headers(&[(header::CONTENT_TYPE, "application/x-www-form-urlencoded")]);
		let params = form_body_params(&form, b"status=hello+world&oauth_token=t").unwrap();
		assert_eq!(params["status"].as_deref(), Some("hello world"));
		assert_eq!(params[OAUTH_TOKEN].as_deref(), Some("t"));

		let json = headers(&[(header::CONTENT_TYPE, "application/json")]);
		assert!(form_body_params(&json, b"{\"a\":1}").unwrap().is_empty());
	}
}
