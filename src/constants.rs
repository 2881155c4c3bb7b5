//! Well-known OAuth 1.0 protocol values.
//!
//! See: <https://oauth.net/core/1.0a/>

/// Value of the `oauth_version` parameter.
pub const VERSION_1_0: &str = "1.0";

/// Character encoding used for every percent-encoded value.
pub const ENCODING: &str = "UTF-8";

/// MIME type of form-encoded request and response bodies.
pub const FORM_ENCODED: &str = "application/x-www-form-urlencoded";

/// Name of the HTTP header carrying the OAuth protocol parameters.
pub const HTTP_AUTHORIZATION_HEADER: &str = "Authorization";

pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";

pub const OAUTH_TOKEN: &str = "oauth_token";

pub const OAUTH_TOKEN_SECRET: &str = "oauth_token_secret";

pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";

pub const OAUTH_SIGNATURE: &str = "oauth_signature";

pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";

pub const OAUTH_NONCE: &str = "oauth_nonce";

pub const OAUTH_VERSION: &str = "oauth_version";

pub const OAUTH_CALLBACK: &str = "oauth_callback";

pub const OAUTH_CALLBACK_CONFIRMED: &str = "oauth_callback_confirmed";

pub const OAUTH_VERIFIER: &str = "oauth_verifier";

/// Callback value used when the consumer cannot receive a redirection
/// (out-of-band).
pub const OUT_OF_BAND: &str = "oob";

/// Prefix of an `Authorization` header value using the OAuth scheme.
pub(crate) const OAUTH_SCHEME_PREFIX: &str = "OAuth ";

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn protocol_values() {
		assert_eq!(VERSION_1_0, "1.0");
		assert_eq!(ENCODING, "UTF-8");
		assert_eq!(FORM_ENCODED, "application/x-www-form-urlencoded");
		assert_eq!(HTTP_AUTHORIZATION_HEADER, "Authorization");
		assert_eq!(OUT_OF_BAND, "oob");
	}

	#[test]
	fn parameter_names() {
		let names = [
			OAUTH_CONSUMER_KEY,
			OAUTH_TOKEN,
			OAUTH_TOKEN_SECRET,
			OAUTH_SIGNATURE_METHOD,
			OAUTH_SIGNATURE,
			OAUTH_TIMESTAMP,
			OAUTH_NONCE,
			OAUTH_VERSION,
			OAUTH_CALLBACK,
			OAUTH_CALLBACK_CONFIRMED,
			OAUTH_VERIFIER,
		];

		for name in names {
			assert!(name.starts_with("oauth_"));
			assert_eq!(crate::percent_encode(name), name);
		}

		assert_eq!(OAUTH_CALLBACK_CONFIRMED, "oauth_callback_confirmed");
		assert_eq!(OAUTH_SIGNATURE_METHOD, "oauth_signature_method");
	}
}
