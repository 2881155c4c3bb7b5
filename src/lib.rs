//! Wire-level primitives for [OAuth 1.0][oauth1].
//!
//! This crate provides the encoding and parsing building blocks on which
//! OAuth 1.0 signing and transport layers are built:
//!
//! - [`percent`]: OAuth percent encoding (strict) and decoding (flexible,
//!   `+` is a space).
//! - [`form`]: `application/x-www-form-urlencoded` documents written with
//!   OAuth percent encoding, and their decoding into parameter maps.
//! - [`header`]: parsing of `Authorization: OAuth ...` header values.
//! - [`util`]: appending OAuth-encoded parameters to URL query strings.
//! - [`transport`]: reading parameters from [`http`] headers and bodies.
//! - [`constants`]: well-known parameter names and protocol values.
//!
//! Signing, nonce and timestamp generation, and HTTP transport are left to
//! other layers.
//!
//! ```
//! use oauth1_wire::{decode_form, encode_form, percent_encode};
//!
//! assert_eq!(percent_encode("a+b c"), "a%2Bb%20c");
//!
//! let form = encode_form([("oauth_token", "abc"), ("oauth_verifier", "x y")]);
//! assert_eq!(form, "oauth_token=abc&oauth_verifier=x%20y");
//!
//! let params = decode_form(form.as_str()).unwrap();
//! assert_eq!(params["oauth_verifier"].as_deref(), Some("x y"));
//! ```
//!
//! [oauth1]: https://oauth.net/core/1.0a/
pub use http;

pub mod constants;
mod error;
pub mod form;
pub mod header;
pub mod percent;
pub mod transport;
pub mod util;

pub use error::*;
pub use form::{
	FormPair, ParamText, Parameter, ParameterList, ParameterMap, decode_form, decode_form_reader,
	encode_form, encode_form_to, from_form, to_map,
};
pub use header::parse_authorization_header;
pub use percent::{percent_decode, percent_encode};
pub use util::add_query_parameters;
