//! `application/x-www-form-urlencoded` documents with OAuth percent encoding.
//!
//! A form document is a sequence of `name=value` elements separated by `&`,
//! where both sides are encoded with [`percent_encode`]. This is not exactly
//! the encoding mandated by `x-www-form-urlencoded`: spaces are written as
//! `%20` and every reserved character is escaped.
use std::{
	borrow::Cow,
	collections::BTreeMap,
	io,
};

use serde::{Deserialize, Serialize};

use crate::{
	error::Result,
	percent::{percent_decode, percent_encode},
};

pub mod typed;

pub use typed::*;

/// Decoded parameters, keyed by name.
///
/// When a name occurs more than once, only its first value is kept.
pub type ParameterMap<V = String> = BTreeMap<String, V>;

/// Text that may be absent.
///
/// Absent text is encoded as the empty string.
pub trait ParamText {
	fn param_text(&self) -> Option<&str>;
}

impl ParamText for str {
	fn param_text(&self) -> Option<&str> {
		Some(self)
	}
}

impl ParamText for String {
	fn param_text(&self) -> Option<&str> {
		Some(self.as_str())
	}
}

impl ParamText for Cow<'_, str> {
	fn param_text(&self) -> Option<&str> {
		Some(&**self)
	}
}

impl<T: ParamText> ParamText for Option<T> {
	fn param_text(&self) -> Option<&str> {
		self.as_ref().and_then(T::param_text)
	}
}

impl<T: ParamText + ?Sized> ParamText for &T {
	fn param_text(&self) -> Option<&str> {
		T::param_text(self)
	}
}

/// A `(name, value)` pair that can be written into a form document.
pub trait FormPair {
	fn name(&self) -> Option<&str>;

	fn value(&self) -> Option<&str>;
}

impl<K: ParamText, V: ParamText> FormPair for (K, V) {
	fn name(&self) -> Option<&str> {
		self.0.param_text()
	}

	fn value(&self) -> Option<&str> {
		self.1.param_text()
	}
}

impl<P: FormPair + ?Sized> FormPair for &P {
	fn name(&self) -> Option<&str> {
		P::name(self)
	}

	fn value(&self) -> Option<&str> {
		P::value(self)
	}
}

/// A single OAuth parameter.
///
/// The value is `None` when the parameter was read from a form element
/// without `=`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Parameter {
	pub name: String,

	pub value: Option<String>,
}

impl Parameter {
	/// Creates a new parameter with a value.
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: Some(value.into()),
		}
	}

	/// Creates a new parameter without value.
	pub fn without_value(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: None,
		}
	}
}

impl FormPair for Parameter {
	fn name(&self) -> Option<&str> {
		Some(self.name.as_str())
	}

	fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}
}

/// Writes the form document for `pairs` into `into`.
///
/// Pairs are written in iteration order. An empty sequence writes nothing.
/// The sink is left open.
pub fn encode_form_to<I, W>(pairs: I, into: &mut W) -> Result<()>
where
	I: IntoIterator,
	I::Item: FormPair,
	W: io::Write + ?Sized,
{
	into.write_all(encode_form(pairs).as_bytes())?;
	Ok(())
}

/// Builds the form document for `pairs`.
///
/// The result is pure ASCII.
pub fn encode_form<I>(pairs: I) -> String
where
	I: IntoIterator,
	I::Item: FormPair,
{
	let mut form = String::new();

	for pair in pairs {
		// Every element contains `=`, so the document is only empty before
		// the first one.
		if !form.is_empty() {
			form.push('&');
		}

		form.push_str(&percent_encode(pair.name()));
		form.push('=');
		form.push_str(&percent_encode(pair.value()));
	}

	form
}

/// Parses a form document.
///
/// Elements without `=` are recorded with an absent value. If a name occurs
/// more than once, the first occurrence wins. An absent or empty document
/// yields an empty map.
///
/// # Errors
///
/// Fails if a name or value contains a malformed percent escape.
pub fn decode_form<'a>(form: impl Into<Option<&'a str>>) -> Result<ParameterMap<Option<String>>> {
	let mut params = ParameterMap::new();

	for param in decode_elements(form)? {
		insert_first(&mut params, param.name, param.value);
	}

	Ok(params)
}

/// Reads a whole form document from `content` and parses it.
///
/// Lines (terminated by `\n`, `\r\n` or `\r`) are concatenated without
/// separator. Bytes that are not valid UTF-8 are replaced with U+FFFD. The
/// reader is not closed.
///
/// # Errors
///
/// Fails if reading fails or if the document contains a malformed percent
/// escape.
pub fn decode_form_reader(mut content: impl io::Read) -> Result<ParameterMap<Option<String>>> {
	let mut bytes = Vec::new();
	content.read_to_end(&mut bytes)?;

	let form: String = String::from_utf8_lossy(&bytes)
		.chars()
		.filter(|c| !matches!(c, '\r' | '\n'))
		.collect();

	decode_form(form.as_str())
}

/// Collects `pairs` into a map, keeping the first value of every name.
///
/// Absent names are recorded as the empty string.
pub fn to_map<I>(pairs: I) -> ParameterMap<Option<String>>
where
	I: IntoIterator,
	I::Item: FormPair,
{
	let mut params = ParameterMap::new();

	for pair in pairs {
		insert_first(
			&mut params,
			pair.name().unwrap_or_default().to_owned(),
			pair.value().map(ToOwned::to_owned),
		);
	}

	params
}

/// Splits a form document into its decoded elements, in order.
pub(crate) fn decode_elements<'a>(form: impl Into<Option<&'a str>>) -> Result<Vec<Parameter>> {
	let form = match form.into() {
		Some(form) if !form.is_empty() => form,
		_ => return Ok(Vec::new()),
	};

	log::debug!("decoding form document ({} bytes)", form.len());

	form.split('&')
		.map(|element| -> Result<Parameter> {
			match element.split_once('=') {
				Some((name, value)) => Ok(Parameter {
					name: percent_decode(name)?,
					value: Some(percent_decode(value)?),
				}),
				None => Ok(Parameter::without_value(percent_decode(element)?)),
			}
		})
		.collect()
}

pub(crate) fn insert_first<V>(params: &mut ParameterMap<V>, name: String, value: V) {
	if params.contains_key(&name) {
		log::trace!("ignoring duplicate parameter `{name}`");
	} else {
		params.insert(name, value);
	}
}
