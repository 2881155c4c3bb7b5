//! Conversions between form documents and Rust types.
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

use super::{FormPair, Parameter, ParameterMap, decode_elements, decode_form, encode_form, to_map};

/// Ordered parameter sequence.
///
/// Unlike [`ParameterMap`], duplicates and insertion order are preserved.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ParameterList(Vec<Parameter>);

impl ParameterList {
	pub fn new() -> Self {
		Self::default()
	}

	/// Serializes `value` into a parameter sequence.
	///
	/// Fields are emitted in declaration order. `None` fields are skipped.
	pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
		let query = serde_html_form::to_string(value).map_err(Error::serialize)?;
		Self::decode(&query)
	}

	/// Parses a form document, keeping every element in order.
	pub fn decode(form: &str) -> Result<Self> {
		decode_elements(form).map(Self)
	}

	/// Appends a parameter.
	pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.push(Parameter::new(name, value))
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the first value of the parameter called `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|p| p.name == name)
			.and_then(|p| p.value.as_deref())
	}

	/// Builds the form document for this sequence.
	pub fn encode(&self) -> String {
		encode_form(self)
	}

	/// Collects the parameters into a map, keeping the first value of every
	/// name.
	pub fn to_map(&self) -> ParameterMap<Option<String>> {
		to_map(self)
	}

	pub fn into_vec(self) -> Vec<Parameter> {
		self.0
	}
}

impl From<Vec<Parameter>> for ParameterList {
	fn from(value: Vec<Parameter>) -> Self {
		Self(value)
	}
}

impl<P: FormPair> FromIterator<P> for ParameterList {
	fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
		Self(
			iter.into_iter()
				.map(|pair| Parameter {
					name: pair.name().unwrap_or_default().to_owned(),
					value: pair.value().map(ToOwned::to_owned),
				})
				.collect(),
		)
	}
}

impl<'a> IntoIterator for &'a ParameterList {
	type IntoIter = std::slice::Iter<'a, Parameter>;
	type Item = &'a Parameter;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl IntoIterator for ParameterList {
	type IntoIter = std::vec::IntoIter<Parameter>;
	type Item = Parameter;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// Decodes a form document into a `T`.
///
/// The document is parsed with the OAuth rules first: malformed escapes are
/// rejected, the first value of each name wins, and names without value are
/// treated as missing.
pub fn from_form<'a, T: DeserializeOwned>(form: impl Into<Option<&'a str>>) -> Result<T> {
	let params = decode_form(form)?;

	let present = params
		.iter()
		.filter_map(|(name, value)| value.as_ref().map(|value| (name, value)));

	serde_html_form::from_str(&encode_form(present)).map_err(Error::deserialize)
}
