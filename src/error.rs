/// Errors raised while encoding or decoding OAuth 1.0 messages.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("malformed percent encoding at offset {offset} in `{input}`")]
	MalformedPercentEncoding { input: String, offset: usize },

	#[error("malformed authorization header element: `{0}`")]
	MalformedAuthorizationHeader(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("unable to serialize parameters: {0}")]
	Serialize(String),

	#[error("unable to deserialize parameters: {0}")]
	Deserialize(String),
}

impl Error {
	pub fn malformed_percent_encoding(input: &str, offset: usize) -> Self {
		log::warn!("malformed percent encoding at offset {offset}");
		Self::MalformedPercentEncoding {
			input: input.to_owned(),
			offset,
		}
	}

	pub fn malformed_authorization_header(element: &str) -> Self {
		log::warn!("authorization header element without `=`: {element:?}");
		Self::MalformedAuthorizationHeader(element.to_owned())
	}

	pub fn serialize(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("serialization error: {msg}");
		Self::Serialize(msg)
	}

	pub fn deserialize(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("deserialization error: {msg}");
		Self::Deserialize(msg)
	}
}

pub type Result<T> = std::result::Result<T, Error>;
