//! URL query string utilities.
use iref::{
	UriBuf,
	uri::{Query, QueryBuf},
};

use crate::form::{FormPair, encode_form};

/// Appends `pairs` to `url` as query parameters.
///
/// The delimiter is `&` if `url` already contains a `?`, and `?` otherwise.
/// It is written even when `pairs` is empty, so `http://h/p` with no pair
/// becomes `http://h/p?`. Use [`extend_uri_query`] to avoid dangling
/// delimiters.
pub fn add_query_parameters<I>(url: &str, pairs: I) -> String
where
	I: IntoIterator,
	I::Item: FormPair,
{
	let delimiter = if url.contains('?') { '&' } else { '?' };
	let query = encode_form(pairs);

	let mut result = String::with_capacity(url.len() + 1 + query.len());
	result.push_str(url);
	result.push(delimiter);
	result.push_str(&query);
	result
}

/// Extends the query of `uri` with the OAuth-encoded `pairs`.
///
/// Existing query parameters and the fragment are preserved. Nothing is
/// added when `pairs` is empty.
pub fn extend_uri_query<I>(uri: &mut UriBuf, pairs: I)
where
	I: IntoIterator,
	I::Item: FormPair,
{
	let encoded = encode_form(pairs);
	if encoded.is_empty() {
		return;
	}

	let mut query = uri.query().map(Query::as_str).unwrap_or_default().to_owned();
	if !query.is_empty() {
		query.push('&');
	}
	query.push_str(&encoded);

	// UNWRAP SAFETY: the existing query is valid and OAuth percent encoding
	//                only emits unreserved characters, `%HH` triplets, `=`
	//                and `&`.
	let query = QueryBuf::new(query.into_bytes()).unwrap();
	uri.set_query(Some(&*query));
}
