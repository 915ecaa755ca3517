/// Why a JSON-valued statement couldn't be rendered.
///
/// Only the `*_json` renderers return this. The other value kinds render an inert fallback instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	#[error("invalid identifier: {0}")]
	InvalidIdentifier(String),

	#[error("json: {0}")]
	Serialization(#[from] serde_json::Error),
}
