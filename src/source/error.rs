//! Resolver error taxonomy.
//!
//! All variants are non-fatal: they are caught at the resolver boundary,
//! logged, surfaced as a diagnostic message, and answered with catalog data.

use thiserror::Error;

/// Why a remote load did not produce usable data.
#[derive(Debug, Error)]
pub enum SourceError {
	/// Network/transport failure before an HTTP status was available.
	#[error("network request failed: {0}")]
	Fetch(String),

	/// The server answered outside the 2xx range.
	#[error("server returned HTTP {0}")]
	BadStatus(u16),

	/// Direct-mode probe found fewer records than the usefulness threshold.
	#[error("remote dataset too small: {got} nodes, need {need}")]
	InsufficientData { got: usize, need: usize },

	/// The body was not the JSON shape we expect.
	#[error("malformed response: {0}")]
	Parse(#[from] serde_json::Error),
}
