use thiserror::Error;

/// Errors surfaced by the core library.
///
/// Configuration problems (unknown names, invalid length bounds) are
/// reported before any partitioning or sampling begins. `ZeroConsume` is a
/// breach of the rule contract and aborts the word being partitioned
/// instead of looping on it.
#[derive(Debug, Error)]
pub enum CoreError {
	/// A rule name outside the closed rule set was requested.
	#[error("unknown split rule: {0}")]
	UnknownRule(String),

	/// A split position other than before/after/around/random was requested.
	#[error("unknown split position: {0}")]
	UnknownPosition(String),

	/// A growth direction other than forward/backward/bidirectional.
	#[error("unknown direction: {0}")]
	UnknownDirection(String),

	/// The minimum/maximum lengths do not form a valid increasing range.
	#[error("length bounds must be positive and increasing, got min {min} and max {max}")]
	InvalidLengthRange { min: usize, max: usize },

	/// A rule claimed a match without consuming any letters.
	#[error("split rule matched without consuming any letters")]
	ZeroConsume,

	/// Two chain states for different terms cannot be merged.
	#[error("term mismatch while merging: {expected} vs {found}")]
	MergeMismatch { expected: String, found: String },

	/// A chain cache file could not be decoded or encoded.
	#[error("chain cache error: {0}")]
	Cache(#[from] postcard::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}
