//! Term-chain sequence model.
//!
//! The chain learns from segmented words:
//! - Transition statistics between letter groups (`TermChain`)
//! - Weighted per-term transition nodes (`State`, internal)
//! - Sampling configuration (`SampleInput`, `Direction`)
//!
//! Ingestion takes one segmented word at a time; sampling performs a
//! weighted random walk over the learned transitions and either returns a
//! candidate word or nothing.

/// The chain itself: ingestion, sampling, merging.
pub mod chain;

/// Sampling configuration: direction, length bounds, start prefixes.
pub mod sample_input;

/// Internal weighted transition node. Not exposed publicly.
mod state;
