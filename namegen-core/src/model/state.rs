use std::collections::HashMap;

use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One node of the term chain.
///
/// A `State` corresponds to a single term (a letter group, or a boundary
/// sentinel) and stores every observed transition out of it, weighted by
/// occurrence count.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during ingestion
/// - Pick the following term using weighted random sampling
/// - Merge with another state for the same term (parallel build support)
///
/// ## Invariants
/// - All transitions belong to the same `key`
/// - Each transition occurrence count is strictly positive
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct State {
	/// The term this state belongs to.
	key: String,
	/// Outgoing transitions indexed by the following term.
	/// Example: { "oo" => 42, ">" => 3 }
	transitions: HashMap<String, usize>,
}

impl State {
	/// Creates a new empty state for the given term.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			transitions: HashMap::new(),
		}
	}

	/// Records one occurrence of a transition toward `next`.
	pub fn add_transition(&mut self, next: &str) {
		*self.transitions.entry(next.to_owned()).or_insert(0) += 1;
	}

	/// Picks the following term using weighted random sampling.
	///
	/// The probability of a term is proportional to its occurrence count.
	/// Returns `None` if the state has no transitions.
	pub fn next(&self) -> Option<&str> {
		if self.transitions.is_empty() {
			return None;
		}

		let total: usize = self.transitions.values().sum();

		let mut r = rand::rng().random_range(0..total);

		let mut fallback: Option<&str> = None;
		for (next, occurrence) in &self.transitions {
			if r < *occurrence {
				return Some(next);
			}
			r -= occurrence;
			fallback = Some(next);
		}

		// Unreachable given the count invariant, kept for safety.
		fallback
	}

	/// Merges another state into this one.
	///
	/// Both states must represent the same term; transition occurrence
	/// counts are summed.
	///
	/// # Errors
	/// Returns an error if the state keys do not match.
	pub fn merge(&mut self, other: &Self) -> Result<(), CoreError> {
		if self.key != other.key {
			return Err(CoreError::MergeMismatch {
				expected: self.key.clone(),
				found: other.key.clone(),
			});
		}

		for (next, occurrence) in &other.transitions {
			*self.transitions.entry(next.clone()).or_insert(0) += *occurrence;
		}

		Ok(())
	}
}
