use std::collections::{HashMap, HashSet, VecDeque};

use log::trace;
use rand::Rng;

use serde::{Deserialize, Serialize};

use super::sample_input::{Direction, SampleInput};
use super::state::State;
use crate::error::CoreError;

/// Sentinel terms marking word boundaries inside the transition tables.
/// In-band storage is safe: corpus words are filtered down to letters and
/// spaces before they reach the chain.
const START_TERM: &str = "<";
const END_TERM: &str = ">";

/// First-order Markov chain over the letter groups of segmented words.
///
/// The chain keeps one forward table (term to following term) and one
/// backward table (term to preceding term), so candidates can be grown
/// from either end of the word, plus the set of ingested words.
///
/// # Responsibilities
/// - Incorporate one segmented word at a time into the transition counts
/// - Sample candidate words by weighted random walk, honoring direction,
///   length bounds and start prefixes
/// - Merge with chains built elsewhere (parallel build, multiple inputs)
///
/// # Invariants
/// - Every ingested word appears in `words`
/// - Both tables see every transition of every ingested word exactly once
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TermChain {
	forward: HashMap<String, State>,
	backward: HashMap<String, State>,
	words: HashSet<String>,
}

impl TermChain {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of distinct words the chain has learned from.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// True if the chain has learned nothing yet.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Incorporates one segmented word into the transition statistics.
	///
	/// The word is the concatenation of `segments`. Empty segment lists
	/// and words the chain already knows are ignored.
	pub fn ingest(&mut self, segments: &[String]) {
		if segments.is_empty() {
			return;
		}

		// Avoid duplicates
		let word = segments.concat();
		if !self.words.insert(word) {
			return;
		}

		let mut prev = START_TERM;
		for term in segments {
			Self::record(&mut self.forward, prev, term);
			Self::record(&mut self.backward, term, prev);
			prev = term;
		}
		Self::record(&mut self.forward, prev, END_TERM);
		Self::record(&mut self.backward, END_TERM, prev);
	}

	fn record(table: &mut HashMap<String, State>, from: &str, to: &str) {
		let state = table.entry(from.to_owned()).or_insert_with(|| State::new(from));
		state.add_transition(to);
	}

	/// True if `word` was part of the training corpus.
	///
	/// Comparison is case-insensitive; ingested words are lowercase.
	pub fn is_known(&self, word: &str) -> bool {
		self.words.contains(&word.to_lowercase())
	}

	/// Iterates over the ingested words.
	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}

	/// Produces one candidate word, or `None` when no walk within the
	/// retry budget satisfies the length floor and start prefixes.
	///
	/// Candidates are not checked against the training corpus here; the
	/// caller keeps its own seen-set.
	pub fn sample(&self, input: &SampleInput) -> Option<String> {
		if self.forward.is_empty() {
			return None;
		}

		for attempt in 0..=input.nb_try {
			let candidate = self.walk(input);
			if input.accepts(&candidate) {
				return Some(candidate);
			}
			trace!("rejected candidate {candidate:?} (attempt {attempt})");
		}
		None
	}

	/// One weighted random walk over the transition tables.
	///
	/// Growth stops when every open end samples its boundary sentinel or
	/// dead-ends, or when the candidate reaches the maximum length. The
	/// result may still violate the acceptance constraints.
	fn walk(&self, input: &SampleInput) -> String {
		let (mut head_open, mut tail_open) = match input.direction {
			Direction::Forward => (false, true),
			Direction::Backward => (true, false),
			Direction::Bidirectional => (true, true),
		};

		let mut terms: VecDeque<&str> = VecDeque::new();
		let mut len = 0;

		while (head_open || tail_open) && len < input.max_len() {
			let grow_tail = if head_open && tail_open {
				rand::rng().random_range(0..2) == 0
			} else {
				tail_open
			};

			if grow_tail {
				let key = terms.back().copied().unwrap_or(START_TERM);
				match self.forward.get(key).and_then(State::next) {
					Some(term) if term != END_TERM => {
						len += term.chars().count();
						terms.push_back(term);
					}
					_ => tail_open = false,
				}
			} else {
				let key = terms.front().copied().unwrap_or(END_TERM);
				match self.backward.get(key).and_then(State::next) {
					Some(term) if term != START_TERM => {
						len += term.chars().count();
						terms.push_front(term);
					}
					_ => head_open = false,
				}
			}
		}

		terms.iter().copied().collect()
	}

	/// Merges another chain into this one.
	///
	/// Transition occurrence counts are summed; the known-word sets are
	/// unioned. Intended for parallel builds and multi-file corpora.
	pub fn merge(&mut self, other: &Self) -> Result<(), CoreError> {
		Self::merge_table(&mut self.forward, &other.forward)?;
		Self::merge_table(&mut self.backward, &other.backward)?;
		self.words.extend(other.words.iter().cloned());
		Ok(())
	}

	fn merge_table(
		into: &mut HashMap<String, State>,
		from: &HashMap<String, State>,
	) -> Result<(), CoreError> {
		for (key, state) in from {
			if let Some(existing) = into.get_mut(key) {
				existing.merge(state)?;
			} else {
				into.insert(key.clone(), state.clone());
			}
		}
		Ok(())
	}
}
