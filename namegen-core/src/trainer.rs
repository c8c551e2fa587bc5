use std::path::Path;
use std::sync::mpsc;
use std::thread;

use log::debug;

use crate::error::CoreError;
use crate::io;
use crate::model::chain::TermChain;
use crate::split::partition::{SplitPosition, partition};
use crate::split::rule::SplitRule;

/// Splits every corpus word with the given rule and position, yielding one
/// segment sequence per word.
///
/// Order-preserving, one output per input word, no cross-word state.
pub fn segment_corpus<'a>(
	words: &'a [String],
	rule: SplitRule,
	position: SplitPosition,
) -> impl Iterator<Item = Result<Vec<String>, CoreError>> + 'a {
	words.iter().map(move |word| partition(word, rule, position))
}

/// Builds a chain from an in-memory corpus.
///
/// # Behavior
/// - Splits the corpus into chunks (based on CPU cores * factor).
/// - Spawns threads that segment and ingest each chunk into a partial chain.
/// - Merges all partial chains sequentially.
///
/// # Notes
/// - Uses MPSC channels to collect partial chains from threads.
/// - Chunks are independent, so merge order does not affect the counts.
pub fn build_chain(
	words: &[String],
	rule: SplitRule,
	position: SplitPosition,
) -> Result<TermChain, CoreError> {
	if words.is_empty() {
		return Ok(TermChain::new());
	}

	let cpus = num_cpus::get();
	let factor = 8;
	let chunks = cpus * factor;
	let chunk_size = (words.len() + chunks - 1) / chunks;
	debug!("building chain from {} words in chunks of {}", words.len(), chunk_size);

	let (tx, rx) = mpsc::channel();
	for chunk in words.chunks(chunk_size) {
		let tx = tx.clone();
		let chunk: Vec<String> = chunk.to_vec();

		thread::spawn(move || {
			let partial = build_partial(&chunk, rule, position);
			tx.send(partial).expect("Failed to send from thread");
		});
	}
	drop(tx);

	let mut chain = TermChain::new();
	for partial in rx {
		chain.merge(&partial?)?;
	}

	Ok(chain)
}

fn build_partial(
	words: &[String],
	rule: SplitRule,
	position: SplitPosition,
) -> Result<TermChain, CoreError> {
	let mut chain = TermChain::new();
	for segments in segment_corpus(words, rule, position) {
		chain.ingest(&segments?);
	}
	Ok(chain)
}

/// Loads a cached chain for one corpus file, or builds it and writes the
/// cache.
///
/// The sidecar lives next to the input and embeds the rule and position
/// names (`names.txt` → `names.letters-around.chain`), since the learned
/// statistics depend on both.
pub fn load_or_build<P: AsRef<Path>>(
	filepath: P,
	rule: SplitRule,
	position: SplitPosition,
) -> Result<TermChain, CoreError> {
	let extension = format!("{rule}-{position}.chain");
	let cache_path = io::build_output_path(&filepath, &extension)?;

	if cache_path.exists() {
		debug!("loading cached chain from {}", cache_path.display());
		let bytes = std::fs::read(&cache_path)?;
		return Ok(postcard::from_bytes(&bytes)?);
	}

	let words = io::load_words(std::slice::from_ref(&filepath))?;
	let chain = build_chain(&words, rule, position)?;

	let bytes = postcard::to_stdvec(&chain)?;
	std::fs::write(&cache_path, bytes)?;
	debug!("cached chain at {}", cache_path.display());

	Ok(chain)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn corpus(words: &[&str]) -> Vec<String> {
		words.iter().map(|w| (*w).to_owned()).collect()
	}

	#[test]
	fn segment_corpus_preserves_word_order() {
		let words = corpus(&["food", "bee"]);
		let segmented: Vec<Vec<String>> =
			segment_corpus(&words, SplitRule::GroupedVowels, SplitPosition::Around)
				.collect::<Result<_, _>>()
				.unwrap();
		assert_eq!(segmented, [vec!["f", "oo", "d"], vec!["b", "ee"]]);
	}

	#[test]
	fn build_chain_learns_every_distinct_word() {
		let words = corpus(&["food", "bee", "door", "food"]);
		let chain = build_chain(&words, SplitRule::Letters, SplitPosition::Around).unwrap();
		assert_eq!(chain.len(), 3);
		assert!(chain.is_known("door"));
	}

	#[test]
	fn build_chain_on_empty_corpus_is_empty() {
		let chain = build_chain(&[], SplitRule::Letters, SplitPosition::Around).unwrap();
		assert!(chain.is_empty());
	}
}
