use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::rule::{Match, SplitRule};
use crate::error::CoreError;

/// Where a matched run is stitched relative to the unmatched letters
/// collected just before it.
///
/// # Variants
/// - `Before`: the run becomes the prefix of the next group.
///   `"food"` split on `"oo"` becomes `["f", "ood"]`.
/// - `After`: the run becomes the suffix of the group just built.
///   `"food"` split on `"oo"` becomes `["foo", "d"]`.
/// - `Around`: the run stands alone between its neighbours.
///   `"food"` split on `"oo"` becomes `["f", "oo", "d"]`.
/// - `Random`: re-resolved uniformly to one of the three above at every
///   partitioning step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitPosition {
	Before,
	After,
	Around,
	Random,
}

impl SplitPosition {
	/// Resolves `Random` to a concrete position, one draw per call.
	fn resolve(&self) -> Self {
		match self {
			Self::Random => {
				const CHOICES: [SplitPosition; 3] =
					[SplitPosition::Before, SplitPosition::After, SplitPosition::Around];
				CHOICES[rand::rng().random_range(0..CHOICES.len())]
			}
			other => *other,
		}
	}

	/// Canonical configuration name of the position.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Before => "before",
			Self::After => "after",
			Self::Around => "around",
			Self::Random => "random",
		}
	}
}

impl fmt::Display for SplitPosition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for SplitPosition {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"before" => Ok(Self::Before),
			"after" => Ok(Self::After),
			"around" => Ok(Self::Around),
			"random" => Ok(Self::Random),
			_ => Err(CoreError::UnknownPosition(s.to_owned())),
		}
	}
}

/// Splits `word` into an ordered sequence of non-empty letter groups.
///
/// Joining the returned groups with no separator always reproduces `word`
/// exactly: every letter lands in exactly one group exactly once, whatever
/// the rule and position decide.
///
/// # Errors
/// Returns `ZeroConsume` if the rule claims a match without consuming any
/// letters (a contract breach that would otherwise stall the cursor).
pub fn partition(
	word: &str,
	rule: SplitRule,
	position: SplitPosition,
) -> Result<Vec<String>, CoreError> {
	partition_with(word, |remaining| rule.examine(remaining), position)
}

/// Splits `word` using an arbitrary matching function.
///
/// This is the seam `partition` is built on; `examine` receives the
/// remaining letters and must honor the `Match` contract. A claimed count
/// larger than the remaining letters is clamped.
pub fn partition_with<F>(
	word: &str,
	mut examine: F,
	position: SplitPosition,
) -> Result<Vec<String>, CoreError>
where
	F: FnMut(&[char]) -> Match,
{
	let letters: Vec<char> = word.chars().collect();
	let mut closed: Vec<String> = Vec::new();
	// The open accumulator is always the last group under construction.
	let mut open = String::new();
	let mut cursor = 0;

	while cursor < letters.len() {
		let resolved = position.resolve();
		let verdict = examine(&letters[cursor..]);

		if verdict.matched {
			if verdict.consume == 0 {
				return Err(CoreError::ZeroConsume);
			}
			let take = verdict.consume.min(letters.len() - cursor);
			let consumed: String = letters[cursor..cursor + take].iter().collect();
			cursor += take;

			match resolved {
				SplitPosition::Before => {
					closed.push(std::mem::take(&mut open));
					open = consumed;
				}
				SplitPosition::After => {
					open.push_str(&consumed);
					closed.push(std::mem::take(&mut open));
				}
				// `resolve` never yields `Random`.
				_ => {
					closed.push(std::mem::take(&mut open));
					closed.push(consumed);
				}
			}
		} else {
			open.push(letters[cursor]);
			cursor += 1;
		}
	}
	closed.push(open);

	Ok(closed.into_iter().filter(|group| !group.is_empty()).collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn food_split_around_grouped_vowels() {
		let segments = partition("food", SplitRule::GroupedVowels, SplitPosition::Around).unwrap();
		assert_eq!(segments, ["f", "oo", "d"]);
	}

	#[test]
	fn food_split_before_grouped_vowels() {
		let segments = partition("food", SplitRule::GroupedVowels, SplitPosition::Before).unwrap();
		assert_eq!(segments, ["f", "ood"]);
	}

	#[test]
	fn food_split_after_grouped_vowels() {
		let segments = partition("food", SplitRule::GroupedVowels, SplitPosition::After).unwrap();
		assert_eq!(segments, ["foo", "d"]);
	}

	#[test]
	fn letters_rule_isolates_every_letter() {
		for position in [SplitPosition::Before, SplitPosition::After, SplitPosition::Around] {
			let segments = partition("food", SplitRule::Letters, position).unwrap();
			assert_eq!(segments, ["f", "o", "o", "d"]);
		}
	}

	#[test]
	fn eachvowel_before_prefixes_the_next_group() {
		let segments = partition("banana", SplitRule::EachVowel, SplitPosition::Before).unwrap();
		assert_eq!(segments, ["b", "an", "an", "a"]);
	}

	#[test]
	fn queue_matches_from_the_second_letter() {
		let segments = partition("queue", SplitRule::GroupedVowels, SplitPosition::Around).unwrap();
		assert_eq!(segments, ["q", "ueue"]);
	}

	#[test]
	fn empty_word_yields_no_segments() {
		let segments = partition("", SplitRule::Letters, SplitPosition::Around).unwrap();
		assert!(segments.is_empty());
	}

	#[test]
	fn unmatched_word_collapses_to_one_segment() {
		let segments = partition("bcdfg", SplitRule::EachVowel, SplitPosition::Around).unwrap();
		assert_eq!(segments, ["bcdfg"]);
	}

	#[test]
	fn round_trip_over_all_rules_and_positions() {
		let words = ["food", "queue", "banana", "strength", "a", "xy", "mary jane"];
		let rules = [
			SplitRule::Letters,
			SplitRule::EachVowel,
			SplitRule::GroupedVowels,
			SplitRule::Opposing,
			SplitRule::TwoCommon,
			SplitRule::Random,
		];
		let positions = [
			SplitPosition::Before,
			SplitPosition::After,
			SplitPosition::Around,
			SplitPosition::Random,
		];
		for word in words {
			for rule in rules {
				for position in positions {
					let segments = partition(word, rule, position).unwrap();
					assert_eq!(segments.concat(), word, "{rule}/{position} broke {word}");
					assert!(segments.iter().all(|s| !s.is_empty()));
				}
			}
		}
	}

	#[test]
	fn deterministic_without_random_variants() {
		let rules = [
			SplitRule::Letters,
			SplitRule::EachVowel,
			SplitRule::GroupedVowels,
			SplitRule::Opposing,
			SplitRule::TwoCommon,
		];
		let positions = [SplitPosition::Before, SplitPosition::After, SplitPosition::Around];
		for rule in rules {
			for position in positions {
				let first = partition("instrument", rule, position).unwrap();
				let second = partition("instrument", rule, position).unwrap();
				assert_eq!(first, second);
			}
		}
	}

	#[test]
	fn zero_consume_match_fails_loudly() {
		let result = partition_with(
			"food",
			|_| Match { matched: true, consume: 0 },
			SplitPosition::Around,
		);
		assert!(matches!(result, Err(CoreError::ZeroConsume)));
	}

	#[test]
	fn oversized_consume_is_clamped() {
		let segments = partition_with(
			"food",
			|_| Match { matched: true, consume: 99 },
			SplitPosition::Around,
		)
		.unwrap();
		assert_eq!(segments, ["food"]);
	}

	#[test]
	fn position_names_parse_and_print_symmetrically() {
		for name in ["before", "after", "around", "random"] {
			let position: SplitPosition = name.parse().unwrap();
			assert_eq!(position.to_string(), name);
		}
		assert!(matches!(
			"sideways".parse::<SplitPosition>(),
			Err(CoreError::UnknownPosition(_))
		));
	}
}
