//! Property tests for the partitioner invariants: lossless round-trip,
//! non-empty segments and bounded segment counts, for every rule and
//! position including the randomized ones.

use proptest::prelude::*;

use namegen_core::split::partition::{SplitPosition, partition};
use namegen_core::split::rule::SplitRule;

const RULES: [SplitRule; 6] = [
	SplitRule::Letters,
	SplitRule::EachVowel,
	SplitRule::GroupedVowels,
	SplitRule::Opposing,
	SplitRule::TwoCommon,
	SplitRule::Random,
];

const POSITIONS: [SplitPosition; 4] = [
	SplitPosition::Before,
	SplitPosition::After,
	SplitPosition::Around,
	SplitPosition::Random,
];

proptest! {
	#[test]
	fn concatenation_restores_the_word(
		word in "[a-z ]{0,24}",
		rule_index in 0..RULES.len(),
		position_index in 0..POSITIONS.len(),
	) {
		let rule = RULES[rule_index];
		let position = POSITIONS[position_index];
		let segments = partition(&word, rule, position).unwrap();

		prop_assert_eq!(segments.concat(), word.clone(), "{}/{} broke the round-trip", rule, position);
		prop_assert!(segments.iter().all(|s| !s.is_empty()));
		// Each segment holds at least one letter.
		prop_assert!(segments.len() <= word.chars().count());
	}

	#[test]
	fn repeated_runs_agree_without_random_variants(
		word in "[a-z]{0,16}",
		rule_index in 0..RULES.len() - 1,
		position_index in 0..POSITIONS.len() - 1,
	) {
		let rule = RULES[rule_index];
		let position = POSITIONS[position_index];
		let first = partition(&word, rule, position).unwrap();
		let second = partition(&word, rule, position).unwrap();
		prop_assert_eq!(first, second);
	}
}
