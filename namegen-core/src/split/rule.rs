use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::alphabet::{is_common, is_vowel};
use crate::error::CoreError;

/// Decision a rule makes about the front of the remaining letters.
///
/// When `matched` is true, exactly `consume` letters are claimed as a
/// matched run. When it is false, `consume` is advisory and the
/// partitioner absorbs exactly one letter instead, which guarantees
/// forward progress for every rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
	pub matched: bool,
	pub consume: usize,
}

impl Match {
	fn hit(consume: usize) -> Self {
		Self { matched: true, consume }
	}

	fn miss() -> Self {
		Self { matched: false, consume: 1 }
	}
}

/// The closed set of word-splitting rules.
///
/// # Variants
/// - `Letters`: every leading letter is a matched run of one.
/// - `EachVowel`: a single leading vowel is a matched run.
/// - `GroupedVowels`: a leading run of two or more vowels is a matched run.
/// - `Opposing`: a leading vowel+consonant or consonant+vowel pair.
/// - `TwoCommon`: two adjacent high-frequency consonants.
/// - `Random`: delegates every attempt to one of the five rules above,
///   chosen uniformly per attempt.
///
/// # Invariants
/// - Every rule reports a miss on empty input.
/// - A hit claims at least one and at most `remaining.len()` letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitRule {
	Letters,
	EachVowel,
	GroupedVowels,
	Opposing,
	TwoCommon,
	Random,
}

impl SplitRule {
	/// The delegation pool for `Random`.
	const CONCRETE: [SplitRule; 5] = [
		SplitRule::Letters,
		SplitRule::EachVowel,
		SplitRule::GroupedVowels,
		SplitRule::Opposing,
		SplitRule::TwoCommon,
	];

	/// Examines the front of `remaining` and reports whether, and how far,
	/// it forms a matched run.
	pub fn examine(&self, remaining: &[char]) -> Match {
		match self {
			Self::Letters => {
				if remaining.is_empty() {
					Match::miss()
				} else {
					Match::hit(1)
				}
			}
			Self::EachVowel => match remaining.first() {
				Some(&c) if is_vowel(c) => Match::hit(1),
				_ => Match::miss(),
			},
			Self::GroupedVowels => {
				let run = remaining.iter().take_while(|c| is_vowel(**c)).count();
				if run >= 2 {
					Match::hit(run)
				} else {
					// Runs of zero or one vowel fall back to per-letter
					// unmatched consumption.
					Match::miss()
				}
			}
			Self::Opposing => match remaining {
				[a, b, ..] if is_vowel(*a) != is_vowel(*b) => Match::hit(2),
				_ => Match::miss(),
			},
			Self::TwoCommon => match remaining {
				[a, b, ..] if is_common(*a) && is_common(*b) => Match::hit(2),
				_ => Match::miss(),
			},
			Self::Random => {
				let pick = rand::rng().random_range(0..Self::CONCRETE.len());
				Self::CONCRETE[pick].examine(remaining)
			}
		}
	}

	/// Canonical configuration name of the rule.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Letters => "letters",
			Self::EachVowel => "eachvowel",
			Self::GroupedVowels => "groupedvowels",
			Self::Opposing => "opposing",
			Self::TwoCommon => "twocommon",
			Self::Random => "random",
		}
	}
}

impl fmt::Display for SplitRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for SplitRule {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"letters" => Ok(Self::Letters),
			"eachvowel" => Ok(Self::EachVowel),
			"groupedvowels" => Ok(Self::GroupedVowels),
			"opposing" => Ok(Self::Opposing),
			"twocommon" => Ok(Self::TwoCommon),
			"random" => Ok(Self::Random),
			_ => Err(CoreError::UnknownRule(s.to_owned())),
		}
	}
}
