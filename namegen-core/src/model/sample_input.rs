use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Direction in which the chain grows a candidate.
///
/// # Variants
/// - `Forward`: extend at the end of the word only.
/// - `Backward`: extend at the start of the word only.
/// - `Bidirectional`: pick one of the two open ends at random per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	Forward,
	Backward,
	Bidirectional,
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Forward => "forward",
			Self::Backward => "backward",
			Self::Bidirectional => "bidirectional",
		};
		f.write_str(name)
	}
}

impl FromStr for Direction {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"forward" => Ok(Self::Forward),
			"backward" => Ok(Self::Backward),
			"bidirectional" => Ok(Self::Bidirectional),
			_ => Err(CoreError::UnknownDirection(s.to_owned())),
		}
	}
}

/// Sampling settings for candidate generation.
///
/// # Responsibilities
/// - Hold the growth direction, length bounds, required start prefixes and
///   the rejected-walk budget
/// - Decide whether a finished walk is acceptable
///
/// # Invariants
/// - `1 <= min_len < max_len`
/// - `starts` entries are lowercased
pub struct SampleInput {
	/// Direction candidates are grown in.
	pub direction: Direction,

	/// Rejected walks allowed before `sample` gives up.
	pub nb_try: usize,

	/// Minimum accepted candidate length, in characters.
	min_len: usize,

	/// Growth stops once a candidate reaches this many characters.
	max_len: usize,

	/// Required start prefixes; empty means unconstrained.
	starts: Vec<String>,
}

impl SampleInput {
	/// Creates sampling settings with the given length bounds.
	///
	/// # Errors
	/// Returns an error unless `1 <= min_len < max_len`.
	pub fn new(min_len: usize, max_len: usize) -> Result<Self, CoreError> {
		if min_len < 1 || min_len >= max_len {
			return Err(CoreError::InvalidLengthRange { min: min_len, max: max_len });
		}
		Ok(Self {
			direction: Direction::Forward,
			nb_try: 32,
			min_len,
			max_len,
			starts: Vec::new(),
		})
	}

	/// Minimum accepted candidate length.
	pub fn min_len(&self) -> usize {
		self.min_len
	}

	/// Length at which candidate growth is forced to stop.
	pub fn max_len(&self) -> usize {
		self.max_len
	}

	/// Replaces the required start prefixes. Entries are lowercased so
	/// matching stays case-insensitive against the lowercased corpus.
	pub fn set_starts(&mut self, starts: &[String]) {
		self.starts = starts.iter().map(|s| s.to_lowercase()).collect();
	}

	/// Whether a finished (lowercase) candidate satisfies the length floor
	/// and the start prefixes.
	pub fn accepts(&self, word: &str) -> bool {
		if word.chars().count() < self.min_len {
			return false;
		}
		self.starts.is_empty() || self.starts.iter().any(|prefix| word.starts_with(prefix.as_str()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn length_bounds_must_increase_from_one() {
		assert!(SampleInput::new(4, 13).is_ok());
		assert!(matches!(
			SampleInput::new(0, 3),
			Err(CoreError::InvalidLengthRange { .. })
		));
		assert!(matches!(
			SampleInput::new(5, 5),
			Err(CoreError::InvalidLengthRange { .. })
		));
		assert!(matches!(
			SampleInput::new(9, 4),
			Err(CoreError::InvalidLengthRange { .. })
		));
	}

	#[test]
	fn accepts_enforces_the_length_floor() {
		let input = SampleInput::new(4, 13).unwrap();
		assert!(input.accepts("food"));
		assert!(!input.accepts("foo"));
	}

	#[test]
	fn accepts_enforces_start_prefixes_case_insensitively() {
		let mut input = SampleInput::new(2, 13).unwrap();
		input.set_starts(&["Fo".to_owned(), "ba".to_owned()]);
		assert!(input.accepts("food"));
		assert!(input.accepts("banana"));
		assert!(!input.accepts("door"));
	}

	#[test]
	fn direction_names_parse_and_print_symmetrically() {
		for name in ["forward", "backward", "bidirectional"] {
			let direction: Direction = name.parse().unwrap();
			assert_eq!(direction.to_string(), name);
		}
		assert!(matches!(
			"sideways".parse::<Direction>(),
			Err(CoreError::UnknownDirection(_))
		));
	}
}
