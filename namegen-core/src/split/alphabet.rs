/// The vowels recognized by the split rules. `y` is not one of them.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// High-frequency English consonants, used by the `twocommon` rule.
pub const COMMON_LETTERS: &[char] = &['t', 'n', 's', 'h', 'r', 'd', 'l'];

/// True if `c` is a vowel.
///
/// The corpus is lowercased at the I/O boundary, so membership is only
/// defined over lowercase letters.
pub fn is_vowel(c: char) -> bool {
	VOWELS.contains(&c)
}

/// True if `c` is one of the high-frequency consonants.
pub fn is_common(c: char) -> bool {
	COMMON_LETTERS.contains(&c)
}
