use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Normalizes one raw corpus line into a trainable word.
///
/// Lowercases, keeps only ASCII letters and spaces, trims the ends.
/// Returns `None` when nothing survives the filter.
pub fn filter_word(raw: &str) -> Option<String> {
	let filtered: String = raw
		.to_lowercase()
		.chars()
		.filter(|c| c.is_ascii_lowercase() || *c == ' ')
		.collect();

	let trimmed = filtered.trim();
	if trimmed.is_empty() {
		None
	} else {
		Some(trimmed.to_owned())
	}
}

/// Loads and filters every word from the given files, one word per line,
/// preserving file-then-line order.
pub fn load_words<P: AsRef<Path>>(paths: &[P]) -> io::Result<Vec<String>> {
	let mut words = Vec::new();
	for path in paths {
		for line in read_file(path)? {
			if let Some(word) = filter_word(&line) {
				words.push(word);
			}
		}
	}
	Ok(words)
}

/// Builds a sidecar path next to an input path with a new extension.
///
/// Example:
/// `data/names.txt` + `"letters-around.chain"` → `data/names.letters-around.chain`
pub fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn filter_lowercases_and_strips_non_letters() {
		assert_eq!(filter_word("Alice!"), Some("alice".to_owned()));
		assert_eq!(filter_word("O'Brien-42"), Some("obrien".to_owned()));
		assert_eq!(filter_word("Mary Jane"), Some("mary jane".to_owned()));
	}

	#[test]
	fn filter_drops_lines_with_no_letters() {
		assert_eq!(filter_word(""), None);
		assert_eq!(filter_word("   "), None);
		assert_eq!(filter_word("1234!?"), None);
	}

	#[test]
	fn filter_trims_leftover_edges() {
		assert_eq!(filter_word("  bob  "), Some("bob".to_owned()));
		assert_eq!(filter_word("42 carol"), Some("carol".to_owned()));
	}

	#[test]
	fn sidecar_path_replaces_the_extension() {
		let path = build_output_path("data/names.txt", "letters-around.chain").unwrap();
		assert_eq!(path, PathBuf::from("data/names.letters-around.chain"));
	}
}
