use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use log::{debug, info};

use namegen_core::model::chain::TermChain;
use namegen_core::model::sample_input::{Direction, SampleInput};
use namegen_core::split::partition::SplitPosition;
use namegen_core::split::rule::SplitRule;
use namegen_core::trainer;

/// Consecutive unproductive samples allowed before generation stops.
const TERMINATION_COUNT: usize = 2048;

/// Where accepted names are saved.
const SAVE_DIR: &str = "generated";

/// Generates names by splitting letters in words in various ways.
#[derive(Parser, Debug)]
#[command(name = "namegen")]
struct Args {
	/// Minimum string length of generated names.
	#[arg(long, default_value_t = 4)]
	minlen: usize,

	/// Force chain termination once a name is at least this size.
	#[arg(long, default_value_t = 13)]
	maxlen: usize,

	/// Grow names at the end of the word, at the start, or at both ends
	/// randomly.
	#[arg(short, long, default_value = "forward")]
	direction: Direction,

	/// A series of letter or letters names must start with.
	#[arg(short, long, num_args = 1..)]
	start: Vec<String>,

	/// Input file(s) containing a list of names, one word per line.
	#[arg(short, long, required = true, num_args = 1..)]
	input: Vec<PathBuf>,

	/// Determine how letters in words will be split apart before the
	/// chain is constructed.
	#[arg(long, default_value = "letters")]
	method: SplitRule,

	/// Determine how to break apart the word at a given separation point.
	#[arg(long, default_value = "around")]
	split: SplitPosition,
}

fn main() -> anyhow::Result<()> {
	env_logger::init();
	let args = Args::parse();

	let mut input = SampleInput::new(args.minlen, args.maxlen)?;
	input.direction = args.direction;
	input.set_starts(&args.start);

	let mut chain = TermChain::new();
	for path in &args.input {
		let partial = trainer::load_or_build(path, args.method, args.split)
			.with_context(|| format!("failed to build a chain from {}", path.display()))?;
		chain.merge(&partial)?;
	}
	if chain.is_empty() {
		bail!("no usable words found in the input files");
	}
	info!("chain built from {} words", chain.len());

	let mut seen: HashSet<String> = chain.words().map(capitalize).collect();

	let stdin = io::stdin();
	let mut replies = stdin.lock().lines();
	let mut terminate_after = TERMINATION_COUNT;

	while terminate_after > 0 {
		let Some(candidate) = chain.sample(&input) else {
			terminate_after -= 1;
			continue;
		};

		let name = capitalize(&candidate);
		if !seen.insert(name.clone()) {
			terminate_after -= 1;
			continue;
		}
		terminate_after = TERMINATION_COUNT;

		print!("{:<width$} =>", name, width = args.maxlen + 1);
		io::stdout().flush()?;

		let Some(reply) = replies.next().transpose()? else {
			// Stdin closed, the operator is done.
			println!();
			break;
		};

		let target = reply.trim();
		if !target.is_empty() {
			save_name(&name, target, &mut replies)?;
		}
	}

	Ok(())
}

/// First letter uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first
			.to_uppercase()
			.chain(chars.flat_map(char::to_lowercase))
			.collect(),
		None => String::new(),
	}
}

/// Appends `name` to `generated/<target>.txt`.
///
/// Creating a file that does not exist yet must be confirmed by the
/// operator; appending to an existing one is silent.
fn save_name(
	name: &str,
	target: &str,
	replies: &mut io::Lines<io::StdinLock<'static>>,
) -> anyhow::Result<()> {
	let mut file_name = target.to_owned();
	if !file_name.ends_with(".txt") {
		file_name.push_str(".txt");
	}
	let path = Path::new(SAVE_DIR).join(file_name);

	if !path.exists() {
		print!("Create file \"{}\"? ", path.display());
		io::stdout().flush()?;
		let confirmed = match replies.next().transpose()? {
			Some(reply) => reply.trim().to_lowercase().starts_with('y'),
			None => false,
		};
		if !confirmed {
			return Ok(());
		}
	}

	std::fs::create_dir_all(SAVE_DIR)?;
	let mut file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open {}", path.display()))?;
	writeln!(file, "{name}")?;
	debug!("saved {name} to {}", path.display());

	Ok(())
}
