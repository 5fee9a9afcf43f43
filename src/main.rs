//! Perms CLI
//!
//! Prints every dictionary word made of the letters of `--word`, one per line.

use clap::{CommandFactory, Parser};
use perms::{Dictionary, InitializeError, Strategy, LONG_WORD_THRESHOLD};
use std::{
	io::{stdout, BufWriter, Write},
	path::{Path, PathBuf},
	sync::OnceLock,
};

/// Find every dictionary word made of the letters of a word
#[derive(clap::Parser)]
struct Args {
	/// Word to process
	#[arg(long, short)]
	word: Option<String>,

	/// Path to a dictionary file, one word per line (defaults to the embedded english dictionary)
	#[arg(long, short)]
	dictionary: Option<PathBuf>,

	/// How candidate words are enumerated
	#[arg(long, short, value_enum, default_value_t)]
	strategy: Strategy,
}

/// Built on first use so that `-d` never pays for it
static DEFAULT_DICTIONARY: OnceLock<Dictionary> = OnceLock::new();

/// Exits with code 1 when the dictionary cannot be loaded, and prints the
/// help without failing when no word is given
fn main() -> Result<(), Box<dyn std::error::Error>> {
	pretty_env_logger::init_timed();

	let args = Args::parse();

	let word = args.word.as_deref().map(str::trim).unwrap_or_default();
	if word.is_empty() {
		eprintln!("{}", Args::command().render_help());
		return Ok(());
	}

	let loaded = match load_dictionary(args.dictionary.as_deref()) {
		Ok(dict) => dict,
		Err(err) => {
			log::error!("Could not load dictionary: {err}");
			std::process::exit(1);
		}
	};

	let len = word.chars().count();
	if len > LONG_WORD_THRESHOLD {
		log::warn!("Word `{word}` has {len} letters, enumerating its orderings may take a while");
	}

	let dict = match &loaded {
		Some(dict) => dict,
		None => default_dictionary(),
	};
	let found = args.strategy.run(word, dict);
	log::debug!("Found {} words for `{word}`", found.len());

	let mut out = BufWriter::new(stdout().lock());
	for anagram in found {
		writeln!(out, "{anagram}")?;
	}
	out.flush()?;

	Ok(())
}

/// Only a user provided dictionary is loaded here, the embedded one is
/// shared through [`default_dictionary`]
fn load_dictionary(path: Option<&Path>) -> Result<Option<Dictionary>, InitializeError> {
	path.map(Dictionary::file).transpose()
}

/// Embedded word list, parsed once
fn default_dictionary() -> &'static Dictionary {
	DEFAULT_DICTIONARY.get_or_init(|| {
		Dictionary::embedded().unwrap_or_else(|err| {
			log::error!("Could not load embedded dictionary: {err}");
			std::process::exit(1);
		})
	})
}
