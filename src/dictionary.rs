//! Word lists used to validate permutation candidates
//!
//! Entrypoint constructors are
//! - [`Dictionary::embedded`]: the word list shipped inside the binary
//! - [`Dictionary::file`]: a user provided word list, one word per line
//! - [`Dictionary::from_slice`]: an in-memory word list

use crate::dic::DicParser;
use std::{
	collections::{BTreeSet, HashMap, HashSet},
	fs::File,
	hash::BuildHasher,
	io::{self, Read},
	path::Path,
};

/// Word list compiled into the binary
const EMBEDDED_WORDS: &str = include_str!("../dictionary/words.txt");

/// Anything able to answer whether a word is valid
///
/// This is the only thing the permutation engine needs to know about a
/// dictionary, which lets it run against plain collections as well.
pub trait Lexicon {
	/// Whether `word` is an entry, compared exactly
	fn contains(&self, word: &str) -> bool;
}

/// Set of valid words, each entry mapped to the number of times it was seen
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
	entries: HashMap<String, usize>,
}

/// Ways initializing a [`Dictionary`] could go wrong
#[derive(Debug, thiserror::Error)]
pub enum InitializeError {
	/// Could not split the word list into lines
	#[error("Could not parse file: {0}")]
	Parser(String),

	/// Could not correctly open or read the given file
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Constructors
impl Dictionary {
	/// Inserts every line as is. Blank lines are not skipped and end up as an
	/// empty entry.
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut entries = HashMap::<String, usize>::new();
		for line in lines {
			let line = line.as_ref();
			log::trace!("Loading entry `{line}`");
			*entries.entry(line.to_owned()).or_default() += 1;
		}

		log::debug!("Loaded {} distinct entries", entries.len());
		Self { entries }
	}

	/// # Errors
	///
	/// Will error if the content could not be split into lines.
	pub fn from_slice(content: &str) -> Result<Self, InitializeError> {
		let lines = DicParser.parse(content)?;
		Ok(Self::from_lines(lines))
	}

	/// Reads the whole file at `path` as UTF-8 text.
	///
	/// # Errors
	///
	/// Will error if the file cannot be opened or read, or if it is not valid
	/// UTF-8. Nothing is loaded in that case.
	pub fn file(path: &Path) -> Result<Self, InitializeError> {
		let mut file = File::open(path)?;
		let mut buffer = String::new();
		file.read_to_string(&mut buffer)?;
		log::debug!("Read dictionary file `{}`", path.display());
		Self::from_slice(&buffer)
	}

	/// Builds the dictionary bundled with the crate.
	///
	/// # Errors
	///
	/// Will error if the bundled list could not be parsed.
	pub fn embedded() -> Result<Self, InitializeError> {
		Self::from_slice(EMBEDDED_WORDS)
	}
}

/// Accessors
impl Dictionary {
	/// Number of distinct entries
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no line was loaded at all
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Distinct entries, in no particular order
	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
	fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
		Self::from_lines(iter)
	}
}

impl Lexicon for Dictionary {
	fn contains(&self, word: &str) -> bool {
		self.entries.contains_key(word)
	}
}

impl<H: BuildHasher> Lexicon for HashSet<String, H> {
	fn contains(&self, word: &str) -> bool {
		Self::contains(self, word)
	}
}

impl<V, H: BuildHasher> Lexicon for HashMap<String, V, H> {
	fn contains(&self, word: &str) -> bool {
		self.contains_key(word)
	}
}

impl Lexicon for BTreeSet<String> {
	fn contains(&self, word: &str) -> bool {
		Self::contains(self, word)
	}
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
	fn contains(&self, word: &str) -> bool {
		(**self).contains(word)
	}
}
