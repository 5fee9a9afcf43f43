//! Enumerates the rearrangements of a word that are valid [`Lexicon`] entries
//!
//! Three strategies are provided, all returning the same sorted and
//! deduplicated matches:
//! - [`permutations`]: walks all `n!` orderings, repeated letters included
//! - [`distinct_permutations`]: walks each distinct arrangement once
//! - [`par_permutations`]: [`permutations`] split across the `rayon` pool

use crate::dictionary::Lexicon;
use rayon::prelude::*;
use std::{collections::BTreeSet, iter};

/// Words longer than this take noticeably long with the factorial strategies
pub const LONG_WORD_THRESHOLD: usize = 10;

/// How candidates are enumerated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
	/// In-place rotations over every ordering, see [`permutations`]
	#[default]
	Rotation,
	/// Lexicographic walk over distinct arrangements, see [`distinct_permutations`]
	Distinct,
	/// Rotations split by leading character, see [`par_permutations`]
	Parallel,
}

impl Strategy {
	/// Dispatches to the function backing this strategy
	#[must_use]
	pub fn run<L: Lexicon + Sync + ?Sized>(self, word: &str, dictionary: &L) -> Vec<String> {
		match self {
			Self::Rotation => permutations(word, dictionary),
			Self::Distinct => distinct_permutations(word, dictionary),
			Self::Parallel => par_permutations(word, dictionary),
		}
	}
}

/// Returns every ordering of the letters of `word` found in `dictionary`,
/// sorted and without duplicates.
///
/// Characters are handled as `char`s so multi-byte letters are never split.
/// Every one of the `n!` orderings is generated, so a word with repeated
/// letters produces the same candidate several times; matches are collected
/// in a set to collapse them.
///
/// An empty `word` yields a single empty string whatever the dictionary.
#[must_use]
pub fn permutations<L: Lexicon + ?Sized>(word: &str, dictionary: &L) -> Vec<String> {
	if word.is_empty() {
		return vec![String::new()];
	}

	let mut buffer = word.chars().collect::<Vec<_>>();
	let len = buffer.len();

	let mut found = BTreeSet::new();
	rotations(&mut buffer, len, &mut |candidate| {
		probe(candidate.iter().collect(), dictionary, &mut found);
	});

	found.into_iter().collect()
}

/// Same result as [`permutations`], but each distinct arrangement is
/// generated exactly once, starting from the sorted letters.
///
/// Arrangements come out in ascending order so no set is needed.
#[must_use]
pub fn distinct_permutations<L: Lexicon + ?Sized>(word: &str, dictionary: &L) -> Vec<String> {
	if word.is_empty() {
		return vec![String::new()];
	}

	let mut buffer = word.chars().collect::<Vec<_>>();
	buffer.sort_unstable();

	let mut found = Vec::new();
	loop {
		let candidate = buffer.iter().collect::<String>();
		if dictionary.contains(&candidate) {
			found.push(candidate);
		}

		if !next_permutation(&mut buffer) {
			break;
		}
	}

	found
}

/// Same result as [`permutations`], with one task per distinct leading
/// character. Each task owns its buffer and match set; sets are merged once
/// every task is done.
#[must_use]
pub fn par_permutations<L: Lexicon + Sync + ?Sized>(word: &str, dictionary: &L) -> Vec<String> {
	if word.is_empty() {
		return vec![String::new()];
	}

	let letters = word.chars().collect::<Vec<_>>();

	let mut leads = letters.clone();
	leads.sort_unstable();
	leads.dedup();

	let found = leads
		.into_par_iter()
		.map(|lead| {
			let mut buffer = letters.clone();
			let at = buffer.iter().position(|&c| c == lead).unwrap_or_default();
			buffer.swap(0, at);

			let tail = &mut buffer[1..];
			let len = tail.len();

			let mut found = BTreeSet::new();
			rotations(tail, len, &mut |rest| {
				let candidate = iter::once(lead).chain(rest.iter().copied()).collect();
				probe(candidate, dictionary, &mut found);
			});
			found
		})
		.reduce(BTreeSet::new, |mut acc, found| {
			acc.extend(found);
			acc
		});

	found.into_iter().collect()
}

/// Keeps `candidate` if it is a dictionary entry not yet seen
fn probe<L: Lexicon + ?Sized>(candidate: String, dictionary: &L, found: &mut BTreeSet<String>) {
	if !found.contains(&candidate) && dictionary.contains(&candidate) {
		found.insert(candidate);
	}
}

/// Calls `visit` with every ordering of the first `np` elements of `buffer`.
///
/// At each level the prefix is rotated left once per element, so every
/// element takes the last slot of the prefix once while the shorter prefix
/// is permuted recursively. After `np` rotations the prefix is back to its
/// initial order.
fn rotations<F: FnMut(&[char])>(buffer: &mut [char], np: usize, visit: &mut F) {
	if np <= 1 {
		visit(buffer);
		return;
	}

	for _ in 0..np {
		rotations(buffer, np - 1, visit);
		buffer[..np].rotate_left(1);
	}
}

/// Rearranges `buffer` into the next greater arrangement. Returns `false`
/// and leaves `buffer` untouched once the greatest one is reached.
fn next_permutation(buffer: &mut [char]) -> bool {
	let Some(pivot) = buffer.windows(2).rposition(|pair| pair[0] < pair[1]) else {
		return false;
	};

	let pivot_char = buffer[pivot];
	// the element right after the pivot is always greater
	let successor = buffer
		.iter()
		.rposition(|&c| c > pivot_char)
		.unwrap_or(pivot + 1);

	buffer.swap(pivot, successor);
	buffer[pivot + 1..].reverse();
	true
}
