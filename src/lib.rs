//! perms
//!
//! Finds the dictionary words spelled with exactly the letters of a given
//! word. Load a [`Dictionary`] (or use any [`Lexicon`]) and hand it to
//! [`permutations()`] or one of its variants.

mod dic;
mod dictionary;
mod permutations;

pub use dictionary::{Dictionary, InitializeError, Lexicon};
pub use permutations::{
	distinct_permutations, par_permutations, permutations, Strategy, LONG_WORD_THRESHOLD,
};
