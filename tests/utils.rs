use perms::{Lexicon, Strategy};

#[derive(Debug, thiserror::Error)]
#[error("{0} strategies disagreed with the expected anagrams")]
struct AnagramErrors(usize);

const STRATEGIES: [Strategy; 3] = [Strategy::Rotation, Strategy::Distinct, Strategy::Parallel];

/// Runs every strategy on `word` and checks each returns exactly `expected`
pub(crate) fn test_anagrams<L: Lexicon + Sync + ?Sized>(
	dict: &L,
	word: &str,
	expected: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
	let _ = pretty_env_logger::try_init();

	let errors = STRATEGIES
		.iter()
		.filter(|strategy| {
			let found = strategy.run(word, dict);
			if found == expected {
				log::info!("{strategy:?} found {found:?} for `{word}`");
				false
			} else {
				log::error!("{strategy:?} found {found:?} for `{word}`, expected {expected:?}");
				true
			}
		})
		.count();

	if errors == 0 {
		Ok(())
	} else {
		Err(Box::new(AnagramErrors(errors)))
	}
}

/// Whether `candidate` uses exactly the letters of `word`
pub(crate) fn is_rearrangement(candidate: &str, word: &str) -> bool {
	let mut left = candidate.chars().collect::<Vec<_>>();
	let mut right = word.chars().collect::<Vec<_>>();
	left.sort_unstable();
	right.sort_unstable();
	left == right
}
