//! Dictionary membership for candidate words.

use rustc_hash::FxHashSet;

/// A read-only word membership oracle.
///
/// Words are compared exactly; [`WordList`] stores them upper-cased to
/// match the letters on the board.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// A word list held in memory.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Parses one word per line. Lines are trimmed and upper-cased; blank lines are skipped.
    pub fn parse(text: &str) -> Self {
        text.lines().collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }
}

impl Dictionary for WordList {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
