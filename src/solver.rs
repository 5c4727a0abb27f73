//! Exhaustive word-path search.
//!
//! For each starting cell in row-major order:
//! - every simple path rooted at that cell is generated into a traversal store
//! - the store is drained through the dictionary filter
//! - accepted words accumulate across cells, deduplicated by word text
//!
//! No prefix pruning happens during generation; every simple path is built
//! and stored, including one- and two-letter prefixes.

use rustc_hash::FxHashSet;
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::error::{PathError, SearchError, StorageError};
use crate::path::PathState;
use crate::storage::{Discipline, Queue, Stack, Storage};

/// Shortest word accepted by default.
pub const MIN_WORD_LENGTH: usize = 3;

/// Settings fixed for the lifetime of one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Drain order of the traversal store.
    pub discipline: Discipline,
    /// Minimum word length in letters, after `Q` expansion.
    pub min_word_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            discipline: Discipline::default(),
            min_word_length: MIN_WORD_LENGTH,
        }
    }
}

/// An accepted word together with the representative path that spells it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoundWord {
    path: PathState,
}

impl FoundWord {
    pub fn word(&self) -> &str {
        self.path.word()
    }

    pub fn path(&self) -> &PathState {
        &self.path
    }
}

/// Accepted words in insertion order, with no two entries sharing a word.
#[derive(Debug, Default)]
pub struct FoundWords {
    entries: Vec<FoundWord>,
    seen: FxHashSet<String>,
}

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `path` unless its word is already present.
    ///
    /// The membership check and the insertion happen together; returns
    /// `true` if the path was kept.
    pub fn insert(&mut self, path: PathState) -> bool {
        if self.seen.contains(path.word()) {
            return false;
        }
        self.seen.insert(path.word().to_owned());
        self.entries.push(FoundWord { path });
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Accepted words in the order they were found.
    pub fn as_slice(&self) -> &[FoundWord] {
        &self.entries
    }

    /// Consumes the collection, returning entries sorted by word.
    pub fn into_sorted(self) -> Vec<FoundWord> {
        let mut entries = self.entries;
        sort_results(&mut entries);
        entries
    }
}

/// Sorts results lexicographically by word.
pub fn sort_results(results: &mut [FoundWord]) {
    results.sort_by(|a, b| a.word().cmp(b.word()));
}

/// The outcome of a full search.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Accepted words, sorted by word.
    pub words: Vec<FoundWord>,
    /// Total number of path states generated across all starting cells.
    pub states_generated: u64,
}

/// Generates `root` and every path that extends it into `store`.
///
/// States are stored in pre-order: a path reaches the store before any of
/// its extensions, and extensions follow king-move order. An explicit work
/// list replaces recursion so board size never threatens the call stack.
/// Returns the number of states stored.
pub fn generate<S>(board: &Board, root: PathState, store: &mut S) -> Result<u64, PathError>
where
    S: Storage<PathState> + ?Sized,
{
    let mut pending = vec![root];
    let mut generated = 0u64;

    while let Some(state) = pending.pop() {
        // push extensions in reverse so the first neighbor is expanded next
        let extensions = state
            .valid_neighbors()
            .map(|(row, col)| state.extend(board, row, col))
            .collect::<Result<Vec<_>, _>>()?;
        pending.extend(extensions.into_iter().rev());

        store.store(state);
        generated += 1;
    }

    Ok(generated)
}

/// Drains `store` into `results`, keeping dictionary words of at least
/// `min_word_length` letters that are not already present.
///
/// Returns the number of words accepted.
pub fn drain_and_filter<S, D>(
    store: &mut S,
    dictionary: &D,
    min_word_length: usize,
    results: &mut FoundWords,
) -> Result<usize, StorageError>
where
    S: Storage<PathState> + ?Sized,
    D: Dictionary + ?Sized,
{
    let mut accepted = 0;

    while !store.is_empty() {
        let state = store.retrieve()?;
        let word = state.word();
        if word.chars().count() < min_word_length || !dictionary.contains(word) {
            continue;
        }
        if results.insert(state) {
            accepted += 1;
        }
    }

    Ok(accepted)
}

/// Runs the search for every starting cell using `store` as the traversal buffer.
///
/// The store must be empty on entry and is left empty on return.
pub fn search_with<S, D>(
    board: &Board,
    dictionary: &D,
    min_word_length: usize,
    store: &mut S,
) -> Result<(FoundWords, u64), SearchError>
where
    S: Storage<PathState> + ?Sized,
    D: Dictionary + ?Sized,
{
    let mut results = FoundWords::new();
    let mut states_generated = 0u64;
    let dim = board.dim();

    for row in 0..dim {
        for col in 0..dim {
            debug_assert!(store.is_empty());
            let root = PathState::start(board, row, col)?;
            let generated = generate(board, root, store)?;
            let accepted = drain_and_filter(store, dictionary, min_word_length, &mut results)?;
            states_generated += generated;

            debug!(
                row,
                col,
                generated,
                accepted,
                total_words = results.len(),
                "finished starting cell"
            );
        }
    }

    Ok((results, states_generated))
}

/// Finds every dictionary word on `board` and returns them sorted by word.
pub fn solve<D>(
    board: &Board,
    dictionary: &D,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError>
where
    D: Dictionary + ?Sized,
{
    let min = config.min_word_length;
    let (found, states_generated) = match config.discipline {
        Discipline::Stack => search_with(board, dictionary, min, &mut Stack::new())?,
        Discipline::Queue => search_with(board, dictionary, min, &mut Queue::new())?,
    };

    let words = found.into_sorted();
    for found in &words {
        trace!(word = found.word(), cells = ?found.path().cells(), "accepted");
    }
    info!(
        dim = board.dim(),
        discipline = config.discipline.name(),
        words = words.len(),
        states_generated,
        "search complete"
    );

    Ok(SearchOutcome {
        words,
        states_generated,
    })
}
