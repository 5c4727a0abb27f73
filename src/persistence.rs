//! File I/O for boards, dictionaries and result reports.
//!
//! Board files hold one row per line; letters may be separated by any
//! non-letter characters. Dictionary files hold one word per line.
//!
//! Report format:
//! - header line `Found <n> words:` and a blank line
//! - one line per word: the word, two spaces, then its path cells as
//!   `(row,col)` joined by ` -> `
//! - a blank line and `Total number of states: <n>`

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::board::Board;
use crate::dictionary::WordList;
use crate::error::LoadError;
use crate::solver::{FoundWord, SearchOutcome};

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a `dim`x`dim` board from a text file.
pub fn load_board(path: &Path, dim: usize) -> Result<Board, LoadError> {
    Ok(Board::parse(dim, &read(path)?)?)
}

/// Loads a word list with one word per line.
pub fn load_dictionary(path: &Path) -> Result<WordList, LoadError> {
    Ok(WordList::parse(&read(path)?))
}

/// Formats one result as `WORD  (r,c) -> (r,c) -> ...`.
pub fn format_word(found: &FoundWord) -> String {
    let cells: Vec<String> = found
        .path()
        .cells()
        .iter()
        .map(|(row, col)| format!("({row},{col})"))
        .collect();
    format!("{}  {}", found.word(), cells.join(" -> "))
}

/// Formats a full search outcome as a human-readable report.
pub fn format_report(outcome: &SearchOutcome) -> String {
    let mut output = String::new();
    // writing to a String cannot fail
    let _ = writeln!(output, "Found {} words:\n", outcome.words.len());
    for found in &outcome.words {
        let _ = writeln!(output, "{}", format_word(found));
    }
    let _ = write!(
        output,
        "\nTotal number of states: {}\n",
        outcome.states_generated
    );
    output
}

/// Writes the report for `outcome` to `path`.
pub fn save_report(path: &Path, outcome: &SearchOutcome) -> Result<(), LoadError> {
    fs::write(path, format_report(outcome)).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::solver::{solve, SearchConfig};

    #[test]
    fn test_load_board_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.txt");
        fs::write(&path, "s a\nt t\n").unwrap();

        let board = load_board(&path, 2).unwrap();
        assert_eq!(board.to_string(), "S A\nT T\n");
    }

    #[test]
    fn test_load_board_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.txt");
        fs::write(&path, "sat\n").unwrap();

        assert!(matches!(load_board(&path, 3), Err(LoadError::Board(_))));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_dictionary(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }

    #[test]
    fn test_load_dictionary_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "sat\ntat\n\n").unwrap();

        let words = load_dictionary(&path).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("TAT"));
    }

    #[test]
    fn test_save_report_writes_words_and_total() {
        let board = Board::parse(2, "SA\nTT\n").unwrap();
        let words = WordList::parse("sat\n");
        let outcome = solve(&board, &words, &SearchConfig::default()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        save_report(&path, &outcome).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, format_report(&outcome));
        assert!(written.starts_with("Found 1 words:\n\nSAT  (0,0) -> (0,1) -> (1,1)\n"));
        assert!(written.ends_with("Total number of states: 64\n"));
    }
}
