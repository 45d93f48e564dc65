use crate::difficulty::Difficulty;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal setup error: the word corpus for a difficulty could not be loaded.
/// A round of that tier cannot begin without a word, so this is surfaced to
/// the caller instead of continuing with an unusable bank.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read word list from {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list for the {0} tier contains no usable words")]
    Empty(Difficulty),
}

/// Recoverable guess rejection. No session state changes when one of these
/// is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    #[error("Guess must be a letter from A-Z")]
    InvalidGuess,
    #[error("the round is already over")]
    GameAlreadyOver,
}
