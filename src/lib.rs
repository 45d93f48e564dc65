// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod stickfigure;
pub mod tui;
pub mod wordbank;

// Re-export the core types for easier testing
pub use difficulty::Difficulty;
pub use error::{CorpusError, GuessError};
pub use game::{GameSession, GameStatus, GuessOutcome, PLACEHOLDER};
pub use stickfigure::{FINAL_STAGE, StickFigure};
pub use wordbank::WordBank;
