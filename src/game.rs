use crate::difficulty::Difficulty;
use crate::error::GuessError;
use crate::wordbank::WordBank;
use std::collections::BTreeSet;

/// Marker for a letter that has not been revealed yet.
pub const PLACEHOLDER: char = '_';

/// What a single accepted guess did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the target; every occurrence is now revealed.
    Correct,
    /// The letter does not occur; one attempt was spent.
    Wrong,
    /// The letter was already tried. Nothing changed, no attempt spent.
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One round of hangman: the target word, what the player has revealed so
/// far, and how many wrong guesses remain.
///
/// Comparisons are case-insensitive throughout; revealed letters and wrong
/// guesses are stored uppercased regardless of the target's case.
pub struct GameSession {
    difficulty: Difficulty,
    target: Vec<char>,
    revealed: Vec<char>,
    wrong_guesses: Vec<char>,
    attempts_left: u8,
}

impl GameSession {
    /// Starts a round by drawing the next word from the bank.
    pub fn start(difficulty: Difficulty, bank: &mut WordBank) -> Self {
        let word = bank.next_word();
        log::info!("starting a {difficulty} round, {} letters", word.chars().count());
        Self::with_target(difficulty, &word)
    }

    /// Starts a round against a known target word. Useful when the caller
    /// picks the word itself (tests, scripted demos).
    pub fn with_target(difficulty: Difficulty, word: &str) -> Self {
        let target: Vec<char> = word.chars().collect();
        Self {
            revealed: vec![PLACEHOLDER; target.len()],
            wrong_guesses: Vec::new(),
            attempts_left: difficulty.max_attempts(),
            difficulty,
            target,
        }
    }

    /// Plays one letter. Rejects non-letters and guesses after the round has
    /// ended; repeated letters are accepted but change nothing, so a wrong
    /// letter is never penalized twice.
    pub fn submit_guess(&mut self, guess: char) -> Result<GuessOutcome, GuessError> {
        if !guess.is_ascii_alphabetic() {
            return Err(GuessError::InvalidGuess);
        }
        if self.status() != GameStatus::InProgress {
            return Err(GuessError::GameAlreadyOver);
        }

        let letter = guess.to_ascii_uppercase();
        if self.revealed.contains(&letter) || self.wrong_guesses.contains(&letter) {
            return Ok(GuessOutcome::Repeat);
        }

        let mut matched = false;
        for (i, &c) in self.target.iter().enumerate() {
            if c.to_ascii_uppercase() == letter {
                self.revealed[i] = letter;
                matched = true;
            }
        }
        if matched {
            return Ok(GuessOutcome::Correct);
        }

        self.wrong_guesses.push(letter);
        self.attempts_left -= 1;
        Ok(GuessOutcome::Wrong)
    }

    /// True once every position of the target has been revealed.
    pub fn has_won(&self) -> bool {
        self.target
            .iter()
            .zip(&self.revealed)
            .all(|(&t, &r)| t.to_ascii_uppercase() == r)
    }

    /// True once every attempt has been spent, whether or not the word was
    /// completed first.
    pub fn is_over(&self) -> bool {
        self.attempts_left == 0
    }

    pub fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else if self.attempts_left == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    pub fn max_attempts(&self) -> u8 {
        self.difficulty.max_attempts()
    }

    pub fn word_len(&self) -> usize {
        self.target.len()
    }

    /// The pattern shown to the player: revealed letters uppercased,
    /// unrevealed positions as `_`. Always the same length as the target.
    pub fn revealed_pattern(&self) -> String {
        self.revealed.iter().collect()
    }

    /// Wrong guesses in the order they were made.
    pub fn wrong_guesses(&self) -> &[char] {
        &self.wrong_guesses
    }

    /// Every letter the player has tried, revealed and wrong alike. Lets the
    /// presentation layer filter duplicates before they reach the core.
    pub fn guessed_letters(&self) -> BTreeSet<char> {
        self.revealed
            .iter()
            .filter(|&&c| c != PLACEHOLDER)
            .chain(self.wrong_guesses.iter())
            .copied()
            .collect()
    }

    /// The target word, available only once the round has ended so the
    /// presentation layer can show the answer.
    pub fn target_word(&self) -> Option<String> {
        match self.status() {
            GameStatus::InProgress => None,
            GameStatus::Won | GameStatus::Lost => Some(self.target.iter().collect()),
        }
    }
}
