use crate::difficulty::Difficulty;
use crate::error::CorpusError;
use rand::Rng;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Candidate words for one difficulty tier. Words are dispensed at random
/// without repetition until the whole corpus has been played, then the cycle
/// resets and every word becomes eligible again.
#[derive(Debug)]
pub struct WordBank {
    difficulty: Difficulty,
    words: Vec<String>,
    dispensed: HashSet<usize>,
    last_drawn: Option<usize>,
}

impl WordBank {
    /// Builds a bank from the built-in corpus for the tier.
    pub fn new(difficulty: Difficulty) -> Result<Self, CorpusError> {
        Self::from_lines(difficulty, difficulty.embedded_corpus())
    }

    /// Builds a bank from a newline-delimited word list on disk.
    pub fn from_file<P: AsRef<Path>>(difficulty: Difficulty, path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| CorpusError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_lines(difficulty, &data)
    }

    /// Builds a bank from raw corpus text. Lines are trimmed; blank lines and
    /// lines with non-alphabetic characters are skipped. A corpus that yields
    /// no words is an error rather than a bank that cannot dispense.
    pub fn from_lines(difficulty: Difficulty, data: &str) -> Result<Self, CorpusError> {
        let words: Vec<String> = data
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_owned)
            .collect();

        if words.is_empty() {
            return Err(CorpusError::Empty(difficulty));
        }

        log::debug!("loaded {} words for the {difficulty} tier", words.len());
        Ok(Self {
            difficulty,
            words,
            dispensed: HashSet::new(),
            last_drawn: None,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draws a random word that has not been dispensed this cycle. When every
    /// word has been played the cycle resets, except that the word just played
    /// is skipped so two consecutive draws never match (unless the corpus has
    /// exactly one word).
    pub fn next_word(&mut self) -> String {
        if self.dispensed.len() == self.words.len() {
            log::debug!("{} corpus exhausted, starting a new cycle", self.difficulty);
            self.dispensed.clear();
        }

        let mut rng = rand::rng();
        loop {
            let idx = rng.random_range(0..self.words.len());
            if self.dispensed.contains(&idx) {
                continue;
            }
            // dispensed is only empty on the first draw of a cycle
            if self.dispensed.is_empty() && self.last_drawn == Some(idx) && self.words.len() > 1 {
                continue;
            }
            self.dispensed.insert(idx);
            self.last_drawn = Some(idx);
            return self.words[idx].clone();
        }
    }
}
