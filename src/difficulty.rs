use clap::ValueEnum;
use std::fmt;

/// Difficulty tier of a round. Decides which word corpus is used and how
/// many wrong guesses the player is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Wrong guesses allowed before the round is lost.
    pub fn max_attempts(self) -> u8 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 8,
            Difficulty::Hard => 6,
        }
    }

    /// Built-in word corpus for the tier, one word per line.
    pub fn embedded_corpus(self) -> &'static str {
        match self {
            Difficulty::Easy => include_str!("resources/easy.txt"),
            Difficulty::Medium => include_str!("resources/medium.txt"),
            Difficulty::Hard => include_str!("resources/hard.txt"),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_attempts_per_tier() {
        assert_eq!(Difficulty::Easy.max_attempts(), 10);
        assert_eq!(Difficulty::Medium.max_attempts(), 8);
        assert_eq!(Difficulty::Hard.max_attempts(), 6);
    }

    #[test]
    fn test_embedded_corpora_are_non_empty() {
        for tier in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(
                tier.embedded_corpus().lines().any(|l| !l.trim().is_empty()),
                "embedded corpus for {tier} is empty"
            );
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}
