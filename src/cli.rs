use crate::difficulty::Difficulty;
use crate::game::{GameSession, GameStatus, GuessOutcome};
use crate::stickfigure::StickFigure;
use crate::wordbank::WordBank;
use clap::Parser;
use std::io::BufRead;

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Difficulty tier to play
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    /// Path to a newline-delimited word list replacing the built-in corpus
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<String>,

    /// Launch the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// The eleven gallows drawings, one per stick-figure stage.
const GALLOWS: [&str; 11] = [
    "\n\n\n\n\n\n",
    "\n\n\n\n\n\n=========",
    "  |\n  |\n  |\n  |\n  |\n  |\n=========",
    "  +---+\n  |\n  |\n  |\n  |\n  |\n=========",
    "  +---+\n  |   |\n  |\n  |\n  |\n  |\n=========",
    "  +---+\n  |   |\n  |   O\n  |\n  |\n  |\n=========",
    "  +---+\n  |   |\n  |   O\n  |   |\n  |\n  |\n=========",
    "  +---+\n  |   |\n  |   O\n  |  /|\n  |\n  |\n=========",
    "  +---+\n  |   |\n  |   O\n  |  /|\\\n  |\n  |\n=========",
    "  +---+\n  |   |\n  |   O\n  |  /|\\\n  |  /\n  |\n=========",
    "  +---+\n  |   |\n  |   O\n  |  /|\\\n  |  / \\\n  |\n=========",
];

/// ASCII drawing for a stick-figure stage. Out-of-range stages clamp to the
/// finished figure.
pub fn gallows(stage: u8) -> &'static str {
    GALLOWS[usize::from(stage.min(10))]
}

enum PlayerInput {
    Guess(char),
    Invalid,
    Exit,
    NewRound,
}

fn read_player_input<R: BufRead>(reader: &mut R) -> PlayerInput {
    println!("\nEnter a letter (or 'new' for a new round, 'quit' to exit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return PlayerInput::Exit,
        Ok(_) => {}
    }
    let input = input.trim();

    match input.to_ascii_uppercase().as_str() {
        "QUIT" | "EXIT" => PlayerInput::Exit,
        "NEW" | "NEXT" => PlayerInput::NewRound,
        _ => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => PlayerInput::Guess(letter),
                _ => PlayerInput::Invalid,
            }
        }
    }
}

fn display_round_start(game: &GameSession) {
    println!(
        "\nNew {} round. The word has {} letters; {} wrong guesses allowed.",
        game.difficulty(),
        game.word_len(),
        game.max_attempts()
    );
}

fn display_board(game: &GameSession, figure: &StickFigure) {
    println!("{}", gallows(figure.current()));
    let spaced: String = game
        .revealed_pattern()
        .chars()
        .flat_map(|c| [c, ' '])
        .collect();
    println!("Word:  {}", spaced.trim_end());
    if !game.wrong_guesses().is_empty() {
        let wrong: Vec<String> = game.wrong_guesses().iter().map(char::to_string).collect();
        println!("Wrong: {}", wrong.join(", "));
    }
    println!("Attempts left: {}/{}", game.attempts_left(), game.max_attempts());
}

fn display_round_end(game: &GameSession) {
    let word = game.target_word().unwrap_or_default();
    match game.status() {
        GameStatus::Won => println!("You won! The word was {word}."),
        GameStatus::Lost => println!("Out of guesses! The word was {word}."),
        GameStatus::InProgress => {}
    }
    println!("Type 'new' for another round or 'quit' to exit.");
}

/// Line-based play loop. Rounds keep drawing from the same bank, so words do
/// not repeat until the corpus has been played through.
pub fn play_rounds<R: BufRead>(difficulty: Difficulty, bank: &mut WordBank, mut reader: R) {
    let mut game = GameSession::start(difficulty, bank);
    let mut figure = StickFigure::new();
    display_round_start(&game);

    loop {
        match read_player_input(&mut reader) {
            PlayerInput::Exit => {
                println!("Goodbye.");
                break;
            }
            PlayerInput::NewRound => {
                game = GameSession::start(difficulty, bank);
                figure.reset();
                display_round_start(&game);
            }
            PlayerInput::Invalid => {
                println!("Enter a single letter.");
            }
            PlayerInput::Guess(letter) => {
                let upper = letter.to_ascii_uppercase();
                match game.submit_guess(letter) {
                    Ok(GuessOutcome::Correct) => println!("'{upper}' is in the word!"),
                    Ok(GuessOutcome::Wrong) => {
                        figure.advance();
                        println!("No '{upper}' in the word.");
                    }
                    Ok(GuessOutcome::Repeat) => {
                        println!("You already tried '{upper}'.");
                        continue;
                    }
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                }
                display_board(&game, &figure);
                if game.status() != GameStatus::InProgress {
                    display_round_end(&game);
                }
            }
        }
    }
}
