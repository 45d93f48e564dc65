use hangman::cli::{self, parse_cli};
use hangman::tui;
use hangman::wordbank::WordBank;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = parse_cli();

    let bank = match &cli.wordlist_path {
        Some(path) => WordBank::from_file(cli.difficulty, path),
        None => WordBank::new(cli.difficulty),
    };
    let mut bank = match bank {
        Ok(bank) => bank,
        Err(e) => {
            eprintln!("Cannot start a {} round: {e}", cli.difficulty);
            return ExitCode::FAILURE;
        }
    };

    if cli.tui {
        if let Err(e) = tui::run(cli.difficulty, &mut bank) {
            eprintln!("Terminal error: {e}");
            return ExitCode::FAILURE;
        }
    } else {
        let stdin = io::stdin();
        cli::play_rounds(cli.difficulty, &mut bank, stdin.lock());
    }
    ExitCode::SUCCESS
}
