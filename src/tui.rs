//! Full-screen terminal interface built on Ratatui.
//!
//! Renders the gallows drawing, the revealed pattern, and the guess history,
//! and feeds key presses into the game core. While a round is in progress
//! every letter key is a guess and Esc quits; once the round ends, `n`
//! starts a new round against the same word bank and `q`/Esc quits.

use crate::cli::gallows;
use crate::difficulty::Difficulty;
use crate::game::{GameSession, GameStatus, GuessOutcome};
use crate::stickfigure::StickFigure;
use crate::wordbank::WordBank;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow);
const PATTERN_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Sets up the terminal, runs the interactive loop, and restores the
/// terminal on the way out.
pub fn run(difficulty: Difficulty, bank: &mut WordBank) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(difficulty, bank).run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
    result
}

struct App<'a> {
    bank: &'a mut WordBank,
    game: GameSession,
    figure: StickFigure,
    message: String,
    message_style: Style,
    should_quit: bool,
}

impl<'a> App<'a> {
    fn new(difficulty: Difficulty, bank: &'a mut WordBank) -> Self {
        let game = GameSession::start(difficulty, bank);
        Self {
            bank,
            game,
            figure: StickFigure::new(),
            message: format!("A {difficulty} round has started. Type a letter to guess."),
            message_style: INFO_STYLE,
            should_quit: false,
        }
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;
            if self.should_quit {
                return Ok(());
            }
            if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Char(c) => self.on_char(c),
                    _ => {}
                }
            }
        }
    }

    fn new_round(&mut self) {
        self.game = GameSession::start(self.game.difficulty(), self.bank);
        self.figure.reset();
        self.message = format!(
            "New round: {} letters, {} wrong guesses allowed.",
            self.game.word_len(),
            self.game.max_attempts()
        );
        self.message_style = INFO_STYLE;
    }

    fn on_char(&mut self, c: char) {
        if self.game.status() != GameStatus::InProgress {
            match c {
                'n' | 'N' => self.new_round(),
                'q' | 'Q' => self.should_quit = true,
                _ => {}
            }
            return;
        }

        let upper = c.to_ascii_uppercase();
        match self.game.submit_guess(c) {
            Ok(GuessOutcome::Correct) => {
                self.message = format!("'{upper}' is in the word!");
                self.message_style = SUCCESS_STYLE;
            }
            Ok(GuessOutcome::Wrong) => {
                self.figure.advance();
                self.message = format!("No '{upper}' in the word.");
                self.message_style = ERROR_STYLE;
            }
            Ok(GuessOutcome::Repeat) => {
                self.message = format!("You already tried '{upper}'.");
                self.message_style = INFO_STYLE;
            }
            Err(e) => {
                self.message = e.to_string();
                self.message_style = ERROR_STYLE;
            }
        }

        let word = self.game.target_word().unwrap_or_default();
        match self.game.status() {
            GameStatus::Won => {
                self.message = format!("You won! The word was {word}.");
                self.message_style = SUCCESS_STYLE;
            }
            GameStatus::Lost => {
                self.message = format!("Out of guesses! The word was {word}.");
                self.message_style = ERROR_STYLE;
            }
            GameStatus::InProgress => {}
        }
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Min(11),    // Gallows + round info
                Constraint::Length(3),  // Message line
                Constraint::Length(3),  // Key bindings
            ])
            .split(f.area());

        let title = Paragraph::new(Line::from(Span::styled(
            format!("HANGMAN — {} tier", self.game.difficulty()),
            HEADER_STYLE,
        )))
        .block(Block::default().borders(Borders::ALL))
        .centered();
        f.render_widget(title, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(30)])
            .split(chunks[1]);

        let figure = Paragraph::new(gallows(self.figure.current()))
            .block(Block::default().borders(Borders::ALL).title("Gallows"));
        f.render_widget(figure, body[0]);

        f.render_widget(self.round_panel(), body[1]);

        let message = Paragraph::new(Line::from(Span::styled(&self.message, self.message_style)))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(message, chunks[2]);

        let keys = if self.game.status() == GameStatus::InProgress {
            "a-z: guess a letter | Esc: quit"
        } else {
            "n: new round | q/Esc: quit"
        };
        let instructions = Paragraph::new(keys)
            .block(Block::default().borders(Borders::ALL))
            .centered();
        f.render_widget(instructions, chunks[3]);
    }

    fn round_panel(&self) -> Paragraph<'_> {
        let spaced: String = self
            .game
            .revealed_pattern()
            .chars()
            .flat_map(|c| [c, ' '])
            .collect();
        let wrong: Vec<String> = self
            .game
            .wrong_guesses()
            .iter()
            .map(char::to_string)
            .collect();
        let guessed: Vec<String> = self
            .game
            .guessed_letters()
            .into_iter()
            .map(|c| c.to_string())
            .collect();

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {}", spaced.trim_end()), PATTERN_STYLE)),
            Line::from(""),
            Line::from(format!(
                "  Attempts left: {}/{}",
                self.game.attempts_left(),
                self.game.max_attempts()
            )),
            Line::from(Span::styled(
                format!("  Wrong guesses: {}", wrong.join(", ")),
                ERROR_STYLE,
            )),
            Line::from(format!("  Letters tried: {}", guessed.join(", "))),
        ];

        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Round"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_word<'a>(bank: &'a mut WordBank) -> App<'a> {
        App::new(bank.difficulty(), bank)
    }

    fn hard_bank(word: &str) -> WordBank {
        WordBank::from_lines(Difficulty::Hard, word).unwrap()
    }

    #[test]
    fn test_letter_keys_drive_the_session() {
        let mut bank = hard_bank("cat");
        let mut app = app_with_word(&mut bank);
        app.on_char('c');
        app.on_char('z');
        assert_eq!(app.game.revealed_pattern(), "C__");
        assert_eq!(app.game.attempts_left(), 5);
        assert_eq!(app.figure.current(), 1);
    }

    #[test]
    fn test_figure_only_advances_on_wrong_guesses() {
        let mut bank = hard_bank("cat");
        let mut app = app_with_word(&mut bank);
        app.on_char('c');
        app.on_char('a');
        assert_eq!(app.figure.current(), 0);
        app.on_char('z');
        app.on_char('z'); // repeat, no second step
        assert_eq!(app.figure.current(), 1);
    }

    #[test]
    fn test_win_message_reveals_word() {
        let mut bank = hard_bank("cat");
        let mut app = app_with_word(&mut bank);
        for letter in ['c', 'a', 't'] {
            app.on_char(letter);
        }
        assert_eq!(app.game.status(), GameStatus::Won);
        assert!(app.message.contains("cat"));
    }

    #[test]
    fn test_new_round_key_after_game_over() {
        let mut bank = hard_bank("cat");
        let mut app = app_with_word(&mut bank);
        for letter in ['q', 'x', 'z', 'j', 'w', 'v'] {
            app.on_char(letter);
        }
        assert_eq!(app.game.status(), GameStatus::Lost);
        app.on_char('n');
        assert_eq!(app.game.status(), GameStatus::InProgress);
        assert_eq!(app.figure.current(), 0);
        assert_eq!(app.game.attempts_left(), 6);
    }

    #[test]
    fn test_quit_key_only_after_game_over() {
        let mut bank = hard_bank("cat");
        let mut app = app_with_word(&mut bank);
        app.on_char('q'); // in-progress: 'q' is a guess, not quit
        assert!(!app.should_quit);
        for letter in ['x', 'z', 'j', 'w', 'v'] {
            app.on_char(letter);
        }
        assert_eq!(app.game.status(), GameStatus::Lost);
        app.on_char('q');
        assert!(app.should_quit);
    }

    #[test]
    fn test_invalid_key_sets_error_message() {
        let mut bank = hard_bank("cat");
        let mut app = app_with_word(&mut bank);
        app.on_char('3');
        assert_eq!(app.message, "Guess must be a letter from A-Z");
        assert_eq!(app.game.attempts_left(), 6);
    }
}
