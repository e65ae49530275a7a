//! The interactive menu loop.
//!
//! A [`Session`] owns the single [`Deck`] and talks to the user through any
//! [`BufRead`]/[`Write`] pair, so the same loop drives a terminal or an
//! in-memory script.

use core::ops::ControlFlow;
use std::io::{BufRead, Write};

use crate::deck::{Deck, SortKey};
use crate::error::SessionError;
use crate::options::DeckOptions;

mod option;

pub use option::MenuOption;

const COUNT_PROMPT: &str = "Enter number of cards to be dealt";
const SORT_PROMPT: &str = "Sort by [R] Rank or [S] Suit:";

/// One run of the interactive menu.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// use deckrs::{DeckOptions, Session};
///
/// let input = Cursor::new("2\nE\n");
/// let mut session = Session::new(input, Vec::new(), DeckOptions::default());
/// session.run().unwrap();
/// assert_eq!(session.deck().len(), 51);
/// ```
pub struct Session<R, W> {
    input: R,
    output: W,
    deck: Deck,
    /// Options used for the initial deck and every "new deck".
    options: DeckOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a fresh deck built from `options`.
    #[must_use]
    pub fn new(input: R, output: W, options: DeckOptions) -> Self {
        Self {
            input,
            output,
            deck: Deck::with_options(options),
            options,
        }
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Consumes the session, returning the writer.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.print_menu()?;

            let flow = match self.read_line()? {
                None => self.dispatch(MenuOption::Exit)?,
                Some(line) => match line.parse::<MenuOption>() {
                    Ok(option) => self.dispatch(option)?,
                    Err(_) => {
                        writeln!(self.output, "Invalid Option")?;
                        ControlFlow::Continue(())
                    }
                },
            };

            writeln!(self.output)?;
            self.output.flush()?;

            if flow.is_break() {
                return Ok(());
            }
        }
    }

    /// Performs one menu option and reports the result.
    ///
    /// Returns [`ControlFlow::Break`] when the session should end.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn dispatch(&mut self, option: MenuOption) -> Result<ControlFlow<()>, SessionError> {
        match option {
            MenuOption::Reset => {
                self.deck.reset();
                writeln!(self.output, "Deck reset!")?;
            }
            MenuOption::DealOne => match self.deck.deal_one() {
                Ok(card) => writeln!(
                    self.output,
                    "Drew {card} - Deck has {} left",
                    self.deck.len()
                )?,
                Err(err) => writeln!(self.output, "Cannot deal: {err}")?,
            },
            MenuOption::DealMany => {
                let Some(count) = self.prompt_count()? else {
                    return self.dispatch(MenuOption::Exit);
                };
                match self.deck.deal_many(count) {
                    Ok(cards) => {
                        for card in cards {
                            writeln!(self.output, "Drew {card}")?;
                        }
                        writeln!(self.output, "Deck has {} left", self.deck.len())?;
                    }
                    Err(err) => writeln!(self.output, "Cannot deal: {err}")?,
                }
            }
            MenuOption::Sort => {
                let Some(key) = self.prompt_sort_key()? else {
                    return self.dispatch(MenuOption::Exit);
                };
                self.deck.sort_by(key);
                match key {
                    SortKey::Rank => writeln!(self.output, "Sorted by rank")?,
                    SortKey::Suit => writeln!(self.output, "Sorted by suit")?,
                }
            }
            MenuOption::NewDeck => {
                self.deck = Deck::with_options(self.options);
                writeln!(self.output, "New deck created!")?;
            }
            MenuOption::Print => write!(self.output, "{}", self.deck)?,
            MenuOption::Exit => {
                writeln!(self.output, "Good bye!")?;
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn print_menu(&mut self) -> Result<(), SessionError> {
        for (index, option) in MenuOption::ALL.into_iter().enumerate() {
            let lead = if index == 0 { "Options:" } else { "        " };
            writeln!(
                self.output,
                "{lead} option [{}] {}",
                option.key(),
                option.label()
            )?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line, replacing invalid UTF-8. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Asks until a non-negative integer is entered.
    fn prompt_count(&mut self) -> Result<Option<usize>, SessionError> {
        loop {
            writeln!(self.output, "{COUNT_PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Ok(count) = line.trim().parse::<usize>() {
                return Ok(Some(count));
            }
        }
    }

    /// Asks until `R` or `S` is entered.
    fn prompt_sort_key(&mut self) -> Result<Option<SortKey>, SessionError> {
        loop {
            writeln!(self.output, "{SORT_PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Ok(key) = line.parse::<SortKey>() {
                return Ok(Some(key));
            }
        }
    }
}
