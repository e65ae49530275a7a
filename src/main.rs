//! Terminal entry point for the deck menu.

use std::io;
use std::process::ExitCode;

use deckrs::{DeckOptions, Session};

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), DeckOptions::default());

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("deckrs: {err}");
            ExitCode::FAILURE
        }
    }
}
