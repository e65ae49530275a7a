//! Top-level menu options.

use core::str::FromStr;

use crate::error::ParseOptionError;

/// An entry of the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    /// Restore and reshuffle the full deck.
    Reset,
    /// Deal the top card.
    DealOne,
    /// Deal a chosen number of cards.
    DealMany,
    /// Sort the remaining cards.
    Sort,
    /// Replace the deck with a new one.
    NewDeck,
    /// List the remaining cards.
    Print,
    /// Leave the menu.
    Exit,
}

impl MenuOption {
    /// All options in menu order.
    pub const ALL: [Self; 7] = [
        Self::Reset,
        Self::DealOne,
        Self::DealMany,
        Self::Sort,
        Self::NewDeck,
        Self::Print,
        Self::Exit,
    ];

    /// The text a user types to select this option.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Reset => "1",
            Self::DealOne => "2",
            Self::DealMany => "3",
            Self::Sort => "4",
            Self::NewDeck => "5",
            Self::Print => "6",
            Self::Exit => "E",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reset => "Reset deck",
            Self::DealOne => "Draw 1 Card",
            Self::DealMany => "Draw multiple cards",
            Self::Sort => "Sort deck",
            Self::NewDeck => "Create new deck",
            Self::Print => "Print deck",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for MenuOption {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.key() == s)
            .ok_or_else(|| ParseOptionError::UnknownOption(s.to_owned()))
    }
}
