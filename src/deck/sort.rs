//! Sort keys for ordering a deck.

use core::cmp::Ordering;
use core::str::FromStr;

use crate::card::Card;
use crate::error::ParseOptionError;

/// Primary key used when sorting a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Rank first, suit as tiebreak.
    Rank,
    /// Suit first, rank as tiebreak.
    Suit,
}

impl SortKey {
    /// Compares two cards under this key.
    #[must_use]
    pub fn compare(self, a: &Card, b: &Card) -> Ordering {
        match self {
            Self::Rank => a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit)),
            Self::Suit => a.suit.cmp(&b.suit).then(a.rank.cmp(&b.rank)),
        }
    }
}

/// Parses the sort sub-menu letters `R` and `S`.
impl FromStr for SortKey {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "R" => Ok(Self::Rank),
            "S" => Ok(Self::Suit),
            other => Err(ParseOptionError::UnknownSortKey(other.to_owned())),
        }
    }
}
