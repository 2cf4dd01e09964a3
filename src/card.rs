//! Card types, display names, and ordering keys.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::{ParseCardError, RankError, SuitError};

/// Card suit.
///
/// Suits are ordered by declaration, which is also the order used when
/// building and sorting a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Jokers. Not a playing suit.
    Joker,
}

impl Suit {
    /// Every suit, jokers included.
    pub const ALL: [Self; 5] = [
        Self::Spade,
        Self::Diamond,
        Self::Club,
        Self::Heart,
        Self::Joker,
    ];

    /// The four playing suits in canonical deck order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Returns the display name of the suit, e.g. `"Spade"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }

    /// Returns the position of the suit in declaration order (Spade = 0).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Suit {
    type Error = SuitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(SuitError::InvalidSuit(value))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Playing rank, numbered 1 (Ace) to 13 (King).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// Every rank from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the display name of the rank, e.g. `"Queen"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Returns the numeric value of the rank (Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=13 => Ok(Self::ALL[value as usize - 1]),
            _ => Err(RankError::InvalidRank(value)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of cards per deck, jokers excluded.
pub const DECK_SIZE: usize = 52;

/// Number of ranks in each playing suit.
pub const RANKS_PER_SUIT: usize = 13;

/// A playing card or a joker.
///
/// Cards are plain values: two cards with the same suit and rank are
/// indistinguishable. Jokers carry a distinguishing index in place of a
/// rank, which is never reported as a [`Rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a card of the given suit and rank.
    ///
    /// Passing [`Suit::Joker`] yields a joker whose index is the rank value.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Suit::Spade, Rank::Ace);
    /// assert_eq!(card.to_string(), "Ace of Spades");
    /// ```
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank: rank.value(),
        }
    }

    /// Creates a joker with the given distinguishing index.
    ///
    /// ```
    /// use deckrs::{Card, Suit};
    ///
    /// let joker = Card::joker(2);
    /// assert_eq!(joker.suit(), Suit::Joker);
    /// assert_eq!(joker.rank(), None);
    /// assert_eq!(joker.joker_index(), Some(2));
    /// ```
    #[must_use]
    pub const fn joker(index: u8) -> Self {
        Self {
            suit: Suit::Joker,
            rank: index,
        }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the playing rank, or `None` for jokers.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        if self.is_joker() {
            return None;
        }
        Rank::try_from(self.rank).ok()
    }

    /// Returns the joker index, or `None` for playing cards.
    #[must_use]
    pub const fn joker_index(&self) -> Option<u8> {
        if self.is_joker() {
            Some(self.rank)
        } else {
            None
        }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Returns the default sort key: `suit index * 13 + rank value`.
    ///
    /// For jokers the rank part is the joker index, so a joker's key can
    /// collide with a heart's (Joker 0 and the King of Hearts are both 52).
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Spade, Rank::Ace).absolute_rank(), 1);
    /// assert_eq!(Card::new(Suit::Diamond, Rank::Two).absolute_rank(), 15);
    /// ```
    #[must_use]
    pub const fn absolute_rank(&self) -> u16 {
        self.suit.index() as u16 * RANKS_PER_SUIT as u16 + self.rank as u16
    }
}

/// Compares two cards by [`Card::absolute_rank`].
///
/// Cards with equal keys compare as [`Ordering::Equal`] even when they are
/// not equal values (a joker and a heart may share a key).
#[must_use]
pub fn compare(a: &Card, b: &Card) -> Ordering {
    a.absolute_rank().cmp(&b.absolute_rank())
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            Some(rank) => write!(f, "{rank} of {}s", self.suit),
            None => write!(f, "{}", self.suit),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a rendered label back into a card.
    ///
    /// `"Joker"` parses to `Card::joker(0)`; the joker index is not part of
    /// the label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == Suit::Joker.name() {
            return Ok(Self::joker(0));
        }

        let (rank, suit) = s.split_once(" of ").ok_or(ParseCardError::Malformed)?;
        let suit = suit.strip_suffix('s').ok_or(ParseCardError::Malformed)?;

        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.name() == rank)
            .ok_or(ParseCardError::UnknownRank)?;
        let suit = Suit::STANDARD
            .into_iter()
            .find(|s| s.name() == suit)
            .ok_or(ParseCardError::UnknownSuit)?;

        Ok(Self::new(suit, rank))
    }
}
