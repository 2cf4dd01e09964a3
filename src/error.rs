//! Error types for card conversions.

use thiserror::Error;

/// Errors that can occur when converting a number into a [`Suit`](crate::Suit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuitError {
    /// Value is not a suit index (0 to 4).
    #[error("invalid suit index {0}")]
    InvalidSuit(u8),
}

/// Errors that can occur when converting a number into a [`Rank`](crate::Rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// Value is not a playing rank (1 to 13).
    #[error("invalid rank value {0}")]
    InvalidRank(u8),
}

/// Errors that can occur when parsing a card label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Label is neither `"Joker"` nor of the form `"<Rank> of <Suit>s"`.
    #[error("malformed card label")]
    Malformed,
    /// Rank name is not recognized.
    #[error("unknown rank name")]
    UnknownRank,
    /// Suit name is not recognized.
    #[error("unknown suit name")]
    UnknownSuit,
}
