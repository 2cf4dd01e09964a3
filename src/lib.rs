//! Composable playing card decks with optional `no_std` support.
//!
//! A deck starts as the canonical 52 cards and is threaded through a list of
//! options, each of which returns a new sequence: shuffling, adding jokers,
//! filtering, repeating, or sorting.
//!
//! # Example
//!
//! ```
//! use deckrs::{Card, DefaultSort, Filter, Jokers, Rank, Shuffle, Suit};
//!
//! let face_cards = Filter::new(|card: &Card| card.rank() >= Some(Rank::Jack));
//! let cards = deckrs::new(&[&face_cards, &Jokers(2), &Shuffle::new(42), &DefaultSort]);
//!
//! assert_eq!(cards.len(), 42);
//! assert_eq!(cards[0], Card::new(Suit::Spade, Rank::Ace));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS_PER_SUIT, Rank, Suit, compare};
pub use deck::{DeckBuilder, new, standard};
pub use error::{ParseCardError, RankError, SuitError};
#[cfg(feature = "std")]
pub use options::ClockShuffle;
pub use options::{DeckOption, Decks, DefaultSort, Filter, Jokers, Less, Shuffle, Sort, less};
