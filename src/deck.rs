//! Deck construction.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::options::{DeckOption, DefaultSort, Decks, Filter, Jokers, Less, Shuffle, Sort};

/// Returns the canonical 52-card deck.
///
/// Suits come in the order Spade, Diamond, Club, Heart, and within each suit
/// ranks run from Ace to King.
#[must_use]
pub fn standard() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Builds a deck from the canonical 52 cards, applying `options` in order.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Filter, Jokers, Suit};
///
/// let no_hearts = Filter::new(|card: &Card| card.suit() == Suit::Heart);
/// let cards = deckrs::new(&[&no_hearts, &Jokers(2)]);
/// assert_eq!(cards.len(), 41);
/// ```
#[must_use]
pub fn new(options: &[&dyn DeckOption]) -> Vec<Card> {
    apply_all(options.iter().copied())
}

/// Threads the canonical deck through `options` in order.
fn apply_all<'a, O>(options: impl IntoIterator<Item = &'a O>) -> Vec<Card>
where
    O: DeckOption + ?Sized + 'a,
{
    let mut applied = 0;
    let cards = options.into_iter().fold(standard(), |cards, option| {
        let before = cards.len();
        let cards = option.apply(cards);
        log::trace!("option {applied}: {before} -> {} cards", cards.len());
        applied += 1;
        cards
    });
    log::debug!("built deck of {} cards with {applied} options", cards.len());
    cards
}

/// Reusable deck recipe.
///
/// Options are recorded with the `with_*` methods and applied in insertion
/// order every time [`build`](Self::build) is called:
///
/// ```
/// use deckrs::DeckBuilder;
///
/// let builder = DeckBuilder::new()
///     .with_decks(2)
///     .with_jokers(4)
///     .with_shuffle(42);
/// let cards = builder.build();
/// assert_eq!(cards.len(), 108);
/// ```
#[derive(Default)]
pub struct DeckBuilder {
    options: Vec<Box<dyn DeckOption>>,
}

impl DeckBuilder {
    /// Creates a builder with no options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an arbitrary option.
    ///
    /// ```
    /// use deckrs::{Card, DeckBuilder};
    ///
    /// let cards = DeckBuilder::new()
    ///     .with_option(|cards: Vec<Card>| cards.into_iter().take(5).collect::<Vec<_>>())
    ///     .build();
    /// assert_eq!(cards.len(), 5);
    /// ```
    #[must_use]
    pub fn with_option(mut self, option: impl DeckOption + 'static) -> Self {
        self.options.push(Box::new(option));
        self
    }

    /// Adds a [`Shuffle`] seeded with `seed`.
    ///
    /// The generator persists across builds, so successive builds give
    /// different orders.
    #[must_use]
    pub fn with_shuffle(self, seed: u64) -> Self {
        self.with_option(Shuffle::new(seed))
    }

    /// Adds a [`ClockShuffle`](crate::ClockShuffle).
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn with_clock_shuffle(self) -> Self {
        self.with_option(crate::options::ClockShuffle)
    }

    /// Adds `n` jokers.
    #[must_use]
    pub fn with_jokers(self, n: u8) -> Self {
        self.with_option(Jokers(n))
    }

    /// Removes the cards for which `remove` returns `true`.
    ///
    /// ```
    /// use deckrs::{DeckBuilder, Suit};
    ///
    /// let cards = DeckBuilder::new()
    ///     .with_filter(|card| card.suit() == Suit::Club)
    ///     .build();
    /// assert_eq!(cards.len(), 39);
    /// ```
    #[must_use]
    pub fn with_filter(self, remove: impl Fn(&Card) -> bool + 'static) -> Self {
        self.with_option(Filter::new(remove))
    }

    /// Repeats the sequence `n` times.
    #[must_use]
    pub fn with_decks(self, n: usize) -> Self {
        self.with_option(Decks(n))
    }

    /// Sorts by absolute rank.
    #[must_use]
    pub fn with_default_sort(self) -> Self {
        self.with_option(DefaultSort)
    }

    /// Sorts with a caller-supplied comparison factory.
    #[must_use]
    pub fn with_sort<F>(self, less: F) -> Self
    where
        F: for<'a> Fn(&'a [Card]) -> Less<'a> + 'static,
    {
        self.with_option(Sort::new(less))
    }

    /// Returns the number of recorded options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns whether no options have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Builds a deck, applying the recorded options to the canonical cards.
    #[must_use]
    pub fn build(&self) -> Vec<Card> {
        apply_all(self.options.iter().map(|option| &**option))
    }
}

impl fmt::Debug for DeckBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckBuilder")
            .field("options", &self.options.len())
            .finish_non_exhaustive()
    }
}
