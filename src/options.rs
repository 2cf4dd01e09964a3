//! Deck options.
//!
//! An option is a transformation that receives the working card sequence and
//! returns its replacement. Options are applied in the order they are given,
//! so `Jokers` followed by `Shuffle` mixes the jokers in, while the reverse
//! leaves them at the bottom.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, compare};
use crate::sync::Mutex;

/// A transformation applied to a card sequence while building a deck.
///
/// Any `Fn(Vec<Card>) -> Vec<Card>` is an option:
///
/// ```
/// use deckrs::Card;
///
/// let reverse = |mut cards: Vec<Card>| {
///     cards.reverse();
///     cards
/// };
/// let cards = deckrs::new(&[&reverse]);
/// assert_eq!(cards[0].to_string(), "King of Hearts");
/// ```
pub trait DeckOption {
    /// Consumes the current sequence and returns the replacement.
    fn apply(&self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> DeckOption for F
where
    F: Fn(Vec<Card>) -> Vec<Card>,
{
    fn apply(&self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

/// Draws a permutation of positions and lays the cards out in that order.
fn permute<R: RngCore + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut order: Vec<usize> = (0..cards.len()).collect();
    order.shuffle(rng);
    order.into_iter().map(|i| cards[i]).collect()
}

/// Shuffles the cards with an owned random number generator.
///
/// The generator advances on every application, so applying the same
/// `Shuffle` twice gives two different orders, while two options built from
/// the same seed give identical ones.
///
/// ```
/// use deckrs::Shuffle;
///
/// let a = deckrs::new(&[&Shuffle::new(7)]);
/// let b = deckrs::new(&[&Shuffle::new(7)]);
/// assert_eq!(a, b);
/// ```
pub struct Shuffle<R = ChaCha8Rng> {
    rng: Mutex<R>,
}

impl Shuffle {
    /// Creates a shuffle seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Shuffle<R> {
    /// Creates a shuffle drawing from the given generator.
    #[must_use]
    pub const fn from_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Returns the generator in its current state.
    #[must_use]
    pub fn into_rng(self) -> R {
        self.rng.into_inner()
    }
}

impl<R> fmt::Debug for Shuffle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shuffle").finish_non_exhaustive()
    }
}

impl<R: RngCore> DeckOption for Shuffle<R> {
    fn apply(&self, cards: Vec<Card>) -> Vec<Card> {
        let mut rng = self.rng.lock();
        permute(&cards, &mut *rng)
    }
}

/// Shuffles the cards with a generator reseeded from the wall clock on
/// every application.
///
/// Orders are not reproducible; use [`Shuffle`] when they need to be.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockShuffle;

#[cfg(feature = "std")]
impl DeckOption for ClockShuffle {
    fn apply(&self, cards: Vec<Card>) -> Vec<Card> {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        permute(&cards, &mut ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Appends jokers to the end of the sequence.
///
/// The appended jokers are numbered 0, 1, 2, ... so that they stay
/// distinguishable from one another.
///
/// ```
/// use deckrs::{Card, Jokers};
///
/// let cards = deckrs::new(&[&Jokers(2)]);
/// assert_eq!(cards.len(), 54);
/// assert_eq!(cards[52..], [Card::joker(0), Card::joker(1)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jokers(pub u8);

impl DeckOption for Jokers {
    fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.reserve(self.0 as usize);
        cards.extend((0..self.0).map(Card::joker));
        cards
    }
}

/// Removes every card for which the predicate returns `true`.
///
/// Note the polarity: the predicate selects the cards to drop, not the ones
/// to keep. The remaining cards keep their relative order.
///
/// ```
/// use deckrs::{Card, Filter, Rank};
///
/// let no_aces = Filter::new(|card: &Card| card.rank() == Some(Rank::Ace));
/// let cards = deckrs::new(&[&no_aces]);
/// assert_eq!(cards.len(), 48);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Filter<F>(F);

impl<F> Filter<F>
where
    F: Fn(&Card) -> bool,
{
    /// Creates a filter dropping the cards matched by `remove`.
    #[must_use]
    pub const fn new(remove: F) -> Self {
        Self(remove)
    }
}

impl<F> DeckOption for Filter<F>
where
    F: Fn(&Card) -> bool,
{
    fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.retain(|card| !(self.0)(card));
        cards
    }
}

/// Repeats the whole sequence `n` times back to back.
///
/// `Decks(0)` empties the sequence and `Decks(1)` leaves it unchanged.
///
/// ```
/// use deckrs::Decks;
///
/// assert_eq!(deckrs::new(&[&Decks(3)]).len(), 156);
/// assert!(deckrs::new(&[&Decks(0)]).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decks(pub usize);

impl DeckOption for Decks {
    fn apply(&self, cards: Vec<Card>) -> Vec<Card> {
        cards.repeat(self.0)
    }
}

/// Sorts the sequence ascending by [`Card::absolute_rank`].
///
/// The sort is unstable: cards sharing a key may come out in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultSort;

impl DeckOption for DefaultSort {
    fn apply(&self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.sort_unstable_by(compare);
        cards
    }
}

/// A `less(i, j)` comparison over positions of a card sequence.
pub type Less<'a> = Box<dyn Fn(usize, usize) -> bool + 'a>;

/// Returns the default comparison over positions of `cards`: card `i`
/// sorts before card `j` when its absolute rank is lower.
///
/// ```
/// let cards = deckrs::standard();
/// let less = deckrs::less(&cards);
/// assert!(less(0, 51));
/// assert!(!less(51, 0));
/// ```
#[must_use]
pub fn less(cards: &[Card]) -> Less<'_> {
    Box::new(move |i, j| cards[i].absolute_rank() < cards[j].absolute_rank())
}

/// Sorts the sequence with a caller-supplied comparison.
///
/// The factory receives the sequence as handed to the option and returns a
/// `less(i, j)` over its positions. The sort is unstable.
///
/// ```
/// use deckrs::{Card, Less, Sort, Suit};
///
/// fn hearts_first(cards: &[Card]) -> Less<'_> {
///     Box::new(move |i, j| cards[i].suit() == Suit::Heart && cards[j].suit() != Suit::Heart)
/// }
///
/// let cards = deckrs::new(&[&Sort::new(hearts_first)]);
/// assert!(cards[..13].iter().all(|card| card.suit() == Suit::Heart));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sort<F>(F);

impl<F> Sort<F>
where
    F: for<'a> Fn(&'a [Card]) -> Less<'a>,
{
    /// Creates a sort using the comparisons produced by `less`.
    #[must_use]
    pub const fn new(less: F) -> Self {
        Self(less)
    }
}

impl<F> DeckOption for Sort<F>
where
    F: for<'a> Fn(&'a [Card]) -> Less<'a>,
{
    fn apply(&self, cards: Vec<Card>) -> Vec<Card> {
        let mut order: Vec<usize> = (0..cards.len()).collect();
        {
            let less = (self.0)(&cards);
            order.sort_unstable_by(|&i, &j| {
                if less(i, j) {
                    Ordering::Less
                } else if less(j, i) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            });
        }
        order.into_iter().map(|i| cards[i]).collect()
    }
}
