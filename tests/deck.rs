//! Deck integration tests.

use std::collections::HashSet;

#[cfg(feature = "std")]
use deckrs::ClockShuffle;
use deckrs::{
    Card, DECK_SIZE, DeckBuilder, Decks, DefaultSort, Filter, Jokers, Less, ParseCardError, Rank,
    RankError, Shuffle, Sort, Suit, SuitError,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn is_sorted_by_absolute_rank(cards: &[Card]) -> bool {
    cards
        .windows(2)
        .all(|pair| pair[0].absolute_rank() <= pair[1].absolute_rank())
}

fn by_suit_only(cards: &[Card]) -> Less<'_> {
    Box::new(move |i, j| cards[i].suit() > cards[j].suit())
}

#[test]
fn new_without_options_is_canonical() {
    let cards = deckrs::new(&[]);
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards, deckrs::standard());

    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart] {
        for rank in Rank::ALL {
            assert!(unique.contains(&card(suit, rank)));
        }
    }

    assert_eq!(cards[0], card(Suit::Spade, Rank::Ace));
    assert_eq!(cards[12], card(Suit::Spade, Rank::King));
    assert_eq!(cards[13], card(Suit::Diamond, Rank::Ace));
    assert_eq!(cards[51], card(Suit::Heart, Rank::King));
    assert!(is_sorted_by_absolute_rank(&cards));
}

#[test]
fn jokers_are_appended_with_distinct_indices() {
    let cards = deckrs::new(&[&Jokers(3)]);
    assert_eq!(cards.len(), 55);
    assert_eq!(cards[..DECK_SIZE], deckrs::standard()[..]);

    for (i, joker) in cards[DECK_SIZE..].iter().enumerate() {
        assert_eq!(joker.suit(), Suit::Joker);
        assert_eq!(joker.rank(), None);
        assert_eq!(joker.joker_index(), Some(i as u8));
    }

    assert_eq!(deckrs::new(&[&Jokers(0)]).len(), DECK_SIZE);
}

#[test]
fn filter_removes_matching_cards_and_keeps_order() {
    let no_hearts = Filter::new(|card: &Card| card.suit() == Suit::Heart);
    let cards = deckrs::new(&[&no_hearts]);

    assert_eq!(cards.len(), 39);
    assert!(cards.iter().all(|card| card.suit() != Suit::Heart));
    assert_eq!(cards[..], deckrs::standard()[..39]);
}

#[test]
fn filter_can_remove_jokers() {
    let no_jokers = Filter::new(Card::is_joker);
    let cards = deckrs::new(&[&Jokers(4), &no_jokers]);
    assert_eq!(cards, deckrs::standard());
}

#[test]
fn decks_repeats_the_sequence() {
    let canonical = deckrs::standard();
    let cards = deckrs::new(&[&Decks(3)]);

    assert_eq!(cards.len(), 3 * DECK_SIZE);
    for copy in cards.chunks(DECK_SIZE) {
        assert_eq!(copy, canonical.as_slice());
    }

    assert!(deckrs::new(&[&Decks(0)]).is_empty());
    assert_eq!(deckrs::new(&[&Decks(1)]), canonical);
}

#[test]
fn shuffle_is_a_permutation() {
    let cards = deckrs::new(&[&Shuffle::new(1)]);
    assert_eq!(cards.len(), DECK_SIZE);
    assert_ne!(cards, deckrs::standard());

    let mut sorted = cards;
    sorted.sort_by(deckrs::compare);
    assert_eq!(sorted, deckrs::standard());
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let a = deckrs::new(&[&Shuffle::new(42)]);
    let b = deckrs::new(&[&Shuffle::new(42)]);
    let c = deckrs::new(&[&Shuffle::new(43)]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn shuffle_advances_between_applications() {
    let shuffle = Shuffle::new(5);
    let first = deckrs::new(&[&shuffle]);
    let second = deckrs::new(&[&shuffle]);
    assert_ne!(first, second);
}

#[test]
fn shuffle_accepts_injected_rng() {
    let a = deckrs::new(&[&Shuffle::from_rng(ChaCha8Rng::seed_from_u64(9))]);
    let b = deckrs::new(&[&Shuffle::new(9)]);
    assert_eq!(a, b);
}

#[test]
fn shuffle_generator_can_be_resumed() {
    let shuffle = Shuffle::new(4);
    let _ = deckrs::new(&[&shuffle]);
    let resumed = deckrs::new(&[&Shuffle::from_rng(shuffle.into_rng())]);

    let reference = Shuffle::new(4);
    let _ = deckrs::new(&[&reference]);
    let second = deckrs::new(&[&reference]);

    assert_eq!(resumed, second);
}

#[cfg(feature = "std")]
#[test]
fn clock_shuffle_is_a_permutation() {
    let first = deckrs::new(&[&ClockShuffle]);
    let second = deckrs::new(&[&ClockShuffle]);
    assert_ne!(first, second);

    let mut sorted = first;
    sorted.sort_by(deckrs::compare);
    assert_eq!(sorted, deckrs::standard());
}

#[test]
fn default_sort_restores_canonical_order() {
    let cards = deckrs::new(&[&Shuffle::new(3), &DefaultSort]);
    assert!(is_sorted_by_absolute_rank(&cards));
    assert_eq!(cards, deckrs::standard());
}

#[test]
fn default_sort_is_idempotent() {
    let once = deckrs::new(&[&Shuffle::new(11), &DefaultSort]);
    let twice = DeckBuilder::new()
        .with_shuffle(11)
        .with_default_sort()
        .with_default_sort()
        .build();
    assert_eq!(once, twice);
}

#[test]
fn default_sort_groups_repeated_decks() {
    let cards = deckrs::new(&[&Decks(2), &Shuffle::new(8), &DefaultSort]);
    assert_eq!(cards.len(), 2 * DECK_SIZE);
    assert!(is_sorted_by_absolute_rank(&cards));
    for pair in cards.chunks(2) {
        assert_eq!(pair[0], pair[1]);
    }
}

#[test]
fn sort_with_default_less_matches_default_sort() {
    let custom = deckrs::new(&[&Shuffle::new(21), &Sort::new(deckrs::less)]);
    let default = deckrs::new(&[&Shuffle::new(21), &DefaultSort]);
    assert_eq!(custom, default);
}

#[test]
fn sort_with_custom_less() {
    let cards = deckrs::new(&[&Sort::new(by_suit_only)]);
    let suits: Vec<Suit> = cards.iter().map(Card::suit).collect();

    assert_eq!(suits[..13], [Suit::Heart; 13]);
    assert_eq!(suits[13..26], [Suit::Club; 13]);
    assert_eq!(suits[26..39], [Suit::Diamond; 13]);
    assert_eq!(suits[39..], [Suit::Spade; 13]);
}

#[test]
fn closures_are_options() {
    let top_five = |cards: Vec<Card>| cards.into_iter().take(5).collect::<Vec<_>>();
    let cards = deckrs::new(&[&DefaultSort, &top_five]);
    assert_eq!(cards, deckrs::standard()[..5]);
}

#[test]
fn options_apply_in_order() {
    let jokers_then_decks = deckrs::new(&[&Jokers(1), &Decks(2)]);
    let decks_then_jokers = deckrs::new(&[&Decks(2), &Jokers(1)]);

    assert_eq!(jokers_then_decks.len(), 106);
    assert_eq!(decks_then_jokers.len(), 105);
    assert_eq!(jokers_then_decks[52], Card::joker(0));
    assert_eq!(jokers_then_decks[105], Card::joker(0));
    assert_eq!(decks_then_jokers[104], Card::joker(0));
}

#[test]
fn builder_matches_free_function() {
    let builder = DeckBuilder::new()
        .with_filter(|card| card.rank() == Some(Rank::Two))
        .with_jokers(2)
        .with_decks(2)
        .with_sort(by_suit_only);
    assert_eq!(builder.len(), 4);
    assert!(!builder.is_empty());

    let mut expected = deckrs::new(&[
        &Filter::new(|card: &Card| card.rank() == Some(Rank::Two)),
        &Jokers(2),
        &Decks(2),
        &Sort::new(by_suit_only),
    ]);
    let mut cards = builder.build();
    assert_eq!(cards.len(), 2 * (48 + 2));
    assert!(cards[..4].iter().all(Card::is_joker));
    assert!(cards.iter().all(|card| card.rank() != Some(Rank::Two)));

    cards.sort_by_key(|card| (card.suit(), card.joker_index(), card.rank()));
    expected.sort_by_key(|card| (card.suit(), card.joker_index(), card.rank()));
    assert_eq!(cards, expected);
}

#[test]
fn debug_output_hides_internals() {
    let builder = DeckBuilder::new().with_jokers(1).with_shuffle(2);
    assert_eq!(format!("{builder:?}"), "DeckBuilder { options: 2, .. }");
    assert_eq!(format!("{:?}", Shuffle::new(2)), "Shuffle { .. }");
}

#[test]
fn builder_shuffle_persists_between_builds() {
    let builder = DeckBuilder::new().with_shuffle(77);
    assert_ne!(builder.build(), builder.build());
    assert_eq!(DeckBuilder::new().build(), deckrs::standard());
    assert!(DeckBuilder::new().is_empty());
}

#[test]
fn card_rendering() {
    assert_eq!(card(Suit::Spade, Rank::Ace).to_string(), "Ace of Spades");
    assert_eq!(card(Suit::Heart, Rank::Queen).to_string(), "Queen of Hearts");
    assert_eq!(card(Suit::Diamond, Rank::Ten).to_string(), "Ten of Diamonds");
    assert_eq!(Card::joker(0).to_string(), "Joker");
    assert_eq!(Card::joker(7).to_string(), "Joker");
    assert_eq!(card(Suit::Joker, Rank::Five).to_string(), "Joker");
}

#[test]
fn card_parsing() {
    for card in deckrs::standard() {
        assert_eq!(card.to_string().parse::<Card>(), Ok(card));
    }
    assert_eq!("Joker".parse::<Card>(), Ok(Card::joker(0)));

    assert_eq!("Ace Spades".parse::<Card>(), Err(ParseCardError::Malformed));
    assert_eq!("Ace of Spade".parse::<Card>(), Err(ParseCardError::Malformed));
    assert_eq!("One of Spades".parse::<Card>(), Err(ParseCardError::UnknownRank));
    assert_eq!("Ace of Jokers".parse::<Card>(), Err(ParseCardError::UnknownSuit));
}

#[test]
fn absolute_rank_layout() {
    assert_eq!(card(Suit::Spade, Rank::Ace).absolute_rank(), 1);
    assert_eq!(card(Suit::Spade, Rank::King).absolute_rank(), 13);
    assert_eq!(card(Suit::Diamond, Rank::Ace).absolute_rank(), 14);
    assert_eq!(card(Suit::Heart, Rank::King).absolute_rank(), 52);
    assert_eq!(Card::joker(0).absolute_rank(), 52);
    assert_eq!(Card::joker(1).absolute_rank(), 53);
}

#[test]
fn conversions() {
    assert_eq!(Suit::try_from(0), Ok(Suit::Spade));
    assert_eq!(Suit::try_from(4), Ok(Suit::Joker));
    assert_eq!(Suit::try_from(5), Err(SuitError::InvalidSuit(5)));
    assert_eq!(Rank::try_from(1), Ok(Rank::Ace));
    assert_eq!(Rank::try_from(13), Ok(Rank::King));
    assert_eq!(Rank::try_from(0), Err(RankError::InvalidRank(0)));
    assert_eq!(Rank::try_from(14), Err(RankError::InvalidRank(14)));
    assert_eq!(Rank::Seven.value(), 7);
    assert_eq!(Suit::Club.index(), 2);
    assert_eq!(Suit::Heart.name(), "Heart");
    assert_eq!(RankError::InvalidRank(0).to_string(), "invalid rank value 0");
}
