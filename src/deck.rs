//! Deck of cards with seeded shuffling.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, canonical_cards};
use crate::error::EmptyDeckError;
use crate::hand::Hand;
use crate::options::{DeckKind, DeckOptions};

/// An ordered stack of cards. The top of the deck is the end of the list.
///
/// The deck only ever shrinks; refilling it is up to the caller.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in the deck; the last one is on top.
    cards: Vec<Card>,
    /// Deck options.
    options: DeckOptions,
    /// Number of cards drawn so far.
    draws: usize,
    /// Number of shuffle passes so far.
    shuffles: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a new deck from the options with the given seed.
    ///
    /// Before any shuffle, the ace of spades is on top.
    ///
    /// # Example
    ///
    /// ```
    /// use gamble::{Deck, DeckOptions};
    ///
    /// let mut deck = Deck::new(DeckOptions::default().with_shuffle(false), 42);
    /// assert_eq!(deck.cards_left(), 52);
    /// assert_eq!(deck.draw_one().unwrap().full_name(), "ace of spades");
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        Self::build(Self::create_cards(&options), options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new deck from the options, seeded from the operating system.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_entropy(options: DeckOptions) -> Self {
        Self::build(Self::create_cards(&options), options, ChaCha8Rng::from_os_rng())
    }

    /// Creates a deck holding exactly the given cards (the last one on top).
    ///
    /// The `decks`, `kind` and `catalog` options are ignored.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, options: DeckOptions, seed: u64) -> Self {
        Self::build(cards, options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a shuffled euchre deck (nine through ace of every suit).
    #[must_use]
    pub fn euchre(seed: u64) -> Self {
        Self::new(DeckOptions::default().with_kind(DeckKind::Euchre), seed)
    }

    /// Creates a shuffled shoe of `decks` standard decks.
    #[must_use]
    pub fn shoe(decks: u8, seed: u64) -> Self {
        Self::new(DeckOptions::default().with_decks(decks), seed)
    }

    fn build(cards: Vec<Card>, options: DeckOptions, rng: ChaCha8Rng) -> Self {
        log::debug!(
            "building deck of {} cards ({:?}, {} deck(s))",
            cards.len(),
            options.kind,
            options.decks
        );
        let mut deck = Self {
            cards,
            options,
            draws: 0,
            shuffles: 0,
            rng,
        };
        if options.shuffle {
            deck.shuffle(1);
        }
        deck
    }

    /// Creates the unshuffled cards for the options, ace of spades last.
    fn create_cards(options: &DeckOptions) -> Vec<Card> {
        let mut single: Vec<Card> = canonical_cards(options.catalog)
            .into_iter()
            .filter(|card| match options.kind {
                DeckKind::Standard => true,
                DeckKind::Euchre => card.value.ordinal >= 9 || card.value.is_ace(),
            })
            .collect();
        single.reverse();

        let mut cards = Vec::with_capacity(usize::from(options.decks) * DECK_SIZE);
        for _ in 0..options.decks {
            cards.extend_from_slice(&single);
        }
        cards
    }

    /// Returns the options this deck was built with.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card on top of the deck.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the card at the bottom of the deck.
    #[must_use]
    pub fn bottom(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns whether the deck still holds the given card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards drawn so far.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    /// Returns the number of shuffle passes so far.
    #[must_use]
    pub const fn shuffles(&self) -> usize {
        self.shuffles
    }

    /// Draws the default number of cards.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer cards remain than requested.
    pub fn draw(&mut self) -> Result<Vec<Card>, EmptyDeckError> {
        self.draw_many(self.options.default_draw_count)
    }

    /// Draws a single card from the top.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw_one(&mut self) -> Result<Card, EmptyDeckError> {
        let card = self.cards.pop().ok_or(EmptyDeckError {
            requested: 1,
            remaining: 0,
        })?;
        self.draws += 1;
        log::trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Draws `times` cards from the top, in draw order.
    ///
    /// Nothing is drawn if fewer than `times` cards remain.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer cards remain than requested.
    pub fn draw_many(&mut self, times: usize) -> Result<Vec<Card>, EmptyDeckError> {
        let remaining = self.cards.len();
        if times > remaining {
            return Err(EmptyDeckError {
                requested: times,
                remaining,
            });
        }

        let mut drawn = self.cards.split_off(remaining - times);
        drawn.reverse();
        self.draws += times;
        log::trace!("drew {times} card(s), {} left", self.cards.len());
        Ok(drawn)
    }

    /// Draws `size` cards and builds a hand from them.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer cards remain than requested.
    pub fn draw_hand(&mut self, size: usize) -> Result<Hand, EmptyDeckError> {
        self.draw_many(size).map(Hand::new)
    }

    /// Shuffles the deck `times` times.
    pub fn shuffle(&mut self, times: usize) {
        for _ in 0..times {
            self.cards.shuffle(&mut self.rng);
            self.shuffles += 1;
        }
        log::debug!("shuffled deck {times} time(s), {} total", self.shuffles);
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck[{}]", self.cards.len())
    }
}
