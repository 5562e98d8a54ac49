//! Lock-guarded wrappers for sharing a deck or dice expression between threads.
//!
//! [`Deck`] and [`Dice`] mutate their cards, counters and generator on every
//! call, so concurrent callers must go through one of these.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::dice::Dice;
use crate::error::EmptyDeckError;
use crate::hand::Hand;
use crate::sync::Mutex;

/// A deck behind a mutex.
pub struct SharedDeck {
    deck: Mutex<Deck>,
}

impl SharedDeck {
    /// Wraps a deck.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Draws a single card from the top.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw_one(&self) -> Result<Card, EmptyDeckError> {
        self.deck.lock().draw_one()
    }

    /// Draws `times` cards from the top.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer cards remain than requested.
    pub fn draw_many(&self, times: usize) -> Result<Vec<Card>, EmptyDeckError> {
        self.deck.lock().draw_many(times)
    }

    /// Draws a hand of `size` cards.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer cards remain than requested.
    pub fn draw_hand(&self, size: usize) -> Result<Hand, EmptyDeckError> {
        self.deck.lock().draw_hand(size)
    }

    /// Shuffles the deck `times` times.
    pub fn shuffle(&self, times: usize) {
        self.deck.lock().shuffle(times);
    }

    /// Returns the number of cards remaining.
    pub fn cards_left(&self) -> usize {
        self.deck.lock().cards_left()
    }

    /// Runs `f` with exclusive access to the deck.
    pub fn with<T>(&self, f: impl FnOnce(&mut Deck) -> T) -> T {
        f(&mut self.deck.lock())
    }

    /// Unwraps the deck.
    pub fn into_inner(self) -> Deck {
        self.deck.into_inner()
    }
}

/// A dice expression behind a mutex.
pub struct SharedDice {
    dice: Mutex<Dice>,
}

impl SharedDice {
    /// Wraps a dice expression.
    #[must_use]
    pub const fn new(dice: Dice) -> Self {
        Self {
            dice: Mutex::new(dice),
        }
    }

    /// Rolls the expression.
    pub fn roll(&self) -> i32 {
        self.dice.lock().roll()
    }

    /// Rolls the expression `times` times.
    pub fn roll_many(&self, times: usize) -> Vec<i32> {
        self.dice.lock().roll_many(times)
    }

    /// Returns the number of times the expression has been rolled.
    pub fn rolls(&self) -> u64 {
        self.dice.lock().rolls()
    }

    /// Runs `f` with exclusive access to the expression.
    pub fn with<T>(&self, f: impl FnOnce(&mut Dice) -> T) -> T {
        f(&mut self.dice.lock())
    }

    /// Unwraps the expression.
    pub fn into_inner(self) -> Dice {
        self.dice.into_inner()
    }
}
