//! Playing cards, poker hand ranking and dice notation, with optional
//! `no_std` support.
//!
//! The crate provides a [`Deck`] of [`Card`]s that deals [`Hand`]s ranked
//! into ten poker categories, and a [`Dice`] expression type that parses
//! notation such as `2d6+3` or `4d6k3h`. Every source of randomness is a
//! seedable generator owned by the deck or expression.
//!
//! # Example
//!
//! ```
//! use gamble::{Deck, DeckOptions, Dice};
//!
//! let mut deck = Deck::new(DeckOptions::default(), 42);
//! let hand = deck.draw_hand(5).unwrap();
//! let _ = hand.rank();
//!
//! let mut dice = Dice::parse_seeded("2d6+3", None, 42).unwrap();
//! assert!((5..=15).contains(&dice.roll()));
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
pub mod dice;
pub mod error;
pub mod hand;
pub mod options;
pub mod shared;
mod sync;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Suit, Value, ValueCatalog};
pub use deck::Deck;
pub use dice::{
    Dice, DiceRoll, Die, DieKind, Keep, MAX_DICE, RiggedDie, SelectiveDice, SelectiveRoll, Term,
    TermRoll,
};
pub use error::{DiceError, DieError, EmptyDeckError, InvalidCard};
pub use hand::{Hand, HandRank};
pub use options::{DeckKind, DeckOptions};
pub use shared::{SharedDeck, SharedDice};
