//! Error types for card, deck and dice operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while parsing a card code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCard {
    /// The code is not exactly two characters long.
    #[error("a card code must be exactly two characters")]
    WrongLength,
    /// The first character is not a known value code.
    #[error("invalid value for card: {0:?}")]
    UnknownValue(char),
    /// The second character is not a known suit code.
    #[error("invalid suit for card: {0:?}")]
    UnknownSuit(char),
}

/// Drawing more cards than the deck holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot draw {requested} card(s) from a deck with {remaining} left")]
pub struct EmptyDeckError {
    /// Number of cards asked for.
    pub requested: usize,
    /// Number of cards left in the deck.
    pub remaining: usize,
}

/// Errors that can occur while building a die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DieError {
    /// The die has fewer than two sides.
    #[error("a die must have at least 2 sides, got {0}")]
    TooFewSides(i32),
    /// The rigged factor is outside `0..=100`.
    #[error("rigged factor must be within 0..=100, got {0}")]
    RiggedFactorOutOfRange(i32),
}

/// Errors that can occur while parsing a dice expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// The expression has no terms at all.
    #[error("dice expression is empty")]
    EmptyExpression,
    /// Two `+` signs with nothing between them.
    #[error("dice expression contains an empty term")]
    EmptyTerm,
    /// A `d` term without a side count.
    #[error("cannot create a die with no value")]
    EmptyDie,
    /// A `0dS` term.
    #[error("a die term must roll at least one die")]
    NoDice,
    /// Selective notation on a single die.
    #[error("selective notation needs more than one die")]
    SelectiveSingleDie,
    /// Selective notation attached to a flat bonus.
    #[error("selective notation cannot be applied to a bonus")]
    SelectiveBonus,
    /// The keep count is zero or larger than the pool.
    #[error("cannot keep {select} of {pool} dice")]
    SelectCount {
        /// Requested keep count.
        select: usize,
        /// Number of dice in the pool.
        pool: usize,
    },
    /// A single term asks for more dice than one expression may hold.
    #[error("cannot roll {count} dice in one term, the limit is {max}")]
    TooManyDice {
        /// Requested number of dice.
        count: u32,
        /// Largest accepted number of dice.
        max: u32,
    },
    /// The lowest or highest total of the expression does not fit in an `i32`.
    #[error("dice expression totals do not fit in a 32-bit integer")]
    Overflow,
    /// A numeric component could not be parsed.
    #[error("invalid number in dice expression: {0:?}")]
    InvalidNumber(String),
    /// A die could not be built.
    #[error(transparent)]
    Die(#[from] DieError),
}
