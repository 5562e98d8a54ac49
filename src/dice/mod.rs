//! Dice notation expressions.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::DiceError;

pub mod die;
mod parse;
pub mod selective;

pub use die::{Die, DieKind, RiggedDie};
pub use selective::{Keep, SelectiveDice, SelectiveRoll};

/// Largest number of dice a single `NdS` term may roll.
pub const MAX_DICE: u32 = 10_000;

/// A single term of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// One fair or rigged die.
    Die(DieKind),
    /// A keep-highest or keep-lowest pool.
    Selective(SelectiveDice),
}

impl Term {
    /// Returns the highest value the term can produce.
    #[must_use]
    pub const fn max(&self) -> i32 {
        match self {
            Self::Die(die) => die.max(),
            Self::Selective(pool) => pool.max(),
        }
    }

    /// Returns the lowest value the term can produce.
    #[must_use]
    pub const fn min(&self) -> i32 {
        match self {
            Self::Die(die) => die.min(),
            Self::Selective(pool) => pool.min(),
        }
    }

    /// Returns the number of times the term has been rolled.
    #[must_use]
    pub const fn rolls(&self) -> u64 {
        match self {
            Self::Die(die) => die.rolls(),
            Self::Selective(pool) => pool.rolls(),
        }
    }

    fn roll(&mut self, rng: &mut ChaCha8Rng) -> TermRoll {
        match self {
            Self::Die(die) => TermRoll::Die(die.roll(rng)),
            Self::Selective(pool) => TermRoll::Selective(pool.roll(rng)),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Die(die) => fmt::Display::fmt(die, f),
            Self::Selective(pool) => fmt::Display::fmt(pool, f),
        }
    }
}

/// Result of rolling a single term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermRoll {
    /// A single die roll.
    Die(i32),
    /// A selective pool roll.
    Selective(SelectiveRoll),
}

impl TermRoll {
    /// Returns the value the term contributes to the total.
    #[must_use]
    pub const fn value(&self) -> i32 {
        match self {
            Self::Die(value) => *value,
            Self::Selective(roll) => roll.total,
        }
    }
}

/// Result of rolling a whole expression, term by term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    /// Sum of every term and bonus.
    pub total: i32,
    /// Per-term results, in expression order.
    pub terms: Vec<TermRoll>,
    /// Sum of the flat bonuses.
    pub bonus: i32,
}

/// A parsed dice expression such as `2d6+3` or `4d6k3h`.
///
/// ```
/// use gamble::Dice;
///
/// let mut dice = Dice::parse_seeded("d20+8", None, 7).unwrap();
/// assert_eq!((dice.min(), dice.max()), (9, 28));
/// let total = dice.roll();
/// assert!((9..=28).contains(&total));
/// ```
#[derive(Debug, Clone)]
pub struct Dice {
    /// Normalized notation the expression was parsed from.
    notation: String,
    terms: Vec<Term>,
    bonuses: Vec<i32>,
    /// Sum of the bonuses.
    bonus: i32,
    /// Lowest and highest totals, checked to fit in an `i32` at parse time.
    min: i32,
    max: i32,
    rigged_factor: Option<u8>,
    /// Number of times the expression has been rolled.
    rolls: u64,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Dice {
    /// Parses an expression, seeding the dice from the operating system.
    ///
    /// When `rigged_factor` is given, every die in the expression is rigged
    /// with that factor.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression is malformed, a die cannot be built,
    /// a term rolls more than [`MAX_DICE`] dice, or the totals do not fit in
    /// an `i32`.
    #[cfg(feature = "std")]
    pub fn parse(expr: &str, rigged_factor: Option<u8>) -> Result<Self, DiceError> {
        Self::build(expr, rigged_factor, ChaCha8Rng::from_os_rng())
    }

    /// Parses an expression with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression is malformed, a die cannot be built,
    /// a term rolls more than [`MAX_DICE`] dice, or the totals do not fit in
    /// an `i32`.
    pub fn parse_seeded(
        expr: &str,
        rigged_factor: Option<u8>,
        seed: u64,
    ) -> Result<Self, DiceError> {
        Self::build(expr, rigged_factor, ChaCha8Rng::seed_from_u64(seed))
    }

    fn build(expr: &str, rigged_factor: Option<u8>, rng: ChaCha8Rng) -> Result<Self, DiceError> {
        let parsed = parse::parse(expr, rigged_factor)?;
        Ok(Self {
            notation: parsed.notation,
            terms: parsed.terms,
            bonuses: parsed.bonuses,
            bonus: parsed.bonus,
            min: parsed.min,
            max: parsed.max,
            rigged_factor,
            rolls: 0,
            rng,
        })
    }

    /// Returns the dice terms, in expression order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the flat bonuses, in expression order.
    #[must_use]
    pub fn bonuses(&self) -> &[i32] {
        &self.bonuses
    }

    /// Returns the terms and the bonuses.
    #[must_use]
    pub fn parts(&self) -> (&[Term], &[i32]) {
        (&self.terms, &self.bonuses)
    }

    /// Returns the rigged factor applied to every die, if any.
    #[must_use]
    pub const fn rigged_factor(&self) -> Option<u8> {
        self.rigged_factor
    }

    /// Returns the number of times the expression has been rolled.
    #[must_use]
    pub const fn rolls(&self) -> u64 {
        self.rolls
    }

    /// Returns the highest total the expression can produce.
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Returns the lowest total the expression can produce.
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Rolls every term and adds the bonuses.
    pub fn roll(&mut self) -> i32 {
        self.roll_detailed().total
    }

    /// Rolls every term and returns the per-term breakdown.
    pub fn roll_detailed(&mut self) -> DiceRoll {
        let terms: Vec<TermRoll> = self
            .terms
            .iter_mut()
            .map(|term| term.roll(&mut self.rng))
            .collect();
        let bonus = self.bonus;
        let total = terms.iter().map(TermRoll::value).sum::<i32>() + bonus;
        self.rolls += 1;
        log::trace!("rolled {} = {total}", self.notation);

        DiceRoll {
            total,
            terms,
            bonus,
        }
    }

    /// Rolls the expression `times` times.
    pub fn roll_many(&mut self, times: usize) -> Vec<i32> {
        (0..times).map(|_| self.roll()).collect()
    }

    /// Rolls `times` times and returns the best total together with every roll.
    ///
    /// Returns `None` when `times` is zero.
    pub fn max_of(&mut self, times: usize) -> Option<(i32, Vec<i32>)> {
        let rolls = self.roll_many(times);
        let best = rolls.iter().copied().max()?;
        Some((best, rolls))
    }

    /// Rolls `times` times and returns the worst total together with every roll.
    ///
    /// Returns `None` when `times` is zero.
    pub fn min_of(&mut self, times: usize) -> Option<(i32, Vec<i32>)> {
        let rolls = self.roll_many(times);
        let worst = rolls.iter().copied().min()?;
        Some((worst, rolls))
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}
