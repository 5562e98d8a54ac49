//! Single fair and rigged dice.

use core::cmp::Ordering;
use core::fmt;

use rand::Rng;

use crate::error::DieError;

/// A single fair die.
///
/// A die built from a non-positive side count is negative: it rolls
/// `-sides..=-1` instead of `1..=sides`.
///
/// Dice are ordered by their signed side count. Two dice with the same side
/// count but different roll counters are not comparable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    /// Absolute number of sides, always at least 2.
    sides: i32,
    /// Whether rolls are reported as negative values.
    negative: bool,
    /// Number of times the die has been rolled.
    rolls: u64,
}

impl Die {
    /// Creates a die with the given number of sides.
    ///
    /// # Errors
    ///
    /// Returns an error if `abs(sides) < 2`.
    pub fn new(sides: i32) -> Result<Self, DieError> {
        match sides.checked_abs() {
            Some(abs) if abs >= 2 => Ok(Self {
                sides: abs,
                negative: sides <= 0,
                rolls: 0,
            }),
            _ => Err(DieError::TooFewSides(sides)),
        }
    }

    /// Returns the absolute number of sides.
    #[must_use]
    pub const fn sides(&self) -> i32 {
        self.sides
    }

    /// Returns whether the die rolls negative values.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns -1 for negative dice and 1 otherwise.
    #[must_use]
    pub const fn multiplier(&self) -> i32 {
        if self.negative { -1 } else { 1 }
    }

    /// Returns the signed number of sides.
    #[must_use]
    pub const fn net_sides(&self) -> i32 {
        self.sides * self.multiplier()
    }

    /// Returns the highest value the die can roll.
    #[must_use]
    pub const fn max(&self) -> i32 {
        if self.negative { -1 } else { self.sides }
    }

    /// Returns the lowest value the die can roll.
    #[must_use]
    pub const fn min(&self) -> i32 {
        if self.negative { -self.sides } else { 1 }
    }

    /// Returns the number of times the die has been rolled.
    #[must_use]
    pub const fn rolls(&self) -> u64 {
        self.rolls
    }

    /// Rolls the die.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> i32 {
        let face = rng.random_range(1..=self.sides);
        self.rolls += 1;
        face * self.multiplier()
    }
}

impl Default for Die {
    fn default() -> Self {
        Self {
            sides: 6,
            negative: false,
            rolls: 0,
        }
    }
}

impl PartialOrd for Die {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.net_sides().cmp(&other.net_sides()) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(f, "{sign}d{}", self.sides)
    }
}

/// A die biased toward its three highest faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiggedDie {
    die: Die,
    /// Chance, in percent, of landing on one of the top faces.
    rigged_factor: u8,
}

impl RiggedDie {
    /// Creates a rigged die.
    ///
    /// # Errors
    ///
    /// Returns an error if `rigged_factor` is outside `0..=100` or the die
    /// would have fewer than two sides.
    pub fn new(sides: i32, rigged_factor: i32) -> Result<Self, DieError> {
        let rigged_factor = u8::try_from(rigged_factor)
            .ok()
            .filter(|factor| *factor <= 100)
            .ok_or(DieError::RiggedFactorOutOfRange(rigged_factor))?;
        Ok(Self {
            die: Die::new(sides)?,
            rigged_factor,
        })
    }

    /// Returns the underlying die.
    #[must_use]
    pub const fn die(&self) -> &Die {
        &self.die
    }

    /// Returns the rigged factor.
    #[must_use]
    pub const fn rigged_factor(&self) -> u8 {
        self.rigged_factor
    }

    /// Rolls the die.
    ///
    /// With probability `rigged_factor / 100` the result is one of the three
    /// highest faces, otherwise it is a fair roll.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> i32 {
        let chance: u8 = rng.random_range(0..=100);
        if chance > self.rigged_factor {
            return self.die.roll(rng);
        }

        let sides = self.die.sides;
        let face = rng.random_range((sides - 2).max(1)..=sides);
        self.die.rolls += 1;
        face * self.die.multiplier()
    }
}

impl fmt::Display for RiggedDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (rigged {}%)", self.die, self.rigged_factor)
    }
}

/// Either kind of single die.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DieKind {
    /// A fair die.
    Fair(Die),
    /// A rigged die.
    Rigged(RiggedDie),
}

impl DieKind {
    /// Builds a fair die, or a rigged one when a factor is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the die cannot be built.
    pub fn build(sides: i32, rigged_factor: Option<u8>) -> Result<Self, DieError> {
        match rigged_factor {
            Some(factor) => RiggedDie::new(sides, i32::from(factor)).map(Self::Rigged),
            None => Die::new(sides).map(Self::Fair),
        }
    }

    /// Returns the underlying die.
    #[must_use]
    pub const fn die(&self) -> &Die {
        match self {
            Self::Fair(die) => die,
            Self::Rigged(rigged) => rigged.die(),
        }
    }

    /// Returns the highest value the die can roll.
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.die().max()
    }

    /// Returns the lowest value the die can roll.
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.die().min()
    }

    /// Returns the number of times the die has been rolled.
    #[must_use]
    pub const fn rolls(&self) -> u64 {
        self.die().rolls()
    }

    /// Rolls the die.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> i32 {
        match self {
            Self::Fair(die) => die.roll(rng),
            Self::Rigged(rigged) => rigged.roll(rng),
        }
    }
}

impl fmt::Display for DieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fair(die) => fmt::Display::fmt(die, f),
            Self::Rigged(rigged) => fmt::Display::fmt(rigged, f),
        }
    }
}
