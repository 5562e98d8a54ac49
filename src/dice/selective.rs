//! Keep-highest / keep-lowest dice pools.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use super::die::DieKind;
use crate::error::DiceError;

/// Which end of a sorted pool is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Keep {
    /// Keep the highest rolls.
    #[default]
    High,
    /// Keep the lowest rolls.
    Low,
}

/// Result of rolling a [`SelectiveDice`] pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectiveRoll {
    /// Sum of the kept rolls.
    pub total: i32,
    /// Every individual roll, in pool order.
    pub rolls: Vec<i32>,
    /// The kept rolls, best first.
    pub kept: Vec<i32>,
}

/// A pool of dice of which only the best or worst `select` are summed,
/// e.g. "roll 4d6, keep the highest 3".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectiveDice {
    dice: Vec<DieKind>,
    select: usize,
    keep: Keep,
    /// Lowest and highest kept sums.
    min: i32,
    max: i32,
    rolls: u64,
}

impl SelectiveDice {
    /// Creates a pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool has fewer than two dice, if `select` is
    /// zero or larger than the pool, or if the kept sums do not fit in an
    /// `i32`.
    pub fn new(dice: Vec<DieKind>, select: usize, keep: Keep) -> Result<Self, DiceError> {
        if dice.len() < 2 {
            return Err(DiceError::SelectiveSingleDie);
        }
        if select == 0 || select > dice.len() {
            return Err(DiceError::SelectCount {
                select,
                pool: dice.len(),
            });
        }
        let min = kept_sum(keep, select, dice.iter().map(DieKind::min).collect())
            .ok_or(DiceError::Overflow)?;
        let max = kept_sum(keep, select, dice.iter().map(DieKind::max).collect())
            .ok_or(DiceError::Overflow)?;
        Ok(Self {
            dice,
            select,
            keep,
            min,
            max,
            rolls: 0,
        })
    }

    /// Returns the dice in the pool.
    #[must_use]
    pub fn dice(&self) -> &[DieKind] {
        &self.dice
    }

    /// Returns how many rolls are kept.
    #[must_use]
    pub const fn select(&self) -> usize {
        self.select
    }

    /// Returns which end of the pool is kept.
    #[must_use]
    pub const fn keep(&self) -> Keep {
        self.keep
    }

    /// Returns the number of times the pool has been rolled.
    #[must_use]
    pub const fn rolls(&self) -> u64 {
        self.rolls
    }

    /// Returns the highest total the pool can produce.
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Returns the lowest total the pool can produce.
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Rolls every die and sums the kept results.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SelectiveRoll {
        let rolls: Vec<i32> = self.dice.iter_mut().map(|die| die.roll(rng)).collect();
        let mut kept = rolls.clone();
        order(self.keep, &mut kept);
        kept.truncate(self.select);
        self.rolls += 1;

        SelectiveRoll {
            total: kept.iter().sum(),
            rolls,
            kept,
        }
    }
}

/// Sorts values so the kept ones come first.
fn order(keep: Keep, values: &mut [i32]) {
    match keep {
        Keep::High => values.sort_unstable_by(|a, b| b.cmp(a)),
        Keep::Low => values.sort_unstable(),
    }
}

/// Sums the `select` kept values, or `None` if any partial sum overflows.
///
/// Every partial sum of a roll's kept values lies between the matching
/// partial sums of the per-die minimums and maximums, so a pool whose bounds
/// pass this check can never overflow while rolling.
fn kept_sum(keep: Keep, select: usize, mut values: Vec<i32>) -> Option<i32> {
    order(keep, &mut values);
    values
        .iter()
        .take(select)
        .try_fold(0_i32, |sum, value| sum.checked_add(*value))
}

impl fmt::Display for SelectiveDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.keep {
            Keep::High => 'h',
            Keep::Low => 'l',
        };
        let sign = match self.dice.first() {
            Some(die) if die.die().is_negative() => "-",
            _ => "",
        };
        let sides = self.dice.first().map_or(0, |die| die.die().sides());
        write!(f, "{sign}{}d{sides}k{}{suffix}", self.dice.len(), self.select)
    }
}
