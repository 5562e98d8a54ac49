//! Dice notation parser.
//!
//! An expression is a `+` separated list of terms. Each term is a flat bonus
//! (`3`), a group of dice (`2d6`, `d20`, `-d4`) or a selective pool
//! (`4d6k3h`, `2d20k1l`). Subtraction is addition of a negative term.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::die::DieKind;
use super::{MAX_DICE, Term};
use super::selective::{Keep, SelectiveDice};
use crate::error::DiceError;

/// Terms and flat bonuses of a parsed expression.
pub(crate) struct Parsed {
    pub(crate) notation: String,
    pub(crate) terms: Vec<Term>,
    pub(crate) bonuses: Vec<i32>,
    /// Sum of the bonuses.
    pub(crate) bonus: i32,
    pub(crate) min: i32,
    pub(crate) max: i32,
}

/// Lowercases the expression and strips all whitespace.
fn normalize(expr: &str) -> String {
    expr.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Adds up values, failing if any partial sum leaves the `i32` range.
fn checked_sum(values: impl IntoIterator<Item = i32>) -> Result<i32, DiceError> {
    values
        .into_iter()
        .try_fold(0_i32, i32::checked_add)
        .ok_or(DiceError::Overflow)
}

fn number<T: core::str::FromStr>(text: &str) -> Result<T, DiceError> {
    text.parse()
        .map_err(|_| DiceError::InvalidNumber(text.to_string()))
}

pub(crate) fn parse(expr: &str, rigged_factor: Option<u8>) -> Result<Parsed, DiceError> {
    let notation = normalize(expr);
    if notation.is_empty() {
        return Err(DiceError::EmptyExpression);
    }

    let mut terms: Vec<Term> = Vec::new();
    let mut bonuses: Vec<i32> = Vec::new();
    let split = notation.replace('-', "+-");
    for (i, piece) in split.split('+').enumerate() {
        if piece.is_empty() {
            // A leading sign leaves an empty first piece.
            if i == 0 {
                continue;
            }
            return Err(DiceError::EmptyTerm);
        }
        match piece.split_once('d') {
            Some((count, rest)) => terms.extend(parse_dice(count, rest, rigged_factor)?),
            None if piece.contains('k') => return Err(DiceError::SelectiveBonus),
            None => bonuses.push(number(piece)?),
        }
    }

    if terms.is_empty() && bonuses.is_empty() {
        return Err(DiceError::EmptyExpression);
    }

    // Rolls are summed term by term in this order, and each partial sum of a
    // roll lies between the matching partial sums of these bounds.
    let bonus = checked_sum(bonuses.iter().copied())?;
    let min = checked_sum(terms.iter().map(Term::min))?
        .checked_add(bonus)
        .ok_or(DiceError::Overflow)?;
    let max = checked_sum(terms.iter().map(Term::max))?
        .checked_add(bonus)
        .ok_or(DiceError::Overflow)?;

    log::debug!(
        "parsed dice expression {notation:?}: {} term(s), {} bonus(es)",
        terms.len(),
        bonuses.len()
    );
    Ok(Parsed {
        notation,
        terms,
        bonuses,
        bonus,
        min,
        max,
    })
}

/// Parses the parts of an `NdS[kM[h|l]]` term around the `d`.
fn parse_dice(
    count: &str,
    rest: &str,
    rigged_factor: Option<u8>,
) -> Result<Vec<Term>, DiceError> {
    let (sides, selection) = match rest.split_once('k') {
        Some((sides, selection)) => (sides, Some(selection)),
        None => (rest, None),
    };
    if sides.is_empty() {
        return Err(DiceError::EmptyDie);
    }
    let sides: i32 = number(sides)?;

    let count: i32 = match count {
        "" => 1,
        "-" => -1,
        count => number(count)?,
    };
    if count == 0 {
        return Err(DiceError::NoDice);
    }
    if count.unsigned_abs() > MAX_DICE {
        return Err(DiceError::TooManyDice {
            count: count.unsigned_abs(),
            max: MAX_DICE,
        });
    }

    // Every `-` is a term separator, so `sides` is never negative here.
    let sides = sides * count.signum();
    let dice = (0..count.unsigned_abs())
        .map(|_| DieKind::build(sides, rigged_factor))
        .collect::<Result<Vec<_>, _>>()?;

    let Some(selection) = selection else {
        return Ok(dice.into_iter().map(Term::Die).collect());
    };

    let (select, keep) = if let Some(select) = selection.strip_suffix('h') {
        (select, Keep::High)
    } else if let Some(select) = selection.strip_suffix('l') {
        (select, Keep::Low)
    } else {
        (selection, Keep::High)
    };
    let select: usize = number(select)?;
    let pool = SelectiveDice::new(dice, select, keep)?;
    Ok(alloc::vec![Term::Selective(pool)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(expr: &str) -> DiceError {
        match parse(expr, None) {
            Ok(_) => panic!("{expr:?} should not parse"),
            Err(err) => err,
        }
    }

    #[test]
    fn subtraction_becomes_negative_terms() {
        let parsed = parse("2d6 - 1d4 - 2", None).unwrap();
        assert_eq!(parsed.notation, "2d6-1d4-2");
        assert_eq!(parsed.bonuses, [-2]);
        assert_eq!(parsed.terms.len(), 3);
        assert!(matches!(&parsed.terms[0], Term::Die(die) if !die.die().is_negative()));
        assert!(matches!(&parsed.terms[2], Term::Die(die) if die.die().is_negative()));
    }

    #[test]
    fn leading_sign_is_accepted() {
        let parsed = parse("-d6+3", None).unwrap();
        assert_eq!(parsed.bonuses, [3]);
        assert!(matches!(&parsed.terms[0], Term::Die(die) if die.min() == -6));
    }

    #[test]
    fn malformed_terms() {
        assert_eq!(err(""), DiceError::EmptyExpression);
        assert_eq!(err("   "), DiceError::EmptyExpression);
        assert_eq!(err("d"), DiceError::EmptyDie);
        assert_eq!(err("2d"), DiceError::EmptyDie);
        assert_eq!(err("0d6"), DiceError::NoDice);
        assert_eq!(err("2d6++3"), DiceError::EmptyTerm);
        assert_eq!(err("d6k1"), DiceError::SelectiveSingleDie);
        assert_eq!(err("3k2"), DiceError::SelectiveBonus);
        assert_eq!(err("2d6d4"), DiceError::InvalidNumber("6d4".into()));
        assert_eq!(err("xd6"), DiceError::InvalidNumber("x".into()));
        assert_eq!(err("4d6k5"), DiceError::SelectCount { select: 5, pool: 4 });
    }

    #[test]
    fn bounds_that_leave_i32_are_rejected() {
        assert_eq!(err("2d2147483647"), DiceError::Overflow);
        assert_eq!(err("2147483647+1"), DiceError::Overflow);
        assert_eq!(err("-2147483648-1"), DiceError::Overflow);
        assert_eq!(err("d2147483647-d2147483647-d2147483647"), DiceError::Overflow);
        assert_eq!(err("2d2147483647k2"), DiceError::Overflow);

        let parsed = parse("d2147483647 - d2147483647", None).unwrap();
        assert_eq!((parsed.min, parsed.max), (1 - i32::MAX, i32::MAX - 1));
        let parsed = parse("2147483647 - d6", None).unwrap();
        assert_eq!(
            (parsed.bonus, parsed.min, parsed.max),
            (i32::MAX, i32::MAX - 6, i32::MAX - 1)
        );
    }

    #[test]
    fn die_count_is_capped_before_building() {
        assert_eq!(
            err("1000000000d6"),
            DiceError::TooManyDice {
                count: 1_000_000_000,
                max: MAX_DICE,
            }
        );
        assert_eq!(
            err("-2147483648d6"),
            DiceError::TooManyDice {
                count: 2_147_483_648,
                max: MAX_DICE,
            }
        );
        let parsed = parse(&alloc::format!("{MAX_DICE}d6"), None).unwrap();
        assert_eq!(parsed.terms.len(), usize::try_from(MAX_DICE).unwrap());
    }

    #[test]
    fn keep_suffix_defaults_to_high() {
        let parsed = parse("4D6K3", None).unwrap();
        match &parsed.terms[0] {
            Term::Selective(pool) => {
                assert_eq!(pool.keep(), Keep::High);
                assert_eq!(pool.select(), 3);
                assert_eq!(pool.dice().len(), 4);
            }
            _ => panic!("expected a selective term"),
        }
    }
}
