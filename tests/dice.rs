//! Dice and dice expression integration tests.

use gamble::{
    Dice, DiceError, Die, DieError, DieKind, Keep, MAX_DICE, RiggedDie, SelectiveDice, SharedDice,
    Term, TermRoll,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2024)
}

#[test]
fn die_bounds_and_validation() {
    let die = Die::default();
    assert_eq!((die.sides(), die.min(), die.max()), (6, 1, 6));
    assert_eq!(die.to_string(), "d6");

    let negative = Die::new(-8).unwrap();
    assert!(negative.is_negative());
    assert_eq!((negative.min(), negative.max()), (-8, -1));
    assert_eq!(negative.net_sides(), -8);
    assert_eq!(negative.to_string(), "-d8");

    assert_eq!(Die::new(1).unwrap_err(), DieError::TooFewSides(1));
    assert_eq!(Die::new(0).unwrap_err(), DieError::TooFewSides(0));
    assert_eq!(Die::new(-1).unwrap_err(), DieError::TooFewSides(-1));
    assert_eq!(
        Die::new(i32::MIN).unwrap_err(),
        DieError::TooFewSides(i32::MIN)
    );
}

#[test]
fn dice_order_by_signed_sides() {
    let d4 = Die::new(4).unwrap();
    let d6 = Die::new(6).unwrap();
    let minus_d6 = Die::new(-6).unwrap();

    assert!(d4 < d6);
    assert!(d6 > d4);
    assert!(minus_d6 < d4);
    assert!(d4 <= Die::new(4).unwrap());

    let mut rolled = Die::new(4).unwrap();
    rolled.roll(&mut rng());
    assert_ne!(d4, rolled);
    assert_eq!(d4.partial_cmp(&rolled), None);
    assert!(rolled < d6);
}

#[test]
fn die_rolls_stay_in_range_and_are_counted() {
    let mut rng = rng();
    let mut die = Die::new(20).unwrap();
    let mut negative = Die::new(-4).unwrap();
    for _ in 0..1_000 {
        assert!((1..=20).contains(&die.roll(&mut rng)));
        assert!((-4..=-1).contains(&negative.roll(&mut rng)));
    }
    assert_eq!(die.rolls(), 1_000);
    assert_eq!(negative.rolls(), 1_000);
}

#[test]
fn rigged_die_validation() {
    assert_eq!(
        RiggedDie::new(6, 101).unwrap_err(),
        DieError::RiggedFactorOutOfRange(101)
    );
    assert_eq!(
        RiggedDie::new(6, -1).unwrap_err(),
        DieError::RiggedFactorOutOfRange(-1)
    );
    assert_eq!(RiggedDie::new(1, 50).unwrap_err(), DieError::TooFewSides(1));
    assert!(RiggedDie::new(6, 0).is_ok());
    assert!(RiggedDie::new(6, 100).is_ok());
}

#[test]
fn fully_rigged_die_rolls_top_three_faces() {
    let mut rng = rng();
    let mut die = RiggedDie::new(20, 100).unwrap();
    for _ in 0..1_000 {
        assert!(die.roll(&mut rng) >= 18);
    }
    assert_eq!(die.die().rolls(), 1_000);

    let mut coin = RiggedDie::new(2, 100).unwrap();
    for _ in 0..100 {
        assert!((1..=2).contains(&coin.roll(&mut rng)));
    }
}

#[test]
fn rigged_die_counts_fair_fallback_once() {
    let mut rng = rng();
    let mut die = RiggedDie::new(6, 0).unwrap();
    for _ in 0..500 {
        assert!((1..=6).contains(&die.roll(&mut rng)));
    }
    assert_eq!(die.die().rolls(), 500);
}

#[test]
fn selective_pool_keeps_best_rolls() {
    let mut rng = rng();
    let dice = (0..4)
        .map(|_| DieKind::build(6, None))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let mut pool = SelectiveDice::new(dice, 3, Keep::High).unwrap();
    assert_eq!((pool.min(), pool.max()), (3, 18));
    assert_eq!(pool.to_string(), "4d6k3h");

    for _ in 0..1_000 {
        let roll = pool.roll(&mut rng);
        let mut sorted = roll.rolls.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(roll.rolls.len(), 4);
        assert_eq!(roll.total, sorted[..3].iter().sum::<i32>());
        assert_eq!(roll.kept, sorted[..3]);
    }
    assert_eq!(pool.rolls(), 1_000);
    assert!(pool.dice().iter().all(|die| die.rolls() == 1_000));
}

#[test]
fn selective_pool_keeps_worst_rolls() {
    let mut rng = rng();
    let dice = vec![
        DieKind::build(20, None).unwrap(),
        DieKind::build(20, None).unwrap(),
    ];
    let mut pool = SelectiveDice::new(dice, 1, Keep::Low).unwrap();
    for _ in 0..200 {
        let roll = pool.roll(&mut rng);
        assert_eq!(roll.total, *roll.rolls.iter().min().unwrap());
    }
}

#[test]
fn selective_pool_validation() {
    let one = vec![DieKind::build(6, None).unwrap()];
    assert_eq!(
        SelectiveDice::new(one, 1, Keep::High).unwrap_err(),
        DiceError::SelectiveSingleDie
    );

    let two = vec![
        DieKind::build(6, None).unwrap(),
        DieKind::build(6, None).unwrap(),
    ];
    assert_eq!(
        SelectiveDice::new(two.clone(), 0, Keep::High).unwrap_err(),
        DiceError::SelectCount { select: 0, pool: 2 }
    );
    assert_eq!(
        SelectiveDice::new(two, 3, Keep::Low).unwrap_err(),
        DiceError::SelectCount { select: 3, pool: 2 }
    );

    let huge = vec![
        DieKind::build(i32::MAX, None).unwrap(),
        DieKind::build(i32::MAX, None).unwrap(),
    ];
    assert_eq!(
        SelectiveDice::new(huge.clone(), 2, Keep::High).unwrap_err(),
        DiceError::Overflow
    );
    let pool = SelectiveDice::new(huge, 1, Keep::High).unwrap();
    assert_eq!((pool.min(), pool.max()), (1, i32::MAX));
}

#[test]
fn two_d_six_bounds_and_rolls() {
    let mut dice = Dice::parse_seeded("2d6", None, 1).unwrap();
    assert_eq!(dice.min(), 2);
    assert_eq!(dice.max(), 12);
    for total in dice.roll_many(10_000) {
        assert!((2..=12).contains(&total));
    }
    assert_eq!(dice.rolls(), 10_000);
    assert!(dice.terms().iter().all(|term| term.rolls() == 10_000));
}

#[test]
fn bounds_include_bonuses_and_negative_dice() {
    let dice = Dice::parse_seeded("d20+8", None, 1).unwrap();
    assert_eq!((dice.min(), dice.max()), (9, 28));
    assert_eq!(dice.bonuses(), [8]);

    let dice = Dice::parse_seeded("3d6 - d4 - 2", None, 1).unwrap();
    assert_eq!((dice.min(), dice.max()), (3 - 4 - 2, 18 - 1 - 2));
    assert_eq!(dice.to_string(), "3d6-d4-2");

    let dice = Dice::parse_seeded("4d6k3h + 1", None, 1).unwrap();
    assert_eq!((dice.min(), dice.max()), (4, 19));

    let dice = Dice::parse_seeded("2d20k1l", None, 1).unwrap();
    assert_eq!((dice.min(), dice.max()), (1, 20));
}

#[test]
fn rolls_respect_structural_bounds() {
    for expr in ["d20+8", "3d6-d4-2", "4d6k3h+1", "2d20k1l", "-2d6k1", "10"] {
        let mut dice = Dice::parse_seeded(expr, None, 3).unwrap();
        let (min, max) = (dice.min(), dice.max());
        for total in dice.roll_many(2_000) {
            assert!((min..=max).contains(&total), "{expr}: {total}");
        }
    }
}

#[test]
fn flat_expression_always_rolls_its_bonus() {
    let mut dice = Dice::parse_seeded("10 - 3", None, 1).unwrap();
    assert!(dice.terms().is_empty());
    assert_eq!(dice.roll(), 7);
}

#[test]
fn parse_failures() {
    assert_eq!(Dice::parse_seeded("d", None, 1).unwrap_err(), DiceError::EmptyDie);
    assert_eq!(
        Dice::parse_seeded("1d1", None, 1).unwrap_err(),
        DiceError::Die(DieError::TooFewSides(1))
    );
    assert_eq!(
        Dice::parse_seeded("d6k1", None, 1).unwrap_err(),
        DiceError::SelectiveSingleDie
    );
    assert_eq!(
        Dice::parse_seeded("2d6+4k1", None, 1).unwrap_err(),
        DiceError::SelectiveBonus
    );
    assert_eq!(
        Dice::parse_seeded("2d6+four", None, 1).unwrap_err(),
        DiceError::InvalidNumber("four".into())
    );
    assert_eq!(
        Dice::parse_seeded("2d6", Some(101), 1).unwrap_err(),
        DiceError::Die(DieError::RiggedFactorOutOfRange(101))
    );
}

#[test]
fn oversized_expressions_fail_to_parse() {
    for expr in ["2d2147483647", "2147483647+1", "-2147483648 - 1", "3d2147483647k2l"] {
        assert_eq!(
            Dice::parse_seeded(expr, None, 1).unwrap_err(),
            DiceError::Overflow,
            "{expr}"
        );
    }
    assert_eq!(
        Dice::parse_seeded("1000000000d6", None, 1).unwrap_err(),
        DiceError::TooManyDice {
            count: 1_000_000_000,
            max: MAX_DICE,
        }
    );
    assert_eq!(
        Dice::parse_seeded("20000d6k3", Some(50), 1).unwrap_err(),
        DiceError::TooManyDice {
            count: 20_000,
            max: MAX_DICE,
        }
    );
}

#[test]
fn extreme_but_fitting_expressions_roll() {
    for expr in ["d2147483647", "2147483647 - d6", "d2147483647 - d2147483647", "-2147483648"] {
        let mut dice = Dice::parse_seeded(expr, None, 4).unwrap();
        let (min, max) = (dice.min(), dice.max());
        for total in dice.roll_many(200) {
            assert!((min..=max).contains(&total), "{expr}: {total}");
        }
    }
}

#[test]
fn rigged_factor_rigs_every_die() {
    let mut dice = Dice::parse_seeded("3d10 + 4d6k2", Some(100), 11).unwrap();
    assert_eq!(dice.rigged_factor(), Some(100));
    let (terms, bonuses) = dice.parts();
    assert!(bonuses.is_empty());
    for term in terms {
        match term {
            Term::Die(die) => assert!(matches!(die, DieKind::Rigged(_))),
            Term::Selective(pool) => {
                assert!(pool.dice().iter().all(|die| matches!(die, DieKind::Rigged(_))));
            }
        }
    }

    for _ in 0..500 {
        let roll = dice.roll_detailed();
        for term in &roll.terms {
            match term {
                TermRoll::Die(value) => assert!(*value >= 8),
                TermRoll::Selective(pool) => {
                    assert!(pool.rolls.iter().all(|value| *value >= 4));
                }
            }
        }
        assert_eq!(
            roll.total,
            roll.terms.iter().map(TermRoll::value).sum::<i32>() + roll.bonus
        );
    }
}

#[test]
fn max_of_and_min_of() {
    let mut dice = Dice::parse_seeded("d20", None, 5).unwrap();
    let (best, rolls) = dice.max_of(10).unwrap();
    assert_eq!(rolls.len(), 10);
    assert_eq!(best, *rolls.iter().max().unwrap());

    let (worst, rolls) = dice.min_of(10).unwrap();
    assert_eq!(worst, *rolls.iter().min().unwrap());
    assert_eq!(dice.rolls(), 20);

    assert_eq!(dice.max_of(0), None);
    assert_eq!(dice.min_of(0), None);
}

#[test]
fn seeded_expressions_repeat() {
    let mut a = Dice::parse_seeded("4d6k3", None, 99).unwrap();
    let mut b = Dice::parse_seeded("4d6k3", None, 99).unwrap();
    assert_eq!(a.roll_many(50), b.roll_many(50));
}

#[test]
fn entropy_seeded_parse() {
    let mut dice = Dice::parse("2D6 + 3", None).unwrap();
    assert_eq!((dice.min(), dice.max()), (5, 15));
    assert!((5..=15).contains(&dice.roll()));
}

#[test]
fn shared_dice_rolls_from_many_threads() {
    let shared = SharedDice::new(Dice::parse_seeded("d6", None, 8).unwrap());
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for total in shared.roll_many(25) {
                    assert!((1..=6).contains(&total));
                }
            });
        }
    });
    assert_eq!(shared.rolls(), 100);
    assert_eq!(shared.with(|dice| dice.max()), 6);
}
