//! Poker hand representation and ranking.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, ValueCatalog};
use crate::error::InvalidCard;

/// Poker hand category, from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// No other category matches.
    HighCard = 0,
    /// Two cards of one rank.
    Pair = 1,
    /// Two different pairs.
    TwoPair = 2,
    /// Three cards of one rank.
    ThreeOfAKind = 3,
    /// Consecutive ranks.
    Straight = 4,
    /// All cards of one suit.
    Flush = 5,
    /// Three of a kind plus a pair.
    FullHouse = 6,
    /// Four cards of one rank.
    FourOfAKind = 7,
    /// Straight and flush, other than the royal flush.
    StraightFlush = 8,
    /// Ten through ace, all of one suit.
    RoyalFlush = 9,
}

impl HandRank {
    /// Numeric tier (0 = high card, 9 = royal flush).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "high card",
            Self::Pair => "pair",
            Self::TwoPair => "two pair",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
            Self::RoyalFlush => "royal flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed hand of cards, sorted by rank.
///
/// Rank and suit counts are computed once when the hand is built.
/// Hands compare by [`HandRank`] only: two different hands in the same
/// category are neither less nor greater than each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards sorted by ascending rank.
    cards: Vec<Card>,
    /// Rank -> number of cards with that rank.
    value_counts: HashMap<u8, usize>,
    /// Suit ordinal -> number of cards with that suit.
    suit_counts: HashMap<u8, usize>,
}

impl Hand {
    /// Creates a hand from the given cards.
    #[must_use]
    pub fn new(mut cards: Vec<Card>) -> Self {
        cards.sort_by_key(|card| card.value.rank);

        let mut value_counts = HashMap::new();
        let mut suit_counts = HashMap::new();
        for card in &cards {
            *value_counts.entry(card.value.rank).or_insert(0) += 1;
            *suit_counts.entry(card.suit.ordinal).or_insert(0) += 1;
        }

        Self {
            cards,
            value_counts,
            suit_counts,
        }
    }

    /// Parses a comma separated list of card codes, e.g. `"2c, 3c, 4c, 5c, Kh"`.
    ///
    /// ```
    /// use gamble::{Hand, HandRank};
    ///
    /// let hand = Hand::parse("As,Ts,Js,Qs,Ks").unwrap();
    /// assert_eq!(hand.rank(), HandRank::RoyalFlush);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if any card code is invalid.
    pub fn parse(text: &str) -> Result<Self, InvalidCard> {
        Self::parse_in(text, ValueCatalog::Standard)
    }

    /// Parses a hand using the given value catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if any card code is invalid.
    pub fn parse_in(text: &str, catalog: ValueCatalog) -> Result<Self, InvalidCard> {
        let compact: alloc::string::String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let cards = compact
            .split(',')
            .map(|code| Card::parse_in(code, catalog))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(cards))
    }

    /// Returns the cards, sorted by ascending rank.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many cards of the given rank the hand holds.
    #[must_use]
    pub fn count_of_rank(&self, rank: u8) -> usize {
        self.value_counts.get(&rank).copied().unwrap_or(0)
    }

    /// Returns how many distinct suits the hand holds.
    #[must_use]
    pub fn distinct_suits(&self) -> usize {
        self.suit_counts.len()
    }

    /// Multiplicities of each rank, largest first.
    fn counts(&self) -> Vec<usize> {
        let mut counts: Vec<usize> = self.value_counts.values().copied().collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts
    }

    fn top_count(&self) -> usize {
        self.counts().first().copied().unwrap_or(0)
    }

    fn top_two_counts(&self, first: usize, second: usize) -> bool {
        self.counts().get(..2) == Some(&[first, second][..])
    }

    /// Calculates the category of the hand; the first match from the top wins.
    #[must_use]
    pub fn rank(&self) -> HandRank {
        if self.is_royal_flush() {
            HandRank::RoyalFlush
        } else if self.is_straight_flush() {
            HandRank::StraightFlush
        } else if self.is_four_of_a_kind() {
            HandRank::FourOfAKind
        } else if self.is_full_house() {
            HandRank::FullHouse
        } else if self.is_flush() {
            HandRank::Flush
        } else if self.is_straight() {
            HandRank::Straight
        } else if self.is_three_of_a_kind() {
            HandRank::ThreeOfAKind
        } else if self.is_two_pair() {
            HandRank::TwoPair
        } else if self.is_one_pair() {
            HandRank::Pair
        } else {
            HandRank::HighCard
        }
    }

    /// Returns whether the hand is an ace-high straight flush.
    #[must_use]
    pub fn is_royal_flush(&self) -> bool {
        self.is_flush()
            && self.is_straight()
            && self.cards.first().is_some_and(|card| card.value.is_ace())
            && self.cards.last().is_some_and(|card| card.value.is_king())
    }

    /// Returns whether the hand is a straight flush other than a royal flush.
    #[must_use]
    pub fn is_straight_flush(&self) -> bool {
        self.is_flush() && self.is_straight() && !self.is_royal_flush()
    }

    /// Returns whether the hand holds four cards of one rank.
    #[must_use]
    pub fn is_four_of_a_kind(&self) -> bool {
        self.top_count() == 4
    }

    /// Returns whether the hand is three of a kind plus a pair.
    #[must_use]
    pub fn is_full_house(&self) -> bool {
        self.top_two_counts(3, 2)
    }

    /// Returns whether every card shares one suit.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        self.distinct_suits() == 1
    }

    /// Returns whether the ranks form a run, with the ace either low or high.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        let size = self.cards.len();
        let is_run = |mut ranks: Vec<u8>| {
            ranks.sort_unstable();
            ranks.dedup();
            match (ranks.first(), ranks.last()) {
                (Some(low), Some(high)) => {
                    ranks.len() == size && usize::from(high - low) == size - 1
                }
                _ => false,
            }
        };

        let low_ace: Vec<u8> = self.cards.iter().map(|card| card.value.rank).collect();
        let high_ace: Vec<u8> = self
            .cards
            .iter()
            .map(|card| if card.value.is_ace() { 14 } else { card.value.rank })
            .collect();
        is_run(low_ace) || is_run(high_ace)
    }

    /// Returns whether the hand holds three cards of one rank.
    #[must_use]
    pub fn is_three_of_a_kind(&self) -> bool {
        self.top_count() == 3
    }

    /// Returns whether the hand holds two different pairs.
    #[must_use]
    pub fn is_two_pair(&self) -> bool {
        self.top_two_counts(2, 2)
    }

    /// Returns whether the hand holds a pair.
    #[must_use]
    pub fn is_one_pair(&self) -> bool {
        self.top_count() == 2
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.rank().cmp(&other.rank()) {
            Ordering::Equal => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
