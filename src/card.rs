//! Card types and the suit/value catalogs.

use core::cmp::Ordering;
use core::fmt;

use crate::error::InvalidCard;

/// Card colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Spades and clubs.
    Black,
    /// Diamonds and hearts.
    Red,
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Suit {
    /// Lowercase suit name.
    pub name: &'static str,
    /// Single character code used when parsing.
    pub code: char,
    /// Display glyph.
    pub symbol: char,
    /// Position of the suit in the catalog (0..=3).
    pub ordinal: u8,
    /// Suit colour.
    pub color: Color,
    /// Code point just before the suit's ace in the Unicode playing card block.
    pub unicode_base: u32,
}

impl Suit {
    /// Spades.
    pub const SPADES: Self = Self {
        name: "spades",
        code: 'S',
        symbol: '♠',
        ordinal: 0,
        color: Color::Black,
        unicode_base: 0x1F0A0,
    };
    /// Clubs.
    pub const CLUBS: Self = Self {
        name: "clubs",
        code: 'C',
        symbol: '♣',
        ordinal: 1,
        color: Color::Black,
        unicode_base: 0x1F0D0,
    };
    /// Diamonds.
    pub const DIAMONDS: Self = Self {
        name: "diamonds",
        code: 'D',
        symbol: '♦',
        ordinal: 2,
        color: Color::Red,
        unicode_base: 0x1F0C0,
    };
    /// Hearts.
    pub const HEARTS: Self = Self {
        name: "hearts",
        code: 'H',
        symbol: '♥',
        ordinal: 3,
        color: Color::Red,
        unicode_base: 0x1F0B0,
    };

    /// All suits, sorted by ordinal.
    #[must_use]
    pub const fn all() -> &'static [Self; 4] {
        &SUITS
    }

    /// Looks up a suit by its code, ignoring case, or by its display glyph.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let upper = code.to_ascii_uppercase();
        SUITS
            .iter()
            .copied()
            .find(|suit| suit.code == upper || suit.symbol == code)
    }
}

const SUITS: [Suit; 4] = [Suit::SPADES, Suit::CLUBS, Suit::DIAMONDS, Suit::HEARTS];

/// Card value (rank) entry of a [`ValueCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Value {
    /// Single character code used when parsing.
    pub code: char,
    /// Lowercase value name.
    pub name: &'static str,
    /// Numeric rank used for ordering and hand math (ace = 1).
    pub rank: u8,
    /// Face position 1..=13 (ace through king), independent of the catalog.
    pub ordinal: u8,
}

impl Value {
    const fn new(code: char, name: &'static str, rank: u8, ordinal: u8) -> Self {
        Self {
            code,
            name,
            rank,
            ordinal,
        }
    }

    /// Returns whether this value is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.ordinal == 1
    }

    /// Returns whether this value is a king.
    #[must_use]
    pub const fn is_king(&self) -> bool {
        self.ordinal == 13
    }
}

const STANDARD_VALUES: [Value; 13] = [
    Value::new('A', "ace", 1, 1),
    Value::new('2', "two", 2, 2),
    Value::new('3', "three", 3, 3),
    Value::new('4', "four", 4, 4),
    Value::new('5', "five", 5, 5),
    Value::new('6', "six", 6, 6),
    Value::new('7', "seven", 7, 7),
    Value::new('8', "eight", 8, 8),
    Value::new('9', "nine", 9, 9),
    Value::new('T', "ten", 10, 10),
    Value::new('J', "jack", 11, 11),
    Value::new('Q', "queen", 12, 12),
    Value::new('K', "king", 13, 13),
];

const BLACKJACK_VALUES: [Value; 13] = [
    Value::new('A', "ace", 1, 1),
    Value::new('2', "two", 2, 2),
    Value::new('3', "three", 3, 3),
    Value::new('4', "four", 4, 4),
    Value::new('5', "five", 5, 5),
    Value::new('6', "six", 6, 6),
    Value::new('7', "seven", 7, 7),
    Value::new('8', "eight", 8, 8),
    Value::new('9', "nine", 9, 9),
    Value::new('T', "ten", 10, 10),
    Value::new('J', "jack", 10, 11),
    Value::new('Q', "queen", 10, 12),
    Value::new('K', "king", 10, 13),
];

/// Which table of card values to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueCatalog {
    /// General poker values, ace = 1 through king = 13.
    #[default]
    Standard,
    /// Blackjack values, ace = 1 and every face card = 10.
    BlackJack,
}

impl ValueCatalog {
    /// All values of the catalog in face order (ace first).
    #[must_use]
    pub const fn values(self) -> &'static [Value; 13] {
        match self {
            Self::Standard => &STANDARD_VALUES,
            Self::BlackJack => &BLACKJACK_VALUES,
        }
    }

    /// Looks up a value by its code, ignoring case.
    #[must_use]
    pub fn value_for_code(self, code: char) -> Option<Value> {
        let code = code.to_ascii_uppercase();
        self.values().iter().copied().find(|value| value.code == code)
    }

    /// Looks up a value by face ordinal (1 = ace, 13 = king).
    #[must_use]
    pub fn value_for_ordinal(self, ordinal: u8) -> Option<Value> {
        self.values().get(usize::from(ordinal).checked_sub(1)?).copied()
    }
}

/// A playing card.
///
/// Two cards are equal when both value and suit match. Ordering looks at the
/// value's rank only, so cards of equal rank but different suits are neither
/// less nor greater than each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The value of the card.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parses a two character code (value then suit) using the standard catalog.
    ///
    /// The suit is either its letter or its glyph, so the output of
    /// `to_string` parses back to the same card.
    ///
    /// ```
    /// use gamble::{Card, Suit};
    ///
    /// let card = Card::parse("qh").unwrap();
    /// assert_eq!(card.suit, Suit::HEARTS);
    /// assert_eq!(card.full_name(), "queen of hearts");
    /// assert_eq!(Card::parse(&card.to_string()), Ok(card));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not two characters long, or if the
    /// value or suit code is unknown (checked in that order).
    pub fn parse(text: &str) -> Result<Self, InvalidCard> {
        Self::parse_in(text, ValueCatalog::Standard)
    }

    /// Parses a two character code using the given value catalog.
    ///
    /// # Errors
    ///
    /// Same as [`Card::parse`].
    pub fn parse_in(text: &str, catalog: ValueCatalog) -> Result<Self, InvalidCard> {
        let mut chars = text.chars();
        let (Some(value_code), Some(suit_code), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(InvalidCard::WrongLength);
        };

        let value = catalog
            .value_for_code(value_code)
            .ok_or(InvalidCard::UnknownValue(value_code))?;
        let suit = Suit::from_code(suit_code).ok_or(InvalidCard::UnknownSuit(suit_code))?;
        Ok(Self::new(value, suit))
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the value of the card.
    #[must_use]
    pub const fn value(&self) -> Value {
        self.value
    }

    /// Returns the colour of the card's suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color
    }

    /// Returns whether the card is black.
    #[must_use]
    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    /// Returns whether the card is red.
    #[must_use]
    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    /// Returns the full name, e.g. `"ace of spades"`.
    #[must_use]
    pub fn full_name(&self) -> alloc::string::String {
        alloc::format!("{} of {}", self.value.name, self.suit.name)
    }

    /// Returns the glyph from the Unicode playing card block.
    #[must_use]
    pub fn unicode(&self) -> char {
        // Queens and kings sit one past the knight.
        let knight = u32::from(self.value.ordinal >= 12);
        let code = self.suit.unicode_base + u32::from(self.value.ordinal) + knight;
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Compares two cards by value rank only.
    #[must_use]
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.value.rank.cmp(&other.value.rank)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.cmp_rank(other) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.code, self.suit.symbol)
    }
}

/// Builds the canonical 52 cards in generation order (suits outer, values inner).
#[must_use]
pub fn canonical_cards(catalog: ValueCatalog) -> alloc::vec::Vec<Card> {
    let mut cards = alloc::vec::Vec::with_capacity(DECK_SIZE);
    for suit in Suit::all() {
        for value in catalog.values() {
            cards.push(Card::new(*value, *suit));
        }
    }
    cards
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
