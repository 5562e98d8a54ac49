//! Deck configuration options.

use crate::card::ValueCatalog;

/// Which subset of values a deck is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DeckKind {
    /// All thirteen values of every suit.
    #[default]
    Standard,
    /// Nine through king plus aces, as used in euchre.
    Euchre,
}

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gamble::{DeckOptions, ValueCatalog};
///
/// let options = DeckOptions::default()
///     .with_decks(6)
///     .with_catalog(ValueCatalog::BlackJack)
///     .with_shuffle(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    /// Whether the deck is shuffled once on construction.
    pub shuffle: bool,
    /// Number of cards returned by [`Deck::draw`](crate::Deck::draw).
    pub default_draw_count: usize,
    /// Number of canonical decks concatenated into the deck (a shoe when > 1).
    pub decks: u8,
    /// Values included in each deck.
    pub kind: DeckKind,
    /// Value catalog the cards are taken from.
    pub catalog: ValueCatalog,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            shuffle: true,
            default_draw_count: 1,
            decks: 1,
            kind: DeckKind::Standard,
            catalog: ValueCatalog::Standard,
        }
    }
}

impl DeckOptions {
    /// Sets whether the deck is shuffled on construction.
    ///
    /// # Example
    ///
    /// ```
    /// use gamble::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle(false);
    /// assert!(!options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the number of cards drawn by default.
    ///
    /// # Example
    ///
    /// ```
    /// use gamble::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_default_draw_count(2);
    /// assert_eq!(options.default_draw_count, 2);
    /// ```
    #[must_use]
    pub const fn with_default_draw_count(mut self, count: usize) -> Self {
        self.default_draw_count = count;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use gamble::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the deck kind.
    ///
    /// # Example
    ///
    /// ```
    /// use gamble::{DeckKind, DeckOptions};
    ///
    /// let options = DeckOptions::default().with_kind(DeckKind::Euchre);
    /// assert_eq!(options.kind, DeckKind::Euchre);
    /// ```
    #[must_use]
    pub const fn with_kind(mut self, kind: DeckKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the value catalog.
    ///
    /// # Example
    ///
    /// ```
    /// use gamble::{DeckOptions, ValueCatalog};
    ///
    /// let options = DeckOptions::default().with_catalog(ValueCatalog::BlackJack);
    /// assert_eq!(options.catalog, ValueCatalog::BlackJack);
    /// ```
    #[must_use]
    pub const fn with_catalog(mut self, catalog: ValueCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}
