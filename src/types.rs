//! Core type definitions for compile-time safety.
//!
//! Denominations and styles are closed enums so that an invalid numbering
//! scheme or abbreviation row cannot be represented at all.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::books;

/// One of the two verse-numbering schemes a citation can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Denomination {
    /// Reorganized (Community of Christ) numbering; the source column of the alignment data.
    #[default]
    Rlds,
    /// Latter-day Saints numbering; the target column of the alignment data.
    Lds,
}

impl Denomination {
    /// Returns both denominations in table order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Rlds, Self::Lds]
    }

    /// Returns the tag used in citation text, e.g. `RLDS`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rlds => "RLDS",
            Self::Lds => "LDS",
        }
    }

    /// The numbering scheme a translation lands in.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Rlds => Self::Lds,
            Self::Lds => Self::Rlds,
        }
    }

    /// Parse a bare tag like `lds` or ` RLDS `.
    pub fn from_text(text: &str) -> Option<Self> {
        match text.trim().to_uppercase().as_str() {
            "RLDS" => Some(Self::Rlds),
            "LDS" => Some(Self::Lds),
            _ => None,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A book-name abbreviation convention. Only affects rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    /// Full book names.
    Long,
    /// 1908 RLDS edition abbreviations.
    Rlds1908,
    /// Zion Bound abbreviations.
    ZionBound,
    /// 1982 LDS edition abbreviations.
    Lds1982,
    /// Temple Lot (roman numeral) abbreviations.
    TempleLot,
    /// RCE abbreviations.
    Rce,
}

impl Style {
    /// Returns all styles in catalog row order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Long,
            Self::Rlds1908,
            Self::ZionBound,
            Self::Lds1982,
            Self::TempleLot,
            Self::Rce,
        ]
    }

    /// Returns the human-readable name of this style.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Long => "Long",
            Self::Rlds1908 => "RLDS 1908",
            Self::ZionBound => "Zion Bound",
            Self::Lds1982 => "LDS 1982",
            Self::TempleLot => "Temple Lot",
            Self::Rce => "RCE",
        }
    }

    /// Row of this style in the book catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Long => 0,
            Self::Rlds1908 => 1,
            Self::ZionBound => 2,
            Self::Lds1982 => 3,
            Self::TempleLot => 4,
            Self::Rce => 5,
        }
    }

    /// The style each denomination renders in until the user picks another.
    #[must_use]
    pub const fn default_for(denomination: Denomination) -> Self {
        match denomination {
            Denomination::Rlds => Self::Rlds1908,
            Denomination::Lds => Self::Lds1982,
        }
    }

    /// Look up a style by name, ignoring case and spacing (`rlds1908`, `Zion bound`).
    pub fn from_name(text: &str) -> Option<Self> {
        let wanted = squash(text);
        Self::all().iter().copied().find(|s| squash(s.name()) == wanted)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn squash(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect::<String>()
        .to_uppercase()
}

/// A (book, chapter, verse) address in one denomination's numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Book number, 1 (1 Nephi) through 15 (Moroni).
    pub book: u8,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number.
    pub verse: u32,
}

impl Triple {
    /// Create a new triple.
    #[must_use]
    pub const fn new(book: u8, chapter: u32, verse: u32) -> Self {
        Self { book, chapter, verse }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match books::long_name(self.book) {
            Some(name) => write!(f, "{name} {}:{}", self.chapter, self.verse),
            None => write!(f, "book {} {}:{}", self.book, self.chapter, self.verse),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_denomination_other_round_trips() {
        for &den in Denomination::all() {
            assert_ne!(den.other(), den);
            assert_eq!(den.other().other(), den);
        }
    }

    #[test]
    fn test_denomination_from_text() {
        assert_eq!(Denomination::from_text("lds"), Some(Denomination::Lds));
        assert_eq!(Denomination::from_text(" RLDS "), Some(Denomination::Rlds));
        assert_eq!(Denomination::from_text("CofC"), None);
    }

    #[test]
    fn test_style_from_name() {
        assert_eq!(Style::from_name("rlds1908"), Some(Style::Rlds1908));
        assert_eq!(Style::from_name("Zion bound"), Some(Style::ZionBound));
        assert_eq!(Style::from_name("LDS_1982"), Some(Style::Lds1982));
        assert_eq!(Style::from_name("Vulgate"), None);
    }

    #[test]
    fn test_style_index_matches_order() {
        for (i, style) in Style::all().iter().enumerate() {
            assert_eq!(style.index(), i);
        }
    }

    #[test]
    fn test_triple_display_uses_long_name() {
        assert_eq!(Triple::new(7, 1, 3).to_string(), "Words of Mormon 1:3");
        assert_eq!(Triple::new(42, 1, 3).to_string(), "book 42 1:3");
    }
}
