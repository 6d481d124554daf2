//! Book name spelling, resolution, and tokenizing.
//!
//! Every style row spells the same fifteen books. Resolution accepts any
//! spelling from any row, plus ordinal forms like `Third Nephi` or `1st Ne.`,
//! after stripping spaces and periods and upper-casing.

use std::collections::HashMap;

use crate::constants::books::{BOOK_COUNT, COMBINERS, NEPHI_FORMS, ORDINALS};
use crate::types::Style;

/// Entries per style row; equal to [`BOOK_COUNT`].
const BOOKS: usize = 15;

/// Book spellings, one row per [`Style`] in [`Style::index`] order.
pub const STYLE_ROWS: [[&str; BOOKS]; 6] = [
    [
        "1 Nephi", "2 Nephi", "Jacob", "Enos", "Jarom", "Omni", "Words of Mormon", "Mosiah",
        "Alma", "Helaman", "3 Nephi", "4 Nephi", "Mormon", "Ether", "Moroni",
    ],
    [
        "1 N", "2 N", "Jb", "En", "Jm", "O", "WM", "Mos", "A", "H", "3 N", "4 N", "Mn", "E", "Mi",
    ],
    [
        "1N", "2N", "Jac", "En", "Jar", "Om", "WoM", "Mos", "Al", "He", "3N", "4N", "Mor", "Eth",
        "Mni",
    ],
    [
        "1 Ne.", "2 Ne.", "Jacob", "Enos", "Jarom", "Omni", "W of M", "Mosiah", "Alma", "Hel.",
        "3 Ne.", "4 Ne.", "Morm.", "Ether", "Moro.",
    ],
    [
        "I Ne.", "II Ne.", "Jacob", "Enos", "Jarom", "Omni", "WM", "Mos.", "Alma", "Hel.",
        "III Ne.", "IV Ne.", "Mor.", "Ether", "Mrni.",
    ],
    [
        "1N", "2N", "Jac", "En", "Jar", "O", "WM", "Mos", "A", "H", "3N", "4N", "Mn", "Eth", "Mi",
    ],
];

/// Full name of a book, used in diagnostics.
pub fn long_name(book: u8) -> Option<&'static str> {
    let idx = usize::from(book).checked_sub(1)?;
    STYLE_ROWS[0].get(idx).copied()
}

/// Lookup key for a book name: spaces and periods removed, upper-cased.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect::<String>()
        .to_uppercase()
}

/// Immutable catalog of book spellings and the name lookup built from them.
#[derive(Debug, Clone)]
pub struct BookCatalog {
    rows: [[&'static str; BOOKS]; 6],
    names: HashMap<String, u8>,
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl BookCatalog {
    /// Build the catalog from the built-in style rows and ordinal variants.
    pub fn new() -> Self {
        let mut names = HashMap::new();
        for row in &STYLE_ROWS {
            for (book, name) in (1..=BOOK_COUNT).zip(row.iter()) {
                names.insert(normalize(name), book);
            }
        }
        for &(ordinals, book) in ORDINALS {
            for ordinal in ordinals {
                for form in NEPHI_FORMS {
                    names.insert(format!("{ordinal}{form}"), book);
                }
            }
        }
        Self { rows: STYLE_ROWS, names }
    }

    /// Book number for any known spelling of a book, or `None` for ordinary text.
    pub fn resolve(&self, text: &str) -> Option<u8> {
        self.names.get(&normalize(text)).copied()
    }

    /// Spelling of `book` in `style`; `None` if `book` is outside 1..=15.
    pub fn spell(&self, book: u8, style: Style) -> Option<&'static str> {
        let idx = usize::from(book).checked_sub(1)?;
        self.rows[style.index()].get(idx).copied()
    }

    /// Rewrite every book name in `text` into `style`. No error correction:
    /// anything that is not a book name passes through as-is.
    pub fn rewrite(&self, text: &str, style: Style) -> String {
        let mut out = String::with_capacity(text.len() + 8);
        for chunk in tokenize(text) {
            if chunk == ";" || chunk == "," {
                out.push_str(&chunk);
                out.push(' ');
            } else if let Some(name) = self.resolve(&chunk).and_then(|b| self.spell(b, style)) {
                out.push_str(name);
                out.push(' ');
            } else {
                out.push_str(&chunk);
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Alpha,
    Digit,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_alphabetic() {
            Self::Alpha
        } else if c.is_ascii_digit() {
            Self::Digit
        } else {
            Self::Other
        }
    }
}

/// Split `text` into maximal runs of letters, digits, or other characters.
///
/// Blanks between runs are dropped. An "other" run keeps trailing blanks, so
/// `"Hel. 3"` yields `["Hel", ". ", "3"]`.
pub fn chunks(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut iter = text.char_indices().peekable();
    while let Some((start, first)) = iter.next() {
        if first.is_whitespace() {
            continue;
        }
        let class = CharClass::of(first);
        let mut end = start + first.len_utf8();
        while let Some(&(i, c)) = iter.peek() {
            if CharClass::of(c) != class {
                break;
            }
            end = i + c.len_utf8();
            iter.next();
        }
        out.push(&text[start..end]);
    }
    out
}

/// Chunks with multi-part book names rejoined, e.g. `"1 Ne. 3:4"` gives
/// `["1Ne. ", "3", ":", "4"]` and `"W of M"` gives `["WofM"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for chunk in chunks(text) {
        match merged.last_mut() {
            Some(prev) if joins_previous(prev, chunk) => prev.push_str(chunk),
            _ => merged.push(chunk.to_string()),
        }
    }
    merged
}

fn joins_previous(prev: &str, chunk: &str) -> bool {
    let key = if chunk.trim_end() == "." { ". ".to_string() } else { chunk.to_uppercase() };
    if COMBINERS.contains(&key.as_str()) {
        return true;
    }
    prev.chars().count() > 2 && prev.to_uppercase().ends_with("OF")
}
