//! Citation text to (book, chapter, verse) triples.
//!
//! A citation is a `;` or `,` separated list of items. Each item is one
//! `[book] [chapter:]verse` fragment or two of them joined by a dash. A
//! fragment that leaves out its book or chapter borrows it from the closest
//! fragment to its left, across item boundaries:
//!
//! ```text
//! 2 Nephi 3:4-5, 6   =>  (2,3,4) (2,3,5) (2,3,6) (2,3,6)
//! ```

use crate::books::BookCatalog;
use crate::constants::citation::DASHES;
use crate::error::{Error, Result};
use crate::types::Triple;

/// A fragment as written, before inheritance fills in what it omits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fragment {
    book: Option<u8>,
    chapter: Option<u32>,
    verse: u32,
}

/// Parses citation text against a book catalog.
#[derive(Debug, Clone, Copy)]
pub struct CitationParser<'a> {
    catalog: &'a BookCatalog,
}

impl<'a> CitationParser<'a> {
    /// Create a parser that resolves book names through `catalog`.
    pub const fn new(catalog: &'a BookCatalog) -> Self {
        Self { catalog }
    }

    /// Fully resolved triples, two per item (start then end).
    pub fn parse(&self, text: &str) -> Result<Vec<Triple>> {
        Ok(self.parse_pairs(text)?.into_iter().flat_map(|(a, b)| [a, b]).collect())
    }

    /// Fully resolved (start, end) pairs, one per item.
    pub fn parse_pairs(&self, text: &str) -> Result<Vec<(Triple, Triple)>> {
        let text = text.replace(DASHES, "-");
        let mut book = None;
        let mut chapter = None;
        let mut pairs = Vec::new();

        for item in text.split(';').flat_map(|part| part.split(',')) {
            let (first, last) = split_range(item)?;
            let start = self.fragment(first)?;
            let start = inherit(start, &mut book, &mut chapter, first)?;
            let end = self.fragment(last)?;
            let end = inherit(end, &mut book, &mut chapter, last)?;
            pairs.push((start, end));
        }

        tracing::debug!("parsed {text:?} into {} ranges", pairs.len());
        Ok(pairs)
    }

    fn fragment(&self, text: &str) -> Result<Fragment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::malformed(text, "empty reference"));
        }
        if is_digits(text) {
            return Ok(Fragment { book: None, chapter: None, verse: number(text, text)? });
        }

        let Some((head, verse)) = text.split_once(':') else {
            return Err(Error::malformed(text, "expected chapter:verse"));
        };
        let verse = number(verse.trim(), text)?;
        let head = head.trim();
        if is_digits(head) {
            return Ok(Fragment { book: None, chapter: Some(number(head, text)?), verse });
        }

        let name = head.trim_end_matches(|c: char| c.is_ascii_digit());
        let chapter = &head[name.len()..];
        if chapter.is_empty() {
            return Err(Error::malformed(text, "missing chapter number"));
        }
        let name = name.trim();
        let book = self
            .catalog
            .resolve(name)
            .ok_or_else(|| Error::UnresolvedBookName(name.to_string()))?;
        Ok(Fragment { book: Some(book), chapter: Some(number(chapter, text)?), verse })
    }
}

/// Split an item on its dash, or repeat it when it names a single verse.
fn split_range(item: &str) -> Result<(&str, &str)> {
    let mut halves = item.split('-');
    match (halves.next(), halves.next(), halves.next()) {
        (Some(only), None, _) => Ok((only, only)),
        (Some(first), Some(last), None) => Ok((first, last)),
        _ => Err(Error::malformed(item.trim(), "more than one dash")),
    }
}

/// Fill omitted book and chapter from the running context, then update it.
fn inherit(
    fragment: Fragment,
    book: &mut Option<u8>,
    chapter: &mut Option<u32>,
    text: &str,
) -> Result<Triple> {
    if fragment.book.is_some() {
        *book = fragment.book;
    }
    if fragment.chapter.is_some() {
        *chapter = fragment.chapter;
    }
    match (*book, *chapter) {
        (Some(b), Some(c)) => Ok(Triple::new(b, c, fragment.verse)),
        (None, _) => Err(Error::malformed(text.trim(), "no book given or implied")),
        (Some(_), None) => Err(Error::malformed(text.trim(), "no chapter given or implied")),
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn number(digits: &str, context: &str) -> Result<u32> {
    if !is_digits(digits) {
        return Err(Error::malformed(context, "expected a number"));
    }
    digits.parse().map_err(|_| Error::malformed(context, "number too large"))
}
