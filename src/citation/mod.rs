//! Denomination-tagged citations over alignment table positions.
//!
//! A [`Citation`] never stores book names or verse numbers. It holds ranges
//! of positions in its denomination's column of the [`AlignmentTable`];
//! because the two columns are parallel, translating is a matter of reading
//! the same positions from the other column.

pub mod parser;

pub use parser::CitationParser;

use crate::alignment::AlignmentTable;
use crate::books::BookCatalog;
use crate::constants::citation::{LIST_SEPARATOR, RANGE_SEPARATOR};
use crate::constants::translation::EXPANSION_CAP;
use crate::error::{Error, Result};
use crate::range::IndexRange;
use crate::types::{Denomination, Style, Triple};

/// A set of scripture references in one denomination's numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    denomination: Denomination,
    ranges: IndexRange,
}

impl Citation {
    /// Create an empty citation.
    #[must_use]
    pub const fn new(denomination: Denomination) -> Self {
        Self { denomination, ranges: IndexRange::new() }
    }

    /// The numbering scheme this citation's positions are read in.
    pub const fn denomination(&self) -> Denomination {
        self.denomination
    }

    /// Table position ranges held by this citation.
    pub const fn ranges(&self) -> &IndexRange {
        &self.ranges
    }

    /// True when no reference has been inserted.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Parse `text` and add each referenced range.
    ///
    /// Either every range in `text` is added or, on error, none are.
    pub fn insert(&mut self, text: &str, catalog: &BookCatalog, table: &AlignmentTable) -> Result<()> {
        let pairs = CitationParser::new(catalog).parse_pairs(text)?;
        let mut staged = self.ranges.clone();
        for (first, last) in pairs {
            let start = self.locate(first, table)?;
            let end = self.locate(last, table)?;
            staged.insert(start, end)?;
        }
        self.ranges = staged;
        Ok(())
    }

    fn locate(&self, triple: Triple, table: &AlignmentTable) -> Result<usize> {
        table
            .position_of(self.denomination, triple)
            .ok_or(Error::TripleNotFound { triple, denomination: self.denomination })
    }

    /// Drop every range. The denomination is unchanged.
    pub fn reset(&mut self) {
        self.ranges.clear();
    }

    /// The same passages in the other denomination, growing range ends over
    /// repeated rows by at most [`EXPANSION_CAP`] positions per range.
    #[must_use]
    pub fn translate(&self, table: &AlignmentTable) -> Self {
        self.translate_with_cap(table, EXPANSION_CAP)
    }

    /// Like [`Citation::translate`] with an explicit cap on range length.
    ///
    /// Each range end moves forward while the next row repeats the end's
    /// triple, so a verse split across several rows of this column is carried
    /// over whole. A range never grows past `cap` positions from its start.
    #[must_use]
    pub fn translate_with_cap(&self, table: &AlignmentTable, cap: usize) -> Self {
        let rows = table.rows(self.denomination);
        let mut ranges = IndexRange::new();
        for (start, end) in self.ranges.iter() {
            let mut last = end;
            if let Some(anchor) = rows.get(end) {
                let mut pos = end;
                while pos - start < cap && rows.get(pos) == Some(anchor) {
                    last = pos;
                    pos += 1;
                }
            }
            ranges.union(start, last);
        }
        tracing::debug!(
            "translated {} {:?} to {} {:?}",
            self.denomination,
            self.ranges.spans(),
            self.denomination.other(),
            ranges.spans()
        );
        Self { denomination: self.denomination.other(), ranges }
    }

    /// Shortest text naming every range, with book names in `style`.
    ///
    /// Each reference drops whatever it shares with the one written just
    /// before it, across range boundaries: `1 Ne. 3:4–5, 7, 4:1`. Fails if a
    /// position lies past the end of `table`, which happens only when the
    /// citation was built against a different table.
    pub fn render(&self, catalog: &BookCatalog, table: &AlignmentTable, style: Style) -> Result<String> {
        let mut pieces = Vec::with_capacity(self.ranges.len());
        let mut previous = None;
        for (start, end) in self.ranges.iter() {
            let first = self.row(table, start)?;
            let last = self.row(table, end)?;
            let head = abridge(first, previous, catalog, style);
            let tail = abridge(last, Some(first), catalog, style);
            match (head, tail) {
                (Some(head), Some(tail)) => pieces.push(format!("{head}{RANGE_SEPARATOR}{tail}")),
                (Some(only), None) | (None, Some(only)) => pieces.push(only),
                (None, None) => {}
            }
            previous = Some(last);
        }
        Ok(pieces.join(LIST_SEPARATOR))
    }

    fn row(&self, table: &AlignmentTable, position: usize) -> Result<Triple> {
        table.get(self.denomination, position).ok_or(Error::PositionOutOfRange {
            position,
            denomination: self.denomination,
            rows: table.len(),
        })
    }
}

/// `current` written without the parts it shares with `previous`; `None` if identical.
fn abridge(current: Triple, previous: Option<Triple>, catalog: &BookCatalog, style: Style) -> Option<String> {
    let Triple { book, chapter, verse } = current;
    match previous {
        Some(prev) if prev == current => None,
        Some(prev) if prev.book == book && prev.chapter == chapter => Some(verse.to_string()),
        Some(prev) if prev.book == book => Some(format!("{chapter}:{verse}")),
        _ => {
            let name = catalog.spell(book, style).unwrap_or_default();
            Some(format!("{name} {chapter}:{verse}"))
        }
    }
}
