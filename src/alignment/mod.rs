//! Parallel verse-alignment tables for the two denominations.
//!
//! Row `i` of the RLDS table and row `i` of the LDS table name the same
//! passage. Runs of equal triples are allowed on either side where several
//! verses of one numbering cover a single verse of the other.
//!
//! The data file lists book names on their own line, followed by rows of the
//! form `c0:v0[-v2] c1:v1` (RLDS first, LDS second):
//!
//! ```text
//! 1 Nephi
//! 1:1 1:1
//! 1:3-4 1:5
//! ```

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use crate::books::BookCatalog;
use crate::constants::books::BOOK_COUNT;
use crate::constants::citation::DASHES;
use crate::error::{Error, Result};
use crate::types::{Denomination, Triple};

/// One denomination's ordered rows plus a first-occurrence index.
#[derive(Debug, Clone, Default)]
struct Column {
    rows: Vec<Triple>,
    first: HashMap<Triple, usize>,
}

impl Column {
    fn new(rows: Vec<Triple>) -> Self {
        let mut first = HashMap::with_capacity(rows.len());
        for (pos, triple) in rows.iter().enumerate() {
            first.entry(*triple).or_insert(pos);
        }
        Self { rows, first }
    }
}

/// Immutable pair of parallel (book, chapter, verse) sequences.
#[derive(Debug, Clone, Default)]
pub struct AlignmentTable {
    rlds: Column,
    lds: Column,
}

impl AlignmentTable {
    /// Build a table from two already-aligned sequences.
    pub fn from_rows(rlds: Vec<Triple>, lds: Vec<Triple>) -> Result<Self> {
        if rlds.len() != lds.len() {
            return Err(Error::parse(
                format!("RLDS table has {} rows but LDS table has {}", rlds.len(), lds.len()),
                None,
            ));
        }
        if let Some(bad) = rlds.iter().chain(&lds).find(|t| t.book == 0 || t.book > BOOK_COUNT) {
            return Err(Error::parse(format!("book number {} out of range", bad.book), None));
        }
        Ok(Self { rlds: Column::new(rlds), lds: Column::new(lds) })
    }

    /// Parse alignment data, expanding `v0-v2` runs into one row per verse.
    pub fn from_reader(reader: impl BufRead, catalog: &BookCatalog) -> Result<Self> {
        let mut rlds = Vec::new();
        let mut lds = Vec::new();
        let mut book = None;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(n) = catalog.resolve(line) {
                book = Some(n);
                continue;
            }
            let Some(book) = book else {
                return Err(Error::parse_at(format!("row {line:?} appears before any book name"), line_no));
            };

            let line = line.replace(DASHES, "-");
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [source, target] = fields.as_slice() else {
                return Err(Error::parse_at(format!("expected two fields in {line:?}"), line_no));
            };
            let (c0, verses) = split_chapter(source, line_no)?;
            let (v0, v2) = match verses.split_once('-') {
                Some((v0, v2)) => (number(v0, line_no)?, number(v2, line_no)?),
                None => {
                    let v = number(verses, line_no)?;
                    (v, v)
                }
            };
            if v0 > v2 {
                return Err(Error::parse_at(format!("decreasing verse run in {source:?}"), line_no));
            }
            let (c1, v1) = split_chapter(target, line_no)?;
            let target = Triple::new(book, number(c1, line_no)?, number(v1, line_no)?);
            let c0 = number(c0, line_no)?;

            for v in v0..=v2 {
                rlds.push(Triple::new(book, c0, v));
                lds.push(target);
            }
        }

        Self::from_rows(rlds, lds)
    }

    /// Open and parse an alignment file.
    pub fn load(path: &Path, catalog: &BookCatalog) -> Result<Self> {
        let file = fs_err::File::open(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        let table = Self::from_reader(std::io::BufReader::new(file), catalog)
            .map_err(|e| e.in_file(path))?;
        tracing::info!("Loaded {} alignment rows from {}", table.len(), path.display());
        Ok(table)
    }

    fn column(&self, denomination: Denomination) -> &Column {
        match denomination {
            Denomination::Rlds => &self.rlds,
            Denomination::Lds => &self.lds,
        }
    }

    /// Number of aligned positions.
    pub fn len(&self) -> usize {
        self.rlds.rows.len()
    }

    /// True if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rlds.rows.is_empty()
    }

    /// All rows for one denomination, in position order.
    pub fn rows(&self, denomination: Denomination) -> &[Triple] {
        &self.column(denomination).rows
    }

    /// Triple at `pos` in one denomination's numbering.
    pub fn get(&self, denomination: Denomination, pos: usize) -> Option<Triple> {
        self.column(denomination).rows.get(pos).copied()
    }

    /// First position holding `triple`, or `None` if the numbering has no such verse.
    pub fn position_of(&self, denomination: Denomination, triple: Triple) -> Option<usize> {
        self.column(denomination).first.get(&triple).copied()
    }
}

fn split_chapter(field: &str, line_no: usize) -> Result<(&str, &str)> {
    field
        .split_once(':')
        .ok_or_else(|| Error::parse_at(format!("expected chapter:verse, found {field:?}"), line_no))
}

fn number(text: &str, line_no: usize) -> Result<u32> {
    text.trim()
        .parse()
        .map_err(|_| Error::parse_at(format!("expected a number, found {text:?}"), line_no))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const SAMPLE: &str = "\
1 Nephi
1:1 1:1
1:1 1:2
1:2-4 1:3

Mosiah
2:1 3:1
";

    fn sample() -> AlignmentTable {
        AlignmentTable::from_reader(SAMPLE.as_bytes(), &BookCatalog::new()).unwrap()
    }

    #[test]
    fn test_verse_runs_expand_to_one_row_each() {
        let table = sample();
        assert_eq!(table.len(), 6);
        assert_eq!(
            table.rows(Denomination::Rlds)[2..5],
            [Triple::new(1, 1, 2), Triple::new(1, 1, 3), Triple::new(1, 1, 4)]
        );
        assert_eq!(
            table.rows(Denomination::Lds)[2..5],
            [Triple::new(1, 1, 3), Triple::new(1, 1, 3), Triple::new(1, 1, 3)]
        );
        assert_eq!(table.get(Denomination::Lds, 5), Some(Triple::new(8, 3, 1)));
    }

    #[test]
    fn test_position_of_returns_first_occurrence() {
        let table = sample();
        assert_eq!(table.position_of(Denomination::Rlds, Triple::new(1, 1, 1)), Some(0));
        assert_eq!(table.position_of(Denomination::Lds, Triple::new(1, 1, 3)), Some(2));
        assert_eq!(table.position_of(Denomination::Lds, Triple::new(1, 9, 9)), None);
    }

    #[test]
    fn test_en_dash_rows_accepted() {
        let data = "Alma\n1:1\u{2013}2 1:1\n";
        let table = AlignmentTable::from_reader(data.as_bytes(), &BookCatalog::new()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_row_before_book_is_rejected() {
        let err = AlignmentTable::from_reader("1:1 1:1\n".as_bytes(), &BookCatalog::new()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: Some(1), .. }));
    }

    #[test]
    fn test_bad_number_reports_line() {
        let data = "Enos\n1:1 1:1\n1:x 1:2\n";
        let err = AlignmentTable::from_reader(data.as_bytes(), &BookCatalog::new()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: Some(3), .. }));
    }

    #[test]
    fn test_decreasing_verse_run_reports_line() {
        let data = "Alma\n1:5-3 1:1\n1:6 1:2\n";
        let err = AlignmentTable::from_reader(data.as_bytes(), &BookCatalog::new()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: Some(2), .. }));
    }

    #[test]
    fn test_mismatched_rows_rejected() {
        let err = AlignmentTable::from_rows(vec![Triple::new(1, 1, 1)], vec![]).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
