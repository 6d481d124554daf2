//! End-to-end conversion against a small alignment fixture.
//!
//! Fixture layout (RLDS -> LDS): 1 Nephi 1:1 spans LDS 1:1-3, RLDS 1:3-4
//! share LDS 1:5, RLDS 1 Nephi 2 is LDS 1 Nephi 1:8-10, RLDS 2 Nephi 2:1-2
//! share LDS 2 Nephi 3:1.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::path::{Path, PathBuf};

use bomref::config::Config;
use bomref::{AlignmentTable, BookCatalog, Citation, Converter, Denomination, Error, Style};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/alignment_sample.txt")
}

fn load() -> (BookCatalog, AlignmentTable) {
    let catalog = BookCatalog::new();
    let table = AlignmentTable::load(&fixture_path(), &catalog).unwrap();
    (catalog, table)
}

fn converter() -> Converter {
    let (catalog, table) = load();
    Converter::new(catalog, table)
}

#[test]
fn test_fixture_loads_with_expanded_runs() {
    let (_, table) = load();
    assert_eq!(table.len(), 21);
}

#[test]
fn test_one_rlds_verse_covers_three_lds_verses() {
    let mut conv = converter();
    assert_eq!(conv.submit("(RLDS) 1 N 1:1").unwrap(), "(LDS) 1 Ne. 1:1\u{2013}3");
    assert_eq!(conv.submit("(RLDS) 1 N 1:1-2").unwrap(), "(LDS) 1 Ne. 1:1\u{2013}4");
}

#[test]
fn test_two_rlds_verses_share_one_lds_verse() {
    let mut conv = converter();
    assert_eq!(conv.submit("(RLDS) 1 N 1:3-4").unwrap(), "(LDS) 1 Ne. 1:5");
    assert_eq!(conv.submit("(LDS) 1 Ne. 1:5").unwrap(), "(RLDS) 1 N 1:3\u{2013}4");
    assert_eq!(conv.submit("(LDS) 2 Ne. 3:1").unwrap(), "(RLDS) 2 N 2:1\u{2013}2");
}

#[test]
fn test_ranges_across_books_render_in_table_order() {
    let mut conv = converter();
    assert_eq!(
        conv.submit("(RLDS) 2 N 2:1-2, 1 N 2:1").unwrap(),
        "(LDS) 1 Ne. 1:8, 2 Ne. 3:1"
    );
    assert_eq!(
        conv.submit("(LDS) 1 Ne. 1:9-10; 3 Ne. 1:1-2").unwrap(),
        "(RLDS) 1 N 2:2\u{2013}3, 3 N 1:1\u{2013}2"
    );
}

#[test]
fn test_render_own_denomination_minimally() {
    let (catalog, table) = load();
    let mut citation = Citation::new(Denomination::Rlds);
    citation.insert("1 N 1:5, 6; 2:2", &catalog, &table).unwrap();
    assert_eq!(citation.ranges().spans(), &[(6, 7), (9, 9)]);
    assert_eq!(citation.render(&catalog, &table, Style::Long).unwrap(), "1 Nephi 1:5\u{2013}6, 2:2");
}

#[test]
fn test_render_then_reinsert_is_stable_in_every_style() {
    let (catalog, table) = load();
    for &den in Denomination::all() {
        let text = match den {
            Denomination::Rlds => "1 N 1:2-2:1, 2 N 2:4; 3 N 1:1-2",
            Denomination::Lds => "1 Ne. 1:2-4, 9; 2 Ne. 3:2-5",
        };
        let mut original = Citation::new(den);
        original.insert(text, &catalog, &table).unwrap();

        for &style in Style::all() {
            let rendered = original.render(&catalog, &table, style).unwrap();
            let mut reparsed = Citation::new(den);
            reparsed.insert(&rendered, &catalog, &table).unwrap();
            assert_eq!(reparsed, original, "{den} in {style}: {rendered}");
        }
    }
}

#[test]
fn test_translate_twice_returns_to_origin_denomination() {
    let (catalog, table) = load();
    let mut citation = Citation::new(Denomination::Lds);
    citation.insert("1 Ne. 1:2", &catalog, &table).unwrap();
    let there = citation.translate(&table);
    assert_eq!(there.denomination(), Denomination::Rlds);
    let back = there.translate(&table);
    assert_eq!(back.denomination(), Denomination::Lds);
    // RLDS 1:1 is three rows long, so the round trip widens to LDS 1:2-3.
    assert_eq!(back.render(&catalog, &table, Style::Lds1982).unwrap(), "1 Ne. 1:2\u{2013}3");
}

#[test]
fn test_errors_are_distinguished_and_atomic() {
    let (catalog, table) = load();
    let mut citation = Citation::new(Denomination::Rlds);
    citation.insert("1 N 1:1", &catalog, &table).unwrap();
    let before = citation.clone();

    let err = citation.insert("1 N 1:2, 9:9", &catalog, &table).unwrap_err();
    assert!(matches!(err, Error::TripleNotFound { denomination: Denomination::Rlds, .. }));
    let err = citation.insert("99 Nephi 1:1", &catalog, &table).unwrap_err();
    assert!(matches!(err, Error::UnresolvedBookName(_)));
    let err = citation.insert("1 N 1:3-1:1", &catalog, &table).unwrap_err();
    assert!(matches!(err, Error::InvalidRange { start: 4, end: 0 }));
    let err = citation.insert("1 N 1:1-2-3", &catalog, &table).unwrap_err();
    assert!(matches!(err, Error::MalformedCitation { .. }));

    assert_eq!(citation, before);
}

#[test]
fn test_converter_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("BoMConversion.txt");
    std::fs::copy(fixture_path(), &path).unwrap();

    let data = path.to_string_lossy().to_string();
    let config = Config::from_lookup(|key| match key {
        "BOMREF_DATA" => Some(data.clone()),
        "BOMREF_DENOMINATION" => Some("LDS".to_string()),
        "BOMREF_RLDS_STYLE" => Some("Long".to_string()),
        _ => None,
    });
    let mut conv = Converter::from_config(&config).unwrap();
    assert_eq!(conv.denomination(), Denomination::Lds);
    assert_eq!(conv.submit("1 Ne. 1:8").unwrap(), "(RLDS) 1 Nephi 2:1");
}

#[test]
fn test_missing_data_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AlignmentTable::load(&dir.path().join("absent.txt"), &BookCatalog::new()).unwrap_err();
    assert!(matches!(err, Error::Io { path: Some(_), .. }));
}
