//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Book catalog constants.
pub mod books {
    /// Number of books in the catalog.
    pub const BOOK_COUNT: u8 = 15;

    /// Ordinal words that stand in for a numbered Nephi, paired with the book they select.
    ///
    /// Third and Fourth Nephi are books 11 and 12 in canonical order.
    pub const ORDINALS: &[(&[&str], u8)] = &[
        (&["FIRST", "1ST"], 1),
        (&["SECOND", "2ND"], 2),
        (&["THIRD", "3RD"], 11),
        (&["FOURTH", "4TH"], 12),
    ];

    /// Spellings of "Nephi" that may follow an ordinal.
    pub const NEPHI_FORMS: &[&str] = &["N", "NE", "NEPHI"];

    /// Chunks folded into the preceding chunk when rebuilding book names.
    pub const COMBINERS: &[&str] = &["ST", "ND", "RD", "RTH", "TH", "OF", ". ", "N", "NE", "NEPHI"];
}

/// Citation parsing and rendering constants.
pub mod citation {
    /// Dash glyphs accepted between the halves of a range.
    pub const DASHES: &[char] = &['\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2212}'];

    /// Joins the halves of a rendered range.
    pub const RANGE_SEPARATOR: &str = "\u{2013}";

    /// Joins successive rendered ranges.
    pub const LIST_SEPARATOR: &str = ", ";
}

/// Translation constants.
pub mod translation {
    /// Longest interval, in table positions, that boundary growth may produce.
    pub const EXPANSION_CAP: usize = 5;
}

/// Environment and file naming constants.
pub mod env {
    /// Path to the verse alignment file.
    pub const DATA_PATH: &str = "BOMREF_DATA";

    /// Initial active denomination.
    pub const DENOMINATION: &str = "BOMREF_DENOMINATION";

    /// Style for RLDS output.
    pub const RLDS_STYLE: &str = "BOMREF_RLDS_STYLE";

    /// Style for LDS output.
    pub const LDS_STYLE: &str = "BOMREF_LDS_STYLE";

    /// Override for the translation expansion cap.
    pub const EXPANSION_CAP: &str = "BOMREF_EXPANSION_CAP";

    /// Default alignment file name.
    pub const DATA_FILE: &str = "BoMConversion.txt";

    /// Directory under the platform data dir holding the alignment file.
    pub const APP_DIR: &str = "bomref";
}
