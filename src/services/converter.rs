//! Reference conversion session.
//!
//! Holds what a front end needs between keystrokes: the active citation, its
//! translation, and a style choice for each denomination. Input text may carry
//! a denomination tag such as `(LDS)`; untagged input stays in the active one.

// Allow expect for compile-time constant regex patterns in lazy_static blocks
#![allow(clippy::expect_used)]

use lazy_static::lazy_static;
use regex::Regex;

use crate::alignment::AlignmentTable;
use crate::books::BookCatalog;
use crate::citation::Citation;
use crate::config::Config;
use crate::constants::translation::EXPANSION_CAP;
use crate::error::Result;
use crate::types::{Denomination, Style};

lazy_static! {
    /// `RLDS` or `LDS` tag at the start of a word, any case. The tag may be
    /// glued to what follows, as in `LDS1 Ne. 1:1`.
    static ref DENOMINATION_TAG: Regex =
        Regex::new(r"(?i)\bR?LDS").expect("valid regex: DENOMINATION_TAG");
}

/// Split a denomination tag off reference text.
///
/// `RLDS` wins when both tags appear. Every tag and parenthesis is removed
/// from the remainder: `"(LDS) Alma 3:4"` gives `(Some(Lds), "Alma 3:4")`.
pub fn extract_denomination(text: &str) -> (Option<Denomination>, String) {
    let found = DENOMINATION_TAG
        .find_iter(text)
        .filter_map(|m| Denomination::from_text(m.as_str()))
        .max_by_key(|d| *d == Denomination::Rlds);
    let rest = DENOMINATION_TAG.replace_all(text, "").replace(['(', ')'], "");
    (found, rest.trim().to_string())
}

/// A conversion session over one catalog and alignment table.
#[derive(Debug, Clone)]
pub struct Converter {
    catalog: BookCatalog,
    table: AlignmentTable,
    source: Citation,
    translation: Citation,
    rlds_style: Style,
    lds_style: Style,
    expansion_cap: usize,
}

impl Converter {
    /// Start an RLDS session with default styles.
    pub fn new(catalog: BookCatalog, table: AlignmentTable) -> Self {
        Self {
            catalog,
            table,
            source: Citation::new(Denomination::Rlds),
            translation: Citation::new(Denomination::Lds),
            rlds_style: Style::default_for(Denomination::Rlds),
            lds_style: Style::default_for(Denomination::Lds),
            expansion_cap: EXPANSION_CAP,
        }
    }

    /// Load the configured alignment file and apply configured defaults.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = BookCatalog::new();
        let table = AlignmentTable::load(config.data_path()?, &catalog)?;
        let mut converter = Self::new(catalog, table)
            .with_denomination(config.denomination)
            .with_expansion_cap(config.expansion_cap);
        for &denomination in Denomination::all() {
            converter.set_style(denomination, config.style(denomination));
        }
        Ok(converter)
    }

    /// Make `denomination` the active one.
    #[must_use]
    pub fn with_denomination(mut self, denomination: Denomination) -> Self {
        if denomination != self.denomination() {
            self.switch();
        }
        self
    }

    /// Use a different cap on translation range growth.
    #[must_use]
    pub const fn with_expansion_cap(mut self, cap: usize) -> Self {
        self.expansion_cap = cap;
        self
    }

    /// Denomination that untagged input is read in.
    pub const fn denomination(&self) -> Denomination {
        self.source.denomination()
    }

    /// The last successfully submitted citation.
    pub const fn source(&self) -> &Citation {
        &self.source
    }

    /// Translation of [`Converter::source`].
    pub const fn translation(&self) -> &Citation {
        &self.translation
    }

    /// Convert `input` and return the translation as `(DENOM) text`.
    ///
    /// The session is untouched when `input` does not parse.
    pub fn submit(&mut self, input: &str) -> Result<String> {
        let (tag, text) = extract_denomination(input);
        let mut source = Citation::new(tag.unwrap_or_else(|| self.denomination()));
        if !text.is_empty() {
            if let Err(e) = source.insert(&text, &self.catalog, &self.table) {
                tracing::warn!("Rejected reference {input:?}: {e}");
                return Err(e);
            }
        }
        let translation = source.translate_with_cap(&self.table, self.expansion_cap);
        let output = self.labelled(&translation)?;
        self.source = source;
        self.translation = translation;
        Ok(output)
    }

    /// Swap input and output: the translation becomes the active citation.
    pub fn switch(&mut self) {
        std::mem::swap(&mut self.source, &mut self.translation);
    }

    /// Style used when rendering `denomination`.
    pub const fn style(&self, denomination: Denomination) -> Style {
        match denomination {
            Denomination::Rlds => self.rlds_style,
            Denomination::Lds => self.lds_style,
        }
    }

    /// Change the style used for `denomination`.
    pub fn set_style(&mut self, denomination: Denomination, style: Style) {
        match denomination {
            Denomination::Rlds => self.rlds_style = style,
            Denomination::Lds => self.lds_style = style,
        }
    }

    /// Rewrite book names in free text into `style`.
    pub fn restyle(&self, text: &str, style: Style) -> String {
        self.catalog.rewrite(text, style)
    }

    /// Render a citation in its denomination's current style.
    pub fn render(&self, citation: &Citation) -> Result<String> {
        citation.render(&self.catalog, &self.table, self.style(citation.denomination()))
    }

    /// Render a citation prefixed with its tag, e.g. `(LDS) Alma 3:4`.
    pub fn labelled(&self, citation: &Citation) -> Result<String> {
        Ok(format!("({}) {}", citation.denomination(), self.render(citation)?))
    }

    /// Book name in the active denomination's style, ready for a chapter to follow.
    pub fn abbreviate(&self, book: u8) -> Option<String> {
        self.catalog
            .spell(book, self.style(self.denomination()))
            .map(|name| format!("{name} "))
    }

    /// Input prompt for the active denomination, e.g. `(RLDS) `.
    pub fn prompt(&self) -> String {
        format!("({}) ", self.denomination())
    }
}
