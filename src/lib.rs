//! `bomref` - Book of Mormon reference converter.
//!
//! Converts scripture citations between RLDS and LDS chapter/verse numbering
//! using a verse alignment table, and rewrites book names between
//! abbreviation styles.

pub mod alignment;
pub mod books;
pub mod citation;
pub mod config;
pub mod constants;
pub mod error;
pub mod range;
pub mod services;
pub mod types;

pub use alignment::AlignmentTable;
pub use books::BookCatalog;
pub use citation::{Citation, CitationParser};
pub use error::{Error, Result};
pub use range::IndexRange;
pub use services::Converter;
pub use types::{Denomination, Style, Triple};
