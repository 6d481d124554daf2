//! Service modules for front-end facing functionality.
//!
//! This module keeps session state out of the binaries so that it can be
//! tested without a terminal.

pub mod converter;

pub use converter::{extract_denomination, Converter};
