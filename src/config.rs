//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};

use crate::constants::env as keys;
use crate::constants::translation::EXPANSION_CAP;
use crate::error::{Error, Result};
use crate::types::{Denomination, Style};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Path to the verse alignment file, if one was configured or found
    pub data_path: Option<PathBuf>,
    /// Denomination assumed for references without a tag
    pub denomination: Denomination,
    /// Output style for RLDS references
    pub rlds_style: Style,
    /// Output style for LDS references
    pub lds_style: Style,
    /// Longest range, in table positions, that translation may grow
    pub expansion_cap: usize,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            data_path: None,
            denomination: Denomination::Rlds,
            rlds_style: Style::default_for(Denomination::Rlds),
            lds_style: Style::default_for(Denomination::Lds),
            expansion_cap: EXPANSION_CAP,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.data_path = lookup(keys::DATA_PATH).map_or_else(default_data_path, |path| {
            Some(PathBuf::from(shellexpand::tilde(&path).to_string()))
        });

        if let Some(den) = parsed(&lookup, keys::DENOMINATION, Denomination::from_text) {
            config.denomination = den;
        }
        if let Some(style) = parsed(&lookup, keys::RLDS_STYLE, Style::from_name) {
            config.rlds_style = style;
        }
        if let Some(style) = parsed(&lookup, keys::LDS_STYLE, Style::from_name) {
            config.lds_style = style;
        }
        if let Some(cap) = parsed(&lookup, keys::EXPANSION_CAP, |v| v.trim().parse::<usize>().ok().filter(|&c| c > 0)) {
            config.expansion_cap = cap;
        }

        config
    }

    /// Output style configured for a denomination.
    pub const fn style(&self, denomination: Denomination) -> Style {
        match denomination {
            Denomination::Rlds => self.rlds_style,
            Denomination::Lds => self.lds_style,
        }
    }

    /// The alignment file path, or an error explaining how to provide one.
    pub fn data_path(&self) -> Result<&Path> {
        self.data_path.as_deref().ok_or_else(|| {
            Error::config(
                format!("no {} found", keys::DATA_FILE),
                "Set BOMREF_DATA or pass --data with the path to the verse alignment file",
            )
        })
    }
}

fn parsed<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = lookup(key)?;
    let value = parse(&raw);
    if value.is_none() {
        tracing::warn!("Ignoring {key}={raw:?}: not a recognized value");
    }
    value
}

/// Look for the alignment file in the platform data dir, then the working directory.
fn default_data_path() -> Option<PathBuf> {
    let candidates = [
        dirs::data_dir().map(|d| d.join(keys::APP_DIR).join(keys::DATA_FILE)),
        Some(PathBuf::from(keys::DATA_FILE)),
    ];
    candidates.into_iter().flatten().find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[(keys::DATA_PATH, "/srv/bom.txt")]));
        assert_eq!(config.denomination, Denomination::Rlds);
        assert_eq!(config.style(Denomination::Rlds), Style::Rlds1908);
        assert_eq!(config.style(Denomination::Lds), Style::Lds1982);
        assert_eq!(config.expansion_cap, EXPANSION_CAP);
        assert_eq!(config.data_path().unwrap(), Path::new("/srv/bom.txt"));
        assert_eq!(config.app_name(), "bomref");
        assert_eq!(config.app_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (keys::DENOMINATION, "lds"),
            (keys::RLDS_STYLE, "Zion Bound"),
            (keys::LDS_STYLE, "long"),
            (keys::EXPANSION_CAP, "8"),
        ]));
        assert_eq!(config.denomination, Denomination::Lds);
        assert_eq!(config.rlds_style, Style::ZionBound);
        assert_eq!(config.lds_style, Style::Long);
        assert_eq!(config.expansion_cap, 8);
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[
            (keys::DENOMINATION, "Catholic"),
            (keys::LDS_STYLE, "Vulgate"),
            (keys::EXPANSION_CAP, "0"),
        ]));
        assert_eq!(config.denomination, Denomination::Rlds);
        assert_eq!(config.lds_style, Style::Lds1982);
        assert_eq!(config.expansion_cap, EXPANSION_CAP);
    }

    #[test]
    fn test_tilde_expanded() {
        let config = Config::from_lookup(lookup_from(&[(keys::DATA_PATH, "~/bom.txt")]));
        let path = config.data_path.unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("bom.txt"));
    }

    #[test]
    fn test_missing_data_path_is_config_error() {
        let config = Config { data_path: None, ..Config::default() };
        assert!(matches!(config.data_path(), Err(Error::Config { .. })));
    }
}
