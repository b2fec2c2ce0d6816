//! Externally supplied `defines` inputs for the settings resolver.
//!
//! Defines arrive from two places: a flat TOML file of `key = "value"`
//! entries, and repeated `KEY=VALUE` command-line arguments. Later
//! sources win on key collisions.

use crate::errors::SettingsError;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Key-value input mapping for the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defines(BTreeMap<String, String>);

impl Defines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key.
    ///
    /// An explicitly empty value is treated the same as an absent key,
    /// so `-D app_path=` triggers defaulting rather than producing an
    /// empty entry downstream.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a `KEY=VALUE` command-line argument into this mapping.
    ///
    /// The value may itself contain `=`; only the first one splits. A
    /// missing `=` or an empty key is rejected.
    pub fn set_from_arg(&mut self, arg: &str) -> Result<(), SettingsError> {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| SettingsError::DefineParse(arg.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(SettingsError::DefineParse(arg.to_string()));
        }
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Overlay another mapping on top of this one. Entries in `other`
    /// win on collision.
    pub fn merge(&mut self, other: Defines) {
        self.0.extend(other.0);
    }

    /// Load defines from a flat TOML file of string values.
    pub fn load_from_path(path: &Path) -> Result<Defines, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::ParseError(format!("failed to read {}: {e}", path.display()))
        })?;

        let map: BTreeMap<String, String> = toml::from_str(&content)
            .map_err(|e| SettingsError::ParseError(format!("failed to parse TOML: {e}")))?;

        info!("loaded {} defines from {}", map.len(), path.display());
        Ok(Defines(map))
    }
}

impl FromIterator<(String, String)> for Defines {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Defines(iter.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
