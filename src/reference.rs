//! Read-only city/location reference data and its JSON loader.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors surfaced by the reference-data loader.
#[derive(Debug)]
pub enum ReferenceError {
    /// File could not be read.
    Io(std::io::Error),
    /// File contents were not a valid city list.
    Json(serde_json::Error),
}

impl From<std::io::Error> for ReferenceError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ReferenceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl std::fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "city base read failed: {e}"),
            Self::Json(e) => write!(f, "city base parse failed: {e}"),
        }
    }
}

impl std::error::Error for ReferenceError {}

/// Result alias for reference-data loading.
pub type ReferenceResult<T> = Result<T, ReferenceError>;

/// One entry of the city/location database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Unique identifying code checked against received exchanges.
    pub code: String,
    /// Display name.
    pub name: String,
}

/// Load-once, read-only list of reference cities.
///
/// An empty base fails closed: every membership check returns false, so a
/// missing database rejects records instead of crashing per record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CityBase {
    entries: Vec<City>,
}

impl CityBase {
    /// Returns a base with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a base from an already loaded entry list.
    pub fn from_entries(entries: Vec<City>) -> Self {
        Self { entries }
    }

    /// Loads a base from a JSON array of cities.
    pub fn load_json(path: impl AsRef<Path>) -> ReferenceResult<Self> {
        let raw = fs::read_to_string(path)?;
        let entries: Vec<City> = serde_json::from_str(&raw)?;
        Ok(Self { entries })
    }

    /// True when any entry carries exactly this code.
    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.iter().any(|c| c.code == code)
    }

    /// All entries in load order.
    pub fn entries(&self) -> &[City] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the base holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
