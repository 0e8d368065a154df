//! Mode-to-points mapping with an explicit default.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::types::Points;

/// Total mapping from mode token to point value.
///
/// Modes absent from the explicit map resolve to the default, so lookup
/// never fails for any string input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    points: HashMap<String, Points>,
    default: Points,
}

impl ScoreTable {
    /// Builds a table where every mode scores `default`.
    pub fn new(default: Points) -> Self {
        Self {
            points: HashMap::new(),
            default,
        }
    }

    /// Adds or replaces an explicit weight for `mode`.
    pub fn with_entry(mut self, mode: impl Into<String>, points: Points) -> Self {
        self.points.insert(mode.into(), points);
        self
    }

    /// Point value for `mode`; the default when unlisted.
    pub fn score_for(&self, mode: &str) -> Points {
        self.points.get(mode).copied().unwrap_or(self.default)
    }

    /// The default weight applied to unlisted modes.
    pub fn default_points(&self) -> Points {
        self.default
    }
}
