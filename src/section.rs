//! Scoring sections: a permitted-mode filter plus a score fold.

use std::sync::Arc;

use hashbrown::HashSet;

use crate::{
    keys::{entity_key, unique_key, EntityKey, UniqueKey},
    record::ContactRecord,
    reference::CityBase,
    verify::{verify_record, RuleData, ValidationOutcome},
};

/// Normalization failure raised by the external rule module.
///
/// The core does not interpret these; the host boundary surfaces them as
/// a rejection of the offending record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeError {
    /// Upstream failure description.
    pub message: String,
}

impl std::fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "normalization failed: {}", self.message)
    }
}

impl std::error::Error for NormalizeError {}

/// Boundary hook turning a raw record into its canonical form.
///
/// The shipped rules treat normalization as a black box owned by an
/// external collaborator; [`PassThrough`] stands in when the host has
/// already normalized.
pub trait Normalize: Send + Sync {
    /// Returns the canonical equivalent of `rec`.
    fn normalize(&self, rec: &ContactRecord) -> Result<ContactRecord, NormalizeError>;
}

/// Identity normalizer for hosts that normalize upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Normalize for PassThrough {
    fn normalize(&self, rec: &ContactRecord) -> Result<ContactRecord, NormalizeError> {
        Ok(rec.clone())
    }
}

/// Section construction errors, raised before any record is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    /// A section must permit at least one mode.
    EmptyModeSet,
}

impl std::fmt::Display for SectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyModeSet => write!(f, "section permits no modes"),
        }
    }
}

impl std::error::Error for SectionError {}

/// Named scoring bucket owning a permitted-mode set and a score fold.
///
/// Sections hold no mutable evaluation state; key sets and running sums
/// accumulate host-side.
pub struct Section {
    name: String,
    code: String,
    modes: HashSet<String>,
    rules: Arc<RuleData>,
    normalizer: Arc<dyn Normalize>,
}

impl Section {
    /// Builds a section, failing fast on an empty mode set.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        modes: HashSet<String>,
        rules: Arc<RuleData>,
        normalizer: Arc<dyn Normalize>,
    ) -> Result<Self, SectionError> {
        if modes.is_empty() {
            return Err(SectionError::EmptyModeSet);
        }
        Ok(Self {
            name: name.into(),
            code: code.into(),
            modes,
            rules,
            normalizer,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed section code shared by all sections of one contest.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Permitted mode tokens.
    pub fn modes(&self) -> &HashSet<String> {
        &self.modes
    }

    /// Shared city reference list.
    pub fn city_list(&self) -> &CityBase {
        &self.rules.cities
    }

    /// Normalizes `rec` and runs the ordered verification pipeline.
    ///
    /// A normalization failure propagates unchanged for the host to
    /// report; it never masquerades as one of the four fixed reasons.
    pub fn verify(&self, rec: &ContactRecord) -> Result<ValidationOutcome, NormalizeError> {
        let normalized = self.normalizer.normalize(rec)?;
        Ok(verify_record(&normalized, &self.modes, &self.rules))
    }

    /// Per-station key for duplicate-contact suppression.
    pub fn unique(&self, rec: &ContactRecord) -> UniqueKey {
        unique_key(rec)
    }

    /// Multiplier key for distinct-entity counting.
    pub fn entity(&self, rec: &ContactRecord) -> EntityKey {
        entity_key(rec)
    }

    /// Folds the summed score and multiplier-set size into the section
    /// total. A zero score yields zero regardless of multiplier count.
    pub fn result(&self, score: i64, mult_count: usize) -> i64 {
        if score > 0 {
            score * mult_count as i64
        } else {
            0
        }
    }
}

impl std::fmt::Debug for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Section")
            .field("name", &self.name)
            .field("code", &self.code)
            .field("modes", &self.modes)
            .finish_non_exhaustive()
    }
}
