//! Field validators and the ordered record-verification pipeline.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::{
    record::ContactRecord,
    reference::CityBase,
    score::ScoreTable,
    types::{BandKhz, Hour, Points},
};

/// Which check a record failed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Hour of day outside the operating window.
    Time,
    /// Received code matched no reference city.
    Code,
    /// Band outside the permitted set.
    Band,
    /// Mode outside the section's permitted set.
    Mode,
}

impl RejectReason {
    /// Fixed human-readable reason string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Time => "bad time",
            Self::Code => "bad code",
            Self::Band => "bad band",
            Self::Mode => "bad mode",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of verifying one record against one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// Record counts, worth this many points.
    Accepted {
        /// Point value from the score table.
        points: Points,
    },
    /// Record does not count.
    Rejected {
        /// First failing check.
        reason: RejectReason,
    },
}

impl ValidationOutcome {
    /// True for [`ValidationOutcome::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Points when accepted.
    pub fn points(&self) -> Option<Points> {
        match self {
            Self::Accepted { points } => Some(*points),
            Self::Rejected { .. } => None,
        }
    }

    /// Reason when rejected.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason } => Some(*reason),
        }
    }
}

/// Shared, immutable rule data consulted by the validators.
///
/// Built once by the host before the first evaluation and never mutated
/// afterwards, so sections may be evaluated concurrently.
#[derive(Debug, Clone)]
pub struct RuleData {
    /// Fixed contest time zone.
    pub zone: FixedOffset,
    /// Permitted hours of day in the contest zone.
    pub hours: HashSet<Hour>,
    /// Permitted bands in kHz.
    pub bands_khz: HashSet<BandKhz>,
    /// Shared city reference list.
    pub cities: Arc<CityBase>,
    /// Mode weighting.
    pub scores: ScoreTable,
}

/// True when the instant falls inside the operating window of the
/// contest zone.
pub fn valid_time(time: DateTime<Utc>, zone: &FixedOffset, hours: &HashSet<Hour>) -> bool {
    hours.contains(&time.with_timezone(zone).hour())
}

/// True when the received code names a known reference city.
pub fn valid_code(code: &str, cities: &CityBase) -> bool {
    cities.contains_code(code)
}

/// True when the band is in the permitted set.
pub fn valid_band(band_khz: BandKhz, bands: &HashSet<BandKhz>) -> bool {
    bands.contains(&band_khz)
}

/// True when the mode is in the section's permitted set.
pub fn valid_mode(mode: &str, permitted: &HashSet<String>) -> bool {
    permitted.contains(mode)
}

/// Runs the checks in the fixed order time, code, band, mode and
/// short-circuits on the first failure.
///
/// Callers depend on exactly this reporting priority; a record failing
/// several checks is always explained by the earliest one.
pub fn verify_record(
    rec: &ContactRecord,
    permitted_modes: &HashSet<String>,
    rules: &RuleData,
) -> ValidationOutcome {
    if !valid_time(rec.time, &rules.zone, &rules.hours) {
        return ValidationOutcome::Rejected {
            reason: RejectReason::Time,
        };
    }
    if !valid_code(rec.rcvd_code(), &rules.cities) {
        return ValidationOutcome::Rejected {
            reason: RejectReason::Code,
        };
    }
    if !valid_band(rec.band_khz, &rules.bands_khz) {
        return ValidationOutcome::Rejected {
            reason: RejectReason::Band,
        };
    }
    if !valid_mode(&rec.mode, permitted_modes) {
        return ValidationOutcome::Rejected {
            reason: RejectReason::Mode,
        };
    }
    ValidationOutcome::Accepted {
        points: rules.scores.score_for(&rec.mode),
    }
}
