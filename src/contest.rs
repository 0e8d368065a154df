//! Top-level contest definition: identity, sections, schedule, and
//! cross-section policy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    schedule::{deadline_after, resolve_contest_year, resolve_contest_year_now, ScheduleRule},
    section::Section,
    types::Year,
};

/// Closed set of identity attributes a host may look up by name.
///
/// Replaces the original rule module's dynamic attribute accessor with
/// an explicit enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attr {
    /// Contest display name.
    Name,
    /// Hosting organisation identifier.
    Host,
    /// Sponsor contact address.
    Mail,
    /// Public link.
    Link,
    /// Help-text asset reference, fetched by the host.
    Help,
}

/// Contest identity fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestMeta {
    /// Contest display name.
    pub name: String,
    /// Hosting organisation identifier.
    pub host: String,
    /// Sponsor contact address.
    pub mail: String,
    /// Public link.
    pub link: String,
    /// Help-text asset reference, fetched by the host.
    pub help_ref: String,
}

/// Complete declarative contest definition.
///
/// Section order is significant: it is the enumeration order the host
/// iterates and conflict-checks against.
pub struct ContestDefinition {
    meta: ContestMeta,
    sections: Vec<Section>,
    opening: ScheduleRule,
    closing: ScheduleRule,
    deadline_weeks: u32,
    grace_months: u32,
}

impl ContestDefinition {
    /// Assembles a definition from its parts.
    pub fn new(
        meta: ContestMeta,
        sections: Vec<Section>,
        opening: ScheduleRule,
        closing: ScheduleRule,
        deadline_weeks: u32,
        grace_months: u32,
    ) -> Self {
        Self {
            meta,
            sections,
            opening,
            closing,
            deadline_weeks,
            grace_months,
        }
    }

    /// Contest display name.
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    /// Hosting organisation identifier.
    pub fn host(&self) -> &str {
        &self.meta.host
    }

    /// Sponsor contact address.
    pub fn mail(&self) -> &str {
        &self.meta.mail
    }

    /// Public link.
    pub fn link(&self) -> &str {
        &self.meta.link
    }

    /// Help-text asset reference.
    pub fn help_ref(&self) -> &str {
        &self.meta.help_ref
    }

    /// Identity attribute lookup over the closed [`Attr`] set.
    pub fn attr(&self, attr: Attr) -> &str {
        match attr {
            Attr::Name => self.name(),
            Attr::Host => self.host(),
            Attr::Mail => self.mail(),
            Attr::Link => self.link(),
            Attr::Help => self.help_ref(),
        }
    }

    /// Ordered section list.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Contest year resolved at the present moment.
    pub fn year(&self) -> Year {
        resolve_contest_year_now(|y| self.start_day(y), self.grace_months)
    }

    /// Contest year as resolved on `today`; exists for deterministic
    /// tests of the grace-period rollover.
    pub fn year_on(&self, today: NaiveDate) -> Year {
        resolve_contest_year(|y| self.start_day(y), self.grace_months, today)
    }

    /// Opening day of the `year` edition.
    pub fn start_day(&self, year: Year) -> NaiveDate {
        self.opening.resolve(year)
    }

    /// Closing day of the `year` edition.
    pub fn final_day(&self, year: Year) -> NaiveDate {
        self.closing.resolve(year)
    }

    /// Submission deadline of the `year` edition.
    pub fn deadline(&self, year: Year) -> NaiveDate {
        deadline_after(self.start_day(year), self.deadline_weeks)
    }

    /// Maximum accepted entries sharing one multiplier code.
    pub fn limit_multiple_entry(&self, _code: &str) -> u32 {
        1
    }

    /// True when one station's submission matched more than one section.
    pub fn conflict(&self, matched: &[&Section]) -> bool {
        matched.len() > 1
    }
}

impl std::fmt::Debug for ContestDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContestDefinition")
            .field("meta", &self.meta)
            .field("sections", &self.sections.len())
            .field("opening", &self.opening)
            .field("closing", &self.closing)
            .finish_non_exhaustive()
    }
}
