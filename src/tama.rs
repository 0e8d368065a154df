//! Shipped definition of the Tamagawa contest.
//!
//! Single-day 50 MHz contest held on the fourth Sunday of November,
//! 13:00-15:00 JST, scored as points times distinct worked cities.

use std::sync::Arc;

use chrono::{FixedOffset, Weekday};
use hashbrown::HashSet;

use crate::{
    contest::{ContestDefinition, ContestMeta},
    reference::CityBase,
    schedule::ScheduleRule,
    score::ScoreTable,
    section::{Normalize, PassThrough, Section, SectionError},
    verify::RuleData,
};

/// Section code shared by every Tamagawa section.
pub const SECTION_CODE: &str = "TAMA";

/// Months before "contest year" rolls to the next edition.
pub const GRACE_MONTHS: u32 = 9;

const INNER: &str = "流域内";
const OUTER: &str = "流域外";
const SWLER: &str = "SWL";
const MORSE: &str = "電信";
const PHONE: &str = "電信電話";

fn morse_modes() -> HashSet<String> {
    HashSet::from_iter(["CW".to_string()])
}

fn phone_modes() -> HashSet<String> {
    let mut modes = morse_modes();
    modes.extend(["SSB".to_string(), "AM".to_string(), "FM".to_string()]);
    modes
}

/// Shared validator configuration: JST window 13-14h, 50 MHz only,
/// CW weighted 3 over a default of 2.
pub fn rule_data(cities: Arc<CityBase>) -> RuleData {
    RuleData {
        zone: FixedOffset::east_opt(9 * 3600).expect("UTC+9 is in range"),
        hours: HashSet::from_iter([13, 14]),
        bands_khz: HashSet::from_iter([50_000]),
        cities,
        scores: ScoreTable::new(2).with_entry("CW", 3),
    }
}

/// Builds the full contest definition over an already loaded city base.
pub fn contest(cities: Arc<CityBase>) -> Result<ContestDefinition, SectionError> {
    contest_with_normalizer(cities, Arc::new(PassThrough))
}

/// [`contest`] with an explicit normalization hook at the host seam.
pub fn contest_with_normalizer(
    cities: Arc<CityBase>,
    normalizer: Arc<dyn Normalize>,
) -> Result<ContestDefinition, SectionError> {
    let rules = Arc::new(rule_data(cities));

    let section = |name: String, modes: HashSet<String>| {
        Section::new(
            name,
            SECTION_CODE,
            modes,
            Arc::clone(&rules),
            Arc::clone(&normalizer),
        )
    };

    let sections = vec![
        section(format!("{INNER}{MORSE}"), morse_modes())?,
        section(format!("{INNER}{PHONE}"), phone_modes())?,
        section(format!("{OUTER}{MORSE}"), morse_modes())?,
        section(format!("{OUTER}{PHONE}"), phone_modes())?,
        section(SWLER.to_string(), phone_modes())?,
    ];

    let fourth_november_sunday =
        ScheduleRule::new(11, 4, Weekday::Sun).expect("fourth Sunday is a valid rule");

    Ok(ContestDefinition::new(
        ContestMeta {
            name: "多摩川コンテスト".to_string(),
            host: "APOLLO".to_string(),
            mail: "jk1mgc@example.com".to_string(),
            link: "apollo.c.ooco.jp".to_string(),
            help_ref: "rules/JI1YEG/tama.md".to_string(),
        },
        sections,
        fourth_november_sunday,
        fourth_november_sunday,
        2,
        GRACE_MONTHS,
    ))
}
