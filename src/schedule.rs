//! Pure calendar arithmetic for recurring contest dates.

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::types::Year;

/// Errors raised when constructing a [`ScheduleRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// Month outside 1..=12.
    MonthOutOfRange(u32),
    /// Ordinal outside 1..=4; a fifth occurrence does not exist in
    /// every month.
    OrdinalOutOfRange(u32),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MonthOutOfRange(m) => write!(f, "month {m} outside 1..=12"),
            Self::OrdinalOutOfRange(n) => write!(f, "ordinal {n} outside 1..=4"),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Returns the date of the `nth` occurrence of `weekday` in `month`.
///
/// `nth` is 1-based. `None` when the occurrence does not exist, either
/// because the arguments are out of range or because the month has only
/// four such weekdays.
pub fn nth_weekday_of_month(
    year: Year,
    month: u32,
    nth: u32,
    weekday: Weekday,
) -> Option<NaiveDate> {
    if nth == 0 {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let to_first_hit = i64::from(weekday.num_days_from_monday())
        - i64::from(first.weekday().num_days_from_monday());
    let days = to_first_hit.rem_euclid(7) + 7 * (i64::from(nth) - 1);
    let date = first.checked_add_signed(Duration::days(days))?;
    (date.month() == month).then_some(date)
}

/// Whole-month span from `from` to `to`, measured as the calendar-month
/// index difference with years folded in. Days within the month do not
/// participate; negative when `to` precedes `from`.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}

/// Resolves the contest year that `today` falls into.
///
/// Evaluates `opening_day` for the current calendar year and keeps the
/// returned edition's year while the month span from its opening day to
/// `today` stays within `grace_months`. Once that span strictly exceeds
/// the grace period the resolved year rolls forward to the next edition.
pub fn resolve_contest_year<F>(opening_day: F, grace_months: u32, today: NaiveDate) -> Year
where
    F: Fn(Year) -> NaiveDate,
{
    let opening = opening_day(today.year());
    let span = months_between(opening, today);
    if span > grace_months as i32 {
        opening.year() + 1
    } else {
        opening.year()
    }
}

/// [`resolve_contest_year`] evaluated at the present moment.
pub fn resolve_contest_year_now<F>(opening_day: F, grace_months: u32) -> Year
where
    F: Fn(Year) -> NaiveDate,
{
    resolve_contest_year(opening_day, grace_months, Utc::now().date_naive())
}

/// Submission deadline: opening date plus a fixed number of weeks.
pub fn deadline_after(opening: NaiveDate, weeks: u32) -> NaiveDate {
    opening + Duration::weeks(i64::from(weeks))
}

/// Recurring "nth weekday of a month" date within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRule {
    month: u32,
    nth: u32,
    weekday: Weekday,
}

impl ScheduleRule {
    /// Builds a rule, rejecting occurrences that are not guaranteed to
    /// exist in every year.
    pub fn new(month: u32, nth: u32, weekday: Weekday) -> Result<Self, ScheduleError> {
        if !(1..=12).contains(&month) {
            return Err(ScheduleError::MonthOutOfRange(month));
        }
        if !(1..=4).contains(&nth) {
            return Err(ScheduleError::OrdinalOutOfRange(nth));
        }
        Ok(Self {
            month,
            nth,
            weekday,
        })
    }

    /// Date of this rule's occurrence in `year`.
    pub fn resolve(&self, year: Year) -> NaiveDate {
        nth_weekday_of_month(year, self.month, self.nth, self.weekday)
            .expect("first..=fourth occurrence exists in every month")
    }
}
