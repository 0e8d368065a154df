use std::sync::Arc;

use chrono::{NaiveDate, Weekday};

use contestdef::{
    reference::CityBase,
    schedule::{
        deadline_after, months_between, nth_weekday_of_month, resolve_contest_year, ScheduleError,
        ScheduleRule,
    },
    tama,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn fourth_sunday_of_november() {
    assert_eq!(
        nth_weekday_of_month(2024, 11, 4, Weekday::Sun),
        Some(date(2024, 11, 24))
    );
    assert_eq!(
        nth_weekday_of_month(2025, 11, 4, Weekday::Sun),
        Some(date(2025, 11, 23))
    );
    assert_eq!(
        nth_weekday_of_month(2026, 11, 4, Weekday::Sun),
        Some(date(2026, 11, 22))
    );
}

#[test]
fn first_occurrence_lands_in_first_week() {
    // November 2024 opens on a Friday.
    assert_eq!(
        nth_weekday_of_month(2024, 11, 1, Weekday::Fri),
        Some(date(2024, 11, 1))
    );
    assert_eq!(
        nth_weekday_of_month(2024, 11, 1, Weekday::Sun),
        Some(date(2024, 11, 3))
    );
}

#[test]
fn nonexistent_occurrence_is_none() {
    // February 2023 has exactly four of each weekday.
    assert_eq!(nth_weekday_of_month(2023, 2, 5, Weekday::Wed), None);
    assert_eq!(nth_weekday_of_month(2024, 11, 0, Weekday::Sun), None);
    assert_eq!(nth_weekday_of_month(2024, 13, 1, Weekday::Sun), None);
}

#[test]
fn month_span_folds_years_and_ignores_days() {
    let opening = date(2024, 11, 24);
    assert_eq!(months_between(opening, date(2025, 2, 1)), 3);
    assert_eq!(months_between(opening, date(2025, 9, 1)), 10);
    assert_eq!(months_between(opening, date(2024, 11, 30)), 0);
    assert_eq!(months_between(opening, date(2024, 10, 1)), -1);
}

#[test]
fn contest_year_keeps_edition_within_grace() {
    let opening = |_year| date(2024, 11, 24);
    assert_eq!(resolve_contest_year(opening, 9, date(2025, 2, 1)), 2024);
}

#[test]
fn contest_year_rolls_forward_past_grace() {
    let opening = |_year| date(2024, 11, 24);
    assert_eq!(resolve_contest_year(opening, 9, date(2025, 9, 1)), 2025);
}

#[test]
fn contest_year_boundary_equality_stays_current() {
    // Exactly nine months of span resolves to the current edition;
    // only a strictly greater span advances it.
    let opening = |_year| date(2024, 11, 24);
    assert_eq!(resolve_contest_year(opening, 9, date(2025, 8, 31)), 2024);
}

#[test]
fn deadline_is_two_weeks_after_opening() {
    assert_eq!(deadline_after(date(2024, 11, 24), 2), date(2024, 12, 8));
}

#[test]
fn schedule_rule_rejects_unsafe_ordinals() {
    assert_eq!(
        ScheduleRule::new(11, 5, Weekday::Sun),
        Err(ScheduleError::OrdinalOutOfRange(5))
    );
    assert_eq!(
        ScheduleRule::new(13, 4, Weekday::Sun),
        Err(ScheduleError::MonthOutOfRange(13))
    );
}

#[test]
fn tama_session_dates() {
    let contest = tama::contest(Arc::new(CityBase::empty())).expect("build contest");

    assert_eq!(contest.start_day(2024), date(2024, 11, 24));
    assert_eq!(contest.final_day(2024), date(2024, 11, 24));
    assert_eq!(contest.deadline(2024), date(2024, 12, 8));

    // The 2025 edition opens in November; February sits well inside
    // the grace window, so the year does not roll forward.
    assert_eq!(contest.year_on(date(2025, 2, 1)), 2025);
    // Right after the edition closes the year still names it.
    assert_eq!(contest.year_on(date(2025, 12, 1)), 2025);
}
