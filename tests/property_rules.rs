use std::sync::Arc;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use contestdef::{
    keys::{entity_key, unique_key},
    record::{ContactRecord, Exchange},
    reference::{City, CityBase},
    score::ScoreTable,
    section::PassThrough,
    tama,
    verify::{verify_record, RejectReason, ValidationOutcome},
};

fn known_cities() -> Vec<&'static str> {
    vec!["100110", "1002", "1003"]
}

fn base() -> Arc<CityBase> {
    Arc::new(CityBase::from_entries(
        known_cities()
            .into_iter()
            .map(|code| City {
                code: code.to_string(),
                name: format!("city {code}"),
            })
            .collect(),
    ))
}

fn record(hour_utc: u32, code: &str, band_khz: u32, mode: &str) -> ContactRecord {
    ContactRecord {
        time: Utc
            .with_ymd_and_hms(2024, 11, 24, hour_utc, 30, 0)
            .single()
            .expect("valid instant"),
        call: "JA1ZLO".to_string(),
        band_khz,
        mode: mode.to_string(),
        sent: Exchange {
            code: "1002".to_string(),
        },
        rcvd: Exchange {
            code: code.to_string(),
        },
    }
}

fn mode_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("CW".to_string()),
        Just("SSB".to_string()),
        Just("AM".to_string()),
        Just("FM".to_string()),
        Just("RTTY".to_string()),
        "[A-Z0-9]{1,6}",
    ]
}

fn code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("100110".to_string()),
        Just("1002".to_string()),
        Just("9999".to_string()),
        "[0-9]{4,6}",
    ]
}

proptest! {
    // Oracle: the verifier must always report the earliest failing
    // check of time > code > band > mode, and accept otherwise.
    #[test]
    fn verifier_reports_earliest_failure(
        hour_utc in 0u32..24,
        code in code_strategy(),
        band_khz in prop_oneof![Just(50_000u32), 1_000u32..60_000],
        mode in mode_strategy(),
    ) {
        let rules = tama::rule_data(base());
        let morse: hashbrown::HashSet<String> =
            hashbrown::HashSet::from_iter(["CW".to_string()]);
        let rec = record(hour_utc, &code, band_khz, &mode);

        let hour_jst = (hour_utc + 9) % 24;
        let expected = if !(hour_jst == 13 || hour_jst == 14) {
            ValidationOutcome::Rejected { reason: RejectReason::Time }
        } else if !known_cities().contains(&code.as_str()) {
            ValidationOutcome::Rejected { reason: RejectReason::Code }
        } else if band_khz != 50_000 {
            ValidationOutcome::Rejected { reason: RejectReason::Band }
        } else if mode != "CW" {
            ValidationOutcome::Rejected { reason: RejectReason::Mode }
        } else {
            ValidationOutcome::Accepted { points: 3 }
        };

        prop_assert_eq!(verify_record(&rec, &morse, &rules), expected);
    }

    // The score table is total: any string resolves, listed modes to
    // their explicit weight and everything else to the default.
    #[test]
    fn score_lookup_is_total(mode in "\\PC{0,12}", default in -5i32..50, weight in -5i32..50) {
        let table = ScoreTable::new(default).with_entry("CW", weight);
        let got = table.score_for(&mode);
        if mode == "CW" {
            prop_assert_eq!(got, weight);
        } else {
            prop_assert_eq!(got, default);
        }
    }

    // result(0, n) = 0 and result(s, n) = s * n for positive s.
    #[test]
    fn result_fold_laws(score in 1i64..10_000, mults in 0usize..1_000) {
        let contest = tama::contest(base()).expect("build contest");
        let section = &contest.sections()[0];

        prop_assert_eq!(section.result(0, mults), 0);
        prop_assert_eq!(section.result(score, mults), score * mults as i64);
    }

    // Keys depend only on their designated field: perturbing band,
    // mode, or hour never changes either key.
    #[test]
    fn keys_ignore_unrelated_fields(
        hour_a in 0u32..24,
        hour_b in 0u32..24,
        band_a in 1_000u32..60_000,
        band_b in 1_000u32..60_000,
        mode in mode_strategy(),
    ) {
        let a = record(hour_a, "100110", band_a, &mode);
        let b = record(hour_b, "100110", band_b, "CW");

        prop_assert_eq!(unique_key(&a), unique_key(&b));
        prop_assert_eq!(entity_key(&a), entity_key(&b));
        prop_assert_eq!(unique_key(&a), unique_key(&a));
        prop_assert_eq!(entity_key(&a), entity_key(&a));
    }

    // Section::verify with the pass-through normalizer agrees with the
    // free verifier for every generated record.
    #[test]
    fn section_verify_agrees_with_free_function(
        hour_utc in 0u32..24,
        code in code_strategy(),
        mode in mode_strategy(),
    ) {
        let cities = base();
        let contest = tama::contest_with_normalizer(
            Arc::clone(&cities),
            Arc::new(PassThrough),
        )
        .expect("build contest");
        let section = &contest.sections()[0];
        let rules = tama::rule_data(cities);
        let rec = record(hour_utc, &code, 50_000, &mode);

        let via_section = section.verify(&rec).expect("pass-through");
        let direct = verify_record(&rec, section.modes(), &rules);
        prop_assert_eq!(via_section, direct);
    }
}
