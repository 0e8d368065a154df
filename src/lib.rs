//! Declarative rule-evaluation core for amateur-radio contest scoring.
//!
//! The crate decides, per record and per section, whether a logged
//! contact is valid, what it counts toward, and what it is worth. Log
//! parsing, persistence, and reporting stay with the host; every
//! operation here is a pure function over the record plus immutable
//! shared reference data.
//!
//! # Examples
//!
//! Verifying one contact against the shipped Tamagawa definition:
//! ```
//! use std::sync::Arc;
//!
//! use chrono::{TimeZone, Utc};
//! use contestdef::{
//!     record::{ContactRecord, Exchange},
//!     reference::{City, CityBase},
//!     tama,
//! };
//!
//! let cities = Arc::new(CityBase::from_entries(vec![City {
//!     code: "100110".to_string(),
//!     name: "川崎市川崎区".to_string(),
//! }]));
//! let contest = tama::contest(Arc::clone(&cities)).expect("build contest");
//!
//! // 04:10 UTC is 13:10 JST, inside the operating window.
//! let rec = ContactRecord {
//!     time: Utc.with_ymd_and_hms(2024, 11, 24, 4, 10, 0).unwrap(),
//!     call: "JA1ZLO".to_string(),
//!     band_khz: 50_000,
//!     mode: "CW".to_string(),
//!     sent: Exchange { code: "100110".to_string() },
//!     rcvd: Exchange { code: "100110".to_string() },
//! };
//!
//! let morse = &contest.sections()[0];
//! let outcome = morse.verify(&rec).expect("pass-through normalizer");
//! assert_eq!(outcome.points(), Some(3));
//! ```
//!
//! The host owns all accumulation: it collects [`keys::UniqueKey`] and
//! [`keys::EntityKey`] sets per section, sums accepted points, and folds
//! both into the section total with [`section::Section::result`].
#![deny(missing_docs)]

/// Contest definition and identity attributes.
pub mod contest;
/// Duplicate-suppression and multiplier key derivation.
pub mod keys;
/// Logged-contact record types.
pub mod record;
/// City reference data and loader.
pub mod reference;
/// Recurring-date and contest-year arithmetic.
pub mod schedule;
/// Mode weighting table.
pub mod score;
/// Scoring sections and the normalization seam.
pub mod section;
/// Shipped Tamagawa contest definition.
pub mod tama;
/// Shared primitive aliases.
pub mod types;
/// Field validators and the record verifier.
pub mod verify;
