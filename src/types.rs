//! Shared primitive aliases used across the rule engine.

/// Operating band expressed in kHz.
pub type BandKhz = u32;
/// Point value assigned to an accepted contact.
pub type Points = i32;
/// Calendar year of a contest edition.
pub type Year = i32;
/// Hour of day, 0..=23, in the contest time zone.
pub type Hour = u32;
