//! Logged-contact record and exchange types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::BandKhz;

/// One side of the exchanged contest report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Exchange {
    /// Identifying city/location code carried in the exchange.
    pub code: String,
}

/// Fully normalized logged contact, immutable once produced.
///
/// The external normalizer builds these from raw log lines; this crate
/// only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Contact instant, zoned to UTC.
    pub time: DateTime<Utc>,
    /// Worked station call-sign.
    pub call: String,
    /// Operating band in kHz.
    pub band_khz: BandKhz,
    /// Emission mode token, e.g. `"CW"` or `"SSB"`.
    pub mode: String,
    /// Exchange sent to the worked station.
    pub sent: Exchange,
    /// Exchange received from the worked station.
    pub rcvd: Exchange,
}

impl ContactRecord {
    /// Returns the received identifying code.
    pub fn rcvd_code(&self) -> &str {
        &self.rcvd.code
    }
}
