//! Key derivation for duplicate suppression and multiplier counting.

use serde::{Deserialize, Serialize};

use crate::record::ContactRecord;

/// Per-station key: equal for records from the same call-sign.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniqueKey(String);

impl UniqueKey {
    /// The call-sign this key was derived from.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Multiplier key: equal for records carrying the same received code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityKey(String);

impl EntityKey {
    /// The received code this key was derived from.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Derives the per-station key from the call-sign alone.
pub fn unique_key(rec: &ContactRecord) -> UniqueKey {
    UniqueKey(rec.call.clone())
}

/// Derives the multiplier key from the received code alone.
pub fn entity_key(rec: &ContactRecord) -> EntityKey {
    EntityKey(rec.rcvd.code.clone())
}
