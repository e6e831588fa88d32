//! Identifier types shared across the crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned to a compound by the lookup service
/// (a PubChem CID for the PubChem gateway).
///
/// The value is only ever echoed back to the service or formatted into a URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompoundId(u64);

impl CompoundId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for CompoundId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CompoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
