use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier shared by contacts and events.
///
/// Generated ids are UUIDv7 strings: time-ordered, so they sort by creation
/// time as plain strings. Ids read back from a file are kept verbatim even
/// when malformed; collections refuse those on insert.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Only the canonical lowercase hyphenated spelling counts, so one UUID
    /// cannot enter a collection twice under different spellings.
    pub fn is_well_formed(&self) -> bool {
        Uuid::parse_str(&self.0).is_ok_and(|uuid| uuid.hyphenated().to_string() == self.0)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = Uuid::parse_str(s.trim())?;
        Ok(Self(parsed.to_string()))
    }
}
