//! Data exchanged with the REST backend.
//!
//! These are transient values: nothing here is persisted or validated
//! beyond what presentation needs.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Principal
// ---------------------------------------------------------------------------

/// The currently logged-in user as returned by `GET /api/v1/user/self`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Version
// ---------------------------------------------------------------------------

/// Build timestamp in epoch milliseconds.
///
/// The backend has shipped both numeric epoch milliseconds and RFC 3339
/// strings for this field; both deserialize to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildTimestamp(pub i64);

impl BuildTimestamp {
    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for BuildTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Millis(ms) => Ok(Self(ms)),
            RawTimestamp::Text(text) => parse_timestamp_text(&text)
                .map(Self)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {text}"))),
        }
    }
}

fn parse_timestamp_text(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(ms) = text.parse::<i64>() {
        return Some(ms);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Framework block nested in [`VersionInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkInfo {
    pub name: String,
    pub version: String,
    pub timestamp: BuildTimestamp,
    #[serde(default)]
    pub uuid: String,
}

/// Response of `GET /api/version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub application: String,
    pub version: String,
    pub timestamp: BuildTimestamp,
    #[serde(default)]
    pub uuid: String,
    pub framework: FrameworkInfo,
}

impl VersionInfo {
    /// Whether this build is a pre-release snapshot.
    #[must_use]
    pub fn is_snapshot(&self) -> bool {
        self.version.contains("SNAPSHOT")
    }
}

// ---------------------------------------------------------------------------
// Smart-search hits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectHit {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentHit {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityHit {
    pub source: String,
    pub vuln_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseHit {
    pub license_id: String,
    pub name: String,
}
