use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// A captured lead as stored in the leads file.
///
/// Every data field is nullable: a save is best-effort and passes whatever
/// the conversation collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    /// Moment the lead was saved (RFC 3339 / ISO-8601 in the file).
    #[serde(with = "iso_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    /// Exam or course the prospect is interested in.
    pub interest: Option<String>,
    /// When they plan to start (free text: "now", "soon", "later", ...).
    pub timeline: Option<String>,
}

impl LeadRecord {
    /// Build a record from a draft, stamping it with `timestamp`.
    pub fn from_draft(draft: LeadDraft, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            name: draft.name,
            email: draft.email,
            role: draft.role,
            interest: draft.interest,
            timeline: draft.timeline,
        }
    }
}

/// Lead fields collected so far in one conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub interest: Option<String>,
    pub timeline: Option<String>,
}

impl LeadDraft {
    /// Overwrite a single field. No merge, no validation.
    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Role => self.role = value,
            LeadField::Interest => self.interest = value,
            LeadField::Timeline => self.timeline = value,
        }
    }

    pub fn get(&self, field: LeadField) -> Option<&str> {
        match field {
            LeadField::Name => self.name.as_deref(),
            LeadField::Email => self.email.as_deref(),
            LeadField::Role => self.role.as_deref(),
            LeadField::Interest => self.interest.as_deref(),
            LeadField::Timeline => self.timeline.as_deref(),
        }
    }

    /// Fields that have not been collected yet, in prompt order.
    pub fn missing_fields(&self) -> Vec<LeadField> {
        LeadField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }
}

/// The five lead fields the agent elicits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadField {
    Name,
    Email,
    Role,
    Interest,
    Timeline,
}

impl LeadField {
    pub const ALL: [LeadField; 5] = [
        LeadField::Name,
        LeadField::Email,
        LeadField::Role,
        LeadField::Interest,
        LeadField::Timeline,
    ];
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadField::Name => write!(f, "name"),
            LeadField::Email => write!(f, "email"),
            LeadField::Role => write!(f, "role"),
            LeadField::Interest => write!(f, "interest"),
            LeadField::Timeline => write!(f, "timeline"),
        }
    }
}

impl FromStr for LeadField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(LeadField::Name),
            "email" => Ok(LeadField::Email),
            "role" => Ok(LeadField::Role),
            "interest" => Ok(LeadField::Interest),
            "timeline" => Ok(LeadField::Timeline),
            other => Err(format!("unknown lead field: '{other}'")),
        }
    }
}

/// Timestamps are written as RFC 3339. Older files carry naive ISO-8601
/// strings in the writer's local time; those are read as `Local` and
/// converted to UTC.
mod iso_timestamp {
    use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(ts.with_timezone(&Utc));
        }
        let naive = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(serde::de::Error::custom)?;
        // A wall time skipped by a DST jump has no local instant.
        Ok(Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| naive.and_utc()))
    }
}
