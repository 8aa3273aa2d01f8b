use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Cancelled,
    #[default]
    Unset,
}

impl AttendanceStatus {
    /// Short mark used when rendering a week grid.
    pub fn mark(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "P",
            AttendanceStatus::Absent => "A",
            AttendanceStatus::Cancelled => "C",
            AttendanceStatus::Unset => "-",
        }
    }

    /// Name as stored in a record.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Cancelled => "cancelled",
            AttendanceStatus::Unset => "unset",
        }
    }

    /// Reads a stored status value. Only the exact lowercase names are
    /// recognized; anything else is `Unset`.
    pub fn from_stored(value: &Value) -> Self {
        match value.as_str() {
            Some("present") => AttendanceStatus::Present,
            Some("absent") => AttendanceStatus::Absent,
            Some("cancelled") => AttendanceStatus::Cancelled,
            _ => AttendanceStatus::Unset,
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "present" | "p" => Ok(AttendanceStatus::Present),
            "absent" | "a" => Ok(AttendanceStatus::Absent),
            "cancelled" | "canceled" | "c" => Ok(AttendanceStatus::Cancelled),
            "unset" | "clear" | "-" => Ok(AttendanceStatus::Unset),
            _ => Err(anyhow::anyhow!("Unknown attendance status: {}", s)),
        }
    }
}

/// One recorded slot. Only `status` is interpreted. It is kept exactly as the
/// client sent it, as is anything else stored alongside it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AttendanceEntry {
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Distinguishes `"status": null` (Some(Null)) from a missing key (None).
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl AttendanceEntry {
    pub fn status(&self) -> AttendanceStatus {
        self.status
            .as_ref()
            .map(AttendanceStatus::from_stored)
            .unwrap_or_default()
    }
}

/// Weekday name -> time-slot label -> entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct AttendanceMap(pub BTreeMap<String, BTreeMap<String, AttendanceEntry>>);

impl AttendanceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status recorded for a slot; missing entries read as `Unset`.
    pub fn status(&self, day: &str, time_slot: &str) -> AttendanceStatus {
        self.0
            .get(day)
            .and_then(|slots| slots.get(time_slot))
            .map(AttendanceEntry::status)
            .unwrap_or_default()
    }

    /// Sets the status of one slot, keeping any other fields of an existing entry.
    pub fn set_status(&mut self, day: &str, time_slot: &str, status: AttendanceStatus) {
        let entry = self
            .0
            .entry(day.to_string())
            .or_default()
            .entry(time_slot.to_string())
            .or_default();
        entry.status = Some(Value::String(status.as_str().to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A count of extra sessions for one subject. Integers count as they are,
/// negatives included; anything else is kept verbatim but counts as zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ExtraCount {
    Count(i64),
    Other(Value),
}

impl ExtraCount {
    pub fn value(&self) -> i64 {
        match self {
            ExtraCount::Count(n) => *n,
            // Integers past i64::MAX land here.
            ExtraCount::Other(Value::Number(n)) if n.is_u64() => i64::MAX,
            ExtraCount::Other(_) => 0,
        }
    }
}

/// Subject name -> extra sessions attended outside the timetable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct ExtraClassMap(pub BTreeMap<String, ExtraCount>);

impl ExtraClassMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subject: &str, count: i64) {
        self.0.insert(subject.to_string(), ExtraCount::Count(count));
    }

    /// Sum of all counts, clamped to the `i64` range.
    pub fn total(&self) -> i64 {
        self.0
            .values()
            .map(ExtraCount::value)
            .fold(0i64, |acc, n| acc.saturating_add(n))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
