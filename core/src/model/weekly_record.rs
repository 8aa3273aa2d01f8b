use serde::{Deserialize, Serialize};

use crate::model::attendance::{AttendanceMap, ExtraClassMap};
use crate::model::schedule::Schedule;

/// The persisted unit: everything tracked for one week, keyed by the ISO date
/// of that week's Monday.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRecord {
    pub week_id: String,
    #[serde(default)]
    pub schedule: Option<Schedule>,
    #[serde(default)]
    pub attendance: AttendanceMap,
    #[serde(default)]
    pub extra_classes: ExtraClassMap,
}

impl WeeklyRecord {
    pub fn new(
        week_id: impl Into<String>,
        schedule: Option<Schedule>,
        attendance: AttendanceMap,
        extra_classes: ExtraClassMap,
    ) -> Self {
        Self {
            week_id: week_id.into(),
            schedule,
            attendance,
            extra_classes,
        }
    }

    /// What a week looks like before anything has been saved for it.
    pub fn template(week_id: impl Into<String>) -> Self {
        Self::new(
            week_id,
            Some(Schedule::template()),
            AttendanceMap::new(),
            ExtraClassMap::new(),
        )
    }
}
