use serde::{Deserialize, Serialize};

use crate::model::attendance::{AttendanceMap, ExtraClassMap};
use crate::model::schedule::Schedule;
use crate::model::weekly_record::WeeklyRecord;

/// A week as handed to clients: the stored record, or the default timetable
/// with empty attendance when nothing was saved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekView {
    pub record: WeeklyRecord,
    pub saved: bool,
}

/// Body of a save. Every field is optional on the wire; a missing `weekId` is
/// rejected by the service, the rest default to empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SaveWeekRequest {
    #[serde(default)]
    pub week_id: Option<String>,
    #[serde(default)]
    pub schedule: Option<Schedule>,
    #[serde(default)]
    pub attendance: AttendanceMap,
    #[serde(default)]
    pub extra_classes: ExtraClassMap,
}
