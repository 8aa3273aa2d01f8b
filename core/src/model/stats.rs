use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Scheduled and attended class counts for a single week. `attended` is
/// signed because extra-class counts may be negative corrections.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekTally {
    pub scheduled: u64,
    pub attended: i64,
}

/// Grand totals over every counted week.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_scheduled: u64,
    pub total_attended: i64,
}

impl Summary {
    /// Attended over scheduled. Extra classes only raise the numerator, so this
    /// can exceed 1.0.
    pub fn ratio(&self) -> Option<f64> {
        if self.total_scheduled == 0 {
            None
        } else {
            Some(self.total_attended as f64 / self.total_scheduled as f64)
        }
    }

    pub fn percentage(&self) -> Option<f64> {
        self.ratio().map(|r| r * 100.0)
    }
}

impl AddAssign<WeekTally> for Summary {
    fn add_assign(&mut self, tally: WeekTally) {
        self.total_scheduled = self.total_scheduled.saturating_add(tally.scheduled);
        self.total_attended = self.total_attended.saturating_add(tally.attended);
    }
}
