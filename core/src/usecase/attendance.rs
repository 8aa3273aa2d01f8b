use crate::model::attendance::AttendanceStatus;
use crate::model::schedule::is_class_label;
use crate::model::stats::WeekTally;
use crate::model::weekly_record::WeeklyRecord;
use crate::time::weekday_index_of_name;

/// Counts scheduled and attended classes for one week.
///
/// `due_through` is today's weekday index (Mon=1 .. Sun=7) when the record is
/// the current week; rows for later weekdays are not due yet and are skipped.
/// Past weeks pass `None` and count every row.
///
/// A run of identical consecutive labels is a single class spanning several
/// slots. It is counted once, from the attendance entry of its first slot.
/// Cancelled classes are neither scheduled nor attended, and a class with no
/// entry at all counts as scheduled but not attended. Extra classes are added
/// to `attended` only, and only when the week has a timetable with rows.
pub fn tally_week(record: &WeeklyRecord, due_through: Option<u32>) -> WeekTally {
    let mut tally = WeekTally::default();

    let Some(schedule) = record.schedule.as_ref().filter(|s| !s.is_empty()) else {
        // Without a timetable the week contributes nothing, extra classes included.
        return tally;
    };

    for row in &schedule.rows {
        let Some((day_name, class_items)) = row.split_first() else {
            continue;
        };

        if let Some(today_index) = due_through {
            match weekday_index_of_name(day_name) {
                Some(index) if index <= today_index => {}
                // Later this week, or a day we cannot place.
                _ => continue,
            }
        }

        let mut slot = 0;
        while slot < class_items.len() {
            let label = &class_items[slot];
            let span = class_items[slot..]
                .iter()
                .take_while(|item| *item == label)
                .count();

            if is_class_label(label) {
                let status = schedule
                    .time_slot(slot)
                    .map(|time_slot| record.attendance.status(day_name, time_slot))
                    .unwrap_or_default();

                match status {
                    AttendanceStatus::Cancelled => {}
                    AttendanceStatus::Present => {
                        tally.scheduled += 1;
                        tally.attended += 1;
                    }
                    AttendanceStatus::Absent | AttendanceStatus::Unset => {
                        tally.scheduled += 1;
                    }
                }
            }

            slot += span;
        }
    }

    tally.attended = tally.attended.saturating_add(record.extra_classes.total());
    tally
}
