use chrono::NaiveDate;

use crate::model::attendance::{AttendanceMap, AttendanceStatus, ExtraClassMap};
use crate::model::schedule::Schedule;
use crate::model::stats::{Summary, WeekTally};
use crate::model::weekly_record::WeeklyRecord;
use crate::usecase::summary::{summarize, weekly_tallies};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn template_week(week_id: &str) -> WeeklyRecord {
    WeeklyRecord::template(week_id)
}

#[test]
fn test_empty_store_summarizes_to_zero() {
    let records: Vec<WeeklyRecord> = Vec::new();
    assert_eq!(summarize(&records, d(2025, 1, 8)), Summary::default());
}

#[test]
fn test_past_weeks_count_in_full() {
    let mut first = template_week("2024-12-30");
    first.attendance.set_status("Monday", "8:45-9:40", AttendanceStatus::Present);
    first.attendance.set_status("Friday", "8:45-9:40", AttendanceStatus::Present);
    let second = template_week("2024-12-23");

    // Today is the Monday after both weeks, and there is no record for it.
    let summary = summarize(&[first, second], d(2025, 1, 6));
    assert_eq!(summary, Summary { total_scheduled: 46, total_attended: 2 });
}

#[test]
fn test_future_week_is_excluded() {
    let mut future = template_week("2025-01-13");
    future.extra_classes.insert("Math", 5);
    let summary = summarize(&[future], d(2025, 1, 8));
    assert_eq!(summary, Summary::default());
}

#[test]
fn test_current_week_counts_only_elapsed_days() {
    let mut current = template_week("2025-01-06");
    current.attendance.set_status("Tuesday", "8:45-9:40", AttendanceStatus::Present);
    current.attendance.set_status("Thursday", "8:45-9:40", AttendanceStatus::Present);

    // Wednesday: Mon 4 + Tue 5 + Wed 5; Thursday's present mark is not due yet.
    let summary = summarize(&[current.clone()], d(2025, 1, 8));
    assert_eq!(summary, Summary { total_scheduled: 14, total_attended: 1 });

    // Sunday closes the week.
    let summary = summarize(&[current], d(2025, 1, 12));
    assert_eq!(summary, Summary { total_scheduled: 23, total_attended: 2 });
}

#[test]
fn test_extra_classes_fold_into_attended() {
    let mut week = template_week("2024-12-30");
    week.extra_classes.insert("Math", 2);
    week.extra_classes.insert("Physics", 1);

    let summary = summarize(&[week], d(2025, 1, 8));
    assert_eq!(summary, Summary { total_scheduled: 23, total_attended: 3 });
}

#[test]
fn test_extra_classes_without_schedule_count_nothing() {
    let mut extras = ExtraClassMap::new();
    extras.insert("Math", 2);
    extras.insert("Physics", 1);
    let no_schedule = WeeklyRecord::new("2024-12-30", None, AttendanceMap::new(), extras.clone());
    let no_rows = WeeklyRecord::new("2024-12-23", Some(Schedule::default()), AttendanceMap::new(), extras);

    let summary = summarize(&[no_schedule, no_rows], d(2025, 1, 8));
    assert_eq!(summary, Summary::default());
    assert_eq!(summary.ratio(), None);
}

#[test]
fn test_negative_extra_classes_are_subtracted() {
    let mut week = template_week("2024-12-30");
    week.extra_classes.insert("Math", 3);
    week.extra_classes.insert("Fix", -1);

    let summary = summarize(&[week], d(2025, 1, 8));
    assert_eq!(summary.total_attended, 2);
}

#[test]
fn test_oversized_extra_classes_saturate() {
    let mut week = template_week("2024-12-30");
    week.extra_classes = serde_json::from_value(serde_json::json!({
        "A": 18446744073709551615u64,
        "B": 1
    }))
    .unwrap();
    let other = template_week("2024-12-23");
    let mut more = template_week("2024-12-16");
    more.extra_classes.insert("C", 5);

    let summary = summarize(&[week, other, more], d(2025, 1, 8));
    assert_eq!(summary, Summary { total_scheduled: 69, total_attended: i64::MAX });
}

#[test]
fn test_unreadable_week_id_is_skipped() {
    let broken = template_week("not-a-date");
    let good = template_week("2024-12-30");
    let summary = summarize(&[broken, good], d(2025, 1, 8));
    assert_eq!(summary.total_scheduled, 23);
}

#[test]
fn test_mid_week_id_after_current_monday_is_excluded() {
    // Saved under a Wednesday of the current week: later than its Monday.
    let week = template_week("2025-01-08");
    let summary = summarize(&[week], d(2025, 1, 7));
    assert_eq!(summary, Summary::default());
}

#[test]
fn test_mid_week_id_before_current_monday_counts_in_full() {
    let week = template_week("2025-01-01");
    let summary = summarize(&[week], d(2025, 1, 7));
    assert_eq!(summary.total_scheduled, 23);
}

#[test]
fn test_weekly_tallies_keep_per_week_counts() {
    let mut older = template_week("2024-12-30");
    older.attendance.set_status("Monday", "8:45-9:40", AttendanceStatus::Present);
    let current = template_week("2025-01-06");
    let future = template_week("2025-01-13");
    let records = vec![older, current, future];

    let tallies = weekly_tallies(&records, d(2025, 1, 6));
    let ids: Vec<&str> = tallies.iter().map(|(r, _)| r.week_id.as_str()).collect();
    assert_eq!(ids, vec!["2024-12-30", "2025-01-06"]);
    assert_eq!(tallies[0].1, WeekTally { scheduled: 23, attended: 1 });
    assert_eq!(tallies[1].1, WeekTally { scheduled: 4, attended: 0 });
}
