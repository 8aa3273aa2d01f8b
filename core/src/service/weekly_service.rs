use crate::error::AttendanceError;
use crate::model::attendance::AttendanceStatus;
use crate::model::schedule::is_class_label;
use crate::model::stats::{Summary, WeekTally};
use crate::model::weekly_record::WeeklyRecord;
use crate::repository::WeeklyRecordRepository;
use crate::service::dto::{SaveWeekRequest, WeekView};
use crate::usecase::summary::{summarize, weekly_tallies};
use chrono::NaiveDate;
use tracing::{debug, info};

pub struct WeeklyService<R: WeeklyRecordRepository> {
    repo: R,
}

impl<R: WeeklyRecordRepository> WeeklyService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn get_week(&self, week_id: Option<&str>) -> Result<WeekView, AttendanceError> {
        let week_id = require_week_id(week_id)?;
        match self.repo.get(week_id)? {
            Some(record) => Ok(WeekView { record, saved: true }),
            None => {
                debug!(week_id, "no record yet, serving template");
                Ok(WeekView {
                    record: WeeklyRecord::template(week_id),
                    saved: false,
                })
            }
        }
    }

    /// Replaces the stored week wholesale; fields left out of the request end up empty.
    pub fn save_week(&self, request: SaveWeekRequest) -> Result<WeeklyRecord, AttendanceError> {
        let week_id = require_week_id(request.week_id.as_deref())?.to_string();
        let record = WeeklyRecord::new(
            week_id,
            request.schedule,
            request.attendance,
            request.extra_classes,
        );
        let saved = self.repo.upsert(record)?;
        info!(week_id = %saved.week_id, "saved weekly record");
        Ok(saved)
    }

    pub fn summary(&self, today: NaiveDate) -> Result<Summary, AttendanceError> {
        let records = self.repo.list_all()?;
        let summary = summarize(&records, today);
        debug!(
            weeks = records.len(),
            scheduled = summary.total_scheduled,
            attended = summary.total_attended,
            "computed summary"
        );
        Ok(summary)
    }

    /// Counts per counted week, oldest first.
    pub fn weekly_breakdown(&self, today: NaiveDate) -> Result<Vec<(String, WeekTally)>, AttendanceError> {
        let records = self.repo.list_all()?;
        let mut rows: Vec<(String, WeekTally)> = weekly_tallies(&records, today)
            .into_iter()
            .map(|(record, tally)| (record.week_id.clone(), tally))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(rows)
    }

    /// Sets one class's status for a week, starting from the template when the
    /// week was never saved. Marking any slot of a merged class marks the class,
    /// which is tracked under its first slot.
    pub fn mark(
        &self,
        week_id: &str,
        day: &str,
        time_slot: &str,
        status: AttendanceStatus,
    ) -> Result<WeeklyRecord, AttendanceError> {
        let mut record = self.get_week(Some(week_id))?.record;

        let unknown = || AttendanceError::UnknownSlot {
            day: day.to_string(),
            time_slot: time_slot.to_string(),
        };
        let schedule = record.schedule.as_ref().ok_or_else(unknown)?;
        let row = schedule.row_for(day).ok_or_else(unknown)?;
        let (day_name, class_items) = row.split_first().ok_or_else(unknown)?;
        let slot = schedule
            .headers
            .iter()
            .skip(1)
            .position(|h| h == time_slot)
            .filter(|&i| class_items.get(i).map(|l| is_class_label(l)).unwrap_or(false))
            .ok_or_else(unknown)?;

        let label = &class_items[slot];
        let first = (0..slot)
            .rev()
            .take_while(|&i| &class_items[i] == label)
            .last()
            .unwrap_or(slot);
        let first_slot = schedule.time_slot(first).ok_or_else(unknown)?.to_string();
        let day_name = day_name.clone();

        record.attendance.set_status(&day_name, &first_slot, status);
        let saved = self.repo.upsert(record)?;
        info!(week_id, day = %day_name, time_slot = %first_slot, ?status, "marked attendance");
        Ok(saved)
    }
}

fn require_week_id(week_id: Option<&str>) -> Result<&str, AttendanceError> {
    match week_id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(AttendanceError::MissingWeekId),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::{AttendanceMap, ExtraClassMap};
    use crate::model::schedule::Schedule;
    use crate::repository::InMemoryWeeklyRecordRepository;
    use anyhow::{anyhow, Result};

    struct FailingRepo;
    impl WeeklyRecordRepository for FailingRepo {
        fn get(&self, _week_id: &str) -> Result<Option<WeeklyRecord>> { Err(anyhow!("store offline")) }
        fn upsert(&self, _record: WeeklyRecord) -> Result<WeeklyRecord> { Err(anyhow!("store offline")) }
        fn list_all(&self) -> Result<Vec<WeeklyRecord>> { Err(anyhow!("store offline")) }
    }

    fn service() -> WeeklyService<InMemoryWeeklyRecordRepository> {
        WeeklyService::new(InMemoryWeeklyRecordRepository::new())
    }

    #[test]
    fn test_get_week_requires_id() {
        let service = service();
        assert!(matches!(service.get_week(None), Err(AttendanceError::MissingWeekId)));
        assert!(matches!(service.get_week(Some("  ")), Err(AttendanceError::MissingWeekId)));
    }

    #[test]
    fn test_unsaved_week_is_template_and_not_persisted() {
        let service = service();
        let view = service.get_week(Some("2025-01-06")).unwrap();
        assert!(!view.saved);
        assert_eq!(view.record.schedule, Some(Schedule::template()));
        assert!(view.record.attendance.is_empty());
        assert!(view.record.extra_classes.is_empty());
        assert!(service.repository().list_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_get_round_trips() {
        let service = service();
        let mut attendance = AttendanceMap::new();
        attendance.set_status("Monday", "8:45-9:40", AttendanceStatus::Present);
        let mut extras = ExtraClassMap::new();
        extras.insert("Math", 1);
        let request = SaveWeekRequest {
            week_id: Some("2025-01-06".to_string()),
            schedule: Some(Schedule::template()),
            attendance: attendance.clone(),
            extra_classes: extras.clone(),
        };

        service.save_week(request).unwrap();
        let view = service.get_week(Some("2025-01-06")).unwrap();
        assert!(view.saved);
        assert_eq!(view.record.attendance, attendance);
        assert_eq!(view.record.extra_classes, extras);
    }

    #[test]
    fn test_save_requires_id() {
        let service = service();
        let err = service.save_week(SaveWeekRequest::default()).unwrap_err();
        assert!(matches!(err, AttendanceError::MissingWeekId));
        assert!(err.is_validation());
    }

    #[test]
    fn test_store_failure_surfaces() {
        let service = WeeklyService::new(FailingRepo);
        let err = service.summary(NaiveDate::from_ymd_opt(2025, 1, 8).unwrap()).unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "store offline");
    }

    #[test]
    fn test_mark_merged_class_uses_first_slot() {
        let service = service();
        let record = service
            .mark("2025-01-06", "monday", "9:40-10:35", AttendanceStatus::Present)
            .unwrap();
        assert_eq!(record.attendance.status("Monday", "8:45-9:40"), AttendanceStatus::Present);
        assert_eq!(record.attendance.status("Monday", "9:40-10:35"), AttendanceStatus::Unset);
        assert!(service.get_week(Some("2025-01-06")).unwrap().saved);
    }

    #[test]
    fn test_mark_rejects_breaks_and_unknown_days() {
        let service = service();
        let err = service
            .mark("2025-01-06", "Monday", "10:35-10:50", AttendanceStatus::Present)
            .unwrap_err();
        assert!(matches!(err, AttendanceError::UnknownSlot { .. }));
        assert!(service
            .mark("2025-01-06", "Saturday", "8:45-9:40", AttendanceStatus::Present)
            .is_err());
    }

    #[test]
    fn test_summary_uses_given_today() {
        let service = service();
        service.mark("2025-01-06", "Friday", "8:45-9:40", AttendanceStatus::Present).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
        assert_eq!(service.summary(wednesday).unwrap().total_attended, 0);
        assert_eq!(service.summary(sunday).unwrap().total_attended, 1);

        let breakdown = service.weekly_breakdown(sunday).unwrap();
        assert_eq!(breakdown, vec![("2025-01-06".to_string(), WeekTally { scheduled: 23, attended: 1 })]);
    }
}
