use std::sync::Arc;

use crate::model::weekly_record::WeeklyRecord;
use anyhow::Result;

/// Keyed storage of one record per week identifier.
pub trait WeeklyRecordRepository: Send + Sync {
    fn get(&self, week_id: &str) -> Result<Option<WeeklyRecord>>;
    /// Replaces schedule, attendance and extra classes of the record with the
    /// same week id, or inserts it.
    fn upsert(&self, record: WeeklyRecord) -> Result<WeeklyRecord>;
    fn list_all(&self) -> Result<Vec<WeeklyRecord>>;
}

impl<T: WeeklyRecordRepository + ?Sized> WeeklyRecordRepository for Arc<T> {
    fn get(&self, week_id: &str) -> Result<Option<WeeklyRecord>> {
        (**self).get(week_id)
    }

    fn upsert(&self, record: WeeklyRecord) -> Result<WeeklyRecord> {
        (**self).upsert(record)
    }

    fn list_all(&self) -> Result<Vec<WeeklyRecord>> {
        (**self).list_all()
    }
}
