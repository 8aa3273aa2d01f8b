use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};

use crate::model::weekly_record::WeeklyRecord;
use crate::repository::traits::WeeklyRecordRepository;

/// Records held in process memory only; nothing is written to disk.
#[derive(Default)]
pub struct InMemoryWeeklyRecordRepository {
    records: Mutex<BTreeMap<String, WeeklyRecord>>,
}

impl InMemoryWeeklyRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = WeeklyRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (r.week_id.clone(), r))
            .collect();
        Self {
            records: Mutex::new(map),
        }
    }
}

impl WeeklyRecordRepository for InMemoryWeeklyRecordRepository {
    fn get(&self, week_id: &str) -> Result<Option<WeeklyRecord>> {
        let records = self.records.lock().map_err(|_| anyhow!("Record store lock poisoned"))?;
        Ok(records.get(week_id).cloned())
    }

    fn upsert(&self, record: WeeklyRecord) -> Result<WeeklyRecord> {
        let mut records = self.records.lock().map_err(|_| anyhow!("Record store lock poisoned"))?;
        records.insert(record.week_id.clone(), record.clone());
        Ok(record)
    }

    fn list_all(&self) -> Result<Vec<WeeklyRecord>> {
        let records = self.records.lock().map_err(|_| anyhow!("Record store lock poisoned"))?;
        Ok(records.values().cloned().collect())
    }
}
