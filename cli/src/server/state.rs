use std::sync::Arc;

use attendly_core::{FileWeeklyRecordRepository, WeeklyRecordRepository, WeeklyService};

use crate::config::Config;

pub type SharedService = Arc<WeeklyService<Arc<dyn WeeklyRecordRepository>>>;

#[derive(Clone)]
pub struct AppState {
    pub service: SharedService,
}

impl AppState {
    pub fn new(repo: Arc<dyn WeeklyRecordRepository>) -> Self {
        Self {
            service: Arc::new(WeeklyService::new(repo)),
        }
    }

    /// Opens the file store under the configured data directory.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let repo = FileWeeklyRecordRepository::new(Some(config.data_dir.clone()))?;
        Ok(Self::new(Arc::new(repo)))
    }
}
