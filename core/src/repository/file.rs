use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::model::weekly_record::WeeklyRecord;
use crate::repository::traits::WeeklyRecordRepository;

const DEFAULT_DIR_NAME: &str = ".attendly";
const RECORDS_FILE_NAME: &str = "weekly_records.json";

/// All weekly records in one JSON array on disk.
pub struct FileWeeklyRecordRepository {
    file_path: PathBuf,
    // Serializes read-modify-write cycles so saves to different weeks never drop each other.
    lock: Mutex<()>,
}

impl FileWeeklyRecordRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&path)
            .with_context(|| format!("Could not create data directory {}", path.display()))?;
        path.push(RECORDS_FILE_NAME);

        if !path.exists() {
            write_records(&path, &[])?;
        }

        Ok(FileWeeklyRecordRepository {
            file_path: path,
            lock: Mutex::new(()),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_records(&self) -> Result<Vec<WeeklyRecord>> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("Could not open {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let records = serde_json::from_reader(reader)
            .with_context(|| format!("Could not parse {}", self.file_path.display()))?;
        Ok(records)
    }
}

/// `~/.attendly`, or an error when no home directory can be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME))
}

fn write_records(path: &Path, records: &[WeeklyRecord]) -> Result<()> {
    // Write next to the target and rename over it, so readers see either the
    // old or the new file.
    let tmp_path = path.with_extension("json.tmp");
    {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}

impl WeeklyRecordRepository for FileWeeklyRecordRepository {
    fn get(&self, week_id: &str) -> Result<Option<WeeklyRecord>> {
        let _guard = self.lock.lock().map_err(|_| anyhow!("Record store lock poisoned"))?;
        let records = self.read_records()?;
        Ok(records.into_iter().find(|r| r.week_id == week_id))
    }

    fn upsert(&self, record: WeeklyRecord) -> Result<WeeklyRecord> {
        let _guard = self.lock.lock().map_err(|_| anyhow!("Record store lock poisoned"))?;
        let mut records = self.read_records()?;
        if let Some(pos) = records.iter().position(|r| r.week_id == record.week_id) {
            debug!(week_id = %record.week_id, "replacing weekly record");
            records[pos] = record.clone();
        } else {
            debug!(week_id = %record.week_id, "inserting weekly record");
            records.push(record.clone());
        }
        write_records(&self.file_path, &records)?;
        Ok(record)
    }

    fn list_all(&self) -> Result<Vec<WeeklyRecord>> {
        let _guard = self.lock.lock().map_err(|_| anyhow!("Record store lock poisoned"))?;
        self.read_records()
    }
}
