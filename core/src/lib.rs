pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::AttendanceError;
pub use model::attendance::{AttendanceEntry, AttendanceMap, AttendanceStatus, ExtraClassMap, ExtraCount};
pub use model::schedule::Schedule;
pub use model::stats::{Summary, WeekTally};
pub use model::weekly_record::WeeklyRecord;
pub use repository::{FileWeeklyRecordRepository, InMemoryWeeklyRecordRepository, WeeklyRecordRepository};
pub use service::dto::{SaveWeekRequest, WeekView};
pub use service::weekly_service::WeeklyService;
pub use time::{parse_day, parse_week_id, week_id_of, week_start_of, weekday_index_of};
pub use usecase::attendance::tally_week;
pub use usecase::summary::{summarize, weekly_tallies};
