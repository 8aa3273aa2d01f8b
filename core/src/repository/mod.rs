pub mod file;
pub mod memory;
pub mod traits;

// Re-export
pub use file::{default_data_dir, FileWeeklyRecordRepository};
pub use memory::InMemoryWeeklyRecordRepository;
pub use traits::WeeklyRecordRepository;
