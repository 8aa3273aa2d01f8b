pub mod attendance;
pub mod schedule;
pub mod stats;
pub mod weekly_record;
