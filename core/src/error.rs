use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttendanceError {
    #[error("weekId is required")]
    MissingWeekId,

    #[error("No class scheduled on {day} at {time_slot}")]
    UnknownSlot { day: String, time_slot: String },

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl AttendanceError {
    /// Errors caused by the request itself rather than by the store.
    pub fn is_validation(&self) -> bool {
        !matches!(self, AttendanceError::Store(_))
    }
}
