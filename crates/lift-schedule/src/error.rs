use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("traffic parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
