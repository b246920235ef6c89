use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Lift(#[from] LiftError),
}

pub type SimResult<T> = Result<T, SimError>;
