use thiserror::Error;
use tip_core::TipError;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] TipError),

    #[error("sweep axis `{0}` is empty")]
    EmptySweepAxis(&'static str),
}

pub type SimResult<T> = Result<T, SimError>;
