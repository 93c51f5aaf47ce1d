use thiserror::Error;

use crate::Scale;

pub type TcResult<T> = Result<T, TcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{value}{scale} is below absolute zero")]
    BelowAbsoluteZero { value: f64, scale: Scale },

    #[error("Unknown temperature scale: '{0}'")]
    UnknownScale(String),
}
