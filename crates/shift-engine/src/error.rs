//! Error types for shift-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ShiftError>;
