use std::fmt::Display;

/// Why a single raw record was rejected. Never fatal to the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingField(&'static str),
    Weekday(String),
    ClockTime(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "record is missing the `{field}` field"),
            Self::Weekday(value) => write!(f, "`{value}` is not a weekday name"),
            Self::ClockTime(value) => write!(f, "`{value}` is not an HH:MM clock time"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
