use crate::consts::{MAX_MONTH, MAX_YEAR};
use crate::gregorian::GregorianDate;
use crate::prelude::*;

/// Errors from reading a Gregorian date.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Errors from converting a Gregorian date into the traditional calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The date lies outside the days described by the epoch table.
    #[error("{date} is outside the supported range {first} to {last}")]
    OutOfRange {
        date:  GregorianDate,
        first: GregorianDate,
        last:  GregorianDate,
    },

    /// A traditional month or day number outside `1..=12` / `1..=30`.
    #[error("{year}-{month:02}-{day:02} is not a valid traditional date")]
    InvalidTraditional { year: i32, month: u8, day: u8 },

    /// The Gregorian input could not be read.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CalendarError {
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
