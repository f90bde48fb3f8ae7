use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::SPAN_SEPARATOR;
use crate::error::ParseError;
use crate::gregorian::GregorianDate;
use crate::prelude::*;

/// An inclusive span of Gregorian days.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateSpan {
    start: GregorianDate,
    end:   GregorianDate,
}

/// Error type for date span operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Start date is after end date.
    #[error("Invalid date span: start ({start}) is after end ({end})")]
    InvalidSpan {
        start: GregorianDate,
        end:   GregorianDate,
    },

    /// Error parsing one of the dates.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid span format.
    #[error("Invalid span format: {0}")]
    InvalidFormat(String),
}

impl DateSpan {
    /// Creates a new span with validation.
    ///
    /// # Errors
    /// Returns `SpanError::InvalidSpan` if start > end.
    pub fn new(start: GregorianDate, end: GregorianDate) -> Result<Self, SpanError> {
        if start > end {
            return Err(SpanError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Caller guarantees `start <= end`.
    pub(crate) const fn from_ordered(start: GregorianDate, end: GregorianDate) -> Self {
        Self { start, end }
    }

    pub const fn start(&self) -> GregorianDate {
        self.start
    }

    pub const fn end(&self) -> GregorianDate {
        self.end
    }

    pub fn contains(&self, date: &GregorianDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this span is completely contained within another span
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Number of days in the span, both ends included.
    pub const fn len(&self) -> i64 {
        self.start.days_until(&self.end) + 1
    }

    /// A span always holds at least one day.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over every day of the span in order.
    pub fn iter(&self) -> Days {
        Days {
            next: Some(self.start),
            end:  self.end,
        }
    }
}

impl IntoIterator for DateSpan {
    type Item = GregorianDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.iter()
    }
}

/// Iterator over the days of a [`DateSpan`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<GregorianDate>,
    end:  GregorianDate,
}

impl Iterator for Days {
    type Item = GregorianDate;

    fn next(&mut self) -> Option<GregorianDate> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ()
        } else {
            None
        };
        Some(current)
    }
}

impl FromStr for DateSpan {
    type Err = SpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // Both dates must be ISO formatted; MM/DD/YYYY would clash with the separator
        let separator_count = trimmed.matches(SPAN_SEPARATOR).count();

        match separator_count {
            0 => Err(SpanError::InvalidFormat(format!(
                "No span separator found (expected '{SPAN_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(SPAN_SEPARATOR).ok_or_else(|| {
                    SpanError::InvalidFormat(format!("Separator '{SPAN_SEPARATOR}' not found"))
                })?;

                let start = start_str.trim().parse::<GregorianDate>()?;
                let end = end_str.trim().parse::<GregorianDate>()?;

                Self::new(start, end)
            },
            _ => Err(SpanError::InvalidFormat(format!(
                "Too many '{SPAN_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
