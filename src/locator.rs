//! Gregorian date to traditional date.
//!
//! The walk starts at 1951-01-08, the first day of the last month of 1950,
//! and counts whole months through the epoch table until the one holding the
//! requested day. Inside that month the markers are replayed in recorded
//! order to turn the day offset into a day number.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::consts::{MONTHS_PER_YEAR, NOMINAL_MONTH_DAYS, TABLE_FIRST_DAY, TABLE_LAST_DAY};
use crate::epoch_table::{EPOCH_TABLE, Marker, MonthEntry};
use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::prelude::*;
use crate::range::DateSpan;

const FIRST_DAY: GregorianDate = GregorianDate::from_const(TABLE_FIRST_DAY);
const LAST_DAY: GregorianDate = GregorianDate::from_const(TABLE_LAST_DAY);

/// How a traditional day relates to the day before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DayKind {
    #[default]
    Regular,
    /// Second occurrence of a doubled day.
    Repeated,
    /// The day number right after an omitted one.
    AfterOmission,
}

/// A date of the traditional calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{}-{:02}-{:02}", year, month, day)]
#[serde(rename_all = "camelCase")]
pub struct TraditionalDate {
    year:       i32,
    month:      u8,
    day:        u8,
    leap_month: bool,
    day_kind:   DayKind,
}

impl TraditionalDate {
    /// A regular day of a regular month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTraditional` unless `month` is in
    /// `1..=12` and `day` in `1..=30`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(CalendarError::InvalidTraditional { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            leap_month: false,
            day_kind: DayKind::Regular,
        })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whether the month is the second of two months sharing this number.
    pub const fn is_leap_month(&self) -> bool {
        self.leap_month
    }

    pub const fn day_kind(&self) -> DayKind {
        self.day_kind
    }
}

/// The Gregorian days the epoch table covers, 1951-01-08 through 2051-02-11.
pub const fn supported_span() -> DateSpan {
    DateSpan::from_ordered(FIRST_DAY, LAST_DAY)
}

/// Converts a Gregorian date into the traditional calendar.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` for dates outside [`supported_span`].
pub fn locate(date: GregorianDate) -> Result<TraditionalDate, CalendarError> {
    let out_of_range = || CalendarError::OutOfRange {
        date,
        first: FIRST_DAY,
        last: LAST_DAY,
    };

    if !supported_span().contains(&date) {
        debug!(%date, "date outside epoch table");
        return Err(out_of_range());
    }

    let located = locate_offset(FIRST_DAY.days_until(&date)).ok_or_else(out_of_range)?;
    debug!(%date, traditional = %located, kind = ?located.day_kind, "located");
    Ok(located)
}

/// Locates the day `days` after 1951-01-08, or `None` past the end of the table.
pub fn locate_offset(days: i64) -> Option<TraditionalDate> {
    if days < 0 {
        return None;
    }

    let mut elapsed = 0;
    for year in EPOCH_TABLE.years() {
        let mut leap_months = 0;
        for (index, month) in year.months().enumerate() {
            if month.is_leap() {
                leap_months += 1;
            }

            let length = month.length();
            if elapsed + length <= days {
                elapsed += length;
                continue;
            }

            let (day, day_kind) = resolve_day(month, days - elapsed);
            // the first entry holds only the closing months of its year
            let index = if year.is_partial() {
                MONTHS_PER_YEAR - year.month_count()
            } else {
                index
            };

            return Some(TraditionalDate {
                year: year.year(),
                month: u8::try_from(index + 1 - leap_months).ok()?,
                day: u8::try_from(day).ok()?,
                leap_month: month.is_leap(),
                day_kind,
            });
        }
    }
    None
}

/// Replays the month's markers over a zero-based day offset.
///
/// A doubled day at or before the offset pulls the day number back by one;
/// an omitted day at or before it pushes the number forward.
fn resolve_day(month: MonthEntry, mut offset: i64) -> (i64, DayKind) {
    let mut kind = DayKind::Regular;
    for marker in month.markers() {
        match marker {
            Marker::Leap => {},
            Marker::Doubled(day) => match i64::from(day).cmp(&offset) {
                Ordering::Equal => {
                    offset -= 1;
                    kind = DayKind::Repeated;
                },
                Ordering::Less => offset -= 1,
                Ordering::Greater => {},
            },
            Marker::Omitted(day) => match (i64::from(day) - 1).cmp(&offset) {
                Ordering::Equal => {
                    offset += 1;
                    kind = DayKind::AfterOmission;
                },
                Ordering::Less => offset += 1,
                Ordering::Greater => {},
            },
        }
    }
    debug_assert!((0..NOMINAL_MONTH_DAYS).contains(&offset));
    (offset + 1, kind)
}
