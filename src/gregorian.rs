use crate::consts::{DATE_SEPARATOR, MONTH_FIRST_SEPARATOR};
use crate::error::ParseError;
use crate::prelude::*;
use crate::types::{Day, Month, Weekday, Year, days_in_month};
use std::cmp::Ordering;
use std::str::FromStr;

/// A validated day of the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct GregorianDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl GregorianDate {
    /// Creates a date from plain components.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// Builds a compile-time constant date; invalid components fail const evaluation.
    pub(crate) const fn from_const((year, month, day): (u16, u8, u8)) -> Self {
        assert!(day <= days_in_month(year, month));
        match (
            std::num::NonZeroU16::new(year),
            std::num::NonZeroU8::new(month),
            std::num::NonZeroU8::new(day),
        ) {
            (Some(y), Some(m), Some(d)) => Self {
                year:  Year::from_non_zero(y),
                month: Month::from_non_zero(m),
                day:   Day::from_non_zero(d),
            },
            _ => panic!("date component is zero"),
        }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the components as a `(year, month, day)` tuple
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Julian day number of this date.
    pub const fn day_number(&self) -> i64 {
        let (y, m, d) = (self.year() as i64, self.month() as i64, self.day() as i64);
        let a = (m - 14) / 12;
        (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
            - (3 * ((y + 4900 + a) / 100)) / 4
            + d
            - 32075
    }

    /// Inverse of [`GregorianDate::day_number`].
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the day falls outside years `1..=9999`.
    pub fn from_day_number(jdn: i64) -> Result<Self, ParseError> {
        let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

        let year = u16::try_from(year).map_err(|_| ParseError::InvalidYear(0))?;
        // month and day are in 1..=12 and 1..=31 by construction
        Self::new(year, month as u8, day as u8)
    }

    /// Number of days from `self` to `other` (negative when `other` is earlier).
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// The following day, or `None` past the end of year 9999.
    pub fn succ(&self) -> Option<Self> {
        Self::from_day_number(self.day_number() + 1).ok()
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.day_number())
    }

    /// Chinese long form, e.g. `2025年11月1日 周六`.
    pub fn chinese(&self) -> String {
        format!(
            "{}年{}月{}日 {}",
            self.year(),
            self.month(),
            self.day(),
            self.weekday()
        )
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);
        if has_hyphen && has_slash {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        let (separator, order): (char, [usize; 3]) = if has_hyphen {
            // YYYY-MM-DD
            (DATE_SEPARATOR, [0, 1, 2])
        } else if has_slash {
            // MM/DD/YYYY
            (MONTH_FIRST_SEPARATOR, [2, 0, 1])
        } else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            )));
        }

        let year = parse_u16(parts[order[0]])?;
        let month = parse_u8(parts[order[1]])?;
        let day = parse_u8(parts[order[2]])?;
        Self::new(year, month, day)
    }
}

fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl PartialOrd for GregorianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GregorianDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_tuple().cmp(&other.to_tuple())
    }
}

impl TryFrom<(u16, u8, u8)> for GregorianDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
