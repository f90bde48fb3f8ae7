//! Tibetan (Phugpa) lunisolar calendar.
//!
//! Converts Gregorian days between 1951-01-08 and 2051-02-11 into the
//! traditional calendar using a table of doubled and omitted days, and
//! computes the five elements of each day for almanac tables.
//!
//! ```
//! use phugpa::{GregorianDate, compute, locate};
//!
//! let date: GregorianDate = "2025-11-01".parse()?;
//! let traditional = locate(date)?;
//! assert_eq!(traditional.to_string(), "2025-09-11");
//!
//! let elements = compute(date);
//! assert_eq!(elements.fixed_day().digits(), [13, 38, 57, 3, 45]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod almanac;
mod consts;
mod elements;
mod epoch_table;
mod error;
mod gregorian;
mod locator;
mod naming;
mod prelude;
mod radix;
mod range;
mod types;

pub use almanac::{AstrologicalTable, DailyAlmanac, TABLE_ROWS, TableRow, almanac, almanac_span};
pub use consts::*;
pub use elements::{Effect, EpochMonth, FiveElements, FootClass, Parity, compute, compute_traditional};
pub use epoch_table::{EPOCH_TABLE, EpochTable, Marker, MonthEntry, YearEntry};
pub use error::{CalendarError, ParseError};
pub use gregorian::GregorianDate;
pub use locator::{DayKind, TraditionalDate, locate, locate_offset, supported_span};
pub use naming::{day_name, full_text, month_name, tibetan_month_name, year_name};
pub use radix::{MixedRadix, expand_fraction, foot_cascade, reduce};
pub use range::{DateSpan, Days, SpanError};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};
