//! The epoch table: per-month day irregularities of the Phugpa calendar.
//!
//! Each year lists its months in order; each month lists signed markers in
//! the order they were recorded. A `0` marks a leap month, `+n` a doubled
//! day `n` and `-n` an omitted day `n`. Entry 0 covers only the last month
//! of 1950, the first month whose start falls inside 1951.

use crate::consts::{NOMINAL_MONTH_DAYS, TABLE_BASE_YEAR};

/// The table compiled into the crate.
pub static EPOCH_TABLE: EpochTable = EpochTable { years: MARKERS };

/// One marker of a month entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The month is the second of two months sharing a number.
    Leap,
    /// The day with this number occurs twice.
    Doubled(u8),
    /// The day with this number is skipped.
    Omitted(u8),
}

impl Marker {
    const fn from_raw(raw: i8) -> Self {
        match raw {
            0 => Self::Leap,
            n if n > 0 => Self::Doubled(n.unsigned_abs()),
            n => Self::Omitted(n.unsigned_abs()),
        }
    }
}

/// The whole table, one entry per traditional year.
#[derive(Debug)]
pub struct EpochTable {
    years: &'static [&'static [&'static [i8]]],
}

impl EpochTable {
    pub const fn len(&self) -> usize {
        self.years.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn year(&self, index: usize) -> Option<YearEntry> {
        self.years
            .get(index)
            .map(|&months| YearEntry { index, months })
    }

    pub fn years(&self) -> impl Iterator<Item = YearEntry> + '_ {
        self.years
            .iter()
            .enumerate()
            .map(|(index, &months)| YearEntry { index, months })
    }

    /// Number of days the table covers.
    pub fn total_days(&self) -> i64 {
        self.years().map(|y| y.days()).sum()
    }
}

/// The months of one traditional year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearEntry {
    index:  usize,
    months: &'static [&'static [i8]],
}

impl YearEntry {
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Traditional year number.
    pub const fn year(&self) -> i32 {
        // index is bounded by the table length
        TABLE_BASE_YEAR + self.index as i32
    }

    /// Entry 0 describes only the tail of its year.
    pub const fn is_partial(&self) -> bool {
        self.index == 0
    }

    pub const fn month_count(&self) -> usize {
        self.months.len()
    }

    pub fn months(&self) -> impl Iterator<Item = MonthEntry> + '_ {
        self.months.iter().map(|&markers| MonthEntry { markers })
    }

    pub fn days(&self) -> i64 {
        self.months().map(|m| m.length()).sum()
    }

    /// Whether this year contains a leap month.
    pub fn has_leap_month(&self) -> bool {
        self.months().any(|m| m.is_leap())
    }
}

/// The markers of one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthEntry {
    markers: &'static [i8],
}

impl MonthEntry {
    /// Markers in recorded order.
    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.markers.iter().map(|&raw| Marker::from_raw(raw))
    }

    pub fn is_leap(&self) -> bool {
        self.markers().any(|m| m == Marker::Leap)
    }

    pub fn doubled_days(&self) -> impl Iterator<Item = u8> + '_ {
        self.markers().filter_map(|m| match m {
            Marker::Doubled(day) => Some(day),
            _ => None,
        })
    }

    pub fn omitted_days(&self) -> impl Iterator<Item = u8> + '_ {
        self.markers().filter_map(|m| match m {
            Marker::Omitted(day) => Some(day),
            _ => None,
        })
    }

    /// Days in the month: 30, plus one per doubled day, minus one per omitted day.
    pub fn length(&self) -> i64 {
        self.markers().fold(NOMINAL_MONTH_DAYS, |len, m| match m {
            Marker::Leap => len,
            Marker::Doubled(_) => len + 1,
            Marker::Omitted(_) => len - 1,
        })
    }
}

#[rustfmt::skip]
static MARKERS: &[&[&[i8]]] = &[
    // 1950
    &[&[16, -21]],
    // 1951
    &[&[-27], &[8, -21], &[-25], &[1, -18], &[0, 7, -10, -22, 27], &[-14], &[-17, 24], &[-9], &[-13, 19], &[-6, 24, -30], &[], &[-4, 16, -29], &[20, -22]],
    // 1952
    &[&[-28], &[11, -21], &[-25], &[5, -18], &[-21], &[2, -14], &[-17, 28], &[-10], &[-13, 23], &[-7, 28, -29], &[-13, 15], &[-6, 19, -30]],
    // 1953
    &[&[], &[-5, 11, -28], &[15, -22], &[-25], &[10, -18], &[-21], &[7, -13], &[-17], &[3, -10], &[-14, 26], &[-8], &[-13, 18]],
    // 1954
    &[&[-7, 21], &[0, -1], &[-5, 14, -29], &[], &[-3, 9, -25], &[-28], &[6, -21], &[-24], &[2, -17], &[-22, 26], &[-15, 30], &[-9], &[-14, 21]],
    // 1955
    &[&[-8, 25], &[-2], &[-6, 18, -29], &[], &[-3, 14, -25], &[-28], &[11, -21], &[-24], &[6, -18], &[-22, 29], &[-16], &[2, -10]],
    // 1956
    &[&[-15, 24], &[-9, 29], &[-2, -14, 16], &[-6, 22, -29], &[], &[-3, 19, -25], &[-7, 8, -28], &[15, -20], &[-25], &[0, 10, -18], &[-23], &[2, -17], &[5, -11]],
    // 1957
    &[&[-16, 27], &[-10], &[-14, 22], &[-7], &[-10, 18], &[-2], &[-5, 14, -28], &[], &[-2, 9, -25], &[13, -19], &[-24], &[5, -18]],
    // 1958
    &[&[9, -11, -24, 26], &[-17], &[1, -10], &[-14, 26], &[-7], &[-10, 23], &[-2], &[-5, 19, -29], &[], &[-2, 13, -26], &[], &[-2, 4, -25]],
    // 1959
    &[&[8, -19], &[-24], &[1, -17], &[5, -10], &[-14], &[1, -6, -18, 21], &[0, -10, 28], &[-1, -13, 18], &[-6, 23, -29], &[], &[-3, 16, -27], &[], &[-2, 8, -24]],
    // 1960
    &[&[11, -20], &[-24], &[4, -18], &[-21, 30], &[-14], &[-17, 26], &[-10], &[-13, 22], &[-6], &[-11, 16], &[-4, 19, -28], &[]],
    // 1961
    &[&[-3, 11, -27], &[14, -21], &[-25], &[8, -18], &[-21], &[4, -14], &[-17], &[1, -10], &[-13, 26], &[-7], &[-11, 19], &[-5, 22, -29]],
    // 1962
    &[&[], &[-4, 14, -28], &[0], &[-3, 7, -25], &[13, -18, -29], &[3, -21], &[10, -13, -24, 30], &[-17], &[6, -9, -21, 25], &[-14, 30], &[-7], &[-12, 22], &[-6, 25, -30]],
    // 1963
    &[&[], &[-5, 17, -29], &[], &[-2, 12, -26], &[-28], &[8, -21], &[-24], &[5, -17], &[-21, 29], &[-14], &[3, -8], &[-13, 25]],
    // 1964
    &[&[-8], &[-13, 16], &[-6, 21, -29], &[], &[-3, 16, -26], &[-28], &[13, -21], &[-24], &[9, -17], &[-21], &[2, -15], &[0, -22, 23], &[-14, 27]],
    // 1965
    &[&[-9], &[-13, 20], &[-6, 26, -29], &[-10, 15], &[-3, 23, -24], &[-6, 12, -28], &[], &[-1, 8, -25], &[13, -17], &[-22], &[6, -17], &[-22, 27]],
    // 1966
    &[&[-16], &[1, -10], &[-13, 24], &[-7], &[-10, 20], &[-3], &[-5, 17, -28], &[], &[-2, 12, -25], &[-30], &[5, -23], &[8, -18]],
    // 1967
    &[&[-23, 30], &[-17], &[4, -10], &[-14, 29], &[-7], &[-10, 25], &[-2], &[0, -5, 22, -28], &[], &[-2, 16, -26], &[-30], &[8, -25], &[11, -19]],
    // 1968
    &[&[-24], &[4, -17], &[-21, 28], &[-14], &[-17, 24], &[-10], &[-13, 21], &[-6], &[-10, 15], &[-3, 19, -27], &[], &[-1, 11, -26]],
    // 1969
    &[&[14, -20], &[-24], &[7, -18], &[-21], &[2, -14], &[-17, 29], &[-10], &[-13, 25], &[-6], &[-10, 19], &[-4, 22, -27], &[]],
    // 1970
    &[&[-3, 14, -27], &[], &[-2, 6, -25], &[11, -18], &[0, -21], &[7, -14], &[-17], &[4, -9, -21, 23], &[-13, 29], &[-6], &[-11, 22], &[-5], &[-11, 13]],
    // 1971
    &[&[-4, 17, -28], &[], &[-2, 10, -25], &[-29], &[6, -21], &[-24], &[3, -17], &[-20, 28], &[-14], &[3, -6, -19, 21], &[-12, 25], &[-6]],
    // 1972
    &[&[-11, 17], &[-5, 20, -29], &[], &[-2, 14, -26], &[-28], &[11, -21], &[-24], &[7, -17], &[-20], &[2, -14], &[-19, 25], &[-13, 28], &[0, -7]],
    // 1973
    &[&[-12, 20], &[-6, 24, -29], &[-11, 13], &[-3, 19, -25], &[-28], &[16, -20], &[-2, 6, -24], &[12, -17], &[-21], &[6, -15], &[-20, 28], &[-14]],
    // 1974
    &[&[1, -8], &[-13, 23], &[-6], &[-10, 18], &[-3], &[-6, 15, -28], &[], &[-1, 11, -24], &[-28], &[5, -22], &[9, -16], &[-21]],
    // 1975
    &[&[1, -15], &[4, -9], &[-13, 27], &[-7], &[-10, 23], &[-3], &[-5, 20, -28], &[], &[-1, 15, -25], &[0, -29], &[8, -23], &[12, -17], &[-22]],
    // 1976
    &[&[3, -16], &[-21, 26], &[-14], &[1, -6, -18, 21], &[-10, 28], &[-2, -13, 18], &[-5, 25, -27], &[-9, 14], &[-2, 19, -25], &[-30], &[12, -24], &[]],
    // 1977
    &[&[-1, 2, -23], &[7, -17], &[-21], &[1, -14], &[-17, 27], &[-10], &[-13, 23], &[-6], &[-9, 18], &[-3, 24, -25], &[-8, 11], &[-1, 14, -25]],
    // 1978
    &[&[], &[-1, 6, -24], &[10, -18], &[-21], &[5, -14], &[0, -17], &[1, -10], &[-13, 28], &[-6], &[-10, 22], &[-3], &[-8, 14], &[-2, 17, -27]],
    // 1979
    &[&[], &[-1, 10, -25], &[15, -17, -29], &[4, -21], &[10, -13, -25, 30], &[-17], &[-20, 27], &[-13], &[3, -5, -18, 21], &[-10, 25], &[-4], &[-9, 17]],
    // 1980
    &[&[-3, 20, -27], &[], &[-2, 13, -25], &[-29], &[9, -22], &[-24], &[5, -17], &[-20], &[1, -13], &[-17, 25], &[-11, 28], &[-5]],
    // 1981
    &[&[-10, 20], &[-5, 24, -28], &[0], &[-2, 17, -26], &[-29], &[13, -21], &[-24], &[10, -17], &[-20], &[5, -14], &[-18, 28], &[-12], &[1, -6]],
    // 1982
    &[&[-11, 23], &[-6], &[-10, 17], &[-3], &[-6, 12, -29], &[], &[-1, 9, -24], &[-28], &[4, -21], &[9, -14], &[-19], &[1, -14]],
    // 1983
    &[&[-20, 22], &[-12, 26], &[-6], &[-10, 21], &[-3], &[-6, 17, -29], &[], &[-1, 14, -24], &[-28], &[8, -22], &[0, -27, 30], &[-20], &[4, -15]],
    // 1984
    &[&[-20, 26], &[-13, 30], &[-6], &[-10, 25], &[-3], &[-6, 22, -28], &[-10, 11], &[-1, 18, -25], &[-29], &[12, -23], &[-28], &[4, -22]],
    // 1985
    &[&[7, -16], &[-20, 30], &[-14], &[-17, 24], &[-10], &[-13, 21], &[-6], &[-9, 17], &[-2], &[-6, 11, -30], &[15, -24], &[-29]],
    // 1986
    &[&[6, -23], &[10, -17], &[-21], &[3, -14], &[-17, 29], &[-10], &[-13, 26], &[0, -6], &[-9, 21], &[-2], &[-7, 15], &[-1, 18, -25], &[-30]],
    // 1987
    &[&[9, -24], &[14, -16, -29], &[2, -21], &[8, -14], &[-17], &[4, -9, -21, 24], &[-13], &[1, -5, -17, 20], &[-9, 25], &[-3], &[-7, 18], &[-2, 21, -26]],
    // 1988
    &[&[], &[-1, 13, -25], &[-28], &[7, -22], &[-25], &[3, -17], &[-20, 30], &[-13], &[-17, 24], &[-10, 29], &[-3], &[-9, 20]],
    // 1989
    &[&[-3], &[-9, 12], &[-2, 16, -25], &[0, -29], &[11, -22], &[-24], &[8, -17], &[-20], &[4, -13], &[-17, 28], &[-11], &[-17, 20], &[-10, 23]],
    // 1990
    &[&[-4], &[-9, 16], &[-2, 20, -25], &[-7, 9, -29], &[16, -21], &[-2, 6, -24], &[14, -16, -28], &[3, -20], &[8, -13], &[-18], &[1, -12], &[-17, 23]],
    // 1991
    &[&[-11, 26], &[-5], &[-9, 20], &[-3], &[-6, 15, -29], &[], &[-1, 12, -24], &[-27], &[7, -21], &[-25], &[1, -19], &[4, -13], &[0, -18, 26]],
    // 1992
    &[&[-12, 29], &[-6], &[-10, 24], &[-3], &[-6, 20, -29], &[], &[-1, 16, -24], &[-28], &[11, -21], &[-26], &[4, -20], &[7, -14]],
    // 1993
    &[&[-19, 29], &[-13], &[-17, 23], &[-10, 28], &[-2, -14, 18], &[-6], &[-9, 15], &[-2], &[-6, 10, -28], &[15, -22], &[-27], &[7, -21]],
    // 1994
    &[&[10, -15], &[-20], &[3, -14], &[-17, 27], &[-10], &[-13, 24], &[-6], &[-9, 20], &[0, -2], &[-6, 14, -29], &[18, -23], &[-28], &[10, -22]],
    // 1995
    &[&[-28], &[2, -21], &[6, -14], &[-17], &[2, -10], &[-13, 29], &[-5], &[-9, 24], &[-2], &[-6, 18, -30], &[], &[-6, 9, -29]],
    // 1996
    &[&[13, -23], &[-28], &[6, -21], &[12, -13, -25], &[1, -17], &[-20, 27], &[-13], &[-16, 23], &[-9, 28], &[-2, -15, 16], &[-7, 21], &[-1]],
    // 1997
    &[&[-7, 12, -30], &[16, -24], &[-28], &[10, -22], &[-25], &[0, 5, -17], &[-20], &[2, -13], &[-16, 27], &[-10], &[-14, 20], &[-8, 24], &[-3]],
    // 1998
    &[&[-7, 15], &[-1, 19, -24], &[-29], &[14, -22], &[-25], &[10, -17], &[-20], &[7, -13], &[-17], &[1, -11], &[-15, 23], &[-9, 26]],
    // 1999
    &[&[-4], &[-8, 19], &[-2], &[-6, 13, -29], &[], &[-2, 9, -24], &[-27], &[6, -20], &[-24, 30], &[-18], &[4, -11], &[-16, 26]],
    // 2000
    &[&[-11, 30], &[0, -4], &[-9, 22], &[-3], &[-6, 18, -29], &[], &[-2, 14, -24], &[-27], &[10, -21], &[-25], &[4, -18], &[8, -12], &[-18, 29]],
    // 2001
    &[&[-12], &[-17, 22], &[-10, 26], &[-3], &[-6, 22, -28], &[-10, 12], &[-2, 19, -24], &[-5, 9, -28], &[-14, 21], &[-25], &[7, -20], &[-26, 28]],
    // 2002
    &[&[-19], &[2, -13], &[-17, 26], &[-10], &[-13, 21], &[-6], &[-9, 18], &[-2], &[-5, 13, -28], &[19, -20], &[0, -3, 6, -26], &[10, -21], &[-26]],
    // 2003
    &[&[2, -20], &[6, -13], &[-17, 30], &[-10], &[-13, 26], &[-6], &[-9, 23], &[-2], &[-5, 17, -29], &[], &[-4, 10, -28], &[13, -22]],
    // 2004
    &[&[-27], &[5, -20], &[10, -13, -25, 28], &[-17], &[4, -10, -22, 24], &[-13], &[2, -5, -16, 22], &[-9, 27], &[-1, -14, 16], &[-6, 21, -30], &[], &[-5, 13, -29]],
    // 2005
    &[&[16, -23], &[-27], &[9, -21], &[-25], &[3, -18], &[-20, 30], &[0, -13], &[-16, 26], &[-9], &[-13, 20], &[-7, 24], &[-1], &[-6, 16, -30]],
    // 2006
    &[&[19, -23], &[-28], &[13, -22], &[-25], &[8, -18], &[-20], &[5, -13], &[-16, 30], &[-10], &[-14, 24], &[-8, 27], &[-1]],
    // 2007
    &[&[-7, 19], &[-1], &[-5, 12, -29], &[17, -21], &[-3, 7, -25], &[14, -16, -28], &[4, -20], &[-24, 29], &[-17], &[4, -10], &[-15, 27], &[-9]],
    // 2008
    &[&[-15, 18], &[-8, 22], &[-2], &[0, -6, 16, -29], &[], &[-2, 12, -25], &[-27], &[9, -20], &[-24], &[3, -17], &[-23, 26], &[-16, 30], &[-10]],
    // 2009
    &[&[-15, 21], &[-9, 25], &[-3], &[-6, 20, -29], &[], &[-2, 17, -24], &[-27], &[13, -20], &[-24], &[7, -18], &[-23, 29], &[-17]],
    // 2010
    &[&[2, -11], &[-16, 25], &[-10], &[-14, 19], &[-6, 26, -27], &[-9, 16], &[-2], &[-5, 12, -28], &[], &[-2, 6, -25], &[10, -19], &[0, -24], &[2, -18]],
    // 2011
    &[&[5, -12], &[-17, 29], &[-10], &[-13, 24], &[-6], &[-9, 21], &[-2], &[-5, 16, -28], &[], &[-2, 10, -26], &[13, -20], &[-25]],
    // 2012
    &[&[5, -19], &[9, -12, -25, 27], &[-17], &[3, -10], &[-13, 29], &[-6], &[-9, 25], &[-1], &[-5, 20, -29], &[], &[-3, 13, -27], &[17, -21]],
    // 2013
    &[&[-26], &[8, -20], &[-24], &[2, -18], &[-21, 28], &[-13], &[-16, 24], &[-9], &[0, -12, 20], &[-6, 24, -29], &[], &[-4, 16, -28], &[]],
    // 2014
    &[&[-4, 7, -27], &[12, -21], &[-25], &[6, -18], &[-20], &[3, -13], &[-16, 29], &[-9], &[-13, 23], &[-6], &[-12, 16], &[-5, 19, -30]],
    // 2015
    &[&[], &[-4, 11, -28], &[15, -21], &[-25], &[11, -17], &[-20], &[8, -12, -24, 27], &[-16], &[3, -9], &[-13, 27], &[-7], &[-12, 19]],
    // 2016
    &[&[-6, 22, -30], &[], &[-5, 15, -29], &[], &[0, -2, 10, -25], &[-28], &[6, -20], &[-23], &[2, -17], &[-21, 26], &[-14, 30], &[-8], &[-13, 22]],
    // 2017
    &[&[-8, 25], &[-1], &[-6, 19, -29], &[], &[-2, 14, -25], &[-27], &[11, -20], &[-24], &[6, -17], &[-21, 30], &[-15], &[3, -9]],
    // 2018
    &[&[-15, 25], &[-9], &[-13, 18], &[-6, 23, -29], &[], &[-2, 20, -24], &[-5, 10, -28], &[16, -19], &[-2, 5, -24], &[10, -18], &[-22], &[3, -17]],
    // 2019
    &[&[6, -10], &[0, -16, 28], &[-9], &[-13, 22], &[-6], &[-9, 18], &[-2], &[-5, 15, -28], &[], &[-1, 10, -25], &[14, -18], &[-23], &[5, -18]],
    // 2020
    &[&[-23, 27], &[-16], &[2, -10], &[-13, 27], &[-6], &[-9, 23], &[-2], &[-5, 19, -28], &[], &[-2, 13, -26], &[], &[-1, 5, -25]],
    // 2021
    &[&[8, -19], &[-23], &[1, -17], &[6, -9, -21, 25], &[-14], &[2, -5, -17, 22], &[-9], &[-12, 18], &[-6, 24, -28], &[0], &[-3, 16, -27], &[], &[-2, 8, -26]],
    // 2022
    &[&[11, -20], &[-24], &[5, -17], &[-21, 30], &[-14], &[-16, 27], &[-9], &[-12, 23], &[-6], &[-10, 16], &[-4, 19, -28], &[]],
    // 2023
    &[&[-3, 11, -27], &[15, -20], &[-24], &[9, -18], &[-21], &[5, -13], &[-16], &[2, -9], &[-13, 26], &[-6], &[-11, 19], &[-5, 22, -29]],
    // 2024
    &[&[], &[-4, 14, -28], &[], &[-2, 8, -25], &[14, -17, -28], &[4, -21], &[0, -23], &[1, -16], &[-20, 26], &[-13, 30], &[-7], &[-12, 22], &[-6, 25, -30]],
    // 2025
    &[&[], &[-5, 18, -28], &[], &[-2, 12, -25], &[-28], &[9, -21], &[-23], &[5, -17], &[-20, 30], &[-14], &[4, -7], &[-13, 25]],
    // 2026
    &[&[-7], &[-12, 17], &[-5, 22, -29], &[], &[-2, 17, -25], &[-28], &[14, -20], &[-24], &[9, -17], &[-21], &[3, -15], &[-21, 24]],
    // 2027
    &[&[-14, 28], &[-8], &[0, -12, 21], &[-6], &[-10, 16], &[-2], &[-5, 13, -28], &[], &[-1, 9, -24], &[14, -16, -29], &[2, -22], &[6, -16], &[-21, 28]],
    // 2028
    &[&[-15], &[1, -9], &[-13, 25], &[-6], &[-9, 21], &[-2], &[-5, 18, -28], &[], &[-1, 13, -25], &[-29], &[6, -23], &[9, -17]],
    // 2029
    &[&[-22], &[1, -16], &[5, -9, -22, 23], &[-13, 29], &[-6], &[-9, 26], &[-2, -13, 16], &[-5, 22, -27], &[], &[-2, 16, -25], &[-30], &[0, 9, -24], &[12, -18]],
    // 2030
    &[&[-23], &[4, -17], &[-21, 28], &[-14], &[-17, 25], &[-9], &[-12, 21], &[-5], &[-9, 16], &[-2, 20, -26], &[], &[-1, 11, -25]],
    // 2031
    &[&[15, -19], &[-24], &[8, -17], &[-21], &[3, -14], &[-16, 30], &[-9], &[-12, 25], &[-5], &[-9, 19], &[-3, 23, -27], &[]],
    // 2032
    &[&[-2, 14, -27], &[], &[-1, 7, -24], &[12, -17], &[-21], &[8, -13, -25, 28], &[-16], &[0, 5, -8, -20, 24], &[-13, 29], &[-6], &[-10, 22], &[-4], &[-10, 14]],
    // 2033
    &[&[-3, 17, -28], &[], &[-1, 11, -25], &[-28], &[6, -21], &[-23], &[3, -16], &[-20, 29], &[-13], &[-18, 22], &[-11, 25], &[-6]],
    // 2034
    &[&[-11, 17], &[-4, 21, -28], &[], &[-2, 15, -25], &[-28], &[11, -21], &[-23], &[8, -16], &[-20], &[2, -14], &[-18, 25], &[-12, 28]],
    // 2035
    &[&[-7], &[-11, 20], &[-5, 25, -27], &[-10, 14], &[0, -2, 20, -24], &[-6, 10, -28], &[18, -19], &[-1, 7, -24], &[13, -16, -28], &[1, -21], &[6, -15], &[-19, 28], &[-14]],
    // 2036
    &[&[1, -8], &[-12, 24], &[-6], &[-9, 19], &[-2], &[-5, 15, -28], &[], &[-1, 11, -24], &[-28], &[6, -22], &[9, -15], &[-21]],
    // 2037
    &[&[1, -15], &[5, -8, -21, 22], &[-13, 28], &[-6], &[-9, 23], &[-2], &[-5, 20, -28], &[], &[-1, 15, -24], &[-28], &[9, -23], &[13, -16], &[0, -22]],
    // 2038
    &[&[4, -16], &[-20, 27], &[-13], &[3, -5, -17, 22], &[-9], &[-12, 19], &[-5], &[-8, 15], &[-1, 19, -25], &[-29], &[12, -24], &[-30]],
    // 2039
    &[&[3, -23], &[7, -17], &[-20], &[1, -14], &[-17, 27], &[-9], &[-12, 24], &[-5], &[-8, 19], &[-2], &[-7, 11], &[-1, 15, -25]],
    // 2040
    &[&[-30], &[7, -24], &[11, -17], &[-21], &[6, -14], &[-17], &[2, -9], &[-12, 28], &[-5], &[0, -9, 22], &[-3], &[-8, 15], &[-2, 17, -26]],
    // 2041
    &[&[], &[-1, 10, -24], &[-28], &[5, -21], &[-24], &[1, -16], &[-19, 27], &[-12], &[-17, 22], &[-10, 26], &[-4], &[-9, 17]],
    // 2042
    &[&[-3, 21, -27], &[], &[-1, 14, -25], &[-28], &[9, -21], &[-24], &[6, -16], &[-19], &[2, -13], &[-17, 25], &[-11, 29], &[-5]],
    // 2043
    &[&[-10, 20], &[-4, 25, -27], &[-9, 13], &[-2, 18, -25], &[-28], &[0, 14, -21], &[-24], &[11, -16, -28, 30], &[-20], &[5, -13], &[-18, 28], &[-12], &[2, -5]],
    // 2044
    &[&[-11, 23], &[-5], &[-9, 17], &[-2], &[-5, 13, -28], &[], &[-1, 10, -24], &[-27], &[5, -21], &[10, -13], &[-19], &[1, -13]],
    // 2045
    &[&[-19, 23], &[-12, 27], &[-6], &[-9, 30], &[-2], &[-5, 18, -28], &[], &[-1, 14, -24], &[-28], &[9, -21], &[-26], &[1, -20]],
    // 2046
    &[&[4, -14], &[-19, 26], &[0, -13], &[1, -6, -18, 19], &[-10, 26], &[-2, -14, 16], &[-5, 23, -27], &[-9, 13], &[-1, 19, -24], &[-28], &[12, -22], &[-27], &[4, -21]],
    // 2047
    &[&[7, -15], &[-20, 30], &[-13], &[-17, 25], &[-10], &[-12, 23], &[-5], &[-8, 18], &[-1], &[-6, 12, -29], &[15, -23], &[-28]],
    // 2048
    &[&[7, -22], &[10, -16], &[-20], &[4, -14], &[-17, 30], &[-10], &[-12, 27], &[-5], &[-8, 22], &[-2], &[0, -6, 15, -30], &[18, -24], &[-29]],
    // 2049
    &[&[10, -23], &[-28], &[3, -21], &[8, -13, -25, 28], &[-17], &[5, -8, -20, 25], &[-12], &[2, -4, -16, 21], &[-9, 25], &[-2], &[-7, 18], &[-1, 21, -25]],
    // 2050
    &[&[-30], &[13, -24], &[-28], &[7, -21], &[-24], &[4, -17], &[-19, 30], &[-12], &[-16, 25], &[-10, 29], &[-3], &[-8, 12]],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::GregorianDate;

    #[test]
    fn test_table_shape() {
        assert_eq!(EPOCH_TABLE.len(), 101);
        let first = EPOCH_TABLE.year(0).unwrap();
        assert!(first.is_partial());
        assert_eq!(first.month_count(), 1);
        assert_eq!(first.year(), 1950);
        assert_eq!(EPOCH_TABLE.year(100).unwrap().year(), 2050);
        assert!(EPOCH_TABLE.year(101).is_none());

        for year in EPOCH_TABLE.years().skip(1) {
            let expected = if year.has_leap_month() { 13 } else { 12 };
            assert_eq!(
                year.month_count(),
                expected,
                "year {} has {} months",
                year.year(),
                year.month_count()
            );
        }
    }

    #[test]
    fn test_total_days_match_gregorian_span() {
        let first = GregorianDate::new(1951, 1, 8).unwrap();
        let last = GregorianDate::new(2051, 2, 11).unwrap();
        assert_eq!(EPOCH_TABLE.total_days(), 36_560);
        assert_eq!(EPOCH_TABLE.total_days(), first.days_until(&last) + 1);
    }

    #[test]
    fn test_month_lengths() {
        for year in EPOCH_TABLE.years() {
            for (i, month) in year.months().enumerate() {
                assert!(
                    (29..=30).contains(&month.length()),
                    "{} month {i} has {} days",
                    year.year(),
                    month.length()
                );
            }
        }
    }

    #[test]
    fn test_markers_are_unique_and_in_range() {
        for year in EPOCH_TABLE.years() {
            for month in year.months() {
                let raw = month.markers;
                for (i, a) in raw.iter().enumerate() {
                    assert!((-30..=30).contains(a));
                    assert!(
                        !raw[i + 1..].contains(a),
                        "{} repeats marker {a}",
                        year.year()
                    );
                }
            }
        }
    }

    #[test]
    fn test_marker_decoding() {
        // 1951, fifth month: leap month with two doubled and two omitted days
        let month = EPOCH_TABLE.year(1).unwrap().months().nth(4).unwrap();
        assert_eq!(
            month.markers().collect::<Vec<_>>(),
            vec![
                Marker::Leap,
                Marker::Doubled(7),
                Marker::Omitted(10),
                Marker::Omitted(22),
                Marker::Doubled(27),
            ]
        );
        assert!(month.is_leap());
        assert_eq!(month.doubled_days().collect::<Vec<_>>(), vec![7, 27]);
        assert_eq!(month.omitted_days().collect::<Vec<_>>(), vec![10, 22]);
        assert_eq!(month.length(), 30);
    }

    #[test]
    fn test_empty_month_is_nominal() {
        // 1951, eleventh month
        let month = EPOCH_TABLE.year(1).unwrap().months().nth(10).unwrap();
        assert_eq!(month.markers().count(), 0);
        assert!(!month.is_leap());
        assert_eq!(month.length(), 30);
    }
}
