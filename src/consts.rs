/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Span separator (ISO 8601 extended format)
pub const SPAN_SEPARATOR: char = '/';
/// Month-first format separator (legacy US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';

/// First Gregorian day covered by the epoch table: 1951-01-08.
pub const TABLE_FIRST_DAY: (u16, u8, u8) = (1951, 1, 8);
/// Last Gregorian day covered by the epoch table (inclusive): 2051-02-11.
pub const TABLE_LAST_DAY: (u16, u8, u8) = (2051, 2, 11);

/// Traditional year of table entry 0; entry `i` describes year `TABLE_BASE_YEAR + i`.
pub const TABLE_BASE_YEAR: i32 = 1950;

/// Nominal length of a traditional month before markers are applied.
pub const NOMINAL_MONTH_DAYS: i64 = 30;

/// Months in a traditional year, used to align the partial first table entry.
pub const MONTHS_PER_YEAR: usize = 12;

/// First year of the Kalachakra epoch the month count is reckoned from.
pub const CYCLE_BASE_YEAR: i32 = 1027;
/// Years in one sexagenary cycle.
pub const CYCLE_YEARS: i32 = 60;
/// The epoch month count starts at the third month.
pub const CYCLE_BASE_MONTH: i32 = 3;

/// Leap correction: two units accrue per month against a 65-unit cycle.
pub const LEAP_CORRECTION_CYCLE: i64 = 65;
/// Leap remainders that mark an intercalary month.
pub const INTERCALARY_REMAINDERS: [i64; 2] = [48, 49];

/// Weekday (lunar day) place values: weekday, hour, minute, breath, fraction.
pub const WEEKDAY_PERIODS: [i64; 5] = [7, 60, 60, 6, 707];
/// Solar arc place values: mansion, hour, minute, breath, fraction.
pub const SOLAR_PERIODS: [i64; 5] = [27, 60, 60, 6, 67];
/// Weekday place values with the fraction split into 67ths and 707ths.
pub const WEEKDAY_FINE_PERIODS: [i64; 6] = [7, 60, 60, 6, 67, 707];
/// Solar arc place values carrying a trailing 707ths place.
pub const SOLAR_FINE_PERIODS: [i64; 6] = [27, 60, 60, 6, 67, 707];
/// Anomaly split: integer days in 28, fraction in 126ths.
pub const ANOMALY_PERIODS: [i64; 2] = [28, 126];
/// Place values of the lunar foot interval.
pub const LUNAR_FOOT_PERIODS: [i64; 4] = [60, 60, 6, 707];
/// Place values of the solar foot interval.
pub const SOLAR_FOOT_PERIODS: [i64; 4] = [60, 60, 6, 67];

/// Weekday base at month zero and its per-month motion.
pub const WEEKDAY_BASE_OFFSET: [i64; 5] = [3, 11, 27, 2, 332];
pub const WEEKDAY_BASE_MOTION: [i64; 5] = [1, 31, 50, 0, 480];
/// Solar base per-month motion (offset is zero).
pub const SOLAR_BASE_MOTION: [i64; 5] = [2, 10, 58, 1, 17];
/// Anomaly base at month zero and its per-month motion.
pub const ANOMALY_BASE_OFFSET: [i64; 2] = [21, 90];
pub const ANOMALY_BASE_MOTION: [i64; 2] = [2, 1];

/// Length of one lunar day, in weekday units.
pub const LUNAR_DAY_STEP: [i64; 5] = [0, 59, 3, 4, 16];
/// Solar arc travelled in one lunar day.
pub const SOLAR_DAY_STEP: [i64; 5] = [0, 4, 21, 5, 43];

/// Divisor of the lunar anomaly fraction.
pub const LUNAR_FOOT_DIVISOR: i64 = 126;
/// Anomaly steps in one lunar half cycle.
pub const LUNAR_ANOMALY_STEPS: i64 = 14;
/// Lunar foot multipliers, indexed by anomaly remainder.
pub const LUNAR_FOOT_MULTIPLIERS: [i64; 14] = [5, 5, 5, 4, 3, 2, 1, 1, 2, 3, 4, 5, 5, 5];
/// Lunar foot accumulated constants, indexed by anomaly remainder - 1.
pub const LUNAR_FOOT_CONSTANTS: [i64; 14] = [5, 10, 15, 19, 22, 24, 25, 24, 22, 19, 15, 10, 5, 0];
/// Largest anomaly remainder on the front foot.
pub const LUNAR_FRONT_LAST: i64 = 6;

/// Divisor of the merged solar hour count.
pub const SOLAR_FOOT_DIVISOR: i64 = 135;
/// Solar anomaly steps per half circle.
pub const SOLAR_ANOMALY_STEPS: i64 = 6;
/// Solar foot multipliers, indexed by quotient.
pub const SOLAR_FOOT_MULTIPLIERS: [i64; 6] = [6, 4, 1, 1, 4, 6];
/// Solar foot accumulated constants, indexed by quotient - 1.
pub const SOLAR_FOOT_CONSTANTS: [i64; 6] = [6, 10, 11, 10, 6, 0];
/// Largest solar quotient on the front foot.
pub const SOLAR_FRONT_LAST: i64 = 2;

/// Solar position at the epoch of the anomaly ("birth" of the sun).
pub const SOLAR_BIRTH: [i64; 5] = [6, 45, 0, 0, 0];
/// Half of the 27-mansion circle.
pub const SOLAR_HALF_CIRCLE: [i64; 5] = [13, 30, 0, 0, 0];

/// Lunar mansion advance per lunar day, in minutes of arc.
pub const LUNAR_MANSION_STEP: i64 = 54;

/// Fractional places used to turn a 707ths fraction into 67ths.
pub const FRACTION_67: i64 = 67;
pub const FRACTION_707: i64 = 707;
