//! The five elements of a traditional day.
//!
//! Starting from the month count since the 1027 epoch, the mean positions of
//! the moon (in weekday units) and the sun (in lunar mansions) are advanced
//! to the requested day, corrected by the lunar and solar foot intervals, and
//! combined into the fixed weekday, the fixed day, the two asterisms and the
//! conjunction. The pair of effects (karanas) depends on the day number only.

use serde::{Serialize, Serializer};
use tracing::{trace, warn};

use crate::consts::{
    ANOMALY_BASE_MOTION, ANOMALY_BASE_OFFSET, ANOMALY_PERIODS, CYCLE_BASE_MONTH, CYCLE_BASE_YEAR,
    CYCLE_YEARS, FRACTION_67, FRACTION_707, INTERCALARY_REMAINDERS, LEAP_CORRECTION_CYCLE,
    LUNAR_ANOMALY_STEPS, LUNAR_DAY_STEP, LUNAR_FOOT_CONSTANTS, LUNAR_FOOT_DIVISOR,
    LUNAR_FOOT_MULTIPLIERS, LUNAR_FOOT_PERIODS, LUNAR_FRONT_LAST, LUNAR_MANSION_STEP,
    MONTHS_PER_YEAR, SOLAR_ANOMALY_STEPS, SOLAR_BASE_MOTION, SOLAR_BIRTH, SOLAR_DAY_STEP,
    SOLAR_FINE_PERIODS, SOLAR_FOOT_CONSTANTS, SOLAR_FOOT_DIVISOR, SOLAR_FOOT_MULTIPLIERS,
    SOLAR_FOOT_PERIODS, SOLAR_FRONT_LAST, SOLAR_HALF_CIRCLE, SOLAR_PERIODS, WEEKDAY_BASE_MOTION,
    WEEKDAY_BASE_OFFSET, WEEKDAY_FINE_PERIODS, WEEKDAY_PERIODS,
};
use crate::gregorian::GregorianDate;
use crate::locator::{TraditionalDate, locate};
use crate::prelude::*;
use crate::radix::{MixedRadix, expand_fraction, foot_cascade, reduce};

/// Parity of the lunar anomaly half cycle; an odd half subtracts the lunar foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

/// Which half of the anomaly table a foot interval is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FootClass {
    Front,
    Back,
}

/// One of the eleven karanas (half lunar days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Effect {
    #[display(fmt = "毗支")]
    Vishti,
    #[display(fmt = "枝稍")]
    Bava,
    #[display(fmt = "孺蜜")]
    Balava,
    #[display(fmt = "贵种")]
    Kaulava,
    #[display(fmt = "捣麻")]
    Taitila,
    #[display(fmt = "家生")]
    Gara,
    #[display(fmt = "商贾")]
    Vanija,
    #[display(fmt = "吉祥")]
    Shakuni,
    #[display(fmt = "四足")]
    Chatushpada,
    #[display(fmt = "蛟龙")]
    Naga,
    #[display(fmt = "不净")]
    Kimstughna,
}

impl Effect {
    const ALL: [Self; 11] = [
        Self::Vishti,
        Self::Bava,
        Self::Balava,
        Self::Kaulava,
        Self::Taitila,
        Self::Gara,
        Self::Vanija,
        Self::Shakuni,
        Self::Chatushpada,
        Self::Naga,
        Self::Kimstughna,
    ];

    /// The seven karanas that rotate through days 2 to 28.
    const MOVABLE: [Self; 7] = [
        Self::Vishti,
        Self::Bava,
        Self::Balava,
        Self::Kaulava,
        Self::Taitila,
        Self::Gara,
        Self::Vanija,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The two karanas of a traditional day (`1..=30`).
    pub fn for_day(day: u8) -> [Self; 2] {
        match day {
            1 => [Self::Kimstughna, Self::Bava],
            29 => [Self::Vishti, Self::Shakuni],
            30 => [Self::Chatushpada, Self::Naga],
            d => {
                let second = (2 * usize::from(d)).saturating_sub(1) % Self::MOVABLE.len();
                let first = (second + Self::MOVABLE.len() - 1) % Self::MOVABLE.len();
                [Self::MOVABLE[first], Self::MOVABLE[second]]
            },
        }
    }
}

impl Serialize for Effect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Month count since the third month of 1027, with its leap correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EpochMonth {
    count:          i64,
    leap_remainder: i64,
}

impl EpochMonth {
    pub fn new(year: i32, month: u8) -> Self {
        let years = i64::from((year - CYCLE_BASE_YEAR).rem_euclid(CYCLE_YEARS));
        let months = i64::from((i32::from(month) - CYCLE_BASE_MONTH).rem_euclid(12));
        let elapsed = years * MONTHS_PER_YEAR as i64 + months;
        Self {
            count:          elapsed + (2 * elapsed).div_euclid(LEAP_CORRECTION_CYCLE),
            leap_remainder: (2 * elapsed).rem_euclid(LEAP_CORRECTION_CYCLE),
        }
    }

    /// Months elapsed, including the accrued leap months.
    pub const fn count(&self) -> i64 {
        self.count
    }

    pub const fn leap_remainder(&self) -> i64 {
        self.leap_remainder
    }

    pub fn is_intercalary(&self) -> bool {
        INTERCALARY_REMAINDERS.contains(&self.leap_remainder)
    }
}

/// The five vectors and the effect pair of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiveElements {
    fixed_weekday:        MixedRadix<6>,
    solar_lunar_asterism: MixedRadix<6>,
    fixed_day:            MixedRadix<5>,
    conjunction:          MixedRadix<6>,
    lunar_asterism:       MixedRadix<6>,
    #[serde(rename = "effect", serialize_with = "serialize_effects")]
    effects:              Option<[Effect; 2]>,
}

impl FiveElements {
    /// All-zero vectors and no effects, returned for days the table does not cover.
    pub const fn unavailable() -> Self {
        Self {
            fixed_weekday:        MixedRadix::zero(),
            solar_lunar_asterism: MixedRadix::zero(),
            fixed_day:            MixedRadix::zero(),
            conjunction:          MixedRadix::zero(),
            lunar_asterism:       MixedRadix::zero(),
            effects:              None,
        }
    }

    pub const fn is_unavailable(&self) -> bool {
        self.effects.is_none()
    }

    /// Weekday, hour, minute, breath, 67ths and 707ths.
    pub const fn fixed_weekday(&self) -> MixedRadix<6> {
        self.fixed_weekday
    }

    pub const fn solar_lunar_asterism(&self) -> MixedRadix<6> {
        self.solar_lunar_asterism
    }

    /// Mansion, hour, minute, breath and 67ths of the true sun.
    pub const fn fixed_day(&self) -> MixedRadix<5> {
        self.fixed_day
    }

    pub const fn conjunction(&self) -> MixedRadix<6> {
        self.conjunction
    }

    pub const fn lunar_asterism(&self) -> MixedRadix<6> {
        self.lunar_asterism
    }

    pub const fn effects(&self) -> Option<[Effect; 2]> {
        self.effects
    }
}

// The sentinel keeps the two-slot shape with empty labels.
#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
fn serialize_effects<S>(effects: &Option<[Effect; 2]>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match effects {
        Some(pair) => pair.serialize(serializer),
        None => ["", ""].serialize(serializer),
    }
}

/// Computes the five elements of a Gregorian day.
///
/// Days outside the epoch table yield [`FiveElements::unavailable`].
pub fn compute(date: GregorianDate) -> FiveElements {
    match locate(date) {
        Ok(traditional) => compute_traditional(&traditional),
        Err(err) => {
            warn!(%date, %err, "five elements unavailable");
            FiveElements::unavailable()
        },
    }
}

/// Computes the five elements of a traditional day.
#[tracing::instrument(level = "trace", skip_all, fields(date = %date))]
pub fn compute_traditional(date: &TraditionalDate) -> FiveElements {
    let day = i64::from(date.day());
    let epoch = EpochMonth::new(date.year(), date.month());
    trace!(
        count = epoch.count(),
        leap_remainder = epoch.leap_remainder(),
        intercalary = epoch.is_intercalary(),
        "epoch month"
    );

    let c = epoch.count();
    let weekday_base = (MixedRadix::new(WEEKDAY_BASE_OFFSET) + MixedRadix::new(WEEKDAY_BASE_MOTION).scale(c))
        .normalize(&WEEKDAY_PERIODS);
    let solar_base = MixedRadix::new(SOLAR_BASE_MOTION)
        .scale(c)
        .normalize(&SOLAR_PERIODS);
    let [anomaly_days, anomaly_fraction] = reduce(
        [
            ANOMALY_BASE_OFFSET[0] + ANOMALY_BASE_MOTION[0] * c,
            ANOMALY_BASE_OFFSET[1] + ANOMALY_BASE_MOTION[1] * c,
        ],
        &ANOMALY_PERIODS,
    );

    // mean positions: the day's row of the daily tables on top of the month base
    let mid_weekday =
        (weekday_base + MixedRadix::new(LUNAR_DAY_STEP).scale(day).normalize(&WEEKDAY_PERIODS))
            .normalize(&WEEKDAY_PERIODS);
    let mid_sun = (solar_base + MixedRadix::new(SOLAR_DAY_STEP).scale(day).normalize(&SOLAR_PERIODS))
        .normalize(&SOLAR_PERIODS);

    let lunar = LunarFoot::new(anomaly_days + day, anomaly_fraction);
    trace!(parity = ?lunar.parity, class = ?lunar.class, interval = ?lunar.interval, "lunar foot");
    let lunar_interval = lunar.interval.widen::<5>(1);
    let half_fixed = match lunar.parity {
        Parity::Even => mid_weekday + lunar_interval,
        Parity::Odd => mid_weekday - lunar_interval,
    }
    .normalize(&WEEKDAY_PERIODS);
    let half_fixed = split_fraction(half_fixed);

    let solar = SolarFoot::new(mid_sun);
    trace!(
        half_circle = solar.half_circle,
        class = ?solar.class,
        interval = ?solar.interval,
        "solar foot"
    );
    let (fixed_weekday, fixed_day) = if solar.half_circle {
        (
            half_fixed + solar.interval.widen(1),
            mid_sun + solar.interval.widen(1),
        )
    } else {
        (
            half_fixed - solar.interval.widen(1),
            mid_sun - solar.interval.widen(1),
        )
    };
    let fixed_weekday = fixed_weekday.normalize(&WEEKDAY_FINE_PERIODS);
    let fixed_day = fixed_day.normalize(&SOLAR_PERIODS);

    let mansion_arc = LUNAR_MANSION_STEP * day;
    let lunar_asterism = (fixed_day + MixedRadix::new([mansion_arc / 60, mansion_arc % 60, 0, 0, 0]))
        .normalize(&SOLAR_PERIODS)
        .widen::<6>(0);
    let mut weekday_fraction = fixed_weekday.digits();
    weekday_fraction[0] = 0;
    let solar_lunar_asterism =
        (lunar_asterism - MixedRadix::new(weekday_fraction)).normalize(&SOLAR_FINE_PERIODS);
    let conjunction = (solar_lunar_asterism + fixed_day.widen(0)).normalize(&SOLAR_FINE_PERIODS);

    FiveElements {
        fixed_weekday,
        solar_lunar_asterism,
        fixed_day,
        conjunction,
        lunar_asterism,
        effects: Some(Effect::for_day(date.day())),
    }
}

/// Splits the trailing 707ths of a weekday value into 67ths and a 707ths remainder.
fn split_fraction(value: MixedRadix<5>) -> MixedRadix<6> {
    let [a, b, c, d, fraction] = value.digits();
    let scaled = fraction * FRACTION_67;
    MixedRadix::new([a, b, c, d, scaled / FRACTION_707, scaled % FRACTION_707])
}

/// Reads `table` at `index` taken modulo its length.
fn cyclic<const N: usize>(table: &[i64; N], index: i64) -> i64 {
    let len = N as i64;
    // rem_euclid keeps the index in 0..N
    table[index.rem_euclid(len) as usize]
}

/// The lunar foot interval (hour, minute, breath, 707ths).
#[derive(Debug, Clone, Copy)]
struct LunarFoot {
    parity:   Parity,
    class:    FootClass,
    interval: MixedRadix<4>,
}

impl LunarFoot {
    fn new(anomaly_steps: i64, fraction: i64) -> Self {
        let half_cycles = anomaly_steps.div_euclid(LUNAR_ANOMALY_STEPS);
        let step = anomaly_steps.rem_euclid(LUNAR_ANOMALY_STEPS);
        let parity = if half_cycles % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        };
        let class = if step <= LUNAR_FRONT_LAST {
            FootClass::Front
        } else {
            FootClass::Back
        };

        let multiplier = cyclic(&LUNAR_FOOT_MULTIPLIERS, step);
        let constant = cyclic(&LUNAR_FOOT_CONSTANTS, step - 1);
        let [whole, hours, breaths, fine] = expand_fraction(
            fraction,
            LUNAR_FOOT_DIVISOR,
            &[multiplier, LUNAR_FOOT_PERIODS[1], LUNAR_FOOT_PERIODS[2], LUNAR_FOOT_PERIODS[3]],
        );

        let combined = match class {
            FootClass::Front => [constant + whole, hours, breaths, fine],
            FootClass::Back => {
                let [h, b, f] = reduce(
                    [
                        LUNAR_FOOT_PERIODS[1] - 1 - hours,
                        LUNAR_FOOT_PERIODS[2] - 1 - breaths,
                        LUNAR_FOOT_PERIODS[3] - fine,
                    ],
                    &[LUNAR_FOOT_PERIODS[1], LUNAR_FOOT_PERIODS[2], LUNAR_FOOT_PERIODS[3]],
                );
                [constant - whole - 1, h, b, f]
            },
        };

        Self {
            parity,
            class,
            interval: MixedRadix::new(combined).normalize(&LUNAR_FOOT_PERIODS),
        }
    }
}

/// The solar foot interval (hour, minute, breath, 67ths).
#[derive(Debug, Clone, Copy)]
struct SolarFoot {
    half_circle: bool,
    class:       FootClass,
    interval:    MixedRadix<4>,
}

impl SolarFoot {
    fn new(mid_sun: MixedRadix<5>) -> Self {
        let from_birth = (mid_sun - MixedRadix::new(SOLAR_BIRTH)).normalize(&SOLAR_PERIODS);
        let half_circle = past_half_circle(&from_birth);
        let arc = if half_circle {
            (from_birth - MixedRadix::new(SOLAR_HALF_CIRCLE)).normalize(&SOLAR_PERIODS)
        } else {
            from_birth
        };

        let hours = arc[0] * SOLAR_PERIODS[1] + arc[1];
        let step = hours.div_euclid(SOLAR_FOOT_DIVISOR) % SOLAR_ANOMALY_STEPS;
        let remainder = hours.rem_euclid(SOLAR_FOOT_DIVISOR);
        let class = if step <= SOLAR_FRONT_LAST {
            FootClass::Front
        } else {
            FootClass::Back
        };

        let multiplier = cyclic(&SOLAR_FOOT_MULTIPLIERS, step);
        let constant = cyclic(&SOLAR_FOOT_CONSTANTS, step - 1);
        let ([whole, minutes, breaths, fine], _) = foot_cascade(
            [remainder, arc[2], arc[3], arc[4]].map(|d| d * multiplier),
            &SOLAR_FOOT_PERIODS,
        );

        let combined = match class {
            FootClass::Front => [constant + whole, minutes, breaths, fine],
            FootClass::Back => [
                constant - whole - 1,
                SOLAR_FOOT_PERIODS[1] - 1 - minutes,
                SOLAR_FOOT_PERIODS[2] - 1 - breaths,
                SOLAR_FOOT_PERIODS[3] - fine,
            ],
        };

        Self {
            half_circle,
            class,
            interval: MixedRadix::new(combined).normalize(&SOLAR_FOOT_PERIODS),
        }
    }
}

/// Whether the sun has passed half of the mansion circle (13 mansions 30 hours).
fn past_half_circle(arc: &MixedRadix<5>) -> bool {
    (arc[0], arc[1]) >= (SOLAR_HALF_CIRCLE[0], SOLAR_HALF_CIRCLE[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Expected {
        gregorian:            &'static str,
        fixed_weekday:        [i64; 6],
        solar_lunar_asterism: [i64; 6],
        fixed_day:            [i64; 5],
        conjunction:          [i64; 6],
        lunar_asterism:       [i64; 6],
        effects:              [&'static str; 2],
    }

    const REFERENCE: [Expected; 8] = [
        Expected {
            gregorian:            "2025-11-01",
            fixed_weekday:        [0, 46, 51, 2, 29, 195],
            solar_lunar_asterism: [22, 46, 6, 1, 15, 512],
            fixed_day:            [13, 38, 57, 3, 45],
            conjunction:          [9, 25, 3, 4, 60, 512],
            lunar_asterism:       [23, 32, 57, 3, 45, 0],
            effects:              ["商贾", "毗支"],
        },
        Expected {
            gregorian:            "1951-01-08",
            fixed_weekday:        [4, 12, 4, 2, 12, 272],
            solar_lunar_asterism: [19, 16, 15, 4, 47, 435],
            fixed_day:            [18, 34, 20, 0, 60],
            conjunction:          [10, 50, 35, 5, 40, 435],
            lunar_asterism:       [19, 28, 20, 0, 60, 0],
            effects:              ["不净", "枝稍"],
        },
        Expected {
            gregorian:            "2024-02-10",
            fixed_weekday:        [5, 21, 16, 3, 33, 308],
            solar_lunar_asterism: [21, 0, 42, 0, 29, 399],
            fixed_day:            [20, 27, 58, 3, 63],
            conjunction:          [14, 28, 40, 4, 25, 399],
            lunar_asterism:       [21, 21, 58, 3, 63, 0],
            effects:              ["不净", "枝稍"],
        },
        Expected {
            gregorian:            "2025-11-20",
            fixed_weekday:        [5, 4, 4, 4, 4, 60],
            solar_lunar_asterism: [14, 58, 26, 3, 66, 647],
            fixed_day:            [15, 2, 31, 2, 4],
            conjunction:          [3, 0, 58, 0, 3, 647],
            lunar_asterism:       [15, 2, 31, 2, 4, 0],
            effects:              ["四足", "蛟龙"],
        },
        Expected {
            gregorian:            "2025-10-20",
            fixed_weekday:        [2, 18, 8, 1, 41, 562],
            solar_lunar_asterism: [11, 34, 31, 4, 25, 145],
            fixed_day:            [12, 46, 40, 0, 0],
            conjunction:          [24, 21, 11, 4, 25, 145],
            lunar_asterism:       [11, 52, 40, 0, 0, 0],
            effects:              ["毗支", "吉祥"],
        },
        Expected {
            gregorian:            "2008-08-08",
            fixed_weekday:        [4, 46, 52, 0, 7, 453],
            solar_lunar_asterism: [10, 59, 26, 2, 2, 254],
            fixed_day:            [5, 28, 18, 2, 10],
            conjunction:          [16, 27, 44, 4, 12, 254],
            lunar_asterism:       [11, 46, 18, 2, 10, 0],
            effects:              ["家生", "商贾"],
        },
        Expected {
            gregorian:            "1999-12-31",
            fixed_weekday:        [6, 7, 50, 2, 36, 590],
            solar_lunar_asterism: [12, 38, 59, 4, 23, 117],
            fixed_day:            [18, 10, 50, 0, 60],
            conjunction:          [3, 49, 49, 5, 16, 117],
            lunar_asterism:       [12, 46, 50, 0, 60, 0],
            effects:              ["捣麻", "家生"],
        },
        Expected {
            gregorian:            "2051-02-11",
            fixed_weekday:        [5, 30, 31, 5, 43, 180],
            solar_lunar_asterism: [21, 8, 38, 4, 55, 527],
            fixed_day:            [21, 39, 10, 4, 32],
            conjunction:          [15, 47, 49, 3, 20, 527],
            lunar_asterism:       [21, 39, 10, 4, 32, 0],
            effects:              ["四足", "蛟龙"],
        },
    ];

    #[test]
    fn test_reference_days() {
        for case in &REFERENCE {
            let elements = compute(case.gregorian.parse().unwrap());
            let g = case.gregorian;
            assert_eq!(elements.fixed_weekday().digits(), case.fixed_weekday, "{g} fixed weekday");
            assert_eq!(
                elements.solar_lunar_asterism().digits(),
                case.solar_lunar_asterism,
                "{g} solar lunar asterism"
            );
            assert_eq!(elements.fixed_day().digits(), case.fixed_day, "{g} fixed day");
            assert_eq!(elements.conjunction().digits(), case.conjunction, "{g} conjunction");
            assert_eq!(elements.lunar_asterism().digits(), case.lunar_asterism, "{g} lunar asterism");

            let effects = elements.effects().unwrap().map(|e| e.to_string());
            assert_eq!(effects, case.effects, "{g} effects");
        }
    }

    #[test]
    fn test_out_of_range_is_unavailable() {
        for s in ["1951-01-07", "2051-02-12", "1800-01-01"] {
            let elements = compute(s.parse().unwrap());
            assert!(elements.is_unavailable(), "{s}");
            assert_eq!(elements, FiveElements::unavailable());
            assert!(elements.fixed_weekday().is_zero());
            assert!(elements.fixed_day().is_zero());
        }
    }

    #[test]
    fn test_compute_is_deterministic() {
        let date: GregorianDate = "2025-11-01".parse().unwrap();
        assert_eq!(compute(date), compute(date));
    }

    #[test]
    fn test_compute_traditional_matches_compute() {
        let gregorian: GregorianDate = "2025-11-01".parse().unwrap();
        let traditional = TraditionalDate::new(2025, 9, 11).unwrap();
        assert_eq!(compute_traditional(&traditional), compute(gregorian));
    }

    #[test]
    fn test_epoch_month() {
        struct TestCase {
            year:           i32,
            month:          u8,
            count:          i64,
            leap_remainder: i64,
            intercalary:    bool,
        }

        let cases = [
            TestCase {
                year:           2025,
                month:          9,
                count:          476,
                leap_remainder: 14,
                intercalary:    false,
            },
            TestCase {
                year:           1027,
                month:          3,
                count:          0,
                leap_remainder: 0,
                intercalary:    false,
            },
            TestCase {
                year:           1027,
                month:          2,
                count:          11,
                leap_remainder: 22,
                intercalary:    false,
            },
            TestCase {
                year:           2049,
                month:          3,
                count:          24,
                leap_remainder: 48,
                intercalary:    true,
            },
            TestCase {
                year:           2051,
                month:          12,
                count:          58,
                leap_remainder: 49,
                intercalary:    true,
            },
        ];

        for case in &cases {
            let epoch = EpochMonth::new(case.year, case.month);
            let label = format!("{}-{}", case.year, case.month);
            assert_eq!(epoch.count(), case.count, "{label} count");
            assert_eq!(epoch.leap_remainder(), case.leap_remainder, "{label} remainder");
            assert_eq!(epoch.is_intercalary(), case.intercalary, "{label} intercalary");
        }
    }

    #[test]
    fn test_effects_by_day() {
        let labels = |day| Effect::for_day(day).map(|e| e.to_string());
        assert_eq!(labels(1), ["不净", "枝稍"]);
        assert_eq!(labels(2), ["孺蜜", "贵种"]);
        assert_eq!(labels(4), ["商贾", "毗支"]);
        assert_eq!(labels(5), ["枝稍", "孺蜜"]);
        assert_eq!(labels(28), ["家生", "商贾"]);
        assert_eq!(labels(29), ["毗支", "吉祥"]);
        assert_eq!(labels(30), ["四足", "蛟龙"]);

        for day in 2..=28 {
            let [first, second] = Effect::for_day(day);
            assert_eq!(
                (first.index() + 1) % 7,
                second.index(),
                "day {day}: movable karanas follow each other"
            );
        }
    }

    #[test]
    fn test_effect_index() {
        for index in 0..=10 {
            assert_eq!(Effect::from_index(index).unwrap().index(), index);
        }
        assert_eq!(Effect::from_index(11), None);
        assert_eq!(Effect::from_index(10), Some(Effect::Kimstughna));
    }

    #[test]
    fn test_half_circle_threshold() {
        let at = |d: [i64; 5]| past_half_circle(&MixedRadix::new(d));
        assert!(at([13, 30, 0, 0, 0]));
        assert!(at([14, 0, 0, 0, 0]));
        assert!(at([26, 59, 59, 5, 66]));
        assert!(!at([13, 29, 59, 5, 66]));
        assert!(!at([0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_split_fraction() {
        let split = split_fraction(MixedRadix::new([0, 46, 51, 2, 300]));
        assert_eq!(split.digits(), [0, 46, 51, 2, 28, 304]);
    }

    #[test]
    fn test_serialize_shape() {
        let elements = compute("2025-11-01".parse().unwrap());
        let json = serde_json::to_value(elements).unwrap();
        assert_eq!(json["fixedWeekday"], serde_json::json!([0, 46, 51, 2, 29, 195]));
        assert_eq!(json["fixedDay"], serde_json::json!([13, 38, 57, 3, 45]));
        assert_eq!(json["effect"], serde_json::json!(["商贾", "毗支"]));

        let sentinel = serde_json::to_value(FiveElements::unavailable()).unwrap();
        assert_eq!(sentinel["effect"], serde_json::json!(["", ""]));
        assert_eq!(sentinel["fixedDay"], serde_json::json!([0, 0, 0, 0, 0]));
    }
}
