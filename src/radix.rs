//! Mixed-radix arithmetic.
//!
//! Every astronomical quantity of the calendar is a vector of digits, most
//! significant first, where each place has its own period (for example
//! weekday / hour / minute / breath / 707ths of a breath). Arithmetic is done
//! digit-wise and then normalized with floor division so negative
//! intermediates borrow correctly. The leading digit wraps modulo its own
//! period; overflow past it is dropped.

use crate::consts::SOLAR_FOOT_DIVISOR;
use serde::ser::{Serialize, Serializer};
use std::ops::{Add, Index, Sub};

/// Normalizes `values` against `periods`, least significant place first.
///
/// A negative place borrows one unit from the place to its left before its
/// carry is taken; carries use floor division. The result has every place
/// `i > 0` in `0..periods[i]` and the leading place reduced modulo
/// `periods[0]`.
pub fn reduce<const N: usize>(mut values: [i64; N], periods: &[i64; N]) -> [i64; N] {
    let mut carry = 0;
    for j in (1..N).rev() {
        if values[j] < 0 {
            values[j] += periods[j];
            values[j - 1] -= 1;
        }
        let v = values[j] + carry;
        carry = v.div_euclid(periods[j]);
        values[j] = v.rem_euclid(periods[j]);
    }
    if let Some(first) = values.first_mut() {
        *first = (*first + carry).rem_euclid(periods[0]);
    }
    values
}

/// Cascading division by 135 used for the solar foot interval.
///
/// Walks most significant first; each place absorbs the previous remainder
/// scaled by its own period. Returns the quotient of every place and the
/// final remainder.
pub fn foot_cascade<const N: usize>(values: [i64; N], periods: &[i64; N]) -> ([i64; N], i64) {
    let mut quotients = [0; N];
    let mut remainder = 0;
    for (j, (&v, &p)) in values.iter().zip(periods).enumerate() {
        let t = v + remainder * p;
        quotients[j] = t.div_euclid(SOLAR_FOOT_DIVISOR);
        remainder = t.rem_euclid(SOLAR_FOOT_DIVISOR);
    }
    (quotients, remainder)
}

/// Expands the fraction `numerator / divisor` into places of `periods`.
///
/// Each place is `numerator * period div divisor`, with the remainder
/// carried to the next place.
pub fn expand_fraction<const N: usize>(
    mut numerator: i64,
    divisor: i64,
    periods: &[i64; N],
) -> [i64; N] {
    let mut digits = [0; N];
    for (digit, &p) in digits.iter_mut().zip(periods) {
        let scaled = numerator * p;
        *digit = scaled.div_euclid(divisor);
        numerator = scaled.rem_euclid(divisor);
    }
    digits
}

/// A mixed-radix number: `N` digits, most significant first.
///
/// The value does not carry its periods; `+` and `-` work digit by digit and
/// [`MixedRadix::normalize`] brings the digits back into range for a given
/// period system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MixedRadix<const N: usize>([i64; N]);

impl<const N: usize> MixedRadix<N> {
    pub const fn new(digits: [i64; N]) -> Self {
        Self(digits)
    }

    pub const fn zero() -> Self {
        Self([0; N])
    }

    pub const fn digits(&self) -> [i64; N] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&d| d == 0)
    }

    #[must_use]
    pub fn normalize(self, periods: &[i64; N]) -> Self {
        Self(reduce(self.0, periods))
    }

    /// Multiplies every digit by `factor` (not normalized).
    #[must_use]
    pub fn scale(self, factor: i64) -> Self {
        Self(self.0.map(|d| d * factor))
    }

    /// Copies the digits into a zero-filled `M`-digit number starting at `offset`.
    ///
    /// Digits that would fall past the end are dropped.
    pub fn widen<const M: usize>(self, offset: usize) -> MixedRadix<M> {
        let mut digits = [0; M];
        for (slot, &d) in digits.iter_mut().skip(offset).zip(&self.0) {
            *slot = d;
        }
        MixedRadix(digits)
    }

    /// Flattens the digits into a single count of the least significant unit.
    pub fn value_in(&self, periods: &[i64; N]) -> i128 {
        self.0
            .iter()
            .zip(periods)
            .fold(0, |acc, (&d, &p)| acc * i128::from(p) + i128::from(d))
    }
}

impl<const N: usize> Default for MixedRadix<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[i64; N]> for MixedRadix<N> {
    fn from(digits: [i64; N]) -> Self {
        Self(digits)
    }
}

impl<const N: usize> Index<usize> for MixedRadix<N> {
    type Output = i64;

    fn index(&self, index: usize) -> &i64 {
        &self.0[index]
    }
}

impl<const N: usize> Add for MixedRadix<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<const N: usize> Sub for MixedRadix<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<const N: usize> Serialize for MixedRadix<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SOLAR_FOOT_PERIODS, WEEKDAY_FINE_PERIODS, WEEKDAY_PERIODS};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_reduce_known_cases() {
        struct TestCase {
            values:   [i64; 3],
            periods:  [i64; 3],
            expected: [i64; 3],
        }

        let cases = [
            TestCase {
                values:   [-1, -1, -1],
                periods:  [7, 60, 60],
                expected: [5, 58, 59],
            },
            TestCase {
                values:   [3, 125, -3],
                periods:  [7, 60, 60],
                expected: [5, 4, 57],
            },
            TestCase {
                values:   [6, 59, 60],
                periods:  [7, 60, 60],
                expected: [0, 0, 0],
            },
            TestCase {
                values:   [0, 0, -200],
                periods:  [27, 60, 67],
                expected: [26, 57, 1],
            },
        ];

        for case in &cases {
            assert_eq!(
                reduce(case.values, &case.periods),
                case.expected,
                "reduce({:?}, {:?})",
                case.values,
                case.periods
            );
        }
    }

    #[test]
    fn test_reduce_two_places() {
        assert_eq!(reduce([10, 70], &[28, 126]), [10, 70]);
        assert_eq!(reduce([30, 300], &[28, 126]), [4, 48]);
    }

    #[test]
    fn test_reduce_preserves_value() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let periods: [i64; 5] = std::array::from_fn(|_| rng.random_range(1..800));
            let values: [i64; 5] = std::array::from_fn(|_| rng.random_range(-5000..5000));
            let reduced = reduce(values, &periods);

            for (j, (&d, &p)) in reduced.iter().zip(&periods).enumerate() {
                assert!(
                    (0..p).contains(&d),
                    "place {j} = {d} out of 0..{p} for {values:?} / {periods:?}"
                );
            }

            let modulus: i128 = periods.iter().map(|&p| i128::from(p)).product();
            let before = MixedRadix::new(values).value_in(&periods);
            let after = MixedRadix::new(reduced).value_in(&periods);
            assert_eq!(
                before.rem_euclid(modulus),
                after,
                "value changed for {values:?} / {periods:?}"
            );
        }
    }

    #[test]
    fn test_foot_cascade_zero() {
        assert_eq!(foot_cascade([0; 4], &SOLAR_FOOT_PERIODS), ([0; 4], 0));
    }

    #[test]
    fn test_foot_cascade_known_case() {
        let values = [100, 20, 3, 50].map(|d| d * 6);
        assert_eq!(
            foot_cascade(values, &SOLAR_FOOT_PERIODS),
            ([4, 27, 3, 33], 66)
        );
    }

    #[test]
    fn test_expand_fraction() {
        // 70/126 of a unit at multiplier 3, then hours, breaths, 707ths
        assert_eq!(
            expand_fraction(70, 126, &[3, 60, 6, 707]),
            [1, 40, 0, 0]
        );
        assert_eq!(expand_fraction(0, 126, &[5, 60, 6, 707]), [0; 4]);
    }

    #[test]
    fn test_arithmetic_and_normalize() {
        let a = MixedRadix::new([6, 59, 59, 5, 706]);
        let one = MixedRadix::new([0, 0, 0, 0, 1]);
        assert_eq!((a + one).normalize(&WEEKDAY_PERIODS), MixedRadix::zero());
        assert_eq!(
            (MixedRadix::zero() - one).normalize(&WEEKDAY_PERIODS),
            a
        );
        assert_eq!(
            MixedRadix::new([0, 59, 3, 4, 16]).scale(2),
            MixedRadix::new([0, 118, 6, 8, 32])
        );
    }

    #[test]
    fn test_widen() {
        let foot = MixedRadix::new([1, 2, 3, 4]);
        assert_eq!(foot.widen::<6>(1), MixedRadix::new([0, 1, 2, 3, 4, 0]));
        assert_eq!(foot.widen::<5>(1), MixedRadix::new([0, 1, 2, 3, 4]));
        assert_eq!(foot.widen::<5>(0), MixedRadix::new([1, 2, 3, 4, 0]));
        let fine: MixedRadix<6> = MixedRadix::new([1, 2, 3, 4, 5]).widen(0);
        assert_eq!(fine.normalize(&WEEKDAY_FINE_PERIODS)[4], 5);
    }

    #[test]
    fn test_serializes_as_array() {
        let v = MixedRadix::new([0, 46, 51, 2, 29, 195]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[0,46,51,2,29,195]");
    }
}
