use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

const SCALE: i64 = 100;

/// Reagent quantity with two decimal places of precision.
///
/// Stored as hundredths in an `i64`. Addition and subtraction saturate at
/// `MAX` / `-MAX` instead of wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct FixedPoint2(i64);

impl FixedPoint2 {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);

    /// Whole units.
    pub const fn new(units: i64) -> Self {
        Self(units.saturating_mul(SCALE))
    }

    pub const fn from_hundredths(raw: i64) -> Self {
        Self(raw)
    }

    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(value as f64)
    }

    pub fn from_f64(value: f64) -> Self {
        let scaled = (value * SCALE as f64).round();
        if scaled >= i64::MAX as f64 {
            Self::MAX
        } else if scaled <= -(i64::MAX as f64) {
            Self(-i64::MAX)
        } else {
            Self(scaled as i64)
        }
    }

    pub const fn hundredths(self) -> i64 {
        self.0
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Scale by a ratio, rounding to the nearest hundredth. Never negative.
    pub fn mul_ratio(self, ratio: f32) -> Self {
        if self.0 <= 0 || ratio <= 0.0 || !ratio.is_finite() {
            return Self::ZERO;
        }
        Self::from_f64(self.to_f64() * ratio as f64).max(Self::ZERO)
    }
}

impl Add for FixedPoint2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0).max(-i64::MAX))
    }
}

impl AddAssign for FixedPoint2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for FixedPoint2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0).max(-i64::MAX))
    }
}

impl SubAssign for FixedPoint2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<i64> for FixedPoint2 {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self(self.0.saturating_mul(rhs))
    }
}

impl Mul<usize> for FixedPoint2 {
    type Output = Self;

    fn mul(self, rhs: usize) -> Self {
        self * i64::try_from(rhs).unwrap_or(i64::MAX)
    }
}

impl Sum for FixedPoint2 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + q)
    }
}

impl From<f64> for FixedPoint2 {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<FixedPoint2> for f64 {
    fn from(value: FixedPoint2) -> Self {
        value.to_f64()
    }
}

impl fmt::Display for FixedPoint2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::MAX {
            return write!(f, "max");
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / SCALE as u64;
        let frac = abs % SCALE as u64;
        match frac {
            0 => write!(f, "{sign}{whole}"),
            f2 if f2 % 10 == 0 => write!(f, "{sign}{whole}.{}", f2 / 10),
            f2 => write!(f, "{sign}{whole}.{f2:02}"),
        }
    }
}
