/*
    Arithmetic
*/

use super::{Interval, IntervalContext, RoundingMode};
use crate::{Error, Result};

// Treats the undefined `0 * inf` (and `inf / inf`) corner as zero
// so that it never poisons the min/max below.
#[inline]
fn corner(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x
    }
}

// `inf - inf` only arises from infinite degenerate operands;
// the result is then unbounded on that side.
#[inline]
fn lower_bound(x: f64) -> f64 {
    if x.is_nan() {
        f64::NEG_INFINITY
    } else {
        x
    }
}

#[inline]
fn upper_bound(x: f64) -> f64 {
    if x.is_nan() {
        f64::INFINITY
    } else {
        x
    }
}

// The four corner results `a.lo op b.lo`, `a.lo op b.hi`, ...
#[inline]
fn corners<F>(a: &Interval, b: &Interval, op: F) -> [f64; 4]
where
    F: Fn(f64, f64) -> f64,
{
    [
        corner(op(a.lo, b.lo)),
        corner(op(a.lo, b.hi)),
        corner(op(a.hi, b.lo)),
        corner(op(a.hi, b.hi)),
    ]
}

impl Interval {
    /// Adds this `Interval` and another.
    /// The lower bound is rounded toward -infinity,
    /// the upper bound toward +infinity.
    pub fn add(&self, other: &Interval, ctx: &IntervalContext) -> Interval {
        let scope = ctx.rounding().enter(RoundingMode::TowardNegative);
        let lo = lower_bound(scope.add(self.lo, other.lo));
        scope.set(RoundingMode::TowardPositive);
        let hi = upper_bound(scope.add(self.hi, other.hi));
        Interval::from_raw(lo, hi, self.strict || other.strict)
    }

    /// Subtracts another `Interval` from this one, rounding outward.
    pub fn sub(&self, other: &Interval, ctx: &IntervalContext) -> Interval {
        let scope = ctx.rounding().enter(RoundingMode::TowardNegative);
        let lo = lower_bound(scope.sub(self.lo, other.hi));
        scope.set(RoundingMode::TowardPositive);
        let hi = upper_bound(scope.sub(self.hi, other.lo));
        Interval::from_raw(lo, hi, self.strict || other.strict)
    }

    /// Multiplies this `Interval` and another, rounding outward.
    pub fn mul(&self, other: &Interval, ctx: &IntervalContext) -> Interval {
        let scope = ctx.rounding().enter(RoundingMode::TowardNegative);
        let lo = corners(self, other, |x, y| scope.mul(x, y))
            .into_iter()
            .fold(f64::INFINITY, f64::min);
        scope.set(RoundingMode::TowardPositive);
        let hi = corners(self, other, |x, y| scope.mul(x, y))
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max);
        Interval::from_raw(lo, hi, self.strict || other.strict)
    }

    /// Divides this `Interval` by another, rounding outward.
    /// Fails with [`Error::DivisionByZero`] if the divisor contains zero.
    pub fn div(&self, other: &Interval, ctx: &IntervalContext) -> Result<Interval> {
        let scope = ctx.rounding().enter(RoundingMode::TowardNegative);
        if other.lo <= 0.0 && 0.0 <= other.hi {
            return Err(Error::DivisionByZero);
        }

        let lo = corners(self, other, |x, y| scope.div(x, y))
            .into_iter()
            .fold(f64::INFINITY, f64::min);
        scope.set(RoundingMode::TowardPositive);
        let hi = corners(self, other, |x, y| scope.div(x, y))
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max);
        Ok(Interval::from_raw(lo, hi, self.strict || other.strict))
    }
}
