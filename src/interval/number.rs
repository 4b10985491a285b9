/*
    Definition of `Interval` constructors and getters
*/

use rug::float::{Constant, Round};
use rug::Float;

use super::util::PREC;
use super::{Interval, IntervalContext, RoundingMode};
use crate::{Error, Number, Result};

// Constructors and getters
impl Interval {
    /// Creates the degenerate interval `[0, 0]`.
    pub fn new() -> Self {
        Self::from_raw(0.0, 0.0, false)
    }

    /// Creates the degenerate interval `[0, 0]`.
    pub fn zero() -> Self {
        Self::new()
    }

    /// Creates the degenerate interval `[1, 1]`.
    pub fn one() -> Self {
        Self::from_raw(1.0, 1.0, false)
    }

    /// Returns the tightest enclosure of pi.
    pub fn pi() -> Self {
        let (lo, _) = Float::with_val_round(PREC, Constant::Pi, Round::Down);
        let (hi, _) = Float::with_val_round(PREC, Constant::Pi, Round::Up);
        Self::from_raw(lo.to_f64_round(Round::Down), hi.to_f64_round(Round::Up), false)
    }

    /// Returns the tightest enclosure of Euler's number.
    pub fn e() -> Self {
        let mut lo = Float::with_val(PREC, 1);
        lo.exp_round(Round::Down);
        let mut hi = Float::with_val(PREC, 1);
        hi.exp_round(Round::Up);
        Self::from_raw(lo.to_f64_round(Round::Down), hi.to_f64_round(Round::Up), false)
    }

    /// Creates the degenerate interval `[x, x]`.
    /// A machine number is its own exact enclosure.
    /// Fails if `x` is NaN.
    pub fn point(x: f64) -> Result<Self> {
        if x.is_nan() {
            Err(Error::Parse(x.to_string()))
        } else {
            Ok(Self::from_raw(x, x, false))
        }
    }

    /// Creates `[lo, hi]` from bounds that are already machine numbers.
    /// Fails with [`Error::InvalidBounds`] if `lo > hi` or either is NaN.
    pub fn from_f64_bounds(lo: f64, hi: f64) -> Result<Self> {
        if lo <= hi {
            Ok(Self::from_raw(lo, hi, false))
        } else {
            Err(Error::InvalidBounds {
                left: lo.to_string(),
                right: hi.to_string(),
            })
        }
    }

    // Callers guarantee `lo <= hi`.
    pub(crate) fn from_raw(lo: f64, hi: f64, strict: bool) -> Self {
        debug_assert!(lo <= hi, "unordered interval bounds: [{}, {}]", lo, hi);
        Self { lo, hi, strict }
    }

    /// Sets the `strict` flag.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns the lower bound.
    pub fn lower(&self) -> f64 {
        self.lo
    }

    /// Returns the upper bound.
    pub fn upper(&self) -> f64 {
        self.hi
    }

    /// Returns true if plain numbers may not be mixed into
    /// operations on this interval.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns true if this interval is a single machine number.
    pub fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }

    /// Returns true if `x` lies within this interval.
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Returns an upper bound on the diameter `hi - lo`.
    pub fn width(&self, ctx: &IntervalContext) -> f64 {
        let scope = ctx.rounding().enter(RoundingMode::TowardPositive);
        scope.sub(self.hi, self.lo)
    }

    /// Returns an approximate center, `lo + width / 2`.
    /// The result is not guaranteed to lie exactly at the midpoint.
    pub fn midpoint(&self, ctx: &IntervalContext) -> f64 {
        self.lo + self.width(ctx) / 2.0
    }
}

// Implementing `Default`
impl Default for Interval {
    fn default() -> Self {
        Self::new()
    }
}

// Implementing `Number` for `Interval`
impl Number for Interval {
    type Ctx = IntervalContext;

    fn zero(_: &IntervalContext) -> Self {
        Interval::zero()
    }

    fn add(&self, other: &Self, ctx: &IntervalContext) -> Result<Self> {
        Ok(Interval::add(self, other, ctx))
    }

    fn sub(&self, other: &Self, ctx: &IntervalContext) -> Result<Self> {
        Ok(Interval::sub(self, other, ctx))
    }

    fn mul(&self, other: &Self, ctx: &IntervalContext) -> Result<Self> {
        Ok(Interval::mul(self, other, ctx))
    }

    fn div(&self, other: &Self, ctx: &IntervalContext) -> Result<Self> {
        Interval::div(self, other, ctx)
    }

    fn to_f64(&self, ctx: &IntervalContext) -> f64 {
        self.midpoint(ctx)
    }
}
