/*
    Comparisons
*/

use super::{Comparison, Interval, IntervalContext};

impl Interval {
    /// Returns true if both intervals are the same single machine number.
    pub fn certainly_eq(&self, other: &Interval) -> bool {
        self.is_degenerate() && other.is_degenerate() && self.lo == other.lo
    }

    /// Returns true if the intervals share at least one point.
    pub fn possibly_eq(&self, other: &Interval) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }

    /// Tests equality using the given flavor.
    pub fn eq_with(&self, other: &Interval, comparison: Comparison) -> bool {
        match comparison {
            Comparison::Certain => self.certainly_eq(other),
            Comparison::Possible => self.possibly_eq(other),
        }
    }

    /// Tests inequality, the complement of [`Interval::eq_with`].
    pub fn ne_with(&self, other: &Interval, comparison: Comparison) -> bool {
        !self.eq_with(other, comparison)
    }

    /// Tests equality using the flavor configured in `ctx`.
    pub fn eq_in(&self, other: &Interval, ctx: &IntervalContext) -> bool {
        self.eq_with(other, ctx.comparison_kind())
    }

    /// Tests inequality using the flavor configured in `ctx`.
    pub fn ne_in(&self, other: &Interval, ctx: &IntervalContext) -> bool {
        self.ne_with(other, ctx.comparison_kind())
    }
}
