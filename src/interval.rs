/*
    Verified intervals
*/

mod arithmetic;
mod compare;
mod convert;
mod number;
mod rounding;
mod util;

pub use rounding::*;
pub use util::{next_down, next_up};

use crate::Context;

/** A closed interval `[lo, hi]` of machine numbers.
 *
 * An `Interval` is an enclosure: it is guaranteed to contain
 * the real value it was constructed from, or the exact result of
 * the arithmetic that produced it. Bounds are ordinary `f64` values
 * and `lo <= hi` always holds.
 *
 * The `strict` flag forbids mixing plain numbers into operations
 * on this interval (see [`Operand::coerce`](crate::ops::Operand::coerce)).
 * A result is strict if either operand was.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
    strict: bool,
}

/// Flavor of interval equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Comparison {
    /// Equal only if both intervals are the same single machine number.
    #[default]
    Certain,
    /// Equal if the intervals overlap at all.
    Possible,
}

/// Rounding context for [`Interval`] arithmetic.
///
/// Owns the rounding controller used by every operation and
/// the operator configuration that used to be global state:
/// whether plain numbers may be coerced, and which equality to use.
#[derive(Clone, Debug, Default)]
pub struct IntervalContext {
    rounding: RoundingController,
    strict_operators: bool,
    comparison: Comparison,
}

// Implementing IntervalContext
impl IntervalContext {
    /// Creates a new context that allows coercion of plain numbers
    /// and uses certain equality.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbids (or allows) mixing plain numbers into interval operations.
    pub fn strict_operators(mut self, strict: bool) -> Self {
        self.strict_operators = strict;
        self
    }

    /// Sets the equality flavor.
    pub fn comparison(mut self, comparison: Comparison) -> Self {
        self.comparison = comparison;
        self
    }

    /// Returns the rounding controller.
    pub fn rounding(&self) -> &RoundingController {
        &self.rounding
    }

    /// Returns true if plain numbers are never coerced.
    pub fn is_strict(&self) -> bool {
        self.strict_operators
    }

    /// Returns the equality flavor.
    pub fn comparison_kind(&self) -> Comparison {
        self.comparison
    }
}

impl Context for IntervalContext {}
