/*
    Defines a number
*/

use std::fmt;

use crate::{Context, Result};

/// The element type of a linear system.
///
/// A `Number` is anything the solver can iterate over:
/// a plain floating-point number or a verified enclosure.
/// Each operation is evaluated under the associated rounding context
/// and may fail, for example when dividing by zero.
pub trait Number: Clone + fmt::Debug + fmt::Display {
    /// The rounding context associated with this `Number`.
    type Ctx: Context;

    /// Returns the additive identity.
    fn zero(ctx: &Self::Ctx) -> Self;

    /// Adds this `Number` and another, rounding the result
    /// according to the provided context.
    fn add(&self, other: &Self, ctx: &Self::Ctx) -> Result<Self>;

    /// Subtracts another `Number` from this one, rounding the result
    /// according to the provided context.
    fn sub(&self, other: &Self, ctx: &Self::Ctx) -> Result<Self>;

    /// Multiplies this `Number` and another, rounding the result
    /// according to the provided context.
    fn mul(&self, other: &Self, ctx: &Self::Ctx) -> Result<Self>;

    /// Divides this `Number` by another, rounding the result
    /// according to the provided context.
    /// Fails with [`Error::DivisionByZero`](crate::Error::DivisionByZero)
    /// when the divisor is (or may be) zero.
    fn div(&self, other: &Self, ctx: &Self::Ctx) -> Result<Self>;

    /// Returns a representative plain number.
    /// Used only where an approximation suffices, like convergence tests.
    fn to_f64(&self, ctx: &Self::Ctx) -> f64;
}
