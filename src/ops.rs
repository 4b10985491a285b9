/*
    Operations mixing plain numbers and intervals
*/

use crate::interval::{Interval, IntervalContext};
use crate::{Error, Result};

/// Either operand of a mixed operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Number(f64),
    Interval(Interval),
}

impl Operand {
    /// Converts this operand into an interval.
    ///
    /// A plain number becomes the degenerate interval around it,
    /// unless `strict` is set, in which case it is rejected with
    /// [`Error::StrictModeViolation`].
    pub fn coerce(self, strict: bool) -> Result<Interval> {
        match self {
            Operand::Interval(i) => Ok(i),
            Operand::Number(_) if strict => Err(Error::StrictModeViolation),
            Operand::Number(x) => Interval::point(x),
        }
    }

    fn is_strict(&self) -> bool {
        matches!(self, Operand::Interval(i) if i.is_strict())
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Number(x)
    }
}

impl From<Interval> for Operand {
    fn from(i: Interval) -> Self {
        Operand::Interval(i)
    }
}

impl From<&Interval> for Operand {
    fn from(i: &Interval) -> Self {
        Operand::Interval(*i)
    }
}

/// Arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

// Coerces both operands; strict if the context or any interval operand is.
fn coerce_pair(lhs: Operand, rhs: Operand, ctx: &IntervalContext) -> Result<(Interval, Interval)> {
    let strict = ctx.is_strict() || lhs.is_strict() || rhs.is_strict();
    Ok((lhs.coerce(strict)?, rhs.coerce(strict)?))
}

/// Evaluates `lhs op rhs` where either side may be a plain number.
pub fn evaluate<L, R>(lhs: L, op: Operator, rhs: R, ctx: &IntervalContext) -> Result<Interval>
where
    L: Into<Operand>,
    R: Into<Operand>,
{
    let (a, b) = coerce_pair(lhs.into(), rhs.into(), ctx)?;
    match op {
        Operator::Add => Ok(a.add(&b, ctx)),
        Operator::Sub => Ok(a.sub(&b, ctx)),
        Operator::Mul => Ok(a.mul(&b, ctx)),
        Operator::Div => a.div(&b, ctx),
    }
}

/// Tests `lhs == rhs` with the comparison flavor of `ctx`.
pub fn equals<L, R>(lhs: L, rhs: R, ctx: &IntervalContext) -> Result<bool>
where
    L: Into<Operand>,
    R: Into<Operand>,
{
    let (a, b) = coerce_pair(lhs.into(), rhs.into(), ctx)?;
    Ok(a.eq_in(&b, ctx))
}

/// Tests `lhs != rhs` with the comparison flavor of `ctx`.
pub fn not_equals<L, R>(lhs: L, rhs: R, ctx: &IntervalContext) -> Result<bool>
where
    L: Into<Operand>,
    R: Into<Operand>,
{
    equals(lhs, rhs, ctx).map(|eq| !eq)
}
