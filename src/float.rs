/*
    Plain floating-point numbers
*/

use std::fmt;

use num_traits::{Float, ToPrimitive};

use crate::{Context, Error, Number, Result};

/// Rounding context for native floating-point numbers.
///
/// Native arithmetic always rounds to nearest, ties to even,
/// so there is nothing to configure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloatContext;

impl FloatContext {
    /// Creates a new rounding context for native floats.
    pub fn new() -> Self {
        Self
    }
}

impl Context for FloatContext {}

// Implementing `Number` for every native float
impl<F> Number for F
where
    F: Float + fmt::Debug + fmt::Display,
{
    type Ctx = FloatContext;

    fn zero(_: &FloatContext) -> Self {
        F::zero()
    }

    fn add(&self, other: &Self, _: &FloatContext) -> Result<Self> {
        Ok(*self + *other)
    }

    fn sub(&self, other: &Self, _: &FloatContext) -> Result<Self> {
        Ok(*self - *other)
    }

    fn mul(&self, other: &Self, _: &FloatContext) -> Result<Self> {
        Ok(*self * *other)
    }

    fn div(&self, other: &Self, _: &FloatContext) -> Result<Self> {
        if other.is_zero() {
            Err(Error::DivisionByZero)
        } else {
            Ok(*self / *other)
        }
    }

    fn to_f64(&self, _: &FloatContext) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }
}
