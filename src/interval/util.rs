/*
    Rounding helpers
*/

use rug::Float;

use super::RoundingMode;

// Working precision for directed operations.
// Any `f64` is exact at this precision.
pub(crate) const PREC: u32 = f64::MANTISSA_DIGITS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

// Applies `op` to `a` and `b`, rounding the exact result with `mode`.
//
// MPFR's exponent range is unbounded, so the 53-bit result may be
// finer than `f64` near the subnormal range. Rounding it again in the
// same direction lands on the same `f64` as rounding the exact value,
// which is not true for round-to-nearest; that mode uses native arithmetic.
pub(crate) fn round_binary(op: BinaryOp, a: f64, b: f64, mode: RoundingMode) -> f64 {
    if mode == RoundingMode::Nearest {
        return match op {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
        };
    }

    let round = mode.round();
    let x = Float::with_val(PREC, a);
    let y = Float::with_val(PREC, b);
    let (r, _) = match op {
        BinaryOp::Add => Float::with_val_round(PREC, &x + &y, round),
        BinaryOp::Sub => Float::with_val_round(PREC, &x - &y, round),
        BinaryOp::Mul => Float::with_val_round(PREC, &x * &y, round),
        BinaryOp::Div => Float::with_val_round(PREC, &x / &y, round),
    };
    r.to_f64_round(round)
}

/// Returns the least machine number strictly greater than `x`.
/// NaN and +infinity are returned unchanged.
pub fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        // smallest positive subnormal
        return f64::from_bits(1);
    }

    let bits = x.to_bits();
    if x.is_sign_positive() {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Returns the greatest machine number strictly less than `x`.
/// NaN and -infinity are returned unchanged.
pub fn next_down(x: f64) -> f64 {
    -next_up(-x)
}
