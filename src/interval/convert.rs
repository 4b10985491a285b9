/*
    Conversions to and from `Interval`
*/

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rug::{Integer, Rational};

use super::util::{next_down, next_up};
use super::Interval;
use crate::{Error, Result};

// Decimal exponents (of the leading digit) past which a nonzero literal
// is certainly outside the finite range, or certainly below the
// smallest subnormal, of `f64`.
const ADJUSTED_EXP_MAX: i64 = 310;
const ADJUSTED_EXP_MIN: i64 = -330;

// A decimal literal held exactly as `(-1)^negative * digits * 10^exp`.
#[derive(Clone, Debug)]
pub(crate) struct Decimal {
    negative: bool,
    // significant digits without leading zeros, empty for zero
    digits: String,
    exp: i64,
}

impl Decimal {
    // Parses `[+-]? digits [. digits]? ([eE] [+-]? digits)?`
    // requiring at least one mantissa digit.
    pub(crate) fn parse(literal: &str) -> Result<Self> {
        let malformed = || Error::Parse(literal.to_string());
        let s = literal.trim();

        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(i) => (&s[..i], Some(&s[i + 1..])),
            None => (s, None),
        };

        let (int_part, frac_part) = match mantissa.find('.') {
            Some(i) => (&mantissa[..i], &mantissa[i + 1..]),
            None => (mantissa, ""),
        };

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if int_part.len() + frac_part.len() == 0 || !is_digits(int_part) || !is_digits(frac_part) {
            return Err(malformed());
        }

        let exp = match exponent {
            None => 0,
            Some(e) => {
                let unsigned = e.strip_prefix(['+', '-']).unwrap_or(e);
                if unsigned.is_empty() || !is_digits(unsigned) {
                    return Err(malformed());
                }
                // saturate: anything this large is far outside `f64` anyway
                e.parse::<i64>().unwrap_or(if e.starts_with('-') {
                    i64::MIN / 2
                } else {
                    i64::MAX / 2
                })
            }
        };

        let digits = format!("{}{}", int_part, frac_part);
        let digits = digits.trim_start_matches('0').to_string();
        let exp = exp.saturating_sub(frac_part.len() as i64);

        Ok(Self {
            negative,
            digits,
            exp,
        })
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    // Exponent of the leading significant digit.
    fn adjusted_exp(&self) -> i64 {
        self.exp.saturating_add(self.digits.len() as i64 - 1)
    }

    // Exact value as a rational number.
    // Only called for literals within the range of `f64`.
    fn to_rational(&self) -> Rational {
        let mut numer = Integer::from_str_radix(&self.digits, 10).unwrap_or_default();
        if self.negative {
            numer = -numer;
        }

        let scale = Integer::from(Integer::u_pow_u(10, self.exp.unsigned_abs() as u32));
        if self.exp >= 0 {
            Rational::from(numer * scale)
        } else {
            Rational::from((numer, scale))
        }
    }

    // Nearest machine number (round to nearest, ties to even).
    pub(crate) fn to_f64_nearest(&self) -> f64 {
        if self.is_zero() {
            return if self.negative { -0.0 } else { 0.0 };
        }
        let sign = if self.negative { "-" } else { "" };
        let adjusted = self.adjusted_exp();
        if adjusted > ADJUSTED_EXP_MAX {
            return if self.negative { f64::NEG_INFINITY } else { f64::INFINITY };
        }
        if adjusted < ADJUSTED_EXP_MIN {
            return if self.negative { -0.0 } else { 0.0 };
        }
        format!("{}{}e{}", sign, self.digits, self.exp)
            .parse::<f64>()
            .unwrap_or(f64::NAN)
    }

    // Compares the exact value of this literal with a machine number.
    pub(crate) fn cmp_f64(&self, x: f64) -> Ordering {
        let sign = if self.negative {
            Ordering::Less
        } else {
            Ordering::Greater
        };

        if x.is_infinite() {
            return if x > 0.0 {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        if self.is_zero() {
            return 0.0_f64.partial_cmp(&x).unwrap_or(Ordering::Equal);
        }

        let adjusted = self.adjusted_exp();
        if adjusted > ADJUSTED_EXP_MAX {
            // larger in magnitude than any finite `x`
            return sign;
        }
        if adjusted < ADJUSTED_EXP_MIN {
            // nonzero, but smaller in magnitude than any nonzero `x`
            return if x == 0.0 {
                sign
            } else if x > 0.0 {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        match Rational::from_f64(x) {
            Some(r) => self.to_rational().cmp(&r),
            None => Ordering::Equal,
        }
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let signum = |d: &Decimal| match (d.is_zero(), d.negative) {
            (true, _) => 0,
            (false, true) => -1,
            (false, false) => 1,
        };

        match signum(self).cmp(&signum(other)) {
            Ordering::Equal if signum(self) == 0 => Ordering::Equal,
            Ordering::Equal => {
                let magnitude = self
                    .adjusted_exp()
                    .cmp(&other.adjusted_exp())
                    .then_with(|| {
                        let a = self.digits.trim_end_matches('0');
                        let b = other.digits.trim_end_matches('0');
                        a.cmp(b)
                    });
                if self.negative {
                    magnitude.reverse()
                } else {
                    magnitude
                }
            }
            ord => ord,
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Constructors from decimal literals
impl Interval {
    /// Creates the tightest enclosure of the exact decimal value `value`.
    ///
    /// If the value is a machine number the interval is degenerate.
    /// Otherwise the nearest machine number becomes one bound and
    /// its neighbor on the other side of the exact value becomes the other.
    pub fn from_midpoint(value: &str) -> Result<Self> {
        let exact = Decimal::parse(value)?;
        let m = exact.to_f64_nearest();

        let (lo, hi) = match exact.cmp_f64(m) {
            Ordering::Equal => (m, m),
            Ordering::Greater => (m, next_up(m)),
            Ordering::Less => (next_down(m), m),
        };
        Ok(Self::from_raw(lo, hi, false))
    }

    /// Creates an enclosure of the exact decimal range `[left, right]`.
    ///
    /// Each bound is rounded outward when it is not a machine number.
    /// Fails with [`Error::InvalidBounds`] if `left > right`.
    pub fn from_bounds(left: &str, right: &str) -> Result<Self> {
        let exact_left = Decimal::parse(left)?;
        let exact_right = Decimal::parse(right)?;
        if exact_left > exact_right {
            return Err(Error::InvalidBounds {
                left: left.trim().to_string(),
                right: right.trim().to_string(),
            });
        }

        let mut lo = exact_left.to_f64_nearest();
        if exact_left.cmp_f64(lo) == Ordering::Less {
            lo = next_down(lo);
        }
        let mut hi = exact_right.to_f64_nearest();
        if exact_right.cmp_f64(hi) == Ordering::Greater {
            hi = next_up(hi);
        }

        Ok(Self::from_raw(lo, hi, false))
    }
}

// Implementing `FromStr` for `Interval`: a single literal is a midpoint
impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_midpoint(s)
    }
}

// Angle-bracket notation with 20 fractional digits
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:.20}; {:.20}>", self.lo, self.hi)
    }
}
