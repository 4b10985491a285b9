/*
    Rounding modes
*/

use std::cell::Cell;

use rug::float::Round;

use super::util::{round_binary, BinaryOp};

/// Rounding direction of the emulated floating-point unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties to even.
    #[default]
    Nearest,
    /// Round toward +infinity.
    TowardPositive,
    /// Round toward -infinity.
    TowardNegative,
    /// Round toward zero (truncate).
    TowardZero,
}

impl RoundingMode {
    /// Translates a `RoundingMode` to the equivalent MPFR rounding.
    pub fn round(&self) -> Round {
        match self {
            RoundingMode::Nearest => Round::Nearest,
            RoundingMode::TowardPositive => Round::Up,
            RoundingMode::TowardNegative => Round::Down,
            RoundingMode::TowardZero => Round::Zero,
        }
    }
}

thread_local! {
    // One rounding register per thread.
    static MODE: Cell<RoundingMode> = const { Cell::new(RoundingMode::Nearest) };
}

/** Control over the active rounding mode.
 *
 * The rounding mode is ambient state: exactly one mode is active
 * on a thread at a time and every `RoundingController` on that thread
 * observes the same register. Threads never see each other's mode.
 *
 * Arithmetic through the controller (or through a [`RoundingScope`])
 * is rounded according to the active mode. `Nearest` uses native
 * arithmetic; the directed modes evaluate the exact result in MPFR
 * and round it once to `f64`. The hardware control word is never touched.
 */
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundingController {
    _private: (),
}

impl RoundingController {
    /// Creates a handle to this thread's rounding register.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the active rounding mode.
    /// Returns true if the mode was applied.
    pub fn set_mode(&self, mode: RoundingMode) -> bool {
        MODE.with(|m| m.set(mode));
        true
    }

    /// Returns the active rounding mode.
    pub fn mode(&self) -> RoundingMode {
        MODE.with(Cell::get)
    }

    /// Sets the active rounding mode until the returned scope is dropped,
    /// at which point the mode is reset to `Nearest`.
    pub fn enter(&self, mode: RoundingMode) -> RoundingScope<'_> {
        self.set_mode(mode);
        RoundingScope { controller: self }
    }

    /// Adds two numbers under the active rounding mode.
    pub fn add(&self, a: f64, b: f64) -> f64 {
        round_binary(BinaryOp::Add, a, b, self.mode())
    }

    /// Subtracts two numbers under the active rounding mode.
    pub fn sub(&self, a: f64, b: f64) -> f64 {
        round_binary(BinaryOp::Sub, a, b, self.mode())
    }

    /// Multiplies two numbers under the active rounding mode.
    pub fn mul(&self, a: f64, b: f64) -> f64 {
        round_binary(BinaryOp::Mul, a, b, self.mode())
    }

    /// Divides two numbers under the active rounding mode.
    pub fn div(&self, a: f64, b: f64) -> f64 {
        round_binary(BinaryOp::Div, a, b, self.mode())
    }
}

/// A directed-rounding section.
///
/// Dropping the scope restores `Nearest` on every exit path,
/// including early returns through `?` and unwinding.
/// Scopes do not nest: dropping an inner scope also ends the outer one's mode.
#[must_use = "the rounding mode is reset as soon as the scope is dropped"]
#[derive(Debug)]
pub struct RoundingScope<'a> {
    controller: &'a RoundingController,
}

impl RoundingScope<'_> {
    /// Switches the active rounding mode within this scope.
    pub fn set(&self, mode: RoundingMode) {
        self.controller.set_mode(mode);
    }

    /// Returns the active rounding mode.
    pub fn mode(&self) -> RoundingMode {
        self.controller.mode()
    }

    /// Adds two numbers under the active rounding mode.
    pub fn add(&self, a: f64, b: f64) -> f64 {
        self.controller.add(a, b)
    }

    /// Subtracts two numbers under the active rounding mode.
    pub fn sub(&self, a: f64, b: f64) -> f64 {
        self.controller.sub(a, b)
    }

    /// Multiplies two numbers under the active rounding mode.
    pub fn mul(&self, a: f64, b: f64) -> f64 {
        self.controller.mul(a, b)
    }

    /// Divides two numbers under the active rounding mode.
    pub fn div(&self, a: f64, b: f64) -> f64 {
        self.controller.div(a, b)
    }
}

impl Drop for RoundingScope<'_> {
    fn drop(&mut self) {
        self.controller.set_mode(RoundingMode::Nearest);
    }
}
