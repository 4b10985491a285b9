/*
    Traits relevant to rounding
*/

/// A specification for rounding behavior.
///
/// Every arithmetic operation on a [`Number`](crate::Number) can be
/// decomposed into two operations:
///  - a real number operation: `R^n -> R`, and
///  - a rounding operation: `R -> R`.
/// A `Context` carries whatever the second operation needs,
/// along with any configuration that changes how operands are combined.
pub trait Context: Clone + Default {}
