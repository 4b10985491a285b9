/*
    Top-level
*/

mod error;
mod float;
mod number;
mod round;

pub mod interval;
pub mod io;
pub mod monitor;
pub mod ops;
pub mod solver;

pub use error::*;
pub use float::*;
pub use interval::{
    next_down, next_up, Comparison, Interval, IntervalContext, RoundingController, RoundingMode,
};
pub use number::*;
pub use round::*;
pub use solver::{GaussSeidel, LinearSystem, Solution};
