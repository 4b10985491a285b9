/*
    Solver monitors
*/

use std::fmt;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::time::Instant;

use crate::Number;

/// Observer of the iterative solver.
///
/// Monitors see every sweep but cannot alter the iteration.
pub trait SolverMonitor<T: Number> {
    /// Called once before the first sweep.
    fn on_enter_solve(&mut self, size: usize, max_iter: usize);

    /// Called after every completed sweep with the iterates
    /// before and after it.
    fn on_sweep(&mut self, sweep: usize, previous: &[T], current: &[T], ctx: &T::Ctx);

    /// Called once when the solver stops, converged or not.
    fn on_exit_solve(&mut self, iterations: usize, converged: bool);

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl<T: Number> fmt::Debug for dyn SolverMonitor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SolverMonitor({})", self.name())
    }
}

/// A monitor that ignores every event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoOperationMonitor<T> {
    _phantom: PhantomData<T>,
}

impl<T> NoOperationMonitor<T> {
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: Number> SolverMonitor<T> for NoOperationMonitor<T> {
    #[inline(always)]
    fn on_enter_solve(&mut self, _size: usize, _max_iter: usize) {}

    #[inline(always)]
    fn on_sweep(&mut self, _sweep: usize, _previous: &[T], _current: &[T], _ctx: &T::Ctx) {}

    #[inline(always)]
    fn on_exit_solve(&mut self, _iterations: usize, _converged: bool) {}

    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }
}

/// A monitor that writes one progress line per sweep.
///
/// Each line holds the elapsed time, the sweep index, and the largest
/// absolute change of a solution component during that sweep.
/// Write failures are ignored; progress output is best effort.
#[derive(Debug)]
pub struct LogMonitor<W: Write> {
    out: W,
    start_time: Instant,
}

impl LogMonitor<io::Stderr> {
    /// Creates a monitor writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> LogMonitor<W> {
    /// Creates a monitor writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            start_time: Instant::now(),
        }
    }

    /// Consumes the monitor, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<T: Number, W: Write> SolverMonitor<T> for LogMonitor<W> {
    fn on_enter_solve(&mut self, size: usize, max_iter: usize) {
        self.start_time = Instant::now();
        let _ = writeln!(self.out, "solving {0}x{0} system, at most {1} sweeps", size, max_iter);
        let _ = writeln!(self.out, "{:<9} | {:<7} | {:<14}", "Elapsed", "Sweep", "Max change");
        let _ = writeln!(self.out, "{}", "-".repeat(36));
    }

    fn on_sweep(&mut self, sweep: usize, previous: &[T], current: &[T], ctx: &T::Ctx) {
        let change = previous
            .iter()
            .zip(current)
            .map(|(p, c)| (c.to_f64(ctx) - p.to_f64(ctx)).abs())
            .fold(0.0, f64::max);
        let elapsed = self.start_time.elapsed().as_secs_f32();
        let _ = writeln!(
            self.out,
            "{:<9} | {:<7} | {:<14.6e}",
            format!("{:.3}s", elapsed),
            sweep,
            change
        );
    }

    fn on_exit_solve(&mut self, iterations: usize, converged: bool) {
        let status = if converged { "converged" } else { "iteration limit reached" };
        let _ = writeln!(self.out, "{} after {} sweeps", status, iterations);
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}
