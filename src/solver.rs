/*
    Gauss-Seidel iteration
*/

use crate::monitor::{NoOperationMonitor, SolverMonitor};
use crate::{Error, Number, Result};

/// A square linear system `A x = b`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSystem<T> {
    n: usize,
    // row-major, `n * n` entries
    a: Vec<T>,
    b: Vec<T>,
}

impl<T> LinearSystem<T> {
    /// Creates a system from a row-major `n x n` matrix and a length `n` vector.
    pub fn new(n: usize, a: Vec<T>, b: Vec<T>) -> Result<Self> {
        if a.len() != n * n {
            return Err(Error::DimensionMismatch {
                expected: n * n,
                found: a.len(),
            });
        }
        if b.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: b.len(),
            });
        }
        Ok(Self { n, a, b })
    }

    /// Creates a system from matrix rows and a right-hand side.
    pub fn from_rows(rows: Vec<Vec<T>>, b: Vec<T>) -> Result<Self> {
        let n = b.len();
        if rows.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: rows.len(),
            });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: row.len(),
            });
        }
        Self::new(n, rows.into_iter().flatten().collect(), b)
    }

    /// Returns the number of unknowns.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns the coefficient in row `i`, column `j`.
    pub fn coefficient(&self, i: usize, j: usize) -> &T {
        &self.a[i * self.n + j]
    }

    /// Returns the right-hand side of row `i`.
    pub fn rhs(&self, i: usize) -> &T {
        &self.b[i]
    }
}

/// The result of a solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<T> {
    x: Vec<T>,
    iterations: usize,
    converged: bool,
}

impl<T> Solution<T> {
    /// Returns the solution vector.
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// Consumes the solution, returning the solution vector.
    pub fn into_x(self) -> Vec<T> {
        self.x
    }

    /// Returns the number of iterations reported: the index of the
    /// converged sweep, or `max_iter` if the iteration did not converge.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns true if the convergence test passed before the cap.
    pub fn converged(&self) -> bool {
        self.converged
    }
}

/** Settings of the Gauss-Seidel iteration.
 *
 * Each sweep updates `x[i] = (b[i] - sum_{j != i} x[j] a[i][j]) / a[i][i]`
 * in row order, reusing components already updated in the same sweep.
 * From the third sweep on, the iteration stops once every component
 * satisfies `|x[i] - previous[i]| < |eps * x[i]|`.
 *
 * Rows are never reordered; a zero (or zero-containing) diagonal entry
 * fails the solve with [`Error::SingularPivot`].
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussSeidel {
    max_iter: usize,
    eps: f64,
}

impl GaussSeidel {
    /// Creates the solver settings.
    /// Requires `max_iter >= 2` and a positive, finite `eps`.
    pub fn new(max_iter: usize, eps: f64) -> Result<Self> {
        if max_iter < 2 {
            return Err(Error::MaxIterTooSmall(max_iter));
        }
        if !(eps > 0.0 && eps.is_finite()) {
            return Err(Error::EpsilonNotPositive(eps));
        }
        Ok(Self { max_iter, eps })
    }

    /// Returns the iteration cap.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Returns the relative tolerance.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Solves `system` without monitoring.
    pub fn solve<T: Number>(&self, system: &LinearSystem<T>, ctx: &T::Ctx) -> Result<Solution<T>> {
        self.solve_with_monitor(system, ctx, &mut NoOperationMonitor::new())
    }

    /// Solves `system`, reporting progress to `monitor`.
    pub fn solve_with_monitor<T, M>(
        &self,
        system: &LinearSystem<T>,
        ctx: &T::Ctx,
        monitor: &mut M,
    ) -> Result<Solution<T>>
    where
        T: Number,
        M: SolverMonitor<T> + ?Sized,
    {
        let n = system.size();
        let mut x = vec![T::zero(ctx); n];
        let mut iterations = self.max_iter;
        let mut converged = false;

        monitor.on_enter_solve(n, self.max_iter);
        for sweep in 0..self.max_iter {
            let previous = x.clone();
            for i in 0..n {
                let mut t = system.rhs(i).clone();
                for (j, xj) in x.iter().enumerate() {
                    if i != j {
                        let term = xj.mul(system.coefficient(i, j), ctx)?;
                        t = t.sub(&term, ctx)?;
                    }
                }
                x[i] = t.div(system.coefficient(i, i), ctx).map_err(|e| match e {
                    Error::DivisionByZero => Error::SingularPivot { row: i },
                    e => e,
                })?;
            }
            monitor.on_sweep(sweep, &previous, &x, ctx);

            if sweep > 1 && self.has_converged(&previous, &x, ctx) {
                iterations = sweep;
                converged = true;
                break;
            }
        }
        monitor.on_exit_solve(iterations, converged);

        Ok(Solution {
            x,
            iterations,
            converged,
        })
    }

    // Relative change test on the plain-number representatives.
    fn has_converged<T: Number>(&self, previous: &[T], current: &[T], ctx: &T::Ctx) -> bool {
        previous.iter().zip(current).all(|(p, c)| {
            let c = c.to_f64(ctx);
            (c - p.to_f64(ctx)).abs() < (self.eps * c).abs()
        })
    }
}
