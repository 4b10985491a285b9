use rug::Rational;

use interval_seidel::monitor::{LogMonitor, SolverMonitor};
use interval_seidel::*;

fn interval(literal: &str) -> Interval {
    Interval::from_midpoint(literal).unwrap()
}

// Counts monitor events.
#[derive(Default)]
struct CountingMonitor {
    entered: usize,
    sweeps: Vec<usize>,
    exit: Option<(usize, bool)>,
}

impl<T: Number> SolverMonitor<T> for CountingMonitor {
    fn on_enter_solve(&mut self, _size: usize, _max_iter: usize) {
        self.entered += 1;
    }

    fn on_sweep(&mut self, sweep: usize, _previous: &[T], _current: &[T], _ctx: &T::Ctx) {
        self.sweeps.push(sweep);
    }

    fn on_exit_solve(&mut self, iterations: usize, converged: bool) {
        self.exit = Some((iterations, converged));
    }

    fn name(&self) -> &str {
        "CountingMonitor"
    }
}

#[test]
fn solves_scalar_equation() {
    let system = LinearSystem::new(1, vec![2.0], vec![4.0]).unwrap();
    let solver = GaussSeidel::new(10, 1e-6).unwrap();
    let solution = solver.solve(&system, &FloatContext::new()).unwrap();

    assert_eq!(solution.x(), &[2.0]);
    assert!(solution.iterations() < 10, "iterations: {}", solution.iterations());
    assert_eq!(solution.iterations(), 2);
    assert!(solution.converged());
}

#[test]
fn solves_scalar_equation_over_intervals() {
    let system = LinearSystem::new(1, vec![interval("2")], vec![interval("4")]).unwrap();
    let solver = GaussSeidel::new(10, 1e-6).unwrap();
    let solution = solver.solve(&system, &IntervalContext::new()).unwrap();

    let x = solution.x()[0];
    assert!(x.is_degenerate() && x.lower() == 2.0, "x = {}", x);
    assert_eq!(solution.iterations(), 2);
}

#[test]
fn solves_diagonally_dominant_system() {
    // 4x + y = 1, 2x + 3y = 2  =>  x = 0.1, y = 0.6
    let system =
        LinearSystem::<f64>::from_rows(vec![vec![4.0, 1.0], vec![2.0, 3.0]], vec![1.0, 2.0]).unwrap();
    let solver = GaussSeidel::new(100, 1e-12).unwrap();
    let solution = solver.solve(&system, &FloatContext::new()).unwrap();

    assert!(solution.converged());
    assert!(solution.iterations() < 100);
    assert!((solution.x()[0] - 0.1).abs() < 1e-10, "x = {:?}", solution.x());
    assert!((solution.x()[1] - 0.6).abs() < 1e-10, "x = {:?}", solution.x());
}

#[test]
fn interval_solution_tracks_float_solution() {
    let rows = [["4", "1"], ["2", "3"]];
    let a = rows.iter().flatten().map(|s| interval(s)).collect();
    let b = vec![interval("1"), interval("2")];
    let system = LinearSystem::new(2, a, b).unwrap();

    let ctx = IntervalContext::new();
    let solver = GaussSeidel::new(100, 1e-12).unwrap();
    let solution = solver.solve(&system, &ctx).unwrap();

    assert!(solution.converged());
    for (x, expected) in solution.x().iter().zip([0.1, 0.6]) {
        assert!(x.width(&ctx) < 1e-12, "enclosure too wide: {}", x);
        assert!((x.midpoint(&ctx) - expected).abs() < 1e-10, "x = {}", x);
    }
}

// Exact Gauss-Seidel sweeps over rationals.
fn exact_sweeps(a: &[Vec<Rational>], b: &[Rational], sweeps: usize) -> Vec<Rational> {
    let n = b.len();
    let mut x = vec![Rational::new(); n];
    for _ in 0..sweeps {
        for i in 0..n {
            let mut t = b[i].clone();
            for j in 0..n {
                if i != j {
                    t -= x[j].clone() * &a[i][j];
                }
            }
            x[i] = t / &a[i][i];
        }
    }
    x
}

#[test]
fn interval_iterates_enclose_exact_iterates() {
    // decimal coefficients that are not machine numbers
    let a_lit = [["4.1", "0.3", "0.2"], ["0.7", "5.3", "1.1"], ["0.1", "0.9", "3.7"]];
    let b_lit = ["1.3", "-0.7", "2.9"];
    let tenths = |s: &str| {
        let scaled = (s.parse::<f64>().unwrap() * 10.0).round() as i64;
        Rational::from((scaled, 10))
    };

    let a: Vec<Interval> = a_lit.iter().flatten().map(|s| interval(s)).collect();
    let b: Vec<Interval> = b_lit.iter().map(|s| interval(s)).collect();
    let system = LinearSystem::new(3, a, b).unwrap();

    let exact_a: Vec<Vec<Rational>> = a_lit
        .iter()
        .map(|row| row.iter().map(|s| tenths(s)).collect())
        .collect();
    let exact_b: Vec<Rational> = b_lit.iter().map(|s| tenths(s)).collect();

    let ctx = IntervalContext::new();
    for sweeps in 2..6 {
        // a tolerance no sweep can meet, so exactly `sweeps` sweeps run
        let solver = GaussSeidel::new(sweeps, f64::MIN_POSITIVE).unwrap();
        let solution = solver.solve(&system, &ctx).unwrap();
        assert_eq!(solution.iterations(), sweeps);

        let expected = exact_sweeps(&exact_a, &exact_b, sweeps);
        for (x, e) in solution.x().iter().zip(&expected) {
            let lo = Rational::from_f64(x.lower()).unwrap();
            let hi = Rational::from_f64(x.upper()).unwrap();
            assert!(lo <= *e && *e <= hi, "sweep {}: {} does not enclose {}", sweeps, x, e);
        }
    }
}

#[test]
fn respects_iteration_cap() {
    // not diagonally dominant: the iterates diverge
    let system =
        LinearSystem::from_rows(vec![vec![1.0, 2.0], vec![3.0, 1.0]], vec![1.0, 1.0]).unwrap();
    let solver = GaussSeidel::new(3, 1e-6).unwrap();
    let mut monitor = CountingMonitor::default();
    let solution = solver
        .solve_with_monitor(&system, &FloatContext::new(), &mut monitor)
        .unwrap();

    assert_eq!(solution.iterations(), 3);
    assert!(!solution.converged());
    assert_eq!(solution.x(), &[29.0, -86.0]);
    assert_eq!(monitor.entered, 1);
    assert_eq!(monitor.sweeps, vec![0, 1, 2]);
    assert_eq!(monitor.exit, Some((3, false)));
}

#[test]
fn monitor_sees_converged_sweep() {
    let system = LinearSystem::new(1, vec![2.0], vec![4.0]).unwrap();
    let solver = GaussSeidel::new(10, 1e-6).unwrap();
    let mut monitor = CountingMonitor::default();
    solver
        .solve_with_monitor(&system, &FloatContext::new(), &mut monitor)
        .unwrap();

    assert_eq!(monitor.sweeps, vec![0, 1, 2]);
    assert_eq!(monitor.exit, Some((2, true)));
}

#[test]
fn log_monitor_reports_progress() {
    let system = LinearSystem::new(1, vec![interval("2")], vec![interval("4")]).unwrap();
    let solver = GaussSeidel::new(10, 1e-6).unwrap();
    let mut monitor = LogMonitor::new(Vec::new());
    solver
        .solve_with_monitor(&system, &IntervalContext::new(), &mut monitor)
        .unwrap();

    let log = String::from_utf8(monitor.into_inner()).unwrap();
    assert!(log.starts_with("solving 1x1 system, at most 10 sweeps"), "log: {}", log);
    assert!(log.contains("converged after 2 sweeps"), "log: {}", log);
    assert_eq!(log.lines().count(), 3 + 3 + 1, "log: {}", log);
}

#[test]
fn zero_pivot_is_singular() {
    let system =
        LinearSystem::from_rows(vec![vec![0.0, 1.0], vec![1.0, 1.0]], vec![1.0, 1.0]).unwrap();
    let solver = GaussSeidel::new(10, 1e-6).unwrap();
    let result = solver.solve(&system, &FloatContext::new());
    assert!(matches!(result, Err(Error::SingularPivot { row: 0 })), "{:?}", result);

    let straddling = Interval::from_bounds("-1", "1").unwrap();
    let system = LinearSystem::new(
        2,
        vec![interval("2"), interval("1"), interval("1"), straddling],
        vec![interval("1"), interval("1")],
    )
    .unwrap();
    let ctx = IntervalContext::new();
    let result = solver.solve(&system, &ctx);
    assert!(matches!(result, Err(Error::SingularPivot { row: 1 })), "{:?}", result);
    assert_eq!(ctx.rounding().mode(), RoundingMode::Nearest);
}

#[test]
fn rejects_invalid_settings() {
    assert!(matches!(GaussSeidel::new(1, 1e-6), Err(Error::MaxIterTooSmall(1))));
    assert!(matches!(GaussSeidel::new(0, 1e-6), Err(Error::MaxIterTooSmall(0))));
    assert!(matches!(GaussSeidel::new(10, 0.0), Err(Error::EpsilonNotPositive(_))));
    assert!(matches!(GaussSeidel::new(10, -1.0), Err(Error::EpsilonNotPositive(_))));
    assert!(matches!(GaussSeidel::new(10, f64::NAN), Err(Error::EpsilonNotPositive(_))));

    let solver = GaussSeidel::new(2, 0.5).unwrap();
    assert_eq!((solver.max_iter(), solver.eps()), (2, 0.5));
}

#[test]
fn rejects_mismatched_dimensions() {
    assert!(matches!(
        LinearSystem::new(2, vec![1.0; 3], vec![1.0; 2]),
        Err(Error::DimensionMismatch { expected: 4, found: 3 })
    ));
    assert!(matches!(
        LinearSystem::new(2, vec![1.0; 4], vec![1.0; 3]),
        Err(Error::DimensionMismatch { expected: 2, found: 3 })
    ));
    assert!(matches!(
        LinearSystem::from_rows(vec![vec![1.0, 2.0], vec![3.0]], vec![1.0, 2.0]),
        Err(Error::DimensionMismatch { expected: 2, found: 1 })
    ));
}
