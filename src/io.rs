/*
    Text input and output
*/

use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::interval::Interval;
use crate::solver::{GaussSeidel, LinearSystem, Solution};
use crate::{Error, Result};

/// Whitespace-separated tokens read lazily, line by line.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    /// Creates a token stream over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at the end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Returns the next token, failing with
    /// [`Error::UnexpectedEndOfInput`] naming `what` at the end of input.
    pub fn expect(&mut self, what: &'static str) -> Result<String> {
        self.next_token()?.ok_or(Error::UnexpectedEndOfInput(what))
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Element type of the system read from input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementMode {
    /// One plain number per entry.
    #[default]
    Float,
    /// One decimal per entry, enclosed by its tightest interval.
    Interval,
    /// Two decimals per entry, the left and right bounds.
    LeftRight,
}

impl FromStr for ElementMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "float" => Ok(ElementMode::Float),
            "interval" => Ok(ElementMode::Interval),
            "leftright" => Ok(ElementMode::LeftRight),
            _ => Err(Error::UnsupportedMode(s.to_string())),
        }
    }
}

impl fmt::Display for ElementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementMode::Float => write!(f, "float"),
            ElementMode::Interval => write!(f, "interval"),
            ElementMode::LeftRight => write!(f, "leftright"),
        }
    }
}

fn parse_token<T: FromStr>(token: String) -> Result<T> {
    token.parse().map_err(|_| Error::Parse(token))
}

/// Reads one plain number.
pub fn read_float<R: BufRead>(tokens: &mut Tokens<R>) -> Result<f64> {
    parse_token(tokens.expect("a number")?)
}

/// Reads one decimal as the tightest enclosing interval.
pub fn read_interval<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Interval> {
    Interval::from_midpoint(&tokens.expect("an interval")?)
}

/// Reads two decimals as the bounds of an interval.
pub fn read_interval_left_right<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Interval> {
    let left = tokens.expect("a left bound")?;
    let right = tokens.expect("a right bound")?;
    Interval::from_bounds(&left, &right)
}

/// Everything needed for one solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem<T> {
    pub solver: GaussSeidel,
    pub system: LinearSystem<T>,
}

fn say(prompt: &mut Option<&mut dyn Write>, text: &str) -> Result<()> {
    if let Some(out) = prompt.as_mut() {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

/// Reads `max_iter eps n`, then the `n x n` matrix row by row,
/// then the `n` right-hand side entries, each entry through `read`.
///
/// When `prompt` is given, a short description of every expected
/// value is written to it before reading.
pub fn read_problem<R, T, F>(
    tokens: &mut Tokens<R>,
    mut read: F,
    mut prompt: Option<&mut dyn Write>,
) -> Result<Problem<T>>
where
    R: BufRead,
    F: FnMut(&mut Tokens<R>) -> Result<T>,
{
    say(&mut prompt, "Maximum number of iterations: [natural number > 1]")?;
    let max_iter: usize = parse_token(tokens.expect("the iteration limit")?)?;
    say(&mut prompt, "Solution epsilon (relative error): [real number > 0]")?;
    let eps: f64 = parse_token(tokens.expect("the epsilon")?)?;
    say(&mut prompt, "Number of variables: [natural number]")?;
    let n: usize = parse_token(tokens.expect("the number of variables")?)?;

    say(&mut prompt, "Matrix A (row by row): [n x n numbers]")?;
    let mut a = Vec::with_capacity(n.saturating_mul(n).min(1 << 20));
    for _ in 0..n.saturating_mul(n) {
        a.push(read(tokens)?);
    }
    say(&mut prompt, "Vector B: [n numbers]")?;
    let mut b = Vec::with_capacity(n.min(1 << 20));
    for _ in 0..n {
        b.push(read(tokens)?);
    }

    Ok(Problem {
        solver: GaussSeidel::new(max_iter, eps)?,
        system: LinearSystem::new(n, a, b)?,
    })
}

/// Writes the iteration count, then one solution component per line.
/// With `labels`, each block is preceded by a description.
pub fn write_solution<W, T>(out: &mut W, solution: &Solution<T>, labels: bool) -> Result<()>
where
    W: Write + ?Sized,
    T: fmt::Display,
{
    if labels {
        writeln!(out, "Number of iterations: [natural number]")?;
    }
    writeln!(out, "{}", solution.iterations())?;
    if labels {
        writeln!(out, "Values of x: [n numbers]")?;
    }
    for x in solution.x() {
        writeln!(out, "{}", x)?;
    }
    Ok(())
}
