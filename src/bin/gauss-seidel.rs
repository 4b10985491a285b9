// Gauss-Seidel solver CLI
use anyhow::{Context, Result};
use clap::Parser;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use interval_seidel::interval::IntervalContext;
use interval_seidel::io::{
    read_float, read_interval, read_interval_left_right, read_problem, write_solution,
    ElementMode, Tokens,
};
use interval_seidel::monitor::{LogMonitor, NoOperationMonitor, SolverMonitor};
use interval_seidel::{FloatContext, Number};

#[derive(Parser)]
#[command(name = "gauss-seidel")]
#[command(version)]
#[command(about = "Solve A x = b by Gauss-Seidel iteration over floats or verified intervals", long_about = None)]
struct Cli {
    /// Element type: float, interval, or leftright
    #[arg(short, long, default_value = "float")]
    mode: String,

    /// Output file (defaults to standard output)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Report progress of every sweep on standard error
    #[arg(short, long)]
    verbose: bool,

    /// Input file (defaults to standard input, with prompts)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode: ElementMode = cli.mode.parse()?;

    let interactive = cli.input.is_none();
    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let mut tokens = Tokens::new(reader);

    match mode {
        ElementMode::Float => run(&cli, &mut tokens, read_float, &FloatContext::new(), interactive),
        ElementMode::Interval => run(&cli, &mut tokens, read_interval, &IntervalContext::new(), interactive),
        ElementMode::LeftRight => run(
            &cli,
            &mut tokens,
            read_interval_left_right,
            &IntervalContext::new(),
            interactive,
        ),
    }
}

fn run<R, T, F>(cli: &Cli, tokens: &mut Tokens<R>, read: F, ctx: &T::Ctx, interactive: bool) -> Result<()>
where
    R: BufRead,
    T: Number + Display + 'static,
    F: FnMut(&mut Tokens<R>) -> interval_seidel::Result<T>,
{
    let mut stderr = io::stderr();
    let prompt: Option<&mut dyn Write> = if interactive { Some(&mut stderr) } else { None };
    let problem = read_problem(tokens, read, prompt).context("cannot read the linear system")?;

    let mut monitor: Box<dyn SolverMonitor<T>> = if cli.verbose {
        Box::new(LogMonitor::stderr())
    } else {
        Box::new(NoOperationMonitor::new())
    };
    let solution = problem
        .solver
        .solve_with_monitor(&problem.system, ctx, monitor.as_mut())
        .context("cannot solve the linear system")?;

    match &cli.output {
        Some(path) => {
            let mut file =
                File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
            write_solution(&mut file, &solution, false)?;
        }
        None => {
            let stdout = io::stdout();
            write_solution(&mut stdout.lock(), &solution, interactive)?;
        }
    }
    Ok(())
}
