mod render;

use std::{io::Read, path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use hanoi_common::{DEFAULT_MAX_STEPS, Problem, SearchLimits, SolveResult, Solver};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::render::{draw_solution, render_result};

#[derive(Parser, Debug)]
#[command(name = "hanoi")]
#[command(about = "Solve Tower of Hanoi puzzles with any number of pegs")]
#[command(version)]
struct Cli {
    /// File with the problem, `-` for stdin. Runs the built-in problem when
    /// omitted.
    problem: Option<PathBuf>,

    /// Longest solution to look for
    #[arg(short, long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: u32,

    /// Give up after expanding this many configurations
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Give up after this many seconds
    #[arg(short, long)]
    time_limit: Option<f64>,

    /// Draw the pegs after every move
    #[arg(short, long)]
    draw: bool,
}

impl Cli {
    fn limits(&self) -> anyhow::Result<SearchLimits> {
        let time_limit = self
            .time_limit
            .map(Duration::try_from_secs_f64)
            .transpose()
            .context("invalid time limit")?;

        Ok(SearchLimits {
            max_steps: self.max_steps,
            max_expansions: self.max_expansions,
            time_limit,
        })
    }

    fn read_problem(&self) -> anyhow::Result<Problem> {
        let Some(path) = &self.problem else {
            log::info!("no problem file given, using the built-in problem");
            return Ok(Problem::default_problem());
        };

        let input = if path.as_os_str() == "-" {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("cannot read the problem from stdin")?;
            input
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("cannot read problem file {}", path.display()))?
        };

        Problem::parse(&input).with_context(|| format!("malformed problem in {}", path.display()))
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let problem = cli.read_problem()?;
    let solver = Solver::new(cli.limits()?);
    log::debug!(
        "solving {} discs on {} pegs with {:?}",
        problem.num_discs(),
        problem.num_pegs(),
        solver.limits()
    );

    let (result, stats) = solver.solve(problem.start(), &problem.goal());
    log::info!(
        "expanded {} configurations, generated {}",
        stats.expanded,
        stats.generated
    );

    match &result {
        SolveResult::Solved(moves) if cli.draw => {
            print!("{}", draw_solution(&problem.start(), moves));
        }
        _ => print!("{}", render_result(&result)),
    }

    Ok(())
}
