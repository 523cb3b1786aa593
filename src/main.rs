mod cli;
mod logging;

use std::fs;
use std::io;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use absorbing::prelude::*;

use crate::cli::{AnalyzeArgs, Cli, Command, OutputFormat, SolveArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Solve(args) => solve(&args),
        Command::Analyze(args) => analyze(&args),
    }
}

fn read_weights(input: Option<&Path>) -> Result<Vec<Vec<u64>>> {
    let text = match input {
        Some(path) => {
            info!(path = %path.display(), "reading weight grid");
            fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None => io::read_to_string(io::stdin()).context("failed to read stdin")?,
    };
    let weights: Vec<Vec<u64>> = serde_json::from_str(&text)
        .context("weight grid must be a JSON array of arrays of non-negative integers")?;
    info!(states = weights.len(), "loaded weight grid");
    Ok(weights)
}

fn solve(args: &SolveArgs) -> Result<()> {
    let weights = read_weights(args.input.as_deref())?;
    let solver = AbsorptionSolver::new(SolverConfig::new().with_start_state(args.start));
    let solution = solver.solve(&weights).context("cannot solve chain")?;

    match args.format {
        OutputFormat::Flat => println!("{solution}"),
        OutputFormat::Fractions => {
            for (state, numerator) in solution
                .absorbing_states()
                .iter()
                .zip(solution.numerators())
            {
                println!("{state}: {numerator}/{}", solution.denominator());
            }
        }
    }
    Ok(())
}

fn analyze(args: &AnalyzeArgs) -> Result<()> {
    let weights = read_weights(args.input.as_deref())?;
    let analysis = AbsorptionSolver::default()
        .analyze(&weights)
        .context("cannot analyze chain")?;
    let partition = analysis.partition();
    info!(
        transient = partition.transient().len(),
        absorbing = partition.absorbing().len(),
        "analysis complete"
    );

    println!("absorbing states: {:?}", partition.absorbing());
    for &state in partition.transient() {
        let solution = analysis.probabilities_from(state)?;
        let steps = analysis.expected_steps_from(state)?;
        println!("{state}: {solution} expected steps {steps}");
    }
    Ok(())
}
