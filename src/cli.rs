use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Exact absorption probabilities for absorbing Markov chains.
#[derive(Parser)]
#[command(name = "absorbing", version, about = "Exact absorbing Markov chain solver")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Absorption probabilities from a single start state.
    Solve(SolveArgs),
    /// Probabilities and expected steps from every transient state.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `solve` subcommand.
#[derive(clap::Args)]
pub struct SolveArgs {
    /// JSON weight grid, e.g. `[[0,1],[0,0]]`. Reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// State the process starts in.
    #[arg(short, long, default_value_t = 0)]
    pub start: usize,

    /// How to print the result.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Flat)]
    pub format: OutputFormat,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// JSON weight grid. Reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Output layouts for `solve`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numerators followed by the denominator: `[n1, n2, ..., d]`.
    Flat,
    /// One `state: n/d` line per absorbing state.
    Fractions,
}
