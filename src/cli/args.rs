use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CONVO-EVAL: heuristic quality scoring for recorded agent conversations
///
/// Reads simulation records for each configured domain, scores every
/// conversation and prints per-domain and cross-domain summaries.
#[derive(Parser, Debug)]
#[command(name = "convo-eval")]
#[command(version = "0.1.0")]
#[command(about = "Score recorded agent-conversation simulations")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze the configured simulation files and print the report
    Analyze(AnalyzeArgs),

    /// Generate a domain config file with the default simulation files
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Path to the domain config file (YAML). Built-in domains are used if omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Domains to analyze as NAME=PATH, replacing the configured list
    pub domains: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the config file
    #[arg(short, long, default_value = "domains.yaml")]
    pub output: PathBuf,
}
