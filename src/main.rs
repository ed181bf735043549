mod cli;
mod eval;
mod scoring;
mod simulation;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use cli::{AnalysisConfig, Args, Command, DomainSource};
use eval::{analyze_simulation_file, DomainAnalysis};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let _subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Analyze(analyze_args) => {
            run_analysis(analyze_args)?;
        }
        Command::Init(init_args) => {
            generate_sample_config(init_args)?;
        }
    }

    Ok(())
}

fn run_analysis(args: cli::AnalyzeArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading domain config from {:?}", path);
            AnalysisConfig::load(path)?
        }
        None => AnalysisConfig::default(),
    };

    if !args.domains.is_empty() {
        let domains = args
            .domains
            .iter()
            .map(|pair| DomainSource::parse_pair(pair))
            .collect::<Result<Vec<_>>>()?;
        config = config.with_domains(domains);
    }

    print!("{}", eval::render_header(&config.title, Utc::now()));

    let mut all_results: Vec<DomainAnalysis> = Vec::new();

    for source in &config.domains {
        print!("{}", eval::render_domain_title(&source.name));

        match analyze_simulation_file(&source.name, &source.path) {
            Ok(analysis) => {
                print!("{}", eval::render_domain(&analysis));
                all_results.push(analysis);
            }
            Err(e) => {
                error!("Analysis of {} failed: {}", source.name, e);
                print!("{}", eval::render_domain_error(&source.name, &e));
            }
        }

        print!("{}", eval::render_separator());
    }

    info!(
        "Analyzed {}/{} domains successfully",
        all_results.len(),
        config.domains.len()
    );

    print!("{}", eval::render_comparison(&all_results));

    Ok(())
}

fn generate_sample_config(args: cli::InitArgs) -> Result<()> {
    let config = AnalysisConfig::sample();

    config.save(&args.output)?;
    println!("Generated sample config at: {:?}", args.output);

    Ok(())
}
