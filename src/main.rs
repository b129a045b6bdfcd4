//! CLI for the mutant generator

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use mutant_generator::{
    collect, generate, print_sites, write_mutants, Config, GenerationReport, Program,
};

#[derive(Parser)]
#[command(name = "mutant-generator")]
#[command(author, version, about = "Seeded operator-inversion mutants for Rust sources", long_about = None)]
struct Cli {
    /// Rust source file to mutate
    file: PathBuf,

    /// Number of mutants to generate
    count: usize,

    /// Path to a YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to write mutants to (overrides the config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Seed for site selection (overrides the config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// List eligible sites without writing mutants
    #[arg(short, long)]
    list: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "mutant_generator=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            println!("{}", "Loading configuration...".dimmed());
            Ok(Config::load(path)?)
        }
        None => Ok(Config::default()),
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.settings.seed = seed;
    }
    if let Some(dir) = &cli.output_dir {
        config.settings.output_dir = dir.clone();
    }

    let program = Program::read(&cli.file)?;

    if cli.list {
        let sites = collect(&program.parse()?, &config.eligibility);
        print_sites(&program.path, &sites);
        return Ok(());
    }

    println!("{}", "Generating mutants...".dimmed());
    let generation = generate(&program, cli.count, &config)?;

    let paths = write_mutants(
        &generation.mutants,
        &config.settings.output_dir,
        &config.settings.extension,
    )
    .with_context(|| {
        format!(
            "writing mutants to '{}'",
            config.settings.output_dir.display()
        )
    })?;

    let report = GenerationReport::new(
        &program.path,
        config.settings.seed,
        cli.count,
        &generation,
        paths,
    );
    report.print();

    Ok(())
}
