//! Pancake Judge Binary
//!
//! Run with: `pancake-judge [OPTIONS] [INPUT] [OUTPUT]`

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pancake_judge::{Config, Judge, JudgeError};

#[derive(Parser)]
#[command(name = "pancake-judge")]
#[command(about = "Minimum pancake flips for Code Jam style inputs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file (reads from stdin if not provided)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Write bare results without the `Case #i: ` prefix
    #[arg(long)]
    no_case_prefix: bool,

    /// Log every result line to stderr as well
    #[arg(short, long)]
    echo: bool,

    /// Configuration file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    if let Some(Commands::Config) = &cli.command {
        let config = Config::default();
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let config = build_config(&cli)?;

    let (name, source) = match &cli.input {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            (path.display().to_string(), source)
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read from stdin")?;
            ("<stdin>".to_string(), source)
        }
    };
    debug!("Read {} bytes from {}", source.len(), name);

    let mut output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let result = Judge::new(config).run(&source, &mut output);
    drop(output);

    match result {
        Ok(summary) => {
            info!(
                "Solved {} cases, {} impossible",
                summary.cases, summary.impossible
            );
            Ok(())
        }
        Err(JudgeError::Read(err)) => {
            pancake::diagnostics::eprint(&err, &name, &source)
                .context("Failed to write diagnostic")?;
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        Config::from_json(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?
    } else {
        Config::default()
    };

    // Override with CLI options
    if cli.no_case_prefix {
        config.case_prefix = false;
    }
    if cli.echo {
        config.echo = true;
    }

    Ok(config)
}
