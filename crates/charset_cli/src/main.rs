//! Charset CLI
//!
//! Prints random sequences drawn from named character sets.

use std::io::{self, Write};
use std::path::PathBuf;

use charset_cli::commands::{self, sample::SampleOptions};
use charset_cli::config::{build_config, CliArgs, ProcessEnv};
use charset_cli::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Random sequences from named character sets
#[derive(Parser, Debug)]
#[command(name = "charset")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List catalog entries with their sizes
    List,

    /// Print the characters of a catalog entry
    Show {
        /// Entry name (e.g. ASCII, Cyrillic, mathematical-symbols)
        name: String,
    },

    /// Print random sequences
    Sample {
        /// Number of characters per sequence
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        length: Option<i64>,

        /// Catalog entry to draw from
        #[arg(short = 's', long = "set", value_name = "NAME")]
        charset: Option<String>,

        /// Literal characters to draw from instead of a catalog entry
        #[arg(long, conflicts_with = "charset")]
        chars: Option<String>,

        /// Number of sequences to print
        #[arg(short = 'k', long, default_value = "1")]
        count: usize,

        /// Fixed seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let seed = match &cli.command {
        Commands::Sample { seed, .. } => *seed,
        _ => None,
    };
    let args = CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
        seed,
    };
    let config = build_config(&args, &ProcessEnv)?;

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(
        version = charset_cli::VERSION,
        default_charset = %config.default_charset,
        default_length = config.default_length,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List => commands::list::run(&mut out)?,
        Commands::Show { name } => commands::show::run(&name, &mut out)?,
        Commands::Sample {
            length,
            charset,
            chars,
            count,
            ..
        } => {
            let options = SampleOptions {
                length,
                charset,
                chars,
                count,
            };
            commands::sample::run(&options, &config, &mut out)?
        }
    }

    out.flush()?;
    Ok(())
}
