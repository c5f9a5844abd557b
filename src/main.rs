use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use shamir_recover::DEFAULT_PRIME;
use shamir_recover::cli::{Cli, Commands, ModeArg};
use shamir_recover::codec;
use shamir_recover::commands::{Strategy, recover_secret};

/// Install a stderr logger filtered by `RUST_LOG` (default: warnings only)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read the share record from a file, or from stdin when no file is given
fn read_record(file: Option<&std::path::Path>) -> Result<Zeroizing<String>> {
    if let Some(path) = file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read share record {}", path.display()))?;
        return Ok(Zeroizing::new(contents));
    }

    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter share record JSON (end with Ctrl-D):");
    }

    let mut record = Zeroizing::new(String::new());
    io::stdin()
        .read_to_string(&mut record)
        .context("Failed to read share record from stdin")?;
    Ok(record)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Recover {
            file,
            mode,
            prime,
            fallback,
            json,
        } => {
            let modulus = prime.unwrap_or_else(|| DEFAULT_PRIME.clone());
            let strategy = match (mode, fallback) {
                (_, true) => Strategy::ExactThenModular { modulus },
                (ModeArg::Exact, false) => Strategy::Exact,
                (ModeArg::Modular, false) => Strategy::Modular { modulus },
            };

            let record = read_record(file.as_deref())?;
            let recovery = recover_secret(&record, &strategy)?;

            if json {
                let report = serde_json::to_string_pretty(&recovery)
                    .context("Failed to serialize report")?;
                println!("{report}");
            } else {
                println!("{}", recovery.secret);
            }
        }
        Commands::Decode { base, value } => {
            let decoded = codec::decode(&value, base)
                .with_context(|| format!("Failed to decode '{value}' in base {}", *base))?;
            println!("{decoded}");
        }
    }

    Ok(())
}
