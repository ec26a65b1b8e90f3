use anyhow::Context;
use clap::Parser;
use rail_ledger::core::config::{self, CliOverrides};
use rail_ledger::shell::Shell;
use rail_ledger::{Ledger, SystemClock};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rail-ledger", about = "Rail ticket reservation ledger")]
struct Args {
    /// Config file (default: ~/.rail-ledger/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seat capacity for trains without their own
    #[arg(short, long)]
    seats: Option<u32>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => config::load_config()?,
    };
    let resolved = config::resolve(
        &loaded.config,
        &CliOverrides {
            total_seats: args.seats,
            log_level: args.log_level,
            log_file: args.log_file,
        },
    )?;

    // Initialize file logger - stdout belongs to the shell
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    // Config loading ran before the logger existed
    loaded.log_notes();
    log::info!(
        "rail-ledger starting with {} train(s)",
        resolved.catalog.len()
    );

    let ledger = Ledger::new(resolved.catalog);
    let shell = Shell::new(&ledger, SystemClock);
    shell.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
