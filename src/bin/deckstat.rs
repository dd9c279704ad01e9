// src/bin/deckstat.rs
use std::num::NonZeroUsize;
use std::process;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use deckstat_core::cli::Cli;
use deckstat_core::config::Config;
use deckstat_core::{output, processor, reporting, statistics};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let threads = match cli.threads {
        Some(n) => n,
        None => NonZeroUsize::new(config.threads)
            .ok_or_else(|| anyhow::anyhow!("configured thread count must be at least 1"))?,
    };
    let timeout = Duration::from_secs(config.timeout_secs);
    let top = cli.top.unwrap_or(config.top);

    println!(
        "Processing {} with {} worker(s)",
        cli.directory.display().to_string().bold(),
        threads
    );

    let report = processor::process_directory(&cli.directory, threads, timeout)?;
    reporting::print_processing(&report);

    if report.decks.is_empty() {
        println!("{} no decks found, nothing to aggregate", "warn:".yellow().bold());
        return Ok(());
    }

    if !cli.quiet {
        reporting::print_summary(&report.decks);
    }

    let stats = statistics::calculate(&report.decks, &cli.attribute)?;
    reporting::print_top(&stats, &cli.attribute, top);

    let out_dir = cli.output.as_deref().unwrap_or(&cli.directory);
    let path = output::write_statistics(&stats, &cli.attribute, out_dir)?;
    println!("Statistics saved to {}", path.display().to_string().bold());

    Ok(())
}
