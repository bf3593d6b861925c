//! `deps-csv` — find dependency manifests in a tree and list what they declare.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]); usage errors exit `1`.
//! 2. Load optional config ([`config::load_config`]).
//! 3. Walk the tree, pruning noise directories ([`walker`]).
//! 4. Dispatch each manifest to its format parser ([`parser`]) and collect
//!    records ([`scanner`]). Unreadable or unparseable files are reported and
//!    skipped.
//! 5. Write the CSV (or JSON) report ([`report`]) unless nothing was found.

mod cli;
mod config;
mod error;
mod models;
mod parser;
mod report;
mod scanner;
mod walker;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cli::{Cli, OutputFormat};
use config::load_config;
use models::Ecosystem;
use report::terminal;
use scanner::{ScanOptions, Scanner};
use walker::{PruneSet, WalkOptions};

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help / --version go to stdout and succeed; anything else is a usage error.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if !cli.root.is_dir() {
        eprintln!(
            "{} {} is not a directory",
            "Error:".red().bold(),
            cli.root.display()
        );
        std::process::exit(1);
    }

    let config = load_config(&cli.root, cli.config.as_deref())?;

    let mut exclude = config.scan.exclude;
    exclude.extend(cli.exclude.iter().map(Ecosystem::from));

    let options = ScanOptions {
        walk: WalkOptions {
            prune: PruneSet::new(config.scan.prune),
            follow_links: cli.follow_links || config.scan.follow_links,
        },
        exclude,
    };

    let progress = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb
    };

    let outcome = Scanner::new(&cli.root, options)
        .with_progress(progress.clone())
        .scan();
    progress.finish_and_clear();

    if outcome.records.is_empty() {
        eprintln!("No dependencies found.");
        return Ok(());
    }

    let output = cli.output_path();
    match cli.format {
        OutputFormat::Csv => report::csv::write_file(&outcome.records, &output)?,
        OutputFormat::Json => report::json::write_file(&outcome.records, &output)?,
    }

    if !cli.quiet {
        terminal::print_counts(&outcome);
        if cli.verbose {
            eprintln!("{}", terminal::render_summary(&outcome));
        }
        println!(
            "Written {} dependencies to {}",
            outcome.records.len(),
            output.display()
        );
    }

    Ok(())
}
