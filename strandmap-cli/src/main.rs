use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod error;
mod io;

use config::Config;
use error::CliResult;
use strandmap_core::{search, segments, AlignmentGraph, Reference, Sequence};

#[derive(Parser)]
#[command(name = "strandmap")]
#[command(about = "strandmap - map a query onto both strands of a reference")]
#[command(version)]
#[command(long_about = "
strandmap aligns a query sequence against a reference and its
reverse-complement with a minimum-edit-cost search over a layered state
graph, then reports the matched segments as (queryStart,queryEnd,refStart,refEnd)
records.

Examples:
  strandmap reference2.txt query2.txt
  strandmap genome.txt reads.txt -o segments.txt
  strandmap --config strandmap.toml -v
")]
struct Cli {
    /// Reference sequence file (single line of bases)
    reference: Option<PathBuf>,

    /// Query sequence file (single line of bases)
    query: Option<PathBuf>,

    /// Output file for segment records
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

fn setup_logging(verbose: u8, quiet: bool) -> Result<()> {
    if quiet {
        std::env::set_var("RUST_LOG", "error");
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            _ => "trace",
        };
        std::env::set_var("RUST_LOG", level);
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();

    Ok(())
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = Config::load(cli.config.as_ref().map(|v| v.as_path()))?;

    // Explicit CLI argument > configuration file > built-in default
    let reference_path = cli.reference.clone().unwrap_or(config.io.reference);
    let query_path = cli.query.clone().unwrap_or(config.io.query);
    let output_path = cli.output.clone().unwrap_or(config.io.output);

    let reference = Reference::from_bases(&io::read_sequence_line(&reference_path)?);
    let query = Sequence::from_bases(&io::read_sequence_line(&query_path)?);
    log::info!(
        "loaded reference ({} bases) and query ({} bases)",
        reference.len() - 1,
        query.len() - 1
    );

    let graph = AlignmentGraph::new(&reference, &query);
    let progress = config.report.progress;
    let outcome = search(&graph, |j, distance| {
        if progress {
            println!("query {}, distance: {}", j, distance);
        }
    })?;
    println!("Found a path with distance {}", outcome.distance);

    let records = segments(&outcome);
    io::write_segments(&output_path, &records)?;
    log::info!(
        "wrote {} segment record(s) to {}",
        records.len(),
        output_path.display()
    );

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = setup_logging(cli.verbose, cli.quiet) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    if let Err(err) = run(&cli) {
        eprintln!("{}", err);
        std::process::exit(err.exit_code());
    }
}
