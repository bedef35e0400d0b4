//! Counts the total number of bases (nucleotides) in a FASTQ file.
//!
//! ```shell
//! fastq-count-bases reads.fq
//! zcat reads.fq.gz | fastq-count-bases -
//! ```
//!
//! On success, the total is the only thing written to standard output.
//! Logging and errors go to standard error.

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use fastq_count_bases::Input;
use fastq_count_bases::Reader;
use tracing::debug;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// Count the total number of bases (nucleotides) in a FASTQ file.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// FASTQ file or - to read from STDIN.
    #[arg(value_name = "FASTQ")]
    fastq: PathBuf,

    #[command(flatten)]
    verbose: Verbosity,
}

/// Counts the bases in the input and writes the total to standard output.
fn count(args: &Args) -> Result<()> {
    let input = Input::new(&args.fastq);
    match input.path() {
        Some(path) => debug!(path = %path.display(), "reading from a file"),
        None => debug!("reading from standard input"),
    }

    let mut reader = input
        .open()
        .map(Reader::new)
        .with_context(|| format!("opening {input}"))?;

    let total = reader
        .count_bases()
        .with_context(|| format!("counting bases in {input}"))?;

    // The input is released before anything is written.
    drop(reader);
    info!("counted {total} bases in {input}");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{total}")
        .and_then(|_| stdout.flush())
        .context("writing the total")?;

    Ok(())
}

fn main() {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .with_writer(std::io::stderr)
            .init(),
    };

    if let Err(err) = count(&args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
