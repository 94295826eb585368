//! transit-catalogue — answer bus, stop, and route queries over a transit
//! network read from a request document.
//!
//! ```text
//! transit-catalogue --input requests.json --pretty
//! transit-catalogue --format text < legacy.txt
//! ```
//!
//! Input defaults to stdin and output to stdout; logs go to stderr.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `base_requests` / `routing_settings` / `stat_requests` document
    Json,
    /// Count-prefixed `Stop ...:` / `Bus ...:` lines followed by queries
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "transit-catalogue", version, about = "Transit catalogue query processor")]
struct Args {
    /// Request file (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Response file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Request format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Pretty-print JSON responses
    #[arg(long)]
    pretty: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let reader: Box<dyn Read> = match &args.input {
        Some(path) => {
            log::info!("Input: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(io::stdin().lock()),
    };
    let reader = BufReader::new(reader);

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            log::info!("Output: {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("Failed to create output {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    let answered = match args.format {
        Format::Json => tc_io::process_json(reader, &mut writer, args.pretty)
            .context("Failed to process JSON requests")?,
        Format::Text => tc_io::process_text(reader, &mut writer)
            .context("Failed to process text requests")?,
    };
    writer.flush().context("Failed to flush output")?;

    log::info!("Answered {answered} requests");
    Ok(())
}
