//! henc: encode a file (or a generated sample) with the adaptive Huffman
//! encoder.
//!
//! Exit status: 0 on success, 2 on bad arguments, 1 if encoding fails.

mod config;
mod input_gen;

use config::{Command, Config};
use henc_core::EncodeStats;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            config::print_help();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("run `henc --help` for usage");
            return ExitCode::from(2);
        }
    };

    init_tracing(config.verbose);

    if config.print_config {
        config.print();
    }

    match run(&config) {
        Ok(stats) => {
            if config.print_metrics {
                stats.print_summary();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "encoding failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &Config) -> henc_core::Result<EncodeStats> {
    let input: Box<dyn Read> = match &config.input_file {
        Some(path) => {
            info!(path = %path.display(), "reading input file");
            Box::new(BufReader::new(File::open(path)?))
        }
        None => {
            info!(seed = config.seed, bytes = config.sample_bytes, "generating sample input");
            Box::new(Cursor::new(input_gen::generate_sample_data(
                config.seed,
                config.sample_bytes,
            )))
        }
    };

    let output = BufWriter::new(File::create(&config.output_file)?);
    let stats = henc_core::encode(input, output)?;

    info!(path = %config.output_file.display(), bytes = stats.output_bytes, "wrote output");
    Ok(stats)
}
