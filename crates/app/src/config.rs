//! Configuration for the henc application.
//!
//! Handles parsing command-line arguments and filling in defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: without `--in` it encodes a
//! generated sample, reproducible with `--seed`.

use std::path::PathBuf;

/// Default size of the generated sample input.
const DEFAULT_SAMPLE_BYTES: usize = 1024 * 1024;

/// Default seed for the generated sample input.
const DEFAULT_SEED: u64 = 42;

/// Complete configuration for an encode run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // === Files ===
    /// Input file path (None = generate sample)
    pub input_file: Option<PathBuf>,

    /// Output file path
    pub output_file: PathBuf,

    // === Sample input ===
    /// Seed for the generated sample
    pub seed: u64,

    /// Size of the generated sample in bytes
    pub sample_bytes: usize,

    // === Behavior ===
    /// Whether to print the resolved config
    pub print_config: bool,

    /// Whether to print the encode summary
    pub print_metrics: bool,

    /// Whether to log at debug level by default
    pub verbose: bool,
}

/// Outcome of argument parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Encode with the given configuration
    Run(Config),
    /// Print usage and exit
    Help,
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded).
    pub fn from_args(args: &[String]) -> Result<Command, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_config = false;
        let mut print_metrics = true;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--verbose" | "-v" => {
                    verbose = true;
                }
                "--help" | "-h" => {
                    return Ok(Command::Help);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Encoded output sits next to the input, as <input>.huf
        let output_file = output_file.unwrap_or_else(|| match &input_file {
            Some(input) => {
                let mut name = input.clone().into_os_string();
                name.push(".huf");
                PathBuf::from(name)
            }
            None => PathBuf::from("./sample.huf"),
        });

        Ok(Command::Run(Config {
            input_file,
            output_file,
            seed: seed.unwrap_or(DEFAULT_SEED),
            sample_bytes: sample_bytes.unwrap_or(DEFAULT_SAMPLE_BYTES),
            print_config,
            print_metrics,
            verbose,
        }))
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.input_file {
            Some(path) => println!("Input file:  {}", path.display()),
            None => println!(
                "Input file:  (generated sample, {} bytes, seed {})",
                self.sample_bytes, self.seed
            ),
        }
        println!("Output file: {}", self.output_file.display());
        println!();
        println!("=== Encoder ===");
        println!("Alphabet: {} symbols (EOF = {})", henc_core::ALPHABET_SIZE, henc_core::EOF_SYMBOL);
        println!("Block size: {} symbols", henc_core::BLOCK_SIZE);
        println!();
    }
}

pub fn print_help() {
    println!("henc: Adaptive Huffman encoder");
    println!();
    println!("USAGE:");
    println!("    henc [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>             Input file (default: generate sample)");
    println!("    --out <PATH>            Output file (default: <input>.huf or ./sample.huf)");
    println!("    --seed <N>              Seed for the generated sample (default: 42)");
    println!("    --sample-bytes <N>      Size of the generated sample (default: 1048576)");
    println!();
    println!("    --print-config          Print resolved configuration");
    println!("    --no-metrics            Don't print the encode summary");
    println!("    --verbose, -v           Log rebuilds and resets (RUST_LOG overrides)");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    henc                                # Encode a generated sample");
    println!("    henc --in report.pdf                # Writes report.pdf.huf");
    println!("    henc --in data.bin --out data.enc   # Explicit output path");
    println!();
}
