//! Configuration for the huffnum CLI.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: with no input file it generates
//! a reproducible sample, compresses it, and prints a summary. All defaults
//! are printable so runs can be reproduced from the seed.

use std::path::PathBuf;

/// Operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compress a text file of integers into a `.huf` blob
    Encode,
    /// Expand a `.huf` blob back into integer lines
    Decode,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Encode or decode
    pub mode: Mode,

    /// Input file path (None = generate a sample, encode mode only)
    pub input_file: Option<PathBuf>,

    /// Output file path (None = derive from the input path)
    pub output_file: Option<PathBuf>,

    /// Re-decode freshly written output and compare against the input
    pub verify: bool,

    /// Seed for sample generation
    pub seed: u64,

    /// Number of records when generating a sample
    pub sample_records: usize,

    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the compression summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no seed is provided, a time-based seed is chosen and printed so
    /// the run stays reproducible.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode = Mode::Encode;
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut verify = false;
        let mut seed: Option<u64> = None;
        let mut sample_records: Option<usize> = None;
        let mut print_config = false;
        let mut print_metrics = true;

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
                "--decode" => {
                    mode = Mode::Decode;
                }
                "--verify" => {
                    verify = true;
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--count" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--count requires a number".to_string());
                    }
                    sample_records = Some(args[i].parse().map_err(|_| "invalid count")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        if mode == Mode::Decode && verify {
            return Err("--verify only applies to encode mode".to_string());
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            mode,
            input_file,
            output_file,
            verify,
            seed,
            sample_records: sample_records.unwrap_or(50_000),
            print_config,
            print_metrics,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!(
            "Mode: {}",
            match self.mode {
                Mode::Encode => "encode",
                Mode::Decode => "decode",
            }
        );
        println!(
            "Input:  {}",
            self.input_file
                .as_ref()
                .map_or("(generate sample)".to_string(), |p| p
                    .display()
                    .to_string())
        );
        println!(
            "Output: {}",
            self.output_file
                .as_ref()
                .map_or("(derived from input)".to_string(), |p| p
                    .display()
                    .to_string())
        );
        println!("Verify: {}", self.verify);
        println!("Seed: {}", self.seed);
        println!("Sample records: {}", self.sample_records);
        println!();
    }
}

fn print_help() {
    println!("huffnum: compress text files of integers with a custom Huffman code");
    println!();
    println!("USAGE:");
    println!("    huffnum [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>       Input file (default: generate a sample)");
    println!("    --out <PATH>      Output file (default: derived from input)");
    println!("    --decode          Decode instead of encode");
    println!("    --verify          Re-decode the output and compare (encode mode)");
    println!();
    println!("    --seed <N>        Seed for sample generation (default: time-based)");
    println!("    --count <N>       Sample record count (default: 50000)");
    println!();
    println!("    --print-config    Print resolved configuration");
    println!("    --no-metrics      Don't print the compression summary");
    println!("    --help, -h        Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffnum                              # compress a generated sample");
    println!("    huffnum --seed 42 --verify           # deterministic self-check");
    println!("    huffnum --in nums.txt                # compress to nums.txt.huf");
    println!("    huffnum --decode --in nums.txt.huf   # expand back to text");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults_are_encode_with_metrics() {
        let config = Config::from_args(&args(&["--seed", "1"])).unwrap();
        assert_eq!(config.mode, Mode::Encode);
        assert!(config.input_file.is_none());
        assert!(config.print_metrics);
        assert!(!config.verify);
        assert_eq!(config.seed, 1);
        assert_eq!(config.sample_records, 50_000);
    }

    #[test]
    fn decode_flag_switches_mode() {
        let config = Config::from_args(&args(&["--decode", "--in", "x.huf"])).unwrap();
        assert_eq!(config.mode, Mode::Decode);
        assert_eq!(config.input_file, Some(PathBuf::from("x.huf")));
    }

    #[test]
    fn verify_is_rejected_in_decode_mode() {
        assert!(Config::from_args(&args(&["--decode", "--verify"])).is_err());
    }

    #[test]
    fn missing_value_is_rejected() {
        assert!(Config::from_args(&args(&["--in"])).is_err());
        assert!(Config::from_args(&args(&["--seed", "x"])).is_err());
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert!(Config::from_args(&args(&["--bogus"])).is_err());
    }
}
