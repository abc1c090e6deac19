//! huffnum: compress text files of decimal integers.
//!
//! Thin file-and-argument wrapper around `huffnum-core`: reads one integer
//! per line, feeds the records through `encode`/`decode`, and writes the
//! result back out. With no input file it generates a reproducible sample
//! and compresses that, so the tool demonstrates itself with zero arguments.

mod config;
mod input_gen;

use std::fs;
use std::path::PathBuf;
use std::process;

use huffnum_core::{decode, encode_with_metrics, Record};

use crate::config::{Config, Mode};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(message) = run(&config) {
        eprintln!("error: {message}");
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), String> {
    match config.mode {
        Mode::Encode => run_encode(config),
        Mode::Decode => run_decode(config),
    }
}

fn run_encode(config: &Config) -> Result<(), String> {
    let (text, source) = match &config.input_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("reading {}: {e}", path.display()))?;
            (text, path.display().to_string())
        }
        None => {
            println!(
                "Generating {} sample records (seed {})",
                config.sample_records, config.seed
            );
            let text = input_gen::generate_sample_text(config.seed, config.sample_records);
            (text, "generated sample".to_string())
        }
    };

    let records = parse_lines(&text)?;
    let (bytes, metrics) = encode_with_metrics(&records).map_err(|e| e.to_string())?;

    let output = output_path(config);
    fs::write(&output, &bytes).map_err(|e| format!("writing {}: {e}", output.display()))?;

    println!(
        "Compressed {} records from {} into {} ({} bytes)",
        records.len(),
        source,
        output.display(),
        bytes.len()
    );

    if config.print_metrics {
        metrics.print_summary();
    }

    if config.verify {
        let decoded = decode(&bytes).map_err(|e| format!("verification decode: {e}"))?;
        if decoded == records {
            println!("Verification: PASSED ({} records)", decoded.len());
        } else {
            return Err("verification FAILED: decoded records differ from input".to_string());
        }
    }

    Ok(())
}

fn run_decode(config: &Config) -> Result<(), String> {
    let input = config
        .input_file
        .as_ref()
        .ok_or("decode mode requires --in")?;
    let bytes = fs::read(input).map_err(|e| format!("reading {}: {e}", input.display()))?;
    let records = decode(&bytes).map_err(|e| e.to_string())?;

    let mut text = String::new();
    for record in &records {
        text.push_str(&record.to_string());
        text.push('\n');
    }

    let output = output_path(config);
    fs::write(&output, text).map_err(|e| format!("writing {}: {e}", output.display()))?;

    println!(
        "Decoded {} records from {} into {}",
        records.len(),
        input.display(),
        output.display()
    );
    Ok(())
}

/// Parse one record per line.
///
/// Fully blank lines are skipped so a trailing newline cannot change the
/// record sequence; anything else malformed aborts with its line number.
fn parse_lines(text: &str) -> Result<Vec<Record>, String> {
    let mut records = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: Record = line
            .parse()
            .map_err(|e| format!("line {}: {e}", number + 1))?;
        records.push(record);
    }
    Ok(records)
}

/// Resolve the output path: explicit `--out`, or derived from the input.
fn output_path(config: &Config) -> PathBuf {
    if let Some(path) = &config.output_file {
        return path.clone();
    }
    match (config.mode, &config.input_file) {
        (Mode::Encode, Some(input)) => {
            let mut name = input.as_os_str().to_owned();
            name.push(".huf");
            PathBuf::from(name)
        }
        (Mode::Encode, None) => PathBuf::from("sample.huf"),
        (Mode::Decode, Some(input)) => {
            if input.extension().map_or(false, |e| e == "huf") {
                input.with_extension("txt")
            } else {
                let mut name = input.as_os_str().to_owned();
                name.push(".txt");
                PathBuf::from(name)
            }
        }
        (Mode::Decode, None) => PathBuf::from("out.txt"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        let records = parse_lines("5\n\n-3\n\n\n0\n").unwrap();
        assert_eq!(
            records,
            vec![Record::from(5), Record::from(-3), Record::from(0)]
        );
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let records = parse_lines("  42 \n\t-7\n").unwrap();
        assert_eq!(records, vec![Record::from(42), Record::from(-7)]);
    }

    #[test]
    fn bad_line_reports_its_number() {
        let err = parse_lines("1\n2\nnope\n").unwrap_err();
        assert!(err.starts_with("line 3:"), "got: {err}");
    }

    #[test]
    fn output_paths_derive_from_input() {
        let base = Config::from_args(&["--seed".to_string(), "1".to_string()]).unwrap();

        let mut config = base.clone();
        config.input_file = Some(PathBuf::from("nums.txt"));
        assert_eq!(output_path(&config), PathBuf::from("nums.txt.huf"));

        config.mode = Mode::Decode;
        config.input_file = Some(PathBuf::from("nums.huf"));
        assert_eq!(output_path(&config), PathBuf::from("nums.txt"));

        config.input_file = Some(PathBuf::from("blob.bin"));
        assert_eq!(output_path(&config), PathBuf::from("blob.bin.txt"));

        config.output_file = Some(PathBuf::from("explicit.out"));
        assert_eq!(output_path(&config), PathBuf::from("explicit.out"));
    }

    #[test]
    fn generated_sample_round_trips_end_to_end() {
        let text = input_gen::generate_sample_text(2024, 2000);
        let records = parse_lines(&text).unwrap();

        let (bytes, _) = encode_with_metrics(&records).unwrap();
        assert_eq!(decode(&bytes).unwrap(), records);
    }
}
