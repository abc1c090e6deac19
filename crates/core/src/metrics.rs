//! Per-call statistics for an encode.
//!
//! Metrics are collected in a plain struct filled in by the encoder and
//! handed back to the caller; there is no global state and nothing survives
//! the call. The CLI prints the summary, tests assert on the fields.

use crate::alphabet::{Symbol, SymbolCounts, ALPHABET_SIZE};
use crate::codebook::CodeTable;

/// Bits per symbol of the naive fixed-width baseline: 4 bits is the
/// smallest width covering an 11-symbol alphabet.
pub const NAIVE_BITS_PER_SYMBOL: u64 = 4;

/// Statistics for one encode call.
#[derive(Debug, Clone)]
pub struct EncodeMetrics {
    /// Number of input records
    pub records: usize,

    /// Total projected symbols (digits, sign markers, separators)
    pub symbols: u64,

    /// Occurrences per alphabet index
    pub symbol_counts: [u64; ALPHABET_SIZE],

    /// Assigned code length per alphabet index (0 for uncoded symbols)
    pub code_lengths: [u8; ALPHABET_SIZE],

    /// Tree header size in bits (pad-length field excluded)
    pub header_bits: usize,

    /// Body size in bits
    pub body_bits: usize,

    /// Trailing filler bits (0-7)
    pub pad_bits: usize,

    /// Final output size in bytes
    pub output_bytes: usize,
}

impl EncodeMetrics {
    /// Snapshot the statistics of a finished encode.
    pub(crate) fn collect(
        records: usize,
        counts: &SymbolCounts,
        table: &CodeTable,
        header_bits: usize,
        body_bits: usize,
        pad_bits: usize,
        output_bytes: usize,
    ) -> EncodeMetrics {
        let mut symbol_counts = [0u64; ALPHABET_SIZE];
        let mut code_lengths = [0u8; ALPHABET_SIZE];
        for index in 0..ALPHABET_SIZE {
            if let Ok(symbol) = Symbol::from_index(index as u8) {
                symbol_counts[index] = counts.count(symbol);
                code_lengths[index] = table.code(symbol).map_or(0, |c| c.len() as u8);
            }
        }
        EncodeMetrics {
            records,
            symbols: counts.total(),
            symbol_counts,
            code_lengths,
            header_bits,
            body_bits,
            pad_bits,
            output_bytes,
        }
    }

    /// Mean code length over the encoded stream.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.symbols == 0 {
            0.0
        } else {
            self.body_bits as f64 / self.symbols as f64
        }
    }

    /// Body size of the naive fixed-width encoding, in bits.
    pub fn naive_body_bits(&self) -> u64 {
        self.symbols * NAIVE_BITS_PER_SYMBOL
    }

    /// Output size relative to the naive fixed-width body (lower is better).
    pub fn ratio_vs_naive(&self) -> f64 {
        let naive = self.naive_body_bits();
        if naive == 0 {
            0.0
        } else {
            (self.output_bytes as f64 * 8.0) / naive as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=== Compression Summary ===");
        println!("Records: {}", self.records);
        println!("Symbols: {}", self.symbols);
        println!(
            "Stream: {} header + {} body + {} pad bits -> {} bytes",
            self.header_bits, self.body_bits, self.pad_bits, self.output_bytes
        );
        println!(
            "Mean code length: {:.3} bits/symbol (naive fixed width: {})",
            self.bits_per_symbol(),
            NAIVE_BITS_PER_SYMBOL
        );
        println!(
            "Size vs naive fixed-width body: {:.1}%",
            self.ratio_vs_naive() * 100.0
        );
        println!();
        println!("symbol   count  code bits");
        for index in 0..ALPHABET_SIZE {
            let label = if index == Symbol::SEP.index() {
                "SEP".to_string()
            } else {
                index.to_string()
            };
            println!(
                "{:>6}  {:>6}  {:>9}",
                label, self.symbol_counts[index], self.code_lengths[index]
            );
        }
        println!();
    }
}
