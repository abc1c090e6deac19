//! huffnum-core: Huffman compression for streams of base-10 integers
//!
//! This library compresses an ordered sequence of decimal integers (one per
//! record, optional leading minus sign) into a compact bitstream and reverses
//! the transform exactly. The entropy code runs over an 11-symbol alphabet:
//! the digits 0-9 plus a record separator. Minimized decimal digits never
//! start with a zero, so a leading zero doubles as the negative-sign marker
//! and the alphabet stays at 11 symbols instead of 12.
//!
//! # Architecture
//!
//! The pipeline is built from clear module boundaries:
//! - `record`: integer records, digit projection and reassembly
//! - `alphabet`: the 11-symbol alphabet and frequency counting
//! - `tree`: deterministic Huffman tree construction (parent-pointer form)
//! - `codebook`: per-symbol prefix codes derived from the tree
//! - `header`: tree serialization so a decoder rebuilds the exact code table
//!   without retransmitted frequencies
//! - `bitio`: low-level MSB-first bit reading/writing
//! - `codec`: the `encode`/`decode` entry points over the full bitstream
//! - `metrics`: per-call compression statistics
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured errors
//! - **Deterministic**: identical input always yields byte-identical output;
//!   the merge tie-break is pinned and part of the wire format
//! - **Per-call state**: each encode/decode owns its tree, code table, and
//!   buffers; nothing persists across calls
//!
//! # Bitstream
//!
//! ```text
//! [pad-length: 3 bits][tree header][body: packed prefix codes][pad bits]
//! ```
//!
//! MSB-first throughout, byte-aligned at the end; pad-length records how many
//! trailing bits of the last byte are filler.

pub mod alphabet;
pub mod bitio;
pub mod codebook;
pub mod codec;
pub mod error;
pub mod header;
pub mod metrics;
pub mod record;
pub mod tree;

// Re-export commonly used types
pub use codec::{decode, encode, encode_with_metrics};
pub use error::{Error, Result};
pub use metrics::EncodeMetrics;
pub use record::Record;
