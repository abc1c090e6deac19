//! Stream encoder and decoder: the public entry points.
//!
//! Encoding is two-pass-then-one-pass: a full pass over the projected
//! symbols to count frequencies and build the tree (codes are unknown until
//! the whole stream's statistics are), then a second pass to emit the body.
//! Decoding is a single pass over the bitstream.
//!
//! ```text
//! [pad-length: 3 bits][tree header][body: packed prefix codes][pad bits]
//! ```
//!
//! The pad-length field is written as a placeholder, then backfilled once
//! the body is padded to a byte boundary; it makes the exact body bit count
//! recoverable, so the decoder never has to guess where codes end.

use crate::alphabet::{Symbol, SymbolCounts};
use crate::bitio::{BitReader, BitWriter};
use crate::codebook::CodeTable;
use crate::error::{
    CorruptHeaderError, Error, Result, TruncatedStreamError, UnsupportedAlphabetError,
};
use crate::header;
use crate::metrics::EncodeMetrics;
use crate::record::{self, Record};
use crate::tree::{HuffmanTree, FIRST_INTERNAL};

/// Bits reserved at the front of the stream for the pad length.
const PAD_FIELD_BITS: u32 = 3;

/// Compress records into a bitstream.
pub fn encode(records: &[Record]) -> Result<Vec<u8>> {
    let (bytes, _) = encode_with_metrics(records)?;
    Ok(bytes)
}

/// Compress records, also reporting per-call statistics.
pub fn encode_with_metrics(records: &[Record]) -> Result<(Vec<u8>, EncodeMetrics)> {
    let symbols = record::project(records)?;
    let counts = SymbolCounts::tally(&symbols);
    let tree = HuffmanTree::from_counts(&counts);
    let table = CodeTable::from_tree(&tree);

    let mut writer = BitWriter::new();
    writer.write_bits(0, PAD_FIELD_BITS); // placeholder, backfilled below
    header::write_tree(&tree, &mut writer);
    let header_bits = writer.bit_len() - PAD_FIELD_BITS as usize;

    let body_start = writer.bit_len();
    for &symbol in &symbols {
        match table.code(symbol) {
            Some(code) => code.write_to(&mut writer),
            // a symbol that was just tallied always has a code
            None => {
                return Err(
                    UnsupportedAlphabetError::IndexOutOfRange(symbol.index() as u8).into(),
                )
            }
        }
    }
    let body_bits = writer.bit_len() - body_start;

    let pad = writer.pad_to_byte();
    writer.patch_bits(0, pad, PAD_FIELD_BITS);
    let bytes = writer.into_bytes();

    let metrics = EncodeMetrics::collect(
        records.len(),
        &counts,
        &table,
        header_bits,
        body_bits,
        pad as usize,
        bytes.len(),
    );
    Ok((bytes, metrics))
}

/// Decompress a bitstream produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<Vec<Record>> {
    let mut reader = BitReader::new(bytes);
    let pad = reader
        .read_bits(PAD_FIELD_BITS)
        .map_err(|_| CorruptHeaderError::UnexpectedEnd { field: 0 })?;

    let tree = header::read_tree(&mut reader)?;

    // the pad field read succeeded, so there are at least 8 bits and
    // pad (0-7) cannot underflow the total
    let body_end = reader.bit_len() - pad as usize;
    if reader.position() > body_end {
        return Err(CorruptHeaderError::OverlapsPadding.into());
    }

    let symbols = walk_body(&tree, &mut reader, body_end)?;
    record::reassemble(&symbols)
}

/// Recover the symbol stream by walking the tree over the body bits.
///
/// Each symbol starts at the root and follows bits (0 = first-registered
/// child, 1 = second) until a leaf; the walk stops exactly at `body_end`.
fn walk_body(
    tree: &HuffmanTree,
    reader: &mut BitReader<'_>,
    body_end: usize,
) -> Result<Vec<Symbol>> {
    let mut symbols = Vec::new();
    match tree {
        HuffmanTree::Empty => {
            let bits = body_end.saturating_sub(reader.position());
            if bits > 0 {
                return Err(CorruptHeaderError::BodyAfterEmptyTree { bits }.into());
            }
        }
        HuffmanTree::Single { symbol } => {
            while reader.position() < body_end {
                let position = reader.position();
                if read_body_bit(reader, position)? {
                    return Err(TruncatedStreamError::InvalidCodeBit { position }.into());
                }
                symbols.push(*symbol);
            }
        }
        HuffmanTree::Full(full) => {
            let slots = full.child_slots();
            let root = full.root();
            while reader.position() < body_end {
                let mut node = root;
                while node >= FIRST_INTERNAL {
                    let position = reader.position();
                    if position >= body_end {
                        return Err(TruncatedStreamError::MidSymbol { position }.into());
                    }
                    let bit = read_body_bit(reader, position)?;
                    node = match slots.child(node, bit) {
                        Some(child) => child,
                        None => {
                            return Err(TruncatedStreamError::InvalidCodeBit { position }.into())
                        }
                    };
                }
                symbols.push(Symbol::from_index(node)?);
            }
        }
    }
    Ok(symbols)
}

fn read_body_bit(reader: &mut BitReader<'_>, position: usize) -> Result<bool> {
    reader
        .read_bit()
        .map_err(|_| Error::from(TruncatedStreamError::MidSymbol { position }))
}
