//! Tree header serialization and parsing.
//!
//! The header lets a decoder rebuild the exact tree without retransmitted
//! frequencies. Every field is 4 bits. A parent field holds
//! `parent_id - 11`, which always fits in `[0, 9]` because parents are
//! necessarily internal nodes (ids 11-20); the six unused 4-bit values carry
//! the sentinels.
//!
//! # Field values
//!
//! ```text
//! 0x0-0x9   parent field: parent id - 11
//! 0xA       leaf not present in the tree (zero frequency)
//! 0xB-0xD   reserved, rejected by the decoder
//! 0xE       first field only: single-leaf tag, a 4-bit symbol index follows
//! 0xF       first field only: empty-tree tag
//! ```
//!
//! # General form
//!
//! One field per node except the root, in ascending id order: first the 11
//! leaf fields (absent leaves as `0xA`), then the non-root internal fields.
//! With k present leaves there are k-1 internal nodes, so the decoder knows
//! the internal field count, and therefore where the header ends, as soon
//! as the leaf fields are read. Child-slot assignment is derived on both
//! sides by the same ascending-id scan: the first node naming a parent is
//! its bit-0 child, the second its bit-1 child.

use crate::alphabet::{Symbol, ALPHABET_SIZE, MAX_NODES};
use crate::bitio::{BitReader, BitWriter};
use crate::error::CorruptHeaderError;
use crate::tree::{HuffmanTree, NodeId, ParentTree, FIRST_INTERNAL};

/// Width of one header field in bits.
pub const FIELD_BITS: u32 = 4;

/// Field marking a leaf whose symbol never occurs.
const ABSENT_LEAF: u32 = 0xA;

/// First-field tag for a single-leaf tree.
const SINGLE_TAG: u32 = 0xE;

/// First-field tag for an empty tree.
const EMPTY_TAG: u32 = 0xF;

/// Serialize a tree into the bit stream.
pub fn write_tree(tree: &HuffmanTree, writer: &mut BitWriter) {
    match tree {
        HuffmanTree::Empty => writer.write_bits(EMPTY_TAG, FIELD_BITS),
        HuffmanTree::Single { symbol } => {
            writer.write_bits(SINGLE_TAG, FIELD_BITS);
            writer.write_bits(symbol.index() as u32, FIELD_BITS);
        }
        HuffmanTree::Full(full) => {
            for id in 0..full.root() {
                let field = match full.parent(id) {
                    Some(parent) => u32::from(parent - FIRST_INTERNAL),
                    None => ABSENT_LEAF,
                };
                writer.write_bits(field, FIELD_BITS);
            }
        }
    }
}

/// Parse a tree header, rebuilding the exact tree the encoder serialized.
pub fn read_tree(reader: &mut BitReader<'_>) -> Result<HuffmanTree, CorruptHeaderError> {
    let first = read_field(reader, 0)?;
    match first {
        EMPTY_TAG => return Ok(HuffmanTree::Empty),
        SINGLE_TAG => {
            let index = read_field(reader, 1)? as u8;
            let symbol = Symbol::from_index(index)
                .map_err(|_| CorruptHeaderError::InvalidSymbolIndex { index })?;
            return Ok(HuffmanTree::Single { symbol });
        }
        _ => {}
    }

    let mut parent = [None; MAX_NODES];
    let mut present: u8 = 0;

    // leaf fields for ids 0-10; `first` already holds leaf 0's field
    let mut field = first;
    let mut id: NodeId = 0;
    loop {
        match field {
            0..=9 => {
                parent[id as usize] = Some(field as NodeId + FIRST_INTERNAL);
                present += 1;
            }
            ABSENT_LEAF => {}
            _ => {
                return Err(CorruptHeaderError::ReservedField {
                    node: id,
                    value: field as u8,
                })
            }
        }
        id += 1;
        if id as usize == ALPHABET_SIZE {
            break;
        }
        field = read_field(reader, id)?;
    }

    if present < 2 {
        return Err(CorruptHeaderError::TooFewLeaves { present });
    }

    // k present leaves imply k-1 internal nodes; all but the root carry a field
    let nodes = ALPHABET_SIZE + present as usize - 1;
    let root = nodes as NodeId - 1;
    for id in FIRST_INTERNAL..root {
        let field = read_field(reader, id)?;
        if field > 9 {
            return Err(CorruptHeaderError::ReservedField {
                node: id,
                value: field as u8,
            });
        }
        let p = field as NodeId + FIRST_INTERNAL;
        if p <= id {
            return Err(CorruptHeaderError::ParentNotAfterChild { node: id, parent: p });
        }
        parent[id as usize] = Some(p);
    }

    // every parent reference must land inside the reconstructed tree
    for id in 0..root {
        if let Some(p) = parent[id as usize] {
            if p > root {
                return Err(CorruptHeaderError::ParentOutOfRange {
                    node: id,
                    parent: p,
                    root,
                });
            }
        }
    }

    let tree = ParentTree::from_parts(parent, nodes);
    tree.check_arity()?;
    Ok(HuffmanTree::Full(tree))
}

fn read_field(reader: &mut BitReader<'_>, field: NodeId) -> Result<u32, CorruptHeaderError> {
    reader
        .read_bits(FIELD_BITS)
        .map_err(|_| CorruptHeaderError::UnexpectedEnd { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::SymbolCounts;

    fn sym(d: u8) -> Symbol {
        Symbol::digit(d).unwrap()
    }

    fn round_trip(tree: &HuffmanTree) -> HuffmanTree {
        let mut writer = BitWriter::new();
        write_tree(tree, &mut writer);
        writer.pad_to_byte();
        let bytes = writer.into_bytes();
        let mut reader = BitReader::new(&bytes);
        read_tree(&mut reader).unwrap()
    }

    fn tree_for(symbols: &[Symbol]) -> HuffmanTree {
        HuffmanTree::from_counts(&SymbolCounts::tally(symbols))
    }

    fn parse(bits: &[u8]) -> Result<HuffmanTree, CorruptHeaderError> {
        // helper bytes are already a padded header
        let mut reader = BitReader::new(bits);
        read_tree(&mut reader)
    }

    #[test]
    fn empty_tree_round_trips() {
        assert_eq!(round_trip(&HuffmanTree::Empty), HuffmanTree::Empty);
    }

    #[test]
    fn single_tree_round_trips() {
        let tree = HuffmanTree::Single {
            symbol: Symbol::SEP,
        };
        assert_eq!(round_trip(&tree), tree);
    }

    #[test]
    fn two_leaf_tree_round_trips() {
        let tree = tree_for(&[sym(5), Symbol::SEP]);
        assert_eq!(round_trip(&tree), tree);
    }

    #[test]
    fn full_alphabet_tree_round_trips() {
        let mut symbols = Vec::new();
        for d in 0..10u8 {
            for _ in 0..=d {
                symbols.push(sym(d));
            }
        }
        symbols.extend([Symbol::SEP; 7]);
        let tree = tree_for(&symbols);
        assert_eq!(round_trip(&tree), tree);
    }

    #[test]
    fn two_leaf_header_is_eleven_fields() {
        let mut writer = BitWriter::new();
        write_tree(&tree_for(&[sym(5), Symbol::SEP]), &mut writer);
        assert_eq!(writer.bit_len(), 11 * FIELD_BITS as usize);
    }

    #[test]
    fn full_alphabet_header_is_twenty_fields() {
        let symbols: Vec<Symbol> = (0..11u8)
            .flat_map(|i| {
                std::iter::repeat(Symbol::from_index(i).unwrap()).take(usize::from(i) + 1)
            })
            .collect();
        let mut writer = BitWriter::new();
        write_tree(&tree_for(&symbols), &mut writer);
        assert_eq!(writer.bit_len(), 20 * FIELD_BITS as usize);
    }

    #[test]
    fn reserved_leaf_field_is_rejected() {
        // first field 0xB: neither tag nor a valid leaf field
        let err = parse(&[0b1011_0000, 0, 0, 0, 0, 0, 0]).unwrap_err();
        assert_eq!(
            err,
            CorruptHeaderError::ReservedField {
                node: 0,
                value: 0xB
            }
        );
    }

    #[test]
    fn single_tag_with_bad_index_is_rejected() {
        // 0xE then symbol index 0xC
        let err = parse(&[0b1110_1100]).unwrap_err();
        assert_eq!(err, CorruptHeaderError::InvalidSymbolIndex { index: 0xC });
    }

    #[test]
    fn too_few_leaves_is_rejected() {
        // 11 leaf fields: only leaf 0 present (parent 11), the rest absent
        let mut writer = BitWriter::new();
        writer.write_bits(0x0, FIELD_BITS);
        for _ in 0..10 {
            writer.write_bits(0xA, FIELD_BITS);
        }
        writer.pad_to_byte();
        let err = parse(&writer.into_bytes()).unwrap_err();
        assert_eq!(err, CorruptHeaderError::TooFewLeaves { present: 1 });
    }

    #[test]
    fn truncated_header_is_rejected() {
        // a lone valid-looking leaf field, then nothing
        let err = parse(&[0b0000_1010]).unwrap_err();
        assert_eq!(err, CorruptHeaderError::UnexpectedEnd { field: 2 });
    }

    #[test]
    fn parent_beyond_root_is_rejected() {
        // two leaves present but pointing at internal id 12; only one
        // internal node (the root, 11) can exist
        let mut writer = BitWriter::new();
        writer.write_bits(0x1, FIELD_BITS); // leaf 0 -> 12
        writer.write_bits(0x1, FIELD_BITS); // leaf 1 -> 12
        for _ in 0..9 {
            writer.write_bits(0xA, FIELD_BITS);
        }
        writer.pad_to_byte();
        let err = parse(&writer.into_bytes()).unwrap_err();
        assert_eq!(
            err,
            CorruptHeaderError::ParentOutOfRange {
                node: 0,
                parent: 12,
                root: 11
            }
        );
    }

    #[test]
    fn cyclic_internal_parent_is_rejected() {
        // three leaves: two internal nodes (11, root 12); internal field
        // for node 11 claims parent 11, a self-reference
        let mut writer = BitWriter::new();
        writer.write_bits(0x0, FIELD_BITS); // leaf 0 -> 11
        writer.write_bits(0x0, FIELD_BITS); // leaf 1 -> 11
        writer.write_bits(0x1, FIELD_BITS); // leaf 2 -> 12
        for _ in 0..8 {
            writer.write_bits(0xA, FIELD_BITS);
        }
        writer.write_bits(0x0, FIELD_BITS); // node 11 -> 11
        writer.pad_to_byte();
        let err = parse(&writer.into_bytes()).unwrap_err();
        assert_eq!(
            err,
            CorruptHeaderError::ParentNotAfterChild {
                node: 11,
                parent: 11
            }
        );
    }

    #[test]
    fn unbalanced_children_are_rejected() {
        // four leaves -> internals 11, 12, root 13; all four leaves hang
        // off node 11, leaving 12 with a single child
        let mut writer = BitWriter::new();
        for _ in 0..4 {
            writer.write_bits(0x0, FIELD_BITS); // leaves 0-3 -> 11
        }
        for _ in 0..7 {
            writer.write_bits(0xA, FIELD_BITS);
        }
        writer.write_bits(0x1, FIELD_BITS); // node 11 -> 12
        writer.write_bits(0x2, FIELD_BITS); // node 12 -> 13
        writer.pad_to_byte();
        let err = parse(&writer.into_bytes()).unwrap_err();
        assert!(matches!(err, CorruptHeaderError::BadChildCount { .. }));
    }
}
