//! Property tests for the codec.
//!
//! The round-trip property is the load-bearing one: for any finite record
//! sequence, decoding an encode must reproduce the exact input.

use huffnum_core::alphabet::SymbolCounts;
use huffnum_core::codebook::CodeTable;
use huffnum_core::record::project;
use huffnum_core::tree::HuffmanTree;
use huffnum_core::{decode, encode, Record};

use proptest::prelude::*;

prop_compose! {
    /// Arbitrary machine-word records, zero and negatives included.
    fn arb_i64_records()(values in prop::collection::vec(any::<i64>(), 0..200)) -> Vec<Record> {
        values.into_iter().map(Record::from).collect()
    }
}

prop_compose! {
    /// Arbitrary-precision records as raw decimal strings, beyond any
    /// fixed-width integer type ("-0" included on purpose).
    fn arb_big_records()(
        texts in prop::collection::vec("-?(0|[1-9][0-9]{0,50})", 0..80)
    ) -> Vec<Record> {
        texts.iter().map(|t| t.parse().expect("strategy emits valid records")).collect()
    }
}

proptest! {
    /// Property: decode(encode(xs)) == xs for machine-word inputs.
    #[test]
    fn prop_roundtrip_i64(input in arb_i64_records()) {
        let bytes = encode(&input).expect("encode failed");
        prop_assert_eq!(decode(&bytes).expect("decode failed"), input);
    }

    /// Property: decode(encode(xs)) == xs for arbitrary-precision inputs.
    #[test]
    fn prop_roundtrip_big(input in arb_big_records()) {
        let bytes = encode(&input).expect("encode failed");
        prop_assert_eq!(decode(&bytes).expect("decode failed"), input);
    }

    /// Property: encoding is deterministic, byte for byte.
    #[test]
    fn prop_deterministic(input in arb_i64_records()) {
        prop_assert_eq!(
            encode(&input).expect("encode failed"),
            encode(&input).expect("encode failed")
        );
    }

    /// Property: with two or more distinct symbols, no code prefixes another.
    #[test]
    fn prop_prefix_free(input in arb_i64_records()) {
        let symbols = project(&input).expect("projection failed");
        let counts = SymbolCounts::tally(&symbols);
        prop_assume!(counts.distinct() >= 2);

        let table = CodeTable::from_tree(&HuffmanTree::from_counts(&counts));
        prop_assert!(table.is_prefix_free());
    }

    /// Property: the decoder never panics on arbitrary bytes; it either
    /// decodes something or reports a structured error.
    #[test]
    fn prop_decode_arbitrary_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = decode(&bytes);
    }
}
