//! Error types for the huffnum codec.
//!
//! All operations return structured errors rather than panicking.
//! Every failure is fatal to the single encode/decode call: there is no
//! retry or partial recovery, and no partially-decoded output is ever
//! returned.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a failure domain:
/// - Input format: record text that is not a valid decimal integer
/// - Corrupt header: an unparseable or inconsistent tree header
/// - Truncated stream: a body that ends or desynchronizes mid-record
/// - Unsupported alphabet: invariant guard for out-of-range symbols
/// - I/O: file system operations in callers
#[derive(Debug, Error)]
pub enum Error {
    /// Record text is not a valid optionally-signed decimal integer
    #[error("input format error: {0}")]
    InputFormat(#[from] InputFormatError),

    /// Tree header cannot be parsed into a valid tree
    #[error("corrupt header: {0}")]
    CorruptHeader(#[from] CorruptHeaderError),

    /// Body bits end or lose symbol alignment before the records do
    #[error("truncated stream: {0}")]
    TruncatedStream(#[from] TruncatedStreamError),

    /// A symbol outside the 11-symbol alphabet was demanded
    #[error("unsupported alphabet: {0}")]
    UnsupportedAlphabet(#[from] UnsupportedAlphabetError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Record parsing errors (encode-side input validation).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputFormatError {
    /// Record is empty, or a bare minus sign with no digits
    #[error("record has no digits")]
    MissingDigits,

    /// Record contains a character outside `-` and the ASCII digits
    #[error("invalid character {found:?} at byte {position}")]
    InvalidCharacter { found: char, position: usize },
}

/// Tree header errors (decode-side).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorruptHeaderError {
    /// Stream ends before the header does
    #[error("header ends before field {field}")]
    UnexpectedEnd { field: u8 },

    /// A field holds one of the reserved 4-bit values
    #[error("reserved field value {value:#x} for node {node}")]
    ReservedField { node: u8, value: u8 },

    /// Single-leaf tag followed by an out-of-range symbol index
    #[error("single-leaf tag carries invalid symbol index {index}")]
    InvalidSymbolIndex { index: u8 },

    /// General form requires at least two present leaves
    #[error("only {present} leaf(s) present in general-form header")]
    TooFewLeaves { present: u8 },

    /// A parent field references a node beyond the reconstructed root
    #[error("node {node} references parent {parent} beyond root {root}")]
    ParentOutOfRange { node: u8, parent: u8, root: u8 },

    /// An internal node's parent id is not strictly greater than its own,
    /// which would make the parent chain cyclic
    #[error("internal node {node} references non-ancestor parent {parent}")]
    ParentNotAfterChild { node: u8, parent: u8 },

    /// An internal node does not have exactly two registered children
    #[error("internal node {node} has {children} child(ren), expected 2")]
    BadChildCount { node: u8, children: u8 },

    /// Header extends into the region the pad-length field claims as filler
    #[error("header overruns into padding")]
    OverlapsPadding,

    /// An empty tree admits no body bits at all
    #[error("empty tree followed by {bits} body bit(s)")]
    BodyAfterEmptyTree { bits: usize },
}

/// Body decoding errors (decode-side).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TruncatedStreamError {
    /// Bit walk ran out of body bits before reaching a leaf
    #[error("bit walk exhausted input mid-symbol at bit {position}")]
    MidSymbol { position: usize },

    /// A body bit selects no code (single-leaf trees only accept `0`)
    #[error("body bit at {position} matches no code")]
    InvalidCodeBit { position: usize },

    /// Two adjacent separators: a record decoded to zero digits
    #[error("empty digit group at record {index}")]
    EmptyGroup { index: usize },

    /// The final record is not terminated by a separator
    #[error("final record missing its separator ({digits} trailing digit(s))")]
    MissingSeparator { digits: usize },
}

/// Alphabet invariant guard; should be unreachable through the public API.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnsupportedAlphabetError {
    /// Digit value outside 0-9
    #[error("digit value {0} outside the 0-9 range")]
    DigitOutOfRange(u8),

    /// Symbol index outside the 11-symbol alphabet
    #[error("symbol index {0} outside the 11-symbol alphabet")]
    IndexOutOfRange(u8),
}

/// Bit-level I/O errors, mapped into the domains above at the codec layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitIoError {
    /// Attempted to read past the end of the buffer
    #[error("unexpected end of bit stream: requested {requested} bit(s) at position {position}, {available} available")]
    UnexpectedEof {
        position: usize,
        requested: usize,
        available: usize,
    },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
