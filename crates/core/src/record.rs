//! Integer records, digit projection, and reassembly.
//!
//! A record is one base-10 integer held as its minimal decimal digit string:
//! no leading zeros (zero itself is the single digit `0`), and zero is never
//! negative. Because minimized digits cannot begin with `0`, the projection
//! marks negative values by prepending the `0` symbol instead of spending a
//! twelfth alphabet symbol on a minus sign.
//!
//! Storing digits rather than a machine integer keeps records
//! arbitrary-precision: magnitudes beyond any fixed-width type round-trip
//! unchanged.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::Symbol;
use crate::error::{Error, InputFormatError, TruncatedStreamError};

/// One base-10 integer record.
///
/// # Invariants
/// - `digits` is non-empty ASCII digits with no leading zero (except `"0"`)
/// - `negative` is never set when `digits == "0"`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    negative: bool,
    digits: String,
}

impl Record {
    /// Normalize sign and raw digits into a record.
    ///
    /// Leading zeros are stripped; a zero magnitude collapses to `0`
    /// regardless of sign, so `-0` cannot exist.
    fn from_parts(negative: bool, digits: &str) -> Record {
        let minimal = digits.trim_start_matches('0');
        if minimal.is_empty() {
            Record {
                negative: false,
                digits: "0".to_string(),
            }
        } else {
            Record {
                negative,
                digits: minimal.to_string(),
            }
        }
    }

    /// True for values below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True for the integer zero.
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// The minimal decimal digits of the absolute value.
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl FromStr for Record {
    type Err = InputFormatError;

    /// Parse an optionally-signed decimal integer.
    ///
    /// Leading zeros are accepted and stripped (`"007"` is 7, `"-0"` is 0).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            return Err(InputFormatError::MissingDigits);
        }
        if let Some(bad) = body.bytes().position(|b| !b.is_ascii_digit()) {
            let position = s.len() - body.len() + bad;
            return Err(InputFormatError::InvalidCharacter {
                found: s[position..].chars().next().unwrap_or('\u{fffd}'),
                position,
            });
        }
        Ok(Record::from_parts(negative, body))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

impl From<i64> for Record {
    fn from(value: i64) -> Self {
        Record {
            negative: value < 0,
            digits: value.unsigned_abs().to_string(),
        }
    }
}

impl From<i32> for Record {
    fn from(value: i32) -> Self {
        Record::from(i64::from(value))
    }
}

impl From<i128> for Record {
    fn from(value: i128) -> Self {
        Record {
            negative: value < 0,
            digits: value.unsigned_abs().to_string(),
        }
    }
}

/// Flatten records into the alphabet symbol stream (digit projection).
///
/// Each record contributes an optional `0` sign marker, its minimal digits,
/// and a terminating [`Symbol::SEP`].
pub fn project(records: &[Record]) -> Result<Vec<Symbol>, Error> {
    let mut symbols = Vec::new();
    for record in records {
        if record.negative {
            symbols.push(Symbol::digit(0)?);
        }
        for byte in record.digits.bytes() {
            symbols.push(Symbol::digit(byte.wrapping_sub(b'0'))?);
        }
        symbols.push(Symbol::SEP);
    }
    Ok(symbols)
}

/// Rebuild records from a decoded symbol stream (inverse of [`project`]).
///
/// # Errors
/// [`TruncatedStreamError::EmptyGroup`] for two adjacent separators and
/// [`TruncatedStreamError::MissingSeparator`] for trailing digits without a
/// terminating separator.
pub fn reassemble(symbols: &[Symbol]) -> Result<Vec<Record>, Error> {
    let mut records = Vec::new();
    let mut group: Vec<u8> = Vec::new();
    for &symbol in symbols {
        match symbol.digit_value() {
            Some(digit) => group.push(digit),
            None => {
                records.push(group_to_record(&group, records.len())?);
                group.clear();
            }
        }
    }
    if !group.is_empty() {
        return Err(TruncatedStreamError::MissingSeparator {
            digits: group.len(),
        }
        .into());
    }
    Ok(records)
}

/// One digit group between separators becomes one record.
///
/// A group longer than one digit that starts with `0` is a negative value;
/// a lone `0` is the integer zero.
fn group_to_record(group: &[u8], index: usize) -> Result<Record, Error> {
    if group.is_empty() {
        return Err(TruncatedStreamError::EmptyGroup { index }.into());
    }
    let (negative, magnitude) = if group.len() > 1 && group[0] == 0 {
        (true, &group[1..])
    } else {
        (false, group)
    };
    let digits: String = magnitude.iter().map(|&d| char::from(b'0' + d)).collect();
    Ok(Record::from_parts(negative, &digits))
}
