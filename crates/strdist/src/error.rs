//! Errors raised while building cost models or validating input sequences.

use crate::costs::ALPHABET_SIZE;

/// The things that can go wrong before a distance is computed.
///
/// Once both sequences are validated and the cost tables are built, the
/// distance computation itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrDistError {
    /// A symbol outside `[0, ALPHABET_SIZE)` was given to the strict path or
    /// to a per-symbol cost setter.
    SymbolOutOfRange {
        /// The offending symbol, as a Unicode scalar or byte value.
        symbol: u32,
        /// The byte offset of the symbol in its sequence.
        position: usize,
    },
    /// A cost table of the wrong size was handed to a constructor.
    TableSize {
        /// Which table was malformed.
        table: &'static str,
        /// The number of entries the table must have.
        expected: usize,
        /// The number of entries it had.
        actual: usize,
    },
    /// A cost configuration could not be read or parsed.
    Config(String),
}

impl std::fmt::Display for StrDistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SymbolOutOfRange { symbol, position } => write!(
                f,
                "symbol {symbol:#x} at position {position} is outside the alphabet [0, {ALPHABET_SIZE})"
            ),
            Self::TableSize {
                table,
                expected,
                actual,
            } => write!(f, "{table} table has {actual} entries, expected {expected}"),
            Self::Config(msg) => write!(f, "invalid cost configuration: {msg}"),
        }
    }
}

impl std::error::Error for StrDistError {}

impl From<serde_json::Error> for StrDistError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<std::io::Error> for StrDistError {
    fn from(e: std::io::Error) -> Self {
        Self::Config(e.to_string())
    }
}
