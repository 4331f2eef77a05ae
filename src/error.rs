use std::fmt;

use thiserror::Error;

/// The four bencode value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `i<digits>e`
    Integer,
    /// `<length>:<bytes>`
    String,
    /// `l<values>e`
    List,
    /// `d<key><value>...e`
    Dict,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Dict => "dict",
        };
        f.write_str(name)
    }
}

/// Errors produced while walking a bencoded buffer.
///
/// `TypeMismatch` indicates a caller bug (a typed accessor used without
/// checking the value kind first); every other variant indicates malformed
/// input data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A value claims more bytes than the buffer holds.
    #[error("truncated input: value extends past the end of the buffer")]
    TruncatedInput,

    /// A string length prefix is missing its `:` or is not a digit run.
    #[error("invalid string length prefix")]
    InvalidLengthPrefix,

    /// An integer has an empty or non-decimal digit run, or overflows i64.
    #[error("invalid integer")]
    InvalidInteger,

    /// An integer, list, or dict never closes with `e` inside the buffer.
    #[error("missing 'e' terminator")]
    MissingTerminator,

    /// A typed accessor was called on a value of another kind.
    #[error("expected a {expected} value")]
    TypeMismatch { expected: ValueKind },

    /// A dictionary key is not a well-formed string.
    #[error("dictionary key is not a string")]
    MalformedKey,

    /// A byte that starts no bencode value kind.
    #[error("unexpected byte {0:#04x}")]
    UnexpectedByte(u8),

    /// Container nesting exceeds the recursion limit (max 64 levels).
    #[error("nesting too deep")]
    NestingTooDeep,
}
