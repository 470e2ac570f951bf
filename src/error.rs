//! # Scanner Diagnostics
//!
//! Hard errors abort the scan and carry the byte offset of the offending
//! construct so the embedding system can render a precise error cursor.
//! Warnings are recoverable; the scanner collects them on the instance and
//! the caller drains them after the scan.
//!
//! ## Error Positions
//!
//! Positions are byte offsets into the source. Use
//! [`Scanner::error_position`](crate::Scanner::error_position) to convert
//! one into a 1-based character position under the configured server
//! encoding.

use std::error::Error;
use std::fmt;

/// Classification of every hard scan failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnterminatedComment,
    UnterminatedBitString,
    UnterminatedHexString,
    UnterminatedString,
    UnterminatedDollarString,
    UnterminatedIdentifier,
    ZeroLengthIdentifier,
    InvalidSurrogatePair,
    /// A truncated `\u` / `\U` escape.
    InvalidUnicodeEscape,
    /// A malformed or out-of-range Unicode escape value.
    InvalidUnicodeEscapeValue,
    /// A bad `UESCAPE` quoting character.
    InvalidUnicodeEscapeChar,
    /// Unicode escape above U+007F with a non-UTF-8 server encoding.
    UnicodeEscapeNotUtf8,
    /// `\'` rejected by the `backslash_quote` policy.
    UnsafeBackslashQuote,
    /// `U&'...'` while `standard_conforming_strings` is off.
    UnsafeUnicodeString,
    OperatorTooLong,
    /// Internal; the hex decoders only accept validated digits.
    InvalidHexDigit,
    /// Literal contents failed multibyte verification.
    InvalidByteSequence,
}

impl ErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::UnterminatedComment => "unterminated /* comment",
            ErrorKind::UnterminatedBitString => "unterminated bit string literal",
            ErrorKind::UnterminatedHexString => "unterminated hexadecimal string literal",
            ErrorKind::UnterminatedString => "unterminated quoted string",
            ErrorKind::UnterminatedDollarString => "unterminated dollar-quoted string",
            ErrorKind::UnterminatedIdentifier => "unterminated quoted identifier",
            ErrorKind::ZeroLengthIdentifier => "zero-length delimited identifier",
            ErrorKind::InvalidSurrogatePair => "invalid Unicode surrogate pair",
            ErrorKind::InvalidUnicodeEscape => "invalid Unicode escape",
            ErrorKind::InvalidUnicodeEscapeValue => "invalid Unicode escape value",
            ErrorKind::InvalidUnicodeEscapeChar => "invalid Unicode escape character",
            ErrorKind::UnicodeEscapeNotUtf8 => {
                "Unicode escape values cannot be used for code point values above 007F when the server encoding is not UTF8"
            }
            ErrorKind::UnsafeBackslashQuote => "unsafe use of \\' in a string literal",
            ErrorKind::UnsafeUnicodeString => {
                "unsafe use of string constant with Unicode escapes"
            }
            ErrorKind::OperatorTooLong => "operator too long",
            ErrorKind::InvalidHexDigit => "invalid hexadecimal digit",
            ErrorKind::InvalidByteSequence => "invalid byte sequence for encoding",
        }
    }

    pub fn hint(self) -> Option<&'static str> {
        match self {
            ErrorKind::InvalidUnicodeEscape => {
                Some("Unicode escapes must be \\uXXXX or \\UXXXXXXXX.")
            }
            ErrorKind::UnsafeBackslashQuote => Some(
                "Use '' to write quotes in strings. \\' is insecure in client-only encodings.",
            ),
            ErrorKind::UnsafeUnicodeString => Some(
                "String constants with Unicode escapes cannot be used when standard_conforming_strings is off.",
            ),
            _ => None,
        }
    }
}

/// A hard scan failure at a byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub kind: ErrorKind,
    /// Byte offset of the offending construct.
    pub position: usize,
}

impl ScanError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.kind.hint()
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind.message(), self.position)
    }
}

impl Error for ScanError {}

/// Classification of recoverable diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// `\'` in a non-`E''` string.
    NonstandardQuoteEscape,
    /// `\\` in a non-`E''` string.
    NonstandardBackslashEscape,
    /// Any other backslash escape in a non-`E''` string.
    NonstandardEscape,
    /// An identifier exceeded `NAMEDATALEN - 1` bytes and was cut down.
    IdentifierTruncated,
}

impl WarningKind {
    pub fn hint(self) -> Option<&'static str> {
        match self {
            WarningKind::NonstandardQuoteEscape => Some(
                "Use '' to write quotes in strings, or use the escape string syntax (E'...').",
            ),
            WarningKind::NonstandardBackslashEscape => {
                Some("Use the escape string syntax for backslashes, e.g., E'\\\\'.")
            }
            WarningKind::NonstandardEscape => {
                Some("Use the escape string syntax for escapes, e.g., E'\\r\\n'.")
            }
            WarningKind::IdentifierTruncated => None,
        }
    }
}

/// A recoverable diagnostic collected during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub kind: WarningKind,
    pub message: String,
    /// Byte offset of the construct that drew the warning.
    pub position: usize,
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.message, self.position)
    }
}
