//! # turscan - SQL Lexical Scanner
//!
//! turscan is a single-pass scanner for a PostgreSQL-flavoured SQL
//! dialect. It converts a source string into a stream of tokens (keywords,
//! identifiers, numeric constants, the full family of string literals,
//! operators, parameter references, punctuation), each carrying the byte
//! offset of its first byte so a downstream grammar can point an error
//! cursor at the exact offending character.
//!
//! ## Design Goals
//!
//! 1. **No backtrack**: linear-time scanning; every byte is touched a
//!    bounded number of times, with explicit push-back where a rule must
//!    over-read to disambiguate
//! 2. **Precise locations**: byte offsets on every token and every
//!    diagnostic, convertible to character positions for error cursors
//! 3. **Faithful literal semantics**: escape strings with octal, hex, and
//!    Unicode escapes (including UTF-16 surrogate pairs), dollar quoting,
//!    `U&` literals with `UESCAPE`, cross-line literal continuation
//! 4. **Snapshot configuration**: string-semantics flags are captured at
//!    construction, so a scan is immune to concurrent settings changes
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │        Convenience API (scan)            │
//! ├──────────────────────────────────────────┤
//! │        Scanner state machine             │
//! ├────────────┬──────────────┬──────────────┤
//! │  Escape    │   UESCAPE    │   Literal    │
//! │  decoders  │post-processor│  accumulator │
//! ├────────────┴──────────────┴──────────────┤
//! │ Keyword table │ Charclass │ Encoding fns │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Usage Example
//!
//! ```ignore
//! use turscan::{scan, ScanConfig, Token};
//!
//! let tokens = scan("SELECT id FROM users WHERE active", ScanConfig::default())?;
//! for scanned in &tokens {
//!     println!("{:?} at byte {}", scanned.token, scanned.location);
//! }
//! ```
//!
//! ## Error Handling
//!
//! Hard errors (unterminated literals, malformed Unicode escapes, unsafe
//! `\'` uses, over-long operators) abort the scan with a
//! [`ScanError`] carrying a classification and a byte offset. Recoverable
//! diagnostics (nonstandard escapes, identifier truncation) accumulate on
//! the scanner and are also emitted through `tracing`.
//!
//! ## Module Overview
//!
//! - [`scanner`]: the state machine, escape decoders, UESCAPE rewriter
//! - [`token`]: token payloads and locations
//! - [`keyword`]: perfect-hash keyword table with reservation categories
//! - [`charclass`]: byte classification predicates
//! - [`encoding`]: encoding identifiers and multibyte helpers
//! - [`ident`]: identifier case folding and truncation
//! - [`error`]: hard-error taxonomy and warning kinds
//! - [`config`]: configuration snapshot and scanner constants

pub mod charclass;
pub mod config;
pub mod encoding;
pub mod error;
pub mod ident;
pub mod keyword;
pub mod scanner;
pub mod token;

pub use config::{BackslashQuote, ScanConfig, NAMEDATALEN};
pub use encoding::Encoding;
pub use error::{ErrorKind, ScanError, ScanWarning, WarningKind};
pub use keyword::{Keyword, KeywordCategory};
pub use scanner::Scanner;
pub use token::{ScannedToken, Token};

use eyre::WrapErr;

/// Scans `source` to completion, returning every token including the
/// terminating [`Token::Eof`].
///
/// For incremental scanning, warning collection, or error-cursor
/// conversion, drive a [`Scanner`] directly.
pub fn scan(source: &str, config: ScanConfig) -> eyre::Result<Vec<ScannedToken>> {
    let mut scanner = Scanner::new(source, config);
    let mut tokens = Vec::new();
    loop {
        let scanned = scanner
            .next_token()
            .wrap_err("SQL lexical analysis failed")?;
        let at_eof = scanned.token.is_eof();
        tokens.push(scanned);
        if at_eof {
            break;
        }
    }
    Ok(tokens)
}
