//! # Scanner Configuration Module
//!
//! This module centralizes the compile-time constants and the run-time
//! configuration snapshot the scanner operates under. Constants are grouped
//! in [`constants`] with their interdependencies documented; the run-time
//! flags live in [`ScanConfig`].
//!
//! ## Why a Snapshot?
//!
//! The three behavioural flags (`standard_conforming_strings`,
//! `backslash_quote`, `escape_string_warning`) are typically session-wide
//! settings in the embedding system. The scanner copies them once at
//! construction time and never re-reads them mid-scan, so a concurrent
//! settings change can never switch string-literal semantics halfway
//! through a literal.

pub mod constants;

pub use constants::*;

use crate::encoding::Encoding;

/// Policy for backslash-escaped single quotes (`\'`) inside escape strings.
///
/// `SafeEncoding` permits `\'` only when the client encoding is not a
/// client-only multibyte encoding, because in those encodings a multibyte
/// character can end in a byte equal to `\` and smuggle a quote past naive
/// escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackslashQuote {
    Off,
    On,
    SafeEncoding,
}

/// Run-time configuration snapshot taken at scanner construction.
#[derive(Debug, Clone, Copy)]
pub struct ScanConfig {
    /// When `true`, `'...'` literals treat backslash as an ordinary byte
    /// (SQL standard); when `false`, they behave like `E'...'` strings.
    pub standard_conforming_strings: bool,
    /// Governs acceptance of `\'` inside escape strings.
    pub backslash_quote: BackslashQuote,
    /// When `true`, the first escape in a non-`E''` string draws a warning.
    pub escape_string_warning: bool,
    /// Encoding the stored data is in; Unicode escapes above U+007F require
    /// this to be UTF-8.
    pub server_encoding: Encoding,
    /// Encoding of the client connection; consulted by the
    /// [`BackslashQuote::SafeEncoding`] policy.
    pub client_encoding: Encoding,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            standard_conforming_strings: true,
            backslash_quote: BackslashQuote::SafeEncoding,
            escape_string_warning: true,
            server_encoding: Encoding::Utf8,
            client_encoding: Encoding::Utf8,
        }
    }
}

impl ScanConfig {
    /// `true` when `\'` is acceptable under the configured policy.
    pub fn backslash_quote_allowed(&self) -> bool {
        match self.backslash_quote {
            BackslashQuote::On => true,
            BackslashQuote::Off => false,
            BackslashQuote::SafeEncoding => !self.client_encoding.is_client_only(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_standard_conforming() {
        let config = ScanConfig::default();
        assert!(config.standard_conforming_strings);
        assert!(config.escape_string_warning);
        assert_eq!(config.backslash_quote, BackslashQuote::SafeEncoding);
    }

    #[test]
    fn safe_encoding_rejects_client_only_encodings() {
        let config = ScanConfig {
            client_encoding: Encoding::Sjis,
            ..ScanConfig::default()
        };
        assert!(!config.backslash_quote_allowed());

        let config = ScanConfig {
            client_encoding: Encoding::Latin1,
            ..ScanConfig::default()
        };
        assert!(config.backslash_quote_allowed());
    }
}
