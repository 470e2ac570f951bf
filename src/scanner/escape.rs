//! Backslash escape decoding for `E'...'` strings.
//!
//! Covers the C-style single-character escapes, octal and hex byte
//! escapes, and `\uXXXX` / `\UXXXXXXXX` Unicode escapes with UTF-16
//! surrogate pairing. Escapes that can synthesize a non-ASCII or NUL byte
//! mark the literal for multibyte verification at termination.

use crate::config::{
    is_utf16_surrogate_first, is_utf16_surrogate_second, surrogate_pair_combine,
    surrogate_pair_first_part, MAX_CODEPOINT,
};
use crate::encoding::{codepoint_to_utf8, utf8_seq_len, Encoding};
use crate::error::{ErrorKind, ScanError, WarningKind};

use super::Scanner;

/// Value of a validated hex digit. The fallback arm exists for the type
/// system; callers check `is_ascii_hexdigit` first.
pub(crate) fn hexval(b: u8, at: usize) -> Result<u32, ScanError> {
    match b {
        b'0'..=b'9' => Ok((b - b'0') as u32),
        b'a'..=b'f' => Ok((b - b'a' + 10) as u32),
        b'A'..=b'F' => Ok((b - b'A' + 10) as u32),
        _ => Err(ScanError::new(ErrorKind::InvalidHexDigit, at)),
    }
}

impl Scanner<'_> {
    /// Decodes one backslash escape at the current position, appending the
    /// result to the literal buffer. A bare trailing backslash is kept
    /// verbatim; the enclosing loop then reports the unterminated string.
    pub(super) fn decode_backslash_escape(&mut self) -> Result<(), ScanError> {
        let esc_start = self.pos;
        let Some(c) = self.byte(self.pos + 1) else {
            self.literal.append_byte(b'\\');
            self.pos += 1;
            return Ok(());
        };

        match c {
            b'b' | b'f' | b'n' | b'r' | b't' => {
                self.check_string_escape_warning(c);
                let decoded = match c {
                    b'b' => 0x08,
                    b'f' => 0x0c,
                    b'n' => b'\n',
                    b'r' => b'\r',
                    _ => b'\t',
                };
                self.literal.append_byte(decoded);
                self.pos += 2;
            }
            b'\'' => {
                if !self.config.backslash_quote_allowed() {
                    return Err(self.err(ErrorKind::UnsafeBackslashQuote, esc_start));
                }
                self.check_string_escape_warning(c);
                self.literal.append_byte(b'\'');
                self.pos += 2;
            }
            b'0'..=b'7' => {
                let mut value: u32 = 0;
                let mut n = 0;
                while n < 3 {
                    match self.byte(self.pos + 1 + n) {
                        Some(d @ b'0'..=b'7') => value = (value << 3) | (d - b'0') as u32,
                        _ => break,
                    }
                    n += 1;
                }
                self.check_escape_warning();
                self.append_escaped_byte(value as u8);
                self.pos += 1 + n;
            }
            b'x' if self.byte(self.pos + 2).is_some_and(|b| b.is_ascii_hexdigit()) => {
                let mut value: u32 = 0;
                let mut n = 0;
                while n < 2 {
                    match self.byte(self.pos + 2 + n) {
                        Some(d) if d.is_ascii_hexdigit() => {
                            value = (value << 4) | hexval(d, self.pos + 2 + n)?;
                        }
                        _ => break,
                    }
                    n += 1;
                }
                self.check_escape_warning();
                self.append_escaped_byte(value as u8);
                self.pos += 2 + n;
            }
            b'u' => self.decode_unicode_escape(4)?,
            b'U' => self.decode_unicode_escape(8)?,
            _ => {
                // Everything else is the escaped character itself.
                self.check_string_escape_warning(c);
                self.append_escaped_byte(c);
                self.pos += 2;
            }
        }
        Ok(())
    }

    fn append_escaped_byte(&mut self, b: u8) {
        if b == 0 || b >= 0x80 {
            self.saw_non_ascii = true;
        }
        self.literal.append_byte(b);
    }

    /// `\uXXXX` / `\UXXXXXXXX` at the current position. A high surrogate
    /// half demands an immediately following low half.
    fn decode_unicode_escape(&mut self, ndigits: usize) -> Result<(), ScanError> {
        let esc_start = self.pos;
        let c = self.read_unicode_escape(ndigits)?;
        if is_utf16_surrogate_first(c) {
            self.pair_surrogate(c, esc_start)
        } else if is_utf16_surrogate_second(c) {
            Err(self.err(ErrorKind::InvalidSurrogatePair, esc_start))
        } else {
            self.add_unicode(c, esc_start)
        }
    }

    /// Reads the digits of a `\u`/`\U` escape whose backslash is at the
    /// current position, advancing past it.
    fn read_unicode_escape(&mut self, ndigits: usize) -> Result<u32, ScanError> {
        let esc_start = self.pos;
        let mut c: u32 = 0;
        for i in 0..ndigits {
            match self.byte(self.pos + 2 + i) {
                Some(d) if d.is_ascii_hexdigit() => {
                    c = (c << 4) | hexval(d, self.pos + 2 + i)?;
                }
                _ => return Err(self.err(ErrorKind::InvalidUnicodeEscape, esc_start)),
            }
        }
        self.check_escape_warning();
        self.pos += 2 + ndigits;
        Ok(c)
    }

    /// After a high surrogate, the very next lexeme must be the matching
    /// low half written as another Unicode escape.
    fn pair_surrogate(&mut self, first: u32, pair_start: usize) -> Result<(), ScanError> {
        let first_part = surrogate_pair_first_part(first);
        let second_start = self.pos;
        if self.byte(self.pos) != Some(b'\\') {
            return Err(self.err(ErrorKind::InvalidSurrogatePair, second_start));
        }
        let ndigits = match self.byte(self.pos + 1) {
            Some(b'u') => 4,
            Some(b'U') => 8,
            _ => return Err(self.err(ErrorKind::InvalidSurrogatePair, second_start)),
        };
        let second = self.read_unicode_escape(ndigits)?;
        if !is_utf16_surrogate_second(second) {
            return Err(self.err(ErrorKind::InvalidSurrogatePair, second_start));
        }
        self.add_unicode(surrogate_pair_combine(first_part, second), pair_start)
    }

    /// Validates a decoded codepoint and appends its UTF-8 encoding.
    fn add_unicode(&mut self, c: u32, at: usize) -> Result<(), ScanError> {
        if c == 0 || c > MAX_CODEPOINT {
            return Err(self.err(ErrorKind::InvalidUnicodeEscapeValue, at));
        }
        if c > 0x7F {
            if self.config.server_encoding != Encoding::Utf8 {
                return Err(self.err(ErrorKind::UnicodeEscapeNotUtf8, at));
            }
            self.saw_non_ascii = true;
        }
        let mut buf = [0u8; 4];
        codepoint_to_utf8(c, &mut buf);
        self.literal.append(&buf[..utf8_seq_len(buf[0])]);
        Ok(())
    }

    /// Once per literal, `\'` and `\\` draw targeted warnings and every
    /// other escape a generic one, when the string was written without the
    /// explicit `E` prefix.
    pub(super) fn check_string_escape_warning(&mut self, c: u8) {
        match c {
            b'\'' => {
                if self.warn_on_first_escape && self.config.escape_string_warning {
                    self.warn(
                        WarningKind::NonstandardQuoteEscape,
                        "nonstandard use of \\' in a string literal".to_string(),
                        self.token_start,
                    );
                }
                self.warn_on_first_escape = false;
            }
            b'\\' => {
                if self.warn_on_first_escape && self.config.escape_string_warning {
                    self.warn(
                        WarningKind::NonstandardBackslashEscape,
                        "nonstandard use of \\\\ in a string literal".to_string(),
                        self.token_start,
                    );
                }
                self.warn_on_first_escape = false;
            }
            _ => self.check_escape_warning(),
        }
    }

    pub(super) fn check_escape_warning(&mut self) {
        if self.warn_on_first_escape && self.config.escape_string_warning {
            self.warn(
                WarningKind::NonstandardEscape,
                "nonstandard use of escape in a string literal".to_string(),
                self.token_start,
            );
        }
        self.warn_on_first_escape = false;
    }
}
