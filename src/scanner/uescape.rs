//! UESCAPE post-processing for `U&'...'` and `U&"..."` literals.
//!
//! The body of a Unicode literal is collected verbatim, then rescanned
//! here: escape-prefixed 4-digit (`\XXXX`) and `+`6-digit (`\+XXXXXX`)
//! hex sequences are replaced by the UTF-8 encoding of their codepoint,
//! a doubled escape character collapses to itself, and UTF-16 surrogate
//! halves written as two consecutive escapes pair up. Everything else is
//! copied through.
//!
//! Error cursors point into the original source: the reported offset is
//! the literal's start plus the three `U&'` prefix bytes plus the offset
//! of the offending escape within the body.

use crate::charclass::is_space;
use crate::config::{
    is_utf16_surrogate_first, is_utf16_surrogate_second, surrogate_pair_combine,
    surrogate_pair_first_part, MAX_CODEPOINT,
};
use crate::encoding::{codepoint_to_utf8, utf8_seq_len, verify_mbstr, Encoding};
use crate::error::{ErrorKind, ScanError};

use super::escape::hexval;

/// Width of the `U&'` / `U&"` opener preceding the collected body.
const PREFIX_BYTES: usize = 3;

/// A legal UESCAPE quoting character: anything but hex digits, `+`,
/// quotes, and whitespace.
pub fn valid_uescape_char(c: u8) -> bool {
    !(c.is_ascii_hexdigit() || c == b'+' || c == b'\'' || c == b'"' || is_space(c))
}

/// Rewrites `body`, substituting `esc`-prefixed escapes, and verifies the
/// result under the server encoding. `base` is the source offset of the
/// literal's opening `U`.
pub fn decode_literal(
    body: &[u8],
    esc: u8,
    server_encoding: Encoding,
    base: usize,
) -> Result<Vec<u8>, ScanError> {
    let cursor = |i: usize| base + PREFIX_BYTES + i;
    let mut out = Vec::with_capacity(body.len());
    let mut pair: Option<u32> = None;
    let mut i = 0;

    while i < body.len() {
        if body[i] != esc {
            if pair.is_some() {
                return Err(ScanError::new(ErrorKind::InvalidSurrogatePair, cursor(i)));
            }
            out.push(body[i]);
            i += 1;
            continue;
        }

        if body.get(i + 1) == Some(&esc) {
            if pair.is_some() {
                return Err(ScanError::new(ErrorKind::InvalidSurrogatePair, cursor(i)));
            }
            out.push(esc);
            i += 2;
            continue;
        }

        let (c, width) = if has_hex(body, i + 1, 4) {
            (read_hex(body, i + 1, 4, cursor(i))?, 5)
        } else if body.get(i + 1) == Some(&b'+') && has_hex(body, i + 2, 6) {
            (read_hex(body, i + 2, 6, cursor(i))?, 8)
        } else {
            return Err(ScanError::new(
                ErrorKind::InvalidUnicodeEscapeValue,
                cursor(i),
            ));
        };

        let c = if let Some(first_part) = pair.take() {
            if !is_utf16_surrogate_second(c) {
                return Err(ScanError::new(ErrorKind::InvalidSurrogatePair, cursor(i)));
            }
            surrogate_pair_combine(first_part, c)
        } else if is_utf16_surrogate_first(c) {
            pair = Some(surrogate_pair_first_part(c));
            i += width;
            continue;
        } else if is_utf16_surrogate_second(c) {
            return Err(ScanError::new(ErrorKind::InvalidSurrogatePair, cursor(i)));
        } else {
            c
        };

        if c == 0 || c > MAX_CODEPOINT {
            return Err(ScanError::new(
                ErrorKind::InvalidUnicodeEscapeValue,
                cursor(i),
            ));
        }
        if c > 0x7F && server_encoding != Encoding::Utf8 {
            return Err(ScanError::new(ErrorKind::UnicodeEscapeNotUtf8, cursor(i)));
        }

        let mut buf = [0u8; 4];
        codepoint_to_utf8(c, &mut buf);
        out.extend_from_slice(&buf[..utf8_seq_len(buf[0])]);
        i += width;
    }

    if pair.is_some() {
        return Err(ScanError::new(
            ErrorKind::InvalidSurrogatePair,
            cursor(body.len()),
        ));
    }

    verify_mbstr(server_encoding, &out)
        .map_err(|_| ScanError::new(ErrorKind::InvalidByteSequence, base))?;
    Ok(out)
}

fn has_hex(body: &[u8], at: usize, n: usize) -> bool {
    body.len() >= at + n && body[at..at + n].iter().all(|b| b.is_ascii_hexdigit())
}

fn read_hex(body: &[u8], at: usize, n: usize, cursor: usize) -> Result<u32, ScanError> {
    let mut value: u32 = 0;
    for &d in &body[at..at + n] {
        value = (value << 4) | hexval(d, cursor)?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &[u8], esc: u8) -> Result<Vec<u8>, ScanError> {
        decode_literal(body, esc, Encoding::Utf8, 0)
    }

    #[test]
    fn passthrough_without_escapes() {
        assert_eq!(decode(b"data", b'\\').unwrap(), b"data".to_vec());
        assert_eq!(decode(b"", b'\\').unwrap(), b"".to_vec());
    }

    #[test]
    fn four_and_six_digit_forms() {
        assert_eq!(decode(br"d\0061t\+000061", b'\\').unwrap(), b"data".to_vec());
        assert_eq!(decode(br"\0024", b'\\').unwrap(), b"$".to_vec());
        assert_eq!(decode(br"\+01D11E", b'\\').unwrap(), "𝄞".as_bytes().to_vec());
    }

    #[test]
    fn doubled_escape_collapses() {
        assert_eq!(decode(br"a\\b", b'\\').unwrap(), br"a\b".to_vec());
        assert_eq!(decode(b"a!!b", b'!').unwrap(), b"a!b".to_vec());
    }

    #[test]
    fn custom_escape_character() {
        assert_eq!(decode(b"d!0061ta", b'!').unwrap(), b"data".to_vec());
        // Backslash is ordinary text under a custom escape.
        assert_eq!(decode(br"a\b", b'!').unwrap(), br"a\b".to_vec());
    }

    #[test]
    fn surrogate_halves_pair_up() {
        assert_eq!(
            decode(br"\D834\DD1E", b'\\').unwrap(),
            "𝄞".as_bytes().to_vec()
        );
    }

    #[test]
    fn lone_surrogates_are_rejected() {
        let err = decode(br"\D834", b'\\').unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSurrogatePair);
        let err = decode(br"\D834x", b'\\').unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSurrogatePair);
        let err = decode(br"\DD1E", b'\\').unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSurrogatePair);
    }

    #[test]
    fn malformed_escape_positions_account_for_prefix() {
        let err = decode_literal(br"ab\00ZZ", b'\\', Encoding::Utf8, 10).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidUnicodeEscapeValue);
        // base 10 + "U&'" prefix + 2 body bytes
        assert_eq!(err.position, 15);
    }

    #[test]
    fn codepoint_zero_and_out_of_range_rejected() {
        let err = decode(br"\0000", b'\\').unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidUnicodeEscapeValue);
        let err = decode(br"\+110000", b'\\').unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidUnicodeEscapeValue);
    }

    #[test]
    fn non_utf8_server_encoding_rejects_high_codepoints() {
        let err = decode_literal(br"\00e9", b'\\', Encoding::Latin1, 0).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnicodeEscapeNotUtf8);
        // ASCII escapes stay fine.
        assert_eq!(
            decode_literal(br"\0041", b'\\', Encoding::Latin1, 0).unwrap(),
            b"A".to_vec()
        );
    }

    #[test]
    fn uescape_char_validation() {
        assert!(valid_uescape_char(b'!'));
        assert!(valid_uescape_char(b'*'));
        assert!(!valid_uescape_char(b'a'));
        assert!(!valid_uescape_char(b'5'));
        assert!(!valid_uescape_char(b'+'));
        assert!(!valid_uescape_char(b'\''));
        assert!(!valid_uescape_char(b'"'));
        assert!(!valid_uescape_char(b' '));
    }
}
