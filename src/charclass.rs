//! Byte classification predicates shared by the scanner.
//!
//! These mirror the character classes of the SQL lexical grammar. They are
//! byte-oriented on purpose: identifiers admit any byte with the high bit
//! set, so multibyte characters pass through without the scanner ever
//! decoding them.

/// SQL whitespace: space, tab, newline, carriage return, form feed.
#[inline]
pub const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
}

/// Horizontal whitespace, the subset that cannot terminate a `--` comment.
#[inline]
pub const fn is_horiz_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\x0c')
}

#[inline]
pub const fn is_newline(b: u8) -> bool {
    matches!(b, b'\n' | b'\r')
}

#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub const fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

#[inline]
pub const fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

/// First byte of an identifier: letters, underscore, any high-bit byte.
#[inline]
pub const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

/// Subsequent identifier bytes additionally admit digits and `$`.
#[inline]
pub const fn is_ident_cont(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit() || b == b'$'
}

/// First byte of a dollar-quote tag; like [`is_ident_start`] (digits and
/// `$` are excluded so `$1` stays a parameter).
#[inline]
pub const fn is_dolq_start(b: u8) -> bool {
    is_ident_start(b)
}

/// Continuation byte of a dollar-quote tag; `$` is excluded so the tag
/// terminator is unambiguous.
#[inline]
pub const fn is_dolq_cont(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

/// Bytes that can appear in a user-definable operator.
#[inline]
pub const fn is_op_char(b: u8) -> bool {
    matches!(
        b,
        b'~' | b'!'
            | b'@'
            | b'#'
            | b'^'
            | b'&'
            | b'|'
            | b'`'
            | b'?'
            | b'+'
            | b'-'
            | b'*'
            | b'/'
            | b'%'
            | b'<'
            | b'>'
            | b'='
    )
}

/// Single-byte tokens that stand for themselves.
#[inline]
pub const fn is_self_char(b: u8) -> bool {
    matches!(
        b,
        b',' | b'('
            | b')'
            | b'['
            | b']'
            | b'.'
            | b';'
            | b':'
            | b'+'
            | b'-'
            | b'*'
            | b'/'
            | b'%'
            | b'^'
            | b'<'
            | b'>'
            | b'='
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_start_accepts_high_bit_bytes() {
        assert!(is_ident_start(b'a'));
        assert!(is_ident_start(b'_'));
        assert!(is_ident_start(0x80));
        assert!(is_ident_start(0xff));
        assert!(!is_ident_start(b'0'));
        assert!(!is_ident_start(b'$'));
    }

    #[test]
    fn ident_cont_accepts_digits_and_dollar() {
        assert!(is_ident_cont(b'0'));
        assert!(is_ident_cont(b'$'));
        assert!(!is_ident_cont(b' '));
    }

    #[test]
    fn dollar_tag_excludes_dollar_and_digit_starts() {
        assert!(is_dolq_start(b'a'));
        assert!(!is_dolq_start(b'1'));
        assert!(!is_dolq_start(b'$'));
        assert!(is_dolq_cont(b'1'));
        assert!(!is_dolq_cont(b'$'));
    }

    #[test]
    fn operator_and_self_sets_overlap_on_sql_operators() {
        for b in [b'+', b'-', b'*', b'/', b'%', b'^', b'<', b'>', b'='] {
            assert!(is_op_char(b));
            assert!(is_self_char(b));
        }
        for b in [b'~', b'!', b'@', b'#', b'&', b'|', b'`', b'?'] {
            assert!(is_op_char(b));
            assert!(!is_self_char(b));
        }
        for b in [b',', b'(', b')', b'[', b']', b'.', b';', b':'] {
            assert!(is_self_char(b));
            assert!(!is_op_char(b));
        }
    }
}
