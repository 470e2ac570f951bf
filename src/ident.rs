//! # Identifier Folding and Truncation
//!
//! Unquoted identifiers fold to lowercase before keyword lookup and
//! emission; identifiers of every kind are cut down to
//! [`MAX_IDENTIFIER_BYTES`](crate::config::MAX_IDENTIFIER_BYTES) at a
//! character boundary. Folding is ASCII-only: bytes with the high bit set
//! belong to multibyte characters and pass through untouched, which keeps
//! the fold independent of any locale.

use crate::config::MAX_IDENTIFIER_BYTES;

/// Folds `ident` to lowercase and truncates it, returning the owned
/// payload and whether truncation occurred.
pub fn downcase_truncate_identifier(ident: &str) -> (String, bool) {
    let mut folded: String = ident
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect();
    let truncated = truncate_identifier(&mut folded);
    (folded, truncated)
}

/// Truncates `ident` in place to the identifier byte limit, backing up to
/// a character boundary. Returns whether anything was removed.
pub fn truncate_identifier(ident: &mut String) -> bool {
    if ident.len() <= MAX_IDENTIFIER_BYTES {
        return false;
    }
    let mut end = MAX_IDENTIFIER_BYTES;
    while !ident.is_char_boundary(end) {
        end -= 1;
    }
    ident.truncate(end);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_ascii_only() {
        let (folded, truncated) = downcase_truncate_identifier("FooBar");
        assert_eq!(folded, "foobar");
        assert!(!truncated);

        // High-bit characters are left alone; İ must not fold.
        let (folded, _) = downcase_truncate_identifier("Straße");
        assert_eq!(folded, "straße");
        let (folded, _) = downcase_truncate_identifier("İd");
        assert_eq!(folded, "İd");
    }

    #[test]
    fn truncates_at_byte_limit() {
        let long = "a".repeat(100);
        let (folded, truncated) = downcase_truncate_identifier(&long);
        assert!(truncated);
        assert_eq!(folded.len(), MAX_IDENTIFIER_BYTES);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 62 ASCII bytes then a 3-byte character straddling the limit.
        let mut ident = format!("{}€tail", "a".repeat(62));
        assert!(truncate_identifier(&mut ident));
        assert_eq!(ident.len(), 62);
        assert!(ident.ends_with('a'));
    }

    #[test]
    fn short_identifiers_pass_through() {
        let mut ident = String::from("users");
        assert!(!truncate_identifier(&mut ident));
        assert_eq!(ident, "users");
    }
}
