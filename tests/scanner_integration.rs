//! # Integration Tests for the SQL Scanner
//!
//! End-to-end tests driving the public API the way an embedding parser
//! would. Tests are organized by feature area; expected token streams are
//! written out by hand from the lexical rules, not derived from running
//! the scanner.
//!
//! ## Test Categories
//!
//! 1. **Statement scans**: full statements produce the expected
//!    (kind, payload, offset) streams
//! 2. **Literal families**: each string-literal grammar end to end
//! 3. **Diagnostics**: hard errors and their byte offsets
//! 4. **Properties**: randomized invariants (termination, monotonic
//!    locations, dollar-quote round-trips)
//!
//! ## Running Tests
//!
//! ```sh
//! cargo test --test scanner_integration
//! ```

use turscan::{scan, ErrorKind, Keyword, ScanConfig, ScannedToken, Scanner, Token};

fn tokens(input: &str) -> Vec<(Token, usize)> {
    scan(input, ScanConfig::default())
        .unwrap()
        .into_iter()
        .map(|ScannedToken { token, location }| (token, location))
        .collect()
}

mod statement_scans {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn select_with_literal_and_terminator() {
        assert_eq!(
            tokens("SELECT 1;"),
            vec![
                (Token::Keyword(Keyword::Select), 0),
                (Token::IConst(1), 7),
                (Token::Char(b';'), 8),
                (Token::Eof, 9),
            ]
        );
    }

    #[test]
    fn qualified_star_projection() {
        assert_eq!(
            tokens("SELECT t.* FROM t"),
            vec![
                (Token::Keyword(Keyword::Select), 0),
                (Token::Ident("t".into()), 7),
                (Token::Char(b'.'), 8),
                (Token::Char(b'*'), 9),
                (Token::Keyword(Keyword::From), 11),
                (Token::Ident("t".into()), 16),
                (Token::Eof, 17),
            ]
        );
    }

    #[test]
    fn predicate_with_cast_and_comparison() {
        assert_eq!(
            tokens("WHERE a::numeric <= 1.5"),
            vec![
                (Token::Keyword(Keyword::Where), 0),
                (Token::Ident("a".into()), 6),
                (Token::Typecast, 7),
                (Token::Keyword(Keyword::Numeric), 9),
                (Token::Op("<=".into()), 17),
                (Token::FConst("1.5".into()), 20),
                (Token::Eof, 23),
            ]
        );
    }

    #[test]
    fn comments_are_invisible_to_the_stream() {
        assert_eq!(
            tokens("--foo\n+"),
            vec![(Token::Char(b'+'), 6), (Token::Eof, 7)]
        );
        assert_eq!(
            tokens("SELECT /* nested /* deep */ out */ 2"),
            vec![
                (Token::Keyword(Keyword::Select), 0),
                (Token::IConst(2), 35),
                (Token::Eof, 36),
            ]
        );
    }

    #[test]
    fn parameters_in_a_predicate() {
        assert_eq!(
            tokens("WHERE id = $1 AND n < $23"),
            vec![
                (Token::Keyword(Keyword::Where), 0),
                (Token::Ident("id".into()), 6),
                (Token::Char(b'='), 9),
                (Token::Param(1), 11),
                (Token::Keyword(Keyword::And), 14),
                (Token::Ident("n".into()), 18),
                (Token::Char(b'<'), 20),
                (Token::Param(23), 22),
                (Token::Eof, 25),
            ]
        );
    }
}

mod literal_families {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dollar_quote_with_inner_tag() {
        assert_eq!(
            tokens("$tag$he said $inner$ ok$tag$"),
            vec![
                (Token::SConst(b"he said $inner$ ok".to_vec()), 0),
                (Token::Eof, 28),
            ]
        );
    }

    #[test]
    fn unicode_identifier_with_default_escape() {
        assert_eq!(
            tokens(r#"U&"d\0061t\+000061""#),
            vec![(Token::Ident("data".into()), 0), (Token::Eof, 19)]
        );
    }

    #[test]
    fn surrogate_pair_in_escape_string() {
        assert_eq!(
            tokens(r"E'\uD834\uDD1E'"),
            vec![
                (Token::SConst(vec![0xf0, 0x9d, 0x84, 0x9e]), 0),
                (Token::Eof, 15),
            ]
        );
    }

    #[test]
    fn bit_literal_body_is_not_validated() {
        assert_eq!(
            tokens("B'10Z'"),
            vec![(Token::BConst(b"b10Z".to_vec()), 0), (Token::Eof, 6)]
        );
    }

    #[test]
    fn cross_line_continuation_concatenates() {
        assert_eq!(
            tokens("'one'\n  'two'"),
            vec![(Token::SConst(b"onetwo".to_vec()), 0), (Token::Eof, 13)]
        );
        assert_eq!(
            tokens("'one' 'two'"),
            vec![
                (Token::SConst(b"one".to_vec()), 0),
                (Token::SConst(b"two".to_vec()), 6),
                (Token::Eof, 11),
            ]
        );
    }

    #[test]
    fn uescape_clause_round_trip() {
        assert_eq!(
            tokens("U&'d!0061ta' UESCAPE '!'"),
            vec![(Token::SConst(b"data".to_vec()), 0), (Token::Eof, 24)]
        );
    }
}

mod diagnostics {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan_err(input: &str) -> turscan::ScanError {
        let mut scanner = Scanner::new(input, ScanConfig::default());
        loop {
            match scanner.next_token() {
                Ok(scanned) if scanned.token.is_eof() => panic!("scan succeeded"),
                Ok(_) => {}
                Err(err) => return err,
            }
        }
    }

    #[test]
    fn unterminated_literals_point_at_their_opener() {
        let err = scan_err("SELECT 'abc");
        assert_eq!(err.kind, ErrorKind::UnterminatedString);
        assert_eq!(err.position, 7);

        let err = scan_err("SELECT $q$abc");
        assert_eq!(err.kind, ErrorKind::UnterminatedDollarString);
        assert_eq!(err.position, 7);

        let err = scan_err("SELECT /* abc");
        assert_eq!(err.kind, ErrorKind::UnterminatedComment);
        assert_eq!(err.position, 7);
    }

    #[test]
    fn trailing_backslash_then_eof() {
        let err = scan_err("E'\\");
        assert_eq!(err.kind, ErrorKind::UnterminatedString);
        assert_eq!(err.position, 0);
    }

    #[test]
    fn error_position_converts_to_characters() {
        let scanner = Scanner::new("héllo 'x", ScanConfig::default());
        // the quote sits at byte 7 but is the seventh character
        assert_eq!(scanner.error_position(7), 7);
        assert_eq!(scanner.error_position(-5), 0);
    }

    #[test]
    fn errors_render_with_hints_where_defined() {
        let err = scan_err(r"E'\u12'");
        assert_eq!(err.kind, ErrorKind::InvalidUnicodeEscape);
        assert!(err.hint().unwrap().contains("\\uXXXX"));
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every input either scans to a finite Eof-terminated stream or
        /// raises exactly one error; the scanner never hangs or panics.
        #[test]
        fn scan_always_terminates(input in ".{0,200}") {
            let mut scanner = Scanner::new(&input, ScanConfig::default());
            let mut settled = false;
            for _ in 0..input.len() + 2 {
                match scanner.next_token() {
                    Ok(scanned) if scanned.token.is_eof() => {
                        settled = true;
                        break;
                    }
                    Ok(_) => {}
                    Err(_) => {
                        settled = true;
                        break;
                    }
                }
            }
            prop_assert!(settled, "token stream longer than the input");
        }

        /// Byte offsets of successive tokens strictly increase up to Eof.
        #[test]
        fn locations_are_monotonic(input in "[a-z0-9'$ .+*<>=(),;\n-]{0,80}") {
            let mut scanner = Scanner::new(&input, ScanConfig::default());
            let mut last: Option<usize> = None;
            loop {
                match scanner.next_token() {
                    Ok(scanned) => {
                        if scanned.token.is_eof() {
                            if let Some(prev) = last {
                                prop_assert!(scanned.location >= prev);
                            }
                            break;
                        }
                        if let Some(prev) = last {
                            prop_assert!(scanned.location > prev, "went backwards");
                        }
                        last = Some(scanned.location);
                    }
                    Err(_) => break,
                }
            }
        }

        /// An opaque dollar-quoted body round-trips byte for byte.
        #[test]
        fn dollar_quote_round_trips(body in "[a-zA-Z0-9 '\\\\\n]{0,60}") {
            let input = format!("$q${body}$q$");
            let scanned = scan(&input, ScanConfig::default()).unwrap();
            prop_assert_eq!(&scanned[0].token, &Token::SConst(body.into_bytes()));
        }

        /// Doubled quotes inside standard strings always collapse.
        #[test]
        fn doubled_quote_collapses(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
            let input = format!("'{a}''{b}'");
            let scanned = scan(&input, ScanConfig::default()).unwrap();
            let expected = format!("{a}'{b}").into_bytes();
            prop_assert_eq!(&scanned[0].token, &Token::SConst(expected));
        }
    }
}
