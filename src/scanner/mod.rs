//! # SQL Lexical Scanner
//!
//! This module implements a single-pass SQL scanner that turns a source
//! string into a stream of tokens, each carrying the byte offset of its
//! first byte so a downstream grammar can produce precise error cursors.
//!
//! ## Design Goals
//!
//! 1. **No backtrack**: every byte is consumed at most a constant number
//!    of times; wherever a rule over-reads to disambiguate, it explicitly
//!    pushes the surplus back by resetting the position.
//! 2. **Single allocation per literal**: literal contents accumulate in
//!    one reusable buffer and are copied out once on completion.
//! 3. **Faithful literal grammars**: standard strings, escape strings
//!    with octal/hex/Unicode escapes and UTF-16 surrogate pairs, bit and
//!    hex strings, dollar-quoted strings with user-defined tags, quoted
//!    identifiers with optional Unicode escape post-processing, nested
//!    block comments.
//! 4. **Configuration snapshot**: string semantics flags are copied at
//!    construction and never re-read mid-scan.
//!
//! ## Scanner Modes
//!
//! `next_token` drives a closed set of sub-scanners, one per literal
//! family. Each runs to the end of its literal (or to a hard error)
//! before returning, so no mode outlives a `next_token` call:
//!
//! | Mode | Entered on | Produces |
//! |------|-----------|----------|
//! | bit string | `B'` | `BConst` |
//! | hex string | `X'` | `XConst` |
//! | standard string | `'` (standard_conforming_strings on) | `SConst` |
//! | escape string | `E'`, or `'` with the flag off | `SConst` |
//! | Unicode string | `U&'` | `SConst` |
//! | dollar string | `$tag$` | `SConst` |
//! | quoted identifier | `"` | `Ident` |
//! | Unicode identifier | `U&"` | `Ident` |
//! | block comment | `/*` | nothing (whitespace) |
//!
//! ## Quote Termination
//!
//! A closing quote followed by whitespace that contains a newline and then
//! another quote *continues* the literal (SQL string concatenation across
//! lines); the intervening bytes are discarded. Without a newline the
//! literal ends at the quote. `--` comments count as whitespace inside the
//! continuation gap, but a comment directly before the continuing quote
//! must itself be closed by a newline.
//!
//! ## Usage Example
//!
//! ```ignore
//! use turscan::{ScanConfig, Scanner, Token};
//!
//! let mut scanner = Scanner::new("SELECT 1", ScanConfig::default());
//! loop {
//!     let scanned = scanner.next_token()?;
//!     if scanned.token.is_eof() { break; }
//!     println!("{:?} at byte {}", scanned.token, scanned.location);
//! }
//! ```

pub mod buffer;
mod escape;
pub mod uescape;

use smallvec::SmallVec;

use crate::charclass::{
    is_dolq_cont, is_dolq_start, is_digit, is_horiz_space, is_ident_cont, is_ident_start,
    is_newline, is_op_char, is_self_char, is_space,
};
use crate::config::{ScanConfig, NAMEDATALEN};
use crate::encoding::{mb_strlen, verify_mbstr};
use crate::error::{ErrorKind, ScanError, ScanWarning, WarningKind};
use crate::ident::{downcase_truncate_identifier, truncate_identifier};
use crate::keyword::{self, Keyword};
use crate::token::{ScannedToken, Token};
use buffer::LiteralBuffer;

/// Single-use scanner over one source string.
///
/// Two instances are fully independent; all mutable scan state lives on
/// the instance. Construction snapshots the configuration, and `Drop`
/// releases the buffers on every exit path, including hard errors.
pub struct Scanner<'a> {
    src: &'a str,
    input: &'a [u8],
    pos: usize,
    token_start: usize,
    literal: LiteralBuffer,
    dollar_delim: SmallVec<[u8; 16]>,
    saw_non_ascii: bool,
    warn_on_first_escape: bool,
    config: ScanConfig,
    warnings: Vec<ScanWarning>,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str, config: ScanConfig) -> Self {
        tracing::debug!(bytes = src.len(), "scan session started");
        Self {
            src,
            input: src.as_bytes(),
            pos: 0,
            token_start: 0,
            literal: LiteralBuffer::new(),
            dollar_delim: SmallVec::new(),
            saw_non_ascii: false,
            warn_on_first_escape: false,
            config,
            warnings: Vec::new(),
        }
    }

    /// Current byte position; equals the source length once `Eof` has been
    /// returned.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Warnings collected so far, in emission order.
    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    /// Releases the literal buffer and dollar delimiter. Idempotent; safe
    /// to call after an error. Subsequent `next_token` calls remain valid
    /// and re-grow the buffer if needed.
    pub fn finish(&mut self) {
        self.literal.release();
        self.dollar_delim = SmallVec::new();
        tracing::debug!(position = self.pos, "scan session finished");
    }

    /// Converts a byte offset into a 1-based character position under the
    /// server encoding; returns 0 for negative offsets.
    pub fn error_position(&self, byte_offset: isize) -> usize {
        if byte_offset < 0 {
            return 0;
        }
        let offset = (byte_offset as usize).min(self.input.len());
        mb_strlen(self.config.server_encoding, &self.input[..offset]) + 1
    }

    /// Returns the next token and its location, or `Token::Eof` once the
    /// input is exhausted. After `Eof`, further calls keep returning `Eof`
    /// at the terminal offset.
    pub fn next_token(&mut self) -> Result<ScannedToken, ScanError> {
        self.skip_whitespace_and_comments()?;
        self.token_start = self.pos;

        let Some(b) = self.byte(self.pos) else {
            return Ok(self.emit(Token::Eof));
        };

        match b {
            b'b' | b'B' if self.byte(self.pos + 1) == Some(b'\'') => self.scan_bit_string(),
            b'x' | b'X' if self.byte(self.pos + 1) == Some(b'\'') => self.scan_hex_string(),
            b'n' | b'N' if self.byte(self.pos + 1) == Some(b'\'') => {
                // National character string: hand the quote back and let
                // the grammar see an nchar keyword before the literal.
                self.pos += 1;
                Ok(self.emit(Token::Keyword(Keyword::Nchar)))
            }
            b'e' | b'E' if self.byte(self.pos + 1) == Some(b'\'') => {
                self.pos += 2;
                self.warn_on_first_escape = false;
                self.scan_extended_string()
            }
            b'u' | b'U'
                if self.byte(self.pos + 1) == Some(b'&')
                    && self.byte(self.pos + 2) == Some(b'\'') =>
            {
                if !self.config.standard_conforming_strings {
                    return Err(self.err(ErrorKind::UnsafeUnicodeString, self.pos));
                }
                self.pos += 3;
                self.scan_unicode_string()
            }
            b'u' | b'U'
                if self.byte(self.pos + 1) == Some(b'&')
                    && self.byte(self.pos + 2) == Some(b'"') =>
            {
                self.pos += 3;
                self.scan_unicode_ident()
            }
            b'\'' => {
                self.pos += 1;
                self.warn_on_first_escape = true;
                if self.config.standard_conforming_strings {
                    self.scan_standard_string()
                } else {
                    self.scan_extended_string()
                }
            }
            b'"' => {
                self.pos += 1;
                self.scan_quoted_ident()
            }
            b'$' => self.scan_dollar(),
            b':' => {
                if self.byte(self.pos + 1) == Some(b':') {
                    self.pos += 2;
                    Ok(self.emit(Token::Typecast))
                } else {
                    self.pos += 1;
                    Ok(self.emit(Token::Char(b':')))
                }
            }
            b',' | b'(' | b')' | b'[' | b']' | b';' => {
                self.pos += 1;
                Ok(self.emit(Token::Char(b)))
            }
            b'.' => {
                if self.byte(self.pos + 1).is_some_and(is_digit) {
                    self.scan_number(true)
                } else {
                    self.pos += 1;
                    Ok(self.emit(Token::Char(b'.')))
                }
            }
            b'0'..=b'9' => self.scan_number(false),
            _ if is_op_char(b) => self.scan_operator(),
            _ if is_ident_start(b) => self.scan_identifier(),
            _ => {
                self.pos += 1;
                Ok(self.emit(Token::Char(b)))
            }
        }
    }

    fn byte(&self, i: usize) -> Option<u8> {
        self.input.get(i).copied()
    }

    fn emit(&self, token: Token) -> ScannedToken {
        ScannedToken::new(token, self.token_start)
    }

    fn err(&self, kind: ErrorKind, position: usize) -> ScanError {
        ScanError::new(kind, position)
    }

    fn warn(&mut self, kind: WarningKind, message: String, position: usize) {
        tracing::warn!(%message, position, "scan warning");
        self.warnings.push(ScanWarning {
            kind,
            message,
            position,
        });
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ScanError> {
        loop {
            match self.byte(self.pos) {
                Some(b) if is_space(b) => self.pos += 1,
                Some(b'-') if self.byte(self.pos + 1) == Some(b'-') => {
                    self.pos += 2;
                    while self.byte(self.pos).is_some_and(|b| !is_newline(b)) {
                        self.pos += 1;
                    }
                }
                Some(b'/') if self.byte(self.pos + 1) == Some(b'*') => {
                    self.scan_block_comment()?;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Nested `/* ... */` comment; consumed as whitespace.
    fn scan_block_comment(&mut self) -> Result<(), ScanError> {
        let start = self.pos;
        self.pos += 2;
        let mut depth: u32 = 0;
        loop {
            match (self.byte(self.pos), self.byte(self.pos + 1)) {
                (None, _) => return Err(self.err(ErrorKind::UnterminatedComment, start)),
                (Some(b'/'), Some(b'*')) => {
                    depth += 1;
                    self.pos += 2;
                }
                (Some(b'*'), Some(b'/')) => {
                    self.pos += 2;
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                }
                _ => self.pos += 1,
            }
        }
    }

    fn scan_identifier(&mut self) -> Result<ScannedToken, ScanError> {
        let start = self.pos;
        self.pos += 1;
        while self.byte(self.pos).is_some_and(is_ident_cont) {
            self.pos += 1;
        }
        let text = &self.src[start..self.pos];

        let folded_lookup;
        let folded: &str = if text.bytes().any(|b| b.is_ascii_uppercase()) {
            folded_lookup = text.to_ascii_lowercase();
            &folded_lookup
        } else {
            text
        };
        if let Some(kw) = keyword::lookup(folded) {
            return Ok(self.emit(Token::Keyword(kw)));
        }

        let (ident, truncated) = downcase_truncate_identifier(text);
        if truncated {
            self.warn(
                WarningKind::IdentifierTruncated,
                format!("identifier \"{text}\" will be truncated to \"{ident}\""),
                start,
            );
        }
        Ok(self.emit(Token::Ident(ident)))
    }

    fn scan_number(&mut self, leading_dot: bool) -> Result<ScannedToken, ScanError> {
        let start = self.pos;
        let mut is_float = false;

        if leading_dot {
            self.pos += 1;
            is_float = true;
            while self.byte(self.pos).is_some_and(is_digit) {
                self.pos += 1;
            }
        } else {
            while self.byte(self.pos).is_some_and(is_digit) {
                self.pos += 1;
            }
            if self.byte(self.pos) == Some(b'.') {
                if self.byte(self.pos + 1) == Some(b'.') {
                    // `1..`: leave both dots for the next rules
                    return Ok(self.process_integer(start, self.pos));
                }
                self.pos += 1;
                is_float = true;
                while self.byte(self.pos).is_some_and(is_digit) {
                    self.pos += 1;
                }
            }
        }

        if matches!(self.byte(self.pos), Some(b'e' | b'E')) {
            let exp_start = self.pos;
            let mut j = self.pos + 1;
            if matches!(self.byte(j), Some(b'+' | b'-')) {
                j += 1;
            }
            if self.byte(j).is_some_and(is_digit) {
                is_float = true;
                self.pos = j + 1;
                while self.byte(self.pos).is_some_and(is_digit) {
                    self.pos += 1;
                }
            } else {
                // `1e` / `1e+`: hand the exponent head back and emit the
                // mantissa as a numeric constant
                return Ok(self.emit(Token::FConst(self.src[start..exp_start].to_string())));
            }
        }

        if is_float {
            Ok(self.emit(Token::FConst(self.src[start..self.pos].to_string())))
        } else {
            Ok(self.process_integer(start, self.pos))
        }
    }

    /// 32-bit integers become `IConst`; anything wider keeps its original
    /// spelling as `FConst` for the numeric type machinery to sort out.
    fn process_integer(&self, start: usize, end: usize) -> ScannedToken {
        let text = &self.src[start..end];
        match text.parse::<i32>() {
            Ok(v) => self.emit(Token::IConst(v)),
            Err(_) => self.emit(Token::FConst(text.to_string())),
        }
    }

    fn scan_operator(&mut self) -> Result<ScannedToken, ScanError> {
        let start = self.pos;
        while self.byte(self.pos).is_some_and(is_op_char) {
            self.pos += 1;
        }
        let text = &self.input[start..self.pos];
        let mut nchars = text.len();

        // An embedded comment opener ends the operator at the earlier
        // occurrence; the rest is rescanned as a comment.
        for i in 0..nchars.saturating_sub(1) {
            if (text[i] == b'/' && text[i + 1] == b'*')
                || (text[i] == b'-' && text[i + 1] == b'-')
            {
                nchars = i;
                break;
            }
        }

        // A trailing + or - is only part of the operator when some earlier
        // character could not appear in a standard SQL operator; otherwise
        // `a=-1` must read as `a = -1`.
        if nchars > 1 && matches!(text[nchars - 1], b'+' | b'-') {
            let protected = text[..nchars - 1].iter().any(|&c| {
                matches!(
                    c,
                    b'~' | b'@' | b'#' | b'^' | b'&' | b'|' | b'`' | b'?' | b'%'
                )
            });
            if !protected {
                while nchars > 1 && matches!(text[nchars - 1], b'+' | b'-') {
                    nchars -= 1;
                }
            }
        }

        self.pos = start + nchars;

        if nchars == 1 && is_self_char(text[0]) {
            return Ok(self.emit(Token::Char(text[0])));
        }
        if nchars >= NAMEDATALEN {
            return Err(self.err(ErrorKind::OperatorTooLong, start));
        }

        let op = &text[..nchars];
        if op == b"!=" {
            // compatibility alias
            return Ok(self.emit(Token::Op("<>".to_string())));
        }
        Ok(self.emit(Token::Op(op.iter().map(|&b| b as char).collect())))
    }

    fn scan_dollar(&mut self) -> Result<ScannedToken, ScanError> {
        if self.byte(self.pos + 1).is_some_and(is_digit) {
            return self.scan_param();
        }

        // Dollar-quote opener: `$` tag? `$` where the tag looks like an
        // identifier without `$`.
        let mut j = self.pos + 1;
        if self.byte(j).is_some_and(is_dolq_start) {
            j += 1;
            while self.byte(j).is_some_and(is_dolq_cont) {
                j += 1;
            }
        }
        if self.byte(j) == Some(b'$') {
            self.dollar_delim.clear();
            self.dollar_delim
                .extend_from_slice(&self.input[self.pos..=j]);
            self.pos = j + 1;
            return self.scan_dollar_quoted();
        }

        // Not an opener: the dollar stands for itself and the tag bytes
        // are rescanned as an identifier.
        self.pos += 1;
        Ok(self.emit(Token::Char(b'$')))
    }

    fn scan_param(&mut self) -> Result<ScannedToken, ScanError> {
        self.pos += 1;
        let mut value: i64 = 0;
        while let Some(b) = self.byte(self.pos).filter(|&b| is_digit(b)) {
            // mirrors the C long -> int assignment on pathological widths
            value = value.wrapping_mul(10).wrapping_add((b - b'0') as i64);
            self.pos += 1;
        }
        Ok(self.emit(Token::Param(value as i32)))
    }

    fn scan_dollar_quoted(&mut self) -> Result<ScannedToken, ScanError> {
        self.literal.reset();
        let delim = self.dollar_delim.clone();
        loop {
            match self.byte(self.pos) {
                None => {
                    return Err(self.err(ErrorKind::UnterminatedDollarString, self.token_start))
                }
                Some(b'$') => {
                    if self.input[self.pos..].starts_with(&delim) {
                        self.pos += delim.len();
                        self.dollar_delim.clear();
                        return Ok(self.emit(Token::SConst(self.literal.snapshot_owned())));
                    }
                    if let Some(end) = self.match_dollar_tag(self.pos) {
                        // A well-formed tag that is not ours: keep all but
                        // its trailing `$`, which may open the real closer.
                        self.literal.append(&self.input[self.pos..end]);
                        self.pos = end;
                    } else {
                        self.literal.append_byte(b'$');
                        self.pos += 1;
                    }
                }
                Some(_) => {
                    let run_start = self.pos;
                    while self.byte(self.pos).is_some_and(|b| b != b'$') {
                        self.pos += 1;
                    }
                    self.literal.append(&self.input[run_start..self.pos]);
                }
            }
        }
    }

    /// If a `$tag$` delimiter starts at `i`, returns the index of its
    /// closing `$`.
    fn match_dollar_tag(&self, i: usize) -> Option<usize> {
        let mut j = i + 1;
        if self.byte(j).is_some_and(is_dolq_start) {
            j += 1;
            while self.byte(j).is_some_and(is_dolq_cont) {
                j += 1;
            }
        }
        (self.byte(j) == Some(b'$')).then_some(j)
    }

    fn scan_bit_string(&mut self) -> Result<ScannedToken, ScanError> {
        self.pos += 2;
        self.literal.reset();
        self.literal.append_byte(b'b');
        self.collect_quoted_body(false, ErrorKind::UnterminatedBitString)?;
        Ok(self.emit(Token::BConst(self.literal.snapshot_owned())))
    }

    fn scan_hex_string(&mut self) -> Result<ScannedToken, ScanError> {
        self.pos += 2;
        self.literal.reset();
        self.literal.append_byte(b'x');
        self.collect_quoted_body(false, ErrorKind::UnterminatedHexString)?;
        Ok(self.emit(Token::XConst(self.literal.snapshot_owned())))
    }

    fn scan_standard_string(&mut self) -> Result<ScannedToken, ScanError> {
        self.literal.reset();
        self.collect_quoted_body(true, ErrorKind::UnterminatedString)?;
        Ok(self.emit(Token::SConst(self.literal.snapshot_owned())))
    }

    /// Shared quote-delimited collector. The opening quote has been
    /// consumed; on success the closing quote has been consumed and the
    /// body sits in the literal buffer.
    fn collect_quoted_body(
        &mut self,
        doubled_quote_escapes: bool,
        eof_kind: ErrorKind,
    ) -> Result<(), ScanError> {
        loop {
            match self.byte(self.pos) {
                None => return Err(self.err(eof_kind, self.token_start)),
                Some(b'\'') => {
                    if doubled_quote_escapes && self.byte(self.pos + 1) == Some(b'\'') {
                        self.literal.append_byte(b'\'');
                        self.pos += 2;
                    } else if self.quote_continues() {
                        // position advanced past the continuing quote
                    } else {
                        self.pos += 1;
                        return Ok(());
                    }
                }
                Some(_) => {
                    let run_start = self.pos;
                    while self.byte(self.pos).is_some_and(|b| b != b'\'') {
                        self.pos += 1;
                    }
                    self.literal.append(&self.input[run_start..self.pos]);
                }
            }
        }
    }

    /// Decides between termination and SQL literal continuation at an
    /// undoubled closing quote. Continuation requires whitespace with at
    /// least one newline and then another quote; in that case the gap is
    /// discarded, the position moves past the continuing quote, and `true`
    /// is returned. Otherwise the position is left on the closing quote.
    fn quote_continues(&mut self) -> bool {
        let mut j = self.pos + 1;
        loop {
            match self.byte(j) {
                Some(b) if is_horiz_space(b) => j += 1,
                Some(b'-') if self.byte(j + 1) == Some(b'-') => {
                    j += 2;
                    while self.byte(j).is_some_and(|b| !is_newline(b)) {
                        j += 1;
                    }
                }
                _ => break,
            }
        }
        if !self.byte(j).is_some_and(is_newline) {
            return false;
        }
        j += 1;
        loop {
            match self.byte(j) {
                Some(b) if is_space(b) => j += 1,
                Some(b'-') if self.byte(j + 1) == Some(b'-') => {
                    let mut k = j + 2;
                    while self.byte(k).is_some_and(|b| !is_newline(b)) {
                        k += 1;
                    }
                    // the comment must be closed by a newline before the
                    // continuing quote can follow
                    j = k;
                    if self.byte(j).is_none() {
                        break;
                    }
                }
                _ => break,
            }
        }
        if self.byte(j) == Some(b'\'') {
            self.pos = j + 1;
            true
        } else {
            false
        }
    }

    fn scan_extended_string(&mut self) -> Result<ScannedToken, ScanError> {
        self.literal.reset();
        self.saw_non_ascii = false;
        loop {
            match self.byte(self.pos) {
                None => return Err(self.err(ErrorKind::UnterminatedString, self.token_start)),
                Some(b'\'') => {
                    if self.byte(self.pos + 1) == Some(b'\'') {
                        self.literal.append_byte(b'\'');
                        self.pos += 2;
                    } else if self.quote_continues() {
                        // continuation gap discarded
                    } else {
                        self.pos += 1;
                        if self.saw_non_ascii {
                            verify_mbstr(self.config.server_encoding, self.literal.as_bytes())
                                .map_err(|_| {
                                    self.err(ErrorKind::InvalidByteSequence, self.token_start)
                                })?;
                        }
                        return Ok(self.emit(Token::SConst(self.literal.snapshot_owned())));
                    }
                }
                Some(b'\\') => self.decode_backslash_escape()?,
                Some(_) => {
                    let run_start = self.pos;
                    while self
                        .byte(self.pos)
                        .is_some_and(|b| b != b'\'' && b != b'\\')
                    {
                        self.pos += 1;
                    }
                    self.literal.append(&self.input[run_start..self.pos]);
                }
            }
        }
    }

    fn scan_unicode_string(&mut self) -> Result<ScannedToken, ScanError> {
        self.literal.reset();
        self.collect_quoted_body(true, ErrorKind::UnterminatedString)?;
        let esc = self.uescape_clause()?;
        let decoded = uescape::decode_literal(
            self.literal.as_bytes(),
            esc,
            self.config.server_encoding,
            self.token_start,
        )?;
        Ok(self.emit(Token::SConst(decoded)))
    }

    fn scan_quoted_ident(&mut self) -> Result<ScannedToken, ScanError> {
        self.collect_double_quoted_body()?;
        if self.literal.is_empty() {
            return Err(self.err(ErrorKind::ZeroLengthIdentifier, self.token_start));
        }
        let ident = self.ident_from_bytes(self.literal.snapshot_owned())?;
        Ok(self.emit(Token::Ident(ident)))
    }

    fn scan_unicode_ident(&mut self) -> Result<ScannedToken, ScanError> {
        self.collect_double_quoted_body()?;
        let esc = self.uescape_clause()?;
        let decoded = uescape::decode_literal(
            self.literal.as_bytes(),
            esc,
            self.config.server_encoding,
            self.token_start,
        )?;
        if decoded.is_empty() {
            return Err(self.err(ErrorKind::ZeroLengthIdentifier, self.token_start));
        }
        let ident = self.ident_from_bytes(decoded)?;
        Ok(self.emit(Token::Ident(ident)))
    }

    /// Double-quoted identifier body: `""` collapses to `"`; there is no
    /// cross-line continuation for identifiers.
    fn collect_double_quoted_body(&mut self) -> Result<(), ScanError> {
        self.literal.reset();
        loop {
            match self.byte(self.pos) {
                None => {
                    return Err(self.err(ErrorKind::UnterminatedIdentifier, self.token_start))
                }
                Some(b'"') => {
                    if self.byte(self.pos + 1) == Some(b'"') {
                        self.literal.append_byte(b'"');
                        self.pos += 2;
                    } else {
                        self.pos += 1;
                        return Ok(());
                    }
                }
                Some(_) => {
                    let run_start = self.pos;
                    while self.byte(self.pos).is_some_and(|b| b != b'"') {
                        self.pos += 1;
                    }
                    self.literal.append(&self.input[run_start..self.pos]);
                }
            }
        }
    }

    fn ident_from_bytes(&mut self, bytes: Vec<u8>) -> Result<String, ScanError> {
        let mut ident = String::from_utf8(bytes)
            .map_err(|_| self.err(ErrorKind::InvalidByteSequence, self.token_start))?;
        if ident.len() >= NAMEDATALEN {
            let original = ident.clone();
            truncate_identifier(&mut ident);
            let message =
                format!("identifier \"{original}\" will be truncated to \"{ident}\"");
            self.warn(WarningKind::IdentifierTruncated, message, self.token_start);
        }
        Ok(ident)
    }

    /// Recognizes an optional `UESCAPE '<c>'` clause after the closing
    /// quote of a Unicode literal. Without a complete clause the position
    /// is restored and the default `\` escape applies; the UESCAPE word is
    /// then rescanned as an ordinary token.
    fn uescape_clause(&mut self) -> Result<u8, ScanError> {
        let save = self.pos;
        self.skip_clause_whitespace();

        let word = self
            .input
            .get(self.pos..self.pos + 7)
            .filter(|w| w.eq_ignore_ascii_case(b"uescape"));
        if word.is_none() || self.byte(self.pos + 7).is_some_and(is_ident_cont) {
            self.pos = save;
            return Ok(b'\\');
        }
        self.pos += 7;
        self.skip_clause_whitespace();

        if self.byte(self.pos) == Some(b'\'')
            && self.byte(self.pos + 2) == Some(b'\'')
            && self.byte(self.pos + 1).is_some_and(|b| b != b'\'')
        {
            let esc_pos = self.pos + 1;
            let esc = self.input[esc_pos];
            self.pos += 3;
            if !uescape::valid_uescape_char(esc) {
                return Err(self.err(ErrorKind::InvalidUnicodeEscapeChar, esc_pos));
            }
            return Ok(esc);
        }

        self.pos = save;
        Ok(b'\\')
    }

    /// Whitespace permitted inside the UESCAPE clause and the quote
    /// continuation gap: spaces and `--` comments, but not `/* */`.
    fn skip_clause_whitespace(&mut self) {
        loop {
            match self.byte(self.pos) {
                Some(b) if is_space(b) => self.pos += 1,
                Some(b'-') if self.byte(self.pos + 1) == Some(b'-') => {
                    self.pos += 2;
                    while self.byte(self.pos).is_some_and(|b| !is_newline(b)) {
                        self.pos += 1;
                    }
                }
                _ => return,
            }
        }
    }
}

impl std::fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("pos", &self.pos)
            .field("token_start", &self.token_start)
            .field("warnings", &self.warnings.len())
            .finish_non_exhaustive()
    }
}
