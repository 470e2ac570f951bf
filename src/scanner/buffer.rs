//! Accumulator for in-progress literal contents.
//!
//! One buffer lives on the scanner and is reset at the start of each
//! literal, so a long scan reuses a single allocation. Multi-chunk
//! literals (escape decoding, quote continuation, partial dollar-quote
//! delimiters) append into it; the completed payload is snapshotted into
//! a caller-owned byte string.

/// Growable byte buffer for literal assembly.
#[derive(Debug, Default)]
pub struct LiteralBuffer {
    buf: Vec<u8>,
}

impl LiteralBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the buffer, keeping its allocation for the next literal.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    pub fn append(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn append_byte(&mut self, b: u8) {
        self.buf.push(b);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Duplicates the contents into an owned byte string.
    pub fn snapshot_owned(&self) -> Vec<u8> {
        self.buf.clone()
    }

    /// Drops the allocation entirely; used by `finish`.
    pub fn release(&mut self) {
        self.buf = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_snapshot() {
        let mut lit = LiteralBuffer::new();
        lit.append(b"he said ");
        lit.append_byte(b'$');
        lit.append(b"x");
        assert_eq!(lit.len(), 10);
        assert_eq!(lit.snapshot_owned(), b"he said $x".to_vec());
    }

    #[test]
    fn reset_keeps_capacity_release_drops_it() {
        let mut lit = LiteralBuffer::new();
        lit.append(&[0u8; 256]);
        let cap = lit.buf.capacity();
        lit.reset();
        assert!(lit.is_empty());
        assert_eq!(lit.buf.capacity(), cap);
        lit.release();
        assert_eq!(lit.buf.capacity(), 0);
    }
}
