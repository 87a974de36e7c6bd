/// Fixed-capacity receive buffer: a byte region plus a valid length.
///
/// Owned exclusively by the reassembler. Bytes are appended at the valid
/// length as transport reads arrive; once a frame is consumed, the trailing
/// bytes shift back to offset 0. The valid length never exceeds capacity.
pub struct RecvBuffer {
    buf: Box<[u8]>,
    len: usize,
}

impl RecvBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of valid bytes currently buffered.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    /// The valid bytes.
    pub fn filled(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The writable region past the valid bytes.
    pub fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.len..]
    }

    /// Mark `n` bytes of the spare region as valid.
    pub fn advance(&mut self, n: usize) {
        assert!(n <= self.buf.len() - self.len, "advance past buffer capacity");
        self.len += n;
    }

    /// Discard the first `consumed` bytes, shifting the rest to offset 0.
    ///
    /// Runs even when everything was consumed (leaving the buffer empty);
    /// the shift is overlap-safe.
    pub fn compact(&mut self, consumed: usize) {
        assert!(consumed <= self.len, "compact past valid length");
        self.buf.copy_within(consumed..self.len, 0);
        self.len -= consumed;
    }
}

impl std::fmt::Debug for RecvBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecvBuffer")
            .field("len", &self.len)
            .field("capacity", &self.buf.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_with(bytes: &[u8], capacity: usize) -> RecvBuffer {
        let mut buf = RecvBuffer::with_capacity(capacity);
        buf.spare_mut()[..bytes.len()].copy_from_slice(bytes);
        buf.advance(bytes.len());
        buf
    }

    #[test]
    fn append_tracks_valid_length() {
        let mut buf = RecvBuffer::with_capacity(8);
        assert!(buf.is_empty());

        buf.spare_mut()[..3].copy_from_slice(&[1, 2, 3]);
        buf.advance(3);

        assert_eq!(buf.len(), 3);
        assert_eq!(buf.filled(), &[1, 2, 3]);
        assert_eq!(buf.spare_mut().len(), 5);
    }

    #[test]
    fn compact_preserves_trailing_bytes() {
        let mut buf = filled_with(&[0x02, 0x05, 0x07, 0x01, 0x09], 10);
        buf.compact(3);
        assert_eq!(buf.filled(), &[0x01, 0x09]);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn compact_handles_overlapping_ranges() {
        let mut buf = filled_with(&[1, 2, 3, 4, 5, 6], 6);
        buf.compact(2);
        assert_eq!(buf.filled(), &[3, 4, 5, 6]);
    }

    #[test]
    fn compact_everything_empties_the_buffer() {
        let mut buf = filled_with(&[9, 9], 4);
        buf.compact(2);
        assert!(buf.is_empty());
        assert_eq!(buf.spare_mut().len(), 4);
    }

    #[test]
    fn full_buffer_has_no_spare() {
        let mut buf = filled_with(&[1, 2, 3, 4], 4);
        assert!(buf.is_full());
        assert!(buf.spare_mut().is_empty());
    }

    #[test]
    #[should_panic(expected = "advance past buffer capacity")]
    fn advance_past_capacity_panics() {
        let mut buf = RecvBuffer::with_capacity(2);
        buf.advance(3);
    }
}
