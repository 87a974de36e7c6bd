//! Little-endian base-128 varints: 7 data bits per byte, MSB as the
//! continuation flag. A `u64` takes at most 10 bytes.

/// Maximum encoded length of a `u64` varint.
pub const MAX_VARINT_LEN: usize = 10;

/// The varint does not fit in 64 bits.
#[derive(Debug, thiserror::Error)]
#[error("varint exceeds 64 bits")]
pub struct VarintOverflow;

/// Encode `value` into `buf`, returning the number of bytes used.
pub fn encode_varint(value: u64, buf: &mut [u8; MAX_VARINT_LEN]) -> usize {
    let mut v = value;
    let mut i = 0;
    loop {
        let byte = (v & 0x7f) as u8;
        v >>= 7;
        if v == 0 {
            buf[i] = byte;
            return i + 1;
        }
        buf[i] = byte | 0x80;
        i += 1;
    }
}

/// Decode a varint from the start of `buf`.
///
/// Returns `Ok(None)` when `buf` ends before the varint does — the caller
/// should supply more bytes and retry. Returns an error when the encoding
/// cannot represent a `u64` (more than 10 bytes, or bits past the 64th).
pub fn decode_varint(buf: &[u8]) -> Result<Option<(u64, usize)>, VarintOverflow> {
    let mut value = 0u64;
    for (i, &byte) in buf.iter().enumerate() {
        if i >= MAX_VARINT_LEN || (i == MAX_VARINT_LEN - 1 && (byte & 0x7f) > 0x01) {
            return Err(VarintOverflow);
        }
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(Some((value, i + 1)));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(value: u64) -> Vec<u8> {
        let mut buf = [0u8; MAX_VARINT_LEN];
        let n = encode_varint(value, &mut buf);
        buf[..n].to_vec()
    }

    #[test]
    fn single_byte_values() {
        assert_eq!(encoded(0), vec![0x00]);
        assert_eq!(encoded(1), vec![0x01]);
        assert_eq!(encoded(127), vec![0x7f]);
    }

    #[test]
    fn multi_byte_values() {
        assert_eq!(encoded(128), vec![0x80, 0x01]);
        assert_eq!(encoded(300), vec![0xac, 0x02]);
        assert_eq!(encoded(u64::MAX).len(), MAX_VARINT_LEN);
    }

    #[test]
    fn roundtrip() {
        for value in [0, 1, 127, 128, 300, 16_384, u64::from(u32::MAX), u64::MAX] {
            let bytes = encoded(value);
            let (decoded, used) = decode_varint(&bytes).unwrap().unwrap();
            assert_eq!(decoded, value);
            assert_eq!(used, bytes.len());
        }
    }

    #[test]
    fn incomplete_needs_more_bytes() {
        assert!(decode_varint(&[]).unwrap().is_none());
        assert!(decode_varint(&[0x80]).unwrap().is_none());
        assert!(decode_varint(&[0xff, 0xff]).unwrap().is_none());
    }

    #[test]
    fn trailing_bytes_ignored() {
        let (value, used) = decode_varint(&[0x02, 0x05, 0x07]).unwrap().unwrap();
        assert_eq!(value, 2);
        assert_eq!(used, 1);
    }

    #[test]
    fn overlong_encoding_rejected() {
        assert!(decode_varint(&[0x80; 11]).is_err());
        // 10th byte carries bits past the 64th.
        let mut bytes = vec![0xff; 9];
        bytes.push(0x02);
        assert!(decode_varint(&bytes).is_err());
    }
}
