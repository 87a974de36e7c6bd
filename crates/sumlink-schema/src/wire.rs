//! Varint-field readers and writers shared by the message types.

use sumlink_frame::{decode_varint, encode_varint, MAX_VARINT_LEN};

use crate::error::{Result, SchemaError};

const WIRE_VARINT: u8 = 0;

/// Iterates `(field_number, value)` pairs over a payload of varint fields.
pub struct FieldReader<'a> {
    payload: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload, pos: 0 }
    }

    fn read_varint(&mut self) -> Result<u64> {
        match decode_varint(&self.payload[self.pos..])? {
            Some((value, used)) => {
                self.pos += used;
                Ok(value)
            }
            None => Err(SchemaError::Truncated),
        }
    }

    /// Read the next field, or `None` at the end of the payload.
    pub fn next_field(&mut self) -> Result<Option<(u64, u64)>> {
        if self.pos == self.payload.len() {
            return Ok(None);
        }
        let tag = self.read_varint()?;
        let wire_type = (tag & 0x07) as u8;
        let field = tag >> 3;
        if wire_type != WIRE_VARINT {
            return Err(SchemaError::UnsupportedWireType { field, wire_type });
        }
        let value = self.read_varint()?;
        Ok(Some((field, value)))
    }
}

/// Appends varint fields to a fixed scratch region.
pub struct FieldWriter<'a> {
    scratch: &'a mut [u8],
    pos: usize,
}

impl<'a> FieldWriter<'a> {
    pub fn new(scratch: &'a mut [u8]) -> Self {
        Self { scratch, pos: 0 }
    }

    fn put_varint(&mut self, value: u64) -> Result<()> {
        let mut buf = [0u8; MAX_VARINT_LEN];
        let n = encode_varint(value, &mut buf);
        if self.pos + n > self.scratch.len() {
            return Err(SchemaError::ScratchTooSmall {
                needed: self.pos + n,
                available: self.scratch.len(),
            });
        }
        self.scratch[self.pos..self.pos + n].copy_from_slice(&buf[..n]);
        self.pos += n;
        Ok(())
    }

    pub fn put_field(&mut self, field: u64, value: u64) -> Result<()> {
        self.put_varint(field << 3 | u64::from(WIRE_VARINT))?;
        self.put_varint(value)
    }

    /// Bytes written so far.
    pub fn written(&self) -> usize {
        self.pos
    }
}
