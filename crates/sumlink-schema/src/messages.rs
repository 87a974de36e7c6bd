use sumlink_frame::{DecodePayload, EncodePayload};

use crate::error::SchemaError;
use crate::wire::{FieldReader, FieldWriter};

/// Request to add two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SumRequest {
    pub one: u64,
    pub two: u64,
}

/// The computed sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SumResponse {
    pub sum: u64,
}

impl SumRequest {
    const FIELD_ONE: u64 = 1;
    const FIELD_TWO: u64 = 2;
}

impl SumResponse {
    const FIELD_SUM: u64 = 1;
}

impl DecodePayload for SumRequest {
    type Error = SchemaError;

    fn decode(payload: &[u8]) -> Result<Self, SchemaError> {
        let mut message = Self::default();
        let mut fields = FieldReader::new(payload);
        while let Some((field, value)) = fields.next_field()? {
            match field {
                Self::FIELD_ONE => message.one = value,
                Self::FIELD_TWO => message.two = value,
                _ => {} // unknown varint field, skip
            }
        }
        Ok(message)
    }
}

impl EncodePayload for SumRequest {
    type Error = SchemaError;

    fn encode(&self, scratch: &mut [u8]) -> Result<usize, SchemaError> {
        let mut fields = FieldWriter::new(scratch);
        fields.put_field(Self::FIELD_ONE, self.one)?;
        fields.put_field(Self::FIELD_TWO, self.two)?;
        Ok(fields.written())
    }
}

impl DecodePayload for SumResponse {
    type Error = SchemaError;

    fn decode(payload: &[u8]) -> Result<Self, SchemaError> {
        let mut message = Self::default();
        let mut fields = FieldReader::new(payload);
        while let Some((field, value)) = fields.next_field()? {
            match field {
                Self::FIELD_SUM => message.sum = value,
                _ => {}
            }
        }
        Ok(message)
    }
}

impl EncodePayload for SumResponse {
    type Error = SchemaError;

    fn encode(&self, scratch: &mut [u8]) -> Result<usize, SchemaError> {
        let mut fields = FieldWriter::new(scratch);
        fields.put_field(Self::FIELD_SUM, self.sum)?;
        Ok(fields.written())
    }
}
