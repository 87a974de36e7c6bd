use sumlink_frame::VarintOverflow;

/// Errors that can occur while encoding or decoding schema messages.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The payload ended in the middle of a field.
    #[error("payload truncated mid-field")]
    Truncated,

    /// A field value is not a valid varint.
    #[error("invalid varint in field: {0}")]
    InvalidVarint(#[from] VarintOverflow),

    /// The payload contains a wire type this schema does not use.
    #[error("unsupported wire type {wire_type} for field {field}")]
    UnsupportedWireType { field: u64, wire_type: u8 },

    /// The message does not fit in the provided scratch region.
    #[error("scratch too small ({needed} bytes needed, {available} available)")]
    ScratchTooSmall { needed: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
