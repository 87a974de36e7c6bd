use sumlink_transport::TransportError;

use crate::varint::VarintOverflow;

/// Errors that can occur while framing or reassembling messages.
///
/// All of these are fatal to the current session: the framing layer never
/// retries and never attempts to resynchronize a corrupt stream.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The receive buffer filled up before a complete frame arrived.
    #[error("receive buffer full ({capacity} bytes) before a complete frame arrived")]
    BufferOverflow { capacity: usize },

    /// The length prefix is not a valid varint.
    #[error("malformed length prefix: {0}")]
    MalformedPrefix(#[from] VarintOverflow),

    /// The payload bytes did not parse under the expected schema.
    #[error("failed to decode payload: {0}")]
    Decode(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The outgoing message could not be serialized into the send scratch.
    #[error("failed to encode payload: {0}")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport rejected a write (length prefix or payload).
    #[error("failed to write frame: {0}")]
    Write(#[source] TransportError),

    /// The transport failed while reading.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, FrameError>;
