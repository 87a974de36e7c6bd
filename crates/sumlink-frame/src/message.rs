//! Capability seams between framing and the payload codec.
//!
//! The framing layer treats payload bytes as opaque. Message types plug in
//! through these two one-method traits; nothing deeper is required.

/// Decodes one frame payload into a message.
pub trait DecodePayload: Sized {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parse a message from exactly the payload bytes of one frame.
    fn decode(payload: &[u8]) -> Result<Self, Self::Error>;
}

/// Encodes one message into a fixed scratch region.
pub trait EncodePayload {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Serialize into `scratch`, returning the number of bytes written.
    ///
    /// Must fail rather than truncate when `scratch` is too small.
    fn encode(&self, scratch: &mut [u8]) -> Result<usize, Self::Error>;
}
