use sumlink_transport::{IoTransport, LinkStream, Transport};
use tracing::trace;

use crate::config::FrameConfig;
use crate::error::{FrameError, Result};
use crate::message::EncodePayload;
use crate::varint::{encode_varint, MAX_VARINT_LEN};

/// Frames and writes messages to a transport.
///
/// Each send serializes the message into a fixed scratch region, writes the
/// payload length as a varint, then writes the payload. Nothing is retried:
/// a transport rejection aborts the send and surfaces to the caller.
pub struct FrameWriter<T> {
    transport: T,
    scratch: Box<[u8]>,
}

impl<T: Transport> FrameWriter<T> {
    /// Create a frame writer with default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, &FrameConfig::default())
    }

    /// Create a frame writer with explicit configuration.
    pub fn with_config(transport: T, config: &FrameConfig) -> Self {
        Self {
            transport,
            scratch: vec![0u8; config.send_capacity].into_boxed_slice(),
        }
    }

    /// Encode `message` and send it as one frame (blocking).
    pub fn send_message<M: EncodePayload>(&mut self, message: &M) -> Result<()> {
        let len = message
            .encode(&mut self.scratch)
            .map_err(|err| FrameError::Encode(Box::new(err)))?;
        debug_assert!(len <= self.scratch.len());

        self.write_prefixed(len)?;
        let payload = &self.scratch[..len];
        self.transport.send(payload).map_err(FrameError::Write)?;

        trace!(payload_len = len, "frame sent");
        Ok(())
    }

    /// Send an already-encoded payload as one frame (blocking).
    pub fn send_payload(&mut self, payload: &[u8]) -> Result<()> {
        self.write_prefixed(payload.len())?;
        self.transport.send(payload).map_err(FrameError::Write)?;

        trace!(payload_len = payload.len(), "frame sent");
        Ok(())
    }

    /// Write the varint length prefix straight to the transport, bypassing
    /// the scratch region.
    fn write_prefixed(&mut self, payload_len: usize) -> Result<()> {
        let mut prefix = [0u8; MAX_VARINT_LEN];
        let n = encode_varint(payload_len as u64, &mut prefix);
        self.transport.send(&prefix[..n]).map_err(FrameError::Write)
    }

    /// Borrow the underlying transport.
    pub fn get_ref(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the writer and return the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }
}

impl FrameWriter<IoTransport<LinkStream>> {
    /// Create a frame writer over a `LinkStream`, applying the configured
    /// write timeout.
    pub fn with_config_link(inner: LinkStream, config: &FrameConfig) -> Result<Self> {
        inner.set_write_timeout(config.write_timeout)?;
        Ok(Self::with_config(IoTransport::new(inner), config))
    }
}
