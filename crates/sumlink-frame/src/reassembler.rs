use bytes::Bytes;
use sumlink_transport::{IoTransport, LinkStream, Transport};
use tracing::trace;

use crate::buffer::RecvBuffer;
use crate::config::FrameConfig;
use crate::error::{FrameError, Result};
use crate::message::DecodePayload;
use crate::varint::decode_varint;

/// Reassembles complete frames from a transport that delivers bytes in
/// arbitrary chunk sizes.
///
/// One reassembler serves every request/response cycle on its link; leftover
/// bytes from a later frame stay buffered between calls. Partial reads and
/// zero-byte reads are expected and handled internally — callers always get
/// a complete payload or a fatal error.
pub struct FrameReassembler<T> {
    transport: T,
    buf: RecvBuffer,
}

impl<T: Transport> FrameReassembler<T> {
    /// Create a reassembler with default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, &FrameConfig::default())
    }

    /// Create a reassembler with explicit configuration.
    pub fn with_config(transport: T, config: &FrameConfig) -> Self {
        Self {
            transport,
            buf: RecvBuffer::with_capacity(config.recv_capacity),
        }
    }

    /// Reassemble the next frame and decode its payload (blocking).
    ///
    /// On decode failure the buffer is left untouched; the caller should
    /// treat the link as unusable, since no resynchronization is attempted.
    pub fn consume_message<M: DecodePayload>(&mut self) -> Result<M> {
        self.consume_with(|payload| {
            M::decode(payload).map_err(|err| FrameError::Decode(Box::new(err)))
        })
    }

    /// Reassemble the next frame and return its raw payload (blocking).
    pub fn read_frame(&mut self) -> Result<Bytes> {
        self.consume_with(|payload| Ok(Bytes::copy_from_slice(payload)))
    }

    fn consume_with<M>(&mut self, decode: impl FnOnce(&[u8]) -> Result<M>) -> Result<M> {
        let (prefix_len, payload_len) = loop {
            // Re-parse the prefix from offset 0 each pass; it may itself be
            // split across reads. Cheap at these buffer sizes.
            if let Some(frame) = self.scan_frame()? {
                break frame;
            }

            if self.buf.is_full() {
                return Err(FrameError::BufferOverflow {
                    capacity: self.buf.capacity(),
                });
            }

            let read = self.transport.recv(self.buf.spare_mut())?;
            self.buf.advance(read);
        };

        let payload = &self.buf.filled()[prefix_len..prefix_len + payload_len];
        let message = decode(payload)?;

        let leftover = self.buf.len() - prefix_len - payload_len;
        trace!(payload_len, leftover, "frame reassembled");
        self.buf.compact(prefix_len + payload_len);
        Ok(message)
    }

    /// Check whether the buffer starts with a complete frame, returning its
    /// prefix and payload lengths.
    fn scan_frame(&self) -> Result<Option<(usize, usize)>> {
        let filled = self.buf.filled();
        let Some((length, prefix_len)) = decode_varint(filled)? else {
            return Ok(None);
        };

        // A frame that cannot fit in the buffer at all will never complete.
        if prefix_len as u64 + length > self.buf.capacity() as u64 {
            return Err(FrameError::BufferOverflow {
                capacity: self.buf.capacity(),
            });
        }

        let payload_len = length as usize;
        if prefix_len + payload_len <= filled.len() {
            Ok(Some((prefix_len, payload_len)))
        } else {
            Ok(None)
        }
    }

    /// Number of bytes currently buffered but not yet consumed.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Borrow the underlying transport.
    pub fn get_ref(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the reassembler and return the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }
}

impl FrameReassembler<IoTransport<LinkStream>> {
    /// Create a reassembler over a `LinkStream`, applying the configured
    /// read timeout.
    pub fn with_config_link(inner: LinkStream, config: &FrameConfig) -> Result<Self> {
        inner.set_read_timeout(config.read_timeout)?;
        Ok(Self::with_config(IoTransport::new(inner), config))
    }
}
