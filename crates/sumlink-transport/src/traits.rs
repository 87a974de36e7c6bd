use std::io::{ErrorKind, Read, Write};

use crate::error::{Result, TransportError};

/// A point-to-point byte link.
///
/// The read side may deliver fewer bytes than requested; `Ok(0)` means no
/// data was available this attempt (a transport-level timeout tick), not
/// end-of-stream. A closed link is reported as
/// [`TransportError::Disconnected`]. The write side is all-or-nothing: the
/// bytes are fully written or the call fails.
pub trait Transport {
    /// Read up to `buf.len()` bytes into `buf`, returning how many arrived.
    fn recv(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Write all of `bytes` to the link.
    fn send(&mut self, bytes: &[u8]) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn recv(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).recv(buf)
    }

    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).send(bytes)
    }
}

/// Adapts any blocking `Read + Write` stream to the [`Transport`] contract.
///
/// `Read`'s `Ok(0)` (end-of-stream) becomes `Disconnected`; read timeouts
/// (`WouldBlock`/`TimedOut`) become a zero-byte `recv`, matching the serial
/// semantics the framing layer expects. Writes retry on `Interrupted` only;
/// a write timeout surfaces as an error. The stream is flushed after every
/// send.
pub struct IoTransport<T> {
    inner: T,
}

impl<T: Read + Write> IoTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the adapter and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read + Write> Transport for IoTransport<T> {
    fn recv(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            return match self.inner.read(buf) {
                Ok(0) if !buf.is_empty() => Err(TransportError::Disconnected),
                Ok(n) => Ok(n),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err)
                    if err.kind() == ErrorKind::WouldBlock
                        || err.kind() == ErrorKind::TimedOut =>
                {
                    Ok(0)
                }
                Err(err) => Err(TransportError::Io(err)),
            };
        }
    }

    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        let mut offset = 0usize;
        while offset < bytes.len() {
            match self.inner.write(&bytes[offset..]) {
                Ok(0) => return Err(TransportError::Disconnected),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }

        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }
    }
}
