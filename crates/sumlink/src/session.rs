//! One adder session over a link: consume a request, compute, send the
//! response, repeat.

use sumlink_frame::{FrameConfig, FrameError, FrameReassembler, FrameWriter, Result};
use sumlink_schema::{SumRequest, SumResponse};
use sumlink_transport::{IoTransport, LinkStream, TransportError};
use tracing::debug;

/// A request/response session over one link.
///
/// The receive and send sides hold separate handles to the same connection
/// (via `try_clone`), driven in strict alternation: at most one frame is in
/// flight. Both ends of the protocol use this type — the server loops in
/// [`serve`](Self::serve), the client calls
/// [`request_sum`](Self::request_sum).
pub struct SumSession {
    reader: FrameReassembler<IoTransport<LinkStream>>,
    writer: FrameWriter<IoTransport<LinkStream>>,
}

impl SumSession {
    /// Build a session over a connected link.
    pub fn over(stream: LinkStream, config: &FrameConfig) -> Result<Self> {
        let write_half = stream.try_clone().map_err(FrameError::Transport)?;
        Ok(Self {
            reader: FrameReassembler::with_config_link(stream, config)?,
            writer: FrameWriter::with_config_link(write_half, config)?,
        })
    }

    /// Serve one request/response cycle (blocking).
    pub fn serve_one(&mut self) -> Result<()> {
        let request: SumRequest = self.reader.consume_message()?;
        let response = SumResponse {
            sum: request.one.wrapping_add(request.two),
        };
        debug!(
            one = request.one,
            two = request.two,
            sum = response.sum,
            "served sum request"
        );
        self.writer.send_message(&response)
    }

    /// Serve request/response cycles until the peer hangs up.
    ///
    /// A disconnect while waiting for the start of the next request ends the
    /// session cleanly. Everything else — buffer overflow, a frame that does
    /// not decode, a rejected write, a disconnect mid-frame — is fatal and
    /// surfaces to the caller.
    pub fn serve(&mut self) -> Result<()> {
        loop {
            match self.serve_one() {
                Ok(()) => {}
                Err(FrameError::Transport(TransportError::Disconnected))
                    if self.reader.buffered() == 0 =>
                {
                    debug!("peer disconnected");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Send one request and wait for the response (blocking).
    pub fn request_sum(&mut self, one: u64, two: u64) -> Result<u64> {
        self.writer.send_message(&SumRequest { one, two })?;
        let response: SumResponse = self.reader.consume_message()?;
        Ok(response.sum)
    }
}
