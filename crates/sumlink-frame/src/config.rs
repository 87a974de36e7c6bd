/// Default capacity for the receive buffer and send scratch.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Configuration for framing over a link.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Receive buffer capacity in bytes. A frame whose prefix plus payload
    /// exceeds this can never be reassembled.
    pub recv_capacity: usize,
    /// Send scratch capacity in bytes; bounds the largest encodable payload.
    pub send_capacity: usize,
    /// Read timeout applied when framing over a [`LinkStream`].
    ///
    /// [`LinkStream`]: sumlink_transport::LinkStream
    pub read_timeout: Option<std::time::Duration>,
    /// Write timeout applied when framing over a `LinkStream`.
    pub write_timeout: Option<std::time::Duration>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            recv_capacity: DEFAULT_BUFFER_CAPACITY,
            send_capacity: DEFAULT_BUFFER_CAPACITY,
            read_timeout: None,
            write_timeout: None,
        }
    }
}
