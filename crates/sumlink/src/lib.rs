//! Varint-framed request/response messaging over byte links.
//!
//! sumlink frames every message as `varint(payload_length) || payload` over
//! a point-to-point byte stream, reassembles frames from reads of arbitrary
//! size into a bounded buffer, and ships a reference adder service on top.
//!
//! # Crate Structure
//!
//! - [`transport`] — byte-link abstraction (Unix domain sockets, std streams)
//! - [`frame`] — length-prefixed framing, reassembly, and frame writing
//! - [`schema`] — the adder request/response message codec
//! - [`session`] — one request/response cycle wired end to end

/// Re-export transport types.
pub mod transport {
    pub use sumlink_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use sumlink_frame::*;
}

/// Re-export schema types.
pub mod schema {
    pub use sumlink_schema::*;
}

pub mod session;

pub use session::SumSession;
