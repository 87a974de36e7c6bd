//! Varint length-prefixed message framing and reassembly.
//!
//! This is the core layer of sumlink. Every message on the wire is:
//!
//! ```text
//! varint(payload_length) || payload_bytes
//! ```
//!
//! with no magic number, checksum, or type tag — which message a payload is
//! gets decided by which decode capability the caller supplies. The receive
//! side accumulates transport reads of arbitrary size into a bounded buffer,
//! detects a complete frame, hands exactly the payload bytes to a decoder,
//! and compacts the leftovers. No partial reads, no buffer management in
//! user code.

pub mod buffer;
pub mod config;
pub mod error;
pub mod message;
pub mod reassembler;
pub mod varint;
pub mod writer;

pub use buffer::RecvBuffer;
pub use config::{FrameConfig, DEFAULT_BUFFER_CAPACITY};
pub use error::{FrameError, Result};
pub use message::{DecodePayload, EncodePayload};
pub use reassembler::FrameReassembler;
pub use varint::{decode_varint, encode_varint, VarintOverflow, MAX_VARINT_LEN};
pub use writer::FrameWriter;
