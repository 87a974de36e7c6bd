//! Byte-link transport abstraction for sumlink.
//!
//! A transport is a point-to-point byte stream that delivers data in
//! arbitrary chunk sizes: a serial port, a Unix domain socket, a pipe.
//! This is the lowest layer of sumlink. Everything else builds on the
//! [`Transport`] trait and the [`LinkStream`] type provided here.

pub mod error;
pub mod link;
pub mod traits;

#[cfg(unix)]
pub mod uds;

pub use error::{Result, TransportError};
pub use link::LinkStream;
pub use traits::{IoTransport, Transport};

#[cfg(unix)]
pub use uds::ListenSocket;
