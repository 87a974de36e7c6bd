//! Message schema for the adder protocol.
//!
//! Payloads use protobuf-style varint fields: each field is a tag varint
//! (`field_number << 3 | wire_type`) followed by a varint value. Only wire
//! type 0 (varint) appears in this schema. Unknown varint fields are
//! skipped; missing fields decode to zero.
//!
//! Two messages exist: [`SumRequest`] (fields `one` = 1, `two` = 2) and
//! [`SumResponse`] (field `sum` = 1). Which one a payload is gets decided
//! by the caller — frames carry no type tag.

pub mod error;
pub mod messages;
mod wire;

pub use error::{Result, SchemaError};
pub use messages::{SumRequest, SumResponse};
