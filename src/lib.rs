//! gix-object-info: Server-side `object-info` capability for gitoxide services.
//!
//! The `object-info` capability lets a client ask the server for lightweight
//! metadata about content-addressed objects (currently their size) without
//! transferring the objects themselves. This crate provides the two pieces a
//! server needs for it:
//!
//! - [`advertise`]: decides from repository configuration whether the
//!   capability token is included in the connection's advertisement.
//! - [`handler`]: reads one batched request off a pkt-line stream, resolves
//!   each identifier against the object store and writes the response.
//!
//! The surrounding server owns connection setup, capability negotiation and
//! the dispatch loop; this crate handles exactly one request per invocation.
#![deny(missing_docs, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod advertise;
pub mod error;
pub mod request;
pub mod store;

// The handler performs blocking pkt-line I/O and follows the selected I/O mode.
#[cfg(feature = "blocking-io")]
pub mod handler;

pub use error::{Error, Malformed};
pub use request::{Attribute, InfoRequest};
pub use store::{InfoResult, Lookup};
