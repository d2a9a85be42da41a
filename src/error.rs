//! Error types for the object-info capability.

use bstr::BString;
use gix_hash::ObjectId;

/// Result type alias for object-info operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error returned by the advertiser and the request handler.
///
/// Every variant is fatal to the current request and propagates to the caller,
/// which decides whether to terminate the connection. A missing object is not
/// an error but a reportable [`Lookup::Missing`](crate::store::Lookup) result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The advertisement configuration value could not be interpreted.
    #[error("invalid boolean value for '{key}': {message}")]
    Config {
        /// The configuration key that failed to parse.
        key: &'static str,
        /// Description of the underlying parse failure.
        message: String,
    },
    /// The client request violated the wire format.
    #[error("malformed object-info request")]
    Malformed(#[from] Malformed),
    /// The client requested an attribute outside the supported set.
    #[error("unknown attribute '{name}' in object-info request")]
    UnknownAttribute {
        /// The attribute name as sent by the client.
        name: BString,
    },
    /// The store reported the object as present but failed to read its header.
    #[error("could not read header of object {oid}")]
    Store {
        /// The identifier whose resolution failed.
        oid: ObjectId,
        /// The store-level failure.
        source: gix_object::find::Error,
    },
    /// The transport failed while reading the request or writing the response.
    #[error("transport failed during object-info exchange")]
    Io(#[from] std::io::Error),
}

/// The ways a client request can violate the object-info wire format.
///
/// Each condition is a distinct variant so protocol tests can assert exactly
/// which violation was detected.
#[derive(Debug, thiserror::Error)]
pub enum Malformed {
    /// The attribute section ended without a single attribute.
    #[error("expected at least one attribute before the separator")]
    NoAttributes,
    /// An attribute record carried no name.
    #[error("attribute records must not be empty")]
    EmptyAttribute,
    /// The same attribute was requested more than once.
    #[error("attribute '{name}' was requested twice")]
    DuplicateAttribute {
        /// The wire name of the repeated attribute.
        name: &'static str,
    },
    /// An identifier record did not start with the `oid ` prefix.
    #[error("expected 'oid <hex-identifier>', got '{line}'")]
    MissingOidPrefix {
        /// The offending record.
        line: BString,
    },
    /// An identifier was not a valid hexadecimal object id.
    #[error("invalid object identifier '{hex}'")]
    InvalidObjectId {
        /// The bytes that failed to parse as an identifier.
        hex: BString,
        /// The hash-level decode failure.
        source: gix_hash::decode::Error,
    },
    /// The stream ended before the section's flush packet was seen.
    #[error("expected a flush packet to end the {section} section")]
    MissingFlush {
        /// The request section that was being read.
        section: &'static str,
    },
    /// A delimiter or response-end packet appeared inside the request body.
    #[error("unexpected non-data packet in object-info request")]
    UnexpectedPacket,
    /// A packet could not be decoded at the framing layer.
    #[cfg(feature = "blocking-io")]
    #[error("could not decode packet line")]
    Packet(#[from] gix_packetline_blocking::decode::Error),
}
