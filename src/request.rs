//! The parsed request and per-record wire parsers.
//!
//! Requests are line-oriented over pkt-line framing: one section of attribute
//! names, a flush, one section of `oid <hex>` records, a flush. The handler's
//! section state machine decides which parser a record must satisfy; keeping
//! the parsers per record kind makes every malformed-input condition a
//! distinct, testable error.

use bstr::{BStr, ByteSlice};
use gix_hash::ObjectId;

use crate::error::{Error, Malformed};

/// An object attribute a client may request.
///
/// The set is fixed and enumerable; anything outside it is rejected before a
/// single identifier is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// The object's logical size in bytes, as stored (not on-disk compressed size).
    Size,
}

impl Attribute {
    /// All attributes this server supports.
    pub const ALL: &'static [Attribute] = &[Attribute::Size];

    /// The name under which this attribute appears on the wire.
    pub const fn name(&self) -> &'static str {
        match self {
            Attribute::Size => "size",
        }
    }

    /// Look up an attribute by its wire name.
    pub fn from_name(name: &[u8]) -> Option<Self> {
        Self::ALL.iter().find(|a| a.name().as_bytes() == name).copied()
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully parsed object-info request.
///
/// The request is read in its entirety, terminator included, before any part
/// of it is acted upon.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InfoRequest {
    /// The attributes to report, in the order they were requested.
    pub attributes: Vec<Attribute>,
    /// The identifiers to resolve, in arrival order.
    ///
    /// May be empty; duplicates are preserved so the response maps onto the
    /// request by position.
    pub object_ids: Vec<ObjectId>,
}

/// Parse one record of the attribute section.
pub(crate) fn parse_attribute(line: &BStr) -> Result<Attribute, Error> {
    if line.is_empty() {
        return Err(Malformed::EmptyAttribute.into());
    }
    Attribute::from_name(line).ok_or_else(|| Error::UnknownAttribute { name: line.to_owned() })
}

/// Parse one record of the identifier section, of the form `oid <hex>`.
pub(crate) fn parse_object_id(line: &BStr) -> Result<ObjectId, Malformed> {
    let hex = line
        .strip_prefix(b"oid ")
        .ok_or_else(|| Malformed::MissingOidPrefix { line: line.to_owned() })?;
    ObjectId::from_hex(hex).map_err(|source| Malformed::InvalidObjectId {
        hex: hex.into(),
        source,
    })
}

/// Strip the single trailing newline a pkt-line text record may carry.
pub(crate) fn trim_newline(line: &[u8]) -> &BStr {
    line.strip_suffix(b"\n").unwrap_or(line).as_bstr()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bstr(s: &str) -> &BStr {
        s.as_bytes().as_bstr()
    }

    #[test]
    fn attribute_roundtrips_by_name() {
        for attribute in Attribute::ALL {
            assert_eq!(Attribute::from_name(attribute.name().as_bytes()), Some(*attribute));
        }
        assert_eq!(Attribute::from_name(b"type"), None);
    }

    #[test]
    fn parse_attribute_rejects_empty_and_unknown() {
        assert!(matches!(
            parse_attribute(bstr("")),
            Err(Error::Malformed(Malformed::EmptyAttribute))
        ));
        match parse_attribute(bstr("kind")) {
            Err(Error::UnknownAttribute { name }) => assert_eq!(name, "kind"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn parse_object_id_needs_the_oid_prefix() {
        let id = parse_object_id(bstr("oid e69de29bb2d1d6434b8b29ae775ad8c2e48c5391")).expect("valid record");
        assert_eq!(id.to_string(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");

        assert!(matches!(
            parse_object_id(bstr("e69de29bb2d1d6434b8b29ae775ad8c2e48c5391")),
            Err(Malformed::MissingOidPrefix { .. })
        ));
        assert!(matches!(
            parse_object_id(bstr("oid e69de2")),
            Err(Malformed::InvalidObjectId { .. })
        ));
        assert!(matches!(
            parse_object_id(bstr("oid zzzde29bb2d1d6434b8b29ae775ad8c2e48c5391")),
            Err(Malformed::InvalidObjectId { .. })
        ));
    }

    #[test]
    fn trim_newline_strips_at_most_one() {
        assert_eq!(trim_newline(b"size\n"), "size");
        assert_eq!(trim_newline(b"size"), "size");
        assert_eq!(trim_newline(b"size\n\n"), "size\n");
    }
}
