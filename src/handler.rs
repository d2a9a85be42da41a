//! The object-info request handler.
//!
//! One invocation consumes exactly one request and produces exactly one
//! response. The request is read and validated in full, every identifier is
//! resolved, and only then is the first response byte written; a request that
//! fails anywhere along the way therefore produces no partial response, and
//! the pkt-line stream is left wherever reading stopped for the dispatch loop
//! to drop or resynchronize.

use std::io::{Read, Write};

use gix_packetline_blocking::{encode, PacketLineRef, StreamingPeekableIter};

use crate::{
    error::{Error, Malformed},
    request::{self, Attribute, InfoRequest},
    store::{self, InfoResult, Lookup},
};

/// Handle one object-info request arriving on `input`, writing the response to `output`.
///
/// Convenience wrapper for servers that hand over raw byte streams; dispatch
/// loops that already own a pkt-line reader use [`handle_request`].
pub fn handle(
    store: &impl gix_object::FindHeader,
    input: impl Read,
    output: impl Write,
) -> Result<(), Error> {
    let mut input = StreamingPeekableIter::new(input, &[PacketLineRef::Flush], false);
    handle_request(store, &mut input, output)
}

/// Handle one object-info request from a live pkt-line reader.
///
/// The reader is re-armed to stop at flush packets, so it may be handed over
/// directly after the dispatch loop consumed the command section.
pub fn handle_request<R: Read>(
    store: &impl gix_object::FindHeader,
    input: &mut StreamingPeekableIter<R>,
    mut output: impl Write,
) -> Result<(), Error> {
    input.reset_with(&[PacketLineRef::Flush]);
    let request = read_request(input)?;
    #[cfg(feature = "tracing")]
    tracing::debug!(
        attributes = request.attributes.len(),
        objects = request.object_ids.len(),
        "object-info request received"
    );
    let results = store::resolve(store, &request)?;
    write_response(&request, &results, &mut output)
}

/// Read and validate one full request, terminator included.
pub fn read_request<R: Read>(input: &mut StreamingPeekableIter<R>) -> Result<InfoRequest, Error> {
    let attributes = read_attributes(input)?;
    input.reset();
    let object_ids = read_object_ids(input)?;
    Ok(InfoRequest { attributes, object_ids })
}

fn read_attributes<R: Read>(input: &mut StreamingPeekableIter<R>) -> Result<Vec<Attribute>, Error> {
    let mut attributes = Vec::new();
    while let Some(line) = input.read_line() {
        let line = line?.map_err(Malformed::Packet)?;
        match line {
            PacketLineRef::Data(data) => {
                let attribute = request::parse_attribute(request::trim_newline(data))?;
                if attributes.contains(&attribute) {
                    return Err(Malformed::DuplicateAttribute {
                        name: attribute.name(),
                    }
                    .into());
                }
                attributes.push(attribute);
            }
            _ => return Err(Malformed::UnexpectedPacket.into()),
        }
    }
    if !matches!(input.stopped_at(), Some(PacketLineRef::Flush)) {
        return Err(Malformed::MissingFlush { section: "attribute" }.into());
    }
    if attributes.is_empty() {
        return Err(Malformed::NoAttributes.into());
    }
    Ok(attributes)
}

fn read_object_ids<R: Read>(input: &mut StreamingPeekableIter<R>) -> Result<Vec<gix_hash::ObjectId>, Error> {
    let mut object_ids = Vec::new();
    while let Some(line) = input.read_line() {
        let line = line?.map_err(Malformed::Packet)?;
        match line {
            PacketLineRef::Data(data) => {
                object_ids.push(request::parse_object_id(request::trim_newline(data))?);
            }
            _ => return Err(Malformed::UnexpectedPacket.into()),
        }
    }
    if !matches!(input.stopped_at(), Some(PacketLineRef::Flush)) {
        return Err(Malformed::MissingFlush { section: "object-id" }.into());
    }
    Ok(object_ids)
}

/// Write the response for `results`, one record per identifier in request order.
fn write_response(request: &InfoRequest, results: &[InfoResult], mut output: impl Write) -> Result<(), Error> {
    for result in results {
        match result.lookup {
            Lookup::Found { size } => {
                for attribute in &request.attributes {
                    let value = match attribute {
                        Attribute::Size => size,
                    };
                    let line = format!("{} {} {}\n", result.id, attribute, value);
                    encode::data_to_write(line.as_bytes(), &mut output)?;
                }
            }
            Lookup::Missing => {
                let line = format!("{} missing\n", result.id);
                encode::data_to_write(line.as_bytes(), &mut output)?;
            }
        }
    }
    encode::flush_to_write(&mut output)?;
    Ok(())
}
