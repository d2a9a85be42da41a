//! Identifier resolution against the object store.
//!
//! The store is an external collaborator reached through
//! [`gix_object::FindHeader`], which object databases implement and tests can
//! substitute with an in-memory stand-in. Only headers are read; object
//! bodies are never loaded.

use gix_hash::{oid, ObjectId};

use crate::{
    error::Error,
    request::InfoRequest,
};

/// The outcome of resolving a single identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The object exists; its requested attributes follow.
    Found {
        /// The object's logical size in bytes.
        size: u64,
    },
    /// The object does not exist in the store.
    ///
    /// This is a reportable result, not an error; a batch stays intact when
    /// some of its identifiers are unknown.
    Missing,
}

/// One response entry, positionally matching the request's identifier list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoResult {
    /// The identifier echoed back to the client.
    pub id: ObjectId,
    /// What resolution found for it.
    pub lookup: Lookup,
}

/// Resolve a single identifier.
///
/// A store-level failure to read an object it knows about indicates a
/// server-side fault and is surfaced as [`Error::Store`], unlike an absent
/// object which is a plain [`Lookup::Missing`].
pub fn lookup(store: &impl gix_object::FindHeader, id: &oid) -> Result<Lookup, Error> {
    match store.try_header(id) {
        Ok(Some(header)) => Ok(Lookup::Found { size: header.size }),
        Ok(None) => Ok(Lookup::Missing),
        Err(source) => Err(Error::Store {
            oid: id.to_owned(),
            source,
        }),
    }
}

/// Resolve every identifier of `request`, in request order.
///
/// Duplicate identifiers are resolved once per occurrence so the result list
/// zips with the request's identifier list. The first store failure aborts
/// the whole batch.
pub fn resolve(store: &impl gix_object::FindHeader, request: &InfoRequest) -> Result<Vec<InfoResult>, Error> {
    request
        .object_ids
        .iter()
        .map(|id| lookup(store, id).map(|lookup| InfoResult { id: *id, lookup }))
        .collect()
}
