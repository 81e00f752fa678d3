//! # rota-core
//!
//! Shared contract for the Rota gateway: the loosely-typed record shape the
//! scheduling service exchanges, the timestamp display rules applied before
//! records leave the gateway, and the search/sort shaping applied to listings.

pub mod fields;
pub mod time;
pub mod view;

/// A service record: an ordered JSON object with string keys.
///
/// The scheduling service adds and renames fields between releases, so
/// records stay schemaless end to end. Field names that carry behavior
/// (timestamps, sort keys) live in [`fields`].
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
