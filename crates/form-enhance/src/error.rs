//! Library error type.
//!
//! Handlers themselves never fail: a grouping whose input, control or
//! validation group cannot be found is skipped. These errors cover caller
//! mistakes at the API boundary instead.

use crate::dom::NodeId;
use std::path::PathBuf;

/// Errors returned by [`Page`](crate::Page), [`Document`](crate::Document) and
/// [`Markers`](crate::Markers) operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The node id does not belong to this document.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// The operation needs an element but the node is text or the document.
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// A submission was requested for a node outside any `<form>`.
    #[error("node {0} is not inside a form")]
    NoEnclosingForm(NodeId),

    /// No element carries the requested `id` attribute.
    #[error("no element with id `{0}`")]
    MissingId(String),

    /// Marker configuration failed validation.
    #[error("invalid markers: {0}")]
    InvalidMarkers(String),

    /// Marker configuration is not valid JSON.
    #[error("failed to parse markers: {0}")]
    MarkersJson(#[from] serde_json::Error),

    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
