//! Fetch failure taxonomy.

use thiserror::Error;

/// Why a catalog load produced nothing.
///
/// A load is all-or-nothing: any of these means no items at all, and the
/// caller presents a loading/error view instead. Recovery is always a fresh
/// explicit action (re-navigating re-fetches); nothing retries on its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The resource was unreachable (DNS, connect, read failure).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body was not a valid item collection.
    #[error("invalid catalog payload: {0}")]
    Decode(String),
}
