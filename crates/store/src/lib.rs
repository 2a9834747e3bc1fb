//! `greennest-store` — one-shot catalog loading for a single view's lifetime.
//!
//! A [`CatalogStore`] holds the collection one view fetched: load once on
//! mount, read-only until the view goes away, discard on navigation. There
//! is deliberately no cross-view cache and no automatic retry: two views
//! mounting at once fetch the same resource twice, which mirrors the
//! source-of-truth behavior this was built against.

pub mod error;
pub mod fetch;
pub mod store;

pub use error::FetchError;
pub use fetch::FetchClient;
pub use store::{CatalogStore, LoadPhase, LoadTicket};
