//! `greennest-catalog` — catalog item model and the view derivation logic.
//!
//! This crate is **pure**: it decodes wire records into canonical
//! [`CatalogItem`]s and derives displayable views (filter / sort / search /
//! top-rated) from an already-loaded collection. Fetching lives in
//! `greennest-store`; rendering lives with the caller.

pub mod item;
pub mod record;
pub mod view;

pub use item::CatalogItem;
pub use record::{decode_blogs, decode_plants};
pub use view::{ALL_CATEGORIES, SortKey, ViewCriteria, categories, derive, featured, top_rated};
