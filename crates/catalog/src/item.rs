//! Canonical catalog item model.

use serde::{Deserialize, Serialize};

use greennest_core::ItemId;

/// One displayable catalog entry (a plant or a blog post).
///
/// Items are read-only after load: the view logic never mutates, adds, or
/// removes entries, it reflects exactly what the source returned at fetch
/// time. The derivation in [`crate::view`] only inspects `id`, `name`,
/// `category`, `rating`, `description` and `excerpt`; every other field is
/// carried through unmodified for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,

    /// Canonical display name. The wire data spells this `name`, `plantName`
    /// or `title` depending on the record; normalization at decode time
    /// collapses them so consumers never need a fallback chain.
    pub name: String,

    /// Free-form category tag. Not validated against an enum; whatever the
    /// source data carried is accepted verbatim. Empty when absent.
    pub category: String,

    /// Display rating, nominally 0–5 but not enforced. Absent ratings sort
    /// below every present rating in top-N selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_stock: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
}

impl CatalogItem {
    /// Minimal item with everything optional left empty.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            rating: None,
            description: None,
            excerpt: None,
            image: None,
            price: None,
            available_stock: None,
            features: Vec::new(),
            reviews: None,
            author: None,
            date: None,
            read_time: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }
}
