//! Pure view derivation: filter, search, sort, top-N.
//!
//! `derive` is a function of its inputs only: no hidden state, identical
//! inputs give identical output. The stages run in a fixed order (category
//! filter, then search, then sort) so that the result count shown by the
//! caller always reflects the final filtered set.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use greennest_core::ValueObject;

use crate::item::CatalogItem;

/// UI sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Requested name ordering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    NameAscending,
    NameDescending,
}

/// The active filter/sort/search selection, owned by the caller and passed
/// by value into every recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewCriteria {
    /// Exact-match category filter. `None`, the empty string and the
    /// [`ALL_CATEGORIES`] sentinel all mean "show everything".
    pub category: Option<String>,
    pub sort: Option<SortKey>,
    /// Case-insensitive substring query against name and excerpt/description.
    pub search: Option<String>,
}

impl ViewCriteria {
    /// Everything, source order.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    fn category_filter(&self) -> Option<&str> {
        match self.category.as_deref() {
            None | Some("") | Some(ALL_CATEGORIES) => None,
            Some(category) => Some(category),
        }
    }

    fn search_filter(&self) -> Option<&str> {
        match self.search.as_deref() {
            None | Some("") => None,
            Some(query) => Some(query),
        }
    }
}

impl ValueObject for ViewCriteria {}

/// Derive the displayable subset/order of `items` under `criteria`.
///
/// Stage order is fixed: category filter, search filter, sort. With no sort
/// key the post-filter source order is preserved; sorting is stable, so
/// items with equal keys keep their relative source order.
pub fn derive(items: &[CatalogItem], criteria: &ViewCriteria) -> Vec<CatalogItem> {
    let category = criteria.category_filter();
    let search = criteria.search_filter().map(str::to_lowercase);

    let mut result: Vec<CatalogItem> = items
        .iter()
        .filter(|item| category.is_none_or(|c| item.category == c))
        .filter(|item| search.as_deref().is_none_or(|q| matches_search(item, q)))
        .cloned()
        .collect();

    match criteria.sort {
        Some(SortKey::NameAscending) => result.sort_by(|a, b| name_order(a, b)),
        Some(SortKey::NameDescending) => result.sort_by(|a, b| name_order(b, a)),
        None => {}
    }

    result
}

/// The `n` best-rated items, best first. Unrated items rank below every
/// rated one; the sort is stable, so equally-rated items keep source order.
/// `n` past the end returns the whole collection ranked.
pub fn top_rated(items: &[CatalogItem], n: usize) -> Vec<CatalogItem> {
    let mut ranked = items.to_vec();
    ranked.sort_by(|a, b| effective_rating(b).total_cmp(&effective_rating(a)));
    ranked.truncate(n);
    ranked
}

/// The single best-rated item ("plant of the week"); `None` on an empty
/// collection.
pub fn featured(items: &[CatalogItem]) -> Option<CatalogItem> {
    top_rated(items, 1).into_iter().next()
}

/// Distinct categories in first-seen order (feeds the filter dropdown).
/// Items with no category are skipped.
pub fn categories(items: &[CatalogItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !item.category.is_empty() && !seen.iter().any(|c| *c == item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

/// Case-insensitive name ordering, original spelling as the tie-break so
/// equal-ignoring-case names still order deterministically.
fn name_order(a: &CatalogItem, b: &CatalogItem) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

fn matches_search(item: &CatalogItem, lowered_query: &str) -> bool {
    let in_field = |field: Option<&str>| {
        field.is_some_and(|text| text.to_lowercase().contains(lowered_query))
    };
    item.name.to_lowercase().contains(lowered_query)
        || in_field(item.excerpt.as_deref())
        || in_field(item.description.as_deref())
}

fn effective_rating(item: &CatalogItem) -> f64 {
    item.rating.unwrap_or(f64::NEG_INFINITY)
}
