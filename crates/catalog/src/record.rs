//! Wire records and load-time normalization.
//!
//! The fixture JSON is loosely shaped: plants carry `plantId`/`plantName` or
//! `id`/`name` depending on the record, blogs use `title` instead of a name,
//! and any field may simply be missing. All of that is resolved here, once,
//! so the rest of the crate only ever sees [`CatalogItem`]s with canonical
//! fields. No schema validation beyond what serde needs to decode: unknown
//! fields are ignored, absent fields become "no value".

use serde::Deserialize;

use greennest_core::ItemId;

use crate::item::CatalogItem;

/// A plant as it appears in `plants.json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlantRecord {
    #[serde(default)]
    plant_id: Option<ItemId>,
    #[serde(default)]
    id: Option<ItemId>,
    #[serde(default)]
    plant_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    available_stock: Option<u32>,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    reviews: Option<u32>,
}

impl PlantRecord {
    /// Collapse the shape-shifting wire fields into the canonical item.
    ///
    /// `position` backs the id when the record carried none, keeping the
    /// result deterministic for id-less data.
    fn normalize(self, position: usize) -> CatalogItem {
        CatalogItem {
            id: self
                .plant_id
                .or(self.id)
                .unwrap_or(ItemId::Int(position as i64)),
            name: self.name.or(self.plant_name).unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            rating: self.rating,
            description: self.description,
            excerpt: None,
            image: self.image,
            price: self.price,
            available_stock: self.available_stock,
            features: self.features,
            reviews: self.reviews,
            author: None,
            date: None,
            read_time: None,
        }
    }
}

/// A post as it appears in `blogs.json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlogRecord {
    #[serde(default)]
    id: Option<ItemId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    read_time: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

impl BlogRecord {
    fn normalize(self, position: usize) -> CatalogItem {
        CatalogItem {
            id: self.id.unwrap_or(ItemId::Int(position as i64)),
            name: self.title.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            rating: None,
            description: None,
            excerpt: self.excerpt,
            image: self.image,
            price: None,
            available_stock: None,
            features: Vec::new(),
            reviews: None,
            author: self.author,
            date: self.date,
            read_time: self.read_time,
        }
    }
}

/// Decode a `plants.json` payload into canonical items.
///
/// All-or-nothing: one malformed element fails the whole collection, no
/// partial results.
pub fn decode_plants(bytes: &[u8]) -> Result<Vec<CatalogItem>, serde_json::Error> {
    let records: Vec<PlantRecord> = serde_json::from_slice(bytes)?;
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(position, record)| record.normalize(position))
        .collect())
}

/// Decode a `blogs.json` payload into canonical items.
pub fn decode_blogs(bytes: &[u8]) -> Result<Vec<CatalogItem>, serde_json::Error> {
    let records: Vec<BlogRecord> = serde_json::from_slice(bytes)?;
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(position, record)| record.normalize(position))
        .collect())
}
