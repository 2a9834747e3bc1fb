//! Per-page view models.
//!
//! Each page owns one [`CatalogStore`] (mounted with the page, discarded
//! with it) and whatever criteria its controls expose. Derivation is
//! recomputed from scratch on every read; the stores themselves are
//! read-only after load.

use greennest_catalog::{
    CatalogItem, SortKey, ViewCriteria, categories, derive, featured, top_rated,
};
use greennest_core::ItemId;
use greennest_session::{SessionGate, UserIdentity};
use greennest_store::{CatalogStore, FetchClient, FetchError, LoadPhase};

/// How many items the top-rated strip shows.
pub const TOP_RATED_COUNT: usize = 3;

/// The plants listing: category filter + name sort.
#[derive(Debug)]
pub struct PlantsPage {
    store: CatalogStore,
    criteria: ViewCriteria,
}

impl PlantsPage {
    pub fn new() -> Self {
        Self {
            store: CatalogStore::new(),
            criteria: ViewCriteria::all(),
        }
    }

    pub async fn mount(&mut self, client: &FetchClient) -> bool {
        self.store.load_plants(client, "/plants.json").await
    }

    pub fn unmount(&mut self) {
        self.store.unmount();
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.criteria.category = category;
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.criteria.sort = sort;
    }

    /// The list as currently filtered and sorted.
    pub fn visible(&self) -> Vec<CatalogItem> {
        derive(self.store.items(), &self.criteria)
    }

    /// "Showing N plants" reflects the final filtered set.
    pub fn result_count(&self) -> usize {
        self.visible().len()
    }

    /// Options for the category dropdown, in first-seen order.
    pub fn category_options(&self) -> Vec<String> {
        categories(self.store.items())
    }

    pub fn phase(&self) -> &LoadPhase {
        self.store.phase()
    }

    pub fn load_error(&self) -> Option<&FetchError> {
        self.store.error()
    }
}

impl Default for PlantsPage {
    fn default() -> Self {
        Self::new()
    }
}

/// The blog listing: category filter + free-text search.
#[derive(Debug)]
pub struct BlogPage {
    store: CatalogStore,
    criteria: ViewCriteria,
}

impl BlogPage {
    pub fn new() -> Self {
        Self {
            store: CatalogStore::new(),
            criteria: ViewCriteria::all(),
        }
    }

    pub async fn mount(&mut self, client: &FetchClient) -> bool {
        self.store.load_blogs(client, "/blogs.json").await
    }

    pub fn unmount(&mut self) {
        self.store.unmount();
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.criteria.category = category;
    }

    pub fn set_search(&mut self, query: Option<String>) {
        self.criteria.search = query;
    }

    pub fn visible(&self) -> Vec<CatalogItem> {
        derive(self.store.items(), &self.criteria)
    }

    pub fn result_count(&self) -> usize {
        self.visible().len()
    }

    pub fn category_options(&self) -> Vec<String> {
        categories(self.store.items())
    }

    pub fn load_error(&self) -> Option<&FetchError> {
        self.store.error()
    }
}

impl Default for BlogPage {
    fn default() -> Self {
        Self::new()
    }
}

/// The home page's "top rated" strip.
#[derive(Debug)]
pub struct TopRatedSection {
    store: CatalogStore,
}

impl TopRatedSection {
    pub fn new() -> Self {
        Self {
            store: CatalogStore::new(),
        }
    }

    pub async fn mount(&mut self, client: &FetchClient) -> bool {
        self.store.load_plants(client, "/plants.json").await
    }

    pub fn unmount(&mut self) {
        self.store.unmount();
    }

    pub fn top(&self) -> Vec<CatalogItem> {
        top_rated(self.store.items(), TOP_RATED_COUNT)
    }
}

impl Default for TopRatedSection {
    fn default() -> Self {
        Self::new()
    }
}

/// The plant-of-the-week feature: the single best-rated plant.
#[derive(Debug)]
pub struct PlantOfTheWeekPage {
    store: CatalogStore,
}

impl PlantOfTheWeekPage {
    pub fn new() -> Self {
        Self {
            store: CatalogStore::new(),
        }
    }

    pub async fn mount(&mut self, client: &FetchClient) -> bool {
        self.store.load_plants(client, "/plants.json").await
    }

    pub fn unmount(&mut self) {
        self.store.unmount();
    }

    pub fn featured(&self) -> Option<CatalogItem> {
        featured(self.store.items())
    }
}

impl Default for PlantOfTheWeekPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Detail pages look one item up by its path id.
#[derive(Debug)]
pub struct DetailPage {
    store: CatalogStore,
}

impl DetailPage {
    pub fn new() -> Self {
        Self {
            store: CatalogStore::new(),
        }
    }

    pub async fn mount_plant(&mut self, client: &FetchClient) -> bool {
        self.store.load_plants(client, "/plants.json").await
    }

    pub async fn mount_blog(&mut self, client: &FetchClient) -> bool {
        self.store.load_blogs(client, "/blogs.json").await
    }

    pub fn unmount(&mut self) {
        self.store.unmount();
    }

    pub fn find(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.store.items().iter().find(|item| item.id == *id)
    }
}

impl Default for DetailPage {
    fn default() -> Self {
        Self::new()
    }
}

/// What the profile screen shows for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl From<&UserIdentity> for ProfileView {
    fn from(identity: &UserIdentity) -> Self {
        Self {
            display_name: identity.display_name.clone(),
            email: identity.email.clone(),
            photo_url: identity.photo_url.clone(),
        }
    }
}

/// Snapshot the profile from the gate; `None` unless authenticated.
pub fn profile_view(gate: &SessionGate) -> Option<ProfileView> {
    gate.identity().map(ProfileView::from)
}
