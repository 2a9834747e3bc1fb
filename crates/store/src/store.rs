//! View-scoped catalog holder with an explicit load lifecycle.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use greennest_catalog::CatalogItem;

use crate::error::FetchError;
use crate::fetch::FetchClient;

/// Where a store is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready {
        items: Vec<CatalogItem>,
        fetched_at: DateTime<Utc>,
    },
    Failed(FetchError),
}

/// Ties an in-flight fetch to the load generation that started it.
///
/// A completion presenting a ticket from an older generation (a newer load
/// started, or the view unmounted) is discarded instead of being applied to
/// now-stale state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: Uuid,
}

/// In-memory holder of one fetched collection, living exactly as long as
/// the view that mounted it.
///
/// Items are read-only after load: nothing here mutates, adds, or removes
/// entries. There is exactly one writer, the load operation itself.
#[derive(Debug)]
pub struct CatalogStore {
    generation: Uuid,
    mounted: bool,
    phase: LoadPhase,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            generation: Uuid::now_v7(),
            mounted: true,
            phase: LoadPhase::Idle,
        }
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// The loaded collection; empty until a load completes successfully.
    pub fn items(&self) -> &[CatalogItem] {
        match &self.phase {
            LoadPhase::Ready { items, .. } => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.phase {
            LoadPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Start a load. Any previously issued ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation = Uuid::now_v7();
        self.phase = LoadPhase::Loading;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Apply a fetch result, unless it is stale.
    ///
    /// Returns whether the result was applied. Stale results (older ticket,
    /// or the view already unmounted) are dropped on the floor.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<CatalogItem>, FetchError>,
    ) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            tracing::debug!(stale = %ticket.generation, "discarding stale load result");
            return false;
        }

        self.phase = match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "catalog loaded");
                LoadPhase::Ready {
                    items,
                    fetched_at: Utc::now(),
                }
            }
            Err(err) => {
                tracing::warn!(%err, "catalog load failed");
                LoadPhase::Failed(err)
            }
        };
        true
    }

    /// The view went away: whatever is still in flight must not land.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation = Uuid::now_v7();
    }

    /// Fetch plants and apply the result (begin → fetch → complete).
    pub async fn load_plants(&mut self, client: &FetchClient, path: &str) -> bool {
        let ticket = self.begin_load();
        let result = client.fetch_plants(path).await;
        self.complete(ticket, result)
    }

    /// Fetch blogs and apply the result.
    pub async fn load_blogs(&mut self, client: &FetchClient, path: &str) -> bool {
        let ticket = self.begin_load();
        let result = client.fetch_blogs(path).await;
        self.complete(ticket, result)
    }
}
