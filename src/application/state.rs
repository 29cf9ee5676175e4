// src/application/state.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::CuratorConfig;
use crate::domain::{ResultStore, SourceKind};
use crate::error::AppResult;
use crate::events::{register_activity_handlers, ActivityLog, EventBus};
use crate::integrations::{
    build_http_client, ArtworkDetailFetcher, ClevelandClient, MuseumSource, VamClient,
};
use crate::services::{CollectionService, SearchAggregator, SearchService};

/// Application state shared by every command.
/// All fields are Arc-wrapped; one AppState is one user session.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub activity: Arc<ActivityLog>,
    pub search_service: Arc<SearchService>,
    pub collection_service: Arc<CollectionService>,
}

impl AppState {
    /// Assemble a session from already-built services
    pub fn new(
        event_bus: Arc<EventBus>,
        search_service: Arc<SearchService>,
        collection_service: Arc<CollectionService>,
    ) -> Self {
        let activity = Arc::new(ActivityLog::new());
        register_activity_handlers(&event_bus, Arc::clone(&activity));

        Self {
            event_bus,
            activity,
            search_service,
            collection_service,
        }
    }

    /// Wire the real museum clients from configuration
    pub fn from_config(config: &CuratorConfig) -> AppResult<Self> {
        // 1. Shared infrastructure
        let event_bus = Arc::new(EventBus::new());
        let http_client = build_http_client(config)?;

        // 2. Museum clients
        let cleveland = Arc::new(ClevelandClient::new(&config.cleveland, http_client.clone()));
        let vam = Arc::new(VamClient::new(&config.vam, http_client));

        let sources: Vec<Arc<dyn MuseumSource>> = vec![
            cleveland as Arc<dyn MuseumSource>,
            Arc::clone(&vam) as Arc<dyn MuseumSource>,
        ];
        let mut detail_fetchers: HashMap<SourceKind, Arc<dyn ArtworkDetailFetcher>> =
            HashMap::new();
        detail_fetchers.insert(SourceKind::Vam, vam);

        // 3. Services share one result store
        let results = Arc::new(Mutex::new(ResultStore::new()));
        let aggregator = Arc::new(SearchAggregator::new(sources, Arc::clone(&event_bus)));
        let search_service = Arc::new(SearchService::new(
            aggregator,
            Arc::clone(&results),
            Arc::clone(&event_bus),
        ));
        let collection_service = Arc::new(CollectionService::new(
            results,
            detail_fetchers,
            Arc::clone(&event_bus),
        ));

        log::debug!(
            "Session wired: Cleveland at {}, V&A at {}",
            config.cleveland.base_url,
            config.vam.base_url
        );

        Ok(Self::new(event_bus, search_service, collection_service))
    }
}
