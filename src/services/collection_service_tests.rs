// src/services/collection_service_tests.rs
//
// Collection Service Tests
//
// Detail fetches use the mockall-generated MockArtworkDetailFetcher so
// each test states exactly how many fetches it expects.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use crate::domain::{Artwork, ArtworkDetail, ResultStore, SortOption, SourceKind};
    use crate::error::AppError;
    use crate::events::EventBus;
    use crate::integrations::{ArtworkDetailFetcher, MockArtworkDetailFetcher};
    use crate::services::{CollectionService, EnrichOutcome, SelectionToggle};

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    fn vam(native_id: &str, title: &str) -> Artwork {
        Artwork::new(SourceKind::Vam, native_id, Some(title.to_string()), None, None)
    }

    fn cleveland(native_id: &str, title: &str) -> Artwork {
        let mut artwork =
            Artwork::new(SourceKind::Cleveland, native_id, Some(title.to_string()), None, None);
        artwork.description = Some("Already described".to_string());
        artwork
    }

    fn seeded_results(artworks: Vec<Artwork>) -> Arc<Mutex<ResultStore>> {
        let mut store = ResultStore::new();
        let request = store.begin_search("teapot");
        store.complete_page(request.generation, artworks, &[]);
        Arc::new(Mutex::new(store))
    }

    fn service_with(
        results: Arc<Mutex<ResultStore>>,
        fetcher: MockArtworkDetailFetcher,
    ) -> (CollectionService, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let mut fetchers: HashMap<SourceKind, Arc<dyn ArtworkDetailFetcher>> = HashMap::new();
        fetchers.insert(SourceKind::Vam, Arc::new(fetcher));
        let service = CollectionService::new(results, fetchers, Arc::clone(&bus));
        (service, bus)
    }

    fn detail(description: &str) -> ArtworkDetail {
        ArtworkDetail {
            description: Some(description.to_string()),
            materials: Some("Lead-glazed earthenware".to_string()),
        }
    }

    fn ids(artworks: &[Artwork]) -> Vec<&str> {
        artworks.iter().map(|a| a.id.as_str()).collect()
    }

    fn event_types(bus: &EventBus) -> Vec<String> {
        bus.get_event_log().into_iter().map(|e| e.event_type).collect()
    }

    // ========================================================================
    // SELECTION AND COMMIT
    // ========================================================================

    #[test]
    fn test_commit_preserves_selection_order_and_clears() {
        let results = seeded_results(vec![vam("O1", "Teapot"), vam("O2", "Cup")]);
        let (service, bus) = service_with(results, MockArtworkDetailFetcher::new());

        service.toggle_selection(vam("O2", "Cup"));
        service.toggle_selection(vam("O1", "Teapot"));
        assert!(service.is_selected("vam-O2"));

        let summary = service.commit_selection();

        assert_eq!(summary.added, vec!["vam-O2", "vam-O1"]);
        assert_eq!(summary.skipped, 0);
        assert_eq!(ids(&service.collection(None)), vec!["vam-O2", "vam-O1"]);
        assert!(service.selection().is_empty());
        assert_eq!(event_types(&bus), vec!["SelectionCommitted"]);
    }

    #[test]
    fn test_toggle_rejected_for_collected_artwork() {
        let (service, _bus) = service_with(seeded_results(vec![]), MockArtworkDetailFetcher::new());

        service.toggle_selection(vam("O1", "Teapot"));
        service.commit_selection();

        assert_eq!(
            service.toggle_selection(vam("O1", "Teapot")),
            SelectionToggle::AlreadyCollected
        );
        assert!(!service.is_selected("vam-O1"));
        assert_eq!(service.collection(None).len(), 1);
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let (service, _bus) = service_with(seeded_results(vec![]), MockArtworkDetailFetcher::new());

        assert_eq!(service.toggle_selection(vam("O1", "Teapot")), SelectionToggle::Selected);
        assert_eq!(service.toggle_selection(vam("O1", "Teapot")), SelectionToggle::Deselected);
        assert!(service.selection().is_empty());
    }

    #[test]
    fn test_empty_commit_is_noop() {
        let (service, bus) = service_with(seeded_results(vec![]), MockArtworkDetailFetcher::new());

        let summary = service.commit_selection();

        assert!(summary.added.is_empty());
        assert!(service.collection(None).is_empty());
        assert!(bus.get_event_log().is_empty());
    }

    #[test]
    fn test_remove_and_update() {
        let (service, bus) = service_with(seeded_results(vec![]), MockArtworkDetailFetcher::new());
        service.toggle_selection(vam("O1", "Teapot"));
        service.toggle_selection(vam("O2", "Cup"));
        service.commit_selection();

        assert!(!service.remove("vam-O9"));
        assert!(service.remove("vam-O1"));
        assert!(!service.is_in_collection("vam-O1"));

        let mut renamed = vam("O2", "Tea cup");
        renamed.description = Some("Porcelain".to_string());
        assert!(service.update_collection_item(renamed));
        assert!(!service.update_collection_item(vam("O3", "Saucer")));
        assert_eq!(service.collection(None)[0].title, "Tea cup");

        assert_eq!(
            event_types(&bus),
            vec!["SelectionCommitted", "ArtworkRemoved"]
        );
    }

    #[test]
    fn test_collection_sorted_view() {
        let (service, _bus) = service_with(seeded_results(vec![]), MockArtworkDetailFetcher::new());
        service.toggle_selection(vam("O1", "Vase"));
        service.toggle_selection(vam("O2", "Bowl"));
        service.commit_selection();

        let sorted = service.collection(Some(SortOption::TitleAsc));
        assert_eq!(ids(&sorted), vec!["vam-O2", "vam-O1"]);
        assert_eq!(ids(&service.collection(None)), vec!["vam-O1", "vam-O2"]);
    }

    // ========================================================================
    // ITEM VIEW
    // ========================================================================

    #[test]
    fn test_find_artwork_falls_back_to_collection() {
        let results = seeded_results(vec![vam("O1", "Teapot")]);
        let (service, _bus) = service_with(Arc::clone(&results), MockArtworkDetailFetcher::new());
        service.toggle_selection(vam("O1", "Teapot"));
        service.commit_selection();

        results.lock().unwrap().begin_search("something else");

        assert_eq!(service.find_artwork("vam-O1").unwrap().title, "Teapot");
        assert!(service.view_item("vam-O1").is_ok());
        assert!(matches!(service.view_item("vam-O404"), Err(AppError::NotFound)));
    }

    // ========================================================================
    // ENRICHMENT
    // ========================================================================

    #[tokio::test]
    async fn test_enrich_fetches_once_and_updates_every_copy() {
        let results = seeded_results(vec![vam("O1", "Teapot")]);
        let mut fetcher = MockArtworkDetailFetcher::new();
        fetcher
            .expect_fetch_detail()
            .times(1)
            .returning(|_| Ok(detail("Teapot with chinoiserie decoration")));
        let (service, bus) = service_with(Arc::clone(&results), fetcher);

        service.toggle_selection(vam("O1", "Teapot"));
        service.commit_selection();

        let first = service.enrich("vam-O1").await.unwrap();
        let second = service.enrich("vam-O1").await.unwrap();

        let EnrichOutcome::Enriched(enriched) = first else {
            panic!("expected enrichment, got {:?}", first);
        };
        assert_eq!(
            enriched.description.as_deref(),
            Some("Teapot with chinoiserie decoration")
        );
        assert_eq!(second, EnrichOutcome::NotNeeded);

        let in_results = results.lock().unwrap().get("vam-O1").cloned().unwrap();
        let in_collection = service.collection(None)[0].clone();
        assert_eq!(in_results.description, enriched.description);
        assert_eq!(in_collection.description, enriched.description);
        assert_eq!(
            in_collection.materials.as_deref(),
            Some("Lead-glazed earthenware")
        );
        assert!(event_types(&bus).contains(&"ArtworkEnriched".to_string()));
    }

    #[tokio::test]
    async fn test_failed_enrichment_is_not_retried_within_a_view() {
        let results = seeded_results(vec![vam("O1", "Teapot")]);
        let mut fetcher = MockArtworkDetailFetcher::new();
        fetcher.expect_fetch_detail().times(1).returning(|_| {
            Err(AppError::Upstream {
                museum: SourceKind::Vam,
                status: 404,
            })
        });
        let (service, bus) = service_with(Arc::clone(&results), fetcher);

        let first = service.enrich("vam-O1").await.unwrap();
        let second = service.enrich("vam-O1").await.unwrap();

        assert!(matches!(first, EnrichOutcome::Failed(_)));
        assert_eq!(second, EnrichOutcome::AlreadyAttempted);

        let untouched = results.lock().unwrap().get("vam-O1").cloned().unwrap();
        assert_eq!(untouched.description, None);
        assert!(event_types(&bus).contains(&"EnrichmentFailed".to_string()));
    }

    #[tokio::test]
    async fn test_new_item_view_allows_one_more_attempt() {
        let results = seeded_results(vec![vam("O1", "Teapot")]);
        let mut fetcher = MockArtworkDetailFetcher::new();
        fetcher
            .expect_fetch_detail()
            .times(2)
            .returning(|_| Err(AppError::Other("offline".to_string())));
        let (service, _bus) = service_with(results, fetcher);

        service.view_item("vam-O1").unwrap();
        service.enrich("vam-O1").await.unwrap();
        assert_eq!(
            service.enrich("vam-O1").await.unwrap(),
            EnrichOutcome::AlreadyAttempted
        );

        service.view_item("vam-O1").unwrap();
        assert!(matches!(
            service.enrich("vam-O1").await.unwrap(),
            EnrichOutcome::Failed(_)
        ));
    }

    #[tokio::test]
    async fn test_source_without_deferred_detail_is_not_fetched() {
        let results = seeded_results(vec![cleveland("1", "Twilight")]);
        let mut fetcher = MockArtworkDetailFetcher::new();
        fetcher.expect_fetch_detail().times(0);
        let (service, _bus) = service_with(results, fetcher);

        assert_eq!(
            service.enrich("cleveland-1").await.unwrap(),
            EnrichOutcome::NotNeeded
        );
    }

    #[tokio::test]
    async fn test_enrich_unknown_id_is_not_found() {
        let (service, _bus) = service_with(seeded_results(vec![]), MockArtworkDetailFetcher::new());
        assert!(matches!(
            service.enrich("vam-O404").await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_enrich_updates_collection_after_results_moved_on() {
        let results = seeded_results(vec![vam("O1", "Teapot")]);
        let mut fetcher = MockArtworkDetailFetcher::new();
        fetcher
            .expect_fetch_detail()
            .times(1)
            .returning(|_| Ok(detail("Saved teapot")));
        let (service, _bus) = service_with(Arc::clone(&results), fetcher);

        service.toggle_selection(vam("O1", "Teapot"));
        service.commit_selection();
        results.lock().unwrap().begin_search("chairs");

        let outcome = service.enrich("vam-O1").await.unwrap();

        assert!(matches!(outcome, EnrichOutcome::Enriched(_)));
        assert_eq!(
            service.collection(None)[0].description.as_deref(),
            Some("Saved teapot")
        );
        assert!(results.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_saved_details_reach_a_later_search_copy() {
        let results = seeded_results(vec![vam("O1", "Teapot")]);
        let mut fetcher = MockArtworkDetailFetcher::new();
        fetcher
            .expect_fetch_detail()
            .times(1)
            .returning(|_| Ok(detail("Saved teapot")));
        let (service, _bus) = service_with(Arc::clone(&results), fetcher);

        service.toggle_selection(vam("O1", "Teapot"));
        service.commit_selection();
        service.enrich("vam-O1").await.unwrap();

        {
            let mut store = results.lock().unwrap();
            let request = store.begin_search("teapot");
            store.complete_page(request.generation, vec![vam("O1", "Teapot")], &[]);
            assert_eq!(store.get("vam-O1").unwrap().description, None);
        }

        service.view_item("vam-O1").unwrap();
        let outcome = service.enrich("vam-O1").await.unwrap();

        assert!(matches!(outcome, EnrichOutcome::Enriched(_)));
        let in_results = results.lock().unwrap().get("vam-O1").cloned().unwrap();
        assert_eq!(in_results.description.as_deref(), Some("Saved teapot"));
        assert_eq!(
            in_results.materials.as_deref(),
            Some("Lead-glazed earthenware")
        );
        assert_eq!(
            service.collection(None)[0].description,
            in_results.description
        );
    }
}
