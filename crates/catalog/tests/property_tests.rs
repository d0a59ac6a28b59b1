//! Properties every catalog query must hold, checked over the sample data

use jaigurudev_catalog::sample::sample_catalog;
use jaigurudev_catalog::{ContentCatalog, SearchRequest, Shelf};
use jaigurudev_core::{Content, ContentType, Rated, Timestamp};

fn catalog() -> ContentCatalog {
    sample_catalog(Timestamp::now()).expect("sample catalog is valid")
}

const QUERIES: &[&str] = &[
    "", "a", "gita", "GITA", "krishna", "om", "meditation", "Sacred", "children", "zzz", "q&a", " ",
];

fn assert_lookup_property<T: Content>(shelf: &Shelf<T>, content_type: ContentType, catalog: &ContentCatalog) {
    for item in shelf.iter() {
        let id = item.id().as_str();
        assert!(catalog.is_valid_id(id, content_type), "{} {} should be valid", content_type, id);
        let found = shelf.get(id).expect("id from the shelf resolves");
        assert_eq!(found.id(), item.id());
    }
}

fn assert_search_property<T: Rated + PartialEq>(shelf: &Shelf<T>) {
    for query in QUERIES {
        let needle = query.to_lowercase();
        for hit in shelf.search(query) {
            assert!(shelf.all().contains(hit), "search hit must come from the shelf");
            assert!(
                hit.title().to_lowercase().contains(&needle)
                    || hit.secondary().to_lowercase().contains(&needle)
                    || hit.tags().iter().any(|t| t.to_lowercase().contains(&needle)),
                "'{}' does not contain '{}'",
                hit.title(),
                query
            );
        }
    }
}

fn assert_popular_property<T: Rated>(shelf: &Shelf<T>) {
    for limit in 0..=shelf.len() + 2 {
        let popular = shelf.popular(limit);
        assert!(popular.len() <= limit);
        assert_eq!(popular.len(), limit.min(shelf.len()));
        for pair in popular.windows(2) {
            assert!(pair[0].popularity_score() >= pair[1].popularity_score());
        }
    }
}

fn assert_recommended_property<T: Rated>(shelf: &Shelf<T>) {
    for seed in shelf.iter() {
        for limit in [0, 1, 3, 10] {
            let recommended = shelf.recommended(seed.id().as_str(), limit);
            assert!(recommended.len() <= limit);
            assert!(recommended.iter().all(|item| item.id() != seed.id()));
            for pair in recommended.windows(2) {
                assert!(pair[0].rating() >= pair[1].rating());
            }
        }
    }
}

#[test]
fn property_every_id_resolves() {
    let catalog = catalog();
    assert_lookup_property(catalog.videos(), ContentType::Video, &catalog);
    assert_lookup_property(catalog.music(), ContentType::Music, &catalog);
    assert_lookup_property(catalog.books(), ContentType::Book, &catalog);
    assert_lookup_property(catalog.events(), ContentType::Event, &catalog);
}

#[test]
fn property_search_hits_contain_query() {
    let catalog = catalog();
    assert_search_property(catalog.videos());
    assert_search_property(catalog.music());
    assert_search_property(catalog.books());
}

#[test]
fn property_popular_is_bounded_and_sorted() {
    let catalog = catalog();
    assert_popular_property(catalog.videos());
    assert_popular_property(catalog.music());
    assert_popular_property(catalog.books());
}

#[test]
fn property_trending_never_live() {
    let catalog = catalog();
    for limit in 0..8 {
        let trending = catalog.videos().trending(limit);
        assert!(trending.len() <= limit);
        assert!(trending.iter().all(|video| !video.is_live));
    }
}

#[test]
fn property_recommended_never_contains_seed() {
    let catalog = catalog();
    assert_recommended_property(catalog.videos());
    assert_recommended_property(catalog.music());
    assert_recommended_property(catalog.books());
}

#[test]
fn property_favorites_roundtrip_for_every_record() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = catalog();
    let ids: Vec<(ContentType, String)> = catalog
        .videos()
        .iter()
        .map(|v| (ContentType::Video, v.id.to_string()))
        .chain(catalog.music().iter().map(|m| (ContentType::Music, m.id.to_string())))
        .chain(catalog.books().iter().map(|b| (ContentType::Book, b.id.to_string())))
        .chain(catalog.events().iter().map(|e| (ContentType::Event, e.id.to_string())))
        .collect();

    for (content_type, id) in &ids {
        catalog.add_favorite(id, *content_type)?;
        assert!(catalog.favorites(*content_type).iter().any(|f| f == id.as_str()));

        catalog.remove_favorite(id, *content_type)?;
        assert!(!catalog.favorites(*content_type).iter().any(|f| f == id.as_str()));
    }

    Ok(())
}

#[test]
fn property_search_content_matches_per_type_search() {
    let catalog = catalog();
    for query in QUERIES {
        let results = catalog.search_content(&SearchRequest::new(*query));
        assert_eq!(results.videos, catalog.videos().search(query));
        assert_eq!(results.music, catalog.music().search(query));
        assert_eq!(results.books, catalog.books().search(query));
    }
}
