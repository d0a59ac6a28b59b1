//! Fuzzing harness for catalog search
//!
//! Hits are checked against plain ASCII and literal comparisons rather than
//! the matcher search itself uses:
//! - an ASCII query must appear, ignoring ASCII case, in every hit
//! - every record holding the query verbatim must be a hit
//!
//! Run with: cargo fuzz run catalog_search

#![no_main]
use jaigurudev_catalog::sample::sample_catalog;
use jaigurudev_catalog::Shelf;
use jaigurudev_core::{Content, Rated, Timestamp};
use libfuzzer_sys::fuzz_target;

fn fields<T: Rated>(item: &T) -> impl Iterator<Item = &str> {
    [item.title(), item.secondary()]
        .into_iter()
        .chain(item.tags().iter().map(String::as_str))
}

fn check<T: Rated>(shelf: &Shelf<T>, query: &str) {
    let hits = shelf.search(query);

    if query.is_ascii() {
        let needle = query.to_ascii_lowercase();
        for hit in &hits {
            assert!(
                fields(*hit).any(|field| field.to_ascii_lowercase().contains(&needle)),
                "'{}' does not contain '{}'",
                hit.title(),
                query
            );
        }
    }

    for item in shelf.iter() {
        if fields(item).any(|field| field.contains(query)) {
            assert!(
                hits.iter().any(|hit| hit.id() == item.id()),
                "'{}' holds '{}' but was not found",
                item.title(),
                query
            );
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(query) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(catalog) = sample_catalog(Timestamp::from_millis(0)) else {
        return;
    };

    check(catalog.videos(), query);
    check(catalog.music(), query);
    check(catalog.books(), query);
});
