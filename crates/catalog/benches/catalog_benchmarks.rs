//! Benchmarks for catalog queries
//!
//! Run with: cargo bench --package jaigurudev-catalog

use criterion::{criterion_group, criterion_main, Criterion};
use jaigurudev_catalog::sample::{sample_books, sample_data, sample_music, sample_videos};
use jaigurudev_catalog::{parse_view_count, CatalogData, ContentCatalog, SearchRequest};
use jaigurudev_config::CatalogConfig;
use jaigurudev_core::{ContentId, Timestamp};
use std::hint::black_box;

/// Sample records repeated with fresh ids, roughly 2,000 per type
fn large_catalog() -> ContentCatalog {
    let mut data = CatalogData::default();
    for copy in 0..400 {
        data.videos.extend(sample_videos().into_iter().map(|mut v| {
            v.id = ContentId::new(format!("{}-{}", v.id, copy));
            v
        }));
        data.music.extend(sample_music().into_iter().map(|mut m| {
            m.id = ContentId::new(format!("{}-{}", m.id, copy));
            m
        }));
        data.books.extend(sample_books().into_iter().map(|mut b| {
            b.id = ContentId::new(format!("{}-{}", b.id, copy));
            b
        }));
    }
    ContentCatalog::new(data, CatalogConfig::default()).expect("valid benchmark catalog")
}

fn bench_catalog_build(c: &mut Criterion) {
    c.bench_function("catalog_build_sample", |b| {
        b.iter(|| {
            let catalog = ContentCatalog::new(
                sample_data(Timestamp::from_millis(0)),
                CatalogConfig::default(),
            );
            black_box(catalog)
        });
    });
}

fn bench_search(c: &mut Criterion) {
    let catalog = large_catalog();

    c.bench_function("search_videos_large", |b| {
        b.iter(|| black_box(catalog.videos().search(black_box("gita")).len()));
    });

    c.bench_function("search_content_large", |b| {
        let request = SearchRequest::new("mantra").with_language("sanskrit");
        b.iter(|| black_box(catalog.search_content(&request).total()));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let catalog = large_catalog();

    c.bench_function("popular_music_large", |b| {
        b.iter(|| black_box(catalog.music().popular(10).len()));
    });

    c.bench_function("trending_videos_large", |b| {
        b.iter(|| black_box(catalog.videos().trending(10).len()));
    });

    c.bench_function("recommended_books_large", |b| {
        b.iter(|| black_box(catalog.books().recommended("b001-0", 5).len()));
    });
}

fn bench_view_parsing(c: &mut Criterion) {
    let inputs = ["125K", "1.2K", "1,234,567", "2M", "LIVE", "  89k "];

    c.bench_function("parse_view_count", |b| {
        b.iter(|| {
            for input in inputs {
                black_box(parse_view_count(black_box(input)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_catalog_build,
    bench_search,
    bench_ranking,
    bench_view_parsing
);
criterion_main!(benches);
