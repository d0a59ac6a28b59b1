use super::*;
use jaigurudev_catalog::{sample::sample_data, CatalogData, CatalogError};
use jaigurudev_config::CatalogConfig;
use tempfile::TempDir;

const NOW: i64 = 1_700_000_000_000;

fn setup_catalog() -> ContentCatalog {
    ContentCatalog::new(sample_data(Timestamp::from_millis(NOW)), CatalogConfig::default())
        .unwrap()
}

fn sub_matches(args: &[&str]) -> ArgMatches {
    let mut argv = vec!["jaigurudev"];
    argv.extend_from_slice(args);
    let matches = crate::build_cli().try_get_matches_from(argv).unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    sub.clone()
}

fn ids<T: Content>(items: &[&T]) -> Vec<String> {
    items.iter().map(|item| item.id().to_string()).collect()
}

#[test]
fn test_resolve_limit_uses_default() {
    let catalog = setup_catalog();
    let matches = sub_matches(&["popular", "videos"]);
    assert_eq!(resolve_limit(&catalog, &matches, 10), 10);
}

#[test]
fn test_resolve_limit_uses_flag() {
    let catalog = setup_catalog();
    let matches = sub_matches(&["popular", "videos", "--limit", "3"]);
    assert_eq!(resolve_limit(&catalog, &matches, 10), 3);
}

#[test]
fn test_resolve_limit_is_clamped() {
    let config = CatalogConfig {
        popular_limit: 4,
        recent_limit: 4,
        trending_limit: 4,
        recommended_limit: 4,
        max_limit: 4,
        ..CatalogConfig::default()
    };
    let catalog = ContentCatalog::new(sample_data(Timestamp::from_millis(NOW)), config).unwrap();

    let matches = sub_matches(&["trending", "-n", "50"]);
    assert_eq!(resolve_limit(&catalog, &matches, 10), 4);
}

#[test]
fn test_list_rated_filters() {
    let catalog = setup_catalog();

    let satsang = list_rated(&catalog, ContentType::Video, Some("satsang"), None, false);
    assert_eq!(satsang.videos.len(), 2);
    assert!(satsang.music.is_empty());

    let english = list_rated(&catalog, ContentType::Video, None, Some("English"), false);
    assert_eq!(ids(&english.videos), vec!["v002"]);

    let everything = list_rated(&catalog, ContentType::Book, None, None, false);
    assert_eq!(everything.books.len(), 6);
}

#[test]
fn test_list_rated_favorites_only() {
    let catalog = setup_catalog();
    assert!(list_rated(&catalog, ContentType::Music, None, None, true).music.is_empty());

    catalog.add_favorite("m003", ContentType::Music).unwrap();
    let favorites = list_rated(&catalog, ContentType::Music, None, None, true);
    assert_eq!(ids(&favorites.music), vec!["m003"]);
}

#[test]
fn test_list_events_favorites_only() {
    let catalog = setup_catalog();
    assert_eq!(list_events(&catalog, None, false).len(), 5);

    catalog.add_favorite("e002", ContentType::Event).unwrap();
    assert_eq!(ids(&list_events(&catalog, None, true)), vec!["e002"]);
}

#[test]
fn test_list_events_category_ignores_case_in_any_script() {
    let start = Timestamp::from_millis(NOW);
    let data = CatalogData {
        events: vec![
            Event::new("e1", "Evening Satsang", "Satsang", start, start),
            Event::new("e2", "Ωδή", "ΥΜΝΟΣ", start, start),
        ],
        ..CatalogData::default()
    };
    let catalog = ContentCatalog::new(data, CatalogConfig::default()).unwrap();

    assert_eq!(ids(&list_events(&catalog, Some("SATSANG"), false)), vec!["e1"]);
    assert_eq!(ids(&list_events(&catalog, Some("υμνοσ"), false)), vec!["e2"]);
    assert!(list_events(&catalog, Some("bhajan"), false).is_empty());
}

#[test]
fn test_list_events_rejects_language() {
    let catalog = setup_catalog();
    let matches = sub_matches(&["list", "events", "--language", "Hindi"]);
    assert!(list(&catalog, &matches).is_err());
}

#[test]
fn test_select_events_online_only() {
    let catalog = setup_catalog();
    let now = Timestamp::from_millis(NOW);

    let online = select_events(&catalog, now, TimeWindow::Upcoming, true);
    assert!(online.iter().all(|e| e.is_online));
    assert_eq!(online.len(), 3);

    let week = select_events(&catalog, now, TimeWindow::ThisWeek, false);
    assert_eq!(ids(&week), vec!["e003", "e001", "e002", "e004"]);
}

#[test]
fn test_info_unknown_id_fails_with_not_found() {
    let catalog = setup_catalog();
    let matches = sub_matches(&["info", "videos", "v999"]);
    let err = info(&catalog, &matches).unwrap_err();

    let catalog_err = err.downcast_ref::<CatalogError>().unwrap();
    assert!(catalog_err.is_not_found());
}

#[test]
fn test_info_known_id_succeeds() {
    let catalog = setup_catalog();
    let matches = sub_matches(&["info", "book", "b001"]);
    assert!(info(&catalog, &matches).is_ok());
}

#[test]
fn test_recommend_unknown_seed_fails() {
    let catalog = setup_catalog();
    let matches = sub_matches(&["recommend", "music", "m999"]);
    assert!(recommend(&catalog, &matches).is_err());
}

#[test]
fn test_events_are_not_rated() {
    let catalog = setup_catalog();
    let matches = sub_matches(&["popular", "events"]);
    assert!(popular(&catalog, &matches).is_err());
}

#[test]
fn test_category_counts() {
    let catalog = setup_catalog();
    let counts = category_counts(&catalog, ContentType::Video);

    let total: usize = counts.iter().map(|(_, count)| count).sum();
    assert_eq!(total, 5);
    assert!(counts.contains(&("Satsang".to_string(), 2)));
    assert!(counts.windows(2).all(|pair| pair[0].0 < pair[1].0));
}

#[test]
fn test_export_json_contains_catalog() {
    let catalog = setup_catalog();
    catalog.add_favorite("v003", ContentType::Video).unwrap();

    let json = export_json(&catalog).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value["exported_at"].is_string());
    assert_eq!(value["videos"].as_array().unwrap().len(), 5);
    assert_eq!(value["events"].as_array().unwrap().len(), 5);
    assert_eq!(value["favorites"]["video"][0], "v003");
    assert_eq!(value["stats"]["total_books"], 6);
}

#[test]
fn test_export_writes_file() {
    let catalog = setup_catalog();
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("export.json");
    let output_str = output.to_str().unwrap();

    let matches = sub_matches(&["export", "--output", output_str]);
    export_catalog(&catalog, &matches).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"v001\""));
}

#[test]
fn test_config_init_creates_file_once() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_directory(dir.path().to_path_buf()).unwrap();
    let config = Config::default();

    let matches = sub_matches(&["config", "init"]);
    config_command(&manager, &config, &matches).unwrap();
    assert!(manager.config_path().exists());

    let before = std::fs::read_to_string(manager.config_path()).unwrap();
    config_command(&manager, &config, &matches).unwrap();
    let after = std::fs::read_to_string(manager.config_path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_format_time() {
    let formatted = format_time(Timestamp::from_millis(NOW));
    assert!(formatted.contains("2023"));
    assert_eq!(format_time(Timestamp::from_millis(i64::MAX)), "unknown time");
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("videos"), "Videos");
    assert_eq!(capitalize(""), "");
}
