//! Integration tests for the configuration system

use jaigurudev_config::{
    AppConfig, CatalogConfig, Config, ConfigManager, ConfigSection, LogLevel, CONFIG_VERSION,
};
use tempfile::TempDir;

fn setup_test_manager() -> Result<(TempDir, ConfigManager), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();
    let temp_dir = TempDir::new()?;
    let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf())?;
    Ok((temp_dir, manager))
}

#[test]
fn test_full_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    assert!(manager.initialize()?);

    let config = manager.load()?;
    assert_eq!(config.version, CONFIG_VERSION);

    let mut modified = config.clone();
    modified.catalog.popular_limit = 12;
    modified.app.log_level = LogLevel::Debug;
    manager.save(&modified)?;

    let reloaded = manager.load()?;
    assert_eq!(reloaded.catalog.popular_limit, 12);
    assert_eq!(reloaded.app.log_level, LogLevel::Debug);

    manager.reset()?;
    assert_eq!(manager.load()?, Config::default());

    Ok(())
}

#[test]
fn test_config_validation_integration() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    manager.save(&Config::default())?;
    assert!(manager.validate()?.is_empty());

    let mut invalid = Config::default();
    invalid.catalog.max_limit = 5;
    invalid.catalog.popular_limit = 10;
    assert!(manager.save(&invalid).is_err());

    Ok(())
}

#[test]
fn test_validate_reports_hand_edited_problems() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;
    std::fs::create_dir_all(manager.config_dir())?;
    std::fs::write(
        manager.config_path(),
        "[catalog]\nrecent_limit = 0\ntrending_limit = 0\n",
    )?;

    let problems = manager.validate()?;
    assert_eq!(problems.len(), 2);
    assert!(problems.iter().any(|p| p.contains("catalog.recent_limit")));

    Ok(())
}

#[test]
fn test_backup_holds_previous_version() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    manager.save(&Config::default())?;
    manager.update(|config| config.catalog.recommended_limit = 9)?;

    let backup = std::fs::read_to_string(manager.backup_path())?;
    let previous: Config = toml::from_str(&backup)?;
    assert_eq!(previous.catalog.recommended_limit, 5);
    assert_eq!(manager.load()?.catalog.recommended_limit, 9);

    Ok(())
}

#[test]
fn test_section_names() {
    assert_eq!(AppConfig::default().section_name(), "app");
    assert_eq!(CatalogConfig::default().section_name(), "catalog");
}

#[test]
fn test_saved_file_is_readable_toml() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;
    manager.save(&Config::default())?;

    let contents = std::fs::read_to_string(manager.config_path())?;
    assert!(contents.contains("[app]"));
    assert!(contents.contains("[catalog]"));
    assert!(contents.contains("log_level = \"info\""));

    Ok(())
}
