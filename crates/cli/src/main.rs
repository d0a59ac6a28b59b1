use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use jaigurudev_catalog::{sample::sample_data, CatalogError, ContentCatalog};
use jaigurudev_config::{CatalogConfig, ConfigManager, ConfigSection};
use jaigurudev_core::{AppError, Timestamp};
use std::path::PathBuf;

mod commands;

const CONTENT_TYPES: [&str; 7] = ["video", "videos", "music", "book", "books", "event", "events"];

fn content_type_arg() -> Arg {
    Arg::new("type")
        .required(true)
        .value_name("TYPE")
        .help("Content type: videos, music, books or events")
        .value_parser(CONTENT_TYPES)
}

fn limit_arg() -> Arg {
    Arg::new("limit")
        .short('n')
        .long("limit")
        .value_name("N")
        .help("Maximum number of results (defaults to the configured value)")
        .value_parser(clap::value_parser!(u32).range(1..))
}

fn category_arg() -> Arg {
    Arg::new("category")
        .short('c')
        .long("category")
        .value_name("CATEGORY")
        .help("Only show this category (case-insensitive)")
}

fn language_arg() -> Arg {
    Arg::new("language")
        .short('l')
        .long("language")
        .value_name("LANGUAGE")
        .help("Only show this language (case-insensitive)")
}

fn build_cli() -> Command {
    Command::new("jaigurudev")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Jaigurudev App Team")
        .about("Browse the Jaigurudev catalog of satsang videos, bhajans, books and events")
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .value_name("DIR")
                .help("Directory holding config.toml")
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("list")
                .about("List the records of one content type")
                .arg(content_type_arg())
                .arg(category_arg())
                .arg(language_arg())
                .arg(
                    Arg::new("favorites")
                        .short('f')
                        .long("favorites")
                        .help("Show only favorites")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Search videos, music and books")
                .arg(Arg::new("query").required(true).value_name("QUERY").help("Text to look for in titles, creators and tags"))
                .arg(
                    Arg::new("type")
                        .short('t')
                        .long("type")
                        .value_name("TYPE")
                        .help("Collection to search")
                        .value_parser(["all", "videos", "music", "books"])
                        .default_value("all"),
                )
                .arg(category_arg())
                .arg(language_arg()),
        )
        .subcommand(
            Command::new("info")
                .about("Show everything about one record")
                .arg(content_type_arg())
                .arg(Arg::new("id").required(true).value_name("ID").help("Record id, e.g. v001")),
        )
        .subcommand(
            Command::new("popular")
                .about("Highest rated records of one type")
                .arg(content_type_arg())
                .arg(limit_arg()),
        )
        .subcommand(
            Command::new("recent")
                .about("Most recently added records of one type")
                .arg(content_type_arg())
                .arg(limit_arg()),
        )
        .subcommand(
            Command::new("trending")
                .about("Trending videos by views and rating")
                .arg(limit_arg()),
        )
        .subcommand(
            Command::new("recommend")
                .about("Records similar to a given one")
                .arg(content_type_arg())
                .arg(Arg::new("id").required(true).value_name("ID").help("Record to base recommendations on"))
                .arg(limit_arg()),
        )
        .subcommand(
            Command::new("categories")
                .about("List the categories of one content type")
                .arg(content_type_arg()),
        )
        .subcommand(
            Command::new("events")
                .about("List events in a time window")
                .arg(
                    Arg::new("window")
                        .short('w')
                        .long("window")
                        .value_name("WINDOW")
                        .help("Time window")
                        .value_parser(["upcoming", "week", "month"])
                        .default_value("upcoming"),
                )
                .arg(
                    Arg::new("online")
                        .long("online")
                        .help("Show only online events")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("stats").about("Show catalog statistics"))
        .subcommand(
            Command::new("export")
                .about("Export the whole catalog as JSON")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Output file path")
                        .default_value("catalog_export.json"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage the configuration file")
                .subcommand_required(true)
                .subcommand(Command::new("init").about("Write a default config file if none exists"))
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(Command::new("path").about("Print the config file location")),
        )
}

fn config_manager(matches: &ArgMatches) -> Result<ConfigManager> {
    match matches.get_one::<String>("config-dir") {
        Some(dir) => ConfigManager::with_directory(PathBuf::from(dir))
            .with_context(|| format!("Invalid config directory '{}'", dir)),
        None => ConfigManager::new().context("Could not determine the config directory"),
    }
}

/// The `[catalog]` settings to build with, or the defaults when any is out of range
fn catalog_settings(config: &CatalogConfig) -> CatalogConfig {
    match config.validate() {
        Ok(()) => config.clone(),
        Err(errors) => {
            for error in &errors {
                log::warn!("{}", error);
            }
            log::warn!("Using default catalog settings");
            CatalogConfig::default()
        }
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let manager = config_manager(matches)?;

    // The logger level depends on the config, so a load failure is only
    // reported once the logger exists.
    let loaded = manager.load_with_env_overrides();
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    if matches.get_flag("debug") {
        config.app.debug_mode = true;
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.app.effective_log_level().as_filter()),
    )
    .init();

    if let Err(err) = &loaded {
        log::warn!("Using default configuration: {}", err);
    }

    if let Some(("config", sub_matches)) = matches.subcommand() {
        return commands::config_command(&manager, &config, sub_matches);
    }

    let now = Timestamp::now();
    let catalog = ContentCatalog::new(sample_data(now), catalog_settings(&config.catalog))
        .context("Failed to load the content catalog")?;

    match matches.subcommand() {
        Some(("list", sub_matches)) => commands::list(&catalog, sub_matches),
        Some(("search", sub_matches)) => commands::search(&catalog, sub_matches),
        Some(("info", sub_matches)) => commands::info(&catalog, sub_matches),
        Some(("popular", sub_matches)) => commands::popular(&catalog, sub_matches),
        Some(("recent", sub_matches)) => commands::recent(&catalog, sub_matches),
        Some(("trending", sub_matches)) => commands::trending(&catalog, sub_matches),
        Some(("recommend", sub_matches)) => commands::recommend(&catalog, sub_matches),
        Some(("categories", sub_matches)) => commands::categories(&catalog, sub_matches),
        Some(("events", sub_matches)) => commands::events(&catalog, now, sub_matches),
        Some(("stats", _)) => commands::show_stats(&catalog),
        Some(("export", sub_matches)) => commands::export_catalog(&catalog, sub_matches),
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}

fn report_error(err: &anyhow::Error) {
    let cross = style("✗").red().bold();
    if let Some(catalog_err) = err.downcast_ref::<CatalogError>() {
        let app_err = AppError::from(catalog_err.clone());
        eprintln!("{} {}", cross, app_err.user_message());
        eprintln!("  {}", catalog_err);
    } else if let Some(app_err) = err.downcast_ref::<AppError>() {
        log::debug!("{} error, {}", app_err.severity(), app_err.recovery_action());
        eprintln!("{} {}", cross, app_err.user_message());
        eprintln!("  {}", app_err);
    } else {
        eprintln!("{} {:#}", cross, err);
    }
}

fn main() {
    let matches = build_cli().get_matches();
    if let Err(err) = run(&matches) {
        report_error(&err);
        std::process::exit(1);
    }
}
