use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use clap::ArgMatches;
use console::style;
use jaigurudev_catalog::{
    CatalogSnapshot, ContentCatalog, SearchRequest, SearchResults, SearchScope, TimeWindow,
};
use jaigurudev_config::{Config, ConfigManager};
use jaigurudev_core::{
    eq_ignore_case, AppError, Book, Content, ContentType, Event, Music, Timestamp, Video,
};
use serde::Serialize;

/// One-line and detailed renderings of a record
trait Render {
    fn headline(&self) -> String;

    fn summary(&self) -> String;

    fn details(&self) -> Vec<(&'static str, String)>;
}

impl Render for Video {
    fn headline(&self) -> String {
        let live = if self.is_live {
            format!(" {}", style("● LIVE").red().bold())
        } else {
            String::new()
        };
        format!("{}{}", style(&self.title).bold(), live)
    }

    fn summary(&self) -> String {
        format!(
            "by {} | {} | {} views | ★ {:.1}",
            self.creator, self.duration, self.views, self.rating
        )
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Creator", self.creator.clone()),
            ("Category", self.category.clone()),
            ("Language", self.language.clone()),
            ("Duration", self.duration.clone()),
            ("Quality", self.quality.clone()),
            ("Views", self.views.clone()),
            ("Uploaded", self.upload_date.clone()),
            ("Rating", format!("{:.1}/5", self.rating)),
            ("Likes", self.likes.to_string()),
            ("Comments", self.comments.to_string()),
            ("Live", yes_no(self.is_live)),
            ("URL", self.video_url.clone()),
        ]
    }
}

impl Render for Music {
    fn headline(&self) -> String {
        style(&self.title).bold().to_string()
    }

    fn summary(&self) -> String {
        format!(
            "by {} | {} | {} plays | ★ {:.1}",
            self.artist, self.duration, self.play_count, self.rating
        )
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Artist", self.artist.clone()),
            ("Album", self.album.clone()),
            ("Category", self.category.clone()),
            ("Language", self.language.clone()),
            ("Duration", self.duration.clone()),
            ("Released", self.release_year.to_string()),
            ("Rating", format!("{:.1}/5", self.rating)),
            ("Plays", self.play_count.to_string()),
            ("Lyrics", yes_no(self.has_lyrics())),
            ("Downloaded", yes_no(self.is_downloaded)),
            ("URL", self.audio_url.clone()),
        ]
    }
}

impl Render for Book {
    fn headline(&self) -> String {
        style(&self.title).bold().to_string()
    }

    fn summary(&self) -> String {
        format!(
            "by {} | {} pages | {} | ★ {:.1}",
            self.author, self.pages, self.read_time, self.rating
        )
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Author", self.author.clone()),
            ("Category", self.category.clone()),
            ("Language", self.language.clone()),
            ("Pages", self.pages.to_string()),
            ("Chapters", self.chapter_count().to_string()),
            ("Read time", self.read_time.clone()),
            ("Publisher", self.publisher.clone()),
            ("Published", self.publish_year.to_string()),
            ("ISBN", self.isbn.clone()),
            ("Rating", format!("{:.1}/5", self.rating)),
            ("Downloaded", yes_no(self.is_downloaded)),
            ("PDF", self.pdf_url.clone()),
        ]
    }
}

impl Render for Event {
    fn headline(&self) -> String {
        let mode = if self.is_online {
            style("online").cyan().to_string()
        } else {
            style("in person").green().to_string()
        };
        format!("{} ({})", style(&self.title).bold(), mode)
    }

    fn summary(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            format_time(self.start_time),
            self.location,
            self.price,
            attendance(self)
        )
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Category", self.category.clone()),
            ("Starts", format_time(self.start_time)),
            ("Ends", format_time(self.end_time)),
            ("Duration", self.duration().as_hms()),
            ("Location", self.location.clone()),
            ("Online", yes_no(self.is_online)),
            ("Organizer", self.organizer.clone()),
            ("Price", self.price.clone()),
            ("Attendance", attendance(self)),
            ("Registration", yes_no(self.registration_required)),
            ("Contact", self.contact_info.clone()),
        ]
    }
}

/// List records of one type with optional filters
pub fn list(catalog: &ContentCatalog, matches: &ArgMatches) -> Result<()> {
    let content_type = content_type(matches)?;
    let category = matches.get_one::<String>("category").map(String::as_str);
    let language = matches.get_one::<String>("language").map(String::as_str);
    let favorites_only = matches.get_flag("favorites");

    match content_type {
        ContentType::Video => {
            let items = list_rated(catalog, content_type, category, language, favorites_only);
            print_items(catalog, &heading(content_type, favorites_only), &items.videos);
        }
        ContentType::Music => {
            let items = list_rated(catalog, content_type, category, language, favorites_only);
            print_items(catalog, &heading(content_type, favorites_only), &items.music);
        }
        ContentType::Book => {
            let items = list_rated(catalog, content_type, category, language, favorites_only);
            print_items(catalog, &heading(content_type, favorites_only), &items.books);
        }
        ContentType::Event => {
            if language.is_some() {
                bail!("Events have no language; drop --language");
            }
            let items = list_events(catalog, category, favorites_only);
            print_items(catalog, &heading(content_type, favorites_only), &items);
        }
    }

    Ok(())
}

/// Videos, music or books matching the list filters, in catalog order
///
/// Only the collection named by `content_type` is filled in.
pub(crate) fn list_rated<'a>(
    catalog: &'a ContentCatalog,
    content_type: ContentType,
    category: Option<&str>,
    language: Option<&str>,
    favorites_only: bool,
) -> SearchResults<'a> {
    let mut request = SearchRequest::new("").in_scope(SearchScope::Only(content_type));
    if let Some(category) = category {
        request = request.with_category(category);
    }
    if let Some(language) = language {
        request = request.with_language(language);
    }

    let mut results = catalog.search_content(&request);
    if favorites_only {
        results.videos.retain(|v| catalog.is_favorite(v.id.as_str(), ContentType::Video));
        results.music.retain(|m| catalog.is_favorite(m.id.as_str(), ContentType::Music));
        results.books.retain(|b| catalog.is_favorite(b.id.as_str(), ContentType::Book));
    }
    results
}

pub(crate) fn list_events<'a>(
    catalog: &'a ContentCatalog,
    category: Option<&str>,
    favorites_only: bool,
) -> Vec<&'a Event> {
    catalog
        .events()
        .iter()
        .filter(|e| category.is_none_or(|c| eq_ignore_case(&e.category, c)))
        .filter(|e| !favorites_only || catalog.is_favorite(e.id.as_str(), ContentType::Event))
        .collect()
}

/// Search videos, music and books
pub fn search(catalog: &ContentCatalog, matches: &ArgMatches) -> Result<()> {
    let query = matches
        .get_one::<String>("query")
        .ok_or_else(|| anyhow::anyhow!("Search query is required"))?;

    let scope = match matches.get_one::<String>("type").map(String::as_str) {
        None | Some("all") => SearchScope::All,
        Some(name) => SearchScope::Only(name.parse()?),
    };

    let mut request = SearchRequest::new(query.as_str()).in_scope(scope);
    if let Some(category) = matches.get_one::<String>("category") {
        request = request.with_category(category.as_str());
    }
    if let Some(language) = matches.get_one::<String>("language") {
        request = request.with_language(language.as_str());
    }

    let results = catalog.search_content(&request);
    if results.is_empty() {
        println!("No content found matching '{}'", query);
        return Ok(());
    }

    println!(
        "\n{} Search Results for '{}'",
        style(results.total()).bold().cyan(),
        query
    );
    if !results.videos.is_empty() {
        print_items(catalog, "Videos", &results.videos);
    }
    if !results.music.is_empty() {
        print_items(catalog, "Music", &results.music);
    }
    if !results.books.is_empty() {
        print_items(catalog, "Books", &results.books);
    }

    Ok(())
}

/// Show every field of one record
pub fn info(catalog: &ContentCatalog, matches: &ArgMatches) -> Result<()> {
    let content_type = content_type(matches)?;
    let id = required_id(matches)?;

    match content_type {
        ContentType::Video => print_info(catalog, catalog.videos().require(id)?),
        ContentType::Music => print_info(catalog, catalog.music().require(id)?),
        ContentType::Book => print_info(catalog, catalog.books().require(id)?),
        ContentType::Event => print_info(catalog, catalog.events().require(id)?),
    }

    Ok(())
}

/// Highest rated records of one type
pub fn popular(catalog: &ContentCatalog, matches: &ArgMatches) -> Result<()> {
    let content_type = content_type(matches)?;
    let limit = resolve_limit(catalog, matches, catalog.config().popular_limit);
    let heading = format!("Popular {}", content_type.plural());

    match content_type {
        ContentType::Video => print_items(catalog, &heading, &catalog.videos().popular(limit)),
        ContentType::Music => print_items(catalog, &heading, &catalog.music().popular(limit)),
        ContentType::Book => print_items(catalog, &heading, &catalog.books().popular(limit)),
        ContentType::Event => bail!("Events are not rated; use 'jaigurudev events' instead"),
    }

    Ok(())
}

/// The first records of one type in catalog order
pub fn recent(catalog: &ContentCatalog, matches: &ArgMatches) -> Result<()> {
    let content_type = content_type(matches)?;
    let limit = resolve_limit(catalog, matches, catalog.config().recent_limit);
    let heading = format!("Recent {}", content_type.plural());

    match content_type {
        ContentType::Video => print_items(catalog, &heading, &catalog.videos().recent(limit)),
        ContentType::Music => print_items(catalog, &heading, &catalog.music().recent(limit)),
        ContentType::Book => print_items(catalog, &heading, &catalog.books().recent(limit)),
        ContentType::Event => print_items(catalog, &heading, &catalog.events().recent(limit)),
    }

    Ok(())
}

/// Trending videos
pub fn trending(catalog: &ContentCatalog, matches: &ArgMatches) -> Result<()> {
    let limit = resolve_limit(catalog, matches, catalog.config().trending_limit);
    print_items(catalog, "Trending videos", &catalog.videos().trending(limit));
    Ok(())
}

/// Records similar to a given one
pub fn recommend(catalog: &ContentCatalog, matches: &ArgMatches) -> Result<()> {
    let content_type = content_type(matches)?;
    let id = required_id(matches)?;
    let limit = resolve_limit(catalog, matches, catalog.config().recommended_limit);

    match content_type {
        ContentType::Video => {
            let seed = catalog.videos().require(id)?;
            let heading = format!("Because you watched '{}'", seed.title);
            print_items(catalog, &heading, &catalog.videos().recommended(id, limit));
        }
        ContentType::Music => {
            let seed = catalog.music().require(id)?;
            let heading = format!("Because you listened to '{}'", seed.title);
            print_items(catalog, &heading, &catalog.music().recommended(id, limit));
        }
        ContentType::Book => {
            let seed = catalog.books().require(id)?;
            let heading = format!("Because you read '{}'", seed.title);
            print_items(catalog, &heading, &catalog.books().recommended(id, limit));
        }
        ContentType::Event => bail!("Recommendations are not available for events"),
    }

    Ok(())
}

/// Distinct categories of one type with record counts
pub fn categories(catalog: &ContentCatalog, matches: &ArgMatches) -> Result<()> {
    let content_type = content_type(matches)?;
    let counts = category_counts(catalog, content_type);

    println!(
        "\n{} {} Categories",
        style(counts.len()).bold().cyan(),
        capitalize(content_type.as_str())
    );
    println!("{}", "=".repeat(80));
    for (category, count) in counts {
        println!("  {:<30} {}", category, style(count).dim());
    }

    Ok(())
}

pub(crate) fn category_counts(catalog: &ContentCatalog, content_type: ContentType) -> Vec<(String, usize)> {
    match content_type {
        ContentType::Video => count_by_category(catalog.videos().iter()),
        ContentType::Music => count_by_category(catalog.music().iter()),
        ContentType::Book => count_by_category(catalog.books().iter()),
        ContentType::Event => count_by_category(catalog.events().iter()),
    }
}

fn count_by_category<'a, T: Content + 'a>(items: impl Iterator<Item = &'a T>) -> Vec<(String, usize)> {
    let mut counts = std::collections::BTreeMap::<&str, usize>::new();
    for item in items {
        *counts.entry(item.category()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(category, count)| (category.to_string(), count))
        .collect()
}

/// Events in a time window, earliest first
pub fn events(catalog: &ContentCatalog, now: Timestamp, matches: &ArgMatches) -> Result<()> {
    let window: TimeWindow = matches
        .get_one::<String>("window")
        .map(String::as_str)
        .unwrap_or("upcoming")
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let online_only = matches.get_flag("online");

    let items = select_events(catalog, now, window, online_only);
    let heading = if online_only {
        format!("{} online events", window)
    } else {
        format!("{} events", window)
    };
    print_items(catalog, &heading, &items);

    Ok(())
}

pub(crate) fn select_events(
    catalog: &ContentCatalog,
    now: Timestamp,
    window: TimeWindow,
    online_only: bool,
) -> Vec<&Event> {
    let mut items = catalog.events_within(now, window);
    if online_only {
        items.retain(|e| e.is_online);
    }
    items
}

/// Show catalog statistics
pub fn show_stats(catalog: &ContentCatalog) -> Result<()> {
    let stats = catalog.stats();

    println!("\n{}", style("Catalog Statistics").bold().cyan());
    println!("{}", "=".repeat(80));
    println!("Videos: {} ({} live)", style(stats.total_videos).bold(), stats.live_videos);
    println!("Music: {}", style(stats.total_music).bold());
    println!("Books: {}", style(stats.total_books).bold());
    println!("Events: {}", style(stats.total_events).bold());
    println!("Total Items: {}", style(stats.total_items()).bold());
    println!(
        "Favorites: {} ({:.1}%)",
        style(stats.total_favorites()).bold(),
        stats.favorite_percentage()
    );

    Ok(())
}

#[derive(Serialize)]
pub(crate) struct CatalogExport<'a> {
    pub exported_at: String,
    #[serde(flatten)]
    pub catalog: CatalogSnapshot<'a>,
}

pub(crate) fn export_json(catalog: &ContentCatalog) -> Result<String> {
    let export = CatalogExport {
        exported_at: Local::now().to_rfc3339(),
        catalog: catalog.snapshot(),
    };
    let json = serde_json::to_string_pretty(&export)
        .map_err(|e| AppError::serialization("catalog export", e))?;
    Ok(json)
}

/// Export the whole catalog as JSON
pub fn export_catalog(catalog: &ContentCatalog, matches: &ArgMatches) -> Result<()> {
    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("catalog_export.json");

    let json = export_json(catalog)?;
    std::fs::write(output, json).map_err(|e| AppError::io(output, e))?;

    println!(
        "{} Exported {} items to {}",
        style("✓").green().bold(),
        catalog.stats().total_items(),
        output
    );

    Ok(())
}

/// `config init|show|path`
pub fn config_command(manager: &ConfigManager, config: &Config, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("init", _)) => {
            let created = manager
                .initialize()
                .context("Failed to write the config file")?;
            if created {
                println!(
                    "{} Config written to {}",
                    style("✓").green().bold(),
                    manager.config_path().display()
                );
            } else {
                println!("Config already exists at {}", manager.config_path().display());
            }
        }
        Some(("show", _)) => {
            let json = serde_json::to_string_pretty(config)
                .context("Failed to serialize configuration")?;
            println!("{}", json);
        }
        Some(("path", _)) => println!("{}", manager.config_path().display()),
        _ => bail!("Unknown config action"),
    }

    Ok(())
}

fn content_type(matches: &ArgMatches) -> Result<ContentType> {
    let name = matches
        .get_one::<String>("type")
        .ok_or_else(|| anyhow::anyhow!("Content type is required"))?;
    Ok(name.parse()?)
}

fn required_id(matches: &ArgMatches) -> Result<&str> {
    matches
        .get_one::<String>("id")
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("Record ID is required"))
}

/// `--limit` if given, else `default`, capped at the configured maximum
pub(crate) fn resolve_limit(catalog: &ContentCatalog, matches: &ArgMatches, default: usize) -> usize {
    let requested = matches
        .get_one::<u32>("limit")
        .map_or(default, |&limit| limit as usize);
    catalog.clamp_limit(requested)
}

fn heading(content_type: ContentType, favorites_only: bool) -> String {
    if favorites_only {
        format!("Favorite {}", content_type.plural())
    } else {
        capitalize(content_type.plural())
    }
}

fn print_items<T: Content + Render>(catalog: &ContentCatalog, heading: &str, items: &[&T]) {
    if items.is_empty() {
        println!("No {} to show.", heading.to_lowercase());
        return;
    }

    println!("\n{} {}", style(items.len()).bold().cyan(), heading);
    println!("{}", "=".repeat(80));

    for item in items {
        let star = if catalog.is_favorite(item.id().as_str(), T::CONTENT_TYPE) {
            format!(" {}", style("★").yellow())
        } else {
            String::new()
        };
        println!("\n{}{}", item.headline(), star);
        println!("  {} | {}", style(item.id()).dim(), item.summary());
    }
    println!();
}

fn print_info<T: Content + Render>(catalog: &ContentCatalog, item: &T) {
    println!("\n{}", style(format!("{} Information", capitalize(T::CONTENT_TYPE.as_str()))).bold().cyan());
    println!("{}", "=".repeat(80));
    println!("ID: {}", item.id());
    println!("Title: {}", item.headline());
    for (label, value) in item.details() {
        if !value.is_empty() {
            println!("{}: {}", label, value);
        }
    }
    println!(
        "Favorite: {}",
        yes_no(catalog.is_favorite(item.id().as_str(), T::CONTENT_TYPE))
    );
}

pub(crate) fn format_time(timestamp: Timestamp) -> String {
    DateTime::from_timestamp_millis(timestamp.as_millis())
        .map(|utc| utc.with_timezone(&Local).format("%a %d %b %Y %H:%M").to_string())
        .unwrap_or_else(|| "unknown time".to_string())
}

fn attendance(event: &Event) -> String {
    match event.max_attendees {
        Some(max) => format!("{}/{} attending", event.current_attendees, max),
        None => format!("{} attending", event.current_attendees),
    }
}

fn yes_no(flag: bool) -> String {
    let answer = if flag { "Yes" } else { "No" };
    answer.to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests;
