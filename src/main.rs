//! roofsite - hash routing and search metadata for the Best Roofers Now site.

mod build;
mod catalog;
mod cli;
mod config;
mod generator;
mod history;
mod integrations;
mod logger;
mod navigator;
mod router;
mod seo;
mod store;

use anyhow::{Context, Result, anyhow};
use build::build_site;
use catalog::Catalog;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use history::{History, MemoryHistory};
use integrations::{Assistant, ProjectClient};
use navigator::{Navigator, Section};
use seo::{HeadDocument, MetadataSink, SeoRecord, render_head};
use store::ViewStateStore;
use std::{
    fs::File,
    io::BufWriter,
    path::Path,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;
    let catalog = Catalog::load(config.catalog_path().as_deref())
        .context("Failed to load catalog")?
        .with_business(&config.site.name);

    match &cli.command {
        Commands::Route { fragments, json } => route(&config, &catalog, fragments, *json),
        Commands::Build { .. } => build_site(&config, &catalog).map(|_| ()),
        Commands::Chat { messages } => runtime()?.block_on(chat(&config, &catalog, messages)),
        Commands::Speak { text, output } => runtime()?.block_on(speak(&config, &catalog, text, output)),
        Commands::Projects { city } => runtime()?.block_on(projects(&config, city)),
    }
}

/// Replay navigation tokens, printing the metadata after each one.
fn route(config: &SiteConfig, catalog: &Catalog, tokens: &[String], json: bool) -> Result<()> {
    if json {
        replay(config, catalog, tokens, Vec::<SeoRecord>::new(), |records| {
            Ok(serde_json::to_string_pretty(&records.last())?)
        })?;
    } else {
        replay(config, catalog, tokens, HeadDocument::new(config.site.url.clone()), render_head)?;
    }
    Ok(())
}

/// Tokens:
///
/// - `service:<id>` / `area:<slug>` open an overlay
/// - `close` closes it, `back` steps back through history
/// - `@<section>` scrolls to a page section
/// - anything else is set as the fragment
///
/// Returns the sink after the last token.
fn replay<S: MetadataSink>(
    config: &SiteConfig,
    catalog: &Catalog,
    tokens: &[String],
    sink: S,
    render: impl Fn(&S) -> Result<String>,
) -> Result<S> {
    let mut nav = Navigator::new(config, catalog, MemoryHistory::new(""), sink);
    nav.mount();

    for token in tokens {
        if token == "close" {
            nav.close();
        } else if token == "back" {
            if !nav.history_mut().back() {
                log!("route"; "already at the first entry");
            }
            nav.pump();
        } else if let Some(id) = token.strip_prefix('@') {
            let section = Section::from_id(id).ok_or_else(|| anyhow!("unknown section `{id}`"))?;
            let plan = nav.scroll_to(section);
            log!("route"; "scroll to #{} after {}ms", plan.section.id(), plan.delay.as_millis());
        } else if let Some(id) = token.strip_prefix("service:") {
            nav.open_service(id);
            nav.pump();
        } else if let Some(slug) = token.strip_prefix("area:") {
            nav.open_area(slug);
            nav.pump();
        } else {
            nav.history_mut().set_fragment(token);
            nav.pump();
        }
        let entries = nav.history().entry_count();
        log!("route"; "{token} -> {} ({entries} history entries)", selection(nav.store()));
        println!("{}", render(nav.sink())?);
    }
    Ok(nav.into_sink())
}

/// Human-readable summary of the open overlay.
fn selection(store: &ViewStateStore) -> String {
    if let Some(service) = store.selected_service() {
        format!("service `{}` {}", service.id, service.title)
    } else if let Some(area) = store.selected_area() {
        let kind = if area.is_commercial() { "commercial area" } else { "area" };
        format!("{kind} `{}` {}", area.id, area.name)
    } else {
        store.current().to_string()
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

async fn chat(config: &SiteConfig, catalog: &Catalog, messages: &[String]) -> Result<()> {
    let mut assistant = Assistant::new(config, catalog);
    for message in messages {
        let reply = assistant.send_message(message).await;
        println!("> {message}\n{reply}\n");
    }
    log!("chat"; "{} turns kept", assistant.turns());
    Ok(())
}

async fn speak(config: &SiteConfig, catalog: &Catalog, text: &str, output: &Path) -> Result<()> {
    let audio = Assistant::new(config, catalog)
        .generate_speech(text)
        .await
        .ok_or_else(|| anyhow!("speech synthesis unavailable"))?;

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    audio.write_wav(&mut BufWriter::new(file))?;

    log!(
        "speak";
        "{} ({:.1}s, {} Hz, {} channel)",
        output.display(),
        audio.duration().as_secs_f32(),
        audio.sample_rate(),
        audio.channels()
    );
    Ok(())
}

async fn projects(config: &SiteConfig, city: &str) -> Result<()> {
    let projects = ProjectClient::new(&config.projects).projects_by_city(city).await;
    log!("projects"; "{} projects in {city}", projects.len());
    println!("{}", serde_json::to_string_pretty(&projects)?);
    Ok(())
}
