// src/main.rs
// museum-curator command-line driver

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use museum_curator::application::commands::*;
use museum_curator::application::dto::{ArtworkDto, DetailStatus, LoadStatus};
use museum_curator::application::state::AppState;
use museum_curator::config;

#[derive(Parser)]
#[command(
    name = "museum-curator",
    version,
    about = "Search the V&A and Cleveland Museum of Art collections and curate a collection"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search both museums
    Search {
        /// Search term
        term: String,
        /// Number of result pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,
        /// Sort option (artist-asc, artist-desc, title-asc, title-desc, date-asc, date-desc)
        #[arg(long)]
        sort: Option<String>,
        /// Save these artwork ids into the collection and print it
        #[arg(long = "save", value_name = "ID")]
        save: Vec<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the quick-search presets
    Presets,
    /// List the sort options
    Sorts,
    /// Search, then open one artwork and load its full details
    Show {
        /// Search term the artwork appears under
        term: String,
        /// Artwork id, e.g. vam-O78901 or cleveland-94979
        id: String,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. CONFIGURATION
    let config = config::load(cli.config.as_deref()).context("failed to load configuration")?;

    // 2. LOGGING
    // `log` records are forwarded into the subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 3. APPLICATION STATE
    let state = AppState::from_config(&config).context("failed to start session")?;

    // 4. DISPATCH
    match cli.command {
        Commands::Search {
            term,
            pages,
            sort,
            save,
            json,
        } => run_search(&state, &term, pages, sort.as_deref(), &save, json).await,
        Commands::Presets => {
            for preset in quick_searches() {
                println!("{}", preset);
            }
            Ok(())
        }
        Commands::Sorts => {
            for option in list_sort_options() {
                println!("{:<12} {}", option.token, option.label);
            }
            Ok(())
        }
        Commands::Show { term, id, json } => run_show(&state, &term, &id, json).await,
    }
}

async fn run_search(
    state: &AppState,
    term: &str,
    pages: u32,
    sort: Option<&str>,
    save: &[String],
    json: bool,
) -> anyhow::Result<()> {
    search_artworks(state, term, sort).await?;

    for _ in 1..pages {
        let loaded = load_more_artworks(state).await?;
        if loaded.status == LoadStatus::NothingMore || !loaded.has_more {
            break;
        }
    }

    let view = get_search_view(state, sort)?;

    if !save.is_empty() {
        for id in save {
            toggle_selection(state, id).with_context(|| format!("cannot select {}", id))?;
        }
        let saved = save_selection(state);
        log::info!("Saved {} artworks", saved.added.len());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_table(&view.artworks);
        println!("{} artworks ({:?})", view.artworks.len(), view.pagination);
    }

    if !save.is_empty() {
        let collection = get_collection(state, sort)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&collection)?);
        } else {
            println!("\nCollection ({} artworks)", collection.count);
            print_table(&collection.artworks);
        }
    }

    for notice in view.notices.iter().chain(state.activity.drain().iter()) {
        eprintln!("note: {}", notice);
    }

    Ok(())
}

async fn run_show(state: &AppState, term: &str, id: &str, json: bool) -> anyhow::Result<()> {
    search_artworks(state, term, None).await?;
    let item = view_item(state, id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
        return Ok(());
    }

    let artwork = &item.artwork;
    println!("{}", artwork.title);
    println!("  by {}", artwork.creator);
    if !artwork.date.is_empty() {
        println!("  date: {}", artwork.date);
    }
    println!("  from: {}", artwork.source);
    if let Some(materials) = &artwork.materials {
        println!("  materials: {}", materials);
    }
    if let Some(image) = &artwork.image_url {
        println!("  image: {}", image);
    }
    if let Some(url) = &artwork.url {
        println!("  link: {}", url);
    }
    match (&artwork.description, item.detail) {
        (Some(description), _) => println!("\n{}", description),
        (None, DetailStatus::Unavailable) => println!("\n(details could not be loaded)"),
        (None, _) => {}
    }

    Ok(())
}

fn print_table(artworks: &[ArtworkDto]) {
    for artwork in artworks {
        println!(
            "{:<22} {:<40} {:<28} {}",
            artwork.id,
            truncate(&artwork.title, 40),
            truncate(&artwork.creator, 28),
            artwork.date
        );
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
