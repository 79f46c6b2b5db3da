//! gazetteer-cli — Command-line interface for gazetteer-core
//!
//! This binary drives the city gazetteer from a terminal the same way a
//! desktop search box does: it loads the dataset once, then answers
//! autocomplete queries, lookups and favorites edits.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ gazetteer-cli stats
//!
//! - Autocomplete in English or Chinese
//!   $ gazetteer-cli predict lon
//!   $ gazetteer-cli --locale zh predict 上 --max 10
//!   $ gazetteer-cli predict "new y" --json
//!
//! - Look up a place by key or by name
//!   $ gazetteer-cli get Shijiazhuang
//!   $ gazetteer-cli --locale zh get 石家庄
//!
//! - Manage saved cities
//!   $ gazetteer-cli favorites add Beijing
//!   $ gazetteer-cli favorites list
//!
//! - Build a dataset from two location list exports
//!   $ gazetteer-cli build --local loc_zh.csv --foreign loc_en.csv -o all_city.csv.gz
//!
//! Data source
//! -----------
//!
//! By default the bundled `all_city.csv` from `gazetteer-core` is used. Point
//! `--input` (or `GAZETTEER_DATA`) at another `.csv` / `.csv.gz` file to use
//! a full dataset. A missing or malformed dataset is reported and treated as
//! an empty gazetteer.
mod args;

use crate::args::{CliArgs, Commands, FavoritesAction};
use anyhow::Context;
use clap::Parser;
use gazetteer_core::{Favorites, Gazetteer, Locale, PlaceEntry, PlaceKind};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// JSON shape of one suggestion.
#[derive(Debug, Serialize)]
struct PlaceView<'a> {
    key: &'a str,
    kind: PlaceKind,
    name: &'a str,
    region: Option<&'a str>,
    country: &'a str,
    label: String,
}

impl<'a> PlaceView<'a> {
    fn new(entry: &'a PlaceEntry, locale: Locale) -> Self {
        PlaceView {
            key: entry.key.name(),
            kind: entry.kind(),
            name: entry.display_name(locale),
            region: entry.region_display_name(locale),
            country: entry.country_display_name(locale),
            label: entry.describe(locale),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn kind_label(kind: PlaceKind) -> &'static str {
    match kind {
        PlaceKind::City => "city",
        PlaceKind::Region => "region",
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);
    let locale = args.locale;

    // Build runs before any dataset is loaded.
    let command = match args.command {
        Commands::Build {
            local,
            foreign,
            out,
        } => return build(&local, &foreign, &out),
        other => other,
    };

    let loaded;
    let db: &Gazetteer = match &args.input {
        Some(path) => {
            loaded = Gazetteer::load(path);
            &loaded
        }
        None => Gazetteer::shared(),
    };
    if db.is_empty() {
        tracing::warn!("gazetteer is empty; results will be empty");
    }

    match command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Gazetteer statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Regions: {}", stats.regions);
            println!("  Total entries: {}", stats.total());
        }

        Commands::List { kind } => {
            let wanted = kind.map(PlaceKind::from);
            for e in db.all() {
                if wanted.is_some_and(|k| k != e.kind()) {
                    continue;
                }
                println!("{} ({})", e.describe(locale), kind_label(e.kind()));
            }
        }

        Commands::Get { name } => {
            match db.resolve(&name).or_else(|| db.find_by_name(&name, locale)) {
                Some(e) => {
                    println!("Key: {}", e.key);
                    println!("Kind: {}", kind_label(e.kind()));
                    for l in Locale::ALL {
                        println!("Name [{l}]: {}", e.display_name(l));
                    }
                    if let Some(region) = &e.region_name {
                        println!("Region: {} / {}", region.en, region.zh);
                    }
                    println!("Country: {} / {}", e.country_name.en, e.country_name.zh);
                }
                None => eprintln!("No place found for: {name}"),
            }
        }

        Commands::Predict { text, max, json } => {
            let hits = gazetteer_core::predict(&text, db, locale, max);
            if json {
                let views: Vec<_> = hits.iter().map(|e| PlaceView::new(e, locale)).collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else if hits.is_empty() {
                println!("No suggestions for: {text}");
            } else {
                for e in hits {
                    println!("{}", e.describe(locale));
                }
            }
        }

        Commands::Favorites { file, action } => {
            let mut favs = Favorites::load(&file);
            match action {
                FavoritesAction::List => {
                    if favs.is_empty() {
                        println!("No saved cities");
                    }
                    for key in favs.cities() {
                        let marker = if favs.current() == Some(key.as_str()) { '*' } else { ' ' };
                        let label = db
                            .resolve(key)
                            .map(|e| e.describe(locale))
                            .unwrap_or_else(|| key.clone());
                        println!("{marker} {label}");
                    }
                }
                FavoritesAction::Add { key } => {
                    // Accept a typed display name as well as the exact key.
                    let key = match db.resolve(&key) {
                        Some(_) => key,
                        None => db
                            .find_by_name(&key, locale)
                            .map(|e| e.key.name().to_owned())
                            .unwrap_or(key),
                    };
                    favs.add(&key, db)?;
                    save_favorites(&favs, &file)?;
                    println!("Added {key}");
                }
                FavoritesAction::Remove { key } => {
                    favs.remove(&key)?;
                    save_favorites(&favs, &file)?;
                    match favs.current() {
                        Some(cur) => println!("Removed {key}; current city is {cur}"),
                        None => println!("Removed {key}; no saved cities left"),
                    }
                }
                FavoritesAction::Shift { key } => {
                    favs.shift(&key)?;
                    save_favorites(&favs, &file)?;
                    println!("Current city is {key}");
                }
            }
        }

        Commands::Build { .. } => {} // dispatched above
    }

    Ok(())
}

fn save_favorites(favs: &Favorites, file: &std::path::Path) -> anyhow::Result<()> {
    favs.save(file)
        .with_context(|| format!("failed to write favorites to {}", file.display()))
}

#[cfg(feature = "builder")]
fn build(
    local: &std::path::Path,
    foreign: &std::path::Path,
    out: &std::path::Path,
) -> anyhow::Result<()> {
    let rows = gazetteer_core::loader::builder::build_dataset(local, foreign, out)
        .with_context(|| format!("failed to build {}", out.display()))?;
    println!("Wrote {rows} rows to {}", out.display());
    Ok(())
}

#[cfg(not(feature = "builder"))]
fn build(
    _local: &std::path::Path,
    _foreign: &std::path::Path,
    _out: &std::path::Path,
) -> anyhow::Result<()> {
    anyhow::bail!("this binary was built without the 'builder' feature")
}
