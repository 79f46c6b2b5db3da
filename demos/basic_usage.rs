//! Basic usage example for gazetteer-rs
//!
//! This example demonstrates how to:
//! - Load the bundled gazetteer
//! - Look up places by key and by typed name
//! - Ask for autocomplete suggestions in both locales
//! - Keep a favorites list

use gazetteer_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== gazetteer-rs Basic Usage Example ===\n");

    println!("Loading gazetteer...");
    let db = Gazetteer::try_load(Gazetteer::default_dataset_path())?;
    let stats = db.stats();
    println!(
        "✓ Loaded {} cities and {} regions\n",
        stats.cities, stats.regions
    );

    // Example 1: Key lookup
    println!("--- Example 1: Lookup by key ---");
    if let Some(city) = db.get_city("Shijiazhuang") {
        println!("{}", city.describe(Locale::English));
        println!("{}", city.describe(Locale::Chinese));
    }
    println!();

    // Example 2: Lenient name lookup
    println!("--- Example 2: Lookup by typed name ---");
    for (name, locale) in [("zurich", Locale::English), ("西安", Locale::Chinese)] {
        match db.find_by_name(name, locale) {
            Some(place) => println!("{name:?} -> key {}", place.key),
            None => println!("{name:?} -> not found"),
        }
    }
    println!();

    // Example 3: Autocomplete
    println!("--- Example 3: Autocomplete ---");
    let predictor = Predictor::default();
    for (input, locale) in [
        ("a", Locale::English),
        ("new", Locale::English),
        ("阜", Locale::Chinese),
    ] {
        let hits = predictor.predict(input, &db, locale);
        println!("{input:?} [{locale}]:");
        for place in hits {
            println!("  {}", place.describe(locale));
        }
    }
    println!();

    // Example 4: Favorites
    println!("--- Example 4: Favorites ---");
    let mut favorites = Favorites::new();
    for key in ["Beijing", "London", "Atlantis"] {
        match favorites.add(key, &db) {
            Ok(()) => println!("added {key}"),
            Err(e) => println!("cannot add {key}: {e}"),
        }
    }
    println!("current: {:?}", favorites.current());

    Ok(())
}
