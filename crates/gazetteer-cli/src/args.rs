use clap::{Parser, Subcommand, ValueEnum};
use gazetteer_core::{Locale, PlaceKind, DEFAULT_MAX_RESULTS};
use std::path::PathBuf;

/// CLI arguments for gazetteer-cli
#[derive(Debug, Parser)]
#[command(
    name = "gazetteer",
    version,
    about = "CLI for querying the bilingual city gazetteer and its autocomplete"
)]
pub struct CliArgs {
    /// Path to the dataset (.csv or .csv.gz). Defaults to the bundled all_city.csv
    #[arg(short = 'i', long = "input", env = "GAZETTEER_DATA", global = true)]
    pub input: Option<PathBuf>,

    /// Display/input locale: en (English) or zh (Chinese)
    #[arg(
        short = 'l',
        long = "locale",
        env = "GAZETTEER_LOCALE",
        default_value = "en",
        global = true
    )]
    pub locale: Locale,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the gazetteer contents
    Stats,

    /// List entries in dataset order
    List {
        /// Only list cities or only regions
        #[arg(long)]
        kind: Option<KindArg>,
    },

    /// Look up a place by key, or by name in the active locale
    Get {
        /// Latin key (e.g. Shijiazhuang) or display name (e.g. 石家庄 with --locale zh)
        name: String,
    },

    /// Autocomplete: best prefix matches for partial input
    Predict {
        /// Partial input as typed
        text: String,

        /// Maximum number of suggestions
        #[arg(short = 'n', long = "max", default_value_t = DEFAULT_MAX_RESULTS)]
        max: usize,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the saved city list
    Favorites {
        /// Favorites file, one place key per line
        #[arg(
            short = 'f',
            long = "file",
            env = "GAZETTEER_FAVORITES",
            default_value = "cities.txt"
        )]
        file: PathBuf,

        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Build a dataset by joining a Chinese and an English location list
    /// (requires the `builder` feature)
    Build {
        /// Location list export in the local (Chinese) language
        #[arg(long)]
        local: PathBuf,

        /// Location list export in the foreign (English) language
        #[arg(long)]
        foreign: PathBuf,

        /// Output dataset path (.csv, or .csv.gz)
        #[arg(short = 'o', long = "out")]
        out: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoritesAction {
    /// Show saved cities; the current one is marked with '*'
    List,
    /// Save a city and make it current
    Add { key: String },
    /// Remove a saved city
    Remove { key: String },
    /// Make a saved city current
    Shift { key: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    City,
    Region,
}

impl From<KindArg> for PlaceKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::City => PlaceKind::City,
            KindArg::Region => PlaceKind::Region,
        }
    }
}
