// crates/gazetteer-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates row parsing
//! to [`dataset`]. Loading is the only place in the crate that performs I/O;
//! run it once, off the input path, before the first prediction.

use crate::error::Result;
use crate::model::Gazetteer;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub mod common_io;
pub mod dataset;

#[cfg(feature = "builder")]
pub mod builder;

static GAZETTEER_CACHE: OnceCell<Gazetteer> = OnceCell::new();

impl Gazetteer {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "all_city.csv"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// Process-wide gazetteer loaded once from [`Self::default_dataset_path`].
    ///
    /// The first caller pays for the load; every later caller, on any thread,
    /// sees the fully built table. If the bundled file is missing the shared
    /// instance stays empty for the life of the process.
    pub fn shared() -> &'static Gazetteer {
        GAZETTEER_CACHE.get_or_init(|| Self::load(Self::default_dataset_path()))
    }

    /// Loads a dataset file (`.csv`, or `.csv.gz` with the `compact` feature).
    ///
    /// Never fails: an unreadable or malformed source is logged and yields an
    /// empty gazetteer, which callers treat as "not ready".
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(db) => db,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "gazetteer unavailable, continuing empty");
                Gazetteer::empty()
            }
        }
    }

    /// Like [`Self::load`], but reports why the dataset could not be used.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let started = Instant::now();

        let reader = common_io::open_stream(path)?;
        let db = Self::from_reader(reader)?;

        let stats = db.stats();
        tracing::info!(
            path = %path.display(),
            cities = stats.cities,
            regions = stats.regions,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "gazetteer loaded"
        );
        Ok(db)
    }

    /// Parses an uncompressed dataset stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let rows = dataset::read_rows(reader)?;
        Self::try_from_rows(rows)
    }
}
