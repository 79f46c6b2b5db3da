// crates/gazetteer-core/src/lib.rs

//! gazetteer-core
//! ==============
//!
//! A bilingual (English/Chinese) city gazetteer with incremental prefix
//! autocomplete, built to sit behind a search box that re-queries on every
//! keystroke.
//!
//! ```rust
//! use gazetteer_core::prelude::*;
//!
//! let db = Gazetteer::from_rows([
//!     SourceRow::new(["北京", "Beijing", "", "", "中国", "China"]),
//!     SourceRow::new(["上海", "Shanghai", "", "", "中国", "China"]),
//!     SourceRow::new(["伦敦", "London", "", "", "英国", "United Kingdom"]),
//! ]);
//!
//! let hits = Predictor::default().predict("上", &db, Locale::Chinese);
//! assert_eq!(hits[0].key.name(), "Shanghai");
//! ```

pub mod common;
pub mod error;
pub mod favorites;
pub mod loader; // The public loader
pub mod locale;
pub mod model;
pub mod predict;
pub mod prelude;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::GazetteerStats;
pub use crate::error::{FavoritesError, GazetteerError, Result};
pub use crate::favorites::Favorites;
pub use crate::locale::{Locale, Localized};
pub use crate::model::{Gazetteer, PlaceEntry, PlaceKey, PlaceKind, SourceRow, HOME_COUNTRY};
pub use crate::predict::{predict, Predictor, DEFAULT_MAX_RESULTS};
