//! gazetteer prelude: bring common types and traits into scope for front ends.

#![allow(unused_imports)]

pub use crate::common::GazetteerStats;
pub use crate::error::{FavoritesError, GazetteerError, Result};
pub use crate::favorites::Favorites;
pub use crate::locale::{Locale, Localized};
pub use crate::model::{Gazetteer, PlaceEntry, PlaceKey, PlaceKind, SourceRow};
pub use crate::predict::{predict, Predictor, DEFAULT_MAX_RESULTS};
pub use crate::text::{equals_folded, fold_key, normalize};
pub use crate::traits::NameMatch;

#[cfg(feature = "builder")]
pub use crate::loader::builder::{build_dataset, merge_location_lists, LocationRecord};
