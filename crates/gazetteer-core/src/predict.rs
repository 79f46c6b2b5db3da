// crates/gazetteer-core/src/predict.rs

//! # Autocomplete
//!
//! Prefix prediction over the gazetteer, recomputed on every keystroke.
//!
//! The pipeline is a single linear scan:
//! 1. normalize the input for the active locale (empty -> no predictions),
//! 2. keep every entry whose normalized display name starts with it,
//! 3. order alphabetically by Latin name, then move entries located in
//!    China to the front (two stable sorts, so each group stays
//!    alphabetical),
//! 4. truncate.

use crate::locale::Locale;
use crate::model::{Gazetteer, PlaceEntry};
use crate::text::{normalize, starts_with_normalized};

/// Number of suggestions returned when the caller does not say otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Ranked prefix matches for `input`.
///
/// Pure function of its arguments: the same input against the same
/// gazetteer always yields the same sequence. Input that normalizes to the
/// empty string (including CJK text under [`Locale::English`]) yields no
/// predictions; this is the "show the saved city list instead" case, not an
/// error.
///
/// # Examples
///
/// ```rust
/// use gazetteer_core::{predict, Gazetteer, Locale, SourceRow};
///
/// let db = Gazetteer::from_rows([
///     SourceRow::new(["伦敦", "London", "", "", "英国", "United Kingdom"]),
///     SourceRow::new(["北京", "Beijing", "", "", "中国", "China"]),
/// ]);
///
/// let hits = predict("lon", &db, Locale::English, 5);
/// assert_eq!(hits[0].display_name(Locale::English), "London");
/// assert!(predict("", &db, Locale::English, 5).is_empty());
/// ```
pub fn predict<'a>(
    input: &str,
    gazetteer: &'a Gazetteer,
    locale: Locale,
    max_results: usize,
) -> Vec<&'a PlaceEntry> {
    let query = normalize(input, locale);
    if query.is_empty() || max_results == 0 {
        return Vec::new();
    }

    let mut hits: Vec<&PlaceEntry> = gazetteer
        .all()
        .iter()
        .filter(|e| starts_with_normalized(e.display_name(locale), &query, locale))
        .collect();
    let matched = hits.len();

    hits.sort_by(|a, b| a.name.en.cmp(&b.name.en));
    hits.sort_by_key(|e| !e.is_in_china());
    hits.truncate(max_results);

    tracing::trace!(
        query = %query,
        %locale,
        matched,
        returned = hits.len(),
        "predict"
    );
    hits
}

/// Prediction settings held by a front end.
///
/// Carries configuration only: every call goes through [`predict`] and
/// nothing is remembered between calls. A superseded call's result is
/// simply discarded by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predictor {
    pub max_results: usize,
}

impl Default for Predictor {
    fn default() -> Self {
        Predictor {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl Predictor {
    pub fn new(max_results: usize) -> Self {
        Predictor { max_results }
    }

    pub fn predict<'a>(
        &self,
        input: &str,
        gazetteer: &'a Gazetteer,
        locale: Locale,
    ) -> Vec<&'a PlaceEntry> {
        predict(input, gazetteer, locale, self.max_results)
    }
}
