// crates/gazetteer-core/src/model.rs
use crate::common::GazetteerStats;
use crate::error::{GazetteerError, Result};
use crate::locale::{Locale, Localized};
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Country name (Latin script) whose places are ranked first by the predictor.
pub const HOME_COUNTRY: &str = "China";

/// Kind of gazetteer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    City,
    /// A state or province, synthesized from the city rows that name it.
    Region,
}

/// Unique key of a gazetteer record.
///
/// Cities and regions live in separate namespaces, so a region and an
/// unrelated city sharing a Latin name never overwrite each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlaceKey {
    pub kind: PlaceKind,
    pub name: String,
}

impl PlaceKey {
    pub fn city(name: impl Into<String>) -> Self {
        PlaceKey {
            kind: PlaceKind::City,
            name: name.into(),
        }
    }

    pub fn region(name: impl Into<String>) -> Self {
        PlaceKey {
            kind: PlaceKind::Region,
            name: name.into(),
        }
    }

    /// The Latin name, exactly as the weather provider expects it for
    /// location lookups and as it is stored in the favorites file.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for PlaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One gazetteer record: a city or a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceEntry {
    pub key: PlaceKey,
    pub name: Localized,
    /// Parent region; `None` for regions and for cities listed without one.
    pub region_name: Option<Localized>,
    pub country_name: Localized,
}

impl PlaceEntry {
    #[inline]
    pub fn kind(&self) -> PlaceKind {
        self.key.kind
    }

    pub fn is_city(&self) -> bool {
        self.key.kind == PlaceKind::City
    }

    pub fn is_region(&self) -> bool {
        self.key.kind == PlaceKind::Region
    }

    #[inline]
    pub fn display_name(&self, locale: Locale) -> &str {
        self.name.get(locale)
    }

    pub fn region_display_name(&self, locale: Locale) -> Option<&str> {
        self.region_name.as_ref().map(|r| r.get(locale))
    }

    pub fn country_display_name(&self, locale: Locale) -> &str {
        self.country_name.get(locale)
    }

    /// Compared on the Latin country name, independent of the active locale.
    #[inline]
    pub fn is_in_china(&self) -> bool {
        self.country_name.en == HOME_COUNTRY
    }

    /// `"Name, Region, Country"` in the given locale, skipping empty parts.
    pub fn describe(&self, locale: Locale) -> String {
        let parts = [
            Some(self.display_name(locale)),
            self.region_display_name(locale),
            Some(self.country_display_name(locale)),
        ];
        parts
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl NameMatch for PlaceEntry {
    fn name_in(&self, locale: Locale) -> &str {
        self.display_name(locale)
    }
}

/// One row of the persisted dataset, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceRow {
    pub local_name: String,
    pub foreign_name: String,
    pub region_local_name: String,
    pub region_foreign_name: String,
    pub country_local_name: String,
    pub country_foreign_name: String,
}

impl SourceRow {
    pub fn new(fields: [&str; 6]) -> Self {
        let [local, foreign, region_local, region_foreign, country_local, country_foreign] =
            fields;
        SourceRow {
            local_name: local.to_owned(),
            foreign_name: foreign.to_owned(),
            region_local_name: region_local.to_owned(),
            region_foreign_name: region_foreign.to_owned(),
            country_local_name: country_local.to_owned(),
            country_foreign_name: country_foreign.to_owned(),
        }
    }

    pub fn fields(&self) -> [&str; 6] {
        [
            &self.local_name,
            &self.foreign_name,
            &self.region_local_name,
            &self.region_foreign_name,
            &self.country_local_name,
            &self.country_foreign_name,
        ]
    }

    /// Describes why the row cannot become a gazetteer entry, if it can't:
    /// an empty city name in either script, or a region named in one script
    /// only.
    pub fn defect(&self) -> Option<String> {
        if self.local_name.is_empty() || self.foreign_name.is_empty() {
            return Some(format!(
                "city {:?}/{:?} missing a name in one script",
                self.local_name, self.foreign_name
            ));
        }
        if self.region_local_name.is_empty() != self.region_foreign_name.is_empty() {
            return Some(format!(
                "region {:?}/{:?} named in one script only",
                self.region_local_name, self.region_foreign_name
            ));
        }
        None
    }

    fn country(&self) -> Localized {
        Localized::new(&self.country_foreign_name, &self.country_local_name)
    }

    fn region(&self) -> Localized {
        Localized::new(&self.region_foreign_name, &self.region_local_name)
    }

    fn city_entry(&self) -> PlaceEntry {
        let region = self.region();
        PlaceEntry {
            key: PlaceKey::city(&self.foreign_name),
            name: Localized::new(&self.foreign_name, &self.local_name),
            region_name: (!region.en.is_empty() || !region.zh.is_empty()).then_some(region),
            country_name: self.country(),
        }
    }

    fn region_entry(&self) -> PlaceEntry {
        PlaceEntry {
            key: PlaceKey::region(&self.region_foreign_name),
            name: self.region(),
            region_name: None,
            country_name: self.country(),
        }
    }
}

/// The in-memory place table.
///
/// Immutable after construction. Entries keep insertion order for
/// enumeration; the key index gives O(1) lookup. Share it by reference
/// (or `Arc`) between readers, no locking needed.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    entries: Vec<PlaceEntry>,
    index: HashMap<PlaceKey, usize>,
}

impl Gazetteer {
    /// An empty gazetteer ("not ready").
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the table from dataset rows, in order.
    ///
    /// Each row yields a city. The first row naming a region (by its local
    /// name) also yields a region entry, placed just before that city; rows
    /// with no region name yield none. A later record with an existing key
    /// replaces the earlier one where it stands.
    ///
    /// Fails on the first malformed row (see [`SourceRow::defect`]); no
    /// partial table is returned.
    pub fn try_from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = SourceRow>,
    {
        let mut db = Gazetteer::default();
        let mut seen_regions: HashSet<String> = HashSet::new();

        for (n, row) in rows.into_iter().enumerate() {
            if let Some(defect) = row.defect() {
                return Err(GazetteerError::InvalidData(format!("row {}: {defect}", n + 1)));
            }
            if !row.region_local_name.is_empty()
                && seen_regions.insert(row.region_local_name.clone())
            {
                db.insert(row.region_entry());
            }
            db.insert(row.city_entry());
        }
        Ok(db)
    }

    /// Like [`Self::try_from_rows`], but a malformed row is logged and
    /// yields the empty gazetteer.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = SourceRow>,
    {
        Self::try_from_rows(rows).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "malformed rows, continuing empty");
            Gazetteer::empty()
        })
    }

    fn insert(&mut self, entry: PlaceEntry) {
        match self.index.get(&entry.key) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, key: &PlaceKey) -> Option<&PlaceEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn get_city(&self, name: &str) -> Option<&PlaceEntry> {
        self.get(&PlaceKey::city(name))
    }

    pub fn get_region(&self, name: &str) -> Option<&PlaceEntry> {
        self.get(&PlaceKey::region(name))
    }

    /// Resolves a bare Latin key, as stored in the favorites file: cities
    /// win over regions of the same name.
    pub fn resolve(&self, name: &str) -> Option<&PlaceEntry> {
        self.get_city(name).or_else(|| self.get_region(name))
    }

    /// Lenient lookup of a typed name in `locale` (accent/case-insensitive),
    /// first match in insertion order.
    pub fn find_by_name(&self, name: &str, locale: Locale) -> Option<&PlaceEntry> {
        if name.trim().is_empty() {
            return None;
        }
        self.entries.iter().find(|e| e.is_named(name, locale))
    }

    /// All entries, in insertion order.
    pub fn all(&self) -> &[PlaceEntry] {
        &self.entries
    }

    pub fn cities(&self) -> impl Iterator<Item = &PlaceEntry> {
        self.entries.iter().filter(|e| e.is_city())
    }

    pub fn regions(&self) -> impl Iterator<Item = &PlaceEntry> {
        self.entries.iter().filter(|e| e.is_region())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> GazetteerStats {
        let regions = self.regions().count();
        GazetteerStats {
            cities: self.entries.len() - regions,
            regions,
        }
    }
}
