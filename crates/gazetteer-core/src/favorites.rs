// crates/gazetteer-core/src/favorites.rs

//! The user's saved cities.
//!
//! Stored as plain UTF-8 text, one place key per line. The first key in the
//! file becomes the current city when the list is loaded.

use crate::error::{FavoritesError, Result};
use crate::model::Gazetteer;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    cities: Vec<String>,
    current: Option<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the favorites file. A missing or unreadable file is an empty
    /// list with no current city.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no favorites file");
                Self::default()
            }
        }
    }

    pub fn parse(text: &str) -> Self {
        let cities: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .collect();
        let current = cities.first().cloned();
        Favorites { cities, current }
    }

    /// Writes the list, one key per line. The current city goes first so it
    /// is current again on the next [`Self::load`]; the rest keep list order.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = fs::File::create(path.as_ref())?;
        if let Some(current) = &self.current {
            writeln!(file, "{current}")?;
        }
        for city in self.cities.iter().filter(|c| Some(*c) != self.current.as_ref()) {
            writeln!(file, "{city}")?;
        }
        file.flush()?;
        Ok(())
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.cities.iter().any(|c| c == key)
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Appends a place known to `gazetteer` and makes it current.
    pub fn add(&mut self, key: &str, gazetteer: &Gazetteer) -> std::result::Result<(), FavoritesError> {
        if gazetteer.resolve(key).is_none() {
            return Err(FavoritesError::UnknownCity(key.to_owned()));
        }
        if self.contains(key) {
            return Err(FavoritesError::AlreadyListed(key.to_owned()));
        }
        self.cities.push(key.to_owned());
        self.current = Some(key.to_owned());
        Ok(())
    }

    /// Removes a saved place. The entry that slides into its slot (wrapping
    /// to the front) becomes current; an emptied list has no current city.
    pub fn remove(&mut self, key: &str) -> std::result::Result<(), FavoritesError> {
        let idx = self
            .cities
            .iter()
            .position(|c| c == key)
            .ok_or_else(|| FavoritesError::NotInList(key.to_owned()))?;
        self.cities.remove(idx);
        self.current = if self.cities.is_empty() {
            None
        } else {
            Some(self.cities[idx % self.cities.len()].clone())
        };
        Ok(())
    }

    /// Makes a saved place current.
    pub fn shift(&mut self, key: &str) -> std::result::Result<(), FavoritesError> {
        if !self.contains(key) {
            return Err(FavoritesError::NotInList(key.to_owned()));
        }
        self.current = Some(key.to_owned());
        Ok(())
    }
}
