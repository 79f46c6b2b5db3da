// crates/gazetteer-core/src/locale.rs

//! # Locales
//!
//! The gazetteer is bilingual: every place has a Latin-script (English) name
//! and a CJK (Chinese) name. The active locale decides which name is shown,
//! which name is matched against user input, and how both sides are
//! normalized before comparison.

use crate::error::GazetteerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two supported display/input scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Latin script. Names in this locale are the "foreign" names and double
    /// as place keys.
    #[default]
    English,
    /// CJK script. Names in this locale are the "local" names.
    Chinese,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Chinese];

    /// Short tag used in settings files and on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Chinese => "zh",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = GazetteerError;

    /// Accepts `en`/`english` and `zh`/`chinese`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("en") || tag.eq_ignore_ascii_case("english") {
            Ok(Locale::English)
        } else if tag.eq_ignore_ascii_case("zh") || tag.eq_ignore_ascii_case("chinese") {
            Ok(Locale::Chinese)
        } else {
            Err(GazetteerError::UnsupportedLocale(s.to_owned()))
        }
    }
}

/// A display string per supported locale.
///
/// Replaces a locale-string keyed map: [`Localized::get`] is an exhaustive
/// match, so adding a locale is a compile error until every reader handles it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub zh: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Localized {
            en: en.into(),
            zh: zh.into(),
        }
    }

    #[inline]
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::English => &self.en,
            Locale::Chinese => &self.zh,
        }
    }

    /// True when at least one locale has no text.
    pub fn has_gap(&self) -> bool {
        Locale::ALL.iter().any(|&l| self.get(l).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_and_names() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("English".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!(" ZH ".parse::<Locale>().unwrap(), Locale::Chinese);
        assert_eq!("chinese".parse::<Locale>().unwrap(), Locale::Chinese);
    }

    #[test]
    fn rejects_unknown_locale() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(matches!(err, GazetteerError::UnsupportedLocale(ref s) if s == "fr"));
    }

    #[test]
    fn localized_reads_the_requested_script() {
        let name = Localized::new("Beijing", "北京");
        assert_eq!(name.get(Locale::English), "Beijing");
        assert_eq!(name.get(Locale::Chinese), "北京");
        assert!(!name.has_gap());
        assert!(Localized::new("Beijing", "").has_gap());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }
}
