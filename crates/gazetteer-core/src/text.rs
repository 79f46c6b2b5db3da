// crates/gazetteer-core/src/text.rs
use crate::locale::Locale;
use std::borrow::Cow;

/// Latin-script normalization for a single character stream.
///
/// Lowercases with full Unicode rules and keeps only `a..=z` and the ASCII
/// space. Everything else (digits, punctuation, diacritics, CJK) is dropped,
/// so `"Xi'an"` becomes `"xian"` and `"Zürich"` becomes `"zrich"`.
#[inline]
fn latin_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
}

/// Normalizes user input or a candidate name for prefix matching.
///
/// - [`Locale::English`]: lowercase, then strip every character that is not
///   a lowercase ASCII letter or a space.
/// - [`Locale::Chinese`]: the text is returned unchanged. CJK has no case and
///   dataset names may carry punctuation that has to match literally.
///
/// # Examples
///
/// ```rust
/// use gazetteer_core::text::normalize;
/// use gazetteer_core::Locale;
///
/// assert_eq!(normalize("New York!", Locale::English), "new york");
/// assert_eq!(normalize("北京", Locale::English), "");
/// assert_eq!(normalize("北京·", Locale::Chinese), "北京·");
/// ```
pub fn normalize(text: &str, locale: Locale) -> Cow<'_, str> {
    match locale {
        Locale::English => Cow::Owned(latin_chars(text).collect()),
        Locale::Chinese => Cow::Borrowed(text),
    }
}

/// Returns `true` if `candidate`, normalized for `locale`, starts with the
/// already-normalized `query`.
///
/// The candidate side is normalized lazily, so a scan over the whole
/// gazetteer allocates nothing per entry.
///
/// ```rust
/// use gazetteer_core::text::starts_with_normalized;
/// use gazetteer_core::Locale;
///
/// assert!(starts_with_normalized("Xi'an", "xia", Locale::English));
/// assert!(!starts_with_normalized("Amsterdam", "ms", Locale::English));
/// assert!(starts_with_normalized("上海", "上", Locale::Chinese));
/// ```
pub fn starts_with_normalized(candidate: &str, query: &str, locale: Locale) -> bool {
    match locale {
        Locale::English => {
            let mut name = latin_chars(candidate);
            query.chars().all(|q| name.next() == Some(q))
        }
        Locale::Chinese => candidate.starts_with(query),
    }
}

/// Convert a string into a folded key suitable for lenient name lookup.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// Used to resolve typed names to places (`"zurich"` finds `Zürich`). It is
/// deliberately *not* used for autocomplete ranking, which keeps the stricter
/// [`normalize`] rule.
///
/// # Examples
///
/// ```rust
/// use gazetteer_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after [`fold_key`].
///
/// ```rust
/// use gazetteer_core::text::equals_folded;
///
/// assert!(equals_folded("MÜNCHEN", "munchen"));
/// assert!(!equals_folded("Berlin", "Paris"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
