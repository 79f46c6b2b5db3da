// crates/gazetteer-core/src/traits.rs
use crate::locale::Locale;
use crate::text::equals_folded;

/// Name-based matching helpers for types that expose a localized display name.
///
/// Implementors provide a `&str` view of their name per locale via
/// [`NameMatch::name_in`], and get [`NameMatch::is_named`] for free:
/// - Latin names compare on the [`fold_key`](crate::text::fold_key) form
///   (accent-insensitive and case-insensitive).
/// - CJK names compare exactly, after trimming the query. Transliterating
///   them would make homophones equal.
///
/// # Examples
/// ```rust
/// use gazetteer_core::traits::NameMatch;
/// use gazetteer_core::Locale;
///
/// struct Place(&'static str, &'static str);
/// impl NameMatch for Place {
///     fn name_in(&self, locale: Locale) -> &str {
///         match locale {
///             Locale::English => self.0,
///             Locale::Chinese => self.1,
///         }
///     }
/// }
///
/// let p = Place("Zürich", "苏黎世");
/// assert!(p.is_named("zurich", Locale::English));
/// assert!(p.is_named(" 苏黎世 ", Locale::Chinese));
/// assert!(!p.is_named("苏黎", Locale::Chinese));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching in `locale`.
    fn name_in(&self, locale: Locale) -> &str;

    #[inline]
    fn is_named(&self, q: &str, locale: Locale) -> bool {
        let name = self.name_in(locale);
        match locale {
            Locale::English => equals_folded(name, q.trim()),
            Locale::Chinese => name == q.trim(),
        }
    }
}
