//! Best-match locale resolution.
//!
//! Names, dates and media are tagged with a region code (`wor`, `ss`, `us`,
//! `eu`, `jp`, ...); synopses and genres with a language code (`en`, `fr`,
//! ...). Every lookup goes through [`resolve`] so the fallback order is the
//! same everywhere: requested, then fallback, then the first element.

/// World region, the default for names and release dates.
pub const REGION_WORLD: &str = "wor";

/// ScreenScraper's own region, used as the media pool for frontend exports.
pub const REGION_SCREENSCRAPER: &str = "ss";

/// Default language for synopses and genres.
pub const LANGUAGE_ENGLISH: &str = "en";

/// An item tagged with a region or language code.
pub trait Localized {
    fn locale(&self) -> &str;
}

impl<T: Localized + ?Sized> Localized for &T {
    fn locale(&self) -> &str {
        (**self).locale()
    }
}

/// Pick the best item for `requested`.
///
/// Fallback order: exact `requested` match, exact `fallback` match, first
/// element. Returns `None` only when `items` is empty.
pub fn resolve<'a, T: Localized>(items: &'a [T], requested: &str, fallback: &str) -> Option<&'a T> {
    items
        .iter()
        .find(|item| item.locale() == requested)
        .or_else(|| items.iter().find(|item| item.locale() == fallback))
        .or_else(|| items.first())
}

#[cfg(test)]
#[path = "tests/locale_tests.rs"]
mod tests;
