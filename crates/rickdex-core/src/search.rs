//! Client-side name search over the currently loaded page

use crate::character::Character;

/// Filter a loaded page by case-insensitive name substring.
///
/// Only the characters passed in are considered; the remote collection is
/// never queried. Order is preserved.
pub fn filter_by_name<'a>(characters: &'a [Character], query: &str) -> Vec<&'a Character> {
    characters
        .iter()
        .filter(|c| c.matches_name(query))
        .collect()
}
