//! Entity selector helpers shared by options, applications and relationships.

use indexmap::IndexSet;

/// Marker that selects every entity of the model.
pub const WILDCARD: &str = "*";

/// Keyword spelling of [`WILDCARD`], only honoured when it is the sole selector entry.
pub const ALL_KEYWORD: &str = "all";

/// Remove duplicate names while keeping the first-seen order of the survivors.
pub fn dedupe<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names.into_iter().collect::<IndexSet<_>>().into_iter().collect()
}

/// Returns `true` if the list is the collapsed wildcard selector.
pub fn is_wildcard(names: &[String]) -> bool {
    names.len() == 1 && names[0] == WILDCARD
}
