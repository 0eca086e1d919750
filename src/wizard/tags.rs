//! Tag resolution against a destination's configured tag set.

use crate::model::destination::DestinationTag;

/// Matches requested tag names against the destination's tag set.
///
/// Matching is case-insensitive on trimmed names. The matched list preserves
/// the first-seen order of the requested names with duplicates collapsed;
/// unmatched names are returned as given so they can be reported verbatim.
///
/// Pure function with no side effects.
pub fn resolve_destination_tags(
    available: &[DestinationTag],
    requested: &[String],
) -> (Vec<DestinationTag>, Vec<String>) {
    let mut matched: Vec<DestinationTag> = Vec::new();
    let mut missing: Vec<String> = Vec::new();

    for name in requested {
        let key = name.trim().to_lowercase();
        match available
            .iter()
            .find(|tag| tag.name.trim().to_lowercase() == key)
        {
            Some(tag) => {
                if !matched.iter().any(|m| m.id == tag.id) {
                    matched.push(tag.clone());
                }
            }
            None => missing.push(name.clone()),
        }
    }

    (matched, missing)
}
