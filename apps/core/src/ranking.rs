use std::cmp::Ordering;

use crate::model::MatchedItem;

pub fn compare(a: &MatchedItem, b: &MatchedItem) -> Ordering {
    b.relevance
        .cmp(&a.relevance)
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Stable relevance sort over an owned buffer. Callers clone incoming
/// batches before sorting; caller-owned input is never reordered in place.
pub fn sort(items: &mut [MatchedItem]) {
    items.sort_by(compare);
}
