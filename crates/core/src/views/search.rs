/// Something a search box can match against.
pub trait Searchable {
    /// `needle` is already lowercased and non-empty.
    fn matches(&self, needle: &str) -> bool;
}

/// Items matching `query` (case-insensitive substring), in their
/// original order. An empty query keeps everything.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    matching_indices(items, query)
        .into_iter()
        .map(|idx| &items[idx])
        .collect()
}

/// Positions of the items `filter` would keep.
pub fn matching_indices<T: Searchable>(items: &[T], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| needle.is_empty() || item.matches(&needle))
        .map(|(idx, _)| idx)
        .collect()
}
