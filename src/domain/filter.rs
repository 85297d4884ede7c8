use super::models::Entry;

/// Lowercased, trimmed form used on both sides of a comparison.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// `needle` must already be normalized and non-empty.
#[must_use]
pub fn entry_matches(entry: &Entry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle)
        || entry.id.0.to_lowercase().contains(needle)
        || entry
            .sequence_number
            .is_some_and(|n| n.to_string().contains(needle))
}

/// Indices into `entries` of every entry visible under `query`, in input order.
#[must_use]
pub fn filter_entries(entries: &[Entry], query: &str) -> Vec<usize> {
    let needle = normalize(query);
    if needle.is_empty() {
        return (0..entries.len()).collect();
    }

    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| entry_matches(e, &needle))
        .map(|(i, _)| i)
        .collect()
}

#[must_use]
pub fn visible_entries<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    filter_entries(entries, query)
        .into_iter()
        .map(|i| &entries[i])
        .collect()
}
