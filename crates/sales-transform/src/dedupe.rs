use std::collections::BTreeSet;

/// Drop every record whose key was already seen, keeping the first
/// occurrence in input order. Returns the kept records and the drop count.
pub fn dedupe_by_key<T, F>(records: Vec<T>, key: F) -> (Vec<T>, usize)
where
    F: Fn(&T) -> &str,
{
    let before = records.len();
    let mut seen = BTreeSet::new();
    let kept: Vec<T> = records
        .into_iter()
        .filter(|record| seen.insert(key(record).trim().to_string()))
        .collect();
    let removed = before - kept.len();
    (kept, removed)
}
