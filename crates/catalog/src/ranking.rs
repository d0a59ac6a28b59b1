//! Score-based ordering shared by popular, trending and recommended lists

/// Orders `items` by descending score and keeps the first `limit`
///
/// The sort is stable, so equal scores keep their catalog order.
pub(crate) fn top_by<'a, T, I, F>(items: I, limit: usize, score: F) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> f64,
{
    if limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &'a T)> = items.into_iter().map(|item| (score(item), item)).collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, item)| item).collect()
}
