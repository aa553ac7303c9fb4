use crate::log_store::LogStore;

/// Хосты с наибольшим числом запросов.
///
/// Сортировка по убыванию количества; при равных счётчиках раньше идёт хост,
/// который первым встретился во входном файле.
pub fn top_hosts(store: &LogStore, limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize, usize)> = store
        .host_index()
        .iter()
        .map(|(host, bucket)| {
            let first_seen = bucket.first().copied().unwrap_or(usize::MAX);
            (host.clone(), bucket.len(), first_seen)
        })
        .collect();

    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    counts.truncate(limit);

    counts
        .into_iter()
        .map(|(host, count, _)| (host, count))
        .collect()
}
