use crate::error::ProcessingError;
use crate::log_store::LogStore;

/// Ресурсы с наибольшим суммарным трафиком.
///
/// Записи группируются по полной строке запроса, байты суммируются внутри
/// группы. Из каждой группы-победителя в отчёт идёт только путь, то есть
/// второй токен строки запроса. При равных суммах раньше идёт группа,
/// которая первой встретилась во входном файле.
pub fn top_resources(store: &LogStore, limit: usize) -> Result<Vec<String>, ProcessingError> {
    let records = store.records();

    let mut totals: Vec<(&String, u64, usize)> = store
        .request_index()
        .iter()
        .map(|(request, bucket)| {
            let total: u64 = bucket.iter().map(|&idx| records[idx].bytes).sum();
            let first_seen = bucket.first().copied().unwrap_or(usize::MAX);
            (request, total, first_seen)
        })
        .collect();

    totals.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    totals.truncate(limit);

    totals
        .into_iter()
        .map(|(request, _, _)| {
            request
                .split_whitespace()
                .nth(1)
                .map(str::to_string)
                .ok_or_else(|| ProcessingError::MalformedRequest {
                    request: request.clone(),
                })
        })
        .collect()
}
