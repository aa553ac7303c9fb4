use chrono::DateTime;

use crate::error::ProcessingError;
use crate::log_store::LogStore;
use crate::record::TIMESTAMP_FORMAT;

/// Ширина скользящего окна в секундах
const WINDOW_SECS: i64 = 3600;

/// Смещение зоны, приписываемое к началу окна в отчёте
const TIMEZONE_SUFFIX: &str = " -0400";

/// Самые загруженные часовые интервалы.
///
/// Для каждой различной метки `t` считается число записей в окне
/// `(t - 3600, t]`. Лучшие `limit` окон выводятся началом интервала
/// (`t - 3600` в текстовом виде) и счётчиком; при равных счётчиках раньше
/// идёт более раннее окно.
pub fn busiest_windows(
    store: &LogStore,
    limit: usize,
) -> Result<Vec<(String, usize)>, ProcessingError> {
    let records = store.records();

    // Один проход двумя указателями: правый идёт по записям, левый догоняет,
    // пока все метки между ними не окажутся внутри окна.
    let mut counts: Vec<(i64, usize)> = Vec::new();
    let mut left = 0usize;

    for right in 0..records.len() {
        let anchor = records[right].timestamp;
        while records[left].timestamp <= anchor - WINDOW_SECS {
            left += 1;
        }
        let count = right - left + 1;

        // Для серии одинаковых меток остаётся счёт последней записи серии,
        // он покрывает серию целиком.
        match counts.last_mut() {
            Some(entry) if entry.0 == anchor => entry.1 = count,
            _ => counts.push((anchor, count)),
        }
    }

    // Стабильная сортировка сохраняет хронологию среди равных счётчиков.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);

    counts
        .into_iter()
        .map(|(anchor, count)| Ok((format_window_start(anchor - WINDOW_SECS)?, count)))
        .collect()
}

/// Форматирует начало окна в исходный текстовый вид метки.
fn format_window_start(secs: i64) -> Result<String, ProcessingError> {
    let datetime =
        DateTime::from_timestamp(secs, 0).ok_or(ProcessingError::TimestampOutOfRange { secs })?;
    Ok(format!(
        "{}{}",
        datetime.naive_utc().format(TIMESTAMP_FORMAT),
        TIMEZONE_SUFFIX
    ))
}
