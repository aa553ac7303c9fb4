use std::fs;
use std::path::Path;

use log::debug;

use crate::error::PipelineError;
use crate::log_store::LogStore;

/// Отчёт по хостам: `host,count`, по строке на хост.
pub fn render_hosts(rows: &[(String, usize)]) -> String {
    rows.iter()
        .map(|(host, count)| format!("{},{}\n", host, count))
        .collect()
}

/// Отчёт по ресурсам: один путь на строку, без счётчиков.
pub fn render_resources(paths: &[String]) -> String {
    paths.iter().map(|path| format!("{}\n", path)).collect()
}

/// Отчёт по часовым окнам: `start,count`.
pub fn render_hours(rows: &[(String, usize)]) -> String {
    rows.iter()
        .map(|(start, count)| format!("{},{}\n", start, count))
        .collect()
}

/// Отчёт о блокировках: восстановленные строки лога в исходном порядке.
///
/// Пустой список даёт пустую строку, файл при этом всё равно создаётся.
pub fn render_blocked(store: &LogStore, blocked: &[usize]) -> String {
    let records = store.records();
    blocked
        .iter()
        .map(|&idx| format!("{}\n", records[idx].blocked_line()))
        .collect()
}

/// Записывает готовый отчёт в файл.
pub fn write_report(path: &Path, contents: &str) -> Result<(), PipelineError> {
    debug!("Writing {} bytes to {}", contents.len(), path.display());
    fs::write(path, contents).map_err(|source| PipelineError::WriteReport {
        path: path.to_path_buf(),
        source,
    })
}
