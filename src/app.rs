use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};

use crate::error::PipelineError;
use crate::features::{blocked, hosts, hours, resources};
use crate::log_store::LogStore;
use crate::reader;
use crate::report;

/// Число строк в каждом ранговом отчёте
const TOP_LIMIT: usize = 10;

/// Пути четырёх выходных отчётов.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub hosts: PathBuf,
    pub resources: PathBuf,
    pub hours: PathBuf,
    pub blocked: PathBuf,
}

/// Сводка одного запуска конвейера.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub records: usize,
    pub unique_hosts: usize,
    pub blocked: usize,
}

/// Полный прогон: чтение, разбор, четыре отчёта.
///
/// Отчёты считаются параллельно над общим неизменяемым хранилищем. Файлы
/// пишутся только после того, как все вычисления завершились успешно, поэтому
/// любая ошибка оставляет выходные пути нетронутыми.
pub fn run(input: &Path, outputs: &OutputPaths) -> Result<RunSummary, PipelineError> {
    let started = Instant::now();

    let records = reader::read_log(input)?;
    info!("Parsed {} records from {}", records.len(), input.display());

    let store = LogStore::from_records(records);

    let ((top_hosts, top_resources), (busiest, blocked_rows)) = rayon::join(
        || {
            rayon::join(
                || hosts::top_hosts(&store, TOP_LIMIT),
                || resources::top_resources(&store, TOP_LIMIT),
            )
        },
        || {
            rayon::join(
                || hours::busiest_windows(&store, TOP_LIMIT),
                || blocked::blocked_indices(&store),
            )
        },
    );
    let top_resources = top_resources?;
    let busiest = busiest?;

    debug!(
        "Features ready: {} hosts, {} resources, {} windows, {} blocked records",
        top_hosts.len(),
        top_resources.len(),
        busiest.len(),
        blocked_rows.len()
    );

    report::write_report(&outputs.hosts, &report::render_hosts(&top_hosts))?;
    report::write_report(&outputs.resources, &report::render_resources(&top_resources))?;
    report::write_report(&outputs.hours, &report::render_hours(&busiest))?;
    report::write_report(&outputs.blocked, &report::render_blocked(&store, &blocked_rows))?;

    let summary = RunSummary {
        records: store.len(),
        unique_hosts: store.unique_hosts(),
        blocked: blocked_rows.len(),
    };
    info!(
        "Analysis finished in {:?}: {} records, {} unique hosts, {} blocked",
        started.elapsed(),
        summary.records,
        summary.unique_hosts,
        summary.blocked
    );

    Ok(summary)
}
