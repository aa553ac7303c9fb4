use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use rayon::prelude::*;

use crate::error::PipelineError;
use crate::parser;
use crate::record::LogRecord;

/// Читает файл лога и разбирает все строки в записи.
///
/// Файл читается буферизованно, строки разбираются параллельно. Первая же
/// ошибка разбора прерывает загрузку целиком, частичный результат не
/// возвращается.
pub fn read_log(path: &Path) -> Result<Vec<LogRecord>, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let lines: Vec<String> =
        reader
            .lines()
            .collect::<Result<_, _>>()
            .map_err(|source| PipelineError::ReadInput {
                path: path.to_path_buf(),
                source,
            })?;

    info!("Read {} lines from {}", lines.len(), path.display());

    let records = lines
        .par_iter()
        .enumerate()
        .map(|(index, line)| parser::parse_line(line, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(records)
}
