use std::path::PathBuf;
use thiserror::Error;

/// Ошибки разбора одной строки лога.
///
/// Номер строки считается с 1, чтобы сообщение указывало прямо на место в файле.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected at least 2 whitespace-separated fields")]
    TooFewFields { line: usize },

    #[error("line {line}: no quoted request section found")]
    MissingRequest { line: usize },

    #[error("line {line}: no [timestamp] section found")]
    MissingTimestamp { line: usize },

    #[error("line {line}: invalid byte count '{value}'")]
    BadBytes { line: usize, value: String },

    #[error("line {line}: invalid timestamp '{value}'")]
    BadTimestamp { line: usize, value: String },
}

/// Нарушение внутреннего инварианта при агрегации уже разобранных записей.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    #[error("grouped request '{request}' has fewer than 2 tokens")]
    MalformedRequest { request: String },

    #[error("window start {secs} is outside the representable time range")]
    TimestampOutOfRange { secs: i64 },
}

/// Итоговая ошибка конвейера: чтение, разбор или агрегация.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}
