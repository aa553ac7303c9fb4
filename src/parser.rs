use chrono::NaiveDateTime;
use log::debug;

use crate::error::ParseError;
use crate::record::{LogRecord, TIMESTAMP_FORMAT};

/// Длина суффикса со смещением зоны, например " -0400"
const TIMEZONE_SUFFIX_LEN: usize = 6;

/// Разбирает одну строку access-лога в [`LogRecord`].
///
/// `index` задаёт позицию строки во входном файле с нуля; она сохраняется в
/// записи как ключ исходного порядка. В сообщениях об ошибках строки
/// нумеруются с 1.
///
/// Поля извлекаются позиционно: хост берётся из первого токена, код ответа
/// и размер из двух последних, запрос из текста между первой парой кавычек,
/// временная метка из текста между `[` и `]`.
pub fn parse_line(line: &str, index: usize) -> Result<LogRecord, ParseError> {
    let line_no = index + 1;

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        debug!("line {}: too few fields: {:?}", line_no, line);
        return Err(ParseError::TooFewFields { line: line_no });
    }

    let host = tokens[0].to_string();
    let status_code = tokens[tokens.len() - 2].to_string();
    let bytes_raw = tokens[tokens.len() - 1].to_string();

    let request = extract_between(line, '"', '"')
        .ok_or(ParseError::MissingRequest { line: line_no })?;
    let timestamp_raw = extract_between(line, '[', ']')
        .ok_or(ParseError::MissingTimestamp { line: line_no })?;

    let bytes = parse_bytes(&bytes_raw, line_no)?;
    let timestamp = parse_timestamp(timestamp_raw, line_no)?;

    Ok(LogRecord {
        host,
        timestamp_raw: timestamp_raw.to_string(),
        timestamp,
        request: request.to_string(),
        status_code,
        bytes_raw,
        bytes,
        original_index: index,
    })
}

/// Возвращает текст между первым вхождением `open` и следующим за ним `close`.
fn extract_between(line: &str, open: char, close: char) -> Option<&str> {
    let start = line.find(open)? + open.len_utf8();
    let rest = &line[start..];
    let end = rest.find(close)?;
    Some(&rest[..end])
}

/// Размер ответа: `-` означает, что байты не передавались.
fn parse_bytes(raw: &str, line_no: usize) -> Result<u64, ParseError> {
    if raw == "-" {
        return Ok(0);
    }
    raw.parse::<u64>().map_err(|_| ParseError::BadBytes {
        line: line_no,
        value: raw.to_string(),
    })
}

/// Переводит текст временной метки в секунды Unix.
///
/// Последние 6 символов занимает смещение зоны; оно отбрасывается, а не
/// применяется, поэтому все метки сравниваются в одной шкале.
fn parse_timestamp(raw: &str, line_no: usize) -> Result<i64, ParseError> {
    let trimmed = raw
        .len()
        .checked_sub(TIMEZONE_SUFFIX_LEN)
        .and_then(|end| raw.get(..end))
        .ok_or_else(|| ParseError::BadTimestamp {
            line: line_no,
            value: raw.to_string(),
        })?;

    let datetime = NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT).map_err(|_| {
        ParseError::BadTimestamp {
            line: line_no,
            value: raw.to_string(),
        }
    })?;

    Ok(datetime.and_utc().timestamp())
}
