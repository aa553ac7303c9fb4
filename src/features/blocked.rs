use rayon::prelude::*;

use crate::log_store::LogStore;
use crate::record::LogRecord;

/// Ширина окна подсчёта неудачных входов в секундах
const FAILURE_WINDOW_SECS: i64 = 20;

/// Длительность блокировки после срабатывания в секундах
const BLOCK_SECS: i64 = 300;

/// Сумма окна, при которой хост признаётся подбирающим пароль
const TRIGGER_SUM: i32 = -3;

/// Позиции записей, которые следовало заблокировать.
///
/// Состояние детектора не пересекается между хостами, поэтому хосты
/// обрабатываются параллельно. Итог объединяется, сортируется по исходному
/// порядку и очищается от повторов: пересекающиеся окна блокировки могут
/// пометить одну запись дважды.
pub fn blocked_indices(store: &LogStore) -> Vec<usize> {
    let mut blocked: Vec<usize> = store
        .host_index()
        .par_iter()
        .flat_map_iter(|(_, host_records)| blocked_for_host(store.records(), host_records))
        .collect();

    blocked.sort_unstable();
    blocked.dedup();
    blocked
}

/// Детектор для одного хоста.
///
/// По подпоследовательности логинов хоста ведётся скользящая сумма исходов
/// за последние 20 секунд, `(t - 20, t]`. Каждая запись, на которой сумма
/// равна ровно -3, открывает окно блокировки: все последующие записи хоста
/// с меткой строго меньше `t + 300` попадают в отчёт. Успешный вход внутри
/// окна не даёт сумме дойти до -3, а серия длиннее трёх неудач даёт суммы
/// -4 и ниже без повторного срабатывания.
fn blocked_for_host(records: &[LogRecord], host_records: &[usize]) -> Vec<usize> {
    // Логины хоста: позиция в его подпоследовательности, метка, исход
    let logins: Vec<(usize, i64, i32)> = host_records
        .iter()
        .enumerate()
        .filter_map(|(pos, &idx)| {
            let record = &records[idx];
            record
                .login_check()
                .map(|check| (pos, record.timestamp, check))
        })
        .collect();

    let mut blocked = Vec::new();
    let mut window_sum = 0i32;
    let mut left = 0usize;

    for right in 0..logins.len() {
        let (pos, anchor, check) = logins[right];
        window_sum += check;
        while logins[left].1 <= anchor - FAILURE_WINDOW_SECS {
            window_sum -= logins[left].2;
            left += 1;
        }

        if window_sum == TRIGGER_SUM {
            let end = anchor + BLOCK_SECS;
            for &idx in &host_records[pos + 1..] {
                if records[idx].timestamp >= end {
                    break;
                }
                blocked.push(idx);
            }
        }
    }

    blocked
}
