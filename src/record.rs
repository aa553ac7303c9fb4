/// Строка запроса, по которой распознаётся попытка входа.
pub const LOGIN_REQUEST: &str = "POST /login HTTP/1.0";

/// Формат текстовой временной метки без смещения зоны.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

/// Одна разобранная запись access-лога.
///
/// После разбора запись не изменяется; порядок во входном файле сохраняется
/// через `original_index` и служит ключом сортировки при равных временных метках.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Хост клиента (первый токен строки)
    pub host: String,
    /// Текст временной метки между `[` и `]`, как в исходной строке
    pub timestamp_raw: String,
    /// Временная метка в секундах Unix, без учёта смещения зоны
    pub timestamp: i64,
    /// Строка HTTP-запроса между первой парой кавычек
    pub request: String,
    /// Код ответа как текст (предпоследний токен)
    pub status_code: String,
    /// Размер ответа как текст (последний токен, может быть `-`)
    pub bytes_raw: String,
    /// Размер ответа в байтах, `-` трактуется как 0
    pub bytes: u64,
    /// Позиция записи во входном файле, с нуля
    pub original_index: usize,
}

impl LogRecord {
    /// Классификация попытки входа: `+1` для успешной, `-1` для неудачной.
    /// Возвращает `None`, если запись не является попыткой входа.
    pub fn login_check(&self) -> Option<i32> {
        if self.request != LOGIN_REQUEST {
            return None;
        }
        if self.status_code == "200" {
            Some(1)
        } else {
            Some(-1)
        }
    }

    /// Восстанавливает строку лога для отчёта о заблокированных запросах.
    pub fn blocked_line(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.host, self.timestamp_raw, self.request, self.status_code, self.bytes_raw
        )
    }
}
