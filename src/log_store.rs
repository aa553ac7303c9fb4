use std::collections::HashMap;

use dashmap::DashMap;
use rayon::prelude::*;

use crate::record::LogRecord;

/// Материализованная последовательность записей с индексами для быстрого поиска.
///
/// Записи хранятся в исходном порядке файла. Индексы отображают хост и строку
/// запроса в отсортированные по возрастанию списки позиций `original_index`,
/// поэтому каждая корзина сама по себе хронологична.
#[derive(Debug)]
pub struct LogStore {
    records: Vec<LogRecord>,
    host_index: HashMap<String, Vec<usize>>,
    request_index: HashMap<String, Vec<usize>>,
}

impl LogStore {
    /// Строит хранилище из разобранных записей.
    ///
    /// Индексы накапливаются параллельно в DashMap и замораживаются в обычные
    /// HashMap; корзины сортируются, потому что параллельная вставка не
    /// сохраняет исходный порядок.
    pub fn from_records(records: Vec<LogRecord>) -> Self {
        let host_acc: DashMap<String, Vec<usize>> = DashMap::new();
        let request_acc: DashMap<String, Vec<usize>> = DashMap::new();

        records.par_iter().for_each(|record| {
            host_acc
                .entry(record.host.clone())
                .or_insert_with(|| Vec::with_capacity(4))
                .push(record.original_index);
            request_acc
                .entry(record.request.clone())
                .or_insert_with(|| Vec::with_capacity(4))
                .push(record.original_index);
        });

        let mut host_index: HashMap<String, Vec<usize>> = host_acc.into_iter().collect();
        for bucket in host_index.values_mut() {
            bucket.sort_unstable();
        }

        let mut request_index: HashMap<String, Vec<usize>> = request_acc.into_iter().collect();
        for bucket in request_index.values_mut() {
            bucket.sort_unstable();
        }

        Self {
            records,
            host_index,
            request_index,
        }
    }

    /// Все записи в исходном порядке.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Число уникальных хостов.
    pub fn unique_hosts(&self) -> usize {
        self.host_index.len()
    }

    /// Число уникальных строк запроса.
    pub fn unique_requests(&self) -> usize {
        self.request_index.len()
    }

    /// Индекс хост → позиции записей.
    pub fn host_index(&self) -> &HashMap<String, Vec<usize>> {
        &self.host_index
    }

    /// Индекс запрос → позиции записей.
    pub fn request_index(&self) -> &HashMap<String, Vec<usize>> {
        &self.request_index
    }

    /// Позиции записей одного хоста в хронологическом порядке.
    pub fn host_records(&self, host: &str) -> &[usize] {
        self.host_index
            .get(host)
            .map(|bucket| bucket.as_slice())
            .unwrap_or(&[])
    }
}
