use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{HistoryRepository, HistoryRow};
use crate::errors::{Result, StorageError};

/// In-process store used when no database path is configured, and by
/// tests. Same read-if-present / insert-or-ignore semantics as the SQLite
/// repository.
#[derive(Default)]
pub struct MemoryHistoryRepository {
    rows: RwLock<BTreeMap<(String, NaiveDate), f64>>,
}

impl MemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryRepository for MemoryHistoryRepository {
    fn load_series(&self, series: &str, from: NaiveDate, to: NaiveDate) -> Result<Vec<HistoryRow>> {
        let rows = self
            .rows
            .read()
            .map_err(|_| StorageError::Pool("history lock poisoned".to_string()))?;

        Ok(rows
            .range((series.to_string(), from)..=(series.to_string(), to))
            .map(|((series, date), value)| HistoryRow {
                series: series.clone(),
                date: *date,
                value: *value,
            })
            .collect())
    }

    async fn seed_series(&self, rows: Vec<HistoryRow>) -> Result<usize> {
        let mut stored = self
            .rows
            .write()
            .map_err(|_| StorageError::Pool("history lock poisoned".to_string()))?;

        let mut inserted = 0;
        for row in rows {
            stored.entry((row.series, row.date)).or_insert_with(|| {
                inserted += 1;
                row.value
            });
        }
        Ok(inserted)
    }
}
