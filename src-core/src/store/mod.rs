//! Historical-values store: the one durable collection in the system.
//!
//! Reads are best-effort ("read if present"); writes are opportunistic
//! seeds that must never fail a request.

pub mod history_service;
pub mod memory_repository;
pub mod sqlite_repository;

pub use history_service::HistoryService;
pub use memory_repository::MemoryHistoryRepository;
pub use sqlite_repository::{build_pool, SqliteHistoryRepository, SqlitePool};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;

/// One stored point of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub series: String,
    pub date: NaiveDate,
    pub value: f64,
}

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Stored points for `series` within `from..=to`, ascending by date.
    fn load_series(&self, series: &str, from: NaiveDate, to: NaiveDate) -> Result<Vec<HistoryRow>>;

    /// Insert rows, skipping any (series, date) pair already present.
    /// Returns the number of rows actually inserted.
    async fn seed_series(&self, rows: Vec<HistoryRow>) -> Result<usize>;
}
