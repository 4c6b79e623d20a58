//! Facade coordinating the historical-series generator and the store.

use std::sync::Arc;

use rand::Rng;
use rust_decimal::prelude::ToPrimitive;

use super::{HistoryRepository, HistoryRow};
use crate::analytics::history::{generate_series, HistoricalPoint};
use crate::analytics::period::PeriodWindow;
use crate::analytics::round2;
use crate::catalog::MarketMetric;
use crate::errors::Result;

pub struct HistoryService {
    repo: Arc<dyn HistoryRepository>,
}

impl HistoryService {
    pub fn new(repo: Arc<dyn HistoryRepository>) -> Self {
        HistoryService { repo }
    }

    /// Points for a metric over a window: stored rows when any exist,
    /// otherwise a freshly generated series that is opportunistically
    /// written back. Seed failures are logged and never surfaced; two
    /// requests racing to seed the same window both succeed (the store
    /// skips duplicate rows).
    pub async fn series_for(
        &self,
        metric: MarketMetric,
        window: &PeriodWindow,
        rng: &mut (impl Rng + Send),
    ) -> Result<Vec<HistoricalPoint>> {
        let key = metric.series_key();

        let stored = self.repo.load_series(key, window.start, window.end)?;
        if !stored.is_empty() {
            return Ok(stored
                .into_iter()
                .map(|row| HistoricalPoint {
                    date: row.date,
                    value: round2(row.value),
                })
                .collect());
        }

        let profile = metric.profile();
        let points = generate_series(
            window.day_diff(),
            profile.current_value,
            profile.volatility,
            profile.trend_strength,
            window.end,
            rng,
        );

        let rows: Vec<HistoryRow> = points
            .iter()
            .map(|point| HistoryRow {
                series: key.to_string(),
                date: point.date,
                value: point.value.to_f64().unwrap_or_default(),
            })
            .collect();

        if let Err(err) = self.repo.seed_series(rows).await {
            log::warn!("best-effort seed of series '{}' failed: {}", key, err);
        }

        Ok(points)
    }
}
