use chrono::{Duration, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;

use super::round2;

/// One day of a synthetic metric series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Generate `days + 1` daily points ending at `today`, following a
/// multiplicative random walk with drift.
///
/// The walk starts below `current_value` (scaled down by the trend over the
/// window) and drifts back up; the final point is pinned to exactly
/// `current_value` so the chart always terminates at the known present-day
/// figure regardless of the draw. Expects `current_value > 0` and
/// `volatility` in `[0, 1]`; `days <= 0` yields the single present-day
/// point.
pub fn generate_series(
    days: i64,
    current_value: f64,
    volatility: f64,
    trend_strength: f64,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Vec<HistoricalPoint> {
    if days <= 0 {
        return vec![HistoricalPoint {
            date: today,
            value: round2(current_value),
        }];
    }

    let mut points = Vec::with_capacity(days as usize + 1);
    let trend_step = 1.0 + trend_strength / days as f64;
    let mut value = current_value * (1.0 - trend_strength * days as f64 / 365.0);

    for offset in (0..=days).rev() {
        let swing = rng.gen_range(1.0 - volatility / 2.0..=1.0 + volatility / 2.0);
        value *= swing * trend_step;

        points.push(HistoricalPoint {
            date: today - Duration::days(offset),
            // Pin the terminal point to the known present-day value.
            value: if offset == 0 {
                round2(current_value)
            } else {
                round2(value)
            },
        });
    }

    points
}
