use chrono::{Datelike, Duration, NaiveDate};

use crate::errors::{Result, ValidationError};

/// Lookback window tags accepted by the dashboard endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    SevenDays,
    ThirtyDays,
    NinetyDays,
    OneYear,
    YearToDate,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::SevenDays,
        Period::ThirtyDays,
        Period::NinetyDays,
        Period::OneYear,
        Period::YearToDate,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Period::SevenDays => "7d",
            Period::ThirtyDays => "30d",
            Period::NinetyDays => "90d",
            Period::OneYear => "1y",
            Period::YearToDate => "ytd",
        }
    }

    pub fn parse(raw: &str) -> Result<Period> {
        Period::ALL
            .into_iter()
            .find(|p| p.tag() == raw.trim().to_lowercase())
            .ok_or_else(|| {
                ValidationError::InvalidInput(format!(
                    "unknown period '{}', expected one of 7d, 30d, 90d, 1y, ytd",
                    raw
                ))
                .into()
            })
    }

    /// Resolve the tag against a caller-supplied `today` so the window is
    /// reproducible in tests.
    pub fn resolve(&self, today: NaiveDate) -> PeriodWindow {
        let start = match self {
            Period::SevenDays => today - Duration::days(7),
            Period::ThirtyDays => today - Duration::days(30),
            Period::NinetyDays => today - Duration::days(90),
            Period::OneYear => today - Duration::days(365),
            Period::YearToDate => {
                NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today)
            }
        };
        PeriodWindow { start, end: today }
    }
}

/// A resolved lookback window: `start..=end`, where `end` is "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodWindow {
    /// Whole days between start and end, never negative.
    pub fn day_diff(&self) -> i64 {
        (self.end - self.start).num_days().max(0)
    }
}
