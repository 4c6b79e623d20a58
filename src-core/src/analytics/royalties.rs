use chrono::{Duration, NaiveDateTime, NaiveTime};
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::period::PeriodWindow;
use super::round2;
use crate::catalog::{Category, PLATFORMS, PROJECTS, TERRITORIES};

/// Floor and ceiling on the number of payments generated per request.
pub const MIN_PAYMENTS: i64 = 10;
pub const MAX_PAYMENTS: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Processed,
    Pending,
}

/// A simulated royalty remittance from a platform for one project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoyaltyPayment {
    pub id: Uuid,
    pub platform: &'static str,
    pub project: &'static str,
    pub category: Category,
    pub territory: &'static str,
    pub amount: Decimal,
    pub date: NaiveDateTime,
    pub status: PaymentStatus,
}

/// Generate a randomized royalty payment set over the window, sorted
/// newest-first.
///
/// Volume scales with the window (two payments per day, clamped to
/// 10..=100). Amounts skew higher toward the present: the base factor
/// grows linearly from 1.0 at the window start to 2.0 at the end. The
/// category always comes from the drawn project's catalog entry.
pub fn generate_payments(window: &PeriodWindow, rng: &mut impl Rng) -> Vec<RoyaltyPayment> {
    let day_diff = window.day_diff();
    let count = (day_diff * 2).clamp(MIN_PAYMENTS, MAX_PAYMENTS) as usize;
    let window_start = window.start.and_time(NaiveTime::MIN);

    let mut payments = Vec::with_capacity(count);
    for _ in 0..count {
        let offset = rng.gen_range(0..=day_diff);
        let base = if day_diff == 0 {
            1.0
        } else {
            1.0 + offset as f64 / day_diff as f64
        };
        let amount = round2(100.0 * base * rng.gen_range(0.5..=1.5));

        let project = &PROJECTS[rng.gen_range(0..PROJECTS.len())];
        let platform = PLATFORMS[rng.gen_range(0..PLATFORMS.len())];
        let territory = TERRITORIES[rng.gen_range(0..TERRITORIES.len())];
        let status = if rng.gen_bool(0.5) {
            PaymentStatus::Processed
        } else {
            PaymentStatus::Pending
        };

        let date = window_start
            + Duration::days(offset)
            + Duration::seconds(rng.gen_range(0..86_400));

        payments.push(RoyaltyPayment {
            id: Uuid::new_v4(),
            platform,
            project: project.name,
            category: project.category,
            territory,
            amount,
            date,
            status,
        });
    }

    payments.sort_by(|a, b| b.date.cmp(&a.date));
    payments
}
