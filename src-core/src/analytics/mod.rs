//! Synthetic analytics: historical series, royalty payments, and the
//! aggregation helpers shared by the portfolio, funding, and token views.
//!
//! Generators take their random source as an argument so tests can pass a
//! seeded rng; handlers pass a freshly seeded `StdRng`.

pub mod distribution;
pub mod history;
pub mod period;
pub mod royalties;

pub use distribution::{distribute, CategoryDistribution, CategoryShare};
pub use history::{generate_series, HistoricalPoint};
pub use period::{Period, PeriodWindow};
pub use royalties::{generate_payments, PaymentStatus, RoyaltyPayment};

use rust_decimal::Decimal;

/// Currency/percentage convention used across all generated figures.
pub(crate) fn round2(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp(2)
}
