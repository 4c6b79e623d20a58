use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::CategoryDistribution;
use crate::catalog::Category;

/// A held position in one tokenized IP asset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAsset {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub invested: Decimal,
    pub current_value: Decimal,
}

/// Portfolio-wide aggregate metrics plus the category breakdown of current
/// value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_investment: Decimal,
    pub total_gain: Decimal,
    /// Gain over investment as a percentage, 0 when nothing is invested.
    pub total_roi: Decimal,
    pub asset_count: usize,
    pub distribution: CategoryDistribution,
}

/// A project's fundraising state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingRound {
    pub project: String,
    pub category: Category,
    pub goal: Decimal,
    pub raised: Decimal,
    pub investors: u32,
    pub percent_funded: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingSummary {
    pub total_goal: Decimal,
    pub total_raised: Decimal,
    /// Raised over goal as a percentage, 0 when the goal total is 0.
    pub percent_funded: Decimal,
    pub round_count: usize,
    pub distribution: CategoryDistribution,
}

/// A token position in one project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolding {
    pub symbol: String,
    pub project: String,
    pub category: Category,
    pub balance: Decimal,
    pub token_price: Decimal,
    pub value: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSummary {
    pub total_tokens: Decimal,
    pub total_value: Decimal,
    pub holding_count: usize,
    pub distribution: CategoryDistribution,
}
