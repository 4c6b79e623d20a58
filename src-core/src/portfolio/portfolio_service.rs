//! Mock working-set generators and the pure summarizers over them.
//!
//! Working sets are rebuilt per request (nothing persists between calls);
//! only the summarizers carry invariants worth testing: zero-guarded
//! ratios and distributions that sum back to their totals.

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::portfolio_model::{
    FundingRound, FundingSummary, PortfolioAsset, PortfolioSummary, TokenHolding, TokenSummary,
};
use crate::analytics::{distribute, round2};
use crate::catalog::{project_by_slug, slug, Project, PROJECTS};

/// Percentage ratio with the divide-by-zero guard: 0, never NaN.
fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        (part / whole * dec!(100)).round_dp(2)
    }
}

fn mock_asset(project: &Project, rng: &mut impl Rng) -> PortfolioAsset {
    let invested = rng.gen_range(5_000.0..50_000.0);
    let growth = rng.gen_range(0.7..1.8);
    PortfolioAsset {
        id: slug(project.name),
        name: project.name.to_string(),
        category: project.category,
        invested: round2(invested),
        current_value: round2(invested * growth),
    }
}

/// One asset position per catalog project, with randomized figures.
pub fn mock_assets(rng: &mut impl Rng) -> Vec<PortfolioAsset> {
    PROJECTS.iter().map(|p| mock_asset(p, rng)).collect()
}

/// Regenerate the position for a single asset id, if the id names a
/// catalog project.
pub fn asset_by_id(id: &str, rng: &mut impl Rng) -> Option<PortfolioAsset> {
    project_by_slug(id).map(|project| mock_asset(project, rng))
}

pub fn summarize_assets(assets: &[PortfolioAsset]) -> PortfolioSummary {
    let total_value: Decimal = assets.iter().map(|a| a.current_value).sum();
    let total_investment: Decimal = assets.iter().map(|a| a.invested).sum();
    let total_gain = total_value - total_investment;
    let (_, distribution) = distribute(assets.iter().map(|a| (a.category, a.current_value)));

    PortfolioSummary {
        total_value,
        total_investment,
        total_gain,
        total_roi: percent_of(total_gain, total_investment),
        asset_count: assets.len(),
        distribution,
    }
}

pub fn mock_funding_rounds(rng: &mut impl Rng) -> Vec<FundingRound> {
    PROJECTS
        .iter()
        .map(|project| {
            let goal = rng.gen_range(50_000.0..500_000.0);
            let raised = goal * rng.gen_range(0.15..1.1);
            let goal = round2(goal);
            let raised = round2(raised);
            FundingRound {
                project: project.name.to_string(),
                category: project.category,
                goal,
                raised,
                investors: rng.gen_range(25..400),
                percent_funded: percent_of(raised, goal),
            }
        })
        .collect()
}

pub fn summarize_funding(rounds: &[FundingRound]) -> FundingSummary {
    let total_goal: Decimal = rounds.iter().map(|r| r.goal).sum();
    let total_raised: Decimal = rounds.iter().map(|r| r.raised).sum();
    let (_, distribution) = distribute(rounds.iter().map(|r| (r.category, r.raised)));

    FundingSummary {
        total_goal,
        total_raised,
        percent_funded: percent_of(total_raised, total_goal),
        round_count: rounds.len(),
        distribution,
    }
}

/// Ticker-style symbol from the project name initials ("Voxel Frontier" ->
/// "VF").
fn token_symbol(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

pub fn mock_token_holdings(rng: &mut impl Rng) -> Vec<TokenHolding> {
    PROJECTS
        .iter()
        .map(|project| {
            let balance = rng.gen_range(100.0..10_000.0);
            let token_price = rng.gen_range(0.5..25.0);
            TokenHolding {
                symbol: token_symbol(project.name),
                project: project.name.to_string(),
                category: project.category,
                balance: round2(balance),
                token_price: round2(token_price),
                value: round2(balance * token_price),
            }
        })
        .collect()
}

pub fn summarize_tokens(holdings: &[TokenHolding]) -> TokenSummary {
    let total_tokens: Decimal = holdings.iter().map(|h| h.balance).sum();
    let (total_value, distribution) = distribute(holdings.iter().map(|h| (h.category, h.value)));

    TokenSummary {
        total_tokens,
        total_value,
        holding_count: holdings.len(),
        distribution,
    }
}
