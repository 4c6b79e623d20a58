pub mod portfolio_model;
pub mod portfolio_service;

pub use portfolio_model::{
    FundingRound, FundingSummary, PortfolioAsset, PortfolioSummary, TokenHolding, TokenSummary,
};
pub use portfolio_service::{
    asset_by_id, mock_assets, mock_funding_rounds, mock_token_holdings, summarize_assets,
    summarize_funding, summarize_tokens,
};
