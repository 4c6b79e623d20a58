//! Fixed reference data for the Scene Capital asset universe.
//!
//! Every generator draws from these catalogs. The project list is the
//! closed world: a project always carries its canonical category, so a
//! payment or holding can never end up with a category its project does
//! not have.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// IP asset categories tracked by the platform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Film,
    Music,
    Art,
    Gaming,
    Literature,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Film,
        Category::Music,
        Category::Art,
        Category::Gaming,
        Category::Literature,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Film => "Film",
            Category::Music => "Music",
            Category::Art => "Art",
            Category::Gaming => "Gaming",
            Category::Literature => "Literature",
        }
    }

    /// Case-insensitive lookup, used for query-string filters.
    pub fn parse(raw: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tokenized IP project. The category is part of the catalog entry, not
/// something callers pick independently.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub category: Category,
}

pub const PROJECTS: [Project; 10] = [
    Project { name: "Midnight Premiere", category: Category::Film },
    Project { name: "Celluloid Horizon", category: Category::Film },
    Project { name: "Echo Chamber Sessions", category: Category::Music },
    Project { name: "Analog Heartbeat", category: Category::Music },
    Project { name: "Fragment Gallery", category: Category::Art },
    Project { name: "Chromatic Drift", category: Category::Art },
    Project { name: "Neon Syndicate", category: Category::Gaming },
    Project { name: "Voxel Frontier", category: Category::Gaming },
    Project { name: "The Quiet Manuscript", category: Category::Literature },
    Project { name: "Inkbound", category: Category::Literature },
];

/// Distribution platforms that remit royalties.
pub const PLATFORMS: [&str; 6] = [
    "Netflix",
    "Spotify",
    "Steam",
    "Audible",
    "HBO Max",
    "Apple Music",
];

/// Reporting territories for royalty statements.
pub const TERRITORIES: [&str; 6] = [
    "North America",
    "Europe",
    "Asia Pacific",
    "Latin America",
    "Middle East",
    "Africa",
];

lazy_static! {
    static ref PROJECT_INDEX: HashMap<String, &'static Project> = PROJECTS
        .iter()
        .map(|project| (slug(project.name), project))
        .collect();
}

/// URL-safe identifier for a project ("Midnight Premiere" -> "midnight-premiere").
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub fn project_by_slug(id: &str) -> Option<&'static Project> {
    PROJECT_INDEX.get(id).copied()
}

/// Market-level metrics the dashboard charts over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketMetric {
    MarketCap,
    Volume,
    AveragePrice,
    RoyaltyIncome,
}

/// Generator inputs for one metric: present-day value, per-step volatility
/// and annualized trend strength.
#[derive(Debug, Clone, Copy)]
pub struct MetricProfile {
    pub current_value: f64,
    pub volatility: f64,
    pub trend_strength: f64,
}

impl MarketMetric {
    pub const ALL: [MarketMetric; 4] = [
        MarketMetric::MarketCap,
        MarketMetric::Volume,
        MarketMetric::AveragePrice,
        MarketMetric::RoyaltyIncome,
    ];

    pub fn parse(raw: &str) -> Option<MarketMetric> {
        MarketMetric::ALL
            .into_iter()
            .find(|m| m.series_key().eq_ignore_ascii_case(raw.trim()))
    }

    /// Key under which this metric's points are stored.
    pub fn series_key(&self) -> &'static str {
        match self {
            MarketMetric::MarketCap => "market_cap",
            MarketMetric::Volume => "volume",
            MarketMetric::AveragePrice => "average_price",
            MarketMetric::RoyaltyIncome => "royalty_income",
        }
    }

    pub fn profile(&self) -> MetricProfile {
        match self {
            MarketMetric::MarketCap => MetricProfile {
                current_value: 12_450_000.0,
                volatility: 0.08,
                trend_strength: 0.35,
            },
            MarketMetric::Volume => MetricProfile {
                current_value: 384_000.0,
                volatility: 0.25,
                trend_strength: 0.15,
            },
            MarketMetric::AveragePrice => MetricProfile {
                current_value: 1_275.0,
                volatility: 0.12,
                trend_strength: 0.2,
            },
            MarketMetric::RoyaltyIncome => MetricProfile {
                current_value: 92_500.0,
                volatility: 0.18,
                trend_strength: 0.25,
            },
        }
    }
}
