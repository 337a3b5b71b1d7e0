//! Covid snapshot entity
//!
//! The upstream stats API is not proxied; `generate-data` installs a fixed
//! per-country snapshot and the endpoint serves it read-only.

use serde::Serialize;

/// A persisted per-country snapshot row
#[derive(Debug, Clone, Serialize)]
pub struct CovidRecord {
    #[serde(skip_serializing)]
    pub id: i64,
    pub country: String,
    pub total_cases: i64,
    pub total_deaths: i64,
}

/// A snapshot entry to insert; `country` is the natural key
#[derive(Debug, Clone)]
pub struct CovidSnapshot {
    pub country: &'static str,
    pub total_cases: i64,
    pub total_deaths: i64,
}

/// Snapshot installed by `generate-data`
pub fn snapshot() -> Vec<CovidSnapshot> {
    vec![
        CovidSnapshot { country: "USA", total_cases: 102_000_000, total_deaths: 1_120_000 },
        CovidSnapshot { country: "India", total_cases: 44_700_000, total_deaths: 530_000 },
        CovidSnapshot { country: "France", total_cases: 38_900_000, total_deaths: 165_000 },
        CovidSnapshot { country: "Germany", total_cases: 38_400_000, total_deaths: 168_000 },
        CovidSnapshot { country: "Brazil", total_cases: 37_000_000, total_deaths: 699_000 },
        CovidSnapshot { country: "Japan", total_cases: 33_300_000, total_deaths: 74_000 },
    ]
}
