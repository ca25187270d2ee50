use super::DerivedColumns;
use crate::dataset::MatchTable;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonCount {
    pub season: u16,
    pub matches: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonAverage {
    pub season: u16,
    pub average_margin: f64,
}

/// Row count per season, oldest season first.
pub fn matches_per_season(table: &MatchTable) -> Vec<SeasonCount> {
    let mut counts: BTreeMap<u16, usize> = BTreeMap::new();
    for record in table.records() {
        *counts.entry(record.season).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(season, matches)| SeasonCount { season, matches })
        .collect()
}

/// Mean total margin per season, oldest season first.
pub fn average_margin_per_season(table: &MatchTable, derived: &DerivedColumns) -> Vec<SeasonAverage> {
    let mut sums: BTreeMap<u16, (u64, usize)> = BTreeMap::new();
    for (record, margin) in table.records().iter().zip(&derived.total_margin) {
        let entry = sums.entry(record.season).or_default();
        entry.0 += u64::from(*margin);
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(season, (sum, rows))| SeasonAverage {
            season,
            average_margin: if rows == 0 { 0.0 } else { sum as f64 / rows as f64 },
        })
        .collect()
}
