use crate::dataset::MatchTable;
use serde::Serialize;

/// Sidebar figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetOverview {
    pub total_matches: usize,
    pub first_season: Option<u16>,
    pub last_season: Option<u16>,
    pub total_teams: usize,
}

impl DatasetOverview {
    pub fn from_table(table: &MatchTable) -> Self {
        let range = table.season_range();
        Self {
            total_matches: table.len(),
            first_season: range.map(|(first, _)| first),
            last_season: range.map(|(_, last)| last),
            total_teams: table.distinct_teams(),
        }
    }

    pub fn season_range_label(&self) -> String {
        match (self.first_season, self.last_season) {
            (Some(first), Some(last)) => format!("{first} - {last}"),
            _ => "n/a".to_string(),
        }
    }
}

/// The four footer metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterMetrics {
    pub total_matches: usize,
    pub total_seasons: usize,
    pub unique_venues: usize,
    pub unique_teams: usize,
}

impl FooterMetrics {
    pub fn from_table(table: &MatchTable) -> Self {
        Self {
            total_matches: table.len(),
            total_seasons: table.distinct_seasons(),
            unique_venues: table.distinct_venues(),
            unique_teams: table.distinct_teams(),
        }
    }

    pub fn labelled(&self) -> [(&'static str, usize); 4] {
        [
            ("Total Matches", self.total_matches),
            ("Total Seasons", self.total_seasons),
            ("Unique Venues", self.unique_venues),
            ("Unique Teams", self.unique_teams),
        ]
    }
}
