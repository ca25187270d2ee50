use super::counts::{Ranking, TOP_N};
use crate::dataset::MatchTable;

pub fn wins_per_team(table: &MatchTable) -> Ranking {
    Ranking::from_values(table.records().iter().map(|r| r.winner.as_deref())).top(TOP_N)
}

pub fn top_venues(table: &MatchTable) -> Ranking {
    Ranking::from_values(table.records().iter().map(|r| Some(r.venue.as_str()))).top(TOP_N)
}

pub fn top_players_of_match(table: &MatchTable) -> Ranking {
    Ranking::from_values(table.records().iter().map(|r| r.player_of_match.as_deref())).top(TOP_N)
}

pub fn matches_per_city(table: &MatchTable) -> Ranking {
    Ranking::from_values(table.records().iter().map(|r| r.city.as_deref())).top(TOP_N)
}
