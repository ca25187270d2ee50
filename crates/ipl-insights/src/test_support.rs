use crate::dataset::{MatchRecord, TossDecision};
use chrono::NaiveDate;

pub(crate) struct RecordBuilder {
    record: MatchRecord,
}

impl RecordBuilder {
    pub(crate) fn new(season: u16) -> Self {
        Self {
            record: MatchRecord {
                season,
                team1: "Mumbai Indians".to_string(),
                team2: "Chennai Super Kings".to_string(),
                venue: "Wankhede Stadium".to_string(),
                city: Some("Mumbai".to_string()),
                toss_winner: "Mumbai Indians".to_string(),
                toss_decision: Some(TossDecision::Field),
                winner: Some("Mumbai Indians".to_string()),
                win_by_runs: Some(0),
                win_by_wickets: Some(6),
                player_of_match: Some("RG Sharma".to_string()),
                date: NaiveDate::from_ymd_opt(season as i32, 4, 12).expect("valid date"),
            },
        }
    }

    pub(crate) fn teams(mut self, team1: &str, team2: &str) -> Self {
        self.record.team1 = team1.to_string();
        self.record.team2 = team2.to_string();
        self
    }

    pub(crate) fn venue(mut self, venue: &str, city: Option<&str>) -> Self {
        self.record.venue = venue.to_string();
        self.record.city = city.map(str::to_string);
        self
    }

    pub(crate) fn toss(mut self, toss_winner: &str) -> Self {
        self.record.toss_winner = toss_winner.to_string();
        self
    }

    pub(crate) fn decision(mut self, decision: Option<TossDecision>) -> Self {
        self.record.toss_decision = decision;
        self
    }

    pub(crate) fn winner(mut self, winner: Option<&str>) -> Self {
        self.record.winner = winner.map(str::to_string);
        self
    }

    pub(crate) fn margins(mut self, runs: Option<u32>, wickets: Option<u32>) -> Self {
        self.record.win_by_runs = runs;
        self.record.win_by_wickets = wickets;
        self
    }

    pub(crate) fn player(mut self, player: Option<&str>) -> Self {
        self.record.player_of_match = player.map(str::to_string);
        self
    }

    pub(crate) fn build(self) -> MatchRecord {
        self.record
    }
}
