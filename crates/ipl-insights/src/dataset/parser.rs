use super::{DatasetError, MatchRecord, TossDecision};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Columns the dashboard cannot render without.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "season",
    "team1",
    "team2",
    "winner",
    "venue",
    "city",
    "toss_winner",
    "toss_decision",
    "win_by_runs",
    "win_by_wickets",
    "player_of_match",
    "date",
];

// Dataset editions disagree on the date layout; later seasons use day-first. Two-digit years
// go first because `%Y` would also accept "19" as the year 19.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%y", "%d/%m/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<MatchRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<MatchRow>().enumerate() {
        let row = row?;
        // Header is line 1, so the first data row is line 2.
        records.push(row.into_record(index + 2)?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct MatchRow {
    season: u16,
    team1: String,
    team2: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    winner: Option<String>,
    venue: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    city: Option<String>,
    toss_winner: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    toss_decision: Option<String>,
    #[serde(default)]
    win_by_runs: Option<u32>,
    #[serde(default)]
    win_by_wickets: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    player_of_match: Option<String>,
    date: String,
}

impl MatchRow {
    fn into_record(self, line: usize) -> Result<MatchRecord, DatasetError> {
        let date = parse_date(&self.date).ok_or_else(|| DatasetError::InvalidDate {
            line,
            value: self.date.clone(),
        })?;

        Ok(MatchRecord {
            season: self.season,
            team1: self.team1,
            team2: self.team2,
            venue: self.venue,
            city: self.city,
            toss_winner: self.toss_winner,
            toss_decision: self.toss_decision.as_deref().map(TossDecision::parse),
            winner: self.winner,
            win_by_runs: self.win_by_runs,
            win_by_wickets: self.win_by_wickets,
            player_of_match: self.player_of_match,
            date,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATETIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(trimmed, format)
                    .ok()
                    .map(|stamp| stamp.date())
            })
        })
}
