//! Match record loading.
//!
//! The table is read once and shared as an immutable [`Arc<MatchTable>`]; nothing downstream
//! mutates it. Columns computed from it live in [`crate::stats::DerivedColumns`].

mod parser;

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::info;

pub use parser::REQUIRED_COLUMNS;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read match records: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid match CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("match CSV is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("unparseable date '{value}' on line {line}")]
    InvalidDate { line: usize, value: String },
}

/// What the team electing at the toss chose to do first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TossDecision {
    Bat,
    Field,
    Other(String),
}

impl TossDecision {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bat" => Self::Bat,
            "field" => Self::Field,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Bat => "bat",
            Self::Field => "field",
            Self::Other(raw) => raw,
        }
    }
}

/// One completed (or abandoned) fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub season: u16,
    pub team1: String,
    pub team2: String,
    pub venue: String,
    pub city: Option<String>,
    pub toss_winner: String,
    pub toss_decision: Option<TossDecision>,
    pub winner: Option<String>,
    pub win_by_runs: Option<u32>,
    pub win_by_wickets: Option<u32>,
    pub player_of_match: Option<String>,
    pub date: NaiveDate,
}

impl MatchRecord {
    pub fn runs_margin(&self) -> u32 {
        self.win_by_runs.unwrap_or(0)
    }

    pub fn wickets_margin(&self) -> u32 {
        self.win_by_wickets.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTable {
    records: Vec<MatchRecord>,
}

impl MatchTable {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        Self { records }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        parser::parse_records(reader).map(Self::new)
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest season, `None` for an empty table.
    pub fn season_range(&self) -> Option<(u16, u16)> {
        let min = self.records.iter().map(|record| record.season).min()?;
        let max = self.records.iter().map(|record| record.season).max()?;
        Some((min, max))
    }

    pub fn distinct_seasons(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.season)
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn distinct_venues(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.venue.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Size of the union of both participant columns.
    pub fn distinct_teams(&self) -> usize {
        self.records
            .iter()
            .flat_map(|record| [record.team1.as_str(), record.team2.as_str()])
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Reads the table on first use and hands out the same [`Arc`] afterwards.
#[derive(Debug)]
pub struct TableLoader {
    path: PathBuf,
    table: OnceLock<Arc<MatchTable>>,
}

impl TableLoader {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            table: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Arc<MatchTable>, DatasetError> {
        if let Some(table) = self.table.get() {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(MatchTable::from_path(&self.path)?);
        info!(path = %self.path.display(), rows = table.len(), "match records loaded");
        Ok(Arc::clone(self.table.get_or_init(|| table)))
    }
}
