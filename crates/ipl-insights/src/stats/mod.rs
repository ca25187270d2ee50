//! The ten dashboard aggregations plus the sidebar and footer scalars.
//!
//! Every function is a pure read of a [`MatchTable`]. The two margin-based statistics and the
//! toss agreement take [`DerivedColumns`] explicitly instead of expecting extra table columns.

mod counts;
mod derived;
mod margins;
mod overview;
mod rankings;
mod season;
mod toss;

pub use counts::{percentage, CategoryCount, Ranking, TOP_N};
pub use derived::{total_margin, DerivedColumns, TossAgreement};
pub use margins::{
    margin_pairs, max_margins, HistogramBin, MarginDistribution, MarginPair, HISTOGRAM_BINS,
};
pub use overview::{DatasetOverview, FooterMetrics};
pub use rankings::{matches_per_city, top_players_of_match, top_venues, wins_per_team};
pub use season::{average_margin_per_season, matches_per_season, SeasonAverage, SeasonCount};
pub use toss::{
    toss_decision_distribution, toss_match_agreement, TossAgreementCounts, TossDecisionDistribution,
    TossDecisionShare,
};

use crate::dataset::MatchTable;

pub fn margin_distribution(derived: &DerivedColumns) -> MarginDistribution {
    MarginDistribution::from_derived(derived)
}

/// Table plus its derived columns, computed together once per dashboard build.
#[derive(Debug, Clone, Copy)]
pub struct StatsInput<'a> {
    pub table: &'a MatchTable,
    pub derived: &'a DerivedColumns,
}
