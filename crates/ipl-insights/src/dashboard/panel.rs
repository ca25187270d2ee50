use super::statistic::Statistic;
use super::summary;
use crate::charts::{
    histogram_chart, horizontal_bar_chart, line_chart, pie_chart, scatter_chart,
    vertical_bar_chart, ChartError, ChartStyle, Datum, Marker, Svg,
};
use crate::stats::{self, Ranking, StatsInput, TossAgreement, HISTOGRAM_BINS};
use plotters::style::RGBColor;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("chart rendering failed: {0}")]
    Chart(#[from] ChartError),
}

/// A rendered chart with its one-line summary.
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub statistic: Statistic,
    pub number: usize,
    pub heading: &'static str,
    pub summary: String,
    pub chart: Svg,
}

impl Panel {
    fn new(statistic: Statistic, chart: Svg, summary: String) -> Self {
        Self {
            statistic,
            number: statistic.number(),
            heading: statistic.heading(),
            summary,
            chart,
        }
    }
}

/// Result of one isolated statistic pipeline.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PanelOutcome {
    Ready(Panel),
    Failed {
        statistic: Statistic,
        number: usize,
        heading: &'static str,
        error: String,
    },
}

impl PanelOutcome {
    pub fn from_result(statistic: Statistic, result: Result<Panel, PanelError>) -> Self {
        match result {
            Ok(panel) => Self::Ready(panel),
            Err(err) => Self::Failed {
                statistic,
                number: statistic.number(),
                heading: statistic.heading(),
                error: err.to_string(),
            },
        }
    }

    pub fn statistic(&self) -> Statistic {
        match self {
            Self::Ready(panel) => panel.statistic,
            Self::Failed { statistic, .. } => *statistic,
        }
    }

    pub fn panel(&self) -> Option<&Panel> {
        match self {
            Self::Ready(panel) => Some(panel),
            Self::Failed { .. } => None,
        }
    }
}

const SEASON_TREND: ChartStyle = ChartStyle {
    title: "IPL Matches Per Season Trend",
    x_label: Some("Season"),
    y_label: Some("Number of Matches"),
    color: RGBColor(0x1f, 0x77, 0xb4),
};
const TEAM_WINS: ChartStyle = ChartStyle {
    title: "Top 10 Teams by Total Wins",
    x_label: Some("Number of Wins"),
    y_label: None,
    color: RGBColor(0x2c, 0xa0, 0x2c),
};
const TOSS_DECISION_TITLE: &str = "Match Distribution by Toss Decision";
const TOSS_DECISION_COLORS: [RGBColor; 2] = [
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
];
const WIN_MARGINS: ChartStyle = ChartStyle {
    title: "Match Outcomes: Runs vs Wickets",
    x_label: Some("Win by Runs"),
    y_label: Some("Win by Wickets"),
    color: RGBColor(0xd6, 0x27, 0x28),
};
const VENUES: ChartStyle = ChartStyle {
    title: "IPL Matches by Top Venues",
    x_label: None,
    y_label: Some("Number of Matches"),
    color: RGBColor(0x94, 0x67, 0xbd),
};
const PLAYERS: ChartStyle = ChartStyle {
    title: "Top 10 Players of the Match",
    x_label: Some("Player of the Match Awards"),
    y_label: None,
    color: RGBColor(0xbc, 0xbd, 0x22),
};
const AVERAGE_MARGIN: ChartStyle = ChartStyle {
    title: "Season-wise Average Win Margin Trend",
    x_label: Some("Season"),
    y_label: Some("Average Win Margin"),
    color: RGBColor(0x17, 0xbe, 0xcf),
};
const TOSS_AGREEMENT_TITLE: &str = "Toss Winners Winning Matches";
const TOSS_AGREEMENT_COLORS: [RGBColor; 2] = [
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
];
const CITIES: ChartStyle = ChartStyle {
    title: "Top 10 Cities by Match Count",
    x_label: Some("Number of Matches"),
    y_label: None,
    color: RGBColor(0xe3, 0x77, 0xc2),
};
const MARGIN_HISTOGRAM: ChartStyle = ChartStyle {
    title: "Distribution of Match Win Margins",
    x_label: Some("Win Margin"),
    y_label: Some("Frequency"),
    color: RGBColor(0x7f, 0x7f, 0x7f),
};

/// Runs aggregate, render and describe for one statistic.
pub fn build_panel(statistic: Statistic, input: StatsInput<'_>) -> Result<Panel, PanelError> {
    let StatsInput { table, derived } = input;

    let (chart, summary) = match statistic {
        Statistic::MatchesPerSeason => {
            let seasons = stats::matches_per_season(table);
            let points: Vec<Datum> = seasons
                .iter()
                .map(|s| Datum::new(s.season.to_string(), s.matches as f64))
                .collect();
            (
                line_chart(&points, &SEASON_TREND, Marker::Circle)?,
                summary::describe_matches_per_season(&seasons),
            )
        }
        Statistic::WinsPerTeam => {
            let wins = stats::wins_per_team(table);
            (
                horizontal_bar_chart(&ranking_data(&wins), &TEAM_WINS)?,
                summary::describe_wins_per_team(&wins),
            )
        }
        Statistic::TossDecisions => {
            let distribution = stats::toss_decision_distribution(table);
            let slices: Vec<Datum> = distribution
                .shares
                .iter()
                .map(|share| Datum::new(share.decision.label(), share.count as f64))
                .collect();
            (
                pie_chart(&slices, TOSS_DECISION_TITLE, &TOSS_DECISION_COLORS)?,
                summary::describe_toss_decisions(&distribution),
            )
        }
        Statistic::WinMargins => {
            let pairs = stats::margin_pairs(table);
            let points: Vec<(f64, f64)> = pairs
                .iter()
                .map(|pair| (f64::from(pair.runs), f64::from(pair.wickets)))
                .collect();
            (
                scatter_chart(&points, &WIN_MARGINS)?,
                summary::describe_win_margins(&pairs),
            )
        }
        Statistic::TopVenues => {
            let venues = stats::top_venues(table);
            (
                vertical_bar_chart(&ranking_data(&venues), &VENUES)?,
                summary::describe_top_venues(&venues),
            )
        }
        Statistic::PlayersOfTheMatch => {
            let players = stats::top_players_of_match(table);
            (
                horizontal_bar_chart(&ranking_data(&players), &PLAYERS)?,
                summary::describe_players_of_the_match(&players),
            )
        }
        Statistic::AverageMargin => {
            let averages = stats::average_margin_per_season(table, derived);
            let points: Vec<Datum> = averages
                .iter()
                .map(|a| Datum::new(a.season.to_string(), a.average_margin))
                .collect();
            (
                line_chart(&points, &AVERAGE_MARGIN, Marker::Square)?,
                summary::describe_average_margin(&averages),
            )
        }
        Statistic::TossVsMatch => {
            let counts = stats::toss_match_agreement(derived);
            // Larger share first, matching a value-count ordering.
            let mut slices: Vec<Datum> = [TossAgreement::Won, TossAgreement::Lost]
                .into_iter()
                .map(|agreement| Datum::new(agreement.label(), counts.count(agreement) as f64))
                .collect();
            if counts.lost > counts.won {
                slices.reverse();
            }
            (
                pie_chart(&slices, TOSS_AGREEMENT_TITLE, &TOSS_AGREEMENT_COLORS)?,
                summary::describe_toss_vs_match(&counts),
            )
        }
        Statistic::MatchesByCity => {
            let cities = stats::matches_per_city(table);
            (
                horizontal_bar_chart(&ranking_data(&cities), &CITIES)?,
                summary::describe_matches_by_city(&cities),
            )
        }
        Statistic::MarginDistribution => {
            let distribution = stats::margin_distribution(derived);
            (
                histogram_chart(&distribution.histogram(HISTOGRAM_BINS), &MARGIN_HISTOGRAM)?,
                summary::describe_margin_distribution(&distribution),
            )
        }
    };

    Ok(Panel::new(statistic, chart, summary))
}

fn ranking_data(ranking: &Ranking) -> Vec<Datum> {
    ranking
        .entries
        .iter()
        .map(|entry| Datum::new(entry.label.clone(), entry.count as f64))
        .collect()
}
