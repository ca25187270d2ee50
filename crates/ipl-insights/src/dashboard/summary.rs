//! One-line descriptions shown under each chart.
//!
//! Each formatter reads the same aggregation value its chart was drawn from.

use crate::dataset::TossDecision;
use crate::stats::{
    max_margins, MarginDistribution, MarginPair, Ranking, SeasonAverage, SeasonCount,
    TossAgreementCounts, TossDecisionDistribution,
};

pub fn describe_matches_per_season(seasons: &[SeasonCount]) -> String {
    let min = seasons.iter().map(|s| s.matches).min();
    let max = seasons.iter().map(|s| s.matches).max();
    match (min, max) {
        (Some(min), Some(max)) => {
            format!("Total matches across seasons range from {min} to {max}")
        }
        _ => "No seasons recorded".to_string(),
    }
}

pub fn describe_wins_per_team(wins: &Ranking) -> String {
    match wins.leader() {
        Some(leader) => format!("{} leads with {} wins", leader.label, leader.count),
        None => "No match winners recorded".to_string(),
    }
}

pub fn describe_toss_decisions(distribution: &TossDecisionDistribution) -> String {
    let bat = TossDecision::Bat;
    let field = TossDecision::Field;
    format!(
        "Batting teams won {} matches ({:.1}%) vs Fielding teams won {} matches ({:.1}%)",
        distribution.count_of(&bat),
        distribution.percentage_of(&bat),
        distribution.count_of(&field),
        distribution.percentage_of(&field)
    )
}

pub fn describe_win_margins(pairs: &[MarginPair]) -> String {
    let (runs, wickets) = max_margins(pairs);
    format!("Max win margin by runs: {runs} | Max win margin by wickets: {wickets}")
}

pub fn describe_top_venues(venues: &Ranking) -> String {
    match venues.leader() {
        Some(leader) => format!(
            "{} hosted the most matches with {} games",
            leader.label, leader.count
        ),
        None => "No venues recorded".to_string(),
    }
}

pub fn describe_players_of_the_match(players: &Ranking) -> String {
    match players.leader() {
        Some(leader) => format!(
            "{} earned {} Player of the Match awards",
            leader.label, leader.count
        ),
        None => "No Player of the Match awards recorded".to_string(),
    }
}

pub fn describe_average_margin(averages: &[SeasonAverage]) -> String {
    // First season wins ties, like an idxmax over season order.
    let best = averages.iter().fold(None::<&SeasonAverage>, |best, candidate| match best {
        Some(current) if current.average_margin >= candidate.average_margin => Some(current),
        _ => Some(candidate),
    });
    match best {
        Some(best) => format!(
            "Highest avg margin in season {}: {:.2}",
            best.season, best.average_margin
        ),
        None => "No seasons recorded".to_string(),
    }
}

pub fn describe_toss_vs_match(counts: &TossAgreementCounts) -> String {
    format!(
        "Toss winners won {:.1}% of their matches ({} out of {})",
        counts.won_percentage(),
        counts.won,
        counts.total()
    )
}

pub fn describe_matches_by_city(cities: &Ranking) -> String {
    match cities.leader() {
        Some(leader) => format!(
            "{} hosted the most IPL matches ({} total)",
            leader.label, leader.count
        ),
        None => "No host cities recorded".to_string(),
    }
}

pub fn describe_margin_distribution(distribution: &MarginDistribution) -> String {
    if distribution.is_empty() {
        return "No decisive win margins recorded".to_string();
    }
    format!(
        "Avg win margin: {:.2} | Median: {:.2} | Max: {}",
        distribution.mean(),
        distribution.median(),
        distribution.max()
    )
}
