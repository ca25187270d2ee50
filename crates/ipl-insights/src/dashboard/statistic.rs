use serde::Serialize;
use std::fmt;

/// The ten fixed dashboard statistics in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Statistic {
    MatchesPerSeason,
    WinsPerTeam,
    TossDecisions,
    WinMargins,
    TopVenues,
    PlayersOfTheMatch,
    AverageMargin,
    TossVsMatch,
    MatchesByCity,
    MarginDistribution,
}

impl Statistic {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::MatchesPerSeason,
            Self::WinsPerTeam,
            Self::TossDecisions,
            Self::WinMargins,
            Self::TopVenues,
            Self::PlayersOfTheMatch,
            Self::AverageMargin,
            Self::TossVsMatch,
            Self::MatchesByCity,
            Self::MarginDistribution,
        ]
    }

    /// 1-based position on the dashboard.
    pub const fn number(self) -> usize {
        match self {
            Self::MatchesPerSeason => 1,
            Self::WinsPerTeam => 2,
            Self::TossDecisions => 3,
            Self::WinMargins => 4,
            Self::TopVenues => 5,
            Self::PlayersOfTheMatch => 6,
            Self::AverageMargin => 7,
            Self::TossVsMatch => 8,
            Self::MatchesByCity => 9,
            Self::MarginDistribution => 10,
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::MatchesPerSeason => "matches-per-season",
            Self::WinsPerTeam => "wins-per-team",
            Self::TossDecisions => "toss-decisions",
            Self::WinMargins => "win-margins",
            Self::TopVenues => "top-venues",
            Self::PlayersOfTheMatch => "players-of-the-match",
            Self::AverageMargin => "average-margin",
            Self::TossVsMatch => "toss-vs-match",
            Self::MatchesByCity => "matches-by-city",
            Self::MarginDistribution => "margin-distribution",
        }
    }

    pub const fn heading(self) -> &'static str {
        match self {
            Self::MatchesPerSeason => "Matches Per Season",
            Self::WinsPerTeam => "Total Wins by Each Team",
            Self::TossDecisions => "Toss Decision Impact on Match Wins",
            Self::WinMargins => "Win Margins: Runs vs Wickets",
            Self::TopVenues => "Top 10 Venues by Match Count",
            Self::PlayersOfTheMatch => "Top Players of the Match",
            Self::AverageMargin => "Average Win Margin by Season",
            Self::TossVsMatch => "Toss Winner vs Match Winner Analysis",
            Self::MatchesByCity => "Matches by City",
            Self::MarginDistribution => "Win Margin Distribution",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.strip_suffix(".svg").unwrap_or(slug);
        Self::ordered()
            .into_iter()
            .find(|statistic| statistic.slug() == slug)
    }

    /// 1-based tab holding this statistic; two statistics per tab.
    pub const fn tab(self) -> usize {
        (self.number() + 1) / 2
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.heading())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_and_accept_svg_suffix() {
        for statistic in Statistic::ordered() {
            assert_eq!(Statistic::from_slug(statistic.slug()), Some(statistic));
        }
        assert_eq!(
            Statistic::from_slug("top-venues.svg"),
            Some(Statistic::TopVenues)
        );
        assert_eq!(Statistic::from_slug("umpires"), None);
    }

    #[test]
    fn two_statistics_per_tab() {
        assert_eq!(Statistic::MatchesPerSeason.tab(), 1);
        assert_eq!(Statistic::WinsPerTeam.tab(), 1);
        assert_eq!(Statistic::TossDecisions.tab(), 2);
        assert_eq!(Statistic::MarginDistribution.tab(), 5);
    }

    #[test]
    fn serialized_name_matches_slug() {
        let json = serde_json::to_string(&Statistic::PlayersOfTheMatch).expect("serializes");
        assert_eq!(json, "\"players-of-the-match\"");
    }
}
