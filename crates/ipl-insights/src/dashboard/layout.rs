use super::panel::{build_panel, Panel, PanelError, PanelOutcome};
use super::statistic::Statistic;
use crate::dataset::MatchTable;
use crate::stats::{DatasetOverview, DerivedColumns, FooterMetrics, StatsInput};
use serde::Serialize;
use tracing::{debug, warn};

pub const DASHBOARD_TITLE: &str = "IPL Management Analysis Dashboard";
pub const TAB_COUNT: usize = 5;

/// One tab holding two consecutive statistics.
#[derive(Debug, Clone, Serialize)]
pub struct Tab {
    pub index: usize,
    pub label: String,
    pub panels: Vec<PanelOutcome>,
}

/// Fully built page model: sidebar, five tabs and footer.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: &'static str,
    pub source: String,
    pub overview: DatasetOverview,
    pub tabs: Vec<Tab>,
    pub footer: FooterMetrics,
}

impl Dashboard {
    pub fn build(table: &MatchTable, source: impl Into<String>) -> Self {
        Self::build_with(table, source, build_panel)
    }

    /// Builds every panel through `builder`; a failing panel never stops the rest.
    pub fn build_with<F>(table: &MatchTable, source: impl Into<String>, mut builder: F) -> Self
    where
        F: FnMut(Statistic, StatsInput<'_>) -> Result<Panel, PanelError>,
    {
        let derived = DerivedColumns::compute(table);
        let input = StatsInput {
            table,
            derived: &derived,
        };

        let mut tabs: Vec<Tab> = (1..=TAB_COUNT)
            .map(|index| Tab {
                index,
                label: tab_label(index),
                panels: Vec::with_capacity(2),
            })
            .collect();

        for statistic in Statistic::ordered() {
            let result = builder(statistic, input);
            match &result {
                Ok(_) => debug!(statistic = statistic.slug(), "panel built"),
                Err(err) => warn!(statistic = statistic.slug(), error = %err, "panel failed"),
            }
            if let Some(tab) = tabs.get_mut(statistic.tab() - 1) {
                tab.panels.push(PanelOutcome::from_result(statistic, result));
            }
        }

        Self {
            title: DASHBOARD_TITLE,
            source: source.into(),
            overview: DatasetOverview::from_table(table),
            tabs,
            footer: FooterMetrics::from_table(table),
        }
    }

    pub fn panels(&self) -> impl Iterator<Item = &PanelOutcome> {
        self.tabs.iter().flat_map(|tab| tab.panels.iter())
    }

    pub fn panel(&self, statistic: Statistic) -> Option<&PanelOutcome> {
        self.panels().find(|outcome| outcome.statistic() == statistic)
    }

    pub fn credit(&self) -> String {
        format!(
            "Dashboard Created for IPL Management Analysis | Data Source: {}",
            self.source
        )
    }
}

pub fn tab_label(index: usize) -> String {
    format!("Stats {}-{}", index * 2 - 1, index * 2)
}
