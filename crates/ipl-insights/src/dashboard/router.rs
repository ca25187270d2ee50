use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::html::{render_page, PageView};
use super::layout::{Dashboard, TAB_COUNT};
use super::panel::{build_panel, PanelOutcome};
use super::statistic::Statistic;
use crate::charts::Svg;
use crate::dataset::MatchTable;
use crate::stats::{DerivedColumns, StatsInput};

/// Shared read-only table plus the data source label shown in the footer.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub table: Arc<MatchTable>,
    pub source: Arc<str>,
}

impl DashboardState {
    pub fn new(table: Arc<MatchTable>, source: impl Into<Arc<str>>) -> Self {
        Self {
            table,
            source: source.into(),
        }
    }

    fn dashboard(&self) -> Dashboard {
        Dashboard::build(&self.table, self.source.to_string())
    }

    fn outcome(&self, statistic: Statistic) -> PanelOutcome {
        let table: &MatchTable = &self.table;
        let derived = DerivedColumns::compute(table);
        let input = StatsInput {
            table,
            derived: &derived,
        };
        PanelOutcome::from_result(statistic, build_panel(statistic, input))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

impl TabQuery {
    /// Requested tab, falling back to the first for anything unparsable or out of range.
    pub fn active_tab(&self) -> usize {
        self.tab
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|index| (1..=TAB_COUNT).contains(index))
            .unwrap_or(1)
    }
}

/// HTML page, JSON API and standalone chart endpoints over one loaded table.
pub fn dashboard_router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/api/v1/dashboard", get(dashboard_handler))
        .route("/api/v1/statistics/:slug", get(statistic_handler))
        .route("/charts/:slug", get(chart_handler))
        .with_state(state)
}

pub(crate) async fn page_handler(
    State(state): State<DashboardState>,
    Query(query): Query<TabQuery>,
) -> Response {
    let dashboard = state.dashboard();
    match render_page(&dashboard, PageView::Tab(query.active_tab())) {
        Ok(page) => Html(page).into_response(),
        Err(err) => internal_error(format!("failed to render dashboard: {err}")),
    }
}

pub(crate) async fn dashboard_handler(State(state): State<DashboardState>) -> Response {
    (StatusCode::OK, axum::Json(state.dashboard())).into_response()
}

pub(crate) async fn statistic_handler(
    State(state): State<DashboardState>,
    Path(slug): Path<String>,
) -> Response {
    let Some(statistic) = Statistic::from_slug(&slug) else {
        return unknown_statistic(&slug);
    };

    let outcome = state.outcome(statistic);
    let status = match outcome {
        PanelOutcome::Ready(_) => StatusCode::OK,
        PanelOutcome::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, axum::Json(outcome)).into_response()
}

pub(crate) async fn chart_handler(
    State(state): State<DashboardState>,
    Path(slug): Path<String>,
) -> Response {
    let Some(statistic) = Statistic::from_slug(&slug) else {
        return unknown_statistic(&slug);
    };

    match state.outcome(statistic) {
        PanelOutcome::Ready(panel) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, Svg::CONTENT_TYPE)],
            panel.chart.into_string(),
        )
            .into_response(),
        PanelOutcome::Failed { error, .. } => internal_error(error),
    }
}

fn unknown_statistic(slug: &str) -> Response {
    let payload = json!({
        "error": format!("unknown statistic: {slug}"),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn internal_error(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
