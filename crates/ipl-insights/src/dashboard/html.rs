use super::layout::{Dashboard, Tab};
use super::panel::PanelOutcome;
use std::fmt::{self, Write};

/// Which part of the dashboard a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    /// Interactive page with one active tab (1-based).
    Tab(usize),
    /// Standalone report with every tab expanded and no navigation.
    Report,
}

pub fn render_page(dashboard: &Dashboard, view: PageView) -> Result<String, fmt::Error> {
    let mut html = String::with_capacity(128 * 1024);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\"/>")?;
    writeln!(
        html,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>"
    )?;
    writeln!(html, "<title>{}</title>", escape(dashboard.title))?;
    write_styles(&mut html)?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;

    write_sidebar(&mut html, dashboard)?;

    writeln!(html, "<main>")?;
    writeln!(html, "<h1>{}</h1>", escape(dashboard.title))?;

    match view {
        PageView::Tab(active) => {
            writeln!(html, "<nav class=\"tabs\">")?;
            for tab in &dashboard.tabs {
                let class = if tab.index == active { "tab active" } else { "tab" };
                writeln!(
                    html,
                    "<a class=\"{class}\" href=\"/?tab={}\">{}</a>",
                    tab.index,
                    escape(&tab.label)
                )?;
            }
            writeln!(html, "</nav>")?;
            if let Some(tab) = dashboard.tabs.iter().find(|tab| tab.index == active) {
                write_tab(&mut html, tab, false)?;
            }
        }
        PageView::Report => {
            for tab in &dashboard.tabs {
                write_tab(&mut html, tab, true)?;
            }
        }
    }

    write_footer(&mut html, dashboard)?;
    writeln!(html, "</main>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

fn write_styles(html: &mut String) -> fmt::Result {
    writeln!(html, "<style>")?;
    writeln!(
        html,
        "body{{font-family:Arial,Helvetica,sans-serif;margin:0;color:#222;background:#fff;display:flex;}}"
    )?;
    writeln!(
        html,
        "aside{{width:220px;min-height:100vh;background:#f0f2f6;padding:20px;box-sizing:border-box;}}"
    )?;
    writeln!(html, "aside h2{{font-size:18px;margin:0 0 12px 0;}}")?;
    writeln!(html, ".metric{{margin:0 0 14px 0;}}")?;
    writeln!(html, ".metric .label{{color:#555;font-size:13px;}}")?;
    writeln!(html, ".metric .value{{font-size:24px;font-weight:bold;}}")?;
    writeln!(html, "main{{flex:1;padding:20px 32px;}}")?;
    writeln!(html, "h1{{margin:0 0 16px 0;font-size:28px;}}")?;
    writeln!(
        html,
        ".tabs{{display:flex;gap:4px;border-bottom:1px solid #ddd;margin-bottom:16px;}}"
    )?;
    writeln!(
        html,
        ".tab{{padding:8px 14px;color:#555;text-decoration:none;border-bottom:2px solid transparent;}}"
    )?;
    writeln!(
        html,
        ".tab.active{{color:#ff4b4b;border-bottom-color:#ff4b4b;font-weight:bold;}}"
    )?;
    writeln!(html, ".tab-title{{font-size:20px;margin:20px 0 8px 0;}}")?;
    writeln!(
        html,
        ".row{{display:grid;grid-template-columns:1fr 1fr;gap:24px;}}"
    )?;
    writeln!(html, ".panel h3{{font-size:17px;margin:8px 0;}}")?;
    writeln!(html, ".panel svg{{max-width:100%;height:auto;}}")?;
    writeln!(html, ".stat{{color:#444;font-size:14px;margin:6px 0 0 0;}}")?;
    writeln!(
        html,
        ".error{{border:1px solid #f5c2c7;background:#f8d7da;color:#842029;padding:12px;border-radius:4px;}}"
    )?;
    writeln!(
        html,
        "footer{{border-top:1px solid #ddd;margin-top:28px;padding-top:12px;}}"
    )?;
    writeln!(
        html,
        ".footer-metrics{{display:grid;grid-template-columns:repeat(4,1fr);gap:16px;}}"
    )?;
    writeln!(
        html,
        ".credit{{color:#777;font-size:12px;text-align:center;margin-top:16px;}}"
    )?;
    writeln!(html, "</style>")
}

fn write_sidebar(html: &mut String, dashboard: &Dashboard) -> fmt::Result {
    let overview = &dashboard.overview;
    writeln!(html, "<aside>")?;
    writeln!(html, "<h2>Dataset Overview</h2>")?;
    write_metric(html, "Total Matches", &overview.total_matches.to_string())?;
    write_metric(html, "Seasons", &overview.season_range_label())?;
    write_metric(html, "Total Teams", &overview.total_teams.to_string())?;
    writeln!(html, "</aside>")
}

fn write_metric(html: &mut String, label: &str, value: &str) -> fmt::Result {
    writeln!(
        html,
        "<div class=\"metric\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>",
        escape(label),
        escape(value)
    )
}

fn write_tab(html: &mut String, tab: &Tab, with_title: bool) -> fmt::Result {
    writeln!(html, "<section class=\"tab-body\" id=\"tab-{}\">", tab.index)?;
    if with_title {
        writeln!(html, "<h2 class=\"tab-title\">{}</h2>", escape(&tab.label))?;
    }
    writeln!(html, "<div class=\"row\">")?;
    for outcome in &tab.panels {
        write_panel(html, outcome)?;
    }
    writeln!(html, "</div>")?;
    writeln!(html, "</section>")
}

fn write_panel(html: &mut String, outcome: &PanelOutcome) -> fmt::Result {
    writeln!(
        html,
        "<div class=\"panel\" id=\"{}\">",
        outcome.statistic().slug()
    )?;
    match outcome {
        PanelOutcome::Ready(panel) => {
            writeln!(
                html,
                "<h3>{}. {}</h3>",
                panel.number,
                escape(panel.heading)
            )?;
            writeln!(html, "{}", panel.chart)?;
            writeln!(
                html,
                "<p class=\"stat\"><b>Stat:</b> {}</p>",
                escape(&panel.summary)
            )?;
        }
        PanelOutcome::Failed {
            number,
            heading,
            error,
            ..
        } => {
            writeln!(html, "<h3>{}. {}</h3>", number, escape(heading))?;
            writeln!(
                html,
                "<div class=\"error\">Unable to build this statistic: {}</div>",
                escape(error)
            )?;
        }
    }
    writeln!(html, "</div>")
}

fn write_footer(html: &mut String, dashboard: &Dashboard) -> fmt::Result {
    writeln!(html, "<footer>")?;
    writeln!(html, "<h2>Summary Statistics</h2>")?;
    writeln!(html, "<div class=\"footer-metrics\">")?;
    for (label, value) in dashboard.footer.labelled() {
        write_metric(html, label, &value.to_string())?;
    }
    writeln!(html, "</div>")?;
    writeln!(
        html,
        "<p class=\"credit\">{}</p>",
        escape(&dashboard.credit())
    )?;
    writeln!(html, "</footer>")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartError;
    use crate::dashboard::panel::{build_panel, PanelError};
    use crate::dashboard::Statistic;
    use crate::dataset::MatchTable;
    use crate::test_support::RecordBuilder;

    fn dashboard() -> Dashboard {
        let table = MatchTable::new(vec![
            RecordBuilder::new(2010).build(),
            RecordBuilder::new(2011)
                .teams("Kings XI Punjab", "Delhi Daredevils")
                .winner(Some("Delhi Daredevils"))
                .build(),
        ]);
        Dashboard::build(&table, "matches.csv")
    }

    #[test]
    fn tab_view_shows_only_the_active_tab() {
        let html = render_page(&dashboard(), PageView::Tab(2)).expect("renders");
        assert!(html.contains("<a class=\"tab active\" href=\"/?tab=2\">Stats 3-4</a>"));
        assert!(html.contains("id=\"toss-decisions\""));
        assert!(html.contains("id=\"win-margins\""));
        assert!(!html.contains("id=\"matches-per-season\""));
        assert_eq!(html.matches("<svg").count(), 2);
    }

    #[test]
    fn report_view_expands_every_tab() {
        let html = render_page(&dashboard(), PageView::Report).expect("renders");
        assert_eq!(html.matches("<svg").count(), 10);
        assert_eq!(html.matches("<b>Stat:</b>").count(), 10);
        assert!(!html.contains("<nav"));
        assert!(html.contains("Dataset Overview"));
        assert!(html.contains("Summary Statistics"));
        assert!(html.contains("Data Source: matches.csv"));
    }

    #[test]
    fn failed_panel_renders_an_error_card() {
        let table = MatchTable::new(vec![RecordBuilder::new(2012).build()]);
        let dashboard = Dashboard::build_with(&table, "matches.csv", |statistic, input| {
            if statistic == Statistic::WinsPerTeam {
                Err(PanelError::Chart(ChartError::Drawing("backend closed".to_string())))
            } else {
                build_panel(statistic, input)
            }
        });
        let html = render_page(&dashboard, PageView::Tab(1)).expect("renders");
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("2. Total Wins by Each Team"));
        assert_eq!(html.matches("<svg").count(), 1);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape("Rising Pune <Supergiant> & \"Co\""),
            "Rising Pune &lt;Supergiant&gt; &amp; &quot;Co&quot;"
        );
    }
}
