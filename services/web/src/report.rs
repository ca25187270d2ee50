use clap::Args;
use ipl_insights::config::{AppConfig, DatasetConfig};
use ipl_insights::dashboard::{render_page, Dashboard, PageView, PanelOutcome};
use ipl_insights::dataset::TableLoader;
use ipl_insights::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Destination HTML file
    #[arg(long)]
    pub(crate) output: PathBuf,
    /// Override the configured match records CSV
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SummaryArgs {
    /// Override the configured match records CSV
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let dashboard = load_dashboard(args.dataset)?;
    let page = render_page(&dashboard, PageView::Report)?;
    std::fs::write(&args.output, page)?;
    println!(
        "Dashboard for {} matches written to {}",
        dashboard.overview.total_matches,
        args.output.display()
    );
    Ok(())
}

pub(crate) fn run_summary(args: SummaryArgs) -> Result<(), AppError> {
    let dashboard = load_dashboard(args.dataset)?;
    for line in summary_lines(&dashboard) {
        println!("{line}");
    }
    Ok(())
}

fn load_dashboard(dataset: Option<PathBuf>) -> Result<Dashboard, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = dataset {
        config.dataset = DatasetConfig { path };
    }

    let table = TableLoader::new(config.dataset.path.clone()).load()?;
    Ok(Dashboard::build(&table, config.dataset.source_label()))
}

pub(crate) fn summary_lines(dashboard: &Dashboard) -> Vec<String> {
    let overview = &dashboard.overview;
    let mut lines = vec![
        dashboard.title.to_string(),
        String::new(),
        "Dataset Overview".to_string(),
        format!("- Total Matches: {}", overview.total_matches),
        format!("- Seasons: {}", overview.season_range_label()),
        format!("- Total Teams: {}", overview.total_teams),
    ];

    for tab in &dashboard.tabs {
        lines.push(String::new());
        lines.push(tab.label.clone());
        for outcome in &tab.panels {
            match outcome {
                PanelOutcome::Ready(panel) => {
                    lines.push(format!("{}. {}", panel.number, panel.heading));
                    lines.push(format!("   Stat: {}", panel.summary));
                }
                PanelOutcome::Failed {
                    number,
                    heading,
                    error,
                    ..
                } => {
                    lines.push(format!("{number}. {heading}"));
                    lines.push(format!("   unavailable: {error}"));
                }
            }
        }
    }

    lines.push(String::new());
    lines.push("Summary Statistics".to_string());
    for (label, value) in dashboard.footer.labelled() {
        lines.push(format!("- {label}: {value}"));
    }
    lines.push(String::new());
    lines.push(dashboard.credit());
    lines
}
