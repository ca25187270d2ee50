use crate::report::{run_report, run_summary, ReportArgs, SummaryArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ipl_insights::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "IPL Management Analysis Dashboard",
    about = "Serve, export or summarise the IPL match records dashboard",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP dashboard (default command)
    Serve(ServeArgs),
    /// Write the full dashboard, every tab expanded, to a standalone HTML file
    Report(ReportArgs),
    /// Print the ten summary lines with the sidebar and footer figures
    Summary(SummaryArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured match records CSV
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report(args) => run_report(args),
        Command::Summary(args) => run_summary(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["ipl-dashboard"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn report_requires_an_output_path() {
        assert!(Cli::try_parse_from(["ipl-dashboard", "report"]).is_err());

        let cli = Cli::try_parse_from([
            "ipl-dashboard",
            "report",
            "--output",
            "dashboard.html",
            "--dataset",
            "data/matches.csv",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Report(args)) => {
                assert_eq!(args.output, PathBuf::from("dashboard.html"));
                assert_eq!(args.dataset, Some(PathBuf::from("data/matches.csv")));
            }
            other => panic!("expected report command, got {other:?}"),
        }
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["ipl-dashboard", "serve", "--port", "8080"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
