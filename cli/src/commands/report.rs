use clap::{Parser, ValueEnum};
use time::{macros::format_description, Date, Duration};
use toggl_api::reports::{Report, ReportQuery, ReportTitle};
use toggl_api::Client;

use super::{format_duration, local_time_format, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Weekly,
    Detailed,
    Summary,
}

#[derive(Debug, Parser)]
pub struct Command {
    #[arg(value_enum, default_value_t = Kind::Summary)]
    pub kind: Kind,
    /// Defaults to the configured workspace
    #[arg(short, long)]
    pub workspace: Option<u64>,
    /// First day, e.g. 2023-01-31
    #[arg(long, value_parser = parse_date)]
    pub since: Option<Date>,
    /// Last day, e.g. 2023-02-06
    #[arg(long, value_parser = parse_date)]
    pub until: Option<Date>,
}

/// Entrypoint for this module
pub fn run(client: &Client, workspace_id: u64, cmd: &Command) -> Result<String> {
    let query = ReportQuery { workspace_id, since: cmd.since, until: cmd.until };
    Ok(match cmd.kind {
        Kind::Weekly => {
            let report = client.weekly_report(&query)?;
            render(&report, |row| format!("{}  {}", format_duration(row.week_total()), title(&row.title)))
        }
        Kind::Detailed => {
            let report = client.detailed_report(&query)?;
            render(&report, |entry| {
                let project = entry.project.as_deref().unwrap_or("(no project)");
                format!(
                    "{} {}  {}  {} [{project}]",
                    entry.start.date(),
                    local_time_format(entry.start),
                    format_duration(entry.duration()),
                    entry.description
                )
            })
        }
        Kind::Summary => {
            let report = client.summary_report(&query)?;
            render(&report, |group| {
                format!("{}  {}", format_duration(Duration::milliseconds(group.time as i64)), title(&group.title))
            })
        }
    })
}

fn render<T, F: Fn(&T) -> String>(report: &Report<T>, line: F) -> String {
    let mut out: Vec<String> = report.data.iter().map(line).collect();
    out.push(format!("Total: {}", format_duration(report.total())));
    out.join("\n")
}

fn title(title: &ReportTitle) -> String {
    match (&title.project, &title.client) {
        (Some(project), Some(client)) => format!("{project} ({client})"),
        (Some(project), None) => project.to_owned(),
        (None, _) => title.user.clone().unwrap_or_else(|| "(no project)".to_owned()),
    }
}

fn parse_date(input: &str) -> std::result::Result<Date, String> {
    Date::parse(input, format_description!("[year]-[month]-[day]")).map_err(|e| format!("{e}"))
}

#[cfg(test)]
mod tests {
    use time::macros::date;
    use utilities::mocking::{self, Matcher};

    use super::*;
    use crate::commands::listing::tests::{api_key, resources};

    fn command(kind: Kind) -> Command {
        Command { kind, workspace: None, since: None, until: None }
    }

    #[test]
    fn it_parses_dates() {
        assert_eq!(parse_date("2023-01-31").unwrap(), date!(2023 - 01 - 31));
        assert!(parse_date("31.01.2023").is_err());
    }

    #[test]
    fn it_renders_summary_reports() {
        let mut server = mocking::FakeToggl::new();
        let resources = resources(&server);
        let _m = server
            .with_fixture("GET", Matcher::Regex("^/reports/api/v2/summary".into()), "report_summary")
            .create();

        let out = run(&Client::new(api_key(), &resources), 777, &command(Kind::Summary)).unwrap();
        assert_eq!(
            out,
            "4:00  Toggl Development (Very Big Company)\n6:00  (no project)\nTotal: 10:00"
        );
    }

    #[test]
    fn it_renders_weekly_reports() {
        let mut server = mocking::FakeToggl::new();
        let resources = resources(&server);
        let _m = server
            .with_fixture("GET", Matcher::Regex("^/reports/api/v2/weekly".into()), "report_weekly")
            .create();

        let out = run(&Client::new(api_key(), &resources), 777, &command(Kind::Weekly)).unwrap();
        assert_eq!(out, "10:00  Toggl Desktop (Toggl)\nTotal: 10:00");
    }

    #[test]
    fn it_passes_the_range_to_detailed_reports() {
        let mut server = mocking::FakeToggl::new();
        let resources = resources(&server);
        let m = server
            .with_fixture("GET", Matcher::Regex("^/reports/api/v2/details".into()), "report_detailed")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("workspace_id".into(), "42".into()),
                Matcher::UrlEncoded("since".into(), "2013-03-11".into()),
            ]))
            .create();

        let cmd = Command { since: Some(date!(2013 - 03 - 11)), ..command(Kind::Detailed) };
        let out = run(&Client::new(api_key(), &resources), 42, &cmd).unwrap();
        assert!(out.contains("4:00  tegin [Toggl Development]"));
        assert!(out.ends_with("Total: 6:24"));
        m.assert();
    }
}
