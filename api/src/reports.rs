use serde::de::DeserializeOwned;
use serde::Deserialize;
use time::serde::rfc3339;
use time::{Date, Duration, OffsetDateTime};

use super::registry::names;
use super::request::Method;
use super::Result;

impl super::Client<'_> {
    pub fn weekly_report(&self, query: &ReportQuery) -> Result<Report<WeeklyRow>> {
        self.report(names::REPORT_WEEKLY, query)
    }

    pub fn detailed_report(&self, query: &ReportQuery) -> Result<Report<DetailedEntry>> {
        self.report(names::REPORT_DETAILED, query)
    }

    pub fn summary_report(&self, query: &ReportQuery) -> Result<Report<SummaryGroup>> {
        self.report(names::REPORT_SUMMARY, query)
    }

    fn report<J: DeserializeOwned>(&self, resource: &str, query: &ReportQuery) -> Result<J> {
        // The reports api rejects calls without these two
        let mut request = self
            .build_request(Method::GET, resource)?
            .param("workspace_id", query.workspace_id)
            .param("user_agent", self.user_agent());
        if let Some(since) = query.since {
            request = request.param("since", since);
        }
        if let Some(until) = query.until {
            request = request.param("until", until);
        }
        self.send(request)?.decode()
    }
}

/// Parameters shared by all report types
#[derive(Clone, Debug)]
pub struct ReportQuery {
    pub workspace_id: u64,
    pub since: Option<Date>,
    pub until: Option<Date>,
}

impl ReportQuery {
    pub fn new(workspace_id: u64) -> Self {
        Self { workspace_id, since: None, until: None }
    }

    pub fn between(self, since: Date, until: Date) -> Self {
        Self { since: Some(since), until: Some(until), ..self }
    }
}

/// Envelope of every report; durations are in milliseconds
#[derive(Clone, Debug, Deserialize)]
pub struct Report<T> {
    pub total_grand: Option<u64>,
    pub total_billable: Option<u64>,
    #[serde(default)]
    pub total_currencies: Vec<CurrencyAmount>,
    pub total_count: Option<u64>,
    pub per_page: Option<u64>,
    pub data: Vec<T>,
}

impl<T> Report<T> {
    pub fn total(&self) -> Duration {
        millis(self.total_grand.unwrap_or(0))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CurrencyAmount {
    pub currency: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReportTitle {
    pub project: Option<String>,
    pub client: Option<String>,
    pub user: Option<String>,
    pub time_entry: Option<String>,
}

/// One project (or user) row with a total per weekday, followed by the week total
#[derive(Clone, Debug, Deserialize)]
pub struct WeeklyRow {
    pub title: ReportTitle,
    pub pid: Option<u64>,
    pub totals: Vec<Option<u64>>,
}

impl WeeklyRow {
    pub fn week_total(&self) -> Duration {
        millis(self.totals.last().copied().flatten().unwrap_or(0))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DetailedEntry {
    pub id: u64,
    pub pid: Option<u64>,
    pub uid: u64,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rfc3339")]
    pub start: OffsetDateTime,
    #[serde(with = "rfc3339::option", default)]
    pub end: Option<OffsetDateTime>,
    pub dur: u64,
    pub user: String,
    pub client: Option<String>,
    pub project: Option<String>,
    pub task: Option<String>,
    #[serde(default)]
    pub is_billable: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DetailedEntry {
    pub fn duration(&self) -> Duration {
        millis(self.dur)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SummaryGroup {
    pub id: Option<u64>,
    pub title: ReportTitle,
    pub time: u64,
    #[serde(default)]
    pub items: Vec<SummaryItem>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SummaryItem {
    pub title: ReportTitle,
    pub time: u64,
}

fn millis(value: u64) -> Duration {
    Duration::milliseconds(i64::try_from(value).unwrap_or(i64::MAX))
}
