use url::Url;

const ENDPOINT_WORKSPACES: &str = "https://api.track.toggl.com/api/v8/workspaces";
const ENDPOINT_CLIENTS: &str = "https://api.track.toggl.com/api/v8/clients";
const ENDPOINT_REPORT_WEEKLY: &str = "https://api.track.toggl.com/reports/api/v2/weekly";
const ENDPOINT_REPORT_DETAILED: &str = "https://api.track.toggl.com/reports/api/v2/details";
const ENDPOINT_REPORT_SUMMARY: &str = "https://api.track.toggl.com/reports/api/v2/summary";
const ENDPOINT_START_TIME: &str = "https://api.track.toggl.com/api/v8/time_entries/start";

/// A REST endpoint of the Toggl API
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Workspaces,
    Clients,
    ReportWeekly,
    ReportDetailed,
    ReportSummary,
    StartTimeEntry,
    /// Any other fixed URL, e.g. a proxy in front of the API
    Custom(Url),
}

impl Endpoint {
    pub fn url_string(&self) -> String {
        match self {
            Self::Custom(url) => url.to_string(),
            other => other.fixed_url().to_owned(),
        }
    }

    pub fn url(&self) -> Url {
        match self {
            Self::Custom(url) => url.clone(),
            other => Url::parse(other.fixed_url()).expect("built-in endpoint urls are valid"),
        }
    }

    fn fixed_url(&self) -> &'static str {
        match self {
            Self::Workspaces => ENDPOINT_WORKSPACES,
            Self::Clients => ENDPOINT_CLIENTS,
            Self::ReportWeekly => ENDPOINT_REPORT_WEEKLY,
            Self::ReportDetailed => ENDPOINT_REPORT_DETAILED,
            Self::ReportSummary => ENDPOINT_REPORT_SUMMARY,
            Self::StartTimeEntry => ENDPOINT_START_TIME,
            Self::Custom(_) => unreachable!("custom endpoints carry their own url"),
        }
    }
}

impl From<Url> for Endpoint {
    fn from(value: Url) -> Self {
        Self::Custom(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_all_builtin_urls() {
        let all = [
            Endpoint::Workspaces,
            Endpoint::Clients,
            Endpoint::ReportWeekly,
            Endpoint::ReportDetailed,
            Endpoint::ReportSummary,
            Endpoint::StartTimeEntry,
        ];
        for endpoint in all {
            assert_eq!(endpoint.url().as_str(), endpoint.url_string());
            assert_eq!(endpoint.url().host_str(), Some("api.track.toggl.com"));
        }
    }

    #[test]
    fn it_keeps_custom_urls() {
        let url = Url::parse("https://example.com/api/x").unwrap();
        let endpoint: Endpoint = url.clone().into();
        assert_eq!(endpoint.url(), url);
        assert_eq!(endpoint.url_string(), "https://example.com/api/x");
    }

    #[test]
    fn it_points_reports_at_the_reports_api() {
        assert_eq!(Endpoint::ReportDetailed.url().path(), "/reports/api/v2/details");
        assert_eq!(Endpoint::StartTimeEntry.url().path(), "/api/v8/time_entries/start");
    }
}
