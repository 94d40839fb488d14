use serde::{Deserialize, Serialize};
use time::serde::rfc3339;
use time::{Duration, OffsetDateTime};

use super::registry::names;
use super::Result;

impl super::Client<'_> {
    /// Starts a running time entry
    pub fn start_time_entry(&self, entry: &NewTimeEntry) -> Result<TimeEntry> {
        let body = Wrapped {
            time_entry: StartBody { entry, created_with: self.user_agent() },
        };
        let response: Data<TimeEntry> = self.post_json(names::START_TIME_ENTRY, &body)?;
        Ok(response.data)
    }
}

#[derive(Serialize)]
struct Wrapped<T> {
    time_entry: T,
}

#[derive(Serialize)]
struct StartBody<'a> {
    #[serde(flatten)]
    entry: &'a NewTimeEntry,
    created_with: &'a str,
}

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct NewTimeEntry {
    pub description: String,
    #[serde(rename = "pid", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(rename = "wid", skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub billable: bool,
}

impl NewTimeEntry {
    pub fn new(description: &str) -> Self {
        Self { description: description.to_owned(), ..Self::default() }
    }

    pub fn in_project(self, project_id: u64) -> Self {
        Self { project_id: Some(project_id), ..self }
    }

    pub fn add_tag(&mut self, tag: &str) {
        self.tags.push(tag.to_owned());
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TimeEntry {
    pub id: u64,
    #[serde(rename = "wid")]
    pub workspace_id: u64,
    #[serde(rename = "pid")]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub billable: bool,
    #[serde(with = "rfc3339")]
    pub start: OffsetDateTime,
    #[serde(with = "rfc3339::option", default)]
    pub stop: Option<OffsetDateTime>,
    /// Negative while running: the start time as a negated unix timestamp
    pub duration: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TimeEntry {
    pub fn is_running(&self) -> bool {
        self.duration < 0
    }

    /// Elapsed time, measured against `now` for running entries
    pub fn elapsed(&self, now: OffsetDateTime) -> Duration {
        if self.is_running() {
            now - self.start
        } else {
            Duration::seconds(self.duration)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;
    use utilities::mocking;

    use super::*;
    use crate::registry::test_resources;
    use crate::{ApiKey, Client};

    #[test]
    fn it_can_start_an_entry() {
        let mut server = mocking::FakeToggl::new();
        let resources = test_resources(&server);
        let m = server
            .with_fixture("POST", "/api/v8/time_entries/start", "time_entry")
            .match_header("content-type", "application/json")
            .match_body(mocking::Matcher::Json(json!({
                "time_entry": {
                    "description": "Meeting with possible clients",
                    "pid": 123,
                    "tags": ["billed"],
                    "created_with": crate::USER_AGENT
                }
            })))
            .create();

        let mut new_entry = NewTimeEntry::new("Meeting with possible clients").in_project(123);
        new_entry.add_tag("billed");
        let client = Client::new(ApiKey::from_token("access-token"), &resources);
        let entry = client.start_time_entry(&new_entry).unwrap();

        assert_eq!(entry.id, 436694100);
        assert_eq!(entry.workspace_id, 777);
        assert!(entry.is_running());
        assert!(entry.stop.is_none());
        assert_eq!(entry.start, datetime!(2013-03-05 07:58:58 UTC));
        assert_eq!(entry.elapsed(datetime!(2013-03-05 08:58:58 UTC)), Duration::hours(1));
        m.assert();
    }

    #[test]
    fn it_skips_unset_fields() {
        let body = serde_json::to_value(NewTimeEntry::new("Reading")).unwrap();
        assert_eq!(body, json!({"description": "Reading"}));
    }
}
