use clap::Parser;
use toggl_api::time_entries::NewTimeEntry;
use toggl_api::Client;

use super::{local_time_format, Result};

/// Start a new running time entry
#[derive(Debug, Parser)]
pub struct Command {
    pub description: String,
    /// Project to book the entry on
    #[arg(short, long)]
    pub project: Option<u64>,
    /// Tags, may be repeated
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

pub fn start(client: &Client, cmd: &Command) -> Result<String> {
    let mut entry = NewTimeEntry::new(&cmd.description);
    entry.project_id = cmd.project;
    for tag in &cmd.tags {
        entry.add_tag(tag);
    }
    let started = client.start_time_entry(&entry)?;
    log::info!("Started time entry {}", started.id);
    Ok(format!("Started \"{}\" at {}!", started.description, local_time_format(started.start)))
}

#[cfg(test)]
mod tests {
    use utilities::mocking;

    use super::*;
    use crate::commands::listing::tests::{api_key, resources};

    #[test]
    fn it_starts_entries() {
        let mut server = mocking::FakeToggl::new();
        let resources = resources(&server);
        let m = server
            .with_fixture("POST", "/api/v8/time_entries/start", "time_entry")
            .match_body(mocking::Matcher::PartialJsonString(
                r#"{"time_entry": {"description": "Meeting with possible clients", "pid": 123}}"#.into(),
            ))
            .create();

        let cmd = Command { description: "Meeting with possible clients".into(), project: Some(123), tags: vec![] };
        let out = start(&Client::new(api_key(), &resources), &cmd).unwrap();
        assert!(out.starts_with("Started \"Meeting with possible clients\" at "));
        m.assert();
    }
}
