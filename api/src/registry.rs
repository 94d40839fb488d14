use std::collections::hash_map::Entry;
use std::collections::HashMap;

use url::Url;

use super::{Endpoint, Error, Result};

/// Resource names used by [`Resources::toggl`] and the typed helpers
pub mod names {
    pub const WORKSPACES: &str = "workspaces";
    pub const CLIENTS: &str = "clients";
    pub const REPORT_WEEKLY: &str = "report_weekly";
    pub const REPORT_DETAILED: &str = "report_detailed";
    pub const REPORT_SUMMARY: &str = "report_summary";
    pub const START_TIME_ENTRY: &str = "start_time_entry";
}

/// Maps logical resource names to endpoints
#[derive(Clone, Debug, Default)]
pub struct Resources {
    endpoints: HashMap<String, Endpoint>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a registry holding every Toggl endpoint under its default name
    pub fn toggl() -> Self {
        let mut resources = Self::new();
        for (name, endpoint) in [
            (names::WORKSPACES, Endpoint::Workspaces),
            (names::CLIENTS, Endpoint::Clients),
            (names::REPORT_WEEKLY, Endpoint::ReportWeekly),
            (names::REPORT_DETAILED, Endpoint::ReportDetailed),
            (names::REPORT_SUMMARY, Endpoint::ReportSummary),
            (names::START_TIME_ENTRY, Endpoint::StartTimeEntry),
        ] {
            resources.endpoints.insert(name.to_owned(), endpoint);
        }
        resources
    }

    pub fn add_endpoint<E: Into<Endpoint>>(&mut self, name: &str, endpoint: E) -> Result<()> {
        match self.endpoints.entry(name.to_owned()) {
            Entry::Occupied(_) => Err(Error::DuplicateResource(name.to_owned())),
            Entry::Vacant(slot) => {
                slot.insert(endpoint.into());
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Endpoint> {
        self.endpoints.get(name)
    }

    pub fn url(&self, name: &str) -> Result<Url> {
        self.get(name)
            .map(Endpoint::url)
            .ok_or_else(|| Error::UnknownResource(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.endpoints.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}


#[cfg(test)]
/// Helper function for DRY tests: every default resource, served by `server`
pub fn test_resources(server: &utilities::mocking::FakeToggl) -> Resources {
    let mut resources = Resources::new();
    for (name, endpoint) in Resources::toggl().endpoints {
        let url = Url::parse(&server.url_for(endpoint.url().path())).unwrap();
        resources.add_endpoint(&name, url).unwrap();
    }
    resources
}
