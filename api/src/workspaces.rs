use serde::Deserialize;
use time::serde::rfc3339;
use time::OffsetDateTime;

use super::registry::names;
use super::Result;

impl super::Client<'_> {
    pub fn workspaces(&self) -> Result<Vec<Workspace>> {
        self.get_json(names::WORKSPACES)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Workspace {
    pub id: u64,
    pub name: String,
    pub premium: bool,
    pub admin: bool,
    #[serde(default)]
    pub default_hourly_rate: f64,
    pub default_currency: Option<String>,
    #[serde(default)]
    pub rounding_minutes: u32,
    #[serde(with = "rfc3339::option", default)]
    pub at: Option<OffsetDateTime>,
}
