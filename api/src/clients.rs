use serde::Deserialize;
use time::serde::rfc3339;
use time::OffsetDateTime;

use super::registry::names;
use super::Result;

impl super::Client<'_> {
    /// Lists the customers visible to the authenticated user
    pub fn clients(&self) -> Result<Vec<ClientInfo>> {
        self.get_json(names::CLIENTS)
    }
}

/// A Toggl client, i.e. the customer projects are billed to
#[derive(Clone, Debug, Deserialize)]
pub struct ClientInfo {
    pub id: u64,
    #[serde(rename = "wid")]
    pub workspace_id: u64,
    pub name: String,
    pub notes: Option<String>,
    #[serde(with = "rfc3339::option", default)]
    pub at: Option<OffsetDateTime>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use utilities::mocking;

    use crate::registry::test_resources;
    use crate::{ApiKey, Client, Error};

    #[test]
    fn it_can_fetch_clients() {
        let mut server = mocking::FakeToggl::new();
        let resources = test_resources(&server);
        let _m = server.mock_clients();

        let client = Client::new(ApiKey::from_token("access-token"), &resources);
        let clients = client.clients().unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].workspace_id, 777);
        assert_eq!(clients[0].notes.as_deref(), Some("Contact Stephanie"));
        assert_eq!(clients[1].name, "Small Startup");
        assert!(clients[1].notes.is_none());
    }

    #[test]
    fn it_surfaces_authentication_failures() {
        let mut server = mocking::FakeToggl::new();
        let resources = test_resources(&server);
        let _m = server
            .mock("GET", "/api/v8/clients")
            .with_status(403)
            .with_body(json!({"error": {"code": 403, "message": "Incorrect username and/or password"}}).to_string())
            .create();

        let client = Client::new(ApiKey::from_token("wrong-token"), &resources);
        match client.clients() {
            Err(Error::Api(err)) => assert_eq!(err.message, "Incorrect username and/or password"),
            other => panic!("unexpected result {other:?}"),
        }
    }
}
