pub use mockito::{Matcher, Mock};

/// Basic auth header for the `access-token` token with the `api_token` secret
pub const ACCESS_TOKEN_AUTH: &str = "Basic YWNjZXNzLXRva2VuOmFwaV90b2tlbg==";

pub struct FakeToggl {
    server: mockito::ServerGuard,
}

impl FakeToggl {
    pub fn new() -> Self {
        Self { server: mockito::Server::new() }
    }

    pub fn mock<P: Into<Matcher>>(&mut self, method: &str, path: P) -> Mock {
        self.server.mock(method, path)
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Absolute url for `path` on this server
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.server.url())
    }

    fn default_mock<P: Into<Matcher>>(&mut self, method: &str, path: P) -> Mock {
        self.server
            .mock(method, path)
            .with_status(200)
            .with_header("content-type", "application/json")
    }

    pub fn with_body<P: Into<Matcher>>(&mut self, method: &str, path: P, body: &str) -> Mock {
        self.default_mock(method, path).with_body(body)
    }

    pub fn with_fixture<P: Into<Matcher>>(&mut self, method: &str, path: P, fixture: &str) -> Mock {
        let file = format!("{}/fixtures/{fixture}.json", env!("CARGO_MANIFEST_DIR"));
        self.default_mock(method, path)
            .match_header("authorization", ACCESS_TOKEN_AUTH)
            .with_body_from_file(file)
    }

    pub fn mock_workspaces(&mut self) -> Mock {
        self.with_fixture("GET", "/api/v8/workspaces", "workspaces").create()
    }

    pub fn mock_clients(&mut self) -> Mock {
        self.with_fixture("GET", "/api/v8/clients", "clients").create()
    }
}

impl Default for FakeToggl {
    fn default() -> Self {
        Self::new()
    }
}
