use attohttpc::header::{CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::request::{Method, Request};
use crate::response::Response;
use crate::{ApiKey, Resources, Result};

/// Entry point for talking to the Toggl API
///
/// The registry is borrowed: register every resource before creating the client.
#[derive(Clone, Debug)]
pub struct Client<'r> {
    resources: &'r Resources,
    api_key: ApiKey,
    content_type: &'static str,
    user_agent: &'static str,
}

/// Getters & instantiation
impl<'r> Client<'r> {
    pub fn new(api_key: ApiKey, resources: &'r Resources) -> Self {
        Self { resources, api_key, content_type: crate::CONTENT_TYPE_JSON, user_agent: crate::USER_AGENT }
    }

    pub fn resources(&self) -> &Resources {
        self.resources
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent
    }
}

/// Request pipeline
impl Client<'_> {
    /// Resolves `resource` and returns an authenticated request for it
    pub fn build_request(&self, method: Method, resource: &str) -> Result<Request> {
        let url = self.resources.url(resource)?;
        Ok(Request::new(method, url)?
            .basic_auth(self.api_key.token(), self.api_key.secret())
            .header(USER_AGENT, self.user_agent)
            .header(CONTENT_TYPE, self.content_type))
    }

    pub fn send(&self, request: Request) -> Result<Response> {
        request.send()
    }

    /// Sends a GET to `resource` without decoding the payload
    pub fn get_request(&self, resource: &str) -> Result<()> {
        let request = self.build_request(Method::GET, resource)?;
        self.send(request)?.decode_empty()
    }

    pub fn get_json<J: DeserializeOwned>(&self, resource: &str) -> Result<J> {
        let request = self.build_request(Method::GET, resource)?;
        self.send(request)?.decode()
    }

    pub fn post_json<B: Serialize, J: DeserializeOwned>(&self, resource: &str, body: &B) -> Result<J> {
        let request = self.build_request(Method::POST, resource)?.json(body)?;
        self.send(request)?.decode()
    }

    pub fn put_json<B: Serialize, J: DeserializeOwned>(&self, resource: &str, body: &B) -> Result<J> {
        let request = self.build_request(Method::PUT, resource)?.json(body)?;
        self.send(request)?.decode()
    }

    pub fn delete(&self, resource: &str) -> Result<()> {
        let request = self.build_request(Method::DELETE, resource)?;
        self.send(request)?.decode_empty()
    }
}
