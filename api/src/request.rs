pub use attohttpc::Method;
use attohttpc::header::IntoHeaderName;
use serde::Serialize;
use url::Url;

use super::response::Response;
use super::{Error, Result};

/// Wraps the 3rd party http client RequestBuilder
pub struct Request {
    builder: attohttpc::RequestBuilder,
    method: Method,
    url: Url,
    body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(method: Method, url: Url) -> Result<Self> {
        let builder = attohttpc::RequestBuilder::try_new(method.clone(), url.as_str())
            .map_err(|err| Error::InvalidRequest(format!("{err}")))?;
        Ok(Self { builder, method, url, body: None })
    }

    pub fn basic_auth(self, username: &str, password: &str) -> Self {
        Self { builder: self.builder.basic_auth(username, Some(password)), ..self }
    }

    pub fn header<K: IntoHeaderName>(self, key: K, value: &str) -> Self {
        Self { builder: self.builder.header(key, value), ..self }
    }

    pub fn param<K: AsRef<str>, V: ToString>(self, key: K, value: V) -> Self {
        Self { builder: self.builder.param(key, value), ..self }
    }

    /// Serializes `body` as the JSON payload of this request
    pub fn json<J: Serialize>(self, body: &J) -> Result<Self> {
        let bytes = serde_json::to_vec(body).map_err(Error::Encode)?;
        Ok(Self { body: Some(bytes), ..self })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn send(self) -> Result<Response> {
        log::debug!("{} {}", self.method, self.url);
        let response = match self.body {
            Some(bytes) => self.builder.bytes(bytes).send()?,
            None => self.builder.send()?,
        };
        log::debug!("{} {} -> {}", self.method, self.url, response.status());
        Ok(Response::new(response))
    }
}
