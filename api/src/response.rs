pub use attohttpc::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ApiError, Error, Result};

/// Shape of the documented error payload
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

/// What a non-200 body turned out to be
#[derive(Debug)]
enum ErrorBody {
    Envelope(ApiError),
    Unstructured(StatusCode),
}

impl ErrorBody {
    fn parse(status: StatusCode, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => Self::Envelope(envelope.error),
            Err(_) => Self::Unstructured(status),
        }
    }

    fn into_api_error(self) -> ApiError {
        match self {
            Self::Envelope(err) => err,
            Self::Unstructured(status) => {
                log::trace!("No error envelope in {status} response, using the status line");
                ApiError::from_status(status)
            }
        }
    }
}

/// Wraps the 3rd party http client Response
pub struct Response {
    response: attohttpc::Response,
}

impl Response {
    pub fn new(response: attohttpc::Response) -> Self {
        Self { response }
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Parses a 200 body into `J`, anything else into an [`Error::Api`]
    pub fn decode<J: DeserializeOwned>(self) -> Result<J> {
        let body = self.success_body()?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// For calls where no payload is expected; the body is read but never parsed
    pub fn decode_empty(self) -> Result<()> {
        self.success_body().map(|_| ())
    }

    fn success_body(self) -> Result<Vec<u8>> {
        let status = self.response.status();
        let body = self.response.bytes()?;
        if status == StatusCode::OK {
            Ok(body)
        } else {
            Err(Error::Api(ErrorBody::parse(status, &body).into_api_error()))
        }
    }
}
