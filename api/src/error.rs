use attohttpc::StatusCode;
use serde::Deserialize;

/// Failure reported by the Toggl service itself
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
}

impl ApiError {
    /// Fallback for error bodies which are not in the documented envelope
    pub fn from_status(status: StatusCode) -> Self {
        let message = match status.canonical_reason() {
            Some(reason) => format!("{} {reason}", status.as_u16()),
            None => status.as_u16().to_string(),
        };
        Self { code: i32::from(status.as_u16()), message }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

#[derive(Debug)]
pub enum Error {
    DuplicateResource(String),
    UnknownResource(String),
    InvalidRequest(String),
    Transport(attohttpc::Error),
    Decode(serde_json::Error),
    Encode(serde_json::Error),
    Api(ApiError),
}

impl Error {
    /// Returns the service error, if this is one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateResource(name) => write!(f, "{name} is already used"),
            Self::UnknownResource(name) => write!(f, "{name} is not registered as a resource"),
            Self::InvalidRequest(err) => write!(f, "Invalid request: {err}"),
            Self::Transport(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "Unexpected payload: {err}"),
            Self::Encode(err) => write!(f, "Could not encode request body: {err}"),
            Self::Api(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Decode(err) | Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<attohttpc::Error> for Error {
    fn from(value: attohttpc::Error) -> Self {
        Error::Transport(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Decode(value)
    }
}

impl From<url::ParseError> for Error {
    fn from(value: url::ParseError) -> Self {
        Error::InvalidRequest(format!("{value}"))
    }
}

impl From<ApiError> for Error {
    fn from(value: ApiError) -> Self {
        Error::Api(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_synthesizes_errors_from_status() {
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY);
        assert_eq!(err.code, 502);
        assert_eq!(err.message, "502 Bad Gateway");
    }

    #[test]
    fn it_formats_resource_errors() {
        assert_eq!(Error::DuplicateResource("clients".into()).to_string(), "clients is already used");
        assert_eq!(
            Error::UnknownResource("tags".into()).to_string(),
            "tags is not registered as a resource"
        );
    }

    #[test]
    fn it_exposes_api_errors() {
        let err: Error = ApiError { code: 403, message: "Forbidden".into() }.into();
        assert_eq!(err.api_error().map(|e| e.code), Some(403));
        assert!(Error::UnknownResource("x".into()).api_error().is_none());
    }
}
