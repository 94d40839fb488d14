pub mod client;
pub mod clients;
pub mod credential;
pub mod endpoint;
mod error;
pub mod registry;
pub mod reports;
pub mod request;
pub mod response;
pub mod time_entries;
pub mod workspaces;

pub use client::Client;
pub use credential::ApiKey;
pub use endpoint::Endpoint;
pub use error::{ApiError, Error};
pub use registry::Resources;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const USER_AGENT: &str = concat!("toggl-rs/", env!("CARGO_PKG_VERSION"));

pub type Result<T> = std::result::Result<T, Error>;
