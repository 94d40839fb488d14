use serde::{de::DeserializeOwned, Deserialize, Serialize};
use toggl_api::ApiKey;

use crate::commands::{Error, Result};

pub const APP_NAME: &str = "toggl-cli";
/// Takes precedence over the stored token
pub const TOKEN_ENV: &str = "TOGGL_API_TOKEN";

fn load<T: Serialize + DeserializeOwned + Default>(name: &str) -> Result<T> {
    Ok(confy::load(APP_NAME, name)?)
}

fn store<T: Serialize>(name: &str, cfg: T) -> Result<()> {
    Ok(confy::store(APP_NAME, name, cfg)?)
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct Settings {
    pub api_token: Option<String>,
    pub workspace_id: Option<u64>,
}

impl Settings {
    const CONFIG_NAME: &'static str = "settings";

    pub fn load() -> Result<Self> {
        load::<Self>(Self::CONFIG_NAME)
    }

    pub fn store(&self) -> Result<()> {
        store(Self::CONFIG_NAME, self)
    }

    /// Resolves the credential from the environment or the stored token
    pub fn api_key(&self) -> Result<ApiKey> {
        self.api_key_with(std::env::var(TOKEN_ENV).ok())
    }

    fn api_key_with(&self, env_token: Option<String>) -> Result<ApiKey> {
        env_token
            .filter(|token| !token.is_empty())
            .or_else(|| self.api_token.clone())
            .map(|token| ApiKey::from_token(&token))
            .ok_or(Error::MissingToken)
    }

    pub fn workspace_id(&self, flag: Option<u64>) -> Result<u64> {
        flag.or(self.workspace_id).ok_or(Error::MissingWorkspace)
    }
}
