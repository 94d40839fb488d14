/// Password Toggl expects when authenticating with a bare API token
pub const API_SECRET: &str = "api_token";

/// Token pair sent as basic auth credentials on every request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey {
    token: String,
    secret: String,
}

impl ApiKey {
    pub fn new(token: &str, secret: &str) -> Self {
        Self { token: token.to_owned(), secret: secret.to_owned() }
    }

    /// Uses the fixed `api_token` password
    pub fn from_token(token: &str) -> Self {
        Self::new(token, API_SECRET)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_uses_the_fixed_secret_for_tokens() {
        let key = ApiKey::from_token("my-token");
        assert_eq!(key.token(), "my-token");
        assert_eq!(key.secret(), "api_token");
    }
}
