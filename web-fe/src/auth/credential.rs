use super::AuthError;
use crate::config::AuthConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionCredential {
    pub project_url: String,
    pub api_key: String,
}

impl ConnectionCredential {
    /// Trims both fields, then checks presence before the scheme. The first
    /// failing check is reported.
    pub fn validate(url: &str, api_key: &str, config: &AuthConfig) -> Result<Self, AuthError> {
        let project_url = url.trim();
        let api_key = api_key.trim();

        if project_url.is_empty() || api_key.is_empty() {
            return Err(AuthError::MissingFields);
        }
        if !project_url.starts_with(config.url_prefix) {
            return Err(AuthError::InvalidScheme);
        }

        Ok(Self {
            project_url: project_url.to_string(),
            api_key: api_key.to_string(),
        })
    }
}
