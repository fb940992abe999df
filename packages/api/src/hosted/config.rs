//! Hosted backend configuration from environment variables.

/// Base URL of the hosted service, e.g. `https://xyz.example.co`.
pub const URL_VAR: &str = "SITE_BACKEND_URL";
/// Public (anonymous) API key sent with every request.
pub const KEY_VAR: &str = "SITE_BACKEND_KEY";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostedConfig {
    pub url: String,
    pub anon_key: String,
}

impl HostedConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Read from the process environment (and `.env`) on native targets, falling
    /// back to values baked in at build time, which is all a WASM bundle has.
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        Ok(Self::new(read_var(URL_VAR)?, read_var(KEY_VAR)?))
    }
}

fn read_var(name: &'static str) -> Result<String, ConfigError> {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(value) = std::env::var(name) {
        if !value.trim().is_empty() {
            return Ok(value);
        }
    }

    let baked = match name {
        URL_VAR => option_env!("SITE_BACKEND_URL"),
        KEY_VAR => option_env!("SITE_BACKEND_KEY"),
        _ => None,
    };
    baked
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = HostedConfig::new("https://db.example.org//", "anon");
        assert_eq!(config.url, "https://db.example.org");
    }

    #[test]
    fn test_missing_message_names_variable() {
        assert_eq!(ConfigError::Missing(URL_VAR).to_string(), "SITE_BACKEND_URL not set");
    }
}
