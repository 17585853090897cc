use std::time::Duration;

use anyhow::{Context, Result};

/// Deployment-provided settings for the account-creation endpoint.
///
/// Built once from the environment and injected into the submission
/// controller; nothing in the library reads the environment on its own.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Path prefix of the users endpoints, e.g. `/users/`.
    pub users_endpoint: String,
    /// Upper bound on one submission round-trip.
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: std::env::var("UNIFY_SERVER_URL")
                .context("UNIFY_SERVER_URL not set")?,
            users_endpoint: std::env::var("UNIFY_USERS_ENDPOINT")
                .unwrap_or_else(|_| "/users/".to_string()),
            request_timeout: Duration::from_secs(
                std::env::var("UNIFY_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
        })
    }

    /// Full URL of the create-user operation.
    pub fn create_user_url(&self) -> String {
        format!("{}{}create-user", self.base_url, self.users_endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("UNIFY_SERVER_URL");
        std::env::remove_var("UNIFY_USERS_ENDPOINT");
        std::env::remove_var("UNIFY_REQUEST_TIMEOUT_SECS");
    }

    // ==================== from_env Tests ====================

    #[test]
    #[serial]
    fn test_from_env_requires_server_url() {
        clear_env();
        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("UNIFY_SERVER_URL"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("UNIFY_SERVER_URL", "https://api.example.com");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.users_endpoint, "/users/");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("UNIFY_SERVER_URL", "http://localhost:3000");
        std::env::set_var("UNIFY_USERS_ENDPOINT", "/api/users/");
        std::env::set_var("UNIFY_REQUEST_TIMEOUT_SECS", "5");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.users_endpoint, "/api/users/");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_unparseable_timeout() {
        clear_env();
        std::env::set_var("UNIFY_SERVER_URL", "http://localhost:3000");
        std::env::set_var("UNIFY_REQUEST_TIMEOUT_SECS", "soon");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    // ==================== URL Format Tests ====================

    #[test]
    fn test_create_user_url_format() {
        let config = Config {
            base_url: "https://api.example.com".to_string(),
            users_endpoint: "/users/".to_string(),
            request_timeout: Duration::from_secs(30),
        };
        assert_eq!(
            config.create_user_url(),
            "https://api.example.com/users/create-user"
        );
    }
}
